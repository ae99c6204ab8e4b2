use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cone,
    Cylinder,
    OctagonalPrism,
    PentagonalPrism,
    SquarePrism,
    TriangularPrism,
    Pyramid,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cone => "Cone",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::OctagonalPrism => "OctagonalPrism",
            ShapeKind::PentagonalPrism => "PentagonalPrism",
            ShapeKind::SquarePrism => "SquarePrism",
            ShapeKind::TriangularPrism => "TriangularPrism",
            ShapeKind::Pyramid => "Pyramid",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cone" => Ok(ShapeKind::Cone),
            "cylinder" => Ok(ShapeKind::Cylinder),
            "octagonalprism" => Ok(ShapeKind::OctagonalPrism),
            "pentagonalprism" => Ok(ShapeKind::PentagonalPrism),
            "squareprism" => Ok(ShapeKind::SquarePrism),
            "triangularprism" => Ok(ShapeKind::TriangularPrism),
            "pyramid" => Ok(ShapeKind::Pyramid),
            _ => Err(ShapeError::UnknownKind(s.to_string())),
        }
    }
}

/// A solid standing on its base. `parameter` is the radius for cones and
/// cylinders and the base edge length for everything else.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub height: f64,
    pub parameter: f64,
}

impl Shape {
    pub fn new(kind: ShapeKind, height: f64, parameter: f64) -> Result<Shape, ShapeError> {
        // `!(x > 0.0)` also rejects NaN
        if !(height > 0.0 && parameter > 0.0) || !height.is_finite() || !parameter.is_finite() {
            return Err(ShapeError::NonPositiveDimension { height, parameter });
        }
        Ok(Shape { kind, height, parameter })
    }

    pub fn base_area(&self) -> f64 {
        let p = self.parameter;
        match self.kind {
            ShapeKind::Cone | ShapeKind::Cylinder => PI * p * p,
            ShapeKind::OctagonalPrism => 2.0 * (1.0 + 2f64.sqrt()) * p * p,
            ShapeKind::PentagonalPrism => 5.0 * p * p * 54f64.to_radians().tan() / 4.0,
            ShapeKind::SquarePrism | ShapeKind::Pyramid => p * p,
            ShapeKind::TriangularPrism => 3f64.sqrt() / 4.0 * p * p,
        }
    }

    pub fn volume(&self) -> f64 {
        match self.kind {
            ShapeKind::Cone | ShapeKind::Pyramid => self.base_area() * self.height / 3.0,
            _ => self.base_area() * self.height,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [height={:.3}, base area={:.3}, volume={:.3}]",
            self.kind.name(),
            self.height,
            self.base_area(),
            self.volume()
        )
    }
}

/// The property shapes are ordered by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompareType {
    Height,
    BaseArea,
    Volume,
}

impl CompareType {
    pub fn key(self, shape: &Shape) -> f64 {
        match self {
            CompareType::Height => shape.height,
            CompareType::BaseArea => shape.base_area(),
            CompareType::Volume => shape.volume(),
        }
    }

    /// Numeric comparison of the key. The sort algorithms put greater
    /// elements first, so this yields a descending result.
    pub fn comparator(self) -> impl Fn(&Shape, &Shape) -> Ordering {
        move |a, b| self.key(a).total_cmp(&self.key(b))
    }

    pub fn description(self) -> &'static str {
        match self {
            CompareType::Height => "Height (descending)",
            CompareType::BaseArea => "Base Area (descending)",
            CompareType::Volume => "Volume (descending)",
        }
    }
}

impl FromStr for CompareType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "height" => Ok(CompareType::Height),
            "a" | "area" => Ok(CompareType::BaseArea),
            "v" | "volume" => Ok(CompareType::Volume),
            _ => Err(ShapeError::UnknownCompareType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * a.abs().max(1.0)
    }

    #[test]
    fn test_geometry() {
        let cases = [
            (ShapeKind::Cone, PI * 4.0, PI * 4.0 * 3.0 / 3.0),
            (ShapeKind::Cylinder, PI * 4.0, PI * 4.0 * 3.0),
            (ShapeKind::OctagonalPrism, 8.0 * (1.0 + 2f64.sqrt()), 24.0 * (1.0 + 2f64.sqrt())),
            (ShapeKind::SquarePrism, 4.0, 12.0),
            (ShapeKind::TriangularPrism, 3f64.sqrt(), 3.0 * 3f64.sqrt()),
            (ShapeKind::Pyramid, 4.0, 4.0),
        ];
        for (kind, area, volume) in cases {
            let shape = Shape::new(kind, 3.0, 2.0).unwrap();
            assert!(close(shape.base_area(), area), "{:?} area {}", kind, shape.base_area());
            assert!(close(shape.volume(), volume), "{:?} volume {}", kind, shape.volume());
        }
    }

    #[test]
    fn test_pentagon() {
        // regular pentagon with unit edge
        let shape = Shape::new(ShapeKind::PentagonalPrism, 2.0, 1.0).unwrap();
        assert!((shape.base_area() - 1.720477400588967).abs() < 1e-12);
        assert!((shape.volume() - 3.440954801177934).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        for (h, p) in [(0.0, 1.0), (1.0, -2.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            assert!(Shape::new(ShapeKind::Cone, h, p).is_err(), "{} {}", h, p);
        }
    }

    #[test]
    fn test_kind_case_insensitive() {
        assert_eq!("octagonalprism".parse::<ShapeKind>(), Ok(ShapeKind::OctagonalPrism));
        assert_eq!("CYLINDER".parse::<ShapeKind>(), Ok(ShapeKind::Cylinder));
        assert!("Sphere".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_display() {
        let shape = Shape::new(ShapeKind::SquarePrism, 2.0, 3.0).unwrap();
        assert_eq!(shape.to_string(), "SquarePrism [height=2.000, base area=9.000, volume=18.000]");
    }

    #[test]
    fn test_compare_type() {
        assert_eq!("V".parse::<CompareType>(), Ok(CompareType::Volume));
        assert_eq!("area".parse::<CompareType>(), Ok(CompareType::BaseArea));
        assert_eq!("h".parse::<CompareType>(), Ok(CompareType::Height));
        assert!("w".parse::<CompareType>().is_err());

        let tall = Shape::new(ShapeKind::Pyramid, 10.0, 1.0).unwrap();
        let wide = Shape::new(ShapeKind::Cylinder, 1.0, 5.0).unwrap();
        assert_eq!(CompareType::Height.comparator()(&tall, &wide), Ordering::Greater);
        assert_eq!(CompareType::BaseArea.comparator()(&tall, &wide), Ordering::Less);
    }
}
