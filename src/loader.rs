use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{LoadError, ShapeError};
use crate::shape::{Shape, ShapeKind};

/// Reads a shape file: a count line followed by `type height parameter` lines.
pub fn load_shapes<P: AsRef<Path>>(path: P) -> Result<Vec<Shape>, LoadError> {
    let file = File::open(path.as_ref())?;
    debug!("Reading shapes from {}", path.as_ref().display());
    parse_shapes(BufReader::new(file))
}

/// Parses shape lines from `reader`. Malformed lines, including ones that are
/// not valid UTF-8, are skipped with a warning; a missing or malformed count
/// line is an error.
pub fn parse_shapes<R: BufRead>(reader: R) -> Result<Vec<Shape>, LoadError> {
    let mut lines = reader.split(b'\n');

    let count_line = match lines.next() {
        Some(line) => decode(&line?),
        None => return Err(LoadError::Empty),
    };
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidCount(count_line.trim().to_string()))?;

    // the count is untrusted, don't let it drive the allocation
    let mut shapes = Vec::with_capacity(count.min(1 << 20));
    for i in 0..count {
        let line = match lines.next() {
            Some(line) => decode(&line?),
            None => {
                warn!("Expected {} shapes but reached end of file at line {}", count, i + 1);
                break;
            }
        };

        match parse_shape(line.trim()) {
            Ok(shape) => shapes.push(shape),
            Err(reason) => warn!("Skipping shape line {}: {}", i + 2, reason),
        }
    }

    info!("Loaded {} out of {} expected shapes", shapes.len(), count);
    Ok(shapes)
}

// invalid bytes become U+FFFD and fail parsing like any other bad field
fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Parses a single `type height parameter` line. Fields past the third are ignored.
pub fn parse_shape(line: &str) -> Result<Shape, ShapeError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(ShapeError::MissingFields { found: parts.len() });
    }

    let kind: ShapeKind = parts[0].parse()?;
    let height = parse_number("height", parts[1])?;
    let parameter = parse_number("parameter", parts[2])?;

    Shape::new(kind, height, parameter)
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, ShapeError> {
    value.parse().map_err(|_| ShapeError::InvalidNumber { field, value: value.to_string() })
}
