use std::error::Error;
use std::path::PathBuf;
use std::{env, process, thread};

use clap::Parser;
use log::{debug, error};

use shapesort::config::{DEFAULT_LOG_LEVEL, SORT_STACK_SIZE};
use shapesort::loader::load_shapes;
use shapesort::report::{print_checkpoints, print_summary};
use shapesort::{Algorithm, CompareType, ShapeError, SortError};

const EXAMPLES: &str = "\
Flags are case-insensitive, order-insensitive and take their value without a space.

Examples:
  shapesort -fshapes1.txt -tv -sb
  shapesort -ta -sq -f\"res/shapes1.txt\"
  shapesort -fdata.txt -tarea -smerge";

/// Sorts geometric shapes from a file and reports how long it took.
#[derive(Parser, Debug)]
#[command(name = "shapesort", version, after_help = EXAMPLES)]
struct Args {
    /// Path to the shapes data file
    #[arg(short = 'f', value_name = "FILE", value_parser = parse_filename)]
    file: PathBuf,

    /// Compare by: h|height, a|area (base area), v|volume
    #[arg(short = 't', value_name = "COMPARE", value_parser = parse_compare)]
    compare: CompareType,

    /// Algorithm: b|bubble, s|selection, i|insertion, m|merge, q|quick, h|heap|z
    #[arg(short = 's', value_name = "ALGORITHM", value_parser = parse_algorithm)]
    algorithm: Algorithm,
}

fn parse_filename(value: &str) -> Result<PathBuf, String> {
    let trimmed = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    if trimmed.trim().is_empty() {
        return Err("file name is empty".to_string());
    }
    Ok(PathBuf::from(trimmed))
}

fn parse_compare(value: &str) -> Result<CompareType, ShapeError> {
    value.parse()
}

fn parse_algorithm(value: &str) -> Result<Algorithm, SortError> {
    value.parse()
}

/// Lower-cases the letter of `-f`, `-t` and `-s` so `-Fx` works like `-fx`.
fn normalize_flag(arg: String) -> String {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some('-'), Some(c)) if matches!(c, 'F' | 'T' | 'S') => {
            format!("-{}{}", c.to_ascii_lowercase(), chars.as_str())
        }
        _ => arg,
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut shapes = load_shapes(&args.file)?;
    if shapes.is_empty() {
        println!("No shapes loaded from file.");
        return Ok(());
    }
    println!("Loaded {} shapes from {}", shapes.len(), args.file.display());

    let algorithm = args.algorithm;
    let compare = args.compare;

    // quick sort can recurse once per element on ordered input
    let worker = thread::Builder::new()
        .name("sort".to_string())
        .stack_size(SORT_STACK_SIZE)
        .spawn(move || {
            let elapsed = algorithm.sort_timed(&mut shapes, compare.comparator());
            (shapes, elapsed)
        })?;
    let (shapes, elapsed) = worker.join().map_err(|_| "sort worker panicked")?;

    print_summary(algorithm, compare, elapsed);
    print_checkpoints(&shapes);
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(DEFAULT_LOG_LEVEL)
        .parse_default_env()
        .init();

    let args = Args::parse_from(env::args().map(normalize_flag));
    debug!("{:?}", args);

    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}
