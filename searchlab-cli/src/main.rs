use clap::{Parser, Subcommand};
use colored::Colorize;
use searchlab::timing::{measure_all, Measurement};
use searchlab::{visualize, CompareConfig, LabError, LabResult};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod dataset;
mod summary;

/// The fixed array used for the visualization walkthrough
const DEMO_SEQUENCE: [i64; 11] = [2, 5, 8, 12, 16, 23, 38, 45, 56, 72, 91];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file with comparison defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through binary search on a small demo array
    Visualize {
        /// Value to look for
        #[arg(short, long)]
        target: i64,
    },

    /// Compare all four algorithms on a generated sorted array
    Compare {
        /// Number of elements to generate
        #[arg(short, long)]
        size: Option<usize>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Scale of the value range elements are drawn from
        #[arg(long)]
        span_factor: Option<i64>,
    },

    /// Compare all four algorithms on your own numbers
    Custom {
        /// Whitespace-separated integers (sorted for you)
        values: String,

        /// Value to look for
        #[arg(short, long)]
        target: i64,
    },
}

fn main() -> LabResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    run()
}

fn run() -> LabResult<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CompareConfig::load_from(path)?,
        None => CompareConfig::load()?,
    };

    match cli.command {
        Some(Commands::Visualize { target }) => {
            walk_through(target);
            Ok(())
        }
        Some(Commands::Compare {
            size,
            seed,
            span_factor,
        }) => {
            if let Some(size) = size {
                config.size = size;
            }
            if let Some(seed) = seed {
                config.seed = Some(seed);
            }
            if let Some(span_factor) = span_factor {
                config.span_factor = span_factor;
            }
            config.validate()?;
            compare_generated(&config);
            Ok(())
        }
        Some(Commands::Custom { values, target }) => {
            let seq = parse_sequence(&values)?;
            println!("Sorted array: {seq:?}");
            compare(&seq, target);
            Ok(())
        }
        None => menu_loop(config),
    }
}

fn menu_loop(config: CompareConfig) -> LabResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    print_header("Search Algorithm Comparison");

    loop {
        print_menu();
        prompt("Choice: ")?;
        let Some(choice) = next_line(&mut input)? else {
            break;
        };

        match choice.trim() {
            "1" => {
                if let Some(target) = read_target(&mut input)? {
                    walk_through(target);
                }
            }
            "2" => {
                let mut run_config = config.clone();
                prompt(&format!("Array size (default {}): ", run_config.size))?;
                let Some(line) = next_line(&mut input)? else {
                    break;
                };
                // Anything unparsable keeps the configured default.
                if let Ok(size) = line.trim().parse::<usize>() {
                    run_config.size = size;
                }
                match run_config.validate() {
                    Ok(()) => compare_generated(&run_config),
                    Err(e) => warn(&e.to_string()),
                }
            }
            "3" => {
                prompt("Numbers, separated by spaces: ")?;
                let Some(line) = next_line(&mut input)? else {
                    break;
                };
                match parse_sequence(&line) {
                    Ok(seq) => {
                        println!("Sorted array: {seq:?}");
                        if let Some(target) = read_target(&mut input)? {
                            compare(&seq, target);
                        }
                    }
                    Err(e) => warn(&e.to_string()),
                }
            }
            "4" => {
                println!("\nGoodbye!");
                break;
            }
            other => {
                let err = LabError::invalid_selection(other);
                warn(&format!("{err}. Please choose 1, 2, 3, or 4."));
            }
        }
    }

    Ok(())
}

/// Prompts for the target value; a bad number warns and returns `None`
/// so the menu re-prompts.
fn read_target(
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> LabResult<Option<i64>> {
    prompt("Number to find: ")?;
    let Some(line) = next_line(input)? else {
        return Ok(None);
    };
    match parse_number(&line) {
        Ok(target) => Ok(Some(target)),
        Err(_) => {
            warn("Please enter a number!");
            Ok(None)
        }
    }
}

fn next_line(input: &mut impl Iterator<Item = io::Result<String>>) -> LabResult<Option<String>> {
    match input.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn prompt(text: &str) -> LabResult<()> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}

fn warn(message: &str) {
    println!("{}", message.yellow());
}

fn parse_number(input: &str) -> LabResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| LabError::invalid_number(trimmed))
}

fn parse_sequence(input: &str) -> LabResult<Vec<i64>> {
    let mut values = input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| LabError::invalid_number(token))
        })
        .collect::<LabResult<Vec<i64>>>()?;

    if values.is_empty() {
        return Err(LabError::EmptySequence);
    }

    values.sort_unstable();
    Ok(values)
}

/// Menu item 1: render the binary-search walkthrough over the demo
/// array, then compare all four algorithms on it.
fn walk_through(target: i64) {
    let seq = &DEMO_SEQUENCE[..];
    println!("\nArray: {seq:?}");

    println!("\n[{}]", "Binary search walkthrough".blue());
    for line in visualize::render(seq, target) {
        println!("  {line}");
    }

    println!("\n--- All algorithms ---");
    compare(seq, target);
}

/// Menu item 2: generate a sorted array per `config` and compare, with
/// the ranked bar summary at the end.
fn compare_generated(config: &CompareConfig) {
    let data = dataset::generate(config);
    println!("\nArray size: {}", data.values.len());
    println!("Target value: {}", data.target);

    let measurements = measure_all(&data.values, data.target);
    for m in &measurements {
        print_measurement(m);
    }

    println!("\n--- Comparison summary ---");
    for line in summary::render(&measurements) {
        println!("{line}");
    }
}

fn compare(seq: &[i64], target: i64) {
    for m in measure_all(seq, target) {
        print_measurement(&m);
    }
}

fn print_measurement(m: &Measurement) {
    println!("\n[{}]", m.algorithm.to_string().blue());
    match m.outcome.index {
        Some(index) => {
            println!("  Found at index: {index}");
            println!("  Comparisons: {}", m.outcome.comparisons);
            println!("  Elapsed: {}", humantime::format_duration(m.elapsed));
        }
        None => {
            println!("  Result: {}", "not found".red());
            println!("  Comparisons: {}", m.outcome.comparisons);
        }
    }
}

fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(50));
    println!("  {title}");
    println!("{}", "=".repeat(50));
}

fn print_menu() {
    println!("\n{}", "-".repeat(50));
    println!("Menu:");
    println!("  1. Visualize binary search on a small array");
    println!("  2. Compare performance on a large array");
    println!("  3. Enter your own array");
    println!("  4. Quit");
    println!("{}", "-".repeat(50));
}
