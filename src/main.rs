use std::env;
use ysld::{StyleParser, YsldError};

/// Parses a style document and prints the resulting model as JSON.
fn main() -> Result<(), YsldError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Parses a style document and prints the style model.");
        eprintln!();
        eprintln!("Usage: {} <path/to/style.json>", args[0]);
        eprintln!();
        eprintln!("Set RUST_LOG=debug to trace the walk.");
        std::process::exit(1);
    }

    let outcome = ysld::parse_file(&StyleParser::new(), &args[1])?;
    log::info!("Parsed '{}' with {} warning(s)", args[1], outcome.warnings.len());
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    println!("{}", serde_json::to_string_pretty(&outcome.document)?);
    Ok(())
}
