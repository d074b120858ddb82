//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::calendar::normalize;
use chatlens::cli::{Args, Report};
use chatlens::{ChatParser, ChatlensError};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let args = <Args as ClapParser>::parse();

    let config = args.analyzer_config()?;
    let filter = args.filter();

    let parse_start = Instant::now();
    let parser = ChatParser::new();
    let records = normalize(parser.parse(&args.input)?);
    let parse_time = parse_start.elapsed();

    let report = Report::build(&filter, &records, &config, args.top_words);

    if args.json {
        // Machine-readable mode: the report is the only output.
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("👤 Scope:   {}", report.scope);
    println!(
        "⏳ Parsed:  {} records ({:.2}s)",
        records.len(),
        parse_time.as_secs_f64()
    );
    println!();
    print!("{}", report.render_text());

    Ok(())
}
