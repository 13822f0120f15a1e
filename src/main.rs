use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use mailtally::{import_from_file, report, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    let result = import_from_file(&args.file, &args.field, args.import_options())
        .with_context(|| format!("Failed to import {}", args.file.display()));

    match result {
        Ok(domain_report) => {
            if args.json {
                println!("{}", report::render_json(&domain_report)?);
            } else {
                print!("{}", report::render_report(&domain_report, args.top));
            }
            Ok(())
        }
        Err(e) => {
            error!(action = "import", component = "main", error = %format!("{e:#}"), "Import failed");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
