use clap::Parser;
use std::path::PathBuf;

use crate::aggregator::ImportOptions;

#[derive(Parser, Debug)]
#[command(
    name = "mailtally",
    about = "Count customer email addresses per domain in a CSV file",
    version,
    long_about = None
)]
pub struct Args {
    /// CSV file with a header row
    pub file: PathBuf,

    /// Name of the column holding email addresses
    #[arg(short, long, default_value = "email")]
    pub field: String,

    /// Skip rows with an invalid email instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Skip rows with an already counted email instead of failing
    #[arg(long)]
    pub skip_duplicates: bool,

    /// Number of most common domains to display
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions::default()
            .skip_invalid_emails(self.skip_invalid)
            .skip_duplicate_emails(self.skip_duplicates)
    }
}
