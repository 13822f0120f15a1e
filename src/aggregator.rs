use std::collections::{HashMap, HashSet};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::email::extract_domain;
use crate::error::{ImportError, Result};
use crate::stats::{DomainCount, DomainReport, ImportStats};

/// One CSV record, header included.
pub type Row = Vec<String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Ignore rows whose email is not valid instead of failing.
    pub skip_invalid_emails: bool,
    /// Ignore rows whose email was already counted instead of failing.
    pub skip_duplicate_emails: bool,
}

impl ImportOptions {
    pub fn skip_invalid_emails(mut self, skip: bool) -> Self {
        self.skip_invalid_emails = skip;
        self
    }

    pub fn skip_duplicate_emails(mut self, skip: bool) -> Self {
        self.skip_duplicate_emails = skip;
        self
    }
}

/// Counts unique, valid email addresses per domain for a single import run.
#[derive(Debug)]
pub struct DomainAggregator {
    email_field: String,
    options: ImportOptions,
    column: usize,
    width: usize,
    line: usize,
    seen_emails: HashSet<String>,
    domain_counts: HashMap<String, u64>,
    stats: ImportStats,
}

impl DomainAggregator {
    pub fn new(email_field: impl Into<String>, options: ImportOptions) -> Self {
        Self {
            email_field: email_field.into(),
            options,
            column: 0,
            width: 0,
            line: 0,
            seen_emails: HashSet::new(),
            domain_counts: HashMap::new(),
            stats: ImportStats::default(),
        }
    }

    /// Finds the email column in `header`. The first exact match wins.
    pub fn resolve(&mut self, header: &[String]) -> Result<usize> {
        self.line = 1;
        let column = header
            .iter()
            .position(|name| *name == self.email_field)
            .ok_or_else(|| ImportError::FieldNotFound {
                field: self.email_field.clone(),
            })?;

        self.column = column;
        self.width = header.len();
        debug!(
            action = "resolve",
            component = "aggregator",
            field = %self.email_field,
            column,
            width = self.width,
            "Resolved email column"
        );
        Ok(column)
    }

    pub fn process_row(&mut self, row: &[String], line: usize) -> Result<()> {
        self.line = line;

        if row.len() != self.width {
            return Err(ImportError::MalformedRecord {
                line,
                expected: self.width,
                found: row.len(),
            });
        }
        self.stats.records += 1;

        let email = row[self.column].as_str();

        if self.seen_emails.contains(email) {
            if self.options.skip_duplicate_emails {
                self.stats.skipped_duplicates += 1;
                debug!(action = "skip", component = "aggregator", line, email, "Duplicate email");
                return Ok(());
            }
            return Err(ImportError::DuplicateEmail {
                line,
                column: self.column,
                email: email.to_string(),
            });
        }

        let Some(domain) = extract_domain(email) else {
            if self.options.skip_invalid_emails {
                self.stats.skipped_invalid += 1;
                debug!(action = "skip", component = "aggregator", line, email, "Invalid email");
                return Ok(());
            }
            return Err(ImportError::InvalidEmail {
                line,
                column: self.column,
                email: email.to_string(),
            });
        };

        *self.domain_counts.entry(domain.to_string()).or_insert(0) += 1;
        self.seen_emails.insert(email.to_string());
        Ok(())
    }

    pub fn finalize(self) -> Result<DomainReport> {
        if self.domain_counts.is_empty() {
            return Err(ImportError::NoValidEmails);
        }

        let mut domains: Vec<DomainCount> = self
            .domain_counts
            .into_iter()
            .map(|(domain, count)| DomainCount { domain, count })
            .collect();
        domains.sort_by(|a, b| a.domain.cmp(&b.domain));

        if self.stats.skipped() > 0 {
            warn!(
                action = "complete",
                component = "aggregator",
                skipped_invalid = self.stats.skipped_invalid,
                skipped_duplicates = self.stats.skipped_duplicates,
                "Rows were skipped"
            );
        }

        Ok(DomainReport {
            domains,
            stats: self.stats,
        })
    }

    /// Consumes `rows`, the first of which is the header, and produces the report.
    /// Stops at the first error that the options don't allow skipping.
    pub fn run<I>(mut self, rows: I) -> Result<DomainReport>
    where
        I: IntoIterator<Item = Result<Row>>,
    {
        let start_time = Instant::now();
        info!(
            action = "start",
            component = "aggregator",
            field = %self.email_field,
            skip_invalid = self.options.skip_invalid_emails,
            skip_duplicates = self.options.skip_duplicate_emails,
            "Starting import"
        );

        let mut rows = rows.into_iter();
        let header = rows.next().ok_or(ImportError::EmptyInput)??;
        self.resolve(&header)?;

        for row in rows {
            let line = self.line + 1;
            self.process_row(&row?, line)?;
        }

        let report = self.finalize()?;
        info!(
            action = "complete",
            component = "aggregator",
            records = report.stats.records,
            unique_domains = report.domains.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Import completed"
        );
        Ok(report)
    }
}
