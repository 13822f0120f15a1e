use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

use crate::aggregator::{DomainAggregator, ImportOptions, Row};
use crate::error::{ImportError, Result};
use crate::stats::DomainReport;

/// Reads comma-separated rows one at a time. Field counts are left unchecked so that
/// short or long records reach the aggregator and get reported with their line.
pub struct CsvRows<R> {
    reader: csv::Reader<R>,
    record: StringRecord,
    line: usize,
}

impl<R: Read> CsvRows<R> {
    pub fn new(reader: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        Self {
            reader,
            record: StringRecord::new(),
            line: 0,
        }
    }
}

impl<R: Read> Iterator for CsvRows<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line += 1;
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(Ok(self.record.iter().map(str::to_string).collect())),
            Ok(false) => None,
            Err(source) => Some(Err(ImportError::Csv {
                line: self.line,
                source,
            })),
        }
    }
}

/// Counts emails per domain from CSV data with a header row.
pub fn import<R: Read>(reader: R, email_field: &str, options: ImportOptions) -> Result<DomainReport> {
    DomainAggregator::new(email_field, options).run(CsvRows::new(reader))
}

/// Same as [`import`], reading from the file at `path`.
pub fn import_from_file(
    path: &Path,
    email_field: &str,
    options: ImportOptions,
) -> Result<DomainReport> {
    info!(action = "open", component = "csv_file", file_path = ?path, "Opening input file");
    let file = File::open(path).map_err(|source| ImportError::open(path, source))?;
    import(BufReader::new(file), email_field, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DomainCount;

    const HEADER: &str = "first_name,last_name,email,gender,ip_address";

    fn csv(records: &[&str]) -> String {
        let mut data = String::from(HEADER);
        for record in records {
            data.push('\n');
            data.push_str(record);
        }
        data
    }

    #[test]
    fn imports_from_reader() {
        let data = csv(&[
            "Mildred,Hernandez,mhernandez@github.io,Female,38.194.51.128",
            "Bonnie,Ortiz,bortiz1@cyberchimps.com,Female,197.54.209.129",
            "Dennis,Henry,dhenry2@github.io,Male,155.75.186.217",
        ]);
        let report = import(data.as_bytes(), "email", ImportOptions::default()).unwrap();
        assert_eq!(
            report.domains,
            vec![
                DomainCount::new("cyberchimps.com", 1),
                DomainCount::new("github.io", 2),
            ]
        );
    }

    #[test]
    fn quoted_fields_keep_their_commas() {
        let data = csv(&["\"Hernandez, Mildred\",x,m@github.io,Female,1.1.1.1"]);
        let report = import(data.as_bytes(), "email", ImportOptions::default()).unwrap();
        assert_eq!(report.domains, vec![DomainCount::new("github.io", 1)]);
    }

    #[test]
    fn short_record_is_malformed() {
        let data = csv(&["Mildred,Hernandez"]);
        let err = import(data.as_bytes(), "email", ImportOptions::default()).unwrap_err();
        assert!(matches!(err, ImportError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn error_names_line_and_column() {
        let data = csv(&[
            "Mildred,Hernandez,ok@github.io,Female,38.194.51.128",
            "Mildred,Hernandez,mhernandezgithub.io,Female,38.194.51.128",
        ]);
        let err = import(data.as_bytes(), "email", ImportOptions::default()).unwrap_err();
        assert!(err.to_string().contains("line 3, column 2"));
    }

    #[test]
    fn empty_reader_is_empty_input() {
        let err = import("".as_bytes(), "email", ImportOptions::default()).unwrap_err();
        assert!(matches!(err, ImportError::EmptyInput));
    }

    #[test]
    fn invalid_utf8_is_reported_with_line() {
        let mut data = csv(&[]).into_bytes();
        data.extend_from_slice(b"\nMildred,Hernandez,\xff@github.io,Female,1.1.1.1");
        let err = import(data.as_slice(), "email", ImportOptions::default()).unwrap_err();
        assert!(matches!(err, ImportError::Csv { line: 2, .. }));
    }
}
