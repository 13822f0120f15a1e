use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

impl DomainCount {
    pub fn new(domain: impl Into<String>, count: u64) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    /// Data rows processed, header excluded.
    pub records: usize,
    pub skipped_invalid: usize,
    pub skipped_duplicates: usize,
}

impl ImportStats {
    pub fn skipped(&self) -> usize {
        self.skipped_invalid + self.skipped_duplicates
    }
}

/// Outcome of a successful import. `domains` is sorted by domain name and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainReport {
    pub domains: Vec<DomainCount>,
    pub stats: ImportStats,
}

impl DomainReport {
    pub fn total_emails(&self) -> u64 {
        self.domains.iter().map(|d| d.count).sum()
    }

    /// The `n` most common domains, ties broken by domain name.
    pub fn top(&self, n: usize) -> Vec<&DomainCount> {
        let mut sorted: Vec<&DomainCount> = self.domains.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
        sorted.truncate(n);
        sorted
    }
}
