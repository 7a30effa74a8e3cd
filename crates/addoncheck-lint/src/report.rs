//! Report types for structured checker output.

use serde::{Deserialize, Serialize};

/// Severity level for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Diagnostic or advisory notes.
    Information,
    /// Likely mistakes, worth investigating.
    Warning,
    /// Breaks repository submission.
    Problem,
}

/// A single diagnostic produced by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Severity level.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Record {
    /// Creates a record with the given severity.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn problem(message: impl Into<String>) -> Self {
        Self::new(Severity::Problem, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn information(message: impl Into<String>) -> Self {
        Self::new(Severity::Information, message)
    }
}

/// Per-severity record counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of problem-level records.
    pub problem_count: usize,
    /// Number of warning-level records.
    pub warning_count: usize,
    /// Number of information-level records.
    pub information_count: usize,
}

/// Ordered, append-only collection of records.
///
/// Deserializing rebuilds the summary from the records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReportRecords")]
pub struct Report {
    records: Vec<Record>,
    summary: ReportSummary,
}

#[derive(Deserialize)]
struct ReportRecords {
    records: Vec<Record>,
}

impl From<ReportRecords> for Report {
    fn from(raw: ReportRecords) -> Self {
        let mut report = Report::new();
        for record in raw.records {
            report.add(record);
        }
        report
    }
}

impl Report {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and updates the summary.
    pub fn add(&mut self, record: Record) {
        match record.severity {
            Severity::Information => self.summary.information_count += 1,
            Severity::Warning => self.summary.warning_count += 1,
            Severity::Problem => self.summary.problem_count += 1,
        }
        self.records.push(record);
    }

    /// Appends every record of another report, keeping its order.
    pub fn merge(&mut self, other: Report) {
        for record in other.records {
            self.add(record);
        }
    }

    /// Records in the order they were added.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records of a single severity, in order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.severity == severity)
    }

    pub fn summary(&self) -> &ReportSummary {
        &self.summary
    }

    /// Returns true if any problem was recorded.
    pub fn has_problems(&self) -> bool {
        self.summary.problem_count > 0
    }

    /// Returns true if any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        self.summary.warning_count > 0
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
