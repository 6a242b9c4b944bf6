//! Load report types
//!
//! Loading a backing file never fails outright. Whatever could be parsed is
//! returned alongside the lines that were skipped and, if reading stopped
//! early or never started, the reason why.

/// A line of a backing file that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source file
    pub line: u64,
    /// Human-readable reason
    pub reason: String,
}

impl SkippedLine {
    pub fn new(line: u64, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Overall outcome of a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Every line became a record
    Complete,
    /// Some lines were skipped, or reading stopped part way
    Partial { skipped: usize },
    /// The source could not be opened at all
    Unavailable,
}

/// Records loaded from one backing file
#[derive(Debug, Clone)]
pub struct LoadReport<T> {
    /// Records in file order
    pub records: Vec<T>,
    /// Lines that were skipped
    pub skipped: Vec<SkippedLine>,
    /// Error that prevented reading the rest of the source
    pub source_error: Option<String>,
    opened: bool,
}

impl<T> Default for LoadReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            source_error: None,
            opened: true,
        }
    }
}

impl<T> LoadReport<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for a source that could not be opened
    pub fn unavailable(error: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            source_error: Some(error.into()),
            opened: false,
        }
    }

    pub fn add_record(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn add_skipped(&mut self, line: u64, reason: impl Into<String>) {
        self.skipped.push(SkippedLine::new(line, reason));
    }

    /// Stop reading; records gathered so far are kept
    pub fn abort(&mut self, error: impl Into<String>) {
        self.source_error = Some(error.into());
    }

    pub fn status(&self) -> LoadStatus {
        if !self.opened {
            LoadStatus::Unavailable
        } else if self.skipped.is_empty() && self.source_error.is_none() {
            LoadStatus::Complete
        } else {
            LoadStatus::Partial {
                skipped: self.skipped.len(),
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == LoadStatus::Complete
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}
