use serde::{Deserialize, Serialize};

/// One data row of the export, split into plain-text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    /// 1-based line number in the source file
    pub line_number: usize,
    pub fields: Vec<String>,
}

impl LevelRecord {
    pub fn new(line_number: usize, fields: Vec<String>) -> Self {
        Self {
            line_number,
            fields,
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Matched names in input row order.
    pub names: Vec<String>,
    pub rows_considered: usize,
    pub rows_skipped_short: usize,
}

impl FilterOutcome {
    pub fn rows_matched(&self) -> usize {
        self.names.len()
    }

    /// 以換行串接，最後一行不加換行
    pub fn render(&self) -> String {
        self.names.join("\n")
    }
}
