//! Column aliasing for CSV exports whose headers drift between versions.
//!
//! Every logical field is described by an ordered list of header spellings.
//! Lookup takes the first spelling that is present with a non-empty value.

use tracing::debug;

use crate::coerce::{DefaultReason, coerce_float, coerce_int};
use crate::error::{Result, ToolError};
use crate::io::csv_read::Row;

/// How a builder reacts when none of a column's spellings is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// Substitute empty text or zero for the absent column.
    #[default]
    Lenient,
    /// Fail the run with [`ToolError::MissingColumn`] for required columns.
    Strict,
}

/// Returns the first non-empty value among `candidates`, or `default` when
/// every spelling is absent or blank.
pub fn first_present<'a>(row: &'a Row, candidates: &[&str], default: &'a str) -> &'a str {
    candidates
        .iter()
        .filter_map(|column| row.get(column))
        .find(|value| !value.is_empty())
        .unwrap_or(default)
}

/// Like [`first_present`], but skips whitespace-only cells and returns the
/// match trimmed.
pub fn first_present_trimmed<'a>(row: &'a Row, candidates: &[&str], default: &'a str) -> &'a str {
    candidates
        .iter()
        .filter_map(|column| row.get(column))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(default)
}

/// Typed view over a [`Row`] that applies a [`ColumnPolicy`].
///
/// `text`, `trimmed`, `float` and `int` treat the column as required;
/// the `optional_*` variants never fail.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    row: &'a Row,
    policy: ColumnPolicy,
}

impl<'a> Fields<'a> {
    pub fn new(row: &'a Row, policy: ColumnPolicy) -> Self {
        Self { row, policy }
    }

    /// Untrimmed text of a required column.
    pub fn text(&self, candidates: &[&str]) -> Result<String> {
        self.require(candidates)?;
        Ok(self.optional_text(candidates))
    }

    /// Trimmed text of a required column.
    pub fn trimmed(&self, candidates: &[&str]) -> Result<String> {
        self.require(candidates)?;
        Ok(self.optional_trimmed(candidates))
    }

    /// Float value of a required column, zero when blank or unparsable.
    pub fn float(&self, candidates: &[&str]) -> Result<f64> {
        self.require(candidates)?;
        Ok(self.optional_float(candidates))
    }

    /// Integer value of a required column, zero when blank or unparsable.
    pub fn int(&self, candidates: &[&str]) -> Result<i64> {
        self.require(candidates)?;
        Ok(self.optional_int(candidates))
    }

    pub fn optional_text(&self, candidates: &[&str]) -> String {
        first_present(self.row, candidates, "").to_string()
    }

    pub fn optional_trimmed(&self, candidates: &[&str]) -> String {
        first_present_trimmed(self.row, candidates, "").to_string()
    }

    pub fn optional_float(&self, candidates: &[&str]) -> f64 {
        let coerced = coerce_float(first_present_trimmed(self.row, candidates, ""));
        self.note_default(candidates, coerced.reason());
        coerced.value()
    }

    pub fn optional_int(&self, candidates: &[&str]) -> i64 {
        let coerced = coerce_int(first_present_trimmed(self.row, candidates, ""));
        self.note_default(candidates, coerced.reason());
        coerced.value()
    }

    fn require(&self, candidates: &[&str]) -> Result<()> {
        if self.policy == ColumnPolicy::Lenient
            || candidates.iter().any(|column| self.row.has_column(column))
        {
            return Ok(());
        }
        Err(ToolError::MissingColumn {
            column: candidates.first().copied().unwrap_or_default().to_string(),
            line: self.row.line(),
        })
    }

    fn note_default(&self, candidates: &[&str], reason: Option<&DefaultReason>) {
        match reason {
            None | Some(DefaultReason::Blank) => {}
            Some(reason) => debug!(
                column = candidates.first().copied().unwrap_or_default(),
                line = self.row.line(),
                %reason,
                "numeric cell defaulted to zero"
            ),
        }
    }
}
