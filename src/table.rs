//! Truth-table engine
//!
//! Exhaustively evaluates a formula over every assignment of its variables.
//! Rows are ordered with the first (lexically smallest) variable as the
//! most significant bit and `true` sorting before `false`: row 0 is
//! all-true, the last row is all-false. A formula with no variables gets
//! exactly one row with an empty input vector. This exact ordering is
//! load-bearing for golden-output consumers.

use crate::error::{Error, Result};
use crate::expr::{Assignment, Expression};
use serde::{Deserialize, Serialize};

/// Display guard used by presentation callers; the enumeration itself is
/// correct for any variable count.
pub const DEFAULT_VARIABLE_LIMIT: usize = 4;

/// One row: the assignment vector in canonical variable order, and the
/// evaluated result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTableRow {
    pub inputs: Vec<bool>,
    pub value: bool,
}

/// The full table for one expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    expression: Expression,
    names: Vec<String>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Build the table for an expression, enumerating all 2^n assignments
    pub fn new(expression: &Expression) -> Result<TruthTable> {
        let names = expression.get_names();
        let mut rows = Vec::with_capacity(1 << names.len());
        for inputs in bool_permutations(names.len()) {
            let assignment: Assignment = names
                .iter()
                .cloned()
                .zip(inputs.iter().copied())
                .collect();
            let value = expression.evaluate(&assignment)?;
            rows.push(TruthTableRow { inputs, value });
        }
        Ok(TruthTable {
            expression: expression.clone(),
            names,
            rows,
        })
    }

    /// Build the table, failing with [`Error::TooManyVariables`] when the
    /// expression has more than `limit` distinct variables
    pub fn with_limit(expression: &Expression, limit: usize) -> Result<TruthTable> {
        let count = expression.get_names().len();
        if count > limit {
            return Err(Error::TooManyVariables { count, limit });
        }
        TruthTable::new(expression)
    }

    /// The expression the table was built from
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Variable names in canonical (ascending lexical) column order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All rows, in canonical order
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// The result column, in row order
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.value)
    }

    /// Per-row name → value maps, in row order
    pub fn assignments(&self) -> Vec<Assignment> {
        self.rows
            .iter()
            .map(|row| {
                self.names
                    .iter()
                    .cloned()
                    .zip(row.inputs.iter().copied())
                    .collect()
            })
            .collect()
    }

    /// Header strings for an external renderer: the variable names
    /// followed by the formatted expression
    pub fn header(&self) -> Vec<String> {
        let mut header = self.names.clone();
        header.push(self.expression.to_string());
        header
    }

    /// Cell rows for an external renderer, with booleans rendered as the
    /// single-letter `T`/`F` markers
    pub fn cells(&self) -> Vec<Vec<String>> {
        fn mark(value: bool) -> String {
            if value { "T" } else { "F" }.to_string()
        }
        self.rows
            .iter()
            .map(|row| {
                row.inputs
                    .iter()
                    .copied()
                    .map(mark)
                    .chain(std::iter::once(mark(row.value)))
                    .collect()
            })
            .collect()
    }
}

/// Every permutation of n booleans, first position most significant,
/// `true` before `false`
fn bool_permutations(n: usize) -> Vec<Vec<bool>> {
    (0..1usize << n)
        .map(|index| {
            (0..n)
                .map(|position| (index >> (n - 1 - position)) & 1 == 0)
                .collect()
        })
        .collect()
}
