//! A minimal named-column table with a row index.
//!
//! [`Table`] is the engine's binding for "any tabular structure with named
//! columns and a row index": an ordered list of equally long `f64` columns
//! plus a `u64` index identifying each row (experiment). Transformations
//! copy tables; inputs are never modified in place.
//!
//! # Example
//!
//! ```
//! use desirability::Table;
//!
//! let data = Table::new()
//!     .with_column("yield", vec![97.2, 88.1])
//!     .unwrap()
//!     .with_column("cost", vec![12.0, 9.5])
//!     .unwrap();
//!
//! assert_eq!(data.len(), 2);
//! assert_eq!(data.column("cost"), Some(&[12.0, 9.5][..]));
//! assert_eq!(data.index(), &[0, 1]);
//! ```

use crate::error::{Error, Result};

/// One named column of measurements.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    /// The column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The column values, one per row.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// An ordered collection of named columns sharing one row index.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    index: Vec<u64>,
    columns: Vec<Column>,
}

impl Table {
    /// Creates an empty table (no rows, no columns).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with an explicit row index.
    ///
    /// Columns added later must match the index length.
    #[must_use]
    pub fn with_index(index: Vec<u64>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    /// Adds a column, consuming and returning the table for chaining.
    ///
    /// The first column added to a table without an explicit index sets the
    /// row count and a default index `0..n`.
    ///
    /// # Errors
    ///
    /// [`Error::ColumnLength`] if the values do not match the row count and
    /// [`Error::DuplicateColumn`] if the name is already taken.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if self.columns.is_empty() && self.index.is_empty() {
            self.index = (0..values.len() as u64).collect();
        }
        if values.len() != self.index.len() {
            return Err(Error::ColumnLength {
                name,
                expected: self.index.len(),
                got: values.len(),
            });
        }
        if self.column(&name).is_some() {
            return Err(Error::DuplicateColumn { name });
        }
        self.columns.push(Column { name, values });
        Ok(self)
    }

    /// The number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The row index.
    #[must_use]
    pub fn index(&self) -> &[u64] {
        &self.index
    }

    /// The columns in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column's values by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Looks up a column's values by name, erroring when absent.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] naming the absent column.
    pub fn require_column(&self, name: &str) -> Result<&[f64]> {
        self.column(name).ok_or_else(|| Error::MissingColumn {
            name: name.to_owned(),
        })
    }
}
