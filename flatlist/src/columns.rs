use core::num::NonZeroUsize;

use crate::{Error, Result};

/// A logical row: the unit the list engine renders and keys.
///
/// With a single column a row *is* the item. With several columns a row is a borrowed slice of
/// 1..=`num_columns` consecutive items; only the last row may be short, and rows are never empty.
#[derive(Debug, PartialEq, Eq)]
pub enum LogicalRow<'a, T> {
    Single(&'a T),
    Columns(&'a [T]),
}

impl<T> Clone for LogicalRow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LogicalRow<'_, T> {}

impl<'a, T> LogicalRow<'a, T> {
    /// Number of flat items in this row.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Columns(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_single(&self) -> Option<&'a T> {
        match *self {
            Self::Single(item) => Some(item),
            Self::Columns(_) => None,
        }
    }

    pub fn as_columns(&self) -> Option<&'a [T]> {
        match *self {
            Self::Single(_) => None,
            Self::Columns(items) => Some(items),
        }
    }
}

/// Column grouping for a list.
///
/// Maps between the flat data index space and the logical row space:
/// `flat = row * num_columns + column`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Columns(NonZeroUsize);

impl Columns {
    pub fn new(num_columns: usize) -> Result<Self> {
        NonZeroUsize::new(num_columns)
            .map(Self)
            .ok_or(Error::InvalidNumColumns)
    }

    pub const fn single() -> Self {
        Self(NonZeroUsize::MIN)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    pub fn is_multi(self) -> bool {
        self.get() > 1
    }

    /// `ceil(len / num_columns)`, or `0` for absent or empty data.
    pub fn row_count<T>(self, data: Option<&[T]>) -> usize {
        data.map_or(0, |data| data.len().div_ceil(self.get()))
    }

    /// Returns the logical row at `row`, or `None` past the end of `data`.
    pub fn item_at<T>(self, data: &[T], row: usize) -> Option<LogicalRow<'_, T>> {
        if !self.is_multi() {
            return data.get(row).map(LogicalRow::Single);
        }
        let range = self.flat_range(row, data.len());
        if range.is_empty() {
            return None;
        }
        Some(LogicalRow::Columns(&data[range]))
    }

    /// Flat indexes covered by `row` for data of length `len`.
    pub fn flat_range(self, row: usize, len: usize) -> core::ops::Range<usize> {
        let start = row.saturating_mul(self.get()).min(len);
        let end = start.saturating_add(self.get()).min(len);
        start..end
    }

    pub fn flat_index(self, row: usize, column: usize) -> usize {
        debug_assert!(column < self.get(), "column out of range");
        row * self.get() + column
    }

    /// Splits a flat index into `(row, column)`.
    pub fn row_of(self, flat_index: usize) -> (usize, usize) {
        (flat_index / self.get(), flat_index % self.get())
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self::single()
    }
}
