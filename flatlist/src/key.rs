use alloc::string::{String, ToString};
use alloc::sync::Arc;

use crate::{Columns, Error, LogicalRow, Result};

/// Extracts a stable key for an item at a flat index.
pub type KeyExtractor<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// Items that may carry their own key.
///
/// Used by [`crate::FlatListProps::with_item_keys`]: the item's own key wins, and items without
/// one fall back to their flat index.
pub trait ItemKey {
    fn item_key(&self) -> Option<&str>;
}

pub(crate) fn index_key_extractor<T>() -> KeyExtractor<T> {
    Arc::new(|_, index| index.to_string())
}

pub(crate) fn item_key_extractor<T: ItemKey>() -> KeyExtractor<T> {
    Arc::new(|item, index| match item.item_key() {
        Some(key) => key.to_string(),
        None => index.to_string(),
    })
}

/// Key of the member at `column` within logical row `row_index`.
pub fn member_key<T>(
    columns: Columns,
    key_extractor: &KeyExtractor<T>,
    item: &T,
    row_index: usize,
    column: usize,
) -> String {
    key_extractor(item, columns.flat_index(row_index, column))
}

/// Key of a logical row.
///
/// Single column lists use the caller's key for the item directly. Multi-column rows join the
/// member keys with `:` in column order, so a row keeps its identity as long as its members do.
pub fn key_for<T>(
    columns: Columns,
    key_extractor: &KeyExtractor<T>,
    row: &LogicalRow<'_, T>,
    row_index: usize,
) -> Result<String> {
    if !columns.is_multi() {
        let item = row.as_single().ok_or(Error::ExpectedSingleItem)?;
        return Ok(key_extractor(item, row_index));
    }

    let items = row.as_columns().ok_or(Error::ExpectedColumns {
        num_columns: columns.get(),
    })?;
    let mut key = String::new();
    for (column, item) in items.iter().enumerate() {
        if column > 0 {
            key.push(':');
        }
        key.push_str(&member_key(columns, key_extractor, item, row_index, column));
    }
    Ok(key)
}
