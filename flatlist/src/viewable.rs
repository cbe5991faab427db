use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::key::member_key;
use crate::{Columns, Error, KeyExtractor, LogicalRow, Result, ViewToken, ViewabilityChange};

/// Called when the set of viewable items changes.
pub type OnViewableItemsChanged<T> = Arc<dyn Fn(ViewabilityChange<&T>) + Send + Sync>;

/// Expands row-level viewability tokens into one token per flat item.
///
/// Each member of a row gets its own flat index and key; every other field is copied from the
/// row token. Row order is preserved, then column order within a row.
pub fn remap<'a, T>(
    columns: Columns,
    key_extractor: &KeyExtractor<T>,
    info: &ViewabilityChange<LogicalRow<'a, T>>,
) -> Result<ViewabilityChange<&'a T>> {
    let mut out = ViewabilityChange::default();
    for token in &info.viewable_items {
        push_expanded(&mut out.viewable_items, columns, key_extractor, token)?;
    }
    for token in &info.changed {
        push_expanded(&mut out.changed, columns, key_extractor, token)?;
    }
    Ok(out)
}

fn push_expanded<'a, T>(
    out: &mut Vec<ViewToken<&'a T>>,
    columns: Columns,
    key_extractor: &KeyExtractor<T>,
    token: &ViewToken<LogicalRow<'a, T>>,
) -> Result<()> {
    let row_index = token.index.ok_or(Error::MissingIndex)?;
    let items = token.item.as_columns().ok_or(Error::ExpectedColumns {
        num_columns: columns.get(),
    })?;
    out.reserve(items.len());
    for (column, item) in items.iter().enumerate() {
        let key = member_key(columns, key_extractor, item, row_index, column);
        out.push(token.with_item(item, key, columns.flat_index(row_index, column)));
    }
    Ok(())
}

fn unwrap_single<'a, T>(tokens: Vec<ViewToken<LogicalRow<'a, T>>>) -> Result<Vec<ViewToken<&'a T>>> {
    tokens
        .into_iter()
        .map(|token| {
            let item = token.item.as_single().ok_or(Error::ExpectedSingleItem)?;
            Ok(ViewToken {
                item,
                key: token.key,
                index: token.index,
                is_viewable: token.is_viewable,
            })
        })
        .collect()
}

/// Delivers an engine viewability event to the caller's callback.
///
/// Does nothing (not even the expansion) when no callback is registered. Single column lists
/// pass the tokens through unchanged.
pub fn dispatch<T>(
    columns: Columns,
    key_extractor: &KeyExtractor<T>,
    callback: Option<&OnViewableItemsChanged<T>>,
    info: ViewabilityChange<LogicalRow<'_, T>>,
) -> Result<()> {
    let Some(callback) = callback else {
        return Ok(());
    };

    let expanded = if columns.is_multi() {
        remap(columns, key_extractor, &info)?
    } else {
        ViewabilityChange {
            viewable_items: unwrap_single(info.viewable_items)?,
            changed: unwrap_single(info.changed)?,
        }
    };
    ltrace!(
        viewable = expanded.viewable_items.len(),
        changed = expanded.changed.len(),
        "viewable items changed"
    );
    callback(expanded);
    Ok(())
}
