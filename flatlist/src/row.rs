use alloc::collections::BTreeSet;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::{Columns, Error, LogicalRow, Result};

/// Renders one flat item. Returning `None` renders nothing for that item.
pub type RenderItem<T, E> = Arc<dyn Fn(RenderInfo<'_, &T>) -> Option<E> + Send + Sync>;

/// Arguments handed to a render callback.
#[derive(Debug)]
pub struct RenderInfo<'a, I> {
    pub item: I,
    /// Flat index for item callbacks, row index at the engine level.
    pub index: usize,
    pub separators: Separators<'a>,
}

impl<I: Clone> Clone for RenderInfo<'_, I> {
    fn clone(&self) -> Self {
        Self {
            item: self.item.clone(),
            index: self.index,
            separators: self.separators,
        }
    }
}

/// Highlight state of the separators around each row.
///
/// Owned by the list engine and shared with render callbacks through [`Separators`].
#[derive(Debug, Default)]
pub struct SeparatorHighlights {
    rows: RefCell<BTreeSet<usize>>,
}

impl SeparatorHighlights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separators(&self, row: usize) -> Separators<'_> {
        Separators {
            row,
            highlights: self,
        }
    }

    pub fn is_row_highlighted(&self, row: usize) -> bool {
        self.rows.borrow().contains(&row)
    }

    /// Whether the separator between `leading` and `leading + 1` is highlighted.
    pub fn is_separator_highlighted(&self, leading: usize) -> bool {
        let rows = self.rows.borrow();
        rows.contains(&leading) || rows.contains(&(leading + 1))
    }

    pub fn clear(&self) {
        self.rows.borrow_mut().clear();
    }
}

/// Handle given to `render_item` to highlight the separators adjacent to its row.
#[derive(Clone, Copy, Debug)]
pub struct Separators<'a> {
    row: usize,
    highlights: &'a SeparatorHighlights,
}

impl Separators<'_> {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn highlight(&self) {
        self.highlights.rows.borrow_mut().insert(self.row);
    }

    pub fn unhighlight(&self) {
        self.highlights.rows.borrow_mut().remove(&self.row);
    }
}

/// Output of the row adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered<E, S> {
    Item(E),
    Row(ColumnRow<E, S>),
}

/// A horizontal container holding the rendered members of a multi-column row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnRow<E, S> {
    pub style: Option<S>,
    pub cells: Vec<ColumnCell<E>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnCell<E> {
    /// Position of the member within its row; unique among siblings only.
    pub ordinal: usize,
    pub element: E,
}

/// Renders a logical row through the caller's per-item callback.
pub fn render_row<T, E, S: Clone>(
    columns: Columns,
    render_item: &RenderItem<T, E>,
    column_wrapper_style: Option<&S>,
    info: RenderInfo<'_, LogicalRow<'_, T>>,
) -> Result<Option<Rendered<E, S>>> {
    let RenderInfo {
        item,
        index,
        separators,
    } = info;

    if !columns.is_multi() {
        let item = item.as_single().ok_or(Error::ExpectedSingleItem)?;
        let element = render_item(RenderInfo {
            item,
            index,
            separators,
        });
        return Ok(element.map(Rendered::Item));
    }

    let items = item.as_columns().ok_or(Error::ExpectedColumns {
        num_columns: columns.get(),
    })?;
    let cells = items
        .iter()
        .enumerate()
        .filter_map(|(column, member)| {
            render_item(RenderInfo {
                item: member,
                index: columns.flat_index(index, column),
                separators,
            })
            .map(|element| ColumnCell {
                ordinal: column,
                element,
            })
        })
        .collect();

    Ok(Some(Rendered::Row(ColumnRow {
        style: column_wrapper_style.cloned(),
        cells,
    })))
}
