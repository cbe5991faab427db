use alloc::string::String;

use crate::{
    Columns, FlatListProps, LogicalRow, RenderInfo, Rendered, Result, ViewabilityChange, key,
    row, viewable,
};

/// Column-aware view of a [`FlatListProps`], shaped like the callbacks a list engine consumes.
///
/// The engine only ever sees logical rows; this adapter groups flat data into rows, derives row
/// keys, renders rows through the per-item callback and expands viewability events back to flat
/// items. It holds no state of its own.
pub struct ColumnAdapter<'p, T, E, S> {
    props: &'p FlatListProps<T, E, S>,
    columns: Columns,
}

impl<T, E, S> Clone for ColumnAdapter<'_, T, E, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E, S> Copy for ColumnAdapter<'_, T, E, S> {}

impl<'p, T, E, S> ColumnAdapter<'p, T, E, S> {
    pub fn new(props: &'p FlatListProps<T, E, S>, columns: Columns) -> Self {
        Self { props, columns }
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn get_item_count(&self) -> usize {
        self.columns.row_count(self.props.data())
    }

    pub fn get_item(&self, row_index: usize) -> Option<LogicalRow<'p, T>> {
        let data = self.props.data.as_deref()?;
        self.columns.item_at(data, row_index)
    }

    pub fn key_extractor(&self, row: &LogicalRow<'_, T>, row_index: usize) -> Result<String> {
        key::key_for(self.columns, &self.props.key_extractor, row, row_index)
    }

    pub fn render_item(
        &self,
        info: RenderInfo<'_, LogicalRow<'_, T>>,
    ) -> Result<Option<Rendered<E, S>>>
    where
        S: Clone,
    {
        row::render_row(
            self.columns,
            &self.props.render_item,
            self.props.column_wrapper_style.as_ref(),
            info,
        )
    }

    pub fn on_viewable_items_changed(
        &self,
        info: ViewabilityChange<LogicalRow<'_, T>>,
    ) -> Result<()> {
        viewable::dispatch(
            self.columns,
            &self.props.key_extractor,
            self.props.on_viewable_items_changed.as_ref(),
            info,
        )
    }
}
