use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::adapter::ColumnAdapter;
use crate::layout::RowFrames;
use crate::viewability::ViewabilityTracker;
use crate::window::{initial_window, render_ranges, viewport_window};
use crate::{
    Columns, EndReachedInfo, Error, FlatListProps, FrameCell, ListFrame, LogicalRow, NativeProps,
    RefreshBinding, RenderInfo, Result, RowCell, ScrollHandle, ScrollToEnd, ScrollToIndex,
    ScrollToItem, ScrollToOffset, ScrollView, ScrollableNode, SeparatorHighlights,
    SeparatorProps, ViewToken, ViewabilityChange, check_props,
};

/// Windowed list engine.
///
/// The engine works on logical rows only. Everything item-shaped goes through a
/// [`ColumnAdapter`] built from the current props, so the same engine serves single and
/// multi-column lists.
///
/// The host drives it: report the viewport with [`VirtualizedList::on_layout`], user scrolling
/// with [`VirtualizedList::on_scroll`] and measured row lengths with
/// [`VirtualizedList::measure_row`], then call [`VirtualizedList::render`].
pub struct VirtualizedList<T, E, S = ()> {
    props: FlatListProps<T, E, S>,
    columns: Columns,
    frames: RowFrames,
    scroll: ScrollView,
    viewability: ViewabilityTracker,
    highlights: SeparatorHighlights,
    laid_out: bool,
    sent_end_for_content_length: Option<u64>,
    data_changed_since_end_reached: bool,
}

impl<T, E, S: Clone> VirtualizedList<T, E, S> {
    /// Builds an engine. Fails on the same configurations [`check_props`] rejects.
    pub fn new(props: FlatListProps<T, E, S>) -> Result<Self> {
        check_props(&props)?;
        let columns = Columns::new(props.num_columns)?;
        let mut scroll = ScrollView::new(props.horizontal);
        scroll.set_remove_clipped_subviews(props.remove_clipped_subviews);

        let mut list = Self {
            props,
            columns,
            frames: RowFrames::default(),
            scroll,
            viewability: ViewabilityTracker::default(),
            highlights: SeparatorHighlights::new(),
            laid_out: false,
            sent_end_for_content_length: None,
            data_changed_since_end_reached: true,
        };
        list.rebuild_frames()?;
        ltrace!(rows = list.frames.len(), "virtualized list created");
        list.update()?;
        Ok(list)
    }

    pub fn props(&self) -> &FlatListProps<T, E, S> {
        &self.props
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn row_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame of logical row `row`, if it exists.
    pub fn row_layout(&self, row: usize) -> Option<crate::ItemLayout> {
        self.frames.get(row)
    }

    pub fn separator_highlights(&self) -> &SeparatorHighlights {
        &self.highlights
    }

    /// Replaces the props and re-runs layout, viewability and end-reached checks.
    pub fn set_props(&mut self, props: FlatListProps<T, E, S>) -> Result<()> {
        check_props(&props)?;
        let columns = Columns::new(props.num_columns)?;
        let data_changed = !same_data(self.props.data.as_ref(), props.data.as_ref())
            || self.props.extra_data != props.extra_data;

        self.scroll.set_horizontal(props.horizontal);
        self.scroll
            .set_remove_clipped_subviews(props.remove_clipped_subviews);
        self.props = props;
        self.columns = columns;

        if data_changed {
            ldebug!(rows = self.columns.row_count(self.props.data()), "data changed");
            self.data_changed_since_end_reached = true;
            self.viewability.reset();
        }
        self.rebuild_frames()?;
        self.update()
    }

    /// Reports the viewport length along the scroll axis.
    ///
    /// The first non-zero layout applies `initial_scroll_index`.
    pub fn on_layout(&mut self, visible_length: u32) -> Result<()> {
        self.scroll.set_visible_length(visible_length);
        if !self.laid_out && visible_length > 0 {
            self.laid_out = true;
            if let Some(frame) = self
                .props
                .initial_scroll_index
                .and_then(|row| self.frames.get(row))
            {
                self.scroll.scroll_to(frame.offset, false);
            }
        }
        self.update()
    }

    /// Reports a user scroll. Scrolling counts as an interaction for viewability.
    pub fn on_scroll(&mut self, offset: u64) -> Result<()> {
        self.viewability.record_interaction();
        self.scroll.on_scroll(offset);
        ltrace!(offset, applied = self.scroll.offset(), "scroll");
        self.update()
    }

    /// Reports the measured length of logical row `row`.
    ///
    /// Ignored when `get_item_layout` is set, since its frames are authoritative.
    pub fn measure_row(&mut self, row: usize, length: u32) -> Result<()> {
        let adapter = ColumnAdapter::new(&self.props, self.columns);
        let Some(item) = adapter.get_item(row) else {
            return Err(Error::IndexOutOfRange {
                index: row,
                count: adapter.get_item_count(),
            });
        };
        let key = adapter.key_extractor(&item, row)?;
        if !self.frames.measure(row, key, length) {
            return Ok(());
        }
        self.scroll.set_content_length(self.frames.content_length());
        self.update()
    }

    /// Row ranges currently rendered, in ascending order.
    pub fn rendered_rows(&self) -> Vec<Range<usize>> {
        let count = self.frames.len();
        match viewport_window(
            &self.frames,
            self.scroll.offset(),
            self.scroll.visible_length(),
            self.props.window_size,
        ) {
            None => vec![initial_window(
                count,
                self.props.initial_num_to_render,
                self.props.initial_scroll_index,
            )],
            Some(window) => {
                let head = if self.props.initial_scroll_index.is_some() {
                    0
                } else {
                    self.props.initial_num_to_render.min(count)
                };
                render_ranges(window, head)
            }
        }
    }

    pub fn render(&self) -> Result<ListFrame<E, S>> {
        let props = &self.props;
        let adapter = ColumnAdapter::new(props, self.columns);
        let count = adapter.get_item_count();

        let header = props.list_header.as_ref().map(|render| render());
        let mut cells = Vec::new();
        for row_index in self.rendered_rows().into_iter().flatten() {
            let Some(row) = adapter.get_item(row_index) else {
                continue;
            };
            let key = adapter.key_extractor(&row, row_index)?;
            let content = adapter.render_item(RenderInfo {
                item: row,
                index: row_index,
                separators: self.highlights.separators(row_index),
            })?;
            let separator = match &props.item_separator {
                Some(render) if row_index + 1 < count => Some(render(SeparatorProps {
                    highlighted: self.highlights.is_separator_highlighted(row_index),
                    leading_index: row_index,
                    trailing_index: row_index + 1,
                })),
                _ => None,
            };
            cells.push(FrameCell::Row(RowCell {
                key,
                index: row_index,
                layout: self.frames.get(row_index),
                content,
                separator,
            }));
        }
        let empty = match &props.list_empty {
            Some(render) if count == 0 => Some(render()),
            _ => None,
        };
        let footer = props.list_footer.as_ref().map(|render| render());

        Ok(ListFrame {
            header,
            cells,
            footer,
            empty,
            content_length: self.frames.content_length(),
            horizontal: props.horizontal,
            inverted: props.inverted,
            refresh_control: props.on_refresh.as_ref().map(|on_refresh| RefreshBinding {
                refreshing: props.refreshing.unwrap_or(false),
                progress_view_offset: props.progress_view_offset,
                on_refresh: Arc::clone(on_refresh),
            }),
        })
    }

    fn rebuild_frames(&mut self) -> Result<()> {
        let adapter = ColumnAdapter::new(&self.props, self.columns);
        let count = adapter.get_item_count();
        if let Some(get_item_layout) = &self.props.get_item_layout {
            let data = self.props.data();
            self.frames
                .rebuild_from_layout(count, |row| get_item_layout(data, row));
        } else {
            let mut keys = Vec::with_capacity(count);
            for row_index in 0..count {
                let Some(row) = adapter.get_item(row_index) else {
                    return Err(Error::IndexOutOfRange {
                        index: row_index,
                        count,
                    });
                };
                keys.push(adapter.key_extractor(&row, row_index)?);
            }
            self.frames
                .rebuild_estimated(keys, self.props.estimated_item_length);
        }
        self.scroll.set_content_length(self.frames.content_length());
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        self.update_viewability()?;
        self.maybe_call_on_end_reached();
        Ok(())
    }

    fn update_viewability(&mut self) -> Result<()> {
        let ranges = self.rendered_rows();
        let frames = &self.frames;
        let candidates = ranges.into_iter().flatten().filter_map(|row| frames.get(row));
        let Some(rows) = self.viewability.update(
            &self.props.viewability_config,
            candidates,
            self.scroll.offset(),
            self.scroll.visible_length(),
        ) else {
            return Ok(());
        };
        if self.props.on_viewable_items_changed.is_none() {
            return Ok(());
        }

        let adapter = ColumnAdapter::new(&self.props, self.columns);
        let viewable_items = rows
            .viewable
            .iter()
            .map(|&row| row_token(adapter, row, true))
            .collect::<Result<Vec<_>>>()?;
        let changed = rows
            .changed
            .iter()
            .map(|&(row, is_viewable)| row_token(adapter, row, is_viewable))
            .collect::<Result<Vec<_>>>()?;
        adapter.on_viewable_items_changed(ViewabilityChange {
            viewable_items,
            changed,
        })
    }

    fn maybe_call_on_end_reached(&mut self) {
        let Some(on_end_reached) = self.props.on_end_reached.clone() else {
            return;
        };
        let visible = self.scroll.visible_length();
        let count = self.frames.len();
        if visible == 0 || count == 0 {
            return;
        }
        if self.rendered_rows().last().map(|range| range.end) != Some(count) {
            return;
        }

        let content_length = self.frames.content_length();
        let distance_from_end =
            content_length as i64 - visible as i64 - self.scroll.offset() as i64;
        let threshold = self.props.on_end_reached_threshold as f64 * visible as f64;
        let distance = distance_from_end as f64;
        if distance < threshold
            && (self.data_changed_since_end_reached
                || self.sent_end_for_content_length != Some(content_length))
        {
            self.data_changed_since_end_reached = false;
            self.sent_end_for_content_length = Some(content_length);
            ldebug!(distance_from_end, content_length, "end reached");
            on_end_reached(EndReachedInfo { distance_from_end });
        } else if distance > threshold {
            self.sent_end_for_content_length = None;
        }
    }

    fn scroll_to_row(
        &mut self,
        row: usize,
        animated: bool,
        view_position: f32,
        view_offset: i64,
    ) -> Result<()> {
        let Some(frame) = self.frames.get(row) else {
            return Err(Error::IndexOutOfRange {
                index: row,
                count: self.frames.len(),
            });
        };
        let visible = self.scroll.visible_length() as f64;
        let aligned =
            frame.offset as f64 - view_position as f64 * (visible - frame.length as f64);
        let target = aligned.max(0.0) - view_offset as f64;
        self.scroll.scroll_to(target.max(0.0) as u64, animated);
        ldebug!(row, offset = self.scroll.offset(), animated, "scroll to row");
        self.update()
    }
}

impl<T, E, S: Clone> ScrollHandle<T> for VirtualizedList<T, E, S> {
    fn scroll_to_end(&mut self, params: ScrollToEnd) -> Result<()> {
        let end = self.scroll.max_offset();
        self.scroll.scroll_to(end, params.animated);
        self.update()
    }

    /// `params.index` is a flat item index; it scrolls to the row containing that item.
    fn scroll_to_index(&mut self, params: ScrollToIndex) -> Result<()> {
        let count = self.props.data().map_or(0, <[T]>::len);
        if params.index >= count {
            return Err(Error::IndexOutOfRange {
                index: params.index,
                count,
            });
        }
        let (row, _) = self.columns.row_of(params.index);
        self.scroll_to_row(row, params.animated, params.view_position, params.view_offset)
    }

    fn scroll_to_item(&mut self, params: ScrollToItem<'_, T>) -> Result<()>
    where
        T: PartialEq,
    {
        let index = self
            .props
            .data()
            .and_then(|data| data.iter().position(|item| item == params.item))
            .ok_or(Error::ItemNotFound)?;
        self.scroll_to_index(
            ScrollToIndex::new(index)
                .with_animated(params.animated)
                .with_view_position(params.view_position),
        )
    }

    fn scroll_to_offset(&mut self, params: ScrollToOffset) -> Result<()> {
        self.scroll.scroll_to(params.offset, params.animated);
        self.update()
    }

    fn record_interaction(&mut self) -> Result<()> {
        self.viewability.record_interaction();
        self.update_viewability()
    }

    fn flash_scroll_indicators(&mut self) {
        self.scroll.flash_indicators();
    }

    fn scroll_responder(&self) -> &ScrollView {
        &self.scroll
    }

    fn scrollable_node(&self) -> ScrollableNode {
        self.scroll.node()
    }

    fn set_native_props(&mut self, props: NativeProps) {
        self.scroll.apply_native_props(props);
    }
}

impl<T, E, S> core::fmt::Debug for VirtualizedList<T, E, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualizedList")
            .field("props", &self.props)
            .field("rows", &self.frames.len())
            .field("scroll", &self.scroll)
            .field("laid_out", &self.laid_out)
            .finish_non_exhaustive()
    }
}

fn same_data<T>(a: Option<&Arc<[T]>>, b: Option<&Arc<[T]>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn row_token<'p, T, E, S>(
    adapter: ColumnAdapter<'p, T, E, S>,
    row: usize,
    is_viewable: bool,
) -> Result<ViewToken<LogicalRow<'p, T>>> {
    let item = adapter.get_item(row).ok_or(Error::IndexOutOfRange {
        index: row,
        count: adapter.get_item_count(),
    })?;
    let key = adapter.key_extractor(&item, row)?;
    Ok(ViewToken {
        item,
        key,
        index: Some(row),
        is_viewable,
    })
}
