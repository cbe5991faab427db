use alloc::vec::Vec;
use core::ops::Range;

use crate::layout::RowFrames;

/// Rows rendered before the viewport has been laid out.
pub(crate) fn initial_window(
    count: usize,
    initial_num_to_render: usize,
    initial_scroll_index: Option<usize>,
) -> Range<usize> {
    if count == 0 {
        return 0..0;
    }
    let start = initial_scroll_index.unwrap_or(0).min(count - 1);
    let end = start.saturating_add(initial_num_to_render.max(1)).min(count);
    start..end
}

/// Rows within `window_size` visible lengths centered on the viewport.
///
/// Returns `None` when the viewport has not been laid out yet.
pub(crate) fn viewport_window(
    frames: &RowFrames,
    offset: u64,
    visible_length: u32,
    window_size: usize,
) -> Option<Range<usize>> {
    if visible_length == 0 {
        return None;
    }
    if frames.len() == 0 {
        return Some(0..0);
    }
    let visible = visible_length as u64;
    let lead = visible.saturating_mul(window_size.saturating_sub(1) as u64) / 2;
    let start_offset = offset.saturating_sub(lead);
    let end_offset = offset.saturating_add(visible).saturating_add(lead);

    let first = frames.index_at_offset(start_offset)?;
    let last = frames.index_at_offset(end_offset.saturating_sub(1))?;
    Some(first..last + 1)
}

/// Merges the always-rendered head (`0..head`) with the render window.
///
/// `head` must already be clamped to the row count.
pub(crate) fn render_ranges(window: Range<usize>, head: usize) -> Vec<Range<usize>> {
    let mut out = Vec::with_capacity(2);
    if head > 0 && window.start > head {
        out.push(0..head);
        if !window.is_empty() {
            out.push(window);
        }
        return out;
    }
    let start = if head > 0 { 0 } else { window.start };
    let end = window.end.max(head);
    if start < end {
        out.push(start..end);
    }
    out
}
