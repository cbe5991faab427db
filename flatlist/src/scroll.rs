/// Props that may be pushed straight onto the underlying scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeProps {
    pub scroll_enabled: Option<bool>,
    pub shows_scroll_indicator: Option<bool>,
    pub remove_clipped_subviews: Option<bool>,
}

/// Snapshot of the scroll container geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollableNode {
    pub horizontal: bool,
    pub offset: u64,
    pub visible_length: u32,
    pub content_length: u64,
}

/// State of the scroll container a list renders into.
///
/// Offsets are always clamped to `0..=content_length - visible_length`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollView {
    horizontal: bool,
    offset: u64,
    visible_length: u32,
    content_length: u64,
    scroll_enabled: bool,
    shows_scroll_indicator: bool,
    remove_clipped_subviews: bool,
    indicator_flashes: u32,
    last_scroll_animated: Option<bool>,
}

impl ScrollView {
    pub fn new(horizontal: bool) -> Self {
        Self {
            horizontal,
            offset: 0,
            visible_length: 0,
            content_length: 0,
            scroll_enabled: true,
            shows_scroll_indicator: true,
            remove_clipped_subviews: false,
            indicator_flashes: 0,
            last_scroll_animated: None,
        }
    }

    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn visible_length(&self) -> u32 {
        self.visible_length
    }

    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn shows_scroll_indicator(&self) -> bool {
        self.shows_scroll_indicator
    }

    pub fn remove_clipped_subviews(&self) -> bool {
        self.remove_clipped_subviews
    }

    /// How many times the scroll indicators were flashed.
    pub fn indicator_flashes(&self) -> u32 {
        self.indicator_flashes
    }

    /// Whether the last programmatic scroll asked for animation.
    pub fn last_scroll_animated(&self) -> Option<bool> {
        self.last_scroll_animated
    }

    pub fn max_offset(&self) -> u64 {
        self.content_length
            .saturating_sub(self.visible_length as u64)
    }

    pub fn node(&self) -> ScrollableNode {
        ScrollableNode {
            horizontal: self.horizontal,
            offset: self.offset,
            visible_length: self.visible_length,
            content_length: self.content_length,
        }
    }

    pub(crate) fn set_horizontal(&mut self, horizontal: bool) {
        self.horizontal = horizontal;
    }

    pub(crate) fn set_remove_clipped_subviews(&mut self, remove: bool) {
        self.remove_clipped_subviews = remove;
    }

    pub(crate) fn set_visible_length(&mut self, visible_length: u32) {
        self.visible_length = visible_length;
        self.offset = self.offset.min(self.max_offset());
    }

    pub(crate) fn set_content_length(&mut self, content_length: u64) {
        self.content_length = content_length;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Programmatic scroll. Returns the applied (clamped) offset.
    pub(crate) fn scroll_to(&mut self, offset: u64, animated: bool) -> u64 {
        self.offset = offset.min(self.max_offset());
        self.last_scroll_animated = Some(animated);
        self.offset
    }

    /// User scroll reported by the host. Returns the applied (clamped) offset.
    pub(crate) fn on_scroll(&mut self, offset: u64) -> u64 {
        self.offset = offset.min(self.max_offset());
        self.offset
    }

    pub(crate) fn flash_indicators(&mut self) {
        self.indicator_flashes = self.indicator_flashes.saturating_add(1);
    }

    pub(crate) fn apply_native_props(&mut self, props: NativeProps) {
        if let Some(enabled) = props.scroll_enabled {
            self.scroll_enabled = enabled;
        }
        if let Some(shows) = props.shows_scroll_indicator {
            self.shows_scroll_indicator = shows;
        }
        if let Some(remove) = props.remove_clipped_subviews {
            self.remove_clipped_subviews = remove;
        }
    }
}
