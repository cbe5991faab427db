use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use flatlist::{FlatList, OnRefresh, Result};

/// Height of the standalone indicator, also the default pull distance that triggers a refresh.
pub const DEFAULT_PULL_THRESHOLD: u32 = 65;

/// How a [`RefreshControl`] takes part in refreshing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefreshMode {
    /// Draws its own indicator above its children.
    #[default]
    Standalone,
    /// Draws nothing and forwards `refreshing`/`on_refresh` into its refresh target.
    Relay,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefreshState {
    #[default]
    Idle,
    Refreshing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorSize {
    Default,
    #[default]
    Large,
}

/// When a standalone control draws its indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorVisibility {
    #[default]
    Always,
    /// Only while refreshing or while a pull is in progress.
    WhileRefreshing,
}

/// A child that can take over refreshing from a relaying [`RefreshControl`].
pub trait Refreshable {
    /// Applies the wrapper's `refreshing` flag and callback to this child.
    fn relay_refresh(&mut self, refreshing: bool, on_refresh: Option<OnRefresh>) -> Result<()>;
}

/// No target: nothing to relay into.
impl Refreshable for () {
    fn relay_refresh(&mut self, _refreshing: bool, _on_refresh: Option<OnRefresh>) -> Result<()> {
        Ok(())
    }
}

impl<T, E, S: Clone> Refreshable for FlatList<T, E, S> {
    fn relay_refresh(&mut self, refreshing: bool, on_refresh: Option<OnRefresh>) -> Result<()> {
        let mut props = self.props().clone().with_refreshing(Some(refreshing));
        props.on_refresh = on_refresh;
        self.set_props(props)
    }
}

/// The designated child that receives relayed refresh props. It keeps its key and identity
/// across updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshTarget<R> {
    pub key: String,
    pub child: R,
}

pub struct RefreshControlProps {
    pub mode: RefreshMode,
    pub refreshing: bool,
    /// Disables pull gestures. Prop-driven refreshing still works.
    pub enabled: bool,
    pub on_refresh: Option<OnRefresh>,
    pub pull_threshold: u32,
    pub progress_view_offset: Option<u32>,
    pub size: IndicatorSize,
    pub indicator: IndicatorVisibility,
}

impl RefreshControlProps {
    pub fn new(mode: RefreshMode) -> Self {
        Self {
            mode,
            refreshing: false,
            enabled: true,
            on_refresh: None,
            pull_threshold: DEFAULT_PULL_THRESHOLD,
            progress_view_offset: None,
            size: IndicatorSize::default(),
            indicator: IndicatorVisibility::default(),
        }
    }

    pub fn standalone() -> Self {
        Self::new(RefreshMode::Standalone)
    }

    pub fn relay() -> Self {
        Self::new(RefreshMode::Relay)
    }

    pub fn with_refreshing(mut self, refreshing: bool) -> Self {
        self.refreshing = refreshing;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_refresh(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_refresh = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_pull_threshold(mut self, pull_threshold: u32) -> Self {
        self.pull_threshold = pull_threshold;
        self
    }

    pub fn with_progress_view_offset(mut self, offset: Option<u32>) -> Self {
        self.progress_view_offset = offset;
        self
    }

    pub fn with_size(mut self, size: IndicatorSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_indicator(mut self, indicator: IndicatorVisibility) -> Self {
        self.indicator = indicator;
        self
    }
}

impl Default for RefreshControlProps {
    fn default() -> Self {
        Self::standalone()
    }
}

impl Clone for RefreshControlProps {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            refreshing: self.refreshing,
            enabled: self.enabled,
            on_refresh: self.on_refresh.clone(),
            pull_threshold: self.pull_threshold,
            progress_view_offset: self.progress_view_offset,
            size: self.size,
            indicator: self.indicator,
        }
    }
}

impl core::fmt::Debug for RefreshControlProps {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefreshControlProps")
            .field("mode", &self.mode)
            .field("refreshing", &self.refreshing)
            .field("enabled", &self.enabled)
            .field("has_on_refresh", &self.on_refresh.is_some())
            .field("pull_threshold", &self.pull_threshold)
            .field("progress_view_offset", &self.progress_view_offset)
            .field("size", &self.size)
            .field("indicator", &self.indicator)
            .finish()
    }
}

/// The indicator a standalone control asks its host to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    pub size: IndicatorSize,
    pub height: u32,
    pub offset: u32,
    pub pull_distance: u32,
    pub refreshing: bool,
}

/// One render pass of a [`RefreshControl`]: an optional indicator, then the children in order,
/// then the refresh target.
#[derive(Debug)]
pub struct RefreshFrame<'a, C, R> {
    pub indicator: Option<Indicator>,
    pub children: &'a [C],
    pub target: Option<&'a RefreshTarget<R>>,
}

/// A pull-to-refresh container.
///
/// A standalone control owns the refresh gesture and draws its indicator above the children. A
/// relaying control draws nothing and hands `refreshing`/`on_refresh` to its [`RefreshTarget`],
/// typically a [`FlatList`]. In both modes the control keeps its own [`RefreshState`]: a
/// `refreshing` false→true transition or a released pull past `pull_threshold` enters
/// [`RefreshState::Refreshing`] and calls `on_refresh` once. Only a prop update brings it back to
/// [`RefreshState::Idle`].
pub struct RefreshControl<C, R = ()> {
    props: RefreshControlProps,
    state: RefreshState,
    pull_distance: u32,
    children: Vec<C>,
    target: Option<RefreshTarget<R>>,
}

impl<C, R: Refreshable> RefreshControl<C, R> {
    /// Mounting with `refreshing == true` starts in [`RefreshState::Refreshing`] without
    /// calling `on_refresh`.
    pub fn new(props: RefreshControlProps) -> Self {
        let state = if props.refreshing {
            RefreshState::Refreshing
        } else {
            RefreshState::Idle
        };
        Self {
            props,
            state,
            pull_distance: 0,
            children: Vec::new(),
            target: None,
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = C>) -> Self {
        self.children.extend(children);
        self
    }

    /// Installs the refresh target. A relaying control forwards its current props right away.
    pub fn with_target(mut self, key: impl Into<String>, child: R) -> Result<Self> {
        self.target = Some(RefreshTarget {
            key: key.into(),
            child,
        });
        self.relay()?;
        Ok(self)
    }

    pub fn props(&self) -> &RefreshControlProps {
        &self.props
    }

    pub fn mode(&self) -> RefreshMode {
        self.props.mode
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn is_refreshing(&self) -> bool {
        self.state == RefreshState::Refreshing
    }

    /// Largest distance reached by the pull in progress.
    pub fn pull_distance(&self) -> u32 {
        self.pull_distance
    }

    pub fn children(&self) -> &[C] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<C> {
        &mut self.children
    }

    pub fn target(&self) -> Option<&RefreshTarget<R>> {
        self.target.as_ref()
    }

    pub fn target_mut(&mut self) -> Option<&mut RefreshTarget<R>> {
        self.target.as_mut()
    }

    /// Applies new props.
    ///
    /// In relay mode the target receives the new `refreshing`/`on_refresh` before the
    /// transition callback runs. If the target rejects them, the previous props stay in place.
    pub fn set_props(&mut self, props: RefreshControlProps) -> Result<()> {
        let previous = core::mem::replace(&mut self.props, props);
        if let Err(err) = self.relay() {
            self.props = previous;
            return Err(err);
        }
        let was_refreshing = previous.refreshing;

        match (was_refreshing, self.props.refreshing) {
            (false, true) => self.begin_refresh(),
            (true, false) => {
                rdebug!("refresh finished");
                self.state = RefreshState::Idle;
            }
            _ => {}
        }
        Ok(())
    }

    /// Reports the current pull distance of a refresh gesture.
    ///
    /// Ignored while refreshing or when pulls are disabled.
    pub fn pull(&mut self, distance: u32) {
        if !self.props.enabled || self.is_refreshing() {
            return;
        }
        self.pull_distance = self.pull_distance.max(distance);
        rtrace!(distance, max = self.pull_distance, "pull");
    }

    /// Ends the gesture. Returns `true` when it started a refresh.
    pub fn release(&mut self) -> Result<bool> {
        let reached = core::mem::take(&mut self.pull_distance);
        if !self.props.enabled || self.is_refreshing() || reached < self.props.pull_threshold {
            return Ok(false);
        }
        self.props.refreshing = true;
        if let Err(err) = self.relay() {
            self.props.refreshing = false;
            return Err(err);
        }
        self.begin_refresh();
        Ok(true)
    }

    pub fn render(&self) -> RefreshFrame<'_, C, R> {
        let indicator = match (self.props.mode, self.props.indicator) {
            (RefreshMode::Relay, _) => None,
            (RefreshMode::Standalone, IndicatorVisibility::WhileRefreshing)
                if !self.is_refreshing() && self.pull_distance == 0 =>
            {
                None
            }
            (RefreshMode::Standalone, _) => Some(Indicator {
                size: self.props.size,
                height: self.props.pull_threshold,
                offset: self.props.progress_view_offset.unwrap_or(0),
                pull_distance: self.pull_distance,
                refreshing: self.is_refreshing(),
            }),
        };
        RefreshFrame {
            indicator,
            children: &self.children,
            target: self.target.as_ref(),
        }
    }

    fn begin_refresh(&mut self) {
        self.state = RefreshState::Refreshing;
        self.pull_distance = 0;
        rdebug!(mode = ?self.props.mode, "refresh started");
        if let Some(on_refresh) = &self.props.on_refresh {
            on_refresh();
        }
    }

    fn relay(&mut self) -> Result<()> {
        if self.props.mode != RefreshMode::Relay {
            return Ok(());
        }
        let Some(target) = self.target.as_mut() else {
            rtrace!("relay without a refresh target");
            return Ok(());
        };
        rtrace!(key = %target.key, refreshing = self.props.refreshing, "relay refresh");
        target
            .child
            .relay_refresh(self.props.refreshing, self.props.on_refresh.clone())
    }
}

impl<C: core::fmt::Debug, R: core::fmt::Debug> core::fmt::Debug for RefreshControl<C, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefreshControl")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("pull_distance", &self.pull_distance)
            .field("children", &self.children)
            .field("target", &self.target)
            .finish()
    }
}
