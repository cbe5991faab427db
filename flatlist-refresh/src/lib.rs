//! Pull-to-refresh for the `flatlist` crate.
//!
//! [`RefreshControl`] wraps arbitrary children. It either draws its own indicator
//! ([`RefreshMode::Standalone`]) or relays `refreshing`/`on_refresh` into a designated
//! [`Refreshable`] child such as a `flatlist::FlatList` ([`RefreshMode::Relay`]).
//!
//! Like `flatlist`, this crate is UI-agnostic: the host reports pull gestures and draws what
//! [`RefreshControl::render`] returns.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod refresh;


pub use refresh::{
    DEFAULT_PULL_THRESHOLD, Indicator, IndicatorSize, IndicatorVisibility, RefreshControl,
    RefreshControlProps, RefreshFrame, RefreshMode, RefreshState, RefreshTarget, Refreshable,
};
