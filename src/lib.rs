//! Arrow-key spatial navigation over freely positioned items.
//!
//! A [`Navigator`] keeps a single selection over the navigable elements of a
//! container (cards, menu entries, list rows) and moves it in four logical
//! directions. Left and Right follow document order; Up and Down pick the
//! nearest element by Manhattan distance. The newly selected element is
//! scrolled into view, first inside its scroll container and then in the
//! window.
//!
//! The crate never computes layout. Hosts implement the capability traits in
//! [`host`]; [`document::Document`] is a complete in-memory host.

pub mod candidates;
pub mod config;
pub mod direction;
pub mod document;
pub mod error;
pub mod geometry;
pub mod host;
pub mod navigator;
pub mod nearest;
pub mod scroll;

#[cfg(test)]
mod test_utils;

pub use candidates::CandidateSet;
pub use config::Config;
pub use direction::{Axis, Direction, DirectionResolver};
pub use error::NavError;
pub use geometry::{Point, Rect, ScrollOffset, Size};
pub use host::{CandidateQuery, Geometry, Host, InputEvents, ListenerId, Viewport, VisualEffects};
pub use navigator::{NavState, Navigator};
pub use scroll::ScrollOutcome;
