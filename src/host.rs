//! Capabilities the navigator consumes from its host
//!
//! The navigator never computes layout or touches a rendering surface
//! directly. A host (a browser binding, a terminal UI, the in-memory
//! [`Document`](crate::document::Document)) implements these traits and the
//! navigator drives it through them.

use std::fmt;

use crate::geometry::{Rect, ScrollOffset, Size};

/// Handle returned when the navigator registers for key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Layout reads and scroll writes for elements
pub trait Geometry {
    type Element: Clone + PartialEq + fmt::Debug;

    /// Offsets relative to the element's offset parent, plus its size
    fn offset_rect(&self, el: &Self::Element) -> Rect;

    /// Next positioned ancestor, `None` at the document root
    fn offset_parent(&self, el: &Self::Element) -> Option<Self::Element>;

    fn scroll_offset(&self, el: &Self::Element) -> ScrollOffset;

    fn set_scroll_offset(&mut self, el: &Self::Element, offset: ScrollOffset);

    /// Size of the visible content box
    fn client_size(&self, el: &Self::Element) -> Size;
}

/// Finds navigable elements under a subtree
pub trait CandidateQuery: Geometry {
    /// Matching descendants of `root`, in document order
    fn query_all(&self, root: &Self::Element, selector: &str) -> Vec<Self::Element>;

    /// Text-input-like elements receive focus instead of a marker
    fn is_text_input(&self, el: &Self::Element) -> bool;
}

/// Marks the selected element
pub trait VisualEffects: Geometry {
    fn highlight(&mut self, el: &Self::Element, marker: &str);
    fn unhighlight(&mut self, el: &Self::Element, marker: &str);
    fn focus(&mut self, el: &Self::Element);
    fn blur(&mut self, el: &Self::Element);
}

/// Window-level dimensions and scrolling
pub trait Viewport {
    fn window_size(&self) -> Size;
    fn window_scroll(&self) -> ScrollOffset;
    fn set_window_scroll(&mut self, offset: ScrollOffset);
}

/// Key listener registration
pub trait InputEvents {
    fn add_key_listener(&mut self) -> ListenerId;
    fn remove_key_listener(&mut self, id: ListenerId);
}

/// Everything a [`Navigator`](crate::navigator::Navigator) needs
pub trait Host: CandidateQuery + VisualEffects + Viewport + InputEvents {}

impl<T> Host for T where T: CandidateQuery + VisualEffects + Viewport + InputEvents {}
