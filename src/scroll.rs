//! Scroll-into-view geometry
//!
//! Two visibility checks run in order: the scroll container first, then the
//! window. Only the first failing level is adjusted, and only along the axis
//! of travel.

use crate::direction::{Axis, Direction};
use crate::geometry::{Rect, ScrollOffset, sanitize};
use crate::host::{Geometry, Viewport};

/// Offset-parent chains deeper than this are treated as cyclic
const MAX_CHAIN_DEPTH: usize = 4096;

/// What `scroll_to` changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    None,
    Container { axis: Axis, delta: f64 },
    Page { axis: Axis, delta: f64 },
}

fn chain_sum<G, F>(geometry: &G, el: &G::Element, pick: F) -> f64
where
    G: Geometry + ?Sized,
    F: Fn(&Rect) -> f64,
{
    let mut total = 0.0;
    let mut current = Some(el.clone());
    let mut depth = 0;
    while let Some(node) = current {
        if depth == MAX_CHAIN_DEPTH {
            log::warn!("Offset parent chain exceeds {} levels", MAX_CHAIN_DEPTH);
            break;
        }
        total += sanitize(pick(&geometry.offset_rect(&node)));
        current = geometry.offset_parent(&node);
        depth += 1;
    }
    total
}

/// Left offset relative to the document, summed over the offset-parent chain
pub fn absolute_offset_left<G: Geometry + ?Sized>(geometry: &G, el: &G::Element) -> f64 {
    chain_sum(geometry, el, |rect| rect.left)
}

/// Top offset relative to the document, summed over the offset-parent chain
pub fn absolute_offset_top<G: Geometry + ?Sized>(geometry: &G, el: &G::Element) -> f64 {
    chain_sum(geometry, el, |rect| rect.top)
}

/// Element rectangle in document coordinates
pub fn absolute_rect<G: Geometry + ?Sized>(geometry: &G, el: &G::Element) -> Rect {
    let local = geometry.offset_rect(el);
    Rect::new(
        absolute_offset_left(geometry, el),
        absolute_offset_top(geometry, el),
        local.width,
        local.height,
    )
}

/// Element rectangle relative to the content origin of `container`
pub fn rect_in_container<G: Geometry + ?Sized>(
    geometry: &G,
    container: &G::Element,
    el: &G::Element,
) -> Rect {
    let origin = absolute_rect(geometry, container);
    absolute_rect(geometry, el).translate(-origin.left, -origin.top)
}

/// Element rectangle as currently visible in the window, after every
/// ancestor's scroll offset and the window scroll are applied
pub fn client_rect<H>(host: &H, el: &H::Element) -> Rect
where
    H: Geometry + Viewport + ?Sized,
{
    let local = host.offset_rect(el);
    let mut left = 0.0;
    let mut top = 0.0;
    let mut current = Some(el.clone());
    let mut depth = 0;
    while let Some(node) = current {
        if depth == MAX_CHAIN_DEPTH {
            break;
        }
        let rect = host.offset_rect(&node);
        left += rect.left;
        top += rect.top;
        let parent = host.offset_parent(&node);
        if let Some(parent) = &parent {
            let scroll = host.scroll_offset(parent);
            left -= scroll.left;
            top -= scroll.top;
        }
        current = parent;
        depth += 1;
    }
    let window = host.window_scroll();
    Rect::new(left - window.left, top - window.top, local.width, local.height)
}

/// True iff every edge of `el` lies inside the container's visible box
pub fn in_container_view<G: Geometry + ?Sized>(
    geometry: &G,
    container: &G::Element,
    el: &G::Element,
) -> bool {
    let rect = rect_in_container(geometry, container, el);
    let scroll = geometry.scroll_offset(container);
    let size = geometry.client_size(container);
    Rect::new(scroll.left, scroll.top, size.width, size.height).contains(&rect)
}

/// True iff the whole of `el` is visible in the window
pub fn in_viewport<H>(host: &H, el: &H::Element) -> bool
where
    H: Geometry + Viewport + ?Sized,
{
    let size = host.window_size();
    Rect::new(0.0, 0.0, size.width, size.height).contains(&client_rect(host, el))
}

/// New scroll offset along one axis.
///
/// Leading directions align the element's leading edge with the view's
/// leading edge; trailing directions align the trailing edges.
fn aligned_offset(
    direction: Direction,
    current: f64,
    el_offset: f64,
    el_size: f64,
    view: f64,
) -> f64 {
    let target = if direction.is_leading() {
        el_offset
    } else {
        let delta = el_offset - current - (view - el_size);
        current + delta
    };
    target.max(0.0)
}

fn split(axis: Axis, rect: &Rect) -> (f64, f64) {
    match axis {
        Axis::Horizontal => (rect.left, rect.width),
        Axis::Vertical => (rect.top, rect.height),
    }
}

fn with_axis(axis: Axis, offset: ScrollOffset, value: f64) -> ScrollOffset {
    match axis {
        Axis::Horizontal => ScrollOffset::new(value, offset.top),
        Axis::Vertical => ScrollOffset::new(offset.left, value),
    }
}

fn axis_value(axis: Axis, offset: ScrollOffset) -> f64 {
    match axis {
        Axis::Horizontal => offset.left,
        Axis::Vertical => offset.top,
    }
}

/// Vertical direction to travel so `el` comes into view: `Up` when its top
/// edge is above the visible area of the container or the window
pub fn vertical_direction_towards<H>(
    host: &H,
    container: &H::Element,
    el: &H::Element,
) -> Direction
where
    H: Geometry + Viewport + ?Sized,
{
    let rect = rect_in_container(host, container, el);
    if rect.top < host.scroll_offset(container).top || client_rect(host, el).top < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Scroll `container` or the window so that `el` becomes fully visible
pub fn scroll_to<H>(
    host: &mut H,
    container: &H::Element,
    el: &H::Element,
    direction: Direction,
) -> ScrollOutcome
where
    H: Geometry + Viewport + ?Sized,
{
    let axis = direction.axis();

    if !in_container_view(&*host, container, el) {
        let rect = rect_in_container(&*host, container, el);
        let scroll = host.scroll_offset(container);
        let size = host.client_size(container);
        let view = match axis {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        };
        let (el_offset, el_size) = split(axis, &rect);
        let current = axis_value(axis, scroll);
        let target = aligned_offset(direction, current, el_offset, el_size, view);
        host.set_scroll_offset(container, with_axis(axis, scroll, target));
        log::debug!("Container scroll {:?} {} -> {}", axis, current, target);
        return ScrollOutcome::Container {
            axis,
            delta: target - current,
        };
    }

    if !in_viewport(&*host, el) {
        let rect = absolute_rect(&*host, el);
        let scroll = host.window_scroll();
        let size = host.window_size();
        let view = match axis {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        };
        let (el_offset, el_size) = split(axis, &rect);
        let current = axis_value(axis, scroll);
        let target = aligned_offset(direction, current, el_offset, el_size, view);
        host.set_window_scroll(with_axis(axis, scroll, target));
        log::debug!("Window scroll {:?} {} -> {}", axis, current, target);
        return ScrollOutcome::Page {
            axis,
            delta: target - current,
        };
    }

    ScrollOutcome::None
}

#[cfg(test)]
#[path = "scroll_tests.rs"]
mod scroll_tests;
