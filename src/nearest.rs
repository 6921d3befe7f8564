//! Nearest-candidate selection
//!
//! Horizontal moves follow sequence order. Vertical moves measure the
//! Manhattan distance from an anchor on the selected element's left edge
//! to each candidate's top-left corner and keep the closest one.
//!
//! Vertical filtering only looks at the top offset. Candidates anywhere to
//! the left or right are eligible, so in a multi-column layout Down can land
//! in another column when that column's next row is closer than anything
//! below in the current one. The distance term already penalises horizontal
//! drift, which keeps column changes rare in practice.

use crate::candidates::CandidateSet;
use crate::direction::Direction;
use crate::geometry::{Point, Rect};
use crate::host::Geometry;
use crate::scroll::absolute_rect;

/// Reference point for a vertical move, `None` for horizontal directions
pub fn anchor_for(selected: &Rect, direction: Direction) -> Option<Point> {
    match direction {
        Direction::Down => Some(Point::new(selected.left, selected.bottom())),
        Direction::Up => Some(Point::new(selected.left, selected.top - 1.0)),
        Direction::Left | Direction::Right => None,
    }
}

fn nearest_matching<F>(
    anchor: Point,
    rects: &[Rect],
    skip: Option<usize>,
    accept: F,
) -> Option<usize>
where
    F: Fn(&Rect) -> bool,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, rect) in rects.iter().enumerate() {
        if Some(index) == skip || !accept(rect) {
            continue;
        }
        let distance = anchor.manhattan_to(rect);
        log::trace!(
            "candidate {} at ({}, {}) distance {}",
            index,
            rect.left,
            rect.top,
            distance
        );
        // Strict comparison: an equal distance never displaces an earlier candidate
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Closest rect whose top is at or below `anchor`
pub fn nearest_below(anchor: Point, rects: &[Rect], skip: Option<usize>) -> Option<usize> {
    nearest_matching(anchor, rects, skip, |rect| rect.top >= anchor.top)
}

/// Closest rect whose top is at or above `anchor`
pub fn nearest_above(anchor: Point, rects: &[Rect], skip: Option<usize>) -> Option<usize> {
    nearest_matching(anchor, rects, skip, |rect| rect.top <= anchor.top)
}

/// Pick the element to move to from `current`.
///
/// Geometry is read fresh from `geometry` on every call. Returns `None`
/// when nothing lies in `direction`; the caller keeps its selection.
pub fn next_target<G>(
    geometry: &G,
    candidates: &CandidateSet<G::Element>,
    current: &G::Element,
    direction: Direction,
) -> Option<G::Element>
where
    G: Geometry + ?Sized,
{
    match direction {
        Direction::Right => candidates.next_after(current).cloned(),
        Direction::Left => candidates.previous_before(current).cloned(),
        Direction::Up | Direction::Down => {
            let selected = absolute_rect(geometry, current);
            let anchor = anchor_for(&selected, direction)?;
            let rects: Vec<Rect> = candidates
                .iter()
                .map(|el| absolute_rect(geometry, el))
                .collect();
            let skip = candidates.position_of(current);
            let index = if direction == Direction::Down {
                nearest_below(anchor, &rects, skip)
            } else {
                nearest_above(anchor, &rects, skip)
            }?;
            candidates.get(index).cloned()
        }
    }
}

#[cfg(test)]
#[path = "nearest_tests.rs"]
mod nearest_tests;
