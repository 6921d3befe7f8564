//! Tests for nearest-candidate selection

use super::*;
use crate::test_utils::test_helpers::{card_grid, doc_with_items};
use proptest::prelude::*;

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_down_from_top_left_card_picks_card_below() {
    let (doc, container, ids) = card_grid();
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    let target = next_target(&doc, &candidates, &ids[0], Direction::Down);
    assert_eq!(target, Some(ids[2]));
}

#[test]
fn test_up_from_bottom_right_card_picks_card_above() {
    let (doc, container, ids) = card_grid();
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    let target = next_target(&doc, &candidates, &ids[3], Direction::Up);
    assert_eq!(target, Some(ids[1]));
}

#[test]
fn test_right_and_left_follow_sequence_order() {
    let (doc, container, ids) = card_grid();
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    assert_eq!(next_target(&doc, &candidates, &ids[1], Direction::Right), Some(ids[2]));
    assert_eq!(next_target(&doc, &candidates, &ids[2], Direction::Left), Some(ids[1]));
}

#[test]
fn test_right_from_last_is_absent() {
    let (doc, container, ids) = card_grid();
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    assert_eq!(next_target(&doc, &candidates, &ids[3], Direction::Right), None);
}

#[test]
fn test_left_from_first_is_absent() {
    let (doc, container, ids) = card_grid();
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    assert_eq!(next_target(&doc, &candidates, &ids[0], Direction::Left), None);
}

#[test]
fn test_down_from_bottom_row_is_absent() {
    let (doc, container, ids) = card_grid();
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    assert_eq!(next_target(&doc, &candidates, &ids[2], Direction::Down), None);
    assert_eq!(next_target(&doc, &candidates, &ids[3], Direction::Down), None);
}

#[test]
fn test_up_from_top_row_is_absent() {
    let (doc, container, ids) = card_grid();
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    assert_eq!(next_target(&doc, &candidates, &ids[0], Direction::Up), None);
}

#[test]
fn test_equal_distance_keeps_first_encountered() {
    // Anchor at (50, 50): both lower cards are 50 away
    let (doc, container, ids) = doc_with_items(&[
        (50.0, 0.0, 10.0, 50.0),
        (0.0, 50.0, 10.0, 10.0),
        (100.0, 50.0, 10.0, 10.0),
    ]);
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    assert_eq!(next_target(&doc, &candidates, &ids[0], Direction::Down), Some(ids[1]));

    let (doc, container, ids) = doc_with_items(&[
        (50.0, 0.0, 10.0, 50.0),
        (100.0, 50.0, 10.0, 10.0),
        (0.0, 50.0, 10.0, 10.0),
    ]);
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    assert_eq!(next_target(&doc, &candidates, &ids[0], Direction::Down), Some(ids[1]));
}

#[test]
fn test_down_can_change_column_when_closer() {
    // No horizontal filter: a near card in another column beats a far one below
    let (doc, container, ids) = doc_with_items(&[
        (0.0, 0.0, 100.0, 50.0),
        (300.0, 50.0, 100.0, 50.0),
        (0.0, 400.0, 100.0, 50.0),
    ]);
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    assert_eq!(next_target(&doc, &candidates, &ids[0], Direction::Down), Some(ids[1]));
}

#[test]
fn test_zero_height_selection_does_not_select_itself() {
    let (doc, container, ids) = doc_with_items(&[(0.0, 0.0, 100.0, 0.0), (0.0, 80.0, 100.0, 20.0)]);
    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    assert_eq!(next_target(&doc, &candidates, &ids[0], Direction::Down), Some(ids[1]));
}

#[test]
fn test_vertical_move_uses_absolute_offsets() {
    let (mut doc, container, ids) = doc_with_items(&[(0.0, 0.0, 100.0, 50.0)]);
    // A wrapper pushed down by 200 holding a card at local (0, 0)
    let wrapper = doc.append(container, "section", Rect::new(0.0, 200.0, 100.0, 100.0));
    let nested = doc.append(wrapper, "div", Rect::new(0.0, 0.0, 100.0, 50.0));
    doc.add_class(nested, "nav-item");
    let sibling = doc.append(container, "div", Rect::new(0.0, 100.0, 100.0, 50.0));
    doc.add_class(sibling, "nav-item");

    let candidates = CandidateSet::scan(&doc, &container, ".nav-item");
    assert_eq!(candidates.len(), 3);
    assert_eq!(next_target(&doc, &candidates, &ids[0], Direction::Down), Some(sibling));
    assert_eq!(next_target(&doc, &candidates, &sibling, Direction::Down), Some(nested));
}

#[test]
fn test_anchor_for_vertical_directions() {
    let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(anchor_for(&rect, Direction::Down), Some(Point::new(10.0, 70.0)));
    assert_eq!(anchor_for(&rect, Direction::Up), Some(Point::new(10.0, 19.0)));
    assert_eq!(anchor_for(&rect, Direction::Left), None);
    assert_eq!(anchor_for(&rect, Direction::Right), None);
}

#[test]
fn test_nearest_below_includes_rects_on_anchor_line() {
    let rects = [Rect::new(0.0, 49.0, 1.0, 1.0), Rect::new(5.0, 50.0, 1.0, 1.0)];
    assert_eq!(nearest_below(Point::new(0.0, 50.0), &rects, None), Some(1));
    assert_eq!(nearest_above(Point::new(0.0, 49.0), &rects, None), Some(0));
}

#[test]
fn test_nearest_skips_given_index() {
    let rects = [Rect::new(0.0, 50.0, 1.0, 1.0), Rect::new(10.0, 60.0, 1.0, 1.0)];
    assert_eq!(nearest_below(Point::new(0.0, 50.0), &rects, Some(0)), Some(1));
    assert_eq!(nearest_below(Point::new(0.0, 50.0), &[], None), None);
}

// =========================================================================
// Property-Based Tests
// =========================================================================

fn rects_strategy() -> impl Strategy<Value = Vec<Rect>> {
    prop::collection::vec((-500i32..500, -500i32..500, 1i32..100, 1i32..100), 0..30).prop_map(|v| {
        v.into_iter()
            .map(|(l, t, w, h)| Rect::new(l as f64, t as f64, w as f64, h as f64))
            .collect()
    })
}

// *For any* set of rects, Down picks the first eligible rect with the smallest
// Manhattan distance to the anchor, and Up mirrors it above the anchor.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_vertical_selection_minimizes_distance(
        rects in rects_strategy(),
        anchor_left in -500i32..500,
        anchor_top in -500i32..500,
    ) {
        let anchor = Point::new(anchor_left as f64, anchor_top as f64);

        for (below, picked) in [
            (true, nearest_below(anchor, &rects, None)),
            (false, nearest_above(anchor, &rects, None)),
        ] {
            let eligible: Vec<usize> = (0..rects.len())
                .filter(|&i| if below { rects[i].top >= anchor.top } else { rects[i].top <= anchor.top })
                .collect();
            let min = eligible
                .iter()
                .map(|&i| anchor.manhattan_to(&rects[i]))
                .fold(f64::INFINITY, f64::min);
            let expected = eligible
                .iter()
                .copied()
                .find(|&i| anchor.manhattan_to(&rects[i]) == min);
            prop_assert_eq!(picked, expected);
        }
    }

    #[test]
    fn prop_horizontal_moves_follow_sequence_order(count in 1usize..12, start in 0usize..12) {
        prop_assume!(start < count);
        let items: Vec<_> = (0..count).map(|i| ((i * 37 % 5) as f64 * 60.0, (i / 3) as f64 * 40.0, 50.0, 30.0)).collect();
        let (doc, container, ids) = doc_with_items(&items);
        let candidates = CandidateSet::scan(&doc, &container, ".nav-item");

        let right = next_target(&doc, &candidates, &ids[start], Direction::Right);
        let left = next_target(&doc, &candidates, &ids[start], Direction::Left);
        prop_assert_eq!(right, ids.get(start + 1).copied());
        prop_assert_eq!(left, start.checked_sub(1).map(|i| ids[i]));
    }
}
