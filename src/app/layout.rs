//! Card board layout for the demo document
//!
//! Cards have uneven widths and heights and wrap into rows, so Up and Down
//! have to pick between neighbours that do not line up in columns.

use spatnav::document::{Document, NodeId};
use spatnav::geometry::{Rect, Size};

pub const STATUS_HEIGHT: f64 = 1.0;
pub const SEARCH_WIDTH: f64 = 32.0;
pub const SEARCH_HEIGHT: f64 = 3.0;
const GAP: f64 = 1.0;

pub const ITEM_CLASS: &str = "nav-item";

const LABELS: [&str; 16] = [
    "Inbox", "Drafts", "Archive", "Photos", "Music", "Settings", "Downloads", "Projects", "Notes",
    "Calendar", "Contacts", "日本語メモ", "Weather", "Maps", "Terminal", "Backups",
];

/// Node handles of the demo board
#[derive(Debug, Clone)]
pub struct Board {
    pub container: NodeId,
    pub search: NodeId,
    pub cards: Vec<NodeId>,
}

pub fn card_label(index: usize) -> String {
    format!("{} #{}", LABELS[index % LABELS.len()], index + 1)
}

fn card_size(index: usize) -> (f64, f64) {
    let width = 14 + (index * 7) % 11;
    let height = 4 + index % 3;
    (width as f64, height as f64)
}

/// Create the board container, the search input and `card_count` cards
pub fn build_document(card_count: usize, window: Size) -> (Document, Board) {
    let mut doc = Document::new(window);
    let root = doc.root();
    let container = doc.append(root, "main", Rect::default());

    let search = doc.append(container, "input", Rect::default());
    doc.add_class(search, ITEM_CLASS);
    doc.set_label(search, "Search");

    let cards = (0..card_count)
        .map(|i| {
            let card = doc.append(container, "div", Rect::default());
            doc.add_class(card, ITEM_CLASS);
            doc.set_label(card, &card_label(i));
            card
        })
        .collect();

    let board = Board {
        container,
        search,
        cards,
    };
    relayout(&mut doc, &board, window);
    (doc, board)
}

/// Position every node for the given window size.
///
/// The container sits inside a one-cell border and leaves the last row for
/// the status line.
pub fn relayout(doc: &mut Document, board: &Board, window: Size) {
    doc.set_window_size(window);

    let width = (window.width - 2.0).max(0.0);
    let height = (window.height - STATUS_HEIGHT - 2.0).max(0.0);
    doc.set_rect(board.container, Rect::new(1.0, 1.0, width, height));

    doc.set_rect(
        board.search,
        Rect::new(1.0, 0.0, SEARCH_WIDTH.min((width - 2.0).max(1.0)), SEARCH_HEIGHT),
    );

    let mut x = 1.0;
    let mut y = SEARCH_HEIGHT + GAP;
    let mut row_height: f64 = 0.0;
    for (i, card) in board.cards.iter().enumerate() {
        let (card_width, card_height) = card_size(i);
        let card_width = card_width.min((width - 2.0).max(1.0));
        if x > 1.0 && x + card_width > width - 1.0 {
            x = 1.0;
            y += row_height + GAP;
            row_height = 0.0;
        }
        doc.set_rect(*card, Rect::new(x, y, card_width, card_height));
        x += card_width + GAP;
        row_height = row_height.max(card_height);
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
