use spatnav::config::Config;
use spatnav::document::Document;
use spatnav::geometry::Size;
use spatnav::navigator::Navigator;

use super::layout::{Board, build_document, relayout};

/// Application state
pub struct App {
    pub nav: Navigator<Document>,
    pub board: Board,
    pub query: String,
    pub last_key: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create a new App with `card_count` cards laid out for a terminal
    /// of `width` x `height` cells
    pub fn new(config: Config, card_count: usize, width: u16, height: u16) -> Self {
        let (doc, board) = build_document(card_count, Size::new(width as f64, height as f64));
        let nav = Navigator::new(doc, board.container, config);
        Self {
            nav,
            board,
            query: String::new(),
            last_key: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn search_focused(&self) -> bool {
        self.nav.host().focused() == Some(self.board.search)
    }

    pub fn toggle_enabled(&mut self) {
        if self.nav.is_enabled() {
            self.nav.disable();
        } else {
            self.nav.enable();
        }
    }

    /// Re-run layout after a terminal resize; positions are read fresh on
    /// the next navigation step
    pub fn resize(&mut self, width: u16, height: u16) {
        relayout(
            self.nav.host_mut(),
            &self.board,
            Size::new(width as f64, height as f64),
        );
    }
}
