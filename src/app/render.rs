use ratatui::{
    Frame,
    layout::Rect as Area,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use spatnav::document::NodeId;
use spatnav::geometry::Rect;
use spatnav::host::Geometry;
use spatnav::navigator::NavState;
use spatnav::scroll::{absolute_rect, client_rect};

use super::state::App;

/// Truncate `text` so it occupies at most `max_width` terminal columns
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

fn intersect(a: &Rect, b: &Rect) -> Option<Rect> {
    let left = a.left.max(b.left);
    let top = a.top.max(b.top);
    let right = a.right().min(b.right());
    let bottom = a.bottom().min(b.bottom());
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(left, top, right - left, bottom - top))
}

fn to_area(rect: &Rect) -> Area {
    Area {
        x: rect.left.max(0.0).round() as u16,
        y: rect.top.max(0.0).round() as u16,
        width: rect.width.max(0.0).round() as u16,
        height: rect.height.max(0.0).round() as u16,
    }
}

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let status_y = area.height.saturating_sub(1);

        let board_frame = Area {
            height: status_y,
            ..area
        };
        let border_color = if self.nav.is_enabled() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title(" Cards ")
                .border_style(Style::default().fg(border_color)),
            board_frame,
        );

        self.render_nodes(frame, area);
        self.render_status(frame, Area { y: status_y, height: 1.min(area.height), ..area });
    }

    fn render_nodes(&self, frame: &mut Frame, area: Area) {
        let doc = self.nav.host();
        let container = self.board.container;
        let size = doc.client_size(&container);
        let origin = client_rect(doc, &container);
        let visible = Rect::new(origin.left, origin.top, size.width, size.height);
        let frame_rect = Rect::new(0.0, 0.0, area.width as f64, area.height as f64);

        for node in doc.children(container) {
            let Some(clip) = intersect(&client_rect(doc, node), &visible)
                .and_then(|r| intersect(&r, &frame_rect))
            else {
                continue;
            };
            self.render_node(frame, *node, to_area(&clip));
        }
    }

    fn render_node(&self, frame: &mut Frame, node: NodeId, target: Area) {
        let doc = self.nav.host();
        let selected = self.nav.selected() == Some(&node);
        let is_search = node == self.board.search;

        let style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let inner_width = target.width.saturating_sub(2) as usize;
        let title = truncate_to_width(doc.label(node), inner_width);

        let body = if is_search {
            if self.query.is_empty() && !selected {
                Line::styled("type to search", Style::default().fg(Color::DarkGray))
            } else {
                Line::raw(truncate_to_width(&self.query, inner_width))
            }
        } else {
            let rect = absolute_rect(doc, &node);
            let position = format!("@ {},{}", rect.left, rect.top);
            Line::raw(truncate_to_width(&position, inner_width))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(style);
        frame.render_widget(Paragraph::new(body).block(block), target);

        if is_search && selected && target.width > 2 && target.height > 2 {
            let typed = self.query.chars().filter_map(|c| c.width()).sum::<usize>();
            let x = target.x + 1 + (typed as u16).min(target.width - 3);
            frame.set_cursor_position((x, target.y + 1));
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Area) {
        let doc = self.nav.host();
        let state = match self.nav.state() {
            NavState::Disabled => "disabled",
            NavState::EnabledNoSelection => "ready",
            NavState::EnabledSelected => "selected",
        };
        let selected = self
            .nav
            .selected()
            .map(|id| doc.label(*id).to_string())
            .unwrap_or_else(|| "-".to_string());
        let scroll = doc.scroll_offset(&self.board.container);
        let text = format!(
            " {} | {} | scroll {} | {} items | arrows move  r rescan  e toggle  Esc quit",
            state,
            selected,
            scroll.top,
            self.nav.candidates().len()
        );
        let text = truncate_to_width(&text, area.width as usize);
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::Black).bg(Color::Cyan)),
            area,
        );
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
