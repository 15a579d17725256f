use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = if state.gift_form_open {
        "Tab fields · Enter send · Esc close"
    } else if state.day_modal_open {
        "←/→ previews · Esc close"
    } else {
        match state.screen {
            Screen::Home => "↑↓ scroll · Enter buy · q quit",
            Screen::Calendar => "arrows doors · Enter open · q quit",
            Screen::Purchase => "↑↓ move · Enter select · q quit",
            Screen::Login => "type e-mail · Enter magic link",
        }
    };

    let left = format!(" {} ", state.status_line());
    let right = format!(" {} ", hints);
    let pad = (area.width as usize).saturating_sub(left.width() + right.width());

    let line = Line::from(vec![
        Span::styled(left, Theme::status_bar()),
        Span::styled(" ".repeat(pad), Theme::status_bar()),
        Span::styled(right, Theme::status_bar().add_modifier(Modifier::DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
