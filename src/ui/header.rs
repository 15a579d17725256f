use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled("✦ Advent Magic", Theme::title()),
        Span::raw("    "),
    ];
    for (i, screen) in Screen::ALL.iter().enumerate() {
        // The last tab swaps to "My calendar" once signed in.
        let label = if *screen == Screen::Login && state.logged_in {
            "My calendar"
        } else {
            screen.title()
        };
        let style = if *screen == state.screen {
            Theme::chip().add_modifier(Modifier::BOLD)
        } else {
            Theme::dim()
        };
        spans.push(Span::styled(format!(" F{} {} ", i + 1, label), style));
        spans.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            "24 days of small discoveries, one door at a time",
            Theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
