use crate::app::state::AppState;
use crate::content::{DAY_SLIDES, DOOR_COUNT, PLACEHOLDER_LINK};
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(item) = state.resolve_content() else {
        return;
    };
    let day = state.selected_day.unwrap_or(0);

    let popup = layout::centered(frame.area(), 50, 60, 48, 14);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" Day {} / {} ", day, DOOR_COUNT))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_active())
        .style(Theme::base());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let slide = &DAY_SLIDES[state.modal_slide % DAY_SLIDES.len()];

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::default());
    lines.push(Line::styled(item.title.clone(), Theme::title()).centered());
    lines.push(Line::styled(item.description.clone(), Theme::muted()).centered());
    lines.push(Line::default());
    lines.push(
        Line::from(vec![
            Span::styled("◀  ", Theme::dim()),
            Span::styled(format!(" {}  ({}) ", slide.label, slide.kind), Theme::chip()),
            Span::styled("  ▶", Theme::dim()),
        ])
        .centered(),
    );
    lines.push(
        Line::styled(
            format!("preview {} of {}", state.modal_slide + 1, DAY_SLIDES.len()),
            Theme::dim(),
        )
        .centered(),
    );
    lines.push(Line::default());
    if item.link == PLACEHOLDER_LINK {
        lines.push(
            Line::styled("Download link arrives with the real product", Theme::dim()).centered(),
        );
    } else {
        lines.push(Line::styled(format!("⤓ {}", item.link), Theme::text()).centered());
    }
    lines.push(Line::default());
    lines.push(Line::styled("←/→ previews · Esc close", Theme::dim()).centered());

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
