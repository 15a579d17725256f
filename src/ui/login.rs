use crate::app::state::AppState;
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let card = layout::centered(area, 50, 60, 44, 11);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .title(" Sign in to Advent Magic ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_active())
        .style(Theme::base());
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let intro = Paragraph::new(vec![
        Line::default(),
        Line::styled("We'll send a magic link to your inbox ✨", Theme::muted()).centered(),
    ]);
    frame.render_widget(intro, Rect::new(inner.x, inner.y, inner.width, 2));

    // E-mail input
    let input_area = Rect::new(
        inner.x + 2,
        inner.y + 3,
        inner.width.saturating_sub(4),
        3.min(inner.height.saturating_sub(3)),
    );
    let input_block = Block::default()
        .title(" E-mail ")
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let input_inner = input_block.inner(input_area);
    frame.render_widget(input_block, input_area);

    let email = &state.login_form.email;
    let shown: &str = if email.text.is_empty() {
        "you@example.com"
    } else {
        &email.text
    };
    let style = if email.text.is_empty() {
        Theme::dim()
    } else {
        Theme::input_text()
    };
    frame.render_widget(Paragraph::new(shown).style(style), input_inner);

    if !state.day_modal_open && !state.gift_form_open {
        let cursor_x = input_inner.x + email.text[..email.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(input_inner.right().saturating_sub(1)), input_inner.y));
    }

    let footer_y = input_area.bottom() + 1;
    if footer_y < inner.bottom() {
        let footer = if state.logged_in {
            Line::styled("✔ You are signed in.", Theme::success()).centered()
        } else {
            Line::styled("Enter: get the link (any address works in this demo)", Theme::dim())
                .centered()
        };
        frame.render_widget(
            Paragraph::new(footer),
            Rect::new(inner.x, footer_y, inner.width, 1),
        );
    }
}
