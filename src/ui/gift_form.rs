use crate::app::state::{AppState, GiftField};
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

const SPINNER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

pub fn render(frame: &mut Frame, state: &AppState) {
    let popup = layout::centered(frame.area(), 50, 70, 48, 17);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Gift the calendar ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_active())
        .style(Theme::base());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // intro
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Length(3), // wish
            Constraint::Length(1), // error
            Constraint::Length(1), // footer
        ])
        .split(inner);

    let intro = Paragraph::new(
        Line::styled(
            "The recipient gets a festive e-card with a personal link ✨",
            Theme::muted(),
        )
        .centered(),
    );
    frame.render_widget(intro, chunks[0]);

    let form = &state.gift_form;
    let fields = [
        (GiftField::Name, " Recipient name ", &form.name),
        (GiftField::Email, " Recipient e-mail ", &form.email),
        (GiftField::Wish, " Your wish ", &form.wish),
    ];
    for (i, (field, label, input)) in fields.iter().enumerate() {
        let focused = form.focus == *field;
        let field_block = Block::default()
            .title(*label)
            .title_style(if focused { Theme::title() } else { Theme::dim() })
            .borders(Borders::ALL)
            .border_style(if focused {
                Theme::border_active()
            } else {
                Theme::border()
            });
        let field_area = chunks[i + 1];
        let field_inner = field_block.inner(field_area);
        frame.render_widget(field_block, field_area);
        frame.render_widget(
            Paragraph::new(input.text.as_str()).style(Theme::input_text()),
            field_inner,
        );
        if focused {
            let cursor_x = field_inner.x + input.text[..input.cursor].width() as u16;
            frame.set_cursor_position((
                cursor_x.min(field_inner.right().saturating_sub(1)),
                field_inner.y,
            ));
        }
    }

    if let Some(ref error) = form.error {
        frame.render_widget(
            Paragraph::new(Line::styled(error.clone(), Theme::error()).centered()),
            chunks[4],
        );
    }

    let footer = if form.sending {
        let glyph = SPINNER[((state.tick_count / 2) % SPINNER.len() as u64) as usize];
        Line::styled(format!("{} Sending the card…", glyph), Theme::success()).centered()
    } else {
        Line::styled("Tab fields · Enter send · Esc close", Theme::dim()).centered()
    };
    frame.render_widget(Paragraph::new(footer), chunks[5]);
}
