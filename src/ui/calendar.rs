use crate::app::state::{AppState, GRID_COLS};
use crate::content::{door_is_unlocked, DOOR_COUNT};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const GRID_ROWS: u8 = DOOR_COUNT / GRID_COLS;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(area);

    let headline = vec![
        Line::from(vec![
            Span::styled("December doors  ", Theme::title()),
            Span::styled(
                format!("{}/{} unlocked today", state.unlocked_count(), DOOR_COUNT),
                Theme::muted(),
            ),
        ]),
        Line::styled(
            "✦ doors are unlocked, dim ones open later in the month",
            Theme::dim(),
        ),
    ];
    frame.render_widget(Paragraph::new(headline), chunks[0]);

    // Center the grid horizontally; each door is a 9x3 bordered cell.
    let grid_w = GRID_COLS as u16 * 9;
    let grid_x = chunks[1].x + chunks[1].width.saturating_sub(grid_w) / 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); GRID_ROWS as usize])
        .split(Rect::new(
            grid_x,
            chunks[1].y,
            grid_w.min(chunks[1].width),
            chunks[1].height,
        ));

    for r in 0..GRID_ROWS {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(9); GRID_COLS as usize])
            .split(rows[r as usize]);
        for c in 0..GRID_COLS {
            let day = r * GRID_COLS + c + 1;
            render_door(frame, cols[c as usize], state, day);
        }
    }
}

fn render_door(frame: &mut Frame, area: Rect, state: &AppState, day: u8) {
    let unlocked = door_is_unlocked(day, state.day_of_month);
    let under_cursor = state.calendar_cursor.day == day;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if under_cursor {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(if under_cursor {
            Theme::border_active()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (glyph, style) = if unlocked {
        ("✦", Theme::door_unlocked())
    } else {
        ("·", Theme::door_locked())
    };
    let label = Line::from(Span::styled(format!("{:>2} {}", day, glyph), style)).centered();
    frame.render_widget(Paragraph::new(label), inner);
}
