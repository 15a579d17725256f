use crate::app::state::{AppState, PurchaseEntry};
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let card = layout::centered(area, 70, 80, 56, 15);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .title(" Choose your calendar ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_active())
        .style(Theme::base());
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::styled("One theme, 24 doors, all of December.", Theme::muted()).centered());
    lines.push(Line::default());

    for (i, entry) in PurchaseEntry::ALL.iter().enumerate() {
        let selected = i == state.purchase_menu.selected;
        let marker = if selected { "❯ " } else { "  " };
        match entry {
            PurchaseEntry::Theme(theme) => {
                let ring = if *theme == state.theme { "●" } else { "○" };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {}{} {:<14}", marker, ring, theme.label()),
                        if selected { Theme::title() } else { Theme::text() },
                    ),
                    Span::styled(theme.tagline(), Theme::muted()),
                ]));
            }
            PurchaseEntry::Buy => {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!(" {}Buy calendar ", marker),
                    if selected { Theme::button() } else { Theme::text() },
                )));
            }
            PurchaseEntry::BuyAsGift => {
                lines.push(Line::from(Span::styled(
                    format!(" {}♥ Buy as a gift ", marker),
                    if selected { Theme::accent() } else { Theme::text() },
                )));
            }
        }
    }

    lines.push(Line::default());
    if state.has_access {
        lines.push(
            Line::styled("✔ The calendar is yours. Go open some doors!", Theme::success())
                .centered(),
        );
    }
    lines.push(Line::styled("↑↓ move · Enter select", Theme::dim()).centered());

    frame.render_widget(Paragraph::new(lines), inner);
}
