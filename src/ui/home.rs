use crate::app::state::AppState;
use crate::content::{ThemeId, FEATURE_CARDS, PREVIEW_TILES, WHATS_INSIDE};
use crate::ui::theme::Theme;
use chrono::Datelike;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const LOGO: &[&str] = &[
    " ▄▀█ █▀▄ █ █ █▀▀ █▄ █ ▀█▀   █▀▄▀█ ▄▀█ █▀▀ █ █▀▀ ",
    " █▀█ █▄▀ ▀▄▀ ██▄ █ ▀█  █    █ ▀ █ █▀█ █▄█ █ █▄▄ ",
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::default());
    for row in LOGO {
        let spans: Vec<Span> = row
            .chars()
            .enumerate()
            .map(|(i, c)| {
                Span::styled(
                    c.to_string(),
                    Style::default().fg(Theme::wave_color(state.tick_count, i)),
                )
            })
            .collect();
        lines.push(Line::from(spans).centered());
    }
    lines.push(Line::default());
    lines.push(Line::styled("Open a little magic every day ✨", Theme::title()).centered());
    lines.push(
        Line::styled(
            "24 days of inspiration, discoveries and joy. A digital advent",
            Theme::muted(),
        )
        .centered(),
    );
    lines.push(Line::styled("calendar with content to your taste.", Theme::muted()).centered());
    lines.push(Line::default());

    // Theme chips, the current one marked
    let mut chips: Vec<Span> = Vec::new();
    for theme in ThemeId::ALL {
        let marker = if theme == state.theme { "● " } else { "" };
        chips.push(Span::styled(
            format!(" {}{} ", marker, theme.label()),
            Theme::chip(),
        ));
        chips.push(Span::raw(" "));
    }
    lines.push(Line::from(chips).centered());
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(" Enter  Choose your calendar ", Theme::button())).centered(),
    );
    lines.push(Line::default());
    lines.push(Line::default());

    lines.push(Line::styled("What awaits you", Theme::title()));
    for (title, desc) in FEATURE_CARDS {
        lines.push(Line::from(vec![
            Span::styled(format!("  ✔ {:<22}", title), Theme::text()),
            Span::styled(*desc, Theme::muted()),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::styled("Gifts inside the calendar", Theme::title()));
    let mut tiles: Vec<Span> = vec![Span::raw("  ")];
    for (label, hint) in PREVIEW_TILES {
        tiles.push(Span::styled(format!(" {} ({}) ", label, hint), Theme::chip()));
        tiles.push(Span::raw(" "));
    }
    lines.push(Line::from(tiles));
    lines.push(Line::default());

    lines.push(Line::styled("What's in the calendar", Theme::title()));
    for (title, desc) in WHATS_INSIDE {
        lines.push(Line::from(vec![
            Span::styled(format!("  • {:<22}", title), Theme::text()),
            Span::styled(*desc, Theme::muted()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(" F3  Pick a theme and buy ", Theme::button())).centered());
    lines.push(Line::default());
    lines.push(
        Line::styled(
            format!(
                "© {} Advent Magic  ·  support@adventmagic.com",
                chrono::Local::now().year()
            ),
            Theme::dim(),
        )
        .centered(),
    );

    let paragraph = Paragraph::new(lines).scroll((state.home_scroll, 0));
    frame.render_widget(paragraph, area);
}
