use ratatui::style::{Color, Modifier, Style};

/// Palette lifted from the product page: saffron text over a dark purple
/// backdrop, ultra violet chrome, hunter green accents.
pub struct Theme;

impl Theme {
    pub const SAFFRON: Color = Color::Rgb(0xF8, 0xC7, 0x61);
    pub const ULTRA_VIOLET: Color = Color::Rgb(0x58, 0x50, 0x81);
    pub const HUNTER_GREEN: Color = Color::Rgb(0x42, 0x64, 0x4B);
    pub const DARK_GREEN: Color = Color::Rgb(0x20, 0x38, 0x22);
    pub const DARK_PURPLE: Color = Color::Rgb(0x2C, 0x27, 0x3E);

    const PALE_GOLD: Color = Color::Rgb(0xFF, 0xE3, 0xA1);
    const SOFT_GOLD: Color = Color::Rgb(0xC9, 0x9F, 0x4E);

    pub fn base() -> Style {
        Style::default().fg(Self::SAFFRON).bg(Self::DARK_PURPLE)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::SAFFRON).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::SAFFRON)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::SOFT_GOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::ULTRA_VIOLET)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::ULTRA_VIOLET)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Self::SAFFRON)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Self::DARK_PURPLE)
            .bg(Self::SAFFRON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chip() -> Style {
        Style::default().fg(Self::SAFFRON).bg(Self::ULTRA_VIOLET)
    }

    pub fn accent() -> Style {
        Style::default().fg(Self::SAFFRON).bg(Self::HUNTER_GREEN)
    }

    pub fn door_unlocked() -> Style {
        Style::default().fg(Self::SAFFRON).add_modifier(Modifier::BOLD)
    }

    pub fn door_locked() -> Style {
        Style::default().fg(Self::ULTRA_VIOLET)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::PALE_GOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Rgb(0xE8, 0x6A, 0x5E))
    }

    pub fn success() -> Style {
        Style::default().fg(Color::Rgb(0x8F, 0xC9, 0x7A))
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::SAFFRON).bg(Self::ULTRA_VIOLET)
    }

    /// Shimmer for the hero logotype: a bright band drifts across the
    /// columns as the tick counter advances.
    pub fn wave_color(tick: u64, column: usize) -> Color {
        const WAVE: [Color; 6] = [
            Theme::SAFFRON,
            Theme::PALE_GOLD,
            Color::Rgb(0xFF, 0xF2, 0xCE),
            Theme::PALE_GOLD,
            Theme::SAFFRON,
            Theme::SOFT_GOLD,
        ];
        WAVE[(column + (tick / 2) as usize) % WAVE.len()]
    }
}
