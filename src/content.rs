//! Door content: themes, the 24-item catalog behind the doors, and the
//! date-based unlock rule.
//!
//! A built-in catalog is generated at startup; `catalog.toml` next to the
//! config file may replace the item list of any theme, and is validated to
//! hold exactly [`DOOR_COUNT`] items per listed theme.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of doors in the calendar.
pub const DOOR_COUNT: u8 = 24;

/// Link value meaning "nothing wired up" in the built-in catalog.
pub const PLACEHOLDER_LINK: &str = "#";

/// A door unlocks once the day of the month reaches its number.
/// Ownership does not gate doors; only the date does.
pub fn door_is_unlocked(door: u8, day_of_month: u8) -> bool {
    door <= day_of_month
}

/// The four content tracks a calendar can be bought in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeId {
    Scientific,
    Esoteric,
    SelfGrowth,
    Entertainment,
}

impl ThemeId {
    pub const ALL: [ThemeId; 4] = [
        ThemeId::Scientific,
        ThemeId::Esoteric,
        ThemeId::SelfGrowth,
        ThemeId::Entertainment,
    ];

    /// Display label used across the UI.
    pub fn label(self) -> &'static str {
        match self {
            ThemeId::Scientific => "Scientific",
            ThemeId::Esoteric => "Esoteric",
            ThemeId::SelfGrowth => "Self-growth",
            ThemeId::Entertainment => "Entertainment",
        }
    }

    /// One-line pitch shown on the purchase screen.
    pub fn tagline(self) -> &'static str {
        match self {
            ThemeId::Scientific => "A curious discovery behind every door",
            ThemeId::Esoteric => "Rituals and practices for inner balance",
            ThemeId::SelfGrowth => "A small step forward every day",
            ThemeId::Entertainment => "Quizzes, jokes and mini-games",
        }
    }

    fn key(self) -> &'static str {
        match self {
            ThemeId::Scientific => "scientific",
            ThemeId::Esoteric => "esoteric",
            ThemeId::SelfGrowth => "self-growth",
            ThemeId::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scientific" => Ok(ThemeId::Scientific),
            "esoteric" => Ok(ThemeId::Esoteric),
            "self-growth" => Ok(ThemeId::SelfGrowth),
            "entertainment" => Ok(ThemeId::Entertainment),
            other => Err(CatalogError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown theme '{0}' (expected scientific, esoteric, self-growth or entertainment)")]
    UnknownTheme(String),
    #[error("catalog override is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("theme '{theme}' has {found} items, expected exactly 24")]
    WrongItemCount { theme: ThemeId, found: usize },
    #[error("theme '{theme}', item {index}: title and description must not be empty")]
    BlankItem { theme: ThemeId, index: usize },
}

/// A single door's content. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub description: String,
    #[serde(default = "default_link")]
    pub link: String,
}

fn default_link() -> String {
    PLACEHOLDER_LINK.to_string()
}

/// TOML schema for `catalog.toml`: any subset of the four theme tables.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CatalogFile {
    #[serde(default)]
    scientific: Option<Vec<ContentItem>>,
    #[serde(default)]
    esoteric: Option<Vec<ContentItem>>,
    #[serde(default)]
    self_growth: Option<Vec<ContentItem>>,
    #[serde(default)]
    entertainment: Option<Vec<ContentItem>>,
}

/// Every theme maps to exactly [`DOOR_COUNT`] items; door number = index + 1.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    items: HashMap<ThemeId, Vec<ContentItem>>,
}

impl ContentCatalog {
    /// Generated catalog matching the built-in product content.
    pub fn builtin() -> Self {
        let mut items = HashMap::new();
        for theme in ThemeId::ALL {
            items.insert(theme, builtin_items(theme));
        }
        Self { items }
    }

    /// Parse a TOML override and merge it over the built-in catalog.
    /// Each listed theme must supply exactly [`DOOR_COUNT`] items with
    /// non-empty title and description; unlisted themes keep built-in items.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        let mut catalog = Self::builtin();
        let overrides = [
            (ThemeId::Scientific, file.scientific),
            (ThemeId::Esoteric, file.esoteric),
            (ThemeId::SelfGrowth, file.self_growth),
            (ThemeId::Entertainment, file.entertainment),
        ];
        for (theme, items) in overrides {
            let Some(items) = items else { continue };
            validate_items(theme, &items)?;
            catalog.items.insert(theme, items);
        }
        Ok(catalog)
    }

    /// Item behind door `day` (1-based) for `theme`.
    pub fn item(&self, theme: ThemeId, day: u8) -> Option<&ContentItem> {
        if day == 0 || day > DOOR_COUNT {
            return None;
        }
        self.items
            .get(&theme)
            .and_then(|v| v.get(day as usize - 1))
    }

    pub fn items_for(&self, theme: ThemeId) -> &[ContentItem] {
        self.items.get(&theme).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn validate_items(theme: ThemeId, items: &[ContentItem]) -> Result<(), CatalogError> {
    if items.len() != DOOR_COUNT as usize {
        return Err(CatalogError::WrongItemCount {
            theme,
            found: items.len(),
        });
    }
    for (i, item) in items.iter().enumerate() {
        if item.title.trim().is_empty() || item.description.trim().is_empty() {
            return Err(CatalogError::BlankItem {
                theme,
                index: i + 1,
            });
        }
    }
    Ok(())
}

fn builtin_items(theme: ThemeId) -> Vec<ContentItem> {
    let (prefix, description) = match theme {
        ThemeId::Scientific => ("Fact", "A curious discovery or science fact for the day."),
        ThemeId::Esoteric => ("Ritual", "A meditation or esoteric practice for balance."),
        ThemeId::SelfGrowth => ("Growth step", "A tip, exercise or prompt for personal growth."),
        ThemeId::Entertainment => ("Fun", "A quiz, joke or mini-game for the day."),
    };
    (1..=DOOR_COUNT)
        .map(|n| ContentItem {
            title: format!("{} #{}", prefix, n),
            description: description.to_string(),
            link: PLACEHOLDER_LINK.to_string(),
        })
        .collect()
}

/// Fixed preview carousel shown inside the day modal.
pub struct Slide {
    pub label: &'static str,
    pub kind: &'static str,
}

pub const DAY_SLIDES: &[Slide] = &[
    Slide { label: "Guide.pdf", kind: "PDF" },
    Slide { label: "Lesson.mp4", kind: "Video" },
    Slide { label: "Wallpaper.png", kind: "Image" },
];

/// "What awaits you" cards on the home screen.
pub const FEATURE_CARDS: &[(&str, &str)] = &[
    ("Ready out of the box", "Nothing to assemble, just start opening doors."),
    ("24 days of content", "A new little delight every day."),
    ("Themes to choose from", "Scientific, Esoteric, Self-growth, Entertainment."),
    ("Gift by e-mail", "A beautiful card and a personal link."),
];

/// "Gifts inside the calendar" tile strip on the home screen.
pub const PREVIEW_TILES: &[(&str, &str)] = &[
    ("Guide.pdf", "PDF"),
    ("Meditation.mp3", "Audio"),
    ("Lesson.mp4", "Video"),
    ("Wallpaper.png", "Image"),
    ("-20% coupon", "Promo"),
    ("Notion template", "Link"),
];

/// "What's in the calendar" list on the home screen.
pub const WHATS_INSIDE: &[(&str, &str)] = &[
    ("PDF guides", "Step-by-step materials and checklists."),
    ("Meditations & audio", "For inner calm and focus."),
    ("Templates & Notion", "Ready-made templates for work and life."),
    ("Games & quizzes", "A bit of fun every day."),
    ("Promo codes", "Pleasant bonuses and discounts."),
    ("Wallpapers & art", "Seasonal visuals to set the mood."),
];
