use crate::app::event::DeliveryToken;
use crate::config::AppConfig;
use crate::content::{ContentCatalog, ContentItem, ThemeId, DAY_SLIDES, DOOR_COUNT};
use rand::RngExt;
use thiserror::Error;

/// Doors per row on the calendar grid.
pub const GRID_COLS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Calendar,
    Purchase,
    Login,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::Calendar,
        Screen::Purchase,
        Screen::Login,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Calendar => "Calendar",
            Screen::Purchase => "Buy",
            Screen::Login => "Log in",
        }
    }

    pub fn next(self) -> Screen {
        match self {
            Screen::Home => Screen::Calendar,
            Screen::Calendar => Screen::Purchase,
            Screen::Purchase => Screen::Login,
            Screen::Login => Screen::Home,
        }
    }

    pub fn prev(self) -> Screen {
        match self {
            Screen::Home => Screen::Login,
            Screen::Calendar => Screen::Home,
            Screen::Purchase => Screen::Calendar,
            Screen::Login => Screen::Purchase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("day {0} is outside the calendar (doors are numbered 1-24)")]
    DayOutOfRange(u8),
}

/// Simulated-commerce events drained by the main loop into the session log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Purchase { order_ref: String, theme: ThemeId },
    GiftQueued { recipient: String },
    GiftDelivered { recipient: String },
    Login,
    DayOpened { day: u8, theme: ThemeId },
}

/// Single-line text input with a byte-indexed cursor.
#[derive(Debug)]
pub struct FieldInput {
    pub text: String,
    pub cursor: usize,
}

impl FieldInput {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftField {
    Name,
    Email,
    Wish,
}

impl GiftField {
    pub fn next(self) -> GiftField {
        match self {
            GiftField::Name => GiftField::Email,
            GiftField::Email => GiftField::Wish,
            GiftField::Wish => GiftField::Name,
        }
    }

    pub fn prev(self) -> GiftField {
        match self {
            GiftField::Name => GiftField::Wish,
            GiftField::Email => GiftField::Name,
            GiftField::Wish => GiftField::Email,
        }
    }
}

/// Gift overlay state. `pending_token` is Some only while the fake send
/// animation runs; dropping it is what cancels a scheduled delivery.
#[derive(Debug)]
pub struct GiftFormState {
    pub name: FieldInput,
    pub email: FieldInput,
    pub wish: FieldInput,
    pub focus: GiftField,
    pub sending: bool,
    pub pending_token: Option<DeliveryToken>,
    pub error: Option<String>,
}

impl GiftFormState {
    pub fn new() -> Self {
        Self {
            name: FieldInput::new(),
            email: FieldInput::new(),
            wish: FieldInput::new(),
            focus: GiftField::Name,
            sending: false,
            pending_token: None,
            error: None,
        }
    }

    pub fn active_field(&self) -> &FieldInput {
        match self.focus {
            GiftField::Name => &self.name,
            GiftField::Email => &self.email,
            GiftField::Wish => &self.wish,
        }
    }

    pub fn active_field_mut(&mut self) -> &mut FieldInput {
        match self.focus {
            GiftField::Name => &mut self.name,
            GiftField::Email => &mut self.email,
            GiftField::Wish => &mut self.wish,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn reset(&mut self) {
        *self = GiftFormState::new();
    }
}

#[derive(Debug)]
pub struct LoginFormState {
    pub email: FieldInput,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: FieldInput::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseEntry {
    Theme(ThemeId),
    Buy,
    BuyAsGift,
}

impl PurchaseEntry {
    pub const ALL: [PurchaseEntry; 6] = [
        PurchaseEntry::Theme(ThemeId::Scientific),
        PurchaseEntry::Theme(ThemeId::Esoteric),
        PurchaseEntry::Theme(ThemeId::SelfGrowth),
        PurchaseEntry::Theme(ThemeId::Entertainment),
        PurchaseEntry::Buy,
        PurchaseEntry::BuyAsGift,
    ];
}

#[derive(Debug)]
pub struct PurchaseMenuState {
    pub selected: usize,
}

impl PurchaseMenuState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < PurchaseEntry::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn entry(&self) -> PurchaseEntry {
        PurchaseEntry::ALL[self.selected]
    }
}

/// Door highlighted on the calendar grid. Stays within 1..=24.
#[derive(Debug)]
pub struct CalendarCursor {
    pub day: u8,
}

impl CalendarCursor {
    pub fn new() -> Self {
        Self { day: 1 }
    }

    pub fn move_left(&mut self) {
        if self.day > 1 {
            self.day -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.day < DOOR_COUNT {
            self.day += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.day > GRID_COLS {
            self.day -= GRID_COLS;
        }
    }

    pub fn move_down(&mut self) {
        if self.day + GRID_COLS <= DOOR_COUNT {
            self.day += GRID_COLS;
        }
    }

    pub fn move_home(&mut self) {
        self.day = 1;
    }

    pub fn move_end(&mut self) {
        self.day = DOOR_COUNT;
    }
}

/// Background star scattered once at startup; `x`/`y` are fractions of the
/// content area, `phase` offsets the twinkle.
#[derive(Debug, Clone, Copy)]
pub struct Sparkle {
    pub x: f32,
    pub y: f32,
    pub phase: u8,
}

fn scatter_sparkles(count: usize) -> Vec<Sparkle> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Sparkle {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
            phase: rng.random_range(0u8..16),
        })
        .collect()
}

pub struct AppState {
    pub config: AppConfig,
    pub catalog: ContentCatalog,

    // Storefront state. All mutation goes through the methods below.
    pub screen: Screen,
    pub has_access: bool,
    pub logged_in: bool,
    pub theme: ThemeId,
    pub selected_day: Option<u8>,
    pub day_modal_open: bool,
    pub gift_form_open: bool,

    // Shell state.
    pub day_of_month: u8,
    pub calendar_cursor: CalendarCursor,
    pub purchase_menu: PurchaseMenuState,
    pub login_form: LoginFormState,
    pub gift_form: GiftFormState,
    pub modal_slide: usize,
    pub home_scroll: u16,
    pub sparkles: Vec<Sparkle>,
    pub status_message: Option<String>,
    pub session_events: Vec<SessionEvent>,
    pub tick_count: u64,
    pub next_delivery_token: DeliveryToken,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: ContentCatalog, day_of_month: u8) -> Self {
        let theme = config.behavior.default_theme;
        let sparkles = scatter_sparkles(config.ui.sparkle_count);
        Self {
            config,
            catalog,
            screen: Screen::Home,
            has_access: false,
            logged_in: false,
            theme,
            selected_day: None,
            day_modal_open: false,
            gift_form_open: false,
            day_of_month,
            calendar_cursor: CalendarCursor::new(),
            purchase_menu: PurchaseMenuState::new(),
            login_form: LoginFormState::new(),
            gift_form: GiftFormState::new(),
            modal_slide: 0,
            home_scroll: 0,
            sparkles,
            status_message: None,
            session_events: Vec::new(),
            tick_count: 0,
            next_delivery_token: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Switch the visible screen. Total; never fails.
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        self.dirty = true;
    }

    pub fn select_theme(&mut self, theme: ThemeId) {
        self.theme = theme;
        self.dirty = true;
    }

    /// Idempotent; simulates a successful purchase.
    pub fn grant_access(&mut self) {
        self.has_access = true;
        self.dirty = true;
    }

    /// Idempotent; simulates a successful login.
    pub fn complete_login(&mut self) {
        self.logged_in = true;
        self.dirty = true;
    }

    /// Select a door and open its modal together. An out-of-range day is
    /// rejected without touching any state.
    pub fn open_day(&mut self, day: u8) -> Result<(), StateError> {
        if day == 0 || day > DOOR_COUNT {
            return Err(StateError::DayOutOfRange(day));
        }
        self.selected_day = Some(day);
        self.day_modal_open = true;
        self.modal_slide = 0;
        self.dirty = true;
        Ok(())
    }

    /// Clears the modal flag and the selection together.
    pub fn close_day_modal(&mut self) {
        self.day_modal_open = false;
        self.selected_day = None;
        self.dirty = true;
    }

    pub fn open_gift_form(&mut self) {
        self.gift_form_open = true;
        self.dirty = true;
    }

    /// Also discards the form contents and any pending delivery token, which
    /// is what cancels an in-flight fake send.
    pub fn close_gift_form(&mut self) {
        self.gift_form_open = false;
        self.gift_form.reset();
        self.dirty = true;
    }

    /// Content behind the selected day in the selected theme, if a day is
    /// selected. Pure read.
    pub fn resolve_content(&self) -> Option<&ContentItem> {
        self.selected_day
            .and_then(|day| self.catalog.item(self.theme, day))
    }

    pub fn allocate_delivery_token(&mut self) -> DeliveryToken {
        let token = self.next_delivery_token;
        self.next_delivery_token += 1;
        token
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.dirty = true;
    }

    pub fn push_session_event(&mut self, event: SessionEvent) {
        self.session_events.push(event);
    }

    /// Refresh the clock snapshot; redraws only when midnight rolled over.
    pub fn set_day_of_month(&mut self, day: u8) {
        if self.day_of_month != day {
            self.day_of_month = day;
            self.dirty = true;
        }
    }

    pub fn next_slide(&mut self) {
        self.modal_slide = (self.modal_slide + 1) % DAY_SLIDES.len();
        self.dirty = true;
    }

    pub fn prev_slide(&mut self) {
        self.modal_slide = (self.modal_slide + DAY_SLIDES.len() - 1) % DAY_SLIDES.len();
        self.dirty = true;
    }

    pub fn unlocked_count(&self) -> u8 {
        self.day_of_month.min(DOOR_COUNT)
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let mut s = format!("{} calendar", self.theme.label());
        if self.has_access {
            s.push_str(" | owned");
        }
        if self.logged_in {
            s.push_str(" | signed in");
        }
        s.push_str(&format!(
            " | {}/{} doors open",
            self.unlocked_count(),
            DOOR_COUNT
        ));
        s
    }
}
