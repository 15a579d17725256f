use crate::app::action::Action;
use crate::app::event::{AppEvent, DeliveryToken};
use crate::app::state::*;
use crate::gift::{self, GiftCard};
use chrono::{Datelike, Local};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use rand::RngExt;

/// How far the home screen can scroll past the top of the viewport.
const HOME_SCROLL_MAX: u16 = 36;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::GiftDeliveryElapsed { token } => {
            handle_delivery_elapsed(state, token);
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    state.set_day_of_month(Local::now().day() as u8);

    // Hero shimmer, sparkle twinkle and the gift spinner all animate off the
    // tick counter.
    let animating = state.screen == Screen::Home
        || !state.sparkles.is_empty()
        || state.gift_form.sending;
    if animating && state.tick_count % 2 == 0 {
        state.dirty = true;
    }
}

/// Complete a fake gift send. A timer from a dismissed or already-completed
/// form carries a stale token and must change nothing.
fn handle_delivery_elapsed(state: &mut AppState, token: DeliveryToken) {
    if !state.gift_form_open
        || !state.gift_form.sending
        || state.gift_form.pending_token != Some(token)
    {
        tracing::debug!(token, "stale gift delivery token ignored");
        return;
    }
    let recipient = display_recipient(&state.gift_form);
    state.push_session_event(SessionEvent::GiftDelivered {
        recipient: recipient.clone(),
    });
    state.close_gift_form();
    state.set_status(format!("Gift card sent to {} (simulated)", recipient));
}

fn display_recipient(form: &GiftFormState) -> String {
    if form.name.text.trim().is_empty() {
        form.email.text.clone()
    } else {
        form.name.text.clone()
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Overlays capture all input when visible, the gift form above the modal
    if state.gift_form_open {
        return handle_gift_form_key(state, key);
    }
    if state.day_modal_open {
        handle_day_modal_key(state, key);
        return vec![];
    }

    match key.code {
        KeyCode::F(1) => {
            state.navigate(Screen::Home);
            return vec![];
        }
        KeyCode::F(2) => {
            state.navigate(Screen::Calendar);
            return vec![];
        }
        KeyCode::F(3) => {
            state.navigate(Screen::Purchase);
            return vec![];
        }
        KeyCode::F(4) => {
            // The header swaps its last tab to "My calendar" once signed in.
            if state.logged_in {
                state.navigate(Screen::Calendar);
            } else {
                state.navigate(Screen::Login);
            }
            return vec![];
        }
        KeyCode::Tab => {
            state.navigate(state.screen.next());
            return vec![];
        }
        KeyCode::BackTab => {
            state.navigate(state.screen.prev());
            return vec![];
        }
        _ => {}
    }

    match state.screen {
        Screen::Home => handle_home_key(state, key),
        Screen::Calendar => handle_calendar_key(state, key),
        Screen::Purchase => handle_purchase_key(state, key),
        Screen::Login => handle_login_key(state, key),
    }
}

fn handle_home_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.home_scroll = state.home_scroll.saturating_sub(1),
        KeyCode::Down => state.home_scroll = (state.home_scroll + 1).min(HOME_SCROLL_MAX),
        KeyCode::PageUp => state.home_scroll = state.home_scroll.saturating_sub(8),
        KeyCode::PageDown => state.home_scroll = (state.home_scroll + 8).min(HOME_SCROLL_MAX),
        KeyCode::Home => state.home_scroll = 0,
        KeyCode::Enter => state.navigate(Screen::Purchase),
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn handle_calendar_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Left => state.calendar_cursor.move_left(),
        KeyCode::Right => state.calendar_cursor.move_right(),
        KeyCode::Up => state.calendar_cursor.move_up(),
        KeyCode::Down => state.calendar_cursor.move_down(),
        KeyCode::Home => state.calendar_cursor.move_home(),
        KeyCode::End => state.calendar_cursor.move_end(),
        KeyCode::Enter => {
            // Any door opens; the date only styles it. Matches the page.
            let day = state.calendar_cursor.day;
            match state.open_day(day) {
                Ok(()) => {
                    let theme = state.theme;
                    state.push_session_event(SessionEvent::DayOpened { day, theme });
                }
                Err(e) => state.set_status(e.to_string()),
            }
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn handle_purchase_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.purchase_menu.move_up(),
        KeyCode::Down => state.purchase_menu.move_down(),
        KeyCode::Enter => apply_purchase_entry(state),
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn apply_purchase_entry(state: &mut AppState) {
    match state.purchase_menu.entry() {
        PurchaseEntry::Theme(theme) => {
            state.select_theme(theme);
            state.set_status(format!("{} theme selected", theme.label()));
        }
        PurchaseEntry::Buy => {
            let order_ref = fake_order_reference();
            state.grant_access();
            state.push_session_event(SessionEvent::Purchase {
                order_ref: order_ref.clone(),
                theme: state.theme,
            });
            state.set_status(format!(
                "Purchase confirmed: order {} ({})",
                order_ref,
                state.theme.label()
            ));
        }
        PurchaseEntry::BuyAsGift => state.open_gift_form(),
    }
}

/// Order references look real enough for the status line; nothing checks them.
fn fake_order_reference() -> String {
    let mut rng = rand::rng();
    format!("AM-{:06}", rng.random_range(0..1_000_000))
}

fn handle_login_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            // The prototype "sends" a magic link whatever was typed.
            state.complete_login();
            state.push_session_event(SessionEvent::Login);
            state.set_status("Magic link sent to your inbox (simulated). You are in!");
        }
        KeyCode::Backspace => state.login_form.email.delete_back(),
        KeyCode::Delete => state.login_form.email.delete_forward(),
        KeyCode::Left => state.login_form.email.move_left(),
        KeyCode::Right => state.login_form.email.move_right(),
        KeyCode::Home => state.login_form.email.move_home(),
        KeyCode::End => state.login_form.email.move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.login_form.email.insert_char(c)
        }
        _ => {}
    }
    vec![]
}

fn handle_day_modal_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.close_day_modal(),
        KeyCode::Left => state.prev_slide(),
        KeyCode::Right => state.next_slide(),
        _ => {}
    }
}

fn handle_gift_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            if state.gift_form.sending {
                tracing::debug!("in-flight gift send cancelled by closing the form");
            }
            state.close_gift_form();
        }
        KeyCode::Tab => state.gift_form.focus_next(),
        KeyCode::BackTab => state.gift_form.focus_prev(),
        KeyCode::Enter => return submit_gift(state),
        KeyCode::Backspace => state.gift_form.active_field_mut().delete_back(),
        KeyCode::Delete => state.gift_form.active_field_mut().delete_forward(),
        KeyCode::Left => state.gift_form.active_field_mut().move_left(),
        KeyCode::Right => state.gift_form.active_field_mut().move_right(),
        KeyCode::Home => state.gift_form.active_field_mut().move_home(),
        KeyCode::End => state.gift_form.active_field_mut().move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.gift_form.active_field_mut().insert_char(c);
            state.gift_form.error = None;
        }
        _ => {}
    }
    vec![]
}

/// Validate the recipient address, flip the sending flag and schedule the
/// fake delivery. Invalid input changes nothing but the inline error message;
/// a resubmit while sending is ignored.
fn submit_gift(state: &mut AppState) -> Vec<Action> {
    if state.gift_form.sending {
        return vec![];
    }
    if let Err(e) = gift::validate_email(&state.gift_form.email.text) {
        state.gift_form.error = Some(e.to_string());
        return vec![];
    }
    let card = GiftCard {
        recipient_name: state.gift_form.name.text.clone(),
        recipient_email: state.gift_form.email.text.clone(),
        wish: state.gift_form.wish.text.clone(),
    };
    let token = state.allocate_delivery_token();
    state.gift_form.sending = true;
    state.gift_form.error = None;
    state.gift_form.pending_token = Some(token);
    state.push_session_event(SessionEvent::GiftQueued {
        recipient: display_recipient(&state.gift_form),
    });
    vec![Action::ScheduleGiftDelivery { token, card }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::{ContentCatalog, ThemeId};

    fn test_state() -> AppState {
        let mut config = AppConfig::default();
        config.ui.sparkle_count = 0;
        AppState::new(config, ContentCatalog::builtin(), 14)
    }

    fn key(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            key(state, KeyCode::Char(c));
        }
    }

    /// Drives the UI to the gift form and submits `email` as the recipient.
    fn submit_gift_with_email(state: &mut AppState, email: &str) -> Vec<Action> {
        key(state, KeyCode::F(3));
        for _ in 0..5 {
            key(state, KeyCode::Down);
        }
        key(state, KeyCode::Enter);
        assert!(state.gift_form_open);
        key(state, KeyCode::Tab); // Name -> Email
        type_text(state, email);
        key(state, KeyCode::Enter)
    }

    #[test]
    fn function_keys_navigate_screens() {
        let mut state = test_state();
        key(&mut state, KeyCode::F(2));
        assert_eq!(state.screen, Screen::Calendar);
        key(&mut state, KeyCode::F(3));
        assert_eq!(state.screen, Screen::Purchase);
        key(&mut state, KeyCode::F(4));
        assert_eq!(state.screen, Screen::Login);
        key(&mut state, KeyCode::F(1));
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn f4_goes_to_calendar_once_logged_in() {
        let mut state = test_state();
        state.complete_login();
        key(&mut state, KeyCode::F(4));
        assert_eq!(state.screen, Screen::Calendar);
    }

    #[test]
    fn tab_cycles_through_every_screen() {
        let mut state = test_state();
        let mut seen = vec![state.screen];
        for _ in 0..3 {
            key(&mut state, KeyCode::Tab);
            seen.push(state.screen);
        }
        for screen in Screen::ALL {
            assert!(seen.contains(&screen));
        }
        key(&mut state, KeyCode::Tab);
        assert_eq!(state.screen, Screen::Home);
        key(&mut state, KeyCode::BackTab);
        assert_eq!(state.screen, Screen::Login);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut state = test_state();
        state.open_gift_form();
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }

    #[test]
    fn q_quits_on_calendar_but_types_on_login() {
        let mut state = test_state();
        key(&mut state, KeyCode::F(2));
        let actions = key(&mut state, KeyCode::Char('q'));
        assert!(matches!(actions.as_slice(), [Action::Quit]));

        let mut state = test_state();
        key(&mut state, KeyCode::F(4));
        let actions = key(&mut state, KeyCode::Char('q'));
        assert!(actions.is_empty());
        assert_eq!(state.login_form.email.text, "q");
    }

    #[test]
    fn enter_opens_the_door_under_the_cursor() {
        let mut state = test_state();
        key(&mut state, KeyCode::F(2));
        key(&mut state, KeyCode::Right);
        key(&mut state, KeyCode::Right);
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.selected_day, Some(3));
        assert!(state.day_modal_open);
        assert!(state
            .session_events
            .contains(&SessionEvent::DayOpened {
                day: 3,
                theme: ThemeId::Scientific
            }));
        key(&mut state, KeyCode::Esc);
        assert!(!state.day_modal_open);
        assert_eq!(state.selected_day, None);
    }

    #[test]
    fn modal_arrows_move_the_slide_carousel() {
        let mut state = test_state();
        key(&mut state, KeyCode::F(2));
        key(&mut state, KeyCode::Enter);
        key(&mut state, KeyCode::Right);
        assert_eq!(state.modal_slide, 1);
        key(&mut state, KeyCode::Left);
        key(&mut state, KeyCode::Left);
        assert_eq!(state.modal_slide, crate::content::DAY_SLIDES.len() - 1);
    }

    #[test]
    fn purchase_menu_buys_and_grants_access() {
        let mut state = test_state();
        key(&mut state, KeyCode::F(3));
        for _ in 0..4 {
            key(&mut state, KeyCode::Down);
        }
        key(&mut state, KeyCode::Enter);
        assert!(state.has_access);
        assert!(matches!(
            state.session_events.as_slice(),
            [SessionEvent::Purchase { .. }]
        ));
        let status = state.status_line();
        assert!(status.contains("order AM-"));
    }

    #[test]
    fn purchase_theme_row_applies_the_theme() {
        let mut state = test_state();
        key(&mut state, KeyCode::F(3));
        key(&mut state, KeyCode::Down); // Esoteric row
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.theme, ThemeId::Esoteric);
        key(&mut state, KeyCode::F(1));
        key(&mut state, KeyCode::F(2));
        assert_eq!(state.theme, ThemeId::Esoteric);
    }

    #[test]
    fn login_enter_completes_whatever_was_typed() {
        let mut state = test_state();
        key(&mut state, KeyCode::F(4));
        type_text(&mut state, "anything at all");
        key(&mut state, KeyCode::Enter);
        assert!(state.logged_in);
        assert!(state.session_events.contains(&SessionEvent::Login));
    }

    #[test]
    fn valid_gift_submission_schedules_a_delivery() {
        let mut state = test_state();
        let actions = submit_gift_with_email(&mut state, "a@b.co");
        assert!(state.gift_form.sending);
        assert!(state.gift_form.error.is_none());
        let token = match actions.as_slice() {
            [Action::ScheduleGiftDelivery { token, card }] => {
                assert_eq!(card.recipient_email, "a@b.co");
                *token
            }
            other => panic!("expected a scheduled delivery, got {:?}", other),
        };
        assert_eq!(state.gift_form.pending_token, Some(token));
        assert!(state
            .session_events
            .iter()
            .any(|e| matches!(e, SessionEvent::GiftQueued { .. })));
    }

    #[test]
    fn invalid_gift_email_is_rejected_in_place() {
        let mut state = test_state();
        let actions = submit_gift_with_email(&mut state, "not-an-email");
        assert!(actions.is_empty());
        assert!(!state.gift_form.sending);
        assert!(state.gift_form.error.is_some());
        assert_eq!(state.gift_form.pending_token, None);
        // The form stays open with its contents intact for a fix-up.
        assert!(state.gift_form_open);
        assert_eq!(state.gift_form.email.text, "not-an-email");
    }

    #[test]
    fn typing_clears_the_gift_error() {
        let mut state = test_state();
        submit_gift_with_email(&mut state, "bad");
        assert!(state.gift_form.error.is_some());
        key(&mut state, KeyCode::Char('x'));
        assert!(state.gift_form.error.is_none());
    }

    #[test]
    fn resubmit_while_sending_is_ignored() {
        let mut state = test_state();
        submit_gift_with_email(&mut state, "a@b.co");
        let again = key(&mut state, KeyCode::Enter);
        assert!(again.is_empty());
        assert_eq!(state.next_delivery_token, 1);
    }

    #[test]
    fn delivery_elapsed_closes_the_form() {
        let mut state = test_state();
        let actions = submit_gift_with_email(&mut state, "a@b.co");
        let token = match actions.as_slice() {
            [Action::ScheduleGiftDelivery { token, .. }] => *token,
            other => panic!("expected a scheduled delivery, got {:?}", other),
        };
        handle_event(&mut state, AppEvent::GiftDeliveryElapsed { token });
        assert!(!state.gift_form_open);
        assert!(!state.gift_form.sending);
        assert!(state
            .session_events
            .iter()
            .any(|e| matches!(e, SessionEvent::GiftDelivered { .. })));
        assert!(state.status_line().contains("a@b.co"));
    }

    #[test]
    fn stale_token_after_dismissal_changes_nothing() {
        let mut state = test_state();
        let actions = submit_gift_with_email(&mut state, "a@b.co");
        let token = match actions.as_slice() {
            [Action::ScheduleGiftDelivery { token, .. }] => *token,
            other => panic!("expected a scheduled delivery, got {:?}", other),
        };
        key(&mut state, KeyCode::Esc); // cancel path
        assert!(!state.gift_form_open);
        let events_before = state.session_events.len();
        handle_event(&mut state, AppEvent::GiftDeliveryElapsed { token });
        assert!(!state.gift_form_open);
        assert_eq!(state.session_events.len(), events_before);
        assert!(!state
            .session_events
            .iter()
            .any(|e| matches!(e, SessionEvent::GiftDelivered { .. })));
    }

    #[test]
    fn gift_fields_stay_editable_while_sending() {
        let mut state = test_state();
        submit_gift_with_email(&mut state, "a@b.co");
        key(&mut state, KeyCode::Tab); // Email -> Wish
        type_text(&mut state, "happy december");
        assert_eq!(state.gift_form.wish.text, "happy december");
        assert!(state.gift_form.sending);
    }

    #[test]
    fn home_scroll_stays_in_range() {
        let mut state = test_state();
        key(&mut state, KeyCode::Up);
        assert_eq!(state.home_scroll, 0);
        for _ in 0..20 {
            key(&mut state, KeyCode::PageDown);
        }
        assert_eq!(state.home_scroll, HOME_SCROLL_MAX);
        key(&mut state, KeyCode::Home);
        assert_eq!(state.home_scroll, 0);
    }

    #[test]
    fn tick_advances_the_counter() {
        let mut state = test_state();
        let before = state.tick_count;
        handle_event(&mut state, AppEvent::Tick);
        assert_eq!(state.tick_count, before + 1);
    }
}
