//! Presentational layer. Every module here renders a snapshot of
//! [`AppState`] and never mutates it; gestures go back through the handler.

mod calendar;
mod day_modal;
mod gift_form;
mod header;
mod home;
mod layout;
mod login;
mod purchase;
mod sparkles;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;
use ratatui::widgets::Block;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::base()), area);
    let app_layout = layout::compute_layout(area);

    sparkles::render(frame, app_layout.body, state);
    header::render(frame, app_layout.header, state);
    match state.screen {
        Screen::Home => home::render(frame, app_layout.body, state),
        Screen::Calendar => calendar::render(frame, app_layout.body, state),
        Screen::Purchase => purchase::render(frame, app_layout.body, state),
        Screen::Login => login::render(frame, app_layout.body, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlays last; the gift form sits above the day modal.
    if state.day_modal_open {
        day_modal::render(frame, state);
    }
    if state.gift_form_open {
        gift_form::render(frame, state);
    }
}
