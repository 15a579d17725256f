use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::layout::Position;
use ratatui::prelude::*;

const GLYPHS: [char; 3] = ['✦', '✧', '·'];

/// Paint the floating stars into the body before any screen content, so that
/// widgets draw over them and only empty cells keep a star.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();
    for sparkle in &state.sparkles {
        let x = area.x + (sparkle.x * area.width.saturating_sub(1) as f32) as u16;
        let y = area.y + (sparkle.y * area.height.saturating_sub(1) as f32) as u16;
        let phase = ((state.tick_count / 4).wrapping_add(sparkle.phase as u64)) as usize;
        if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
            cell.set_char(GLYPHS[phase % GLYPHS.len()]);
            cell.set_fg(Theme::SAFFRON);
        }
    }
}
