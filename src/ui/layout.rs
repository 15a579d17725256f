use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with brand and tab bar
            Constraint::Min(5),    // Active screen
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

/// Centered popup rect: a percentage of the area clamped between a floor and
/// the area itself.
pub fn centered(area: Rect, pct_w: u16, pct_h: u16, min_w: u16, min_h: u16) -> Rect {
    let w = (area.width * pct_w / 100)
        .max(min_w)
        .min(area.width.saturating_sub(4).max(1));
    let h = (area.height * pct_h / 100)
        .max(min_h)
        .min(area.height.saturating_sub(2).max(1));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_splits_header_body_status() {
        let l = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(l.header.height, 3);
        assert_eq!(l.status_bar.height, 1);
        assert_eq!(l.body.height, 20);
        assert_eq!(l.body.y, 3);
    }

    #[test]
    fn centered_rect_is_inside_and_respects_minimums() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered(area, 50, 50, 46, 16);
        assert!(popup.width >= 46);
        assert!(popup.height >= 16);
        assert!(popup.right() <= area.right());
        assert!(popup.bottom() <= area.bottom());

        // Tiny terminals still get a rect that fits.
        let tiny = Rect::new(0, 0, 20, 6);
        let popup = centered(tiny, 50, 50, 46, 16);
        assert!(popup.right() <= tiny.right());
        assert!(popup.bottom() <= tiny.bottom());
    }
}
