//! Scroll geometry for cursor centering and scroll-past-end padding.

/// Scroll offset that puts the row starting at `cursor_top` (content
/// coordinates) in the middle of a viewport `viewport_height` pixels tall.
pub fn center_offset(cursor_top: f32, row_height: f32, viewport_height: f32) -> f32 {
    let target = cursor_top + row_height * 0.5 - viewport_height * 0.5;
    if target.is_finite() {
        target.max(0.0)
    } else {
        0.0
    }
}

/// Blank space below the last row so it can scroll up to the viewport top.
pub fn scroll_past_end_padding(viewport_height: f32, row_height: f32) -> f32 {
    let padding = viewport_height - row_height;
    if padding.is_finite() {
        padding.max(0.0)
    } else {
        0.0
    }
}

/// Rows needed to fill `viewport_height`, never fewer than one.
pub(crate) fn rows_that_fit(viewport_height: f32, row_height: f32) -> usize {
    let rows = (viewport_height / row_height).ceil();
    if rows.is_finite() && rows >= 1.0 {
        rows as usize
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_offset_places_row_mid_viewport() {
        assert_eq!(center_offset(500.0, 20.0, 400.0), 310.0);
    }

    #[test]
    fn center_offset_never_scrolls_above_top() {
        assert_eq!(center_offset(40.0, 20.0, 400.0), 0.0);
        assert_eq!(center_offset(40.0, 20.0, f32::NAN), 0.0);
    }

    #[test]
    fn padding_leaves_one_row_visible() {
        assert_eq!(scroll_past_end_padding(480.0, 20.0), 460.0);
        assert_eq!(scroll_past_end_padding(10.0, 20.0), 0.0);
        assert_eq!(scroll_past_end_padding(f32::INFINITY, 20.0), 0.0);
    }

    #[test]
    fn rows_that_fit_rounds_up_and_floors_at_one() {
        assert_eq!(rows_that_fit(100.0, 30.0), 4);
        assert_eq!(rows_that_fit(-50.0, 30.0), 1);
        assert_eq!(rows_that_fit(f32::NAN, 30.0), 1);
        assert_eq!(rows_that_fit(f32::INFINITY, 30.0), 1);
    }
}
