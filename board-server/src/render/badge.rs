//! Countdown badges: a rounded-rectangle outline holding a large minutes
//! number with the line name (or "m") as a small baseline-aligned suffix.

use super::canvas::{Canvas, INK};
use super::font::Fonts;
use super::text::{self, InkBox};

pub const BADGE_WIDTH: i32 = 90;
pub const BADGE_HEIGHT: i32 = 70;
pub const CORNER_RADIUS: i32 = 16;
pub const MINUTES_CAP: i64 = 99;
/// Digits overlap slightly so two-digit counts fit inside the badge.
pub const DIGIT_KERN: i32 = -4;

/// The number shown on a badge, capped so it always fits in two digits.
pub fn countdown_text(minutes: i64) -> String {
    minutes.min(MINUTES_CAP).to_string()
}

/// Draw one badge centered on (cx, cy).
pub fn draw_badge(
    canvas: &mut Canvas,
    fonts: &Fonts,
    cx: i32,
    cy: i32,
    minutes: i64,
    line_label: &str,
) {
    let num_str = countdown_text(minutes);
    let suffix = if line_label.is_empty() { "m" } else { line_label };
    let suffix_box = text::measure(&fonts.badge_label, suffix);

    // Digits are measured individually and hand-kerned; proportional digit
    // widths would otherwise make "11" and "44" sit very differently.
    let digit_boxes: Vec<InkBox> = num_str
        .chars()
        .map(|d| text::measure(&fonts.badge, &d.to_string()))
        .collect();
    let kern_total = DIGIT_KERN * (digit_boxes.len() as i32 - 1);
    let num_width: i32 = digit_boxes.iter().map(InkBox::width).sum::<i32>() + kern_total;
    let num_height = digit_boxes.iter().map(InkBox::height).max().unwrap_or(0);

    let total_width = num_width + suffix_box.width();
    let x = cx - BADGE_WIDTH / 2;
    let y = cy - BADGE_HEIGHT / 2;
    canvas.rounded_rect_outline(x, y, x + BADGE_WIDTH, y + BADGE_HEIGHT, CORNER_RADIUS, INK);

    let text_left = x + (BADGE_WIDTH - total_width) / 2;
    let baseline_y = cy + num_height / 2;

    let mut cursor = text_left;
    let last = digit_boxes.len() - 1;
    for (i, (digit, ink)) in num_str.chars().zip(&digit_boxes).enumerate() {
        // Shift so the glyph's left ink edge lands on the cursor and its
        // ink bottom sits on the shared baseline.
        text::draw(
            canvas,
            &fonts.badge,
            cursor - ink.min_x,
            baseline_y - ink.max_y,
            &digit.to_string(),
        );
        cursor += ink.width();
        if i < last {
            cursor += DIGIT_KERN;
        }
    }

    text::draw(
        canvas,
        &fonts.badge_label,
        cursor - suffix_box.min_x,
        baseline_y - suffix_box.max_y,
        suffix,
    );
}
