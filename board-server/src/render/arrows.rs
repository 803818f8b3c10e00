//! Vector-drawn direction arrows.
//!
//! Arrows are drawn from primitives rather than font glyphs so the display
//! does not depend on a face that covers the arrow code points. Straight
//! arrows are a shaft plus a triangular head; the loop directions are a ring
//! with a sector cut out and a head at the opening.

use crate::domain::Direction;

use super::canvas::{BACKGROUND, Canvas, INK};

pub const STROKE_WIDTH: i32 = 3;
pub const INSET: i32 = 4;
pub const RING_THICKNESS: i32 = 5;
pub const HEAD_HALF_WIDTH: i32 = 12;
pub const LOOP_SIZE_NUM: i32 = 9;
pub const LOOP_SIZE_DENOM: i32 = 10;

/// Draw a direction arrow in a `size`×`size` box whose top-left corner is
/// (x, y). Returns the horizontal space consumed.
pub fn draw_arrow(canvas: &mut Canvas, x: i32, y: i32, direction: Direction, size: i32) -> i32 {
    let w = size;
    let h = size;
    let sw = STROKE_WIDTH;

    match direction {
        Direction::West => {
            let sx = x + w * 2 / 3;
            canvas.fill_rect(x, y + h / 2 - sw / 2, sx, y + h / 2 + sw / 2, INK);
            canvas.fill_triangle(
                (x, y + h / 2),
                (x + w / 3, y + INSET),
                (x + w / 3, y + h - INSET),
                INK,
            );
        }
        Direction::East => {
            let sx = x + w / 3;
            canvas.fill_rect(sx, y + h / 2 - sw / 2, x + w, y + h / 2 + sw / 2, INK);
            canvas.fill_triangle(
                (x + w, y + h / 2),
                (x + w - w / 3, y + INSET),
                (x + w - w / 3, y + h - INSET),
                INK,
            );
        }
        Direction::North => {
            let sy = y + h / 3;
            canvas.fill_rect(x + w / 2 - sw / 2, sy, x + w / 2 + sw / 2, y + h, INK);
            canvas.fill_triangle(
                (x + w / 2, y),
                (x + INSET, y + h / 3),
                (x + w - INSET, y + h / 3),
                INK,
            );
        }
        Direction::South => {
            let sy = y + h * 2 / 3;
            canvas.fill_rect(x + w / 2 - sw / 2, y, x + w / 2 + sw / 2, sy, INK);
            canvas.fill_triangle(
                (x + w / 2, y + h),
                (x + INSET, y + h - h / 3),
                (x + w - INSET, y + h - h / 3),
                INK,
            );
        }
        Direction::CounterClockwise => {
            let cx = x + w / 2;
            let cy = y + h / 2;
            // The counter-clockwise ring is drawn slightly smaller so the
            // two loop arrows read as a matched pair with their heads.
            let r_outer = (w.min(h) / 2 - 2) * LOOP_SIZE_NUM / LOOP_SIZE_DENOM;
            let r_inner = (r_outer - RING_THICKNESS).max(1);
            let r_mid = (r_outer + r_inner) / 2;
            canvas.fill_circle(cx, cy, r_outer, INK);
            canvas.fill_circle(cx, cy, r_inner, BACKGROUND);
            canvas.fill_pie(cx, cy, r_outer, 90.0, 270.0, BACKGROUND);
            let tip_x = cx - r_mid;
            let tip_y = cy;
            canvas.fill_triangle(
                (tip_x - INSET, tip_y),
                (tip_x + HEAD_HALF_WIDTH, tip_y - HEAD_HALF_WIDTH),
                (tip_x + HEAD_HALF_WIDTH, tip_y + HEAD_HALF_WIDTH),
                INK,
            );
        }
        Direction::Clockwise => {
            let cx = x + w / 2;
            let cy = y + h / 2;
            let r_outer = w.min(h) / 2 - 2;
            let r_inner = (r_outer - RING_THICKNESS).max(1);
            let r_mid = (r_outer + r_inner) / 2;
            canvas.fill_circle(cx, cy, r_outer, INK);
            canvas.fill_circle(cx, cy, r_inner, BACKGROUND);
            canvas.fill_pie(cx, cy, r_outer, 15.0, 60.0, BACKGROUND);
            let tip_x = cx + r_mid;
            let tip_y = cy + 10;
            let base_y = cy - 2;
            canvas.fill_triangle(
                (tip_x, tip_y),
                (tip_x - HEAD_HALF_WIDTH, base_y),
                (tip_x + HEAD_HALF_WIDTH, base_y),
                INK,
            );
        }
    }

    w + INSET
}
