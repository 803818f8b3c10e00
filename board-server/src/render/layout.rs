//! Full-board layout: header, dividers, and the four quadrants, rendered to
//! a 1-bit PNG sized for the target e-ink panel.

use chrono::{DateTime, Datelike, Local};

use crate::board::QuadrantData;

use super::arrows::{self, draw_arrow};
use super::badge::{BADGE_WIDTH, draw_badge};
use super::canvas::{Canvas, INK};
use super::font::Fonts;
use super::text;

pub const WIDTH: i32 = 400;
pub const HEIGHT: i32 = 300;

const MARGIN: i32 = 16;
const PADDING: i32 = 8;
const BADGE_GAP: i32 = 6;
const HEADER_HEIGHT: i32 = 42;
const QUADRANT_HEADER_HEIGHT: i32 = 52;
const QUADRANT_HEADER_TOP: i32 = 8;
const ARROW_LABEL_GAP: i32 = 12;
const ARROW_SIZE: i32 = 48;
const DATE_TIME_GAP: i32 = 8;
const HEADER_BASELINE_OFFSET: i32 = 4;
const DIVIDER_WIDTH: i32 = 2;
const PLACEHOLDER: &str = "—";

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to encode display PNG: {0}")]
    Png(#[from] png::EncodingError),
}

/// Render the full departure board.
///
/// Takes the quadrants in display order (top-left, top-right, bottom-left,
/// bottom-right); short or long slices are padded or cut to four. The output
/// is byte-identical for identical inputs.
pub fn render_board(
    quadrants: &[QuadrantData],
    station_name: &str,
    timestamp: DateTime<Local>,
    fonts: &Fonts,
) -> Result<Vec<u8>, RenderError> {
    let mut canvas = Canvas::new(WIDTH as u32, HEIGHT as u32);

    let div_y = HEADER_HEIGHT;
    let baseline_y = div_y - HEADER_BASELINE_OFFSET;

    // Station name, ink bottom on the header baseline.
    let station_box = text::measure(&fonts.title, station_name);
    text::draw(
        &mut canvas,
        &fonts.title,
        MARGIN,
        baseline_y - station_box.max_y,
        station_name,
    );

    // Date and time, right-aligned as a pair on the same baseline.
    let date_str = format!(
        "{} {}",
        timestamp.day(),
        MONTH_ABBREV[timestamp.month0() as usize]
    );
    let time_str = timestamp.format("%H:%M").to_string();
    let date_box = text::measure(&fonts.date, &date_str);
    let time_box = text::measure(&fonts.time, &time_str);
    let total_w = date_box.width() + DATE_TIME_GAP + time_box.width();
    let start_x = WIDTH - MARGIN - total_w;
    text::draw(
        &mut canvas,
        &fonts.date,
        start_x,
        baseline_y - date_box.max_y,
        &date_str,
    );
    text::draw(
        &mut canvas,
        &fonts.time,
        start_x + date_box.width() + DATE_TIME_GAP,
        baseline_y - time_box.max_y,
        &time_str,
    );

    // Dividers: one under the header, then a cross through the quadrants.
    let mid_x = WIDTH / 2;
    let mid_y = (div_y + HEIGHT) / 2;
    let quad_h = (HEIGHT - div_y) / 2;
    canvas.fill_rect(0, div_y, WIDTH - 1, div_y + DIVIDER_WIDTH - 1, INK);
    canvas.fill_rect(mid_x, div_y, mid_x + DIVIDER_WIDTH - 1, HEIGHT - 1, INK);
    canvas.fill_rect(0, mid_y, WIDTH - 1, mid_y + DIVIDER_WIDTH - 1, INK);

    let rects = [
        (0, div_y),
        (mid_x, div_y),
        (0, mid_y),
        (mid_x, mid_y),
    ];
    let placeholder = QuadrantData::placeholder();
    for (i, &(qx, qy)) in rects.iter().enumerate() {
        let data = quadrants.get(i).unwrap_or(&placeholder);
        draw_quadrant(&mut canvas, qx, qy, mid_x, quad_h, data, fonts);
    }

    Ok(canvas.encode_png()?)
}

/// One quadrant: arrow and label in the header strip, then up to two badges
/// centered in the remaining space.
fn draw_quadrant(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    data: &QuadrantData,
    fonts: &Fonts,
) {
    let ax = x + PADDING;
    let ay = y + QUADRANT_HEADER_TOP;
    let arrow_size = ARROW_SIZE * arrows::LOOP_SIZE_NUM / arrows::LOOP_SIZE_DENOM;
    let aw = draw_arrow(canvas, ax, ay, data.arrow, arrow_size);

    let label_box = text::measure(&fonts.label, &data.label);
    let arrow_cy = ay + arrow_size / 2;
    // Ink-centered vertically on the arrow
    let label_y = arrow_cy - (label_box.min_y + label_box.max_y) / 2;
    text::draw(
        canvas,
        &fonts.label,
        ax + aw + ARROW_LABEL_GAP,
        label_y,
        &data.label,
    );

    let badge_top = y + QUADRANT_HEADER_HEIGHT + QUADRANT_HEADER_TOP;
    let badge_cy = badge_top + (h - (badge_top - y) - PADDING) / 2;

    if data.departures.is_empty() {
        let dash_box = text::measure(&fonts.label, PLACEHOLDER);
        text::draw(
            canvas,
            &fonts.label,
            x + (w - dash_box.width()) / 2 - dash_box.min_x,
            badge_cy - dash_box.height() / 2 - dash_box.min_y,
            PLACEHOLDER,
        );
        return;
    }

    let total = BADGE_WIDTH * 2 + BADGE_GAP;
    let start_x = x + (w - total) / 2 + BADGE_WIDTH / 2;
    let (minutes, line) = &data.departures[0];
    draw_badge(canvas, fonts, start_x, badge_cy, *minutes, line);
    if let Some((minutes, line)) = data.departures.get(1) {
        draw_badge(
            canvas,
            fonts,
            start_x + BADGE_WIDTH + BADGE_GAP,
            badge_cy,
            *minutes,
            line,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;
    use chrono::TimeZone;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 17, 14, 32, 0).unwrap()
    }

    fn quadrant(label: &str, arrow: Direction, departures: &[(i64, &str)]) -> QuadrantData {
        QuadrantData {
            label: label.to_string(),
            arrow,
            departures: departures
                .iter()
                .map(|&(m, l)| (m, l.to_string()))
                .collect(),
        }
    }

    fn sample_board() -> Vec<QuadrantData> {
        vec![
            quadrant("Nord", Direction::North, &[(8, "S1"), (11, "S2")]),
            quadrant("Stadt", Direction::South, &[(7, "S2")]),
            quadrant("Pankow", Direction::North, &[]),
            quadrant("Ring", Direction::Clockwise, &[(13, "S85"), (24, "S8")]),
        ]
    }

    #[test]
    fn renders_a_valid_png_at_display_size() {
        let bytes =
            render_board(&sample_board(), "Bornholmer Straße", timestamp(), &Fonts::builtin())
                .unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
        assert_eq!(&bytes[16..20], &400u32.to_be_bytes());
        assert_eq!(&bytes[20..24], &300u32.to_be_bytes());
        assert_eq!(bytes[24], 1, "bit depth");
        assert_eq!(bytes[25], 0, "grayscale color type");
    }

    #[test]
    fn empty_board_still_renders() {
        let bytes = render_board(&[], "Bornholmer Straße", timestamp(), &Fonts::builtin()).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn short_quadrant_list_is_padded() {
        let one = vec![quadrant("Nord", Direction::North, &[(8, "S1")])];
        let bytes = render_board(&one, "Station", timestamp(), &Fonts::builtin()).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn rendering_is_deterministic() {
        let fonts = Fonts::builtin();
        let a = render_board(&sample_board(), "Bornholmer Straße", timestamp(), &fonts).unwrap();
        let b = render_board(&sample_board(), "Bornholmer Straße", timestamp(), &fonts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_minutes_change_the_output() {
        let fonts = Fonts::builtin();
        let mut other = sample_board();
        other[0].departures[0].0 = 9;
        let a = render_board(&sample_board(), "S", timestamp(), &fonts).unwrap();
        let b = render_board(&other, "S", timestamp(), &fonts).unwrap();
        assert_ne!(a, b);
    }
}
