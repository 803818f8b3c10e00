//! Text measurement and rasterisation onto the 1-bit canvas.
//!
//! All coordinates are baseline-relative: `draw` places the text baseline at
//! the given y, and [`InkBox`] describes where ink lands relative to that
//! origin (negative `min_y` means ink above the baseline). Callers align on
//! the ink box, so layout comes out the same whether the glyphs come from a
//! TrueType face or the built-in bitmap fonts.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use rusttype::point;

use super::canvas::{Canvas, INK};
use super::font::{FontFace, FontHandle};

/// The ink bounding box of a piece of text, relative to a baseline origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InkBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl InkBox {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }
}

/// Pick the builtin bitmap font closest to the requested point size.
fn builtin_font(size: f32) -> &'static MonoFont<'static> {
    if size >= 30.0 { &FONT_10X20 } else { &FONT_6X10 }
}

/// Measure the ink box of `text` in the given font, baseline-relative.
pub fn measure(font: &FontHandle, text: &str) -> InkBox {
    match &font.face {
        FontFace::Ttf(face) => {
            let mut ink: Option<InkBox> = None;
            for glyph in face.layout(text, font.scale(), point(0.0, 0.0)) {
                let Some(bb) = glyph.pixel_bounding_box() else {
                    continue;
                };
                let merged = ink.get_or_insert(InkBox {
                    min_x: bb.min.x,
                    min_y: bb.min.y,
                    max_x: bb.max.x,
                    max_y: bb.max.y,
                });
                merged.min_x = merged.min_x.min(bb.min.x);
                merged.min_y = merged.min_y.min(bb.min.y);
                merged.max_x = merged.max_x.max(bb.max.x);
                merged.max_y = merged.max_y.max(bb.max.y);
            }
            ink.unwrap_or_default()
        }
        FontFace::Builtin => {
            let mono = builtin_font(font.size);
            let advance = (mono.character_size.width + mono.character_spacing) as i32;
            let baseline = mono.baseline as i32;
            InkBox {
                min_x: 0,
                min_y: -baseline,
                max_x: advance * text.chars().count() as i32,
                max_y: mono.character_size.height as i32 - 1 - baseline,
            }
        }
    }
}

/// Draw `text` with its baseline starting point at (x, y).
pub fn draw(canvas: &mut Canvas, font: &FontHandle, x: i32, y: i32, text: &str) {
    match &font.face {
        FontFace::Ttf(face) => {
            for glyph in face.layout(text, font.scale(), point(x as f32, y as f32)) {
                let Some(bb) = glyph.pixel_bounding_box() else {
                    continue;
                };
                glyph.draw(|gx, gy, coverage| {
                    if coverage > 0.5 {
                        canvas.set(bb.min.x + gx as i32, bb.min.y + gy as i32, INK);
                    }
                });
            }
        }
        FontFace::Builtin => {
            let style = MonoTextStyle::new(builtin_font(font.size), BinaryColor::On);
            // Infallible for this target
            let _ = Text::new(text, Point::new(x, y), style).draw(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::BACKGROUND;
    use crate::render::font::Fonts;

    fn ink_count(canvas: &Canvas) -> usize {
        (0..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get(x, y) == Some(INK))
            .count()
    }

    #[test]
    fn builtin_measure_scales_with_length() {
        let fonts = Fonts::builtin();
        let one = measure(&fonts.label, "7");
        let two = measure(&fonts.label, "77");
        assert_eq!(two.width(), 2 * one.width());
        assert!(one.min_y < 0, "ink extends above the baseline");
    }

    #[test]
    fn builtin_size_picks_larger_font_for_headlines() {
        let fonts = Fonts::builtin();
        let small = measure(&fonts.badge_label, "m");
        let large = measure(&fonts.badge, "5");
        assert!(large.height() > small.height());
    }

    #[test]
    fn empty_text_has_empty_ink() {
        let fonts = Fonts::builtin();
        let ink = measure(&fonts.label, "");
        assert_eq!(ink.width(), 0);
    }

    #[test]
    fn draw_puts_ink_above_the_baseline() {
        let fonts = Fonts::builtin();
        let mut canvas = Canvas::new(100, 60);
        draw(&mut canvas, &fonts.label, 10, 40, "5");
        assert!(ink_count(&canvas) > 0);
        // Nothing below the descender region
        for y in 50..60 {
            for x in 0..100 {
                assert_eq!(canvas.get(x, y), Some(BACKGROUND));
            }
        }
    }

    #[test]
    fn draw_is_deterministic() {
        let fonts = Fonts::builtin();
        let mut a = Canvas::new(100, 60);
        let mut b = Canvas::new(100, 60);
        draw(&mut a, &fonts.title, 5, 30, "Bornholmer");
        draw(&mut b, &fonts.title, 5, 30, "Bornholmer");
        assert_eq!(a, b);
    }
}
