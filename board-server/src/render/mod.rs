//! 1-bit display rendering: canvas primitives, fonts, text layout, vector
//! arrows, countdown badges, and the full-board layout.

mod arrows;
mod badge;
mod canvas;
mod font;
mod layout;
mod text;

pub use canvas::Canvas;
pub use font::{FontFace, FontHandle, Fonts};
pub use layout::{HEIGHT, RenderError, WIDTH, render_board};
