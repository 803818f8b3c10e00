//! Font loading for the display renderer.
//!
//! A single TrueType face can be supplied via configuration; when it is
//! missing or unreadable we fall back to the built-in monospaced bitmap
//! fonts, which keeps rendering fully deterministic without any bundled
//! font asset.

use std::path::Path;
use std::sync::Arc;

use rusttype::{Font, Scale};
use tracing::warn;

pub const TITLE_FONT_PT: f32 = 18.0;
pub const LABEL_FONT_PT: f32 = 40.0;
pub const BADGE_FONT_PT: f32 = 58.0;
pub const BADGE_LABEL_FONT_PT: f32 = 13.0;
pub const TIME_SIZE_RATIO: f32 = 0.98;

/// The glyph source behind a [`FontHandle`].
#[derive(Clone)]
pub enum FontFace {
    Ttf(Arc<Font<'static>>),
    Builtin,
}

/// One font at one size.
#[derive(Clone)]
pub struct FontHandle {
    pub face: FontFace,
    pub size: f32,
}

impl FontHandle {
    pub fn scale(&self) -> Scale {
        Scale::uniform(self.size)
    }
}

/// The full set of sizes the board layout needs.
#[derive(Clone)]
pub struct Fonts {
    pub title: FontHandle,
    pub time: FontHandle,
    pub label: FontHandle,
    pub date: FontHandle,
    pub badge: FontHandle,
    pub badge_label: FontHandle,
}

impl Fonts {
    /// Load the configured TrueType face, or fall back to the built-in
    /// bitmap fonts when it is absent or malformed.
    pub fn load(font_path: Option<&Path>) -> Self {
        let face = match font_path {
            Some(path) => match std::fs::read(path) {
                Ok(bytes) => match Font::try_from_vec(bytes) {
                    Some(font) => FontFace::Ttf(Arc::new(font)),
                    None => {
                        warn!(path = %path.display(), "font file is not a valid TrueType face, using built-in");
                        FontFace::Builtin
                    }
                },
                Err(error) => {
                    warn!(path = %path.display(), %error, "failed to read font file, using built-in");
                    FontFace::Builtin
                }
            },
            None => FontFace::Builtin,
        };
        Self::from_face(face)
    }

    /// The built-in bitmap fonts at the standard sizes.
    pub fn builtin() -> Self {
        Self::from_face(FontFace::Builtin)
    }

    fn from_face(face: FontFace) -> Self {
        let time_pt = (LABEL_FONT_PT * TIME_SIZE_RATIO).floor().max(1.0);
        let at = |size: f32| FontHandle {
            face: face.clone(),
            size,
        };
        Self {
            title: at(TITLE_FONT_PT),
            time: at(time_pt),
            label: at(LABEL_FONT_PT),
            date: at(LABEL_FONT_PT / 2.0),
            badge: at(BADGE_FONT_PT),
            badge_label: at(BADGE_LABEL_FONT_PT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sizes() {
        let fonts = Fonts::builtin();
        assert_eq!(fonts.title.size, 18.0);
        assert_eq!(fonts.time.size, 39.0);
        assert_eq!(fonts.label.size, 40.0);
        assert_eq!(fonts.date.size, 20.0);
        assert_eq!(fonts.badge.size, 58.0);
        assert_eq!(fonts.badge_label.size, 13.0);
    }

    #[test]
    fn missing_font_path_falls_back() {
        let fonts = Fonts::load(Some(Path::new("/nonexistent/font.ttf")));
        assert!(matches!(fonts.title.face, FontFace::Builtin));
    }

    #[test]
    fn garbage_font_file_falls_back() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not a font").unwrap();
        let fonts = Fonts::load(Some(file.path()));
        assert!(matches!(fonts.title.face, FontFace::Builtin));
    }
}
