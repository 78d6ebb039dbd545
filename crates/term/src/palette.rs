//! Theme palettes.

use crate::fb::{CellStyle, Rgb};
use crate::types::Theme;

/// Resolved colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub title: Rgb,
    pub score: Rgb,
    pub game_over: Rgb,
    pub new_record: Rgb,
    pub text: Rgb,
    pub pipe: Rgb,
    pub bird: Rgb,
}

impl Palette {
    pub const fn for_theme(theme: Theme) -> Self {
        let (title, score) = match theme {
            Theme::Classic => (12, 10),
            Theme::Retro => (10, 10),
            Theme::Neon => (13, 14),
        };
        Self {
            title: Rgb::ansi(title),
            score: Rgb::ansi(score),
            game_over: Rgb::ansi(9),
            new_record: Rgb::ansi(11),
            text: Rgb::new(220, 220, 220),
            pipe: Rgb::new(220, 220, 220),
            bird: Rgb::ansi(11),
        }
    }

    pub fn title_style(&self) -> CellStyle {
        CellStyle::fg(self.title).bold()
    }

    pub fn score_style(&self) -> CellStyle {
        CellStyle::fg(self.score)
    }

    pub fn game_over_style(&self) -> CellStyle {
        CellStyle::fg(self.game_over).bold()
    }

    pub fn new_record_style(&self) -> CellStyle {
        CellStyle::fg(self.new_record).bold()
    }

    pub fn text_style(&self) -> CellStyle {
        CellStyle::fg(self.text)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}
