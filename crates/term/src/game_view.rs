//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The bottom terminal row is the status line; the playfield uses the rows
//! above it, matching the `Resize` actions produced by the input mapper.

use std::time::{Duration, Instant};

use crate::core::{GameState, Phase, Pipe};
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette::Palette;
use crate::types::{Difficulty, MIN_PLAYFIELD_HEIGHT, MIN_PLAYFIELD_WIDTH, PIPE_WIDTH};

const PIPE_BODY: char = '▓';
const PIPE_LIP: char = '█';

const FLAPPY_ART: [&str; 6] = [
    "███████╗██╗      █████╗ ██████╗ ██████╗ ██╗   ██╗",
    "██╔════╝██║     ██╔══██╗██╔══██╗██╔══██╗╚██╗ ██╔╝",
    "█████╗  ██║     ███████║██████╔╝██████╔╝ ╚████╔╝ ",
    "██╔══╝  ██║     ██╔══██║██╔═══╝ ██╔═══╝   ╚██╔╝  ",
    "██║     ███████╗██║  ██║██║     ██║        ██║   ",
    "╚═╝     ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝        ╚═╝   ",
];

const BIRD_ART: [&str; 6] = [
    "██████╗ ██╗██████╗ ██████╗ ",
    "██╔══██╗██║██╔══██╗██╔══██╗",
    "██████╔╝██║██████╔╝██║  ██║",
    "██╔══██╗██║██╔══██╗██║  ██║",
    "██████╔╝██║██║  ██║██████╔╝",
    "╚═════╝ ╚═╝╚═╝  ╚═╝╚═════╝ ",
];

const GAME_OVER_ART: [&str; 6] = [
    " ██████╗  █████╗ ███╗   ███╗███████╗     ██████╗ ██╗   ██╗███████╗██████╗ ",
    "██╔════╝ ██╔══██╗████╗ ████║██╔════╝    ██╔═══██╗██║   ██║██╔════╝██╔══██╗",
    "██║  ███╗███████║██╔████╔██║█████╗      ██║   ██║██║   ██║█████╗  ██████╔╝",
    "██║   ██║██╔══██║██║╚██╔╝██║██╔══╝      ██║   ██║╚██╗ ██╔╝██╔══╝  ██╔══██╗",
    "╚██████╔╝██║  ██║██║ ╚═╝ ██║███████╗    ╚██████╔╝ ╚████╔╝ ███████╗██║  ██║",
    " ╚═════╝ ╚═╝  ╚═╝╚═╝     ╚═╝╚══════╝     ╚═════╝   ╚═══╝  ╚══════╝╚═╝  ╚═╝",
];

pub const TOO_SMALL_MESSAGE: &str = "Terminal too small! Please resize to at least 40x10";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Rows available to the playfield (everything above the status line).
    pub fn playfield_rows(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    pub fn is_too_small(&self) -> bool {
        self.width < MIN_PLAYFIELD_WIDTH || self.playfield_rows() < MIN_PLAYFIELD_HEIGHT
    }
}

/// Format a duration as `MM:SS.mmm` (minutes are not wrapped).
pub fn format_clock(d: Duration) -> String {
    let millis = d.as_millis();
    format!(
        "{:02}:{:02}.{:03}",
        millis / 60_000,
        (millis / 1000) % 60,
        millis % 1000
    )
}

/// A lightweight terminal renderer for the game screens.
pub struct GameView {
    /// Rankings listed on the game-over screen.
    rankings_shown: usize,
}

impl Default for GameView {
    fn default() -> Self {
        Self { rankings_shown: 5 }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rankings_shown(mut self, rankings_shown: usize) -> Self {
        self.rankings_shown = rankings_shown;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(
        &self,
        game: &GameState,
        now: Instant,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let palette = Palette::for_theme(game.theme());

        if viewport.is_too_small() {
            fb.put_centered(viewport.height / 2, TOO_SMALL_MESSAGE, palette.text_style());
            return;
        }

        match game.phase() {
            Phase::Title => self.draw_title(fb, game, &palette, viewport),
            Phase::Playing => self.draw_playing(fb, game, now, &palette, viewport),
            Phase::GameOver => self.draw_game_over(fb, game, now, &palette, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, now: Instant, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, now, viewport, &mut fb);
        fb
    }

    fn draw_title(
        &self,
        fb: &mut FrameBuffer,
        game: &GameState,
        palette: &Palette,
        viewport: Viewport,
    ) {
        let best = game.leaderboard().high_score.as_ref().filter(|h| h.score > 0);

        let use_art = fits(viewport, &FLAPPY_ART, 19);
        let body = if use_art { 17 } else { 6 };
        let needed = body + if best.is_some() { 2 } else { 0 };
        let mut y = viewport.height.saturating_sub(needed) / 2;

        if use_art {
            y = draw_art(fb, y, &FLAPPY_ART, palette.title_style());
            y = draw_art(fb, y, &BIRD_ART, palette.title_style());
        } else {
            fb.put_centered(y, "FLAPPY BIRD", palette.title_style());
            y += 1;
        }
        fb.put_centered(y, "T U I", palette.text_style());
        y += 2;

        fb.put_centered(y, &difficulty_line(game.difficulty()), palette.text_style());
        y += 1;
        let theme = format!("Theme: {} (Press T to change)", game.theme().name());
        fb.put_centered(y, &theme, palette.text_style());
        y += 1;
        fb.put_centered(y, "Press SPACE to start  |  Press Q to quit", palette.text_style());
        y += 1;

        if let Some(high) = best {
            y += 1;
            let line = format!(
                "High Score: {}  |  Time: {}",
                high.score,
                format_clock(high.duration)
            );
            fb.put_centered(y, &line, palette.score_style());
        }
    }

    fn draw_playing(
        &self,
        fb: &mut FrameBuffer,
        game: &GameState,
        now: Instant,
        palette: &Palette,
        viewport: Viewport,
    ) {
        let rows = viewport.playfield_rows() as i32;
        let pipe_style = CellStyle::fg(palette.pipe);

        for pipe in game.pipes() {
            draw_pipe(fb, pipe, rows, pipe_style);
        }

        let bird = game.bird();
        let row = bird.row();
        if (0..rows).contains(&row) && bird.x >= 0 && bird.x + 1 < viewport.width as i32 {
            let wing = if bird.is_rising() { '^' } else { 'v' };
            let style = CellStyle::fg(palette.bird).bold();
            fb.put_char(bird.x as u16, row as u16, wing, style);
            fb.put_char(bird.x as u16 + 1, row as u16, '○', style);
        }

        let status_y = viewport.height - 1;
        let style = palette.score_style();
        fb.put_str(0, status_y, "Score: ", style);
        fb.put_u32(7, status_y, game.score(), style);
        let x = 7 + digit_count(game.score());
        fb.put_str(x, status_y, "  Time: ", style);
        fb.put_str(x + 8, status_y, &format_clock(game.elapsed(now)), style);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        game: &GameState,
        now: Instant,
        palette: &Palette,
        viewport: Viewport,
    ) {
        let rankings = game.leaderboard().rankings.as_slice();
        let shown = rankings.len().min(self.rankings_shown);

        let use_art = fits(viewport, &GAME_OVER_ART, 19);
        let mut needed: u16 = (if use_art { 6 } else { 1 }) + 5;
        if game.is_new_record() {
            needed += 1;
        }
        if shown > 0 {
            needed += shown as u16 + 2;
        }
        let mut y = viewport.height.saturating_sub(needed) / 2;

        if use_art {
            y = draw_art(fb, y, &GAME_OVER_ART, palette.game_over_style());
        } else {
            fb.put_centered(y, "GAME OVER", palette.game_over_style());
            y += 1;
        }
        y += 1;

        if game.is_new_record() {
            fb.put_centered(y, "★ NEW RECORD! ★", palette.new_record_style());
            y += 1;
        }

        let score = format!(
            "Score: {}  |  Time: {}",
            game.score(),
            format_clock(game.elapsed(now))
        );
        fb.put_centered(y, &score, palette.text_style());
        y += 1;

        let stats = game.stats();
        let line = format!(
            "Jumps: {}  |  Max Height: {}  |  Avg: {:.1}",
            stats.jump_count,
            stats.max_height,
            stats.average_height()
        );
        fb.put_centered(y, &line, palette.text_style());
        y += 2;

        if shown > 0 {
            fb.put_centered(y, "=== TOP RANKINGS ===", palette.score_style());
            y += 1;
            for (i, rec) in rankings.iter().take(shown).enumerate() {
                let line = format!(
                    "{}. {} pts  {}  [{}]",
                    i + 1,
                    rec.score,
                    format_clock(rec.duration),
                    rec.difficulty
                );
                fb.put_centered(y, &line, palette.text_style());
                y += 1;
            }
            y += 1;
        }

        fb.put_centered(
            y,
            "Press SPACE or R to restart  |  Press Q to quit",
            palette.text_style(),
        );
    }
}

/// Difficulty selector with the current level bracketed.
fn difficulty_line(current: Difficulty) -> String {
    let items: Vec<String> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, d)| {
            if *d == current {
                format!("[{}: {}*]", i + 1, d.name())
            } else {
                format!("{}: {}", i + 1, d.name())
            }
        })
        .collect();
    format!("Difficulty: {}", items.join("  "))
}

fn fits(viewport: Viewport, art: &[&str], rows: u16) -> bool {
    let width = art.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    viewport.width >= width && viewport.height >= rows
}

/// Draw a block of art centered as a whole; returns the next free row.
fn draw_art(fb: &mut FrameBuffer, y: u16, art: &[&str], style: CellStyle) -> u16 {
    let width = art.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let x = fb.width().saturating_sub(width) / 2;
    for (i, line) in art.iter().enumerate() {
        fb.put_str(x, y + i as u16, line, style);
    }
    y + art.len() as u16
}

fn draw_pipe(fb: &mut FrameBuffer, pipe: &Pipe, rows: i32, style: CellStyle) {
    let gap_end = pipe.gap_top + pipe.gap_size;
    let width = fb.width() as i32;

    for x in pipe.x.max(0)..(pipe.x + PIPE_WIDTH).min(width) {
        for y in 0..pipe.gap_top.min(rows) {
            let ch = if y == pipe.gap_top - 1 { PIPE_LIP } else { PIPE_BODY };
            fb.put_char(x as u16, y as u16, ch, style);
        }
        for y in gap_end.max(0)..rows {
            let ch = if y == gap_end { PIPE_LIP } else { PIPE_BODY };
            fb.put_char(x as u16, y as u16, ch, style);
        }
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
