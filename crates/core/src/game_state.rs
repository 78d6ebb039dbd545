//! Game state module - the simulation state machine
//!
//! This module ties together the bird, the pipes, run statistics and the
//! difficulty table. It handles the Title → Playing → GameOver lifecycle,
//! per-tick physics, spawning, collisions, scoring and speed ramp-up.
//!
//! Every entry point is a synchronous step: it mutates the state and returns
//! the [`Effects`] the caller must carry out.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::bird::Bird;
use crate::effects::{Effects, Moment};
use crate::pipe::Pipe;
use crate::playfield::Playfield;
use crate::record::{Leaderboard, ScoreRecord};
use crate::stats::RunStats;
use crate::types::*;

/// Top-level screen / lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Title,
    Playing,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    phase: Phase,
    bird: Bird,
    /// Oldest first.
    pipes: Vec<Pipe>,
    score: u32,
    tick_interval: Duration,
    run_started: Option<Instant>,
    /// Length of the last finished run (frozen at game over).
    run_duration: Duration,
    /// Monotonic run id (increments on every start/restart).
    run_id: u32,
    difficulty: Difficulty,
    theme: Theme,
    stats: RunStats,
    is_new_record: bool,
    playfield: Playfield,
    leaderboard: Leaderboard,
    rng: StdRng,
}

impl GameState {
    /// Create a game on the title screen with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let playfield = Playfield::default();
        let bird = Bird::spawn(playfield.height());
        let difficulty = Difficulty::default();

        Self {
            phase: Phase::Title,
            bird,
            pipes: Vec::new(),
            score: 0,
            tick_interval: difficulty.settings().initial_interval,
            run_started: None,
            run_duration: Duration::ZERO,
            run_id: 0,
            difficulty,
            theme: Theme::default(),
            stats: RunStats::new(bird.row()),
            is_new_record: false,
            playfield,
            leaderboard: Leaderboard::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_leaderboard(mut self, leaderboard: Leaderboard) -> Self {
        self.leaderboard = leaderboard;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_playfield(mut self, width: u16, height: u16) -> Self {
        self.playfield = Playfield::new(width, height);
        self.bird = Bird::spawn(self.playfield.height());
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn run_id(&self) -> u32 {
        self.run_id
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn is_new_record(&self) -> bool {
        self.is_new_record
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Replace the displayed high score and rankings
    pub fn set_leaderboard(&mut self, leaderboard: Leaderboard) {
        self.leaderboard = leaderboard;
    }

    /// Time spent in the current run; frozen once the run is over
    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.phase, self.run_started) {
            (Phase::Playing, Some(started)) => now.saturating_duration_since(started),
            (Phase::GameOver, _) => self.run_duration,
            _ => Duration::ZERO,
        }
    }

    /// Direct pipe access for staging scenarios in tests.
    #[cfg(any(test, feature = "test-support"))]
    pub fn pipes_mut(&mut self) -> &mut Vec<Pipe> {
        &mut self.pipes
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    /// Apply an input action
    pub fn handle(&mut self, action: GameAction, now: Moment) -> Effects {
        match action {
            GameAction::Quit => Effects::quit(),
            GameAction::Resize { width, height } => {
                self.playfield = Playfield::new(width, height);
                Effects::none()
            }
            GameAction::SelectDifficulty(difficulty) => {
                if self.phase == Phase::Title {
                    self.difficulty = difficulty;
                }
                Effects::none()
            }
            GameAction::ToggleTheme => {
                if self.phase == Phase::Title {
                    self.theme = self.theme.next();
                }
                Effects::none()
            }
            GameAction::Flap => match self.phase {
                Phase::Title | Phase::GameOver => self.start_run(now),
                Phase::Playing => {
                    self.bird.jump();
                    self.stats.record_jump();
                    let mut fx = Effects::none();
                    fx.play(SoundEvent::Jump);
                    fx
                }
            },
            GameAction::Restart => {
                if self.phase == Phase::GameOver {
                    self.start_run(now)
                } else {
                    Effects::none()
                }
            }
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Ticks outside of `Playing` are ignored.
    pub fn tick(&mut self, now: Moment) -> Effects {
        if self.phase != Phase::Playing {
            return Effects::none();
        }

        let mut fx = Effects::none();

        // Physics first, then sample where the bird ended up.
        self.bird.update();
        let row = self.bird.row();
        self.stats.sample(row);

        // Ceiling / floor beats anything the pipes would do this tick.
        if !self.playfield.contains_row(row) {
            self.finish_run(now, &mut fx);
            return fx;
        }

        let settings = self.difficulty.settings();
        for i in (0..self.pipes.len()).rev() {
            let pipe = &mut self.pipes[i];
            pipe.advance();

            if pipe.collides_with(&self.bird) {
                self.finish_run(now, &mut fx);
                return fx;
            }

            if pipe.is_passed(&self.bird) {
                pipe.mark_passed();
                self.score += 1;
                fx.play(SoundEvent::Score);
                if self.score % settings.score_interval == 0 {
                    self.speed_up(settings);
                }
            }
        }

        self.pipes.retain(|p| !p.is_off_screen());

        if self.should_spawn() {
            self.spawn_pipe();
        }

        fx.schedule_tick = Some(self.tick_interval);
        fx
    }

    fn start_run(&mut self, now: Moment) -> Effects {
        let settings = self.difficulty.settings();

        self.phase = Phase::Playing;
        self.bird = Bird::spawn(self.playfield.height());
        self.pipes.clear();
        self.score = 0;
        self.stats = RunStats::new(self.bird.row());
        self.tick_interval = settings.initial_interval;
        self.run_started = Some(now.instant);
        self.run_duration = Duration::ZERO;
        self.is_new_record = false;
        self.run_id = self.run_id.wrapping_add(1);

        info!(
            run_id = self.run_id,
            difficulty = self.difficulty.name(),
            "run started"
        );
        Effects::tick_after(self.tick_interval)
    }

    fn finish_run(&mut self, now: Moment, fx: &mut Effects) {
        self.phase = Phase::GameOver;

        let started = self.run_started.unwrap_or(now.instant);
        self.run_duration = now.instant.saturating_duration_since(started);
        self.is_new_record = self.leaderboard.is_new_high_score(self.score);

        let record = ScoreRecord {
            score: self.score,
            duration: self.run_duration,
            date: now.wall,
            jump_count: self.stats.jump_count,
            max_height: self.stats.max_height,
            min_height: self.stats.min_height,
            avg_height: self.stats.average_height(),
            difficulty: self.difficulty.name().to_string(),
        };

        info!(
            run_id = self.run_id,
            score = self.score,
            duration_ms = self.run_duration.as_millis() as u64,
            new_record = self.is_new_record,
            "game over"
        );

        fx.play(SoundEvent::GameOver);
        fx.persist = Some(record);
    }

    /// Shorten the tick interval, never below the difficulty floor
    fn speed_up(&mut self, settings: DifficultySettings) {
        let next = self
            .tick_interval
            .saturating_sub(settings.interval_step)
            .max(settings.min_interval);
        if next != self.tick_interval {
            debug!(
                score = self.score,
                interval_ms = next.as_millis() as u64,
                "speed up"
            );
        }
        self.tick_interval = next;
    }

    fn should_spawn(&self) -> bool {
        self.pipes
            .last()
            .map_or(true, |p| p.x < self.playfield.width() - PIPE_SPAWN_GAP)
    }

    fn spawn_pipe(&mut self) {
        let gap = self.playfield.fit_gap(self.difficulty.settings().pipe_gap);
        let pipe = Pipe::spawn(
            &mut self.rng,
            self.playfield.width(),
            self.playfield.height(),
            gap,
        );
        self.pipes.push(pipe);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
