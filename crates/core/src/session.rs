//! Game session module - ties board, bag and active piece into one playthrough
//!
//! The session owns every piece of mutable game state and is driven from the
//! outside: commands arrive through [`GameSession::apply`] (or the named
//! methods), and the front-end loop feeds elapsed time into
//! [`GameSession::tick`] for gravity. Nothing in here blocks, sleeps or reads
//! a clock.
//!
//! Landing always resolves in the same order: merge the piece, clear
//! completed rows, score them, then spawn the next piece. A spawn that
//! collides immediately ends the game.
//!
//! Once the game is over every gameplay call is a no-op until [`GameSession::reset`].

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::bag::PieceBag;
use crate::board::Board;
use crate::config::SessionConfig;
use crate::piece::ActivePiece;
use crate::scoring::{drop_interval_ms, drop_points, level_for_lines, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, SessionStats};
use crate::types::{Command, PieceKind};

/// What happened when a piece came to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Landing {
    pub lines_cleared: u32,
    /// Points awarded for the cleared rows
    pub line_points: u32,
    /// Points awarded for the drop that ended in this landing
    pub drop_points: u32,
    /// The follow-up spawn was blocked
    pub game_over: bool,
}

/// Result of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionOutcome {
    /// Not applicable in the current state (paused, game over, no piece)
    Ignored,
    /// State changed
    Applied,
    /// Attempted but rejected by collision; state unchanged
    Blocked,
    /// The piece landed
    Landed(Landing),
}

impl ActionOutcome {
    fn from_moved(moved: bool) -> Self {
        if moved {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Blocked
        }
    }

    pub fn landing(&self) -> Option<Landing> {
        match self {
            ActionOutcome::Landed(landing) => Some(*landing),
            _ => None,
        }
    }
}

/// One playthrough
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    config: SessionConfig,
    board: Board,
    bag: PieceBag<R>,
    active: Option<ActivePiece>,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Time accumulated towards the next gravity step
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameSession<StdRng> {
    /// Create a session whose piece sequence is fixed by `seed`
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Create a session seeded from the operating system
    pub fn from_entropy(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a session drawing pieces with `rng`
    ///
    /// The session is idle until [`GameSession::start`] spawns the first piece.
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        Self {
            board: Board::new(config.width, config.height),
            bag: PieceBag::new(rng),
            active: None,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: drop_interval_ms(1, &config),
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
            started: false,
            config,
        }
    }

    /// Spawn the first piece; later calls do nothing
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_next();
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn bag(&self) -> &PieceBag<R> {
        &self.bag
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether gameplay commands currently act on a piece
    pub fn playable(&self) -> bool {
        self.active.is_some() && !self.paused && !self.game_over
    }

    /// Draw the next kind from the bag and spawn it
    ///
    /// Returns false if the spawn was blocked (the game is now over) or the
    /// game had already ended.
    pub fn spawn_next(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let kind = self.bag.draw();
        self.spawn(kind)
    }

    /// Replace the active piece with a fresh `kind` at the spawn position
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        if self.game_over {
            return false;
        }
        self.started = true;
        self.drop_timer_ms = 0;

        let piece = ActivePiece::spawn(kind, &self.board);
        if piece.collides(&self.board) {
            debug!("spawn of {} blocked at {:?}", kind, piece.position());
            self.active = None;
            self.declare_game_over();
            return false;
        }

        debug!("spawned {} at {:?}", kind, piece.position());
        self.active = Some(piece);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i32) -> bool {
        if !self.playable() {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => piece.shift(dx, &self.board),
            None => false,
        }
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.rotate(true)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.rotate(false)
    }

    fn rotate(&mut self, clockwise: bool) -> bool {
        if !self.playable() {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => piece.rotate(clockwise, &self.board),
            None => false,
        }
    }

    /// Move the piece down one row on the player's request
    ///
    /// A successful step scores a soft-drop point; a blocked one lands the
    /// piece. Either way the gravity timer restarts.
    pub fn soft_drop_step(&mut self) -> ActionOutcome {
        if !self.playable() {
            return ActionOutcome::Ignored;
        }
        self.drop_timer_ms = 0;
        match self.step_down() {
            Some(landing) => ActionOutcome::Landed(landing),
            None => {
                self.add_drop_score(drop_points(1, false));
                ActionOutcome::Applied
            }
        }
    }

    /// Drop the piece to its landing row and land it
    pub fn hard_drop(&mut self) -> ActionOutcome {
        if !self.playable() {
            return ActionOutcome::Ignored;
        }
        let Some(piece) = self.active.as_mut() else {
            return ActionOutcome::Ignored;
        };
        let distance = piece.hard_drop(&self.board);
        let points = drop_points(distance, true);
        self.add_drop_score(points);
        self.drop_timer_ms = 0;
        ActionOutcome::Landed(self.land(points))
    }

    /// Advance the gravity timer by `elapsed_ms`
    ///
    /// Once the accumulated time exceeds the drop interval the piece falls one
    /// row and the timer restarts. Paused and finished sessions do not
    /// accumulate time. Returns the landing if the step put the piece down.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Landing> {
        if !self.playable() {
            return None;
        }
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.drop_interval_ms {
            return None;
        }
        self.drop_timer_ms = 0;
        self.step_down()
    }

    /// One row of descent; lands the piece when it cannot move
    fn step_down(&mut self) -> Option<Landing> {
        let piece = self.active.as_mut()?;
        if piece.drop_step(&self.board) {
            Some(self.land(0))
        } else {
            None
        }
    }

    fn land(&mut self, drop_points: u32) -> Landing {
        if let Some(piece) = self.active.take() {
            self.board.merge(&piece);
        }
        let cleared = self.board.clear_completed_rows();
        let line_points = self.on_lines_cleared(cleared);
        self.spawn_next();

        Landing {
            lines_cleared: cleared as u32,
            line_points,
            drop_points,
            game_over: self.game_over,
        }
    }

    /// Score a clear of `count` rows and advance the level
    ///
    /// Returns the points awarded.
    pub fn on_lines_cleared(&mut self, count: usize) -> u32 {
        if self.game_over || count == 0 {
            return 0;
        }
        let points = line_clear_points(count, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(count as u32);
        info!(
            "cleared {} line(s) for {} points, total lines {}",
            count, points, self.lines
        );

        let new_level = level_for_lines(self.lines, self.config.lines_per_level);
        if new_level > self.level {
            self.level = new_level;
            self.drop_interval_ms = drop_interval_ms(self.level, &self.config);
            info!(
                "level {} reached, drop interval {}ms",
                self.level, self.drop_interval_ms
            );
        }
        points
    }

    pub fn add_drop_score(&mut self, points: u32) {
        if self.game_over {
            return;
        }
        self.score = self.score.saturating_add(points);
    }

    /// Flip the pause flag; returns false when the game is already over
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
        true
    }

    /// Returns true if the session was running and is now paused
    pub fn pause(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.toggle_pause()
    }

    /// Returns true if the session was paused and is now running
    pub fn resume(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.toggle_pause()
    }

    pub fn declare_game_over(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        info!(
            "game over: score {}, level {}, lines {}",
            self.score, self.level, self.lines
        );
    }

    /// Start a fresh playthrough with the same configuration
    ///
    /// The bag is emptied, so the new game begins on a fresh cycle; the random
    /// source carries on from where it was.
    pub fn reset(&mut self) {
        self.board.clear();
        self.bag.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = drop_interval_ms(1, &self.config);
        self.drop_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.started = false;
        info!("session reset");
        self.start();
    }

    /// Dispatch a command
    pub fn apply(&mut self, command: Command) -> ActionOutcome {
        trace!("apply {}", command);
        match command {
            Command::Pause => {
                if self.toggle_pause() {
                    ActionOutcome::Applied
                } else {
                    ActionOutcome::Ignored
                }
            }
            Command::Reset => {
                self.reset();
                ActionOutcome::Applied
            }
            _ if !self.playable() => ActionOutcome::Ignored,
            Command::MoveLeft => ActionOutcome::from_moved(self.move_left()),
            Command::MoveRight => ActionOutcome::from_moved(self.move_right()),
            Command::RotateCw => ActionOutcome::from_moved(self.rotate_cw()),
            Command::RotateCcw => ActionOutcome::from_moved(self.rotate_ccw()),
            Command::SoftDrop => self.soft_drop_step(),
            Command::HardDrop => self.hard_drop(),
        }
    }

    /// Row the active piece would land on
    pub fn ghost_y(&self) -> Option<i32> {
        self.active
            .as_ref()
            .map(|piece| piece.landing_y(&self.board))
    }

    pub fn active_snapshot(&self) -> Option<ActiveSnapshot> {
        self.active.as_ref().map(ActiveSnapshot::from)
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            score: self.score,
            level: self.level,
            lines: self.lines,
            drop_interval_ms: self.drop_interval_ms,
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: self.active_snapshot(),
            ghost_y: self.ghost_y(),
            stats: self.stats(),
        }
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new(SessionConfig::default(), 1)
    }
}
