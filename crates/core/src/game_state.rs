//! Game state - the board/piece state machine
//!
//! [`Game`] owns the board, the active piece, the spawner and the score. It is
//! mutated only through `&mut self`, one command or tick at a time, so there
//! is never more than one in-flight change to the active piece.
//!
//! After every lock the whole board turns 90° clockwise and gravity turns
//! with it. The sequence is:
//!
//! 1. commit the active cells (a collision here ends the game)
//! 2. clear full lines on the axis swept for the current orientation
//! 3. score the clear
//! 4. rotate the board and advance the orientation
//! 5. end the game if the stack touches the new sentinel line
//! 6. spawn the next piece at the new spawn edge

use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::ActivePiece;
use crate::scoring::{self, ScoreTracker};
use crate::shapes::template;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::spawner::{piece_at_spawn, Spawner};
use crate::types::{
    ClockDirection, Command, Direction, GameEvent, Orientation, Phase, Pos, ShapeKind,
};

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    orientation: Orientation,
    active: Option<ActivePiece>,
    spawner: Spawner,
    score: ScoreTracker,
    phase: Phase,
    paused: bool,
    /// Game clock, advanced only while play is running.
    clock_ms: u64,
    drop_timer_ms: u32,
    last_rotate_ms: Option<u64>,
    events: Vec<GameEvent>,
    episode_id: u32,
    piece_id: u32,
}

impl Game {
    /// Create a new game with default settings and the given RNG seed
    pub fn new(seed: u32) -> Self {
        let config = GameConfig {
            seed,
            ..GameConfig::default()
        };
        let board = Board::new(config.width, config.height);
        Self::with_board(config, board, Orientation::Down)
    }

    /// Create a game from a validated configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height);
        Ok(Self::with_board(config, board, Orientation::Down))
    }

    /// Create a game around an existing board, without validation.
    ///
    /// Restart still goes back to the configured dimensions.
    pub fn with_board(config: GameConfig, board: Board, orientation: Orientation) -> Self {
        Self {
            spawner: Spawner::new(config.seed),
            config,
            board,
            orientation,
            active: None,
            score: ScoreTracker::new(),
            phase: Phase::Idle,
            paused: false,
            clock_ms: 0,
            drop_timer_ms: 0,
            last_rotate_ms: None,
            events: Vec::new(),
            episode_id: 0,
            piece_id: 0,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        info!(
            episode = self.episode_id,
            width = self.board.width(),
            height = self.board.height(),
            "game started"
        );
        self.phase = Phase::Falling;
        self.spawn_piece();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn level(&self) -> u32 {
        self.score.level()
    }

    pub fn lines_cleared(&self) -> u32 {
        self.score.lines_cleared()
    }

    pub fn score_tracker(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Gravity interval for the current level, or the configured override.
    pub fn gravity_interval_ms(&self) -> u32 {
        self.config
            .gravity_interval_ms
            .unwrap_or_else(|| scoring::gravity_interval_ms(self.score.level()))
    }

    /// Where the active piece would land if dropped now.
    pub fn ghost_cells(&self) -> Option<Vec<Pos>> {
        let piece = self.active.as_ref()?;
        let gravity = self.orientation.gravity();
        let distance = piece.drop_distance(&self.board, gravity);
        Some(piece.shifted_cells(gravity, distance))
    }

    /// Whether commands and gravity currently apply.
    fn is_running(&self) -> bool {
        self.phase == Phase::Falling && !self.paused
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.ghost = self.ghost_cells().unwrap_or_default();
        out.orientation = self.orientation;
        out.phase = self.phase;
        out.paused = self.paused;
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
        out.seed = self.spawner.seed();
        out.score = self.score.score();
        out.level = self.score.level();
        out.lines_cleared = self.score.lines_cleared();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take every event raised since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn a random piece at the spawn edge.
    ///
    /// Returns false, ending the game, when the spawn cells are occupied.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.spawner.next_kind();
        let piece = piece_at_spawn(kind, &self.board, self.orientation);
        self.install_piece(piece)
    }

    /// Spawn `kind` with its template anchored at `anchor`.
    pub fn spawn_kind_at(&mut self, kind: ShapeKind, anchor: Pos) -> bool {
        let piece = ActivePiece::new(template(kind), anchor);
        self.install_piece(piece)
    }

    fn install_piece(&mut self, piece: ActivePiece) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        if !piece.fits(&self.board) {
            warn!(kind = piece.kind().as_str(), "spawn blocked");
            self.end_game();
            return false;
        }

        self.piece_id = self.piece_id.wrapping_add(1);
        self.drop_timer_ms = 0;
        self.phase = Phase::Falling;
        debug!(
            kind = piece.kind().as_str(),
            piece_id = self.piece_id,
            orientation = self.orientation.as_str(),
            "piece spawned"
        );
        self.events.push(GameEvent::PieceCreated { kind: piece.kind() });
        self.active = Some(piece);
        true
    }

    /// One gravity step: move along gravity or lock in place.
    pub fn gravity_tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let gravity = self.orientation.gravity();
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !piece.try_move(&self.board, gravity) {
            self.lock_piece();
        }
        true
    }

    /// Advance the game clock and fire any gravity ticks that came due.
    ///
    /// Returns whether anything changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.clock_ms += u64::from(elapsed_ms);
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);

        let mut changed = false;
        loop {
            let interval = self.gravity_interval_ms();
            if self.drop_timer_ms < interval {
                break;
            }
            self.drop_timer_ms -= interval;
            changed |= self.gravity_tick();
            if !self.is_running() {
                break;
            }
        }
        changed
    }

    /// Translate the active piece one cell.
    pub fn handle_move(&mut self, dir: Direction) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => piece.try_move(&self.board, dir),
            None => false,
        }
    }

    /// Rotate the active piece, honouring the rotation cooldown.
    pub fn handle_rotate(&mut self, clock: ClockDirection) -> bool {
        if !self.is_running() {
            return false;
        }
        if let Some(last) = self.last_rotate_ms {
            if self.clock_ms.saturating_sub(last) < u64::from(self.config.rotate_cooldown_ms) {
                trace!(clock_ms = self.clock_ms, "rotation dropped by cooldown");
                return false;
            }
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !piece.try_rotate(&self.board, clock) {
            return false;
        }
        self.last_rotate_ms = Some(self.clock_ms);
        true
    }

    /// Drop along gravity until blocked, then lock.
    ///
    /// Awards points per cell travelled.
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let gravity = self.orientation.gravity();
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let distance = piece.drop_distance(&self.board, gravity);
        for _ in 0..distance {
            piece.try_move(&self.board, gravity);
        }
        self.score.on_hard_drop(distance);
        self.lock_piece();
        true
    }

    /// Lock the active piece onto the board, clear lines, rotate and respawn.
    pub fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.phase = Phase::Locking;

        if let Err(err) = self.board.place(piece.cells(), piece.color()) {
            warn!(
                error = %err,
                kind = piece.kind().as_str(),
                "lock failed, ending game"
            );
            self.end_game();
            return;
        }

        let cleared = self.board.clear_full_lines(self.orientation);
        if cleared > 0 {
            let points = self.score.on_lines_cleared(cleared);
            self.events.push(GameEvent::LinesCleared {
                count: cleared as u32,
                points,
            });
        }
        debug!(
            kind = piece.kind().as_str(),
            lines = cleared,
            score = self.score.score(),
            "piece locked"
        );

        self.rotate_and_respawn();
    }

    /// Discard the active piece and run the board rotation sequence.
    pub fn rotate_board_clockwise(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.active = None;
        self.rotate_and_respawn();
        true
    }

    fn rotate_and_respawn(&mut self) {
        self.board.rotate_clockwise();
        self.orientation = self.orientation.next_clockwise();
        debug!(
            orientation = self.orientation.as_str(),
            width = self.board.width(),
            height = self.board.height(),
            "board rotated"
        );
        self.events.push(GameEvent::BoardRotated {
            orientation: self.orientation,
            width: self.board.width(),
            height: self.board.height(),
        });

        if self
            .board
            .is_game_over(self.orientation, self.config.spawn_margin)
        {
            self.end_game();
            return;
        }
        self.phase = Phase::Falling;
        self.spawn_piece();
    }

    fn end_game(&mut self) {
        self.active = None;
        self.phase = Phase::GameOver;
        info!(
            score = self.score.score(),
            lines = self.score.lines_cleared(),
            episode = self.episode_id,
            "game over"
        );
        self.events.push(GameEvent::GameOver {
            score: self.score.score(),
        });
    }

    /// Toggle pause. Rejected before start and after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        true
    }

    /// Reset the board to the configured dimensions and start a new episode.
    ///
    /// The piece sequence continues from the current RNG state.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.board = Board::new(self.config.width, self.config.height);
        self.orientation = Orientation::Down;
        self.active = None;
        if self.config.reset_score_on_restart {
            self.score = ScoreTracker::new();
        }
        self.paused = false;
        self.drop_timer_ms = 0;
        self.last_rotate_ms = None;
        self.phase = Phase::Idle;
        info!(
            episode = self.episode_id,
            score = self.score.score(),
            "game restarted"
        );
        self.start();
    }

    /// Apply a player command. Returns whether it took effect.
    pub fn apply(&mut self, command: Command) -> bool {
        let applied = match command {
            Command::Move(dir) => self.handle_move(dir),
            Command::Rotate(clock) => self.handle_rotate(clock),
            Command::HardDrop => self.hard_drop(),
            Command::RotateBoard => self.rotate_board_clockwise(),
            Command::Pause => self.toggle_pause(),
            Command::Restart => {
                self.restart();
                true
            }
        };
        if !applied {
            trace!(command = command.as_str(), "command rejected");
        }
        applied
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    const C: Color = Color::new(7, 7, 7);

    fn game_on(board: Board, orientation: Orientation) -> Game {
        let mut game = Game::with_board(GameConfig::default(), board, orientation);
        game.phase = Phase::Falling;
        game
    }

    fn cells_of(game: &Game) -> Vec<Pos> {
        game.active().map(|p| p.cells().to_vec()).unwrap_or_default()
    }

    #[test]
    fn test_new_game_is_idle() {
        let game = Game::new(12345);
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.active().is_none());
        assert_eq!((game.width(), game.height()), (12, 22));
        assert_eq!(game.orientation(), Orientation::Down);
        assert_eq!((game.score(), game.level(), game.lines_cleared()), (0, 1, 0));
    }

    #[test]
    fn test_start_spawns_piece() {
        let mut game = Game::new(12345);
        game.start();
        assert_eq!(game.phase(), Phase::Falling);
        assert!(game.active().is_some());
        assert_eq!(game.piece_id(), 1);
        let events = game.take_events();
        assert!(matches!(events.as_slice(), [GameEvent::PieceCreated { .. }]));
        assert!(game.take_events().is_empty());

        // Starting twice does nothing.
        game.start();
        assert_eq!(game.piece_id(), 1);
    }

    #[test]
    fn test_with_config_validates() {
        let bad = GameConfig {
            height: 3,
            ..GameConfig::default()
        };
        assert!(Game::with_config(bad).is_err());
        assert!(Game::with_config(GameConfig::default()).is_ok());
    }

    #[test]
    fn test_single_cell_falls_nineteen_rows() {
        let mut game = game_on(Board::new(12, 22), Orientation::Down);
        assert!(game.spawn_kind_at(ShapeKind::Single, Pos::new(2, 5)));
        for i in 0..19 {
            assert!(game.handle_move(Direction::Down), "move {i}");
        }
        assert!(!game.handle_move(Direction::Down));
        assert_eq!(cells_of(&game), vec![Pos::new(21, 5)]);
    }

    #[test]
    fn test_gravity_follows_orientation() {
        let mut game = game_on(Board::new(22, 12), Orientation::Left);
        assert!(game.spawn_kind_at(ShapeKind::Single, Pos::new(6, 21)));
        assert!(game.gravity_tick());
        assert_eq!(cells_of(&game), vec![Pos::new(6, 20)]);

        let mut game = game_on(Board::new(12, 22), Orientation::Up);
        assert!(game.spawn_kind_at(ShapeKind::Single, Pos::new(21, 5)));
        assert!(game.gravity_tick());
        assert_eq!(cells_of(&game), vec![Pos::new(20, 5)]);
    }

    #[test]
    fn test_lock_rotates_board_and_advances_orientation() {
        let mut game = game_on(Board::new(12, 22), Orientation::Down);
        assert!(game.spawn_kind_at(ShapeKind::Single, Pos::new(21, 0)));
        game.take_events();

        game.lock_piece();
        assert_eq!(game.orientation(), Orientation::Left);
        assert_eq!((game.width(), game.height()), (22, 12));
        assert!(game.board().is_occupied(0, 0));
        assert_eq!(game.phase(), Phase::Falling);
        assert!(game.active().is_some());

        let events = game.take_events();
        assert_eq!(
            events[0],
            GameEvent::BoardRotated {
                orientation: Orientation::Left,
                width: 22,
                height: 12,
            }
        );
        assert!(matches!(events[1], GameEvent::PieceCreated { .. }));
    }

    #[test]
    fn test_lock_clears_line_and_scores() {
        let mut board = Board::new(12, 22);
        for col in (0..12).filter(|&c| c != 5) {
            board.set(21, col, Some(C));
        }
        let mut game = game_on(board, Orientation::Down);
        assert!(game.spawn_kind_at(ShapeKind::Single, Pos::new(21, 5)));
        game.take_events();

        game.lock_piece();
        assert_eq!(game.score(), 100);
        assert_eq!(game.lines_cleared(), 1);
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(
            game.take_events()[0],
            GameEvent::LinesCleared {
                count: 1,
                points: 100
            }
        );
    }

    #[test]
    fn test_failed_lock_ends_game() {
        let mut game = game_on(Board::new(12, 22), Orientation::Down);
        assert!(game.spawn_kind_at(ShapeKind::Bar2, Pos::new(10, 3)));
        game.board_mut().set(10, 4, Some(C));

        game.lock_piece();
        assert!(game.game_over());
        assert!(game.active().is_none());
        // Nothing was committed.
        assert_eq!(game.board().occupied_count(), 1);
        assert_eq!(game.orientation(), Orientation::Down);
        assert!(matches!(
            game.take_events().last(),
            Some(GameEvent::GameOver { score: 0 })
        ));
    }

    #[test]
    fn test_stack_on_new_sentinel_ends_game() {
        let mut board = Board::new(12, 22);
        // Row 4 becomes column 17, the sentinel once gravity points left.
        board.set(4, 0, Some(C));
        let mut game = game_on(board, Orientation::Down);
        assert!(game.spawn_kind_at(ShapeKind::Single, Pos::new(15, 8)));

        game.lock_piece();
        assert_eq!(game.orientation(), Orientation::Left);
        assert!(game.board().is_occupied(0, 17));
        assert!(game.game_over());
        assert!(game.active().is_none());
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut board = Board::new(12, 22);
        for col in 0..12 {
            board.set(0, col, Some(C));
        }
        let mut game = game_on(board, Orientation::Down);
        assert!(!game.spawn_piece());
        assert!(game.game_over());
        assert!(game.active().is_none());
    }

    #[test]
    fn test_hard_drop_scores_and_locks() {
        let mut game = game_on(Board::new(12, 22), Orientation::Down);
        assert!(game.spawn_kind_at(ShapeKind::Single, Pos::new(2, 5)));
        assert!(game.hard_drop());
        assert_eq!(game.score(), 38);
        // (21, 5) on the 12x22 board lands at (5, 0) after rotation.
        assert!(game.board().is_occupied(5, 0));
        assert_eq!(game.orientation(), Orientation::Left);
    }

    #[test]
    fn test_rotate_cooldown() {
        let mut game = game_on(Board::new(12, 22), Orientation::Down);
        assert!(game.spawn_kind_at(ShapeKind::Bar3, Pos::new(10, 4)));
        assert!(game.handle_rotate(ClockDirection::Clockwise));
        assert!(!game.handle_rotate(ClockDirection::CounterClockwise));

        game.advance(49);
        assert!(!game.handle_rotate(ClockDirection::CounterClockwise));
        game.advance(1);
        assert!(game.handle_rotate(ClockDirection::CounterClockwise));
        assert_eq!(
            cells_of(&game),
            vec![Pos::new(10, 4), Pos::new(10, 5), Pos::new(10, 6)]
        );
    }

    #[test]
    fn test_advance_fires_gravity_on_interval() {
        let mut game = game_on(Board::new(12, 22), Orientation::Down);
        assert!(game.spawn_kind_at(ShapeKind::Single, Pos::new(2, 5)));
        assert_eq!(game.gravity_interval_ms(), 800);

        assert!(!game.advance(799));
        assert_eq!(cells_of(&game), vec![Pos::new(2, 5)]);
        assert!(game.advance(1));
        assert_eq!(cells_of(&game), vec![Pos::new(3, 5)]);
        assert!(game.advance(1600));
        assert_eq!(cells_of(&game), vec![Pos::new(5, 5)]);
    }

    #[test]
    fn test_gravity_override() {
        let config = GameConfig {
            gravity_interval_ms: Some(100),
            ..GameConfig::default()
        };
        let mut game = Game::with_config(config).unwrap();
        assert_eq!(game.gravity_interval_ms(), 100);
        game.start();
        let before = cells_of(&game);
        assert!(game.advance(100));
        assert_ne!(cells_of(&game), before);
    }

    #[test]
    fn test_grounded_piece_locks_on_tick() {
        let mut game = game_on(Board::new(12, 22), Orientation::Down);
        assert!(game.spawn_kind_at(ShapeKind::Single, Pos::new(21, 5)));
        assert!(game.advance(800));
        assert_eq!(game.orientation(), Orientation::Left);
        assert_eq!(game.piece_id(), 2);
    }

    #[test]
    fn test_pause_blocks_commands_and_gravity() {
        let mut game = Game::new(9);
        game.start();
        let before = cells_of(&game);

        assert!(game.apply(Command::Pause));
        assert!(game.paused());
        assert!(!game.apply(Command::Move(Direction::Left)));
        assert!(!game.apply(Command::HardDrop));
        assert!(!game.apply(Command::RotateBoard));
        assert!(!game.advance(10_000));
        assert_eq!(cells_of(&game), before);
        assert_eq!(game.clock_ms(), 0);

        assert!(game.apply(Command::Pause));
        assert!(!game.paused());
    }

    #[test]
    fn test_rotate_board_command_discards_piece() {
        let mut game = Game::new(5);
        game.start();
        game.take_events();

        assert!(game.apply(Command::RotateBoard));
        assert_eq!(game.orientation(), Orientation::Left);
        assert_eq!((game.width(), game.height()), (22, 12));
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.piece_id(), 2);
    }

    #[test]
    fn test_restart_resets_board_and_score() {
        let mut game = Game::new(5);
        game.start();
        game.apply(Command::HardDrop);
        assert!(game.score() > 0);
        assert_eq!(game.orientation(), Orientation::Left);

        assert!(game.apply(Command::Restart));
        assert_eq!(game.episode_id(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.orientation(), Orientation::Down);
        assert_eq!((game.width(), game.height()), (12, 22));
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.phase(), Phase::Falling);
    }

    #[test]
    fn test_restart_can_keep_score() {
        let config = GameConfig {
            reset_score_on_restart: false,
            ..GameConfig::default()
        };
        let mut game = Game::with_config(config).unwrap();
        game.start();
        game.apply(Command::HardDrop);
        let score = game.score();
        assert!(score > 0);

        game.restart();
        assert_eq!(game.score(), score);
    }

    #[test]
    fn test_commands_rejected_after_game_over() {
        let mut board = Board::new(12, 22);
        for col in 0..12 {
            board.set(0, col, Some(C));
        }
        let mut game = game_on(board, Orientation::Down);
        game.spawn_piece();
        assert!(game.game_over());

        for cmd in [
            Command::Move(Direction::Left),
            Command::Rotate(ClockDirection::Clockwise),
            Command::HardDrop,
            Command::RotateBoard,
            Command::Pause,
        ] {
            assert!(!game.apply(cmd), "{}", cmd.as_str());
        }
        assert!(!game.advance(5_000));
        assert!(game.apply(Command::Restart));
        assert!(!game.game_over());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = game_on(Board::new(12, 22), Orientation::Down);
        assert!(game.spawn_kind_at(ShapeKind::Single, Pos::new(2, 5)));

        let snap = game.snapshot();
        assert_eq!((snap.width, snap.height), (12, 22));
        assert_eq!(snap.cells.len(), 12 * 22);
        let active = snap.active.as_ref().unwrap();
        assert_eq!(active.kind, ShapeKind::Single);
        assert_eq!(active.cells, vec![Pos::new(2, 5)]);
        assert_eq!(snap.ghost, vec![Pos::new(21, 5)]);
        assert_eq!(snap.phase, Phase::Falling);
        assert!(snap.playable());
    }
}
