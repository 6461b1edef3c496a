use std::time::Duration;

use crate::{
    ActionError, ConfigError,
    core::{board::Board, piece::Piece},
};

use super::{
    game_config::{BlockedSoftDrop, GameConfig},
    game_stats::GameStats,
    piece_generator::{PieceDraw, PieceGenerator, PieceSeed},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    Running,
    /// Absorbing: only [`Game::reset`] leaves this state.
    GameOver,
}

/// Horizontal move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column offset: `-1` for left, `+1` for right.
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Player input, already mapped from whatever device produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
}

/// Everything that can drive the engine: gravity or player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Tick,
    Input(Command),
}

/// Result of locking the active piece into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    pub cleared_lines: usize,
    /// Points awarded for the cleared lines (drop bonuses not included).
    pub line_points: usize,
    /// Whether the piece spawned after the lock was already blocked.
    pub game_over: bool,
}

/// Result of a one-row downward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The piece moved down one row.
    Moved,
    /// The piece could not move and was locked.
    Locked(LockOutcome),
}

/// Game engine: owns the board, the active and next pieces, and the score.
///
/// All operations are synchronous and bounded. Invalid actions are rejected
/// with an [`ActionError`] and leave the state untouched; once a freshly
/// spawned piece is blocked the game enters [`GameStatus::GameOver`] and stays
/// there until [`Game::reset`].
///
/// # Example
///
/// ```
/// use blockfall_engine::{Direction, Game, GameConfig, PieceSeed, Step};
///
/// let seed = PieceSeed::from_u128(42);
/// let mut game = Game::with_seed(GameConfig::default(), seed).unwrap();
///
/// game.move_horizontal(Direction::Left).ok();
/// game.rotate().ok();
///
/// // Gravity moves the piece down until it locks.
/// while let Ok(Step::Moved) = game.tick() {}
/// assert_eq!(game.stats().completed_pieces(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    active: Piece,
    next: PieceDraw,
    generator: PieceGenerator,
    stats: GameStats,
    status: GameStatus,
}

impl Game {
    /// Starts a game with a random piece sequence.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let generator = PieceGenerator::new(config.color_mode);
        Self::with_generator(config, generator)
    }

    /// Starts a game whose piece sequence is fixed by `seed`.
    pub fn with_seed(config: GameConfig, seed: PieceSeed) -> Result<Self, ConfigError> {
        let generator = PieceGenerator::with_seed(seed, config.color_mode);
        Self::with_generator(config, generator)
    }

    fn with_generator(
        config: GameConfig,
        mut generator: PieceGenerator,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.board_width, config.board_height);
        let first = generator.draw();
        let next = generator.draw();
        let mut game = Self {
            active: Piece::spawn(first.kind, first.color, board.width()),
            board,
            next,
            generator,
            stats: GameStats::new(),
            status: GameStatus::Running,
            config,
        };
        game.check_spawn();
        Ok(game)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active_piece(&self) -> Piece {
        self.active
    }

    /// The piece that will spawn after the active one locks.
    #[must_use]
    pub fn next_piece(&self) -> PieceDraw {
        self.next
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Where the active piece would land if hard-dropped now.
    #[must_use]
    pub fn ghost_piece(&self) -> Piece {
        let mut dropped = self.active;
        while !self.board.is_colliding(dropped.down()) {
            dropped = dropped.down();
        }
        dropped
    }

    /// Delay before the next gravity tick at the current score.
    #[must_use]
    pub fn gravity_interval(&self) -> Duration {
        self.config.gravity.interval(self.stats.score())
    }

    fn ensure_running(&self) -> Result<(), ActionError> {
        if self.status.is_game_over() {
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    /// Replaces the active piece with `piece` if it fits on the board.
    fn try_place(&mut self, piece: Piece) -> Result<(), ActionError> {
        if self.board.is_colliding(piece) {
            return Err(ActionError::Blocked);
        }
        self.active = piece;
        Ok(())
    }

    /// Applies gravity: moves the active piece down one row, or locks it when
    /// it cannot move.
    pub fn tick(&mut self) -> Result<Step, ActionError> {
        self.ensure_running()?;
        if self.try_place(self.active.down()).is_ok() {
            return Ok(Step::Moved);
        }
        Ok(Step::Locked(self.lock_active_piece()))
    }

    /// Shifts the active piece one column left or right.
    pub fn move_horizontal(&mut self, direction: Direction) -> Result<(), ActionError> {
        self.ensure_running()?;
        self.try_place(self.active.shifted(0, direction.offset()))
    }

    /// Moves the active piece down one row on player request.
    ///
    /// A successful step earns the soft-drop bonus. When the piece is resting
    /// on something, [`BlockedSoftDrop`] decides between rejecting the input
    /// and locking like a gravity tick.
    pub fn soft_drop(&mut self) -> Result<Step, ActionError> {
        self.ensure_running()?;
        match self.try_place(self.active.down()) {
            Ok(()) => {
                self.stats
                    .add_drop_bonus(self.config.scoring.soft_drop_points);
                Ok(Step::Moved)
            }
            Err(err) => match self.config.soft_drop_on_blocked {
                BlockedSoftDrop::Ignore => Err(err),
                BlockedSoftDrop::Lock => Ok(Step::Locked(self.lock_active_piece())),
            },
        }
    }

    /// Drops the active piece as far as it goes and locks it.
    ///
    /// Awards `rows_travelled * hard_drop_points` before the lock.
    pub fn hard_drop(&mut self) -> Result<LockOutcome, ActionError> {
        self.ensure_running()?;
        let mut steps: usize = 0;
        while self.try_place(self.active.down()).is_ok() {
            steps += 1;
        }
        self.stats.add_drop_bonus(steps.saturating_mul(self.config.scoring.hard_drop_points));
        Ok(self.lock_active_piece())
    }

    /// Turns the active piece clockwise in place. No wall kicks are attempted.
    pub fn rotate(&mut self) -> Result<(), ActionError> {
        self.ensure_running()?;
        self.try_place(self.active.rotated_right())
    }

    /// Dispatches one event to the matching operation.
    ///
    /// Returns the lock outcome when the event ended with the active piece
    /// locked.
    pub fn handle_event(&mut self, event: GameEvent) -> Result<Option<LockOutcome>, ActionError> {
        let locked = |step: Step| match step {
            Step::Moved => None,
            Step::Locked(outcome) => Some(outcome),
        };
        match event {
            GameEvent::Tick => self.tick().map(locked),
            GameEvent::Input(Command::MoveLeft) => {
                self.move_horizontal(Direction::Left).map(|()| None)
            }
            GameEvent::Input(Command::MoveRight) => {
                self.move_horizontal(Direction::Right).map(|()| None)
            }
            GameEvent::Input(Command::SoftDrop) => self.soft_drop().map(locked),
            GameEvent::Input(Command::Rotate) => self.rotate().map(|()| None),
            GameEvent::Input(Command::HardDrop) => self.hard_drop().map(Some),
        }
    }

    /// Starts over: empty board, zero score, fresh next and active pieces.
    pub fn reset(&mut self) {
        self.board.clear();
        self.stats = GameStats::new();
        self.status = GameStatus::Running;
        self.next = self.generator.draw();
        self.spawn_next();
    }

    /// Locks the active piece, clears full rows and spawns the next piece.
    fn lock_active_piece(&mut self) -> LockOutcome {
        self.board.commit(self.active.cells(), self.active.color());
        let cleared_lines = self.board.clear_full_rows();
        let line_points = cleared_lines.saturating_mul(self.config.scoring.points_per_line);
        self.stats.complete_piece_lock(cleared_lines, line_points);
        self.spawn_next();
        LockOutcome {
            cleared_lines,
            line_points,
            game_over: self.status.is_game_over(),
        }
    }

    /// Promotes the next piece to active and draws a new next piece.
    fn spawn_next(&mut self) {
        let draw = self.next;
        self.next = self.generator.draw();
        self.active = Piece::spawn(draw.kind, draw.color, self.board.width());
        self.check_spawn();
    }

    fn check_spawn(&mut self) {
        if self.board.is_colliding(self.active) {
            self.status = GameStatus::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::{
        BlockColor, ColorMode, PieceKind, PiecePosition,
        engine::game_config::{GravityCurve, ScoringRules},
    };

    use super::*;

    const SEED: PieceSeed = PieceSeed::from_u128(0x5eed);

    fn new_game() -> Game {
        Game::with_seed(GameConfig::default(), SEED).unwrap()
    }

    fn game_with(config: GameConfig) -> Game {
        Game::with_seed(config, SEED).unwrap()
    }

    /// Replaces the board and active piece, leaving everything else as is.
    fn arrange(game: &mut Game, board: Board, active: Piece) {
        game.board = board;
        game.active = active;
    }

    fn piece_at(kind: PieceKind, row: i32, col: i32) -> Piece {
        Piece::new(kind, kind.default_color(), PiecePosition::new(row, col))
    }

    fn cells(piece: Piece) -> BTreeSet<(i32, i32)> {
        piece.cells().collect()
    }

    #[test]
    fn test_new_game_is_running_with_spawned_piece() {
        let game = new_game();
        assert!(game.status().is_running());
        assert_eq!(game.score(), 0);
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.active_piece().position(), PiecePosition::new(0, 3));
        assert_eq!(game.active_piece().rotation().index(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig {
            board_height: 2,
            ..GameConfig::default()
        };
        assert!(matches!(
            Game::new(config),
            Err(ConfigError::BoardHeight { height: 2 })
        ));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = new_game();
        let mut b = new_game();
        for _ in 0..20 {
            assert_eq!(a.active_piece(), b.active_piece());
            assert_eq!(a.next_piece(), b.next_piece());
            let _ = a.hard_drop();
            let _ = b.hard_drop();
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_tick_moves_piece_down() {
        let mut game = new_game();
        let before = game.active_piece();
        assert_eq!(game.tick(), Ok(Step::Moved));
        assert_eq!(game.active_piece(), before.down());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_tick_locks_piece_at_floor() {
        let mut game = new_game();
        arrange(&mut game, Board::new(10, 20), piece_at(PieceKind::O, 18, 0));
        let next = game.next_piece();

        let step = game.tick().unwrap();
        assert_eq!(
            step,
            Step::Locked(LockOutcome {
                cleared_lines: 0,
                line_points: 0,
                game_over: false,
            })
        );
        // O piece across the bottom two rows in columns 0-1: no full row.
        assert!(game.board().find_full_rows().is_empty());
        assert_eq!(game.board().occupied_count(), 4);
        for (row, col) in [(18, 0), (18, 1), (19, 0), (19, 1)] {
            assert_eq!(game.board().cell(row, col), Some(Some(BlockColor::Yellow)));
        }
        assert_eq!(game.score(), 0);
        assert_eq!(game.active_piece().kind(), next.kind);
        assert_eq!(game.active_piece().position(), PiecePosition::new(0, 3));
        assert_eq!(game.stats().completed_pieces(), 1);
    }

    #[test]
    fn test_locking_i_piece_completes_bottom_row() {
        let mut game = new_game();
        let board = Board::from_ascii(
            10,
            20,
            "
            .T........
            JJJJJJJJJ.
            ",
        );
        let previous_row_18: Vec<_> = board.rows().nth(18).unwrap().to_vec();
        // Vertical I piece in column 9, resting on the floor.
        let i_piece = piece_at(PieceKind::I, 16, 9).rotated_right();
        assert_eq!(
            cells(i_piece),
            BTreeSet::from([(16, 9), (17, 9), (18, 9), (19, 9)])
        );
        arrange(&mut game, board, i_piece);

        let Step::Locked(outcome) = game.tick().unwrap() else {
            panic!("piece on the floor should lock");
        };
        assert_eq!(outcome.cleared_lines, 1);
        assert_eq!(outcome.line_points, 100);
        assert_eq!(game.score(), 100);

        let mut expected_row_19 = previous_row_18;
        expected_row_19[9] = Some(BlockColor::Cyan);
        assert_eq!(game.board().rows().nth(19).unwrap(), &expected_row_19[..]);
        assert_eq!(game.board().occupied_count(), 4);
    }

    #[test]
    fn test_horizontal_i_piece_clears_bottom_row() {
        let mut game = new_game();
        let board = Board::from_ascii(
            10,
            20,
            "
            Z.........
            LLLLLL....
            ",
        );
        arrange(&mut game, board, piece_at(PieceKind::I, 19, 6));

        let outcome = game.hard_drop().unwrap();
        assert_eq!(outcome.cleared_lines, 1);
        assert_eq!(game.score(), 100);
        assert_eq!(game.board().cell(19, 0), Some(Some(BlockColor::Green)));
        assert_eq!(game.board().occupied_count(), 1);
    }

    #[test]
    fn test_multiple_lines_score_per_line() {
        let mut game = new_game();
        let board = Board::from_ascii(
            10,
            20,
            "
            SSSSSSSSS.
            SSSSSSSSS.
            SSSSSSSSS.
            SSSSSSSSS.
            ",
        );
        let i_piece = piece_at(PieceKind::I, 16, 9).rotated_right();
        arrange(&mut game, board, i_piece);

        let outcome = game.hard_drop().unwrap();
        assert_eq!(outcome.cleared_lines, 4);
        assert_eq!(outcome.line_points, 400);
        assert_eq!(game.score(), 400);
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.stats().line_cleared_counter()[4], 1);
    }

    #[test]
    fn test_move_horizontal_within_bounds() {
        let mut game = new_game();
        let start = game.active_piece();
        assert_eq!(game.move_horizontal(Direction::Left), Ok(()));
        assert_eq!(game.active_piece(), start.left());
        assert_eq!(game.move_horizontal(Direction::Right), Ok(()));
        assert_eq!(game.active_piece(), start);
    }

    #[test]
    fn test_move_horizontal_rejected_at_wall() {
        let mut game = new_game();
        arrange(&mut game, Board::new(10, 20), piece_at(PieceKind::O, 5, 0));
        let before = game.active_piece();
        assert_eq!(
            game.move_horizontal(Direction::Left),
            Err(ActionError::Blocked)
        );
        assert_eq!(game.active_piece(), before);

        arrange(&mut game, Board::new(10, 20), piece_at(PieceKind::O, 5, 8));
        assert_eq!(
            game.move_horizontal(Direction::Right),
            Err(ActionError::Blocked)
        );
        assert_eq!(game.active_piece().position(), PiecePosition::new(5, 8));
    }

    #[test]
    fn test_move_horizontal_rejected_by_blocks() {
        let mut game = new_game();
        let board = Board::from_ascii(
            10,
            20,
            "
            ...T......
            ...T......
            ",
        );
        arrange(&mut game, board, piece_at(PieceKind::O, 18, 1));
        assert_eq!(
            game.move_horizontal(Direction::Right),
            Err(ActionError::Blocked)
        );
        assert_eq!(game.active_piece(), piece_at(PieceKind::O, 18, 1));
    }

    #[test]
    fn test_moves_never_leave_the_board() {
        let mut game = new_game();
        for direction in [Direction::Left, Direction::Right] {
            for _ in 0..15 {
                let _ = game.move_horizontal(direction);
                assert!(
                    game.active_piece()
                        .cells()
                        .all(|(_, col)| (0..10).contains(&col))
                );
            }
        }
    }

    #[test]
    fn test_rotate_applies_next_table_state() {
        let mut game = new_game();
        arrange(&mut game, Board::new(10, 20), piece_at(PieceKind::T, 5, 4));
        assert_eq!(game.rotate(), Ok(()));
        assert_eq!(game.active_piece().rotation().index(), 1);
        assert_eq!(game.active_piece().position(), PiecePosition::new(5, 4));

        for _ in 0..3 {
            game.rotate().unwrap();
        }
        assert_eq!(game.active_piece(), piece_at(PieceKind::T, 5, 4));
    }

    #[test]
    fn test_rotate_rejected_without_wall_kick() {
        let mut game = new_game();
        // Vertical I against the right wall: turning back to horizontal would
        // stick three cells out of the board.
        let vertical = piece_at(PieceKind::I, 5, 9).rotated_right();
        arrange(&mut game, Board::new(10, 20), vertical);
        assert_eq!(game.rotate(), Err(ActionError::Blocked));
        assert_eq!(game.active_piece(), vertical);
    }

    #[test]
    fn test_rotate_rejected_by_blocks() {
        let mut game = new_game();
        let board = Board::from_ascii(
            10,
            20,
            "
            J.........
            ..........
            ",
        );
        // Horizontal I on row 17 would rotate into (18, 0).
        let horizontal = piece_at(PieceKind::I, 17, 0);
        arrange(&mut game, board, horizontal);
        assert_eq!(game.rotate(), Err(ActionError::Blocked));
        assert_eq!(game.active_piece(), horizontal);
    }

    #[test]
    fn test_soft_drop_awards_bonus() {
        let mut game = new_game();
        let before = game.active_piece();
        assert_eq!(game.soft_drop(), Ok(Step::Moved));
        assert_eq!(game.active_piece(), before.down());
        assert_eq!(game.score(), 1);
        assert_eq!(game.stats().drop_bonus(), 1);
    }

    #[test]
    fn test_blocked_soft_drop_ignored_by_default() {
        let mut game = new_game();
        arrange(&mut game, Board::new(10, 20), piece_at(PieceKind::O, 18, 4));
        assert_eq!(game.soft_drop(), Err(ActionError::Blocked));
        assert_eq!(game.active_piece(), piece_at(PieceKind::O, 18, 4));
        assert_eq!(game.board().occupied_count(), 0);
    }

    #[test]
    fn test_blocked_soft_drop_can_lock() {
        let mut game = game_with(GameConfig {
            soft_drop_on_blocked: BlockedSoftDrop::Lock,
            ..GameConfig::default()
        });
        arrange(&mut game, Board::new(10, 20), piece_at(PieceKind::O, 18, 4));
        assert!(matches!(game.soft_drop(), Ok(Step::Locked(_))));
        assert_eq!(game.board().occupied_count(), 4);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_hard_drop_scores_steps_and_locks() {
        let mut game = new_game();
        arrange(&mut game, Board::new(10, 20), piece_at(PieceKind::O, 0, 4));

        let outcome = game.hard_drop().unwrap();
        assert_eq!(outcome.cleared_lines, 0);
        assert!(!outcome.game_over);
        // 18 rows travelled at 2 points each.
        assert_eq!(game.score(), 36);
        for (row, col) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
            assert!(game.board().is_occupied(row, col));
        }
        assert_eq!(game.active_piece().position(), PiecePosition::new(0, 3));
    }

    #[test]
    fn test_custom_scoring() {
        let mut game = game_with(GameConfig {
            scoring: ScoringRules {
                points_per_line: 40,
                soft_drop_points: 0,
                hard_drop_points: 0,
            },
            ..GameConfig::default()
        });
        let board = Board::from_ascii(10, 20, "OOOOOOOO..");
        arrange(&mut game, board, piece_at(PieceKind::O, 0, 8));
        let outcome = game.hard_drop().unwrap();
        assert_eq!(outcome.cleared_lines, 1);
        assert_eq!(game.score(), 40);
    }

    #[test]
    fn test_huge_scoring_values_saturate() {
        let mut game = game_with(GameConfig {
            scoring: ScoringRules {
                points_per_line: usize::MAX,
                soft_drop_points: usize::MAX,
                hard_drop_points: usize::MAX,
            },
            ..GameConfig::default()
        });
        assert!(game.config.validate().is_ok());

        let board = Board::from_ascii(10, 20, "OOOOOOOO..");
        arrange(&mut game, board, piece_at(PieceKind::O, 0, 8));
        let outcome = game.hard_drop().unwrap();
        assert_eq!(outcome.cleared_lines, 1);
        assert_eq!(outcome.line_points, usize::MAX);
        assert_eq!(game.score(), usize::MAX);

        assert_eq!(game.soft_drop(), Ok(Step::Moved));
        assert_eq!(game.score(), usize::MAX);
    }

    #[test]
    fn test_ghost_piece_lands_on_stack() {
        let mut game = new_game();
        let board = Board::from_ascii(
            10,
            20,
            "
            ....I.....
            ....I.....
            ",
        );
        arrange(&mut game, board, piece_at(PieceKind::O, 0, 4));
        assert_eq!(game.ghost_piece(), piece_at(PieceKind::O, 16, 4));
        // The ghost is a projection only.
        assert_eq!(game.active_piece(), piece_at(PieceKind::O, 0, 4));
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut game = new_game();
        // Columns 3..=6 of the top two rows are where every piece spawns.
        let mut board = Board::new(10, 20);
        board.commit(
            (0..2).flat_map(|row| (3..7).map(move |col| (row, col))),
            BlockColor::Red,
        );
        arrange(&mut game, board, piece_at(PieceKind::O, 18, 0));

        let Step::Locked(outcome) = game.tick().unwrap() else {
            panic!("piece on the floor should lock");
        };
        assert!(outcome.game_over);
        assert!(game.status().is_game_over());

        // The blocked piece stays where it spawned.
        let spawned = game.active_piece();
        assert_eq!(spawned.position(), PiecePosition::new(0, 3));
        assert!(game.board().is_colliding(spawned));
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let mut game = new_game();
        game.status = GameStatus::GameOver;
        let piece = game.active_piece();
        let board = game.board().clone();

        assert_eq!(game.tick(), Err(ActionError::GameOver));
        assert_eq!(
            game.move_horizontal(Direction::Left),
            Err(ActionError::GameOver)
        );
        assert_eq!(game.soft_drop(), Err(ActionError::GameOver));
        assert_eq!(game.hard_drop(), Err(ActionError::GameOver));
        assert_eq!(game.rotate(), Err(ActionError::GameOver));
        assert_eq!(
            game.handle_event(GameEvent::Input(Command::Rotate)),
            Err(ActionError::GameOver)
        );

        assert_eq!(game.active_piece(), piece);
        assert_eq!(game.board(), &board);
        assert!(game.status().is_game_over());
    }

    #[test]
    fn test_stacking_until_game_over() {
        let mut game = new_game();
        let mut locks = 0;
        while game.status().is_running() {
            let outcome = game.hard_drop().unwrap();
            locks += 1;
            assert!(locks < 200, "game should top out quickly without moves");
            if outcome.game_over {
                break;
            }
        }
        assert!(game.status().is_game_over());
        assert_eq!(game.stats().completed_pieces(), locks);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut game = new_game();
        game.status = GameStatus::GameOver;
        game.board.commit([(19, 0), (19, 1)], BlockColor::Blue);
        game.stats.complete_piece_lock(1, 100);

        game.reset();
        assert!(game.status().is_running());
        assert_eq!(game.score(), 0);
        assert_eq!(game.stats(), &GameStats::new());
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.active_piece().position(), PiecePosition::new(0, 3));
        assert_eq!(game.tick(), Ok(Step::Moved));
    }

    #[test]
    fn test_handle_event_dispatch() {
        let mut game = new_game();
        let start = game.active_piece();

        assert_eq!(game.handle_event(GameEvent::Tick), Ok(None));
        assert_eq!(game.active_piece(), start.down());

        assert_eq!(
            game.handle_event(GameEvent::Input(Command::MoveRight)),
            Ok(None)
        );
        assert_eq!(game.active_piece(), start.down().right());

        assert_eq!(
            game.handle_event(GameEvent::Input(Command::SoftDrop)),
            Ok(None)
        );
        assert_eq!(game.active_piece().position().row(), 2);

        let locked = game
            .handle_event(GameEvent::Input(Command::HardDrop))
            .unwrap();
        assert!(locked.is_some());
        assert_eq!(game.stats().completed_pieces(), 1);
    }

    #[test]
    fn test_random_color_mode_colors_locked_cells() {
        let mut game = game_with(GameConfig {
            color_mode: ColorMode::Random,
            ..GameConfig::default()
        });
        let color = game.active_piece().color();
        game.hard_drop().unwrap();
        let colors: BTreeSet<_> = game
            .board()
            .rows()
            .flatten()
            .flatten()
            .map(|c| *c as u8)
            .collect();
        assert_eq!(colors, BTreeSet::from([color as u8]));
    }

    #[test]
    fn test_gravity_interval_follows_score() {
        let mut game = new_game();
        assert_eq!(game.gravity_interval(), Duration::from_millis(500));
        game.stats.complete_piece_lock(10, 1000);
        assert_eq!(game.gravity_interval(), Duration::from_millis(300));

        let fixed = game_with(GameConfig {
            gravity: GravityCurve {
                speed_scaling: false,
                ..GravityCurve::default()
            },
            ..GameConfig::default()
        });
        assert_eq!(fixed.gravity_interval(), Duration::from_millis(500));
    }
}
