/// Largest number of lines one tetromino can complete in a single lock.
pub const MAX_LINES_PER_LOCK: usize = 4;

/// Game statistics tracking score, lines cleared, and piece count.
///
/// - **Score**: line-clear points plus drop bonuses; never decreases
/// - **Completed pieces**: total number of pieces locked
/// - **Line clear distribution**: count of locks clearing 0, 1, 2, 3 or 4 lines
///
/// # Example
///
/// ```
/// use blockfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.add_drop_bonus(6);
/// stats.complete_piece_lock(2, 200);
///
/// assert_eq!(stats.score(), 206);
/// assert_eq!(stats.total_cleared_lines(), 2);
/// assert_eq!(stats.line_cleared_counter()[2], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    drop_bonus: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; MAX_LINES_PER_LOCK + 1],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a new game statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            drop_bonus: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; MAX_LINES_PER_LOCK + 1],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Portion of the score earned by soft and hard drops.
    #[must_use]
    pub const fn drop_bonus(&self) -> usize {
        self.drop_bonus
    }

    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of locks by lines cleared.
    ///
    /// - `[0]`: locks that cleared nothing
    /// - `[1]`..`[4]`: singles, doubles, triples, tetrises
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; MAX_LINES_PER_LOCK + 1] {
        &self.line_cleared_counter
    }

    pub const fn add_drop_bonus(&mut self, points: usize) {
        self.drop_bonus = self.drop_bonus.saturating_add(points);
        self.score = self.score.saturating_add(points);
    }

    /// Updates statistics after a piece locks.
    ///
    /// # Arguments
    ///
    /// * `cleared_lines` - Number of lines the lock completed
    /// * `line_points` - Points awarded for those lines
    pub const fn complete_piece_lock(&mut self, cleared_lines: usize, line_points: usize) {
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
        self.score = self.score.saturating_add(line_points);
    }
}
