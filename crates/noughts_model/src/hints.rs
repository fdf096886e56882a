//! Optimal-move hints.
//!
//! A fixed table of rules recommends the best empty position for a
//! player: win, block, fork, block fork, extend, centre, opposite
//! corner, empty corner, middle side. Rules are tried in priority order
//! and the first applicable rule decides; there is no lookahead search.
//! The table is the classical 3x3 strategy, written against the
//! generalized line index so every rule degrades gracefully on larger
//! boards.

use std::cmp::Reverse;

use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::board::Board;
use crate::lines::Line;
use crate::types::Counter;

/// Heuristic rules, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
enum Rule {
    Win,
    Block,
    Fork,
    BlockFork,
    Extend,
    Centre,
    OppositeCorner,
    EmptyCorner,
    MiddleSide,
}

/// Recommends the best empty position for `player`.
///
/// Read-only with respect to the board. Returns `None` when no empty
/// cell remains, or when `player` is not a playable counter; both are
/// caller errors rather than normal outcomes. On a 3x3 board the
/// centre, corner and side rules cover every cell, so some rule always
/// applies while the board has room; on larger boards `None` can also
/// occur with empty cells left, once every landmark is taken and no
/// line is open.
#[instrument(skip(board))]
pub fn optimal_move(board: &Board, player: Counter) -> Option<usize> {
    if !player.is_player() {
        debug!(?player, "hint requested for a non-player counter");
        return None;
    }
    let advisor = Advisor {
        board,
        player,
        opponent: player.opponent(),
    };
    for rule in Rule::iter() {
        if let Some(pos) = advisor.apply(rule) {
            debug!(?rule, pos, "hint");
            return Some(pos);
        }
    }
    None
}

impl Board {
    /// Convenience alias for [`optimal_move`].
    pub fn optimal_move(&self, player: Counter) -> Option<usize> {
        optimal_move(self, player)
    }
}

/// Per-line tally of one player's counters, seen from that player's side.
struct Tally {
    mine: usize,
    theirs: usize,
    empties: usize,
}

fn tally(cells: &[Counter], size: usize, line: Line, counter: Counter) -> Tally {
    let mut t = Tally {
        mine: 0,
        theirs: 0,
        empties: 0,
    };
    for pos in line.positions(size) {
        match cells[pos] {
            Counter::Empty => t.empties += 1,
            c if c == counter => t.mine += 1,
            _ => t.theirs += 1,
        }
    }
    t
}

/// One hint computation: the board under inspection plus the two sides.
struct Advisor<'a> {
    board: &'a Board,
    player: Counter,
    opponent: Counter,
}

impl Advisor<'_> {
    fn apply(&self, rule: Rule) -> Option<usize> {
        match rule {
            Rule::Win => self.n_in_line(self.player, self.board.size() - 1),
            Rule::Block => self.n_in_line(self.opponent, self.board.size() - 1),
            Rule::Fork => self.fork_cells(self.player).first().copied(),
            Rule::BlockFork => self.block_fork_cell(),
            Rule::Extend => self.extend_cell(),
            Rule::Centre => self.centre_cell(),
            Rule::OppositeCorner => self.opposite_corner_cell(),
            Rule::EmptyCorner => self.empty_corner_cell(),
            Rule::MiddleSide => self.middle_side_cell(),
        }
    }

    /// Scores every empty cell by the number of `counter`'s pieces
    /// already on opponent-free lines through it.
    ///
    /// Recomputed on every use; the matrix is a ranking aid for the
    /// win, fork and extend rules, never a persistent cache.
    fn score_matrix(&self, counter: Counter) -> Vec<usize> {
        let size = self.board.size();
        let mut scores = vec![0; self.board.positions()];
        for line in Line::all(size) {
            let t = tally(self.board.cells(), size, line, counter);
            if t.theirs == 0 && t.mine > 0 {
                for pos in line.positions(size) {
                    if self.board.is_empty(pos) {
                        scores[pos] += t.mine;
                    }
                }
            }
        }
        scores
    }

    /// The best empty cell of the first line holding exactly `n` of
    /// `counter`'s pieces and otherwise empty cells.
    ///
    /// With `n == size - 1` this is the immediate winning (or blocking)
    /// cell; smaller `n` extends an open line. Candidates within the
    /// line are ranked by score matrix, lowest position on ties.
    fn n_in_line(&self, counter: Counter, n: usize) -> Option<usize> {
        let size = self.board.size();
        let scores = self.score_matrix(counter);
        for line in Line::all(size) {
            let t = tally(self.board.cells(), size, line, counter);
            if t.mine == n && t.theirs == 0 && t.empties == size - n {
                return line
                    .positions(size)
                    .filter(|&pos| self.board.is_empty(pos))
                    .max_by_key(|&pos| (scores[pos], Reverse(pos)));
            }
        }
        None
    }

    /// All empty cells whose occupation by `counter` would create two or
    /// more simultaneous winning threats, in increasing position order.
    fn fork_cells(&self, counter: Counter) -> Vec<usize> {
        let size = self.board.size();
        // Two overlapping threats need at least two opponent-free lines
        // holding size - 2 counters through the candidate cell, so any
        // cell scoring below that cannot fork.
        let floor = 2 * (size - 2);
        let scores = self.score_matrix(counter);
        let mut cells = self.board.cells().to_vec();
        let mut forks = Vec::new();
        for pos in 0..cells.len() {
            if cells[pos] != Counter::Empty || scores[pos] < floor {
                continue;
            }
            cells[pos] = counter;
            let threats = Line::all(size)
                .filter(|&line| {
                    let t = tally(&cells, size, line, counter);
                    t.mine == size - 1 && t.theirs == 0 && t.empties == 1
                })
                .count();
            cells[pos] = Counter::Empty;
            if threats >= 2 {
                forks.push(pos);
            }
        }
        forks
    }

    /// Occupies one of the opponent's fork cells.
    ///
    /// When several exist, prefers the lowest cell that also lies on a
    /// line already holding one of the player's own counters, falling
    /// back to the first found.
    fn block_fork_cell(&self) -> Option<usize> {
        let forks = self.fork_cells(self.opponent);
        forks
            .iter()
            .copied()
            .find(|&pos| self.on_own_line(pos))
            .or_else(|| forks.first().copied())
    }

    /// Whether some line through `pos` already holds a player counter.
    fn on_own_line(&self, pos: usize) -> bool {
        let size = self.board.size();
        Line::all(size)
            .filter(|line| line.contains(size, pos))
            .any(|line| tally(self.board.cells(), size, line, self.player).mine > 0)
    }

    /// Extends the open line with the highest count short of winning.
    fn extend_cell(&self) -> Option<usize> {
        (1..self.board.size() - 1)
            .rev()
            .find_map(|n| self.n_in_line(self.player, n))
    }

    /// The unique middle cell, when the board size defines one.
    fn centre_cell(&self) -> Option<usize> {
        self.board.centre().filter(|&pos| self.board.is_empty(pos))
    }

    /// The empty corner diagonally opposite an opponent-held corner.
    fn opposite_corner_cell(&self) -> Option<usize> {
        self.board.corners().into_iter().find_map(|corner| {
            if self.board.counter_at(corner) == Some(self.opponent) {
                self.board
                    .opposite_corner(corner)
                    .filter(|&opposite| self.board.is_empty(opposite))
            } else {
                None
            }
        })
    }

    /// The first empty corner in scan order.
    fn empty_corner_cell(&self) -> Option<usize> {
        self.board
            .corners()
            .into_iter()
            .find(|&pos| self.board.is_empty(pos))
    }

    /// The first empty edge midpoint in scan order.
    fn middle_side_cell(&self) -> Option<usize> {
        self.board
            .mid_sides()
            .into_iter()
            .find(|&pos| self.board.is_empty(pos))
    }
}
