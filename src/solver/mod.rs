//! Tower of Hanoi move generation.
//!
//! This module contains the puzzle domain model and the move generator:
//! a pure function that maps a disk count to the ordered sequence of moves
//! transferring the whole stack from one peg to another.

use std::fmt;

// =============================================================================
// Pegs
// =============================================================================

/// One of the three peg positions on the board.
///
/// Pegs are identified by position, not by role: whether a peg acts as the
/// source, the auxiliary, or the destination changes between recursive
/// subproblems, while its position (and wire index) stays fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    /// Leftmost peg, wire index 0. The default solve starts here.
    Left,
    /// Middle peg, wire index 1. The default solve uses it as the spare.
    Middle,
    /// Rightmost peg, wire index 2. The default solve ends here.
    Right,
}

impl Peg {
    /// Returns the wire index of this peg (0, 1, or 2).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }

    /// Looks up a peg by its wire index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the position name as a string slice.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

// =============================================================================
// Moves
// =============================================================================

/// A single relocation of the topmost disk of one peg to another peg.
///
/// `disk` is the stable 1-based size rank of the moved disk (1 is the
/// smallest). In the recursive decomposition the disk moved at subproblem
/// size `n` is always the `n`-th smallest, so this labeling reproduces the
/// subproblem-count labeling exactly while naming a concrete disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Size rank of the moved disk, 1-based.
    pub disk: u8,
    /// Peg the disk is lifted from.
    pub from: Peg,
    /// Peg the disk is placed on.
    pub to: Peg,
}

impl Move {
    /// Creates a new move.
    #[must_use]
    pub const fn new(disk: u8, from: Peg, to: Peg) -> Self {
        Self { disk, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "disk {} from {} to {}",
            self.disk, self.from, self.to
        )
    }
}

// =============================================================================
// Move Generation
// =============================================================================

/// Returns the number of moves a full solve produces, `2^disks - 1`,
/// or `None` when that count does not fit in `usize`.
#[must_use]
pub fn move_count(disks: u8) -> Option<usize> {
    1_usize
        .checked_shl(u32::from(disks))
        .map(|total| total - 1)
}

/// Solves the puzzle in the default orientation: all disks move from the
/// left peg to the right peg, using the middle peg as the spare.
///
/// See [`solve_between`] for the general form and its guarantees.
#[must_use]
pub fn solve(disks: u8) -> Vec<Move> {
    solve_between(disks, Peg::Left, Peg::Middle, Peg::Right)
}

/// Produces the ordered move sequence transferring `disks` disks from
/// `source` to `destination` using `auxiliary` as the spare peg.
///
/// The sequence has exactly `2^disks - 1` moves, in the order they must be
/// physically performed, and never rests a larger disk on a smaller one.
/// Zero disks yield an empty sequence, consistent with `2^0 - 1 = 0`.
///
/// Each call allocates a fresh sequence; no state is shared between calls,
/// so concurrent callers are independent. Recursion depth equals `disks`,
/// which the `u8` argument bounds at 255; memory for the result, not stack
/// depth, is the practical limit on the disk count.
#[must_use]
pub fn solve_between(disks: u8, source: Peg, auxiliary: Peg, destination: Peg) -> Vec<Move> {
    let mut moves = Vec::with_capacity(move_count(disks).unwrap_or(0));
    push_moves(disks, source, auxiliary, destination, &mut moves);
    moves
}

/// Standard recursive decomposition, appending into the caller's buffer:
/// relocate `disks - 1` onto the spare, move the largest disk, then relocate
/// `disks - 1` from the spare onto it.
fn push_moves(disks: u8, source: Peg, auxiliary: Peg, destination: Peg, moves: &mut Vec<Move>) {
    if disks == 0 {
        return;
    }

    push_moves(disks - 1, source, destination, auxiliary, moves);
    moves.push(Move::new(disks, source, destination));
    push_moves(disks - 1, auxiliary, source, destination, moves);
}

// =============================================================================
// Tests
// =============================================================================
