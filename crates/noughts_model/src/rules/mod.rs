//! Outcome detection for noughts-and-crosses.
//!
//! These are pure functions that classify a board as won, stalemated or
//! still in progress. They are separated from board storage so the
//! board's status refresh and the hint engine can share them.

pub mod stalemate;
pub mod win;

pub use stalemate::{is_full, is_stalemate};
pub use win::check_winner;
