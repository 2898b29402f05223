//! Backtracking parser combinators over any indexable token sequence.
//!
//! A [`Parser`] either matches at an index, yielding an [`Output`] with the
//! first unconsumed index, or fails with [`NoMatch`]. Failure is an ordinary
//! value, so alternation and repetition simply branch on it.

mod comb;
mod output;
mod parser;
mod prim;

pub use comb::{
    alt, alt_list, diff, followed_by, guard, lazy, not_followed_by, plus, seq, seq_list, star,
    trace, transform,
};
pub use output::{Match, NoMatch, Output, PResult};
pub use parser::Parser;
pub use prim::{
    any, char_range, char_range_ci, empty, end_of_input, epsilon, exact, exact_ci, one_of,
    satisfy, word,
};
