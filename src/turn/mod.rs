//! Turn bookkeeping: the active hint and its guesses.

pub mod hint;

pub use hint::{Guess, GuessAllowance, Hint, HintNumber, RequestedNumber, UNLIMITED};
