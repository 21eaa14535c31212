//! Print the last N lines of a file or standard input.
//!
//! The stream is read once, front to back, while only the most recent N
//! completed lines are retained: a fixed-capacity ring of owned lines plus
//! one bounded accumulator for the line currently being assembled. Memory
//! stays proportional to N and the maximum line length no matter how large
//! the input is.

pub mod args;
pub mod error;
pub mod ring;

pub use args::{Config, Source};
pub use error::TailError;
pub use ring::{LineTracker, RingBuffer, MAX_LINE_LEN};
