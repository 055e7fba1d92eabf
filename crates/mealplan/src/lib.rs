//! Rotating meal plan scheduler.
//!
//! A meal plan is a fixed number of weeks that repeats indefinitely. Entries
//! are pinned to a `(week, day)` position of that cycle through an encoded
//! date key, and today's real date is mapped onto the cycle by counting whole
//! weeks since the plan started.

mod codec;
mod day_cursor;
mod error;
mod rotation;
mod slot;
mod week;
mod week_cursor;

pub use codec::*;
pub use day_cursor::*;
pub use error::*;
pub use rotation::*;
pub use slot::*;
pub use week::*;
pub use week_cursor::*;
