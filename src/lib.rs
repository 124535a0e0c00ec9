//! A generic stack with a bounded ceiling that grows and shrinks its buffer
//! as elements come and go.
//!
//! [`ResizableStack`] doubles its buffer when a push finds it exhausted and
//! halves it once a pop leaves it at most a quarter full. [`StringStack`] is
//! the string variant: it copies every pushed `&str` into storage it owns and
//! rejects strings whose byte length reaches the element limit.

pub mod errors;
pub mod stack;
pub mod string_stack;

pub use errors::{PushError, StackError};
pub use stack::{limits::StackLimits, ResizableStack};
pub use string_stack::StringStack;

/// Buffer size at creation, and the floor the buffer never shrinks below.
pub const INITIAL_CAPACITY: usize = 16;

/// Absolute number of elements a stack will ever hold.
pub const MAX_CAPACITY: usize = 32768;

/// Strings of this many bytes or more are rejected by [`StringStack::push`].
pub const MAX_ELEMENT_BYTE_SIZE: usize = 256;

#[macro_export]
macro_rules! dbg_line {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
