use miette::{Diagnostic, ErrReport};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    OutOfMemory(OutOfMemory),
    #[error(transparent)]
    #[diagnostic(transparent)]
    StackFull(StackFull),
    #[error(transparent)]
    #[diagnostic(transparent)]
    StackEmpty(StackEmpty),
    #[error(transparent)]
    #[diagnostic(transparent)]
    ElementTooLarge(ElementTooLarge),
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidLimits(InvalidLimits),
}

impl StackError {
    pub fn into_err_report(self) -> ErrReport {
        self.into()
    }

    pub fn out_of_memory(dbg_line: String, requested: usize) -> Self {
        StackError::OutOfMemory(OutOfMemory {
            dbg_line,
            requested,
        })
    }

    pub fn stack_full(dbg_line: String, max_capacity: usize) -> Self {
        StackError::StackFull(StackFull {
            dbg_line,
            max_capacity,
        })
    }

    pub fn stack_empty(dbg_line: String) -> Self {
        StackError::StackEmpty(StackEmpty { dbg_line })
    }

    pub fn element_too_large(dbg_line: String, len: usize, limit: usize) -> Self {
        StackError::ElementTooLarge(ElementTooLarge {
            dbg_line,
            len,
            limit,
        })
    }

    pub fn invalid_limits(dbg_line: String, reason: &'static str) -> Self {
        StackError::InvalidLimits(InvalidLimits { dbg_line, reason })
    }
}

/// A rejected push. The item goes back to the caller untouched, so it can be
/// pushed again once the cause is dealt with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushError<T> {
    pub item: T,
    pub error: StackError,
}

impl<T> PushError<T> {
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> From<PushError<T>> for StackError {
    fn from(rejected: PushError<T>) -> Self {
        rejected.error
    }
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("out-of-memory")]
#[diagnostic(
	code(stack::out_of_memory),
	help("[{}] Could not reserve {} slots", self.dbg_line, self.requested),
)]
pub struct OutOfMemory {
    pub dbg_line: String,
    pub requested: usize,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("stack-full")]
#[diagnostic(
	code(stack::stack_full),
	help("[{}] Stack already holds its maximum of {} elements", self.dbg_line, self.max_capacity),
)]
pub struct StackFull {
    pub dbg_line: String,
    pub max_capacity: usize,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("stack-empty")]
#[diagnostic(
	code(stack::stack_empty),
	help("[{}] Cannot pop from an empty stack", self.dbg_line),
)]
pub struct StackEmpty {
    pub dbg_line: String,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("element-too-large")]
#[diagnostic(
	code(stack::element_too_large),
	help("[{}] Element is {} bytes, must be shorter than {}", self.dbg_line, self.len, self.limit),
)]
pub struct ElementTooLarge {
    pub dbg_line: String,
    pub len: usize,
    pub limit: usize,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("invalid-limits")]
#[diagnostic(
	code(stack::invalid_limits),
	help("[{}] {}", self.dbg_line, self.reason),
)]
pub struct InvalidLimits {
    pub dbg_line: String,
    pub reason: &'static str,
}
