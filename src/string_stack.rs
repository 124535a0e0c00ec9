use tracing::debug;

use crate::{
    dbg_line, stack::reserve::try_to_owned, ResizableStack, StackError, StackLimits,
};

/// Stack of owned strings.
///
/// Every push copies the given `&str` into a `String` the stack owns, so
/// nothing the caller does to the original afterwards is visible through the
/// stack. Strings whose byte length reaches `max_element_byte_size` are
/// rejected.
#[derive(Debug)]
pub struct StringStack {
    inner: ResizableStack<String>,
}

impl StringStack {
    pub fn new() -> Result<Self, StackError> {
        Self::with_limits(StackLimits::default())
    }

    pub fn with_limits(limits: StackLimits) -> Result<Self, StackError> {
        Ok(Self {
            inner: ResizableStack::with_limits(limits)?,
        })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn limits(&self) -> StackLimits {
        self.inner.limits()
    }

    pub fn peek(&self) -> Option<&str> {
        self.inner.peek().map(String::as_str)
    }

    pub fn push(&mut self, item: &str) -> Result<(), StackError> {
        let limits = self.inner.limits();
        if self.is_full() {
            debug!(max_capacity = limits.max_capacity, "rejected push on full stack");
            return Err(StackError::stack_full(dbg_line!(), limits.max_capacity));
        }

        if item.len() >= limits.max_element_byte_size {
            debug!(len = item.len(), "rejected push of oversized element");
            return Err(StackError::element_too_large(
                dbg_line!(),
                item.len(),
                limits.max_element_byte_size,
            ));
        }

        let Ok(owned) = try_to_owned(item) else {
            return Err(StackError::out_of_memory(dbg_line!(), item.len()));
        };
        self.inner.push(owned).map_err(StackError::from)
    }

    pub fn pop(&mut self) -> Result<String, StackError> {
        self.inner.pop()
    }

    pub fn destroy(self) {
        self.inner.destroy()
    }
}
