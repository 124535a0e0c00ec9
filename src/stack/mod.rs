pub mod limits;
pub(crate) mod reserve;

use limits::StackLimits;
use reserve::try_reserve_exact;
use tracing::{debug, trace, warn};

use crate::{dbg_line, PushError, StackError};

/// LIFO stack whose buffer grows and shrinks between its initial capacity and
/// a hard ceiling.
///
/// The buffer doubles when a push finds it exhausted, and halves once a pop
/// leaves it at most a quarter full. Every reallocation is fallible: a failed
/// grow rejects the push with [`StackError::OutOfMemory`], a failed shrink
/// keeps the larger buffer and still hands the popped element back.
///
/// Stacks are not `Clone`; moving one moves ownership of every element in it.
#[derive(Debug)]
pub struct ResizableStack<T> {
    elements: Vec<T>,
    capacity: usize,
    limits: StackLimits,
}

impl<T> ResizableStack<T> {
    pub fn new() -> Result<Self, StackError> {
        Self::with_limits(StackLimits::default())
    }

    pub fn with_limits(limits: StackLimits) -> Result<Self, StackError> {
        limits.validate()?;

        let mut elements = Vec::new();
        if try_reserve_exact(&mut elements, limits.initial_capacity).is_err() {
            return Err(StackError::out_of_memory(
                dbg_line!(),
                limits.initial_capacity,
            ));
        }

        Ok(Self {
            elements,
            capacity: limits.initial_capacity,
            limits,
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the stack reached its ceiling. A stack whose buffer is merely
    /// exhausted is not full: the next push grows it.
    pub fn is_full(&self) -> bool {
        self.len() == self.limits.max_capacity
    }

    /// Number of slots in the current buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn limits(&self) -> StackLimits {
        self.limits
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Pushes `item` on top. A rejected item comes back inside the
    /// [`PushError`], and the stack is left as it was.
    pub fn push(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.is_full() {
            debug!(max_capacity = self.limits.max_capacity, "rejected push on full stack");
            return Err(PushError {
                item,
                error: StackError::stack_full(dbg_line!(), self.limits.max_capacity),
            });
        }

        if self.len() == self.capacity {
            if let Err(error) = self.grow() {
                debug!(capacity = self.capacity, "rejected push, buffer could not grow");
                return Err(PushError { item, error });
            }
        }

        self.elements.push(item);
        Ok(())
    }

    /// Removes the top element and hands its ownership to the caller.
    pub fn pop(&mut self) -> Result<T, StackError> {
        let Some(item) = self.elements.pop() else {
            debug!("rejected pop on empty stack");
            return Err(StackError::stack_empty(dbg_line!()));
        };

        if self.len() <= self.capacity / 4 && self.capacity / 2 >= self.limits.initial_capacity {
            self.shrink();
        }

        Ok(item)
    }

    /// Releases every element and then the buffer.
    pub fn destroy(self) {
        drop(self)
    }

    fn grow(&mut self) -> Result<(), StackError> {
        let new_capacity = (self.capacity * 2).min(self.limits.max_capacity);
        let additional = new_capacity - self.len();

        if try_reserve_exact(&mut self.elements, additional).is_err() {
            return Err(StackError::out_of_memory(dbg_line!(), new_capacity));
        }

        trace!(old_capacity = self.capacity, new_capacity, "grew stack buffer");
        self.capacity = new_capacity;
        Ok(())
    }

    // Moves the live elements into a fresh, smaller buffer. On allocation
    // failure the current buffer stays in place untouched.
    fn shrink(&mut self) {
        let new_capacity = (self.capacity / 2).max(self.limits.initial_capacity);

        let mut elements = Vec::new();
        if try_reserve_exact(&mut elements, new_capacity).is_err() {
            warn!(
                capacity = self.capacity,
                new_capacity, "could not shrink stack buffer, keeping the old one"
            );
            return;
        }
        elements.append(&mut self.elements);

        trace!(old_capacity = self.capacity, new_capacity, "shrank stack buffer");
        self.elements = elements;
        self.capacity = new_capacity;
    }
}

impl<T> Drop for ResizableStack<T> {
    fn drop(&mut self) {
        trace!(released = self.elements.len(), "dropping stack");
    }
}
