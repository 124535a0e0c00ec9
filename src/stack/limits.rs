use crate::{dbg_line, StackError, INITIAL_CAPACITY, MAX_CAPACITY, MAX_ELEMENT_BYTE_SIZE};

/// Capacity bounds a stack is created with.
///
/// [`StackLimits::default`] gives the crate constants. Smaller limits are
/// mostly useful to exercise the ceiling without pushing tens of thousands of
/// elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackLimits {
    pub initial_capacity: usize,
    pub max_capacity: usize,
    pub max_element_byte_size: usize,
}

impl Default for StackLimits {
    fn default() -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY,
            max_capacity: MAX_CAPACITY,
            max_element_byte_size: MAX_ELEMENT_BYTE_SIZE,
        }
    }
}

impl StackLimits {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    pub fn with_max_element_byte_size(mut self, max_element_byte_size: usize) -> Self {
        self.max_element_byte_size = max_element_byte_size;
        self
    }

    pub fn validate(&self) -> Result<(), StackError> {
        if self.initial_capacity == 0 {
            return Err(StackError::invalid_limits(
                dbg_line!(),
                "Initial capacity must be at least 1",
            ));
        }
        if self.initial_capacity > self.max_capacity {
            return Err(StackError::invalid_limits(
                dbg_line!(),
                "Initial capacity must not exceed the maximum capacity",
            ));
        }
        if self.max_element_byte_size == 0 {
            return Err(StackError::invalid_limits(
                dbg_line!(),
                "Maximum element byte size must be at least 1",
            ));
        }
        Ok(())
    }
}
