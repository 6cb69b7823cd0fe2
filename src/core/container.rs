//! LIFO and FIFO containers with fallible access.
//!
//! Both containers share the [`Container`] capability set. Taking an element
//! out of an empty container returns [`EmptyError`] instead of panicking, so
//! callers treat emptiness as ordinary control flow.
//!
//! ```text
//! Stack (bounded at 3)          Queue
//! push(a) push(b) push(c)       push(a) push(b) push(c)
//! [a, b, c]  <- top             front -> [a, b, c]
//! push(d)   evicts a            pop() -> a
//! [b, c, d]  <- top             front -> [b, c]
//! ```

use std::collections::VecDeque;

use crate::error::EmptyError;

/// Capability set shared by [`Stack`] and [`Queue`].
pub trait Container<T> {
    /// Insert an element.
    fn push(&mut self, value: T);

    /// Remove the next element in the container's order.
    fn pop(&mut self) -> Result<T, EmptyError>;

    /// Look at the next element without removing it.
    fn peek(&self) -> Result<&T, EmptyError>;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Drop every element.
    fn clear(&mut self);

    /// Check if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out stack with an optional depth bound.
///
/// Backed by a `VecDeque` so that evicting the oldest element when the bound
/// is reached is O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: VecDeque<T>,
    /// Maximum depth (0 = unbounded)
    capacity: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an unbounded stack.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            capacity: 0,
        }
    }

    /// Create a stack that keeps at most `capacity` elements, discarding the
    /// oldest on overflow. A capacity of 0 means unbounded.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            capacity,
        }
    }

    /// Iterate from bottom (oldest) to top (newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Container<T> for Stack<T> {
    fn push(&mut self, value: T) {
        if self.capacity > 0 && self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(value);
    }

    fn pop(&mut self) -> Result<T, EmptyError> {
        self.items.pop_back().ok_or(EmptyError::Stack)
    }

    fn peek(&self) -> Result<&T, EmptyError> {
        self.items.back().ok_or(EmptyError::Stack)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// First-in-first-out queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Iterate from front (oldest) to back (newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Container<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    fn pop(&mut self) -> Result<T, EmptyError> {
        self.items.pop_front().ok_or(EmptyError::Queue)
    }

    fn peek(&self) -> Result<&T, EmptyError> {
        self.items.front().ok_or(EmptyError::Queue)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut stack: Stack<u8> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(EmptyError::Stack));
        assert_eq!(stack.peek(), Err(EmptyError::Stack));
    }

    #[test]
    fn test_bounded_stack_evicts_oldest() {
        let mut stack = Stack::bounded(3);
        for i in 0..5 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(stack.pop(), Ok(4));
    }

    #[test]
    fn test_zero_capacity_is_unbounded() {
        let mut stack = Stack::bounded(0);
        for i in 0..1000 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 1000);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = Queue::new();
        queue.push("a");
        queue.push("b");
        assert_eq!(queue.peek(), Ok(&"a"));
        assert_eq!(queue.pop(), Ok("a"));
        assert_eq!(queue.pop(), Ok("b"));
        assert_eq!(queue.pop(), Err(EmptyError::Queue));
        assert_eq!(queue.peek(), Err(EmptyError::Queue));
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::new();
        stack.push('x');
        stack.clear();
        assert!(stack.is_empty());

        let mut queue = Queue::new();
        queue.push('y');
        queue.clear();
        assert!(queue.is_empty());
    }
}
