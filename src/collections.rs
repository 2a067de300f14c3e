//! # Work Lists
//!
//! The FIFO queue and LIFO stack the traversals drive. Both are thin wrappers
//! over the standard containers (`VecDeque` and `Vec`) with amortised `O(1)`
//! push and pop. Removing from or peeking into an empty container is an error
//! ([`EmptyCollection`]) rather than an `Option`, so callers can loop with
//! `while let Ok(..)`.

use std::collections::VecDeque;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyCollection {
    #[error("cannot dequeue from or peek into an empty queue")]
    Queue,
    #[error("cannot pop from or peek into an empty stack")]
    Stack,
}

/// First in, first out.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.items.pop_front().ok_or(EmptyCollection::Queue)
    }

    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.items.front().ok_or(EmptyCollection::Queue)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Last in, first out.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.items.pop().ok_or(EmptyCollection::Stack)
    }

    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.items.last().ok_or(EmptyCollection::Stack)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
