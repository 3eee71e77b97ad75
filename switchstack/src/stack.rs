use std::collections::VecDeque;
use std::fmt;

use log::{debug, trace};

use crate::mode::Mode;

/// An ordered buffer whose removal end is chosen by its [`Mode`].
///
/// Items always enter at the tail. In [`Mode::Fifo`] `peek`/`pop` read the
/// front, in [`Mode::Lifo`] they read the back. None of the operations fail:
/// invalid input is dropped and reads on an empty stack return `None`.
///
/// The stack owns its storage. [`Stack::to_vec`] and [`Stack::replace_all`]
/// clone instead of sharing it with the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stack<T> {
    mode: Mode,
    elements: VecDeque<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            mode: Mode::Fifo,
            elements: VecDeque::new(),
        }
    }

    pub fn with_mode(mode: Mode) -> Self {
        Stack {
            mode,
            elements: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the access mode.
    ///
    /// Accepts a [`Mode`], a numeric code (`0u8` FIFO, `1u8` LIFO) or a name such
    /// as `"lifo"`. A request that does not convert to a [`Mode`] is ignored and
    /// the current mode stays in place.
    pub fn set_mode<M>(&mut self, requested: M)
    where
        M: TryInto<Mode>,
        M::Error: fmt::Display,
    {
        match requested.try_into() {
            Ok(mode) => self.mode = mode,
            Err(e) => debug!("ignoring mode request, keeping {}: {}", self.mode, e),
        }
    }

    /// Append an item at the tail. `None` is dropped.
    pub fn push(&mut self, item: impl Into<Option<T>>) {
        match item.into() {
            Some(item) => self.elements.push_back(item),
            None => trace!("dropping empty push"),
        }
    }

    /// The item the next [`Stack::pop`] would return.
    pub fn peek(&self) -> Option<&T> {
        match self.mode {
            Mode::Fifo => self.elements.front(),
            Mode::Lifo => self.elements.back(),
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        match self.mode {
            Mode::Fifo => self.elements.pop_front(),
            Mode::Lifo => self.elements.pop_back(),
        }
    }

    /// Reverse the stored order in place.
    ///
    /// The mode is untouched and later pushes still go to the (new) tail.
    pub fn reverse(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        self.elements.make_contiguous().reverse();
    }

    /// Drop every item. The mode is kept.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T: Clone> Stack<T> {
    /// Replace the contents with a copy of `items`.
    ///
    /// An empty slice leaves the current contents alone, unlike [`Stack::clear`].
    pub fn replace_all(&mut self, items: &[T]) {
        if items.is_empty() {
            debug!("ignoring empty replace, keeping {} items", self.elements.len());
            return;
        }
        self.elements = items.iter().cloned().collect();
    }

    /// Copy of the contents, front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.iter().cloned().collect()
    }

    /// Push each item in order.
    pub fn extend(&mut self, items: &[T]) {
        for item in items {
            self.push(item.clone());
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Stack {
            mode: Mode::Fifo,
            elements: VecDeque::from(items),
        }
    }
}
