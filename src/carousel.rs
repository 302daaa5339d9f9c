// SPDX-License-Identifier: MPL-2.0
//! Circular index navigation over an owned sequence of items.
//!
//! A [`Carousel`] owns both the sequence and the current position, so every
//! game card and the featured lane keeps its own independent navigation state.
//! Moving past either end wraps around instead of clamping.

use crate::error::NavigationError;

/// Navigation requests a presentation layer binds its controls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Previous-arrow click.
    Previous,
    /// Next-arrow click.
    Next,
    /// Dot click targeting a specific position.
    GoTo(usize),
}

/// One navigation dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Navigation state information for UI rendering.
///
/// A read-only snapshot so the view does not need access to the items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Current position (0-indexed), `None` when the sequence is empty.
    pub current_index: Option<usize>,
    /// Total number of items in the sequence.
    pub total_count: usize,
    /// Whether the current item is the first one.
    pub at_first: bool,
    /// Whether the current item is the last one.
    pub at_last: bool,
    /// Whether prev/next buttons and dots should be rendered.
    pub shows_controls: bool,
}

/// An ordered sequence of items with a wrapping cursor.
///
/// Invariant: `current_index < items.len()` whenever the sequence is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    current_index: usize,
}

impl<T> Carousel<T> {
    /// Creates a carousel positioned on the first item.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            current_index: 0,
        }
    }

    /// Creates a carousel with no items.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Swaps in a rebuilt sequence. The cursor restarts at the first item.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_index = 0;
    }

    /// Moves to the next item, wrapping to the first one after the last.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::EmptySequence`] if there are no items.
    pub fn advance(&mut self) -> Result<usize, NavigationError> {
        let len = self.non_empty_len()?;
        self.current_index = (self.current_index + 1) % len;
        tracing::trace!(index = self.current_index, len, "carousel advanced");
        Ok(self.current_index)
    }

    /// Moves to the previous item, wrapping to the last one before the first.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::EmptySequence`] if there are no items.
    pub fn retreat(&mut self) -> Result<usize, NavigationError> {
        let len = self.non_empty_len()?;
        self.current_index = (self.current_index + len - 1) % len;
        tracing::trace!(index = self.current_index, len, "carousel retreated");
        Ok(self.current_index)
    }

    /// Jumps directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::OutOfRange`] if `index` is not a valid
    /// position. The cursor is left untouched in that case.
    pub fn go_to(&mut self, index: usize) -> Result<usize, NavigationError> {
        let len = self.items.len();
        if index >= len {
            return Err(NavigationError::OutOfRange { index, len });
        }
        self.current_index = index;
        tracing::trace!(index, len, "carousel jumped");
        Ok(index)
    }

    /// Applies a navigation message and returns the resulting index.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub fn handle(&mut self, message: Message) -> Result<usize, NavigationError> {
        match message {
            Message::Previous => self.retreat(),
            Message::Next => self.advance(),
            Message::GoTo(index) => self.go_to(index),
        }
    }

    /// Returns the current item, or `None` for an empty sequence.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current_index)
    }

    /// Returns the current item.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::EmptySequence`] if there are no items.
    pub fn try_current(&self) -> Result<&T, NavigationError> {
        self.current().ok_or(NavigationError::EmptySequence)
    }

    /// Returns the current position, if any.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.current_index)
        }
    }

    /// Returns the next item WITHOUT moving the cursor.
    #[must_use]
    pub fn peek_next(&self) -> Option<&T> {
        self.peek_nth_next(0)
    }

    /// Returns the previous item WITHOUT moving the cursor.
    #[must_use]
    pub fn peek_previous(&self) -> Option<&T> {
        self.peek_nth_previous(0)
    }

    /// Returns the n-th next item from the cursor, wrapping around.
    /// `skip_count = 0` returns the immediate next item.
    #[must_use]
    pub fn peek_nth_next(&self, skip_count: usize) -> Option<&T> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let offset = (skip_count % len) + 1;
        self.items.get((self.current_index + offset) % len)
    }

    /// Returns the n-th previous item from the cursor, wrapping around.
    /// `skip_count = 0` returns the immediate previous item.
    #[must_use]
    pub fn peek_nth_previous(&self, skip_count: usize) -> Option<&T> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let offset = (skip_count % len + 1) % len;
        self.items.get((self.current_index + len - offset) % len)
    }

    #[must_use]
    pub fn is_at_first(&self) -> bool {
        matches!(self.current_index(), Some(0))
    }

    #[must_use]
    pub fn is_at_last(&self) -> bool {
        matches!(self.current_index(), Some(idx) if idx + 1 == self.items.len())
    }

    /// Whether navigation arrows and dots are worth rendering.
    #[must_use]
    pub fn shows_controls(&self) -> bool {
        self.items.len() > 1
    }

    /// Returns one dot per item, marking the current one as active.
    pub fn dots(&self) -> impl Iterator<Item = Dot> + '_ {
        let current = self.current_index();
        (0..self.items.len()).map(move |index| Dot {
            index,
            active: current == Some(index),
        })
    }

    /// Returns a 1-based "current / total" counter.
    #[must_use]
    pub fn counter_label(&self) -> Option<String> {
        self.current_index()
            .map(|idx| format!("{} / {}", idx + 1, self.items.len()))
    }

    /// Returns a snapshot of the navigation state for rendering.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            current_index: self.current_index(),
            total_count: self.len(),
            at_first: self.is_at_first(),
            at_last: self.is_at_last(),
            shows_controls: self.shows_controls(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at the specified index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn non_empty_len(&self) -> Result<usize, NavigationError> {
        match self.items.len() {
            0 => Err(NavigationError::EmptySequence),
            len => Ok(len),
        }
    }
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self::empty()
    }
}
