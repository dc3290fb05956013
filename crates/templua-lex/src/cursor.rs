//! Fragment cursor for traversing the pre-split input document.
//!
//! This module provides the `FragmentCursor` struct, a pull-based cursor
//! over the ordered fragment sequence produced by the upstream fragmenter.
//! It supports peeking ahead across fragment boundaries without consuming,
//! and splitting the current fragment in place so a partially consumed
//! fragment can be handed back to an external consumer.

use crate::fragment::Fragment;

/// A cursor over an ordered sequence of fragments.
///
/// The cursor is exclusively owned and mutated by one lexer instance at a
/// time. The lexer tracks its own read offset within the current fragment;
/// the cursor only tracks which fragment is current.
///
/// Zero-length fragments are transparently skipped everywhere a "next
/// fragment" is needed: they act as no-op separators, never as end of
/// stream.
///
/// # Example
///
/// ```
/// use templua_lex::{Fragment, FragmentCursor};
///
/// let mut cursor = FragmentCursor::new(vec![
///     Fragment::text("ab"),
///     Fragment::text(""),
///     Fragment::text("cd"),
/// ]);
///
/// assert_eq!(cursor.current().content, "ab");
/// assert_eq!(cursor.peek_from(0, 2), Some('c'));
/// assert!(cursor.advance());
/// assert_eq!(cursor.current().content, "cd");
/// assert!(!cursor.advance());
/// ```
pub struct FragmentCursor {
    /// The backing fragment sequence, in document order.
    fragments: Vec<Fragment>,

    /// Index of the current fragment.
    index: usize,
}

impl FragmentCursor {
    /// Creates a cursor over the given fragment sequence.
    ///
    /// The first fragment becomes current, even if empty; callers establish
    /// a non-empty position via [`advance`](Self::advance) or the lexer's
    /// resync.
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self {
            fragments,
            index: 0,
        }
    }

    /// Returns true if the fragment sequence is exhausted.
    pub fn is_done(&self) -> bool {
        self.index >= self.fragments.len()
    }

    /// Returns the current fragment.
    ///
    /// Calling this after the sequence is exhausted is a contract violation
    /// and panics.
    pub fn current(&self) -> &Fragment {
        &self.fragments[self.index]
    }

    /// Discards the current fragment and advances to the next non-empty
    /// fragment in sequence order.
    ///
    /// Returns whether such a fragment exists. Once exhausted, further
    /// calls keep returning false.
    ///
    /// # Example
    ///
    /// ```
    /// use templua_lex::{Fragment, FragmentCursor};
    ///
    /// let mut cursor = FragmentCursor::new(vec![
    ///     Fragment::text("a"),
    ///     Fragment::text(""),
    ///     Fragment::text(""),
    ///     Fragment::text("b"),
    /// ]);
    /// assert!(cursor.advance());
    /// assert_eq!(cursor.current().content, "b");
    /// ```
    pub fn advance(&mut self) -> bool {
        while self.index < self.fragments.len() {
            self.index += 1;
            match self.fragments.get(self.index) {
                Some(fragment) if fragment.is_empty() => continue,
                Some(_) => return true,
                None => return false,
            }
        }
        false
    }

    /// Returns the character `offset` positions ahead of the read point
    /// `at` (a byte offset into the current fragment), scanning forward
    /// through subsequent fragments' full content as needed.
    ///
    /// Does not mutate cursor state. `peek_from(at, 0)` is the character at
    /// the read point itself. Returns `None` at end of sequence.
    ///
    /// `at` must lie on a character boundary of the current fragment's
    /// content.
    pub fn peek_from(&self, at: usize, offset: usize) -> Option<char> {
        let current = self.fragments.get(self.index)?;
        let head = current.content[at..].chars();
        let tail = self.fragments[self.index + 1..]
            .iter()
            .flat_map(|fragment| fragment.content.chars());
        head.chain(tail).nth(offset)
    }

    /// Cuts the current fragment's content at byte offset `at`: the suffix
    /// becomes the new current fragment in place, the prefix is discarded
    /// (having already been handled by the caller).
    ///
    /// Used by the lexer to give back the unconsumed tail of a fragment to
    /// the outer protocol when pausing mid-fragment. `split(0)` is a no-op.
    ///
    /// `at` must lie on a character boundary within the current fragment.
    ///
    /// # Example
    ///
    /// ```
    /// use templua_lex::{Fragment, FragmentCursor};
    ///
    /// let mut cursor = FragmentCursor::new(vec![Fragment::text("abcd")]);
    /// cursor.split(2);
    /// assert_eq!(cursor.current().content, "cd");
    /// ```
    pub fn split(&mut self, at: usize) {
        if at == 0 {
            return;
        }
        self.fragments[self.index].content.drain(..at);
    }
}
