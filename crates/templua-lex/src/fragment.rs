//! Fragment types for the pre-split template document.
//!
//! The upstream template fragmenter splits each embedded script region into
//! an ordered sequence of fragments before lexing starts. A fragment is
//! either a run of literal script text or an opaque piece injected by the
//! templating layer (an interpolation marker, punctuation the fragmenter has
//! already classified, and so on).

/// Synthetic character standing in for one interpolation marker.
///
/// Drawn from Supplementary Private Use Area-B, which lies entirely above
/// the 16-bit range. Source documents are originally encoded in 16-bit
/// units, so no real source character can ever collide with this codepoint.
pub const PLACEHOLDER_CHAR: char = '\u{100000}';

/// Classification of a fragment.
///
/// Only the identifier path of the lexer distinguishes kinds: a run of
/// consecutive [`Text`](FragmentKind::Text) fragments assembles into one
/// identifier, while any character reached through the default dispatch path
/// inside a [`Placeholder`](FragmentKind::Placeholder) fragment is emitted
/// as a single-character token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentKind {
    /// Literal script text the fragmenter has grouped as identifier-eligible.
    Text,

    /// Opaque content: an interpolation marker rendered as
    /// [`PLACEHOLDER_CHAR`], or punctuation the fragmenter kept out of
    /// identifier grouping.
    Placeholder,
}

/// One chunk of the pre-split input document.
///
/// Fragments are produced by the upstream fragmenter and handed to the
/// [`FragmentCursor`](crate::FragmentCursor) in document order. The content
/// may be empty; empty fragments are transparently skipped by the cursor.
///
/// Content must not contain U+0000, which the lexer reserves as its
/// end-of-stream sentinel (the original 16-bit encoding gives the same
/// guarantee).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// The fragment's textual content.
    pub content: String,

    /// Whether the fragment is script text or opaque template material.
    pub kind: FragmentKind,
}

impl Fragment {
    /// Creates a fragment with the given content and kind.
    pub fn new(content: impl Into<String>, kind: FragmentKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    /// Creates a text fragment.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::Text)
    }

    /// Creates a placeholder fragment carrying the synthetic marker
    /// character as its content.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_CHAR.to_string(), FragmentKind::Placeholder)
    }

    /// Returns true if the fragment has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
