// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Chunks and their measure.
//!
//! A chunk is the unit of storage at the leaves of a rope: an immutable,
//! non-empty, valid UTF-8 fragment. String literals are wrapped in place;
//! everything else is copied once into a shared `Arc<str>` and never copied
//! again, however many ropes end up holding it.

use std::fmt;
use std::sync::Arc;

use crate::tree::Measured;
use crate::tree::Monoid;

/// Backing storage for a chunk.
#[derive(Clone)]
enum Text {
    Static(&'static str),
    Shared(Arc<str>),
}

/// An immutable, non-empty UTF-8 fragment with its scalar count cached.
#[derive(Clone)]
pub struct Chunk {
    text: Text,
    chars: usize,
}

impl Chunk {
    /// Copy `text` into a new chunk. Returns `None` for the empty string.
    pub fn new(text: &str) -> Option<Chunk> {
        if text.is_empty() {
            return None;
        }
        return Some(Chunk::shared(Arc::from(text)));
    }

    /// Wrap a string literal without copying. Returns `None` for `""`.
    pub fn from_static(text: &'static str) -> Option<Chunk> {
        if text.is_empty() {
            return None;
        }
        return Some(Chunk {
            chars: text.chars().count(),
            text: Text::Static(text),
        });
    }

    /// Take ownership of `text`. Returns `None` for the empty string.
    pub fn from_string(text: String) -> Option<Chunk> {
        if text.is_empty() {
            return None;
        }
        return Some(Chunk::shared(Arc::from(text)));
    }

    /// A chunk holding a single scalar.
    pub fn from_char(c: char) -> Chunk {
        let mut buf = [0u8; 4];
        return Chunk::shared(Arc::from(&*c.encode_utf8(&mut buf)));
    }

    /// Wrap bytes as a chunk without checking them.
    ///
    /// # Safety
    ///
    /// `bytes` must be valid UTF-8.
    pub unsafe fn from_utf8_unchecked(bytes: Vec<u8>) -> Option<Chunk> {
        if bytes.is_empty() {
            return None;
        }
        // SAFETY: the caller guarantees `bytes` is valid UTF-8.
        let text = unsafe { String::from_utf8_unchecked(bytes) };
        return Some(Chunk::shared(Arc::from(text)));
    }

    fn shared(text: Arc<str>) -> Chunk {
        debug_assert!(!text.is_empty());
        return Chunk {
            chars: text.chars().count(),
            text: Text::Shared(text),
        };
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        return match &self.text {
            Text::Static(text) => *text,
            Text::Shared(text) => &**text,
        };
    }

    /// The wrapped literal, if this chunk was made from one.
    pub fn as_static(&self) -> Option<&'static str> {
        return match &self.text {
            Text::Static(text) => Some(*text),
            Text::Shared(_) => None,
        };
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        return self.as_str().as_bytes();
    }

    /// Number of Unicode scalar values.
    #[inline]
    pub fn width(&self) -> usize {
        return self.chars;
    }

    /// Number of UTF-8 bytes.
    #[inline]
    pub fn len_bytes(&self) -> usize {
        return self.as_str().len();
    }

    /// Split at a scalar offset strictly inside the chunk.
    ///
    /// Both halves are non-empty, so `at` must be in `1..width`.
    pub(crate) fn split_at(&self, at: usize) -> (Chunk, Chunk) {
        debug_assert!(at > 0 && at < self.chars);
        let text = self.as_str();
        let byte = text.char_indices().nth(at).map(|(i, _)| i).unwrap_or(text.len());
        let (left, right) = match &self.text {
            Text::Static(text) => {
                let text: &'static str = *text;
                let (l, r) = text.split_at(byte);
                (Text::Static(l), Text::Static(r))
            }
            Text::Shared(text) => {
                let (l, r) = text.split_at(byte);
                (Text::Shared(Arc::from(l)), Text::Shared(Arc::from(r)))
            }
        };
        return (
            Chunk { text: left, chars: at },
            Chunk { text: right, chars: self.chars - at },
        );
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Chunk({:?})", self.as_str());
    }
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        return self.as_str();
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        return self.as_str() == other.as_str();
    }
}

impl Eq for Chunk {}

/// The cached summary of a subtree: scalar and byte counts.
///
/// Forms a monoid under component-wise addition with `(0, 0)` as identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Measure {
    pub chars: usize,
    pub bytes: usize,
}

impl Monoid for Measure {
    #[inline]
    fn identity() -> Self {
        return Measure { chars: 0, bytes: 0 };
    }

    #[inline]
    fn combine(&self, other: &Self) -> Self {
        return Measure {
            chars: self.chars + other.chars,
            bytes: self.bytes + other.bytes,
        };
    }
}

impl Measured<Measure> for Chunk {
    #[inline]
    fn measure(&self) -> Measure {
        return Measure {
            chars: self.chars,
            bytes: self.len_bytes(),
        };
    }
}
