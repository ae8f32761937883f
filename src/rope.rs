// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The rope value.
//!
//! A `Rope` is a thin immutable handle over a finger tree of chunks measured
//! by scalar and byte count. Ropes are values: every operation returns a new
//! rope that shares untouched subtrees with its inputs, so cloning is O(1)
//! and a rope can be read from any number of threads at once.
//!
//! Equality, ordering and hashing are defined on the flattened sequence of
//! scalars. Where one rope was built from a single chunk and another by
//! pushing one character at a time, the two are equal and hash the same.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::ops::Add;

use crate::builder::RopeBuilder;
use crate::chunk::Chunk;
use crate::chunk::Measure;
use crate::tree::FingerTree;
use crate::tree::Leaves;

/// A persistent UTF-8 text value.
#[derive(Clone, Default)]
pub struct Rope {
    tree: FingerTree<Measure, Chunk>,
}

impl Rope {
    /// The empty rope.
    pub fn empty() -> Rope {
        return Rope { tree: FingerTree::new() };
    }

    /// A rope holding exactly one chunk.
    pub fn singleton(chunk: Chunk) -> Rope {
        return Rope { tree: FingerTree::singleton(chunk) };
    }

    /// Wrap a string literal without copying it.
    pub fn from_static(text: &'static str) -> Rope {
        return match Chunk::from_static(text) {
            Some(chunk) => Rope::singleton(chunk),
            None => Rope::empty(),
        };
    }

    /// Wrap bytes without validating them.
    ///
    /// # Safety
    ///
    /// `bytes` must be valid UTF-8. Every read of the rope treats its chunks
    /// as `str`.
    pub unsafe fn from_utf8_unchecked(bytes: Vec<u8>) -> Rope {
        // SAFETY: forwarded from the caller.
        return match unsafe { Chunk::from_utf8_unchecked(bytes) } {
            Some(chunk) => Rope::singleton(chunk),
            None => Rope::empty(),
        };
    }

    /// Number of Unicode scalar values, in O(1).
    #[inline]
    pub fn width(&self) -> usize {
        return self.tree.measure().chars;
    }

    /// Number of UTF-8 bytes, in O(1).
    #[inline]
    pub fn len_bytes(&self) -> usize {
        return self.tree.measure().bytes;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.tree.is_empty();
    }

    /// This rope followed by `other`, in O(log min(n, m)).
    pub fn concat(&self, other: &Rope) -> Rope {
        return Rope { tree: self.tree.concat(&other.tree) };
    }

    /// `chunk` followed by this rope, in amortized O(1).
    pub fn push_front(&self, chunk: Chunk) -> Rope {
        return Rope { tree: self.tree.push_front(chunk) };
    }

    /// This rope followed by `chunk`, in amortized O(1).
    pub fn push_back(&self, chunk: Chunk) -> Rope {
        return Rope { tree: self.tree.push_back(chunk) };
    }

    /// This rope followed by a copy of `text`.
    pub fn push_str(&self, text: &str) -> Rope {
        return match Chunk::new(text) {
            Some(chunk) => self.push_back(chunk),
            None => self.clone(),
        };
    }

    /// Split off the first chunk.
    pub fn pop_front(&self) -> Option<(Chunk, Rope)> {
        let (chunk, tree) = self.tree.pop_front()?;
        return Some((chunk, Rope { tree }));
    }

    /// Split off the last chunk.
    pub fn pop_back(&self) -> Option<(Rope, Chunk)> {
        let (tree, chunk) = self.tree.pop_back()?;
        return Some((Rope { tree }, chunk));
    }

    pub fn first_chunk(&self) -> Option<&Chunk> {
        return self.tree.front();
    }

    pub fn last_chunk(&self) -> Option<&Chunk> {
        return self.tree.back();
    }

    /// Split into the first `index` scalars and the rest.
    ///
    /// An index past the end is clamped to the width. At most one chunk is
    /// cut; every other chunk is shared with `self`.
    pub fn split_at(&self, index: usize) -> (Rope, Rope) {
        let index = index.min(self.width());
        if index == 0 {
            return (Rope::empty(), self.clone());
        }
        let Some((left, chunk, before, right)) = self.tree.split_around(|m| m.chars > index) else {
            return (self.clone(), Rope::empty());
        };
        let offset = index - before.chars;
        if offset == 0 {
            return (Rope { tree: left }, Rope { tree: right.push_front(chunk) });
        }
        let (head, tail) = chunk.split_at(offset);
        return (Rope { tree: left.push_back(head) }, Rope { tree: right.push_front(tail) });
    }

    /// Whether `c` occurs anywhere in the rope.
    ///
    /// Scans chunks left to right and stops at the first match.
    pub fn contains(&self, c: char) -> bool {
        return self.chunks().any(|chunk| chunk.as_str().contains(c));
    }

    /// The chunks of this rope, left to right.
    pub fn chunks(&self) -> Chunks<'_> {
        return Chunks { leaves: self.tree.iter() };
    }

    /// The scalars of this rope, left to right.
    ///
    /// Lazy and restartable: call again to walk from the start.
    pub fn chars(&self) -> Chars<'_> {
        return Chars { chunks: self.chunks(), current: "".chars() };
    }
}

/// Iterator over the chunks of a rope.
pub struct Chunks<'a> {
    leaves: Leaves<'a, Measure, Chunk>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a Chunk;

    #[inline]
    fn next(&mut self) -> Option<&'a Chunk> {
        return self.leaves.next();
    }
}

/// Iterator over the scalars of a rope.
pub struct Chars<'a> {
    chunks: Chunks<'a>,
    current: std::str::Chars<'a>,
}

impl<'a> Iterator for Chars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.current.next() {
                return Some(c);
            }
            self.current = self.chunks.next()?.as_str().chars();
        }
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Rope) -> bool {
        if self.width() != other.width() || self.len_bytes() != other.len_bytes() {
            return false;
        }
        return self.chars().eq(other.chars());
    }
}

impl Eq for Rope {}

impl PartialEq<str> for Rope {
    fn eq(&self, other: &str) -> bool {
        if self.len_bytes() != other.len() {
            return false;
        }
        return self.chars().eq(other.chars());
    }
}

impl PartialEq<&str> for Rope {
    fn eq(&self, other: &&str) -> bool {
        return self == *other;
    }
}

impl PartialEq<String> for Rope {
    fn eq(&self, other: &String) -> bool {
        return self == other.as_str();
    }
}

impl PartialEq<Rope> for str {
    fn eq(&self, other: &Rope) -> bool {
        return other == self;
    }
}

impl PartialEq<Rope> for &str {
    fn eq(&self, other: &Rope) -> bool {
        return other == *self;
    }
}

impl PartialOrd for Rope {
    fn partial_cmp(&self, other: &Rope) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl Ord for Rope {
    fn cmp(&self, other: &Rope) -> Ordering {
        return self.chars().cmp(other.chars());
    }
}

impl Hash for Rope {
    /// Feeds the width, then every scalar in order. Chunk boundaries never
    /// reach the hasher.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.width());
        for c in self.chars() {
            state.write_u32(c as u32);
        }
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.chunks() {
            f.write_str(chunk.as_str())?;
        }
        return Ok(());
    }
}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rope(\"")?;
        for chunk in self.chunks() {
            write!(f, "{}", chunk.as_str().escape_debug())?;
        }
        return f.write_str("\")");
    }
}

impl From<Chunk> for Rope {
    fn from(chunk: Chunk) -> Rope {
        return Rope::singleton(chunk);
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Rope {
        return Rope::empty().push_str(text);
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Rope {
        return match Chunk::from_string(text) {
            Some(chunk) => Rope::singleton(chunk),
            None => Rope::empty(),
        };
    }
}

impl From<char> for Rope {
    fn from(c: char) -> Rope {
        return Rope::singleton(Chunk::from_char(c));
    }
}

impl FromIterator<char> for Rope {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Rope {
        let mut builder = RopeBuilder::new();
        for c in iter {
            builder.push_char(c);
        }
        return builder.finish();
    }
}

impl<'a> FromIterator<&'a str> for Rope {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Rope {
        let mut builder = RopeBuilder::new();
        for text in iter {
            builder.push_str(text);
        }
        return builder.finish();
    }
}

impl FromIterator<Chunk> for Rope {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Rope {
        let mut rope = Rope::empty();
        for chunk in iter {
            rope = rope.push_back(chunk);
        }
        return rope;
    }
}

impl Add<&Rope> for &Rope {
    type Output = Rope;

    fn add(self, other: &Rope) -> Rope {
        return self.concat(other);
    }
}

impl Add for Rope {
    type Output = Rope;

    fn add(self, other: Rope) -> Rope {
        return self.concat(&other);
    }
}
