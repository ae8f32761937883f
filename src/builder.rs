// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Append-oriented rope construction.
//!
//! Pushing a chunk per character keeps every append O(1) but leaves one leaf
//! per character. The builder buffers small appends into a pending string
//! and only turns it into a chunk once it reaches the configured size, so a
//! rope built from many tiny pieces ends up with few, full chunks.

use std::fmt;

use crate::chunk::Chunk;
use crate::rope::Rope;

/// Target chunk size in bytes for ropes assembled by a builder.
pub const DEFAULT_CHUNK_BYTES: usize = 1024;

/// The smallest chunk size a builder accepts: one scalar always fits.
const MIN_CHUNK_BYTES: usize = 4;

/// Builds a rope from a sequence of appends.
#[derive(Clone, Debug)]
pub struct RopeBuilder {
    rope: Rope,
    pending: String,
    chunk_bytes: usize,
}

impl Default for RopeBuilder {
    fn default() -> Self {
        return Self::new();
    }
}

impl RopeBuilder {
    pub fn new() -> RopeBuilder {
        return RopeBuilder::with_chunk_bytes(DEFAULT_CHUNK_BYTES);
    }

    /// A builder producing chunks of at most `chunk_bytes` bytes, except
    /// where a whole chunk or rope is pushed directly.
    pub fn with_chunk_bytes(chunk_bytes: usize) -> RopeBuilder {
        let chunk_bytes = chunk_bytes.max(MIN_CHUNK_BYTES);
        return RopeBuilder {
            rope: Rope::empty(),
            pending: String::with_capacity(chunk_bytes),
            chunk_bytes,
        };
    }

    /// Scalars appended so far.
    pub fn width(&self) -> usize {
        return self.rope.width() + self.pending.chars().count();
    }

    pub fn is_empty(&self) -> bool {
        return self.rope.is_empty() && self.pending.is_empty();
    }

    pub fn push_char(&mut self, c: char) {
        if self.pending.len() + c.len_utf8() > self.chunk_bytes {
            self.flush();
        }
        self.pending.push(c);
    }

    pub fn push_str(&mut self, mut text: &str) {
        if self.pending.len() + text.len() <= self.chunk_bytes {
            self.pending.push_str(text);
            return;
        }
        self.flush();
        while text.len() > self.chunk_bytes {
            let mut end = self.chunk_bytes;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            let (head, tail) = text.split_at(end);
            if let Some(chunk) = Chunk::new(head) {
                self.rope = self.rope.push_back(chunk);
            }
            text = tail;
        }
        self.pending.push_str(text);
    }

    /// Append a chunk as-is, after anything pending.
    pub fn push_chunk(&mut self, chunk: Chunk) {
        self.flush();
        self.rope = self.rope.push_back(chunk);
    }

    /// Append a whole rope, sharing its structure.
    pub fn push_rope(&mut self, rope: &Rope) {
        self.flush();
        self.rope = self.rope.concat(rope);
    }

    /// Turn the pending text into a chunk.
    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        tracing::trace!(bytes = self.pending.len(), "rope builder flush");
        let text = std::mem::replace(&mut self.pending, String::with_capacity(self.chunk_bytes));
        if let Some(chunk) = Chunk::from_string(text) {
            self.rope = self.rope.push_back(chunk);
        }
    }

    pub fn finish(mut self) -> Rope {
        self.flush();
        return self.rope;
    }
}

impl fmt::Write for RopeBuilder {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.push_str(text);
        return Ok(());
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push_char(c);
        return Ok(());
    }
}
