// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Conversion between ropes and other textual representations.
//!
//! Each representation implements [`Representation`] once. Types that carry
//! a static UTF-8 guarantee (`String`, `Box<str>`, ...) are wrapped directly;
//! byte buffers are validated first.
//!
//! # Invalid input
//!
//! `decode` is total. A byte buffer that is not valid UTF-8 decodes to the
//! empty rope, and the failure is only visible as a `debug` event. Callers
//! that need to tell "empty" from "invalid" use `try_decode`.
//!
//! # Implementations
//!
//! | Type | Kind | Validated |
//! |------|------|-----------|
//! | `Vec<u8>` | growable byte buffer | yes |
//! | `Box<[u8]>` | fixed byte buffer | yes |
//! | `String`, `Box<str>` | monolithic string | no |
//! | `Cow<'static, str>` | monolithic string, literals wrapped in place | no |
//! | `Vec<String>` | chunked string, one chunk per piece | no |
//! | `Vec<char>` | sequence of scalars | no |
//!
//! Other crates can implement the trait for their own types.

mod bytes;
mod chunked;
mod scalars;
mod text;

use crate::error::DecodeError;
use crate::error::Result;
use crate::rope::Rope;

/// A textual representation that converts to and from a rope.
pub trait Representation: Sized {
    /// Convert into a rope. Never fails: invalid input becomes the empty
    /// rope.
    fn decode(self) -> Rope;

    /// Convert into a rope, reporting invalid input.
    fn try_decode(self) -> Result<Rope> {
        return Ok(self.decode());
    }

    /// Rebuild this representation from a rope.
    fn encode(rope: &Rope) -> Self;

    /// `rope` followed by the decoded contents of `self`.
    ///
    /// Overrides must give a result equal to the default.
    fn append_into(self, rope: &Rope) -> Rope {
        return rope.concat(&self.decode());
    }
}

/// Resolve a failed decode to the empty rope.
pub(crate) fn or_empty(result: Result<Rope>) -> Rope {
    return match result {
        Ok(rope) => rope,
        Err(error) => {
            tracing::debug!(%error, "invalid input decoded as empty rope");
            Rope::empty()
        }
    };
}

/// Log a rejected append and leave the rope unchanged.
pub(crate) fn rejected(rope: &Rope, error: DecodeError) -> Rope {
    tracing::debug!(%error, "invalid input not appended");
    return rope.clone();
}

impl Rope {
    /// Decode any representation into a rope.
    pub fn decode<R: Representation>(value: R) -> Rope {
        return value.decode();
    }

    /// Decode any representation into a rope, reporting invalid input.
    pub fn try_decode<R: Representation>(value: R) -> Result<Rope> {
        return value.try_decode();
    }

    /// Encode this rope as `R`.
    pub fn encode<R: Representation>(&self) -> R {
        return R::encode(self);
    }

    /// This rope followed by the decoded contents of `value`.
    pub fn append<R: Representation>(&self, value: R) -> Rope {
        return value.append_into(self);
    }
}
