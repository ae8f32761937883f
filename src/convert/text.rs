// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Monolithic strings: already valid, wrapped as a single chunk.

use std::borrow::Cow;

use super::Representation;
use crate::chunk::Chunk;
use crate::rope::Rope;

fn collect_string(rope: &Rope) -> String {
    let mut text = String::with_capacity(rope.len_bytes());
    for chunk in rope.chunks() {
        text.push_str(chunk.as_str());
    }
    return text;
}

impl Representation for String {
    fn decode(self) -> Rope {
        return Rope::from(self);
    }

    fn encode(rope: &Rope) -> String {
        return collect_string(rope);
    }

    fn append_into(self, rope: &Rope) -> Rope {
        return match Chunk::from_string(self) {
            Some(chunk) => rope.push_back(chunk),
            None => rope.clone(),
        };
    }
}

impl Representation for Box<str> {
    fn decode(self) -> Rope {
        return Rope::from(self.into_string());
    }

    fn encode(rope: &Rope) -> Box<str> {
        return collect_string(rope).into_boxed_str();
    }

    fn append_into(self, rope: &Rope) -> Rope {
        return self.into_string().append_into(rope);
    }
}

impl Representation for Cow<'static, str> {
    fn decode(self) -> Rope {
        return match self {
            Cow::Borrowed(text) => Rope::from_static(text),
            Cow::Owned(text) => Rope::from(text),
        };
    }

    /// Borrows when the rope is a single literal chunk.
    fn encode(rope: &Rope) -> Cow<'static, str> {
        let mut chunks = rope.chunks();
        if let (Some(only), None) = (chunks.next(), chunks.next()) {
            if let Some(text) = only.as_static() {
                return Cow::Borrowed(text);
            }
        }
        return Cow::Owned(collect_string(rope));
    }

    fn append_into(self, rope: &Rope) -> Rope {
        let chunk = match self {
            Cow::Borrowed(text) => Chunk::from_static(text),
            Cow::Owned(text) => Chunk::from_string(text),
        };
        return match chunk {
            Some(chunk) => rope.push_back(chunk),
            None => rope.clone(),
        };
    }
}
