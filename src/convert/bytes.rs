// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Byte buffers: no UTF-8 guarantee, so every decode validates.

use super::Representation;
use super::or_empty;
use super::rejected;
use crate::chunk::Chunk;
use crate::error::Result;
use crate::rope::Rope;

/// Concatenate the chunk bytes into a buffer sized up front.
fn collect_bytes(rope: &Rope) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(rope.len_bytes());
    for chunk in rope.chunks() {
        bytes.extend_from_slice(chunk.as_bytes());
    }
    return bytes;
}

impl Representation for Vec<u8> {
    fn decode(self) -> Rope {
        return or_empty(self.try_decode());
    }

    fn try_decode(self) -> Result<Rope> {
        let text = String::from_utf8(self)?;
        return Ok(Rope::from(text));
    }

    fn encode(rope: &Rope) -> Vec<u8> {
        return collect_bytes(rope);
    }

    fn append_into(self, rope: &Rope) -> Rope {
        return match String::from_utf8(self) {
            Ok(text) => match Chunk::from_string(text) {
                Some(chunk) => rope.push_back(chunk),
                None => rope.clone(),
            },
            Err(error) => rejected(rope, error.into()),
        };
    }
}

impl Representation for Box<[u8]> {
    fn decode(self) -> Rope {
        return or_empty(self.try_decode());
    }

    fn try_decode(self) -> Result<Rope> {
        return self.into_vec().try_decode();
    }

    fn encode(rope: &Rope) -> Box<[u8]> {
        return collect_bytes(rope).into_boxed_slice();
    }

    fn append_into(self, rope: &Rope) -> Rope {
        return self.into_vec().append_into(rope);
    }
}
