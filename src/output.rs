// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Streaming a rope out.
//!
//! Chunks go to the sink one at a time, in order, with no intermediate
//! buffer. The sink is the only place bytes accumulate.

use std::io;

use blake3::Hash;
use blake3::Hasher;

use crate::rope::Rope;

impl Rope {
    /// Write every chunk's bytes to `sink`, left to right.
    ///
    /// The first error from the sink is returned as-is and nothing after it
    /// is written. Blocking in the sink blocks the caller.
    pub fn write_to<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        for chunk in self.chunks() {
            sink.write_all(chunk.as_bytes())?;
        }
        return Ok(());
    }

    /// A blake3 digest of the UTF-8 content.
    ///
    /// Chunks stream into one incremental hasher, so the digest depends only
    /// on the text and equals `blake3::hash` of the flattened bytes.
    pub fn digest(&self) -> Hash {
        let mut hasher = Hasher::new();
        for chunk in self.chunks() {
            hasher.update(chunk.as_bytes());
        }
        return hasher.finalize();
    }
}
