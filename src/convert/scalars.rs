// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

use super::Representation;
use crate::rope::Rope;

/// A sequence of scalar values. `char` is always a valid scalar, so the
/// sequence needs no checking; it is re-encoded as UTF-8 into one chunk.
impl Representation for Vec<char> {
    fn decode(self) -> Rope {
        return Rope::from(self.into_iter().collect::<String>());
    }

    fn encode(rope: &Rope) -> Vec<char> {
        let mut scalars = Vec::with_capacity(rope.width());
        scalars.extend(rope.chars());
        return scalars;
    }
}
