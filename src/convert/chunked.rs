// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Chunked strings: a list of valid pieces, mapped one-to-one onto chunks.

use super::Representation;
use crate::chunk::Chunk;
use crate::rope::Rope;

impl Representation for Vec<String> {
    /// Empty pieces are skipped.
    fn decode(self) -> Rope {
        return self.append_into(&Rope::empty());
    }

    /// One piece per chunk.
    fn encode(rope: &Rope) -> Vec<String> {
        return rope.chunks().map(|chunk| chunk.as_str().to_owned()).collect();
    }

    /// Pushes each piece straight onto `rope`.
    fn append_into(self, rope: &Rope) -> Rope {
        let mut result = rope.clone();
        for piece in self {
            if let Some(chunk) = Chunk::from_string(piece) {
                result = result.push_back(chunk);
            }
        }
        return result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(parts: &[&str]) -> Vec<String> {
        return parts.iter().map(|part| part.to_string()).collect();
    }

    #[test]
    fn pieces_become_chunks() {
        let rope = pieces(&["ab", "", "cd", "é"]).decode();
        assert_eq!(rope.chunks().count(), 3);
        assert_eq!(rope, "abcdé");
        assert_eq!(Vec::<String>::encode(&rope), pieces(&["ab", "cd", "é"]));
    }

    #[test]
    fn hello_world_through_chunks() {
        let rope = Rope::from_static("Hello").append(pieces(&[" World"]));
        assert_eq!(rope.width(), 11);
        assert_eq!(rope, "Hello World");
        assert_eq!(rope.chars().collect::<String>(), "Hello World");
    }

    #[test]
    fn append_matches_concat() {
        let rope = Rope::from("x");
        let parts = pieces(&["1", "", "22", "333"]);
        assert_eq!(parts.clone().append_into(&rope), rope.concat(&parts.decode()));
    }
}
