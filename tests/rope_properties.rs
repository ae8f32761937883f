// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Property-based tests for rope construction, queries and conversion.
//!
//! Every rope is built alongside a plain `String` model; the rope must agree
//! with the model whatever chunking the build steps produced.

use std::hash::BuildHasher;

use proptest::prelude::*;
use rustc_hash::FxBuildHasher;
use rustc_hash::FxHashSet;
use strand::Chunk;
use strand::Representation;
use strand::Rope;

// =============================================================================
// Test helpers
// =============================================================================

/// A step in building a rope.
#[derive(Clone, Debug)]
enum Step {
    PushFront(String),
    PushBack(String),
    /// Concatenate a rope decoded from these pieces on the right.
    ConcatBack(Vec<String>),
    /// Concatenate a rope decoded from these pieces on the left.
    ConcatFront(Vec<String>),
    /// Split at a fraction of the width and join the halves back up.
    Resplit(f64),
}

fn arbitrary_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "\\PC{1,6}".prop_map(Step::PushFront),
        "\\PC{1,6}".prop_map(Step::PushBack),
        prop::collection::vec("\\PC{0,6}", 0..6).prop_map(Step::ConcatBack),
        prop::collection::vec("\\PC{0,6}", 0..6).prop_map(Step::ConcatFront),
        (0.0..=1.0f64).prop_map(Step::Resplit),
    ]
}

fn build(steps: &[Step]) -> (Rope, String) {
    let mut rope = Rope::empty();
    let mut model = String::new();
    for step in steps {
        match step {
            Step::PushFront(text) => {
                rope = rope.push_front(Chunk::new(text).unwrap());
                model.insert_str(0, text);
            }
            Step::PushBack(text) => {
                rope = rope.push_back(Chunk::new(text).unwrap());
                model.push_str(text);
            }
            Step::ConcatBack(pieces) => {
                rope = rope.concat(&pieces.clone().decode());
                model.push_str(&pieces.concat());
            }
            Step::ConcatFront(pieces) => {
                rope = pieces.clone().decode().concat(&rope);
                model.insert_str(0, &pieces.concat());
            }
            Step::Resplit(fraction) => {
                let at = (fraction * rope.width() as f64) as usize;
                let (left, right) = rope.split_at(at);
                rope = left.concat(&right);
            }
        }
    }
    return (rope, model);
}

fn arbitrary_rope() -> impl Strategy<Value = (Rope, String)> {
    return prop::collection::vec(arbitrary_step(), 0..40).prop_map(|steps| build(&steps));
}

fn char_by_char(text: &str) -> Rope {
    let mut rope = Rope::empty();
    for c in text.chars() {
        rope = rope.push_back(Chunk::from_char(c));
    }
    return rope;
}

// =============================================================================
// Model agreement
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The rope's scalars, width and byte length match the model.
    #[test]
    fn rope_matches_model((rope, model) in arbitrary_rope()) {
        prop_assert_eq!(rope.width(), model.chars().count());
        prop_assert_eq!(rope.len_bytes(), model.len());
        prop_assert_eq!(rope.chars().collect::<String>(), model.clone());
        prop_assert_eq!(rope.to_string(), model.clone());
        prop_assert!(rope == model.as_str());
    }

    /// Streaming writes exactly the model's bytes.
    #[test]
    fn write_to_emits_model_bytes((rope, model) in arbitrary_rope()) {
        let mut sink = Vec::new();
        rope.write_to(&mut sink).unwrap();
        prop_assert_eq!(sink, model.into_bytes());
    }

    /// Containment agrees with the model for chars inside and outside it.
    #[test]
    fn contains_matches_model((rope, model) in arbitrary_rope(), probe in any::<char>()) {
        prop_assert_eq!(rope.contains(probe), model.contains(probe));
        for c in model.chars().take(8) {
            prop_assert!(rope.contains(c));
        }
    }

    /// Splitting anywhere yields the model's prefix and suffix.
    #[test]
    fn split_matches_model((rope, model) in arbitrary_rope(), fraction in 0.0..=1.0f64) {
        let at = (fraction * rope.width() as f64) as usize;
        let (left, right) = rope.split_at(at);
        let byte = model.char_indices().nth(at).map(|(b, _)| b).unwrap_or(model.len());
        prop_assert_eq!(left.width(), at);
        prop_assert!(left == &model[..byte]);
        prop_assert!(right == &model[byte..]);
    }
}

// =============================================================================
// Algebraic laws
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn width_is_additive((a, _) in arbitrary_rope(), (b, _) in arbitrary_rope()) {
        prop_assert_eq!(a.concat(&b).width(), a.width() + b.width());
    }

    #[test]
    fn concat_is_associative(
        (a, _) in arbitrary_rope(),
        (b, _) in arbitrary_rope(),
        (c, _) in arbitrary_rope(),
    ) {
        let left = a.concat(&b).concat(&c);
        let right = a.concat(&b.concat(&c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn empty_is_identity((a, _) in arbitrary_rope()) {
        prop_assert_eq!(Rope::empty().concat(&a), a.clone());
        prop_assert_eq!(a.concat(&Rope::empty()), a);
    }

    /// Equal text hashes the same however it is chunked.
    #[test]
    fn hash_ignores_chunking((rope, model) in arbitrary_rope()) {
        let hasher = FxBuildHasher;
        let flat = Rope::from(model.as_str());
        let pieces = char_by_char(&model);
        prop_assert_eq!(hasher.hash_one(&rope), hasher.hash_one(&flat));
        prop_assert_eq!(hasher.hash_one(&rope), hasher.hash_one(&pieces));
        prop_assert_eq!(rope.digest(), flat.digest());
    }

    /// Ordering matches the ordering of the models.
    #[test]
    fn order_matches_model((a, ma) in arbitrary_rope(), (b, mb) in arbitrary_rope()) {
        prop_assert_eq!(a.cmp(&b), ma.chars().cmp(mb.chars()));
    }
}

// =============================================================================
// Conversion
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Valid UTF-8 survives a byte-buffer round trip.
    #[test]
    fn bytes_round_trip(text in "\\PC*") {
        let bytes = text.into_bytes();
        let rope = bytes.clone().decode();
        prop_assert_eq!(Vec::<u8>::encode(&rope), bytes);
    }

    /// Arbitrary bytes decode to their text when valid and to nothing when not.
    #[test]
    fn bytes_decode_or_empty(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let rope = bytes.clone().decode();
        match String::from_utf8(bytes.clone()) {
            Ok(text) => prop_assert!(rope == text),
            Err(_) => {
                prop_assert!(rope.is_empty());
                prop_assert!(bytes.try_decode().is_err());
            }
        }
    }

    /// Specialized appends agree with decode-then-concat.
    #[test]
    fn append_agrees_with_concat((rope, _) in arbitrary_rope(), text in "\\PC{0,12}") {
        let expected = rope.concat(&text.clone().decode());
        prop_assert_eq!(rope.append(text.clone()), expected.clone());
        prop_assert_eq!(rope.append(text.clone().into_bytes()), expected.clone());
        prop_assert_eq!(rope.append(vec![text.clone()]), expected.clone());
        prop_assert_eq!(rope.append(text.chars().collect::<Vec<char>>()), expected);
    }
}

// =============================================================================
// Collections
// =============================================================================

#[test]
fn differently_chunked_ropes_are_one_set_entry() {
    let mut set = FxHashSet::default();
    set.insert(Rope::from_static("Hello World"));
    set.insert(char_by_char("Hello World"));
    set.insert(Rope::from("Hello").append(vec![String::from(" "), String::from("World")]));
    assert_eq!(set.len(), 1);
    assert!(set.contains(&Rope::from("Hello World")));
}
