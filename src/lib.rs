// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Strand - a persistent UTF-8 rope.
//!
//! A `Rope` is an immutable text value stored as a finger tree of chunks,
//! each chunk an immutable, non-empty UTF-8 fragment. Every subtree caches
//! its scalar and byte counts, so width queries are O(1), appends at either
//! end are amortized O(1), and joining two ropes costs O(log min(n, m)).
//!
//! # Quick Start
//!
//! ```
//! use strand::Representation;
//! use strand::Rope;
//!
//! let hello = Rope::from_static("Hello");
//! let rope = hello.append(vec![String::from(" World")]);
//! assert_eq!(rope.width(), 11);
//! assert_eq!(rope, "Hello World");
//!
//! let mut out = Vec::new();
//! rope.write_to(&mut out).unwrap();
//! assert_eq!(out, b"Hello World");
//!
//! // Bytes without a UTF-8 guarantee are validated; bad input decodes empty.
//! assert!(vec![0x80u8].decode().is_empty());
//! assert!(vec![0x80u8].try_decode().is_err());
//! ```
//!
//! # Modules
//!
//! - `chunk`: the leaf storage unit
//! - `convert`: the `Representation` trait and its implementations
//! - `builder`: coalescing appends into full chunks
//! - `output`: streaming to `io::Write` sinks and content digests

pub mod builder;
pub mod chunk;
pub mod convert;
pub mod error;
mod output;
pub mod rope;
mod tree;

pub use crate::builder::RopeBuilder;
pub use crate::chunk::Chunk;
pub use crate::convert::Representation;
pub use crate::error::DecodeError;
pub use crate::rope::Rope;
