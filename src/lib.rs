//! Packed hash path codec for a hash-array-mapped trie.
//!
//! A hashed key is consumed in fixed-size digits, one per trie level, and the digits taken
//! so far form a path addressing a node. This crate packs such a path into a single
//! integer word and defines its canonical slash-separated string form, in two fixed
//! configurations: a 30-bit path of 6 five-bit digits ([`HashPath30`]) and a 60-bit path
//! of 10 six-bit digits ([`HashPath60`]).
//!
//! The trie structure itself, key hashing, and storage live elsewhere; this crate is the
//! pure value layer they share.
//!
//! This crate does not require the standard library, but does require Rust's alloc crate.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod path;
pub mod width;

pub use path::{HashPath, HashPath30, HashPath60, PathError, MAX_LEVELS};
pub use width::{Narrow, PathWidth, Wide};
