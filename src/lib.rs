//! A dynamically-sized, word-packed bitset with proxy bit access and
//! zero-copy views.
//!
//! This crate provides [`BitSet`], a growable sequence of bits packed into
//! 64-bit words, together with non-owning windows over bit ranges
//! ([`BitView`], [`BitViewMut`]) and a proxy type for assigning through a
//! single bit ([`BitRef`]).
//!
//! # Features
//!
//! - **Word-at-a-time bulk operations**: fill, flip, popcount, AND/OR/XOR,
//!   and comparison process whole words instead of looping per bit, with
//!   boundary words isolated through partial masks
//! - **Zero-copy sub-ranges**: [`subview`](BitSet::subview) carves a window
//!   out of a set (or out of another view) without copying
//! - **Alignment-oblivious operands**: binary operations and equality accept
//!   two ranges starting at different bit offsets of their respective
//!   buffers and still run word-granular
//! - **Bit-string round-trip**: parse from and render to `'0'/'1'` strings,
//!   one character per bit
//! - **Serialization support** via serde (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use bitspan::BitSet;
//!
//! let mut bits: BitSet = "10110".parse()?;
//!
//! // Single-bit access and mutation.
//! assert_eq!(bits.get(2), Some(true));
//! bits.set(1, true);
//! bits.get_mut(0).unwrap().flip();
//! assert_eq!(bits.to_string(), "01110");
//!
//! // Word-granular bulk operations.
//! assert_eq!(bits.count_ones(), 3);
//! let other: BitSet = "01011".parse()?;
//! assert_eq!((&bits & &other).to_string(), "01010");
//!
//! // Zero-copy views.
//! let mid = bits.subview(1, 3);
//! assert!(mid.all());
//!
//! // Growth appends zero bits; shrink drops from the end.
//! bits <<= 2;
//! assert_eq!(bits.to_string(), "0111000");
//! bits >>= 4;
//! assert_eq!(bits.to_string(), "011");
//! # Ok::<(), bitspan::ParseBitSetError>(())
//! ```
//!
//! # Storage layout
//!
//! Bits are addressed LSB-first: bit `i` lives in word `i / 64` under the
//! mask `1 << (i % 64)`. The convention is internal — it affects no
//! externally observable ordering — and is applied uniformly by the proxy,
//! the iterators, and the view algorithms. The word buffer of a [`BitSet`]
//! always holds exactly `ceil(len / 64)` words, and the bits of the last
//! word past the end are kept at zero.
//!
//! Views are (word slice, start bit, end bit) triples borrowing the owner's
//! storage; the borrow checker enforces that no view outlives or aliases a
//! resize of its owner.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bit_ref;
mod bitset;
mod iter;
mod traits;
mod view;
mod word;

#[cfg(feature = "serde")]
mod serde;

// Re-exports
pub use bit_ref::BitRef;
pub use bitset::BitSet;
pub use iter::{Bits, Ones};
pub use traits::ParseBitSetError;
pub use view::{BitView, BitViewMut};
pub use word::{Word, WORD_BITS};
