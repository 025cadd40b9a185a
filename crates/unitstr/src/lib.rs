//! Growable, NUL-terminated string buffers generic over their code unit.
//!
//! The central type is [`UnitString<T>`], an owning, contiguous buffer of
//! code units that keeps a zero-valued terminator stored after its logical
//! content. The terminator is an interop affordance for terminated raw
//! sequences; length is tracked explicitly and never rescanned.
//!
//! Capacity is managed with an explicit growth policy (1.5× with an
//! exact-fit fallback) over an exactly-sized allocation, so the capacity
//! curve is part of the observable contract: cloning preserves the source's
//! capacity, and capacity never shrinks.
//!
//! ```
//! use unitstr::UnitString;
//!
//! let mut s = UnitString::<char>::from("Hello World!");
//! assert_eq!(s.len(), 12);
//! assert_eq!(s.substring(6..), "World!");
//! assert_eq!(s.index_of('W'), Some(6));
//!
//! s.append_filled('x', 5);
//! assert_eq!(s, "Hello World!xxxxx");
//! ```
//!
//! Units are anything implementing [`Unit`]: `u8`, `u16`, `u32`, or
//! `char` out of the box. The container performs no encoding validation
//! and no locale handling; case conversion is ASCII-range only.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buf;
mod error;
mod string;
mod unit;

#[cfg(feature = "serde")]
mod serde_impls;


pub use error::UnitStrError;
pub use string::UnitString;
pub use unit::Unit;
