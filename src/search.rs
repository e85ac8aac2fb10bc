//! The haiku search core.
//!
//! - [`counter`]: mixed-radix enumeration of candidate choices
//! - [`resolver`]: per-word candidate lists deduplicated by syllable count
//! - [`segment`]: exact syllable matching over one word span
//! - [`assembler`]: line-by-line chaining of segment searches into poems

pub mod assembler;
pub mod counter;
pub mod resolver;
pub mod segment;
