//! Colour keying and indexing module
//!
//! Gives every distinct sampled colour a canonical `#RRGGBB` key and a
//! stable, first-seen-order integer ID.

mod index;
mod key;

#[cfg(test)]
mod tests;

pub use index::{ColorIndex, ColorTable};
pub use key::ColorKey;
