//! Build GFA1 graphs one record at a time.
//!
//! Records are constructed from already-split field values, which
//! validates them, and then inserted into a [`gfa::GFA`], which
//! enforces the container-level invariants (unique segment names).
//! The [`parser`] and [`writer`] modules connect that core to text.

pub mod cigar;
pub mod gfa;
pub mod optfields;
pub mod parser;
pub mod writer;
