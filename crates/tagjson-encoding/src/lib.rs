//! Tag byte layout, size-of-encoded-value inspection and numeric packing for
//! tagjson's compact binary form.
//!
//! This crate knows nothing about text: it only defines how a value is laid
//! out once it's already binary, and how to measure one without decoding its
//! children. [`tagjson-parser`](https://docs.rs/tagjson-parser) produces
//! buffers in this layout; [`tagjson-navigator`](https://docs.rs/tagjson-navigator)
//! reads them back.

mod size;
pub mod tag;

pub use size::size_of;
pub use tag::{Family, SMALL_MAX_LEN};
