//! Reformats JSON text between an indented, human-readable layout and a
//! compact, whitespace-free one. Works directly on text; neither direction
//! touches the binary encoding.

mod compress;
mod error;
mod indent;
mod scan;

pub use compress::compress;
pub use error::FormatError;
pub use indent::indent;
