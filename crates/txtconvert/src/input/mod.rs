//! Input decoding and source metadata.

mod encoding;
mod source;

pub use encoding::{decode, detect, RawDocument};
pub use source::SourceMetadata;
