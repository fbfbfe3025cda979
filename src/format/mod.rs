//! TGF text import/export.

pub mod reader;
pub mod writer;

pub use reader::TgfReader;
pub use writer::TgfWriter;
