//! Contains common text reading and writing functionality together with diagnostics sink.

mod diagnostics;
pub use self::diagnostics::*;

mod text_reader;
pub(crate) use self::text_reader::*;

mod text_writer;
pub(crate) use self::text_writer::*;
