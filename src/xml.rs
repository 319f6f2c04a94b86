//! Generic XML tree module

pub mod model;
pub mod writer;

pub use model::{Content, Document, Element};
pub use writer::{render, write_document};
