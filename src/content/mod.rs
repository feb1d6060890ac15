//! Content tree handed over by the document loader.

pub mod document;
pub mod model;
