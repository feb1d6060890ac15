//! Bottom-up compilation of a content tree into operation handles.

pub mod compiler;
pub(crate) mod compose;
pub mod context;
pub(crate) mod layout;
pub(crate) mod parallel;
pub mod process;
pub(crate) mod sequence;
pub(crate) mod source;
pub(crate) mod timing;
