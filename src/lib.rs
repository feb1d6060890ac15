//! `vsml` compiles a timed audio/video composition into a media operation graph.
//!
//! The input is a content tree whose styles are already resolved to pixels, frames and seconds.
//! Leaves are compiled independently, containers fold their children in document order, and
//! the result is a [`RenderGraph`] that a [`GraphBackend`] lowers into an executable program.
//!
//! - Load a [`Document`] (or build a [`ContentNode`] tree directly)
//! - Compile it with a [`Compiler`]
//! - Inspect the graph with [`RenderGraph::dump`] or hand it to a backend
#![forbid(unsafe_code)]

pub mod backend;
pub mod compile;
pub mod content;
pub mod foundation;
pub mod graph;
pub mod style;

pub use crate::backend::{BackendKind, DumpBackend, GraphBackend, JsonBackend, create_backend};
pub use crate::compile::compiler::{CompileOpts, Compiler, compile_document};
pub use crate::compile::context::RenderContext;
pub use crate::compile::process::RenderProcess;
pub use crate::content::document::Document;
pub use crate::content::model::{ContentNode, SourceContent, SourceKind, WrapContent};
pub use crate::foundation::core::{Fps, Resolution};
pub use crate::foundation::error::{VsmlError, VsmlResult};
pub use crate::graph::fingerprint::GraphFingerprint;
pub use crate::graph::ops::{Op, OpId};
pub use crate::graph::plan::RenderGraph;
pub use crate::style::color::Color;
pub use crate::style::direction::DirectionInfo;
pub use crate::style::graphic::GraphicValue;
pub use crate::style::node::{AudioSystem, LayerMode, Order, StyleNode};
pub use crate::style::time::TimeValue;
