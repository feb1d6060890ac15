//! Graph backend seam.
//!
//! A backend lowers a finished [`RenderGraph`] into something a renderer can execute. The two
//! backends shipped here serialize the graph for inspection; a real renderer implements
//! [`GraphBackend`] itself.

use crate::foundation::error::{VsmlError, VsmlResult};
use crate::graph::plan::RenderGraph;

/// Turns a [`RenderGraph`] into a backend-specific program.
pub trait GraphBackend {
    /// Lower `graph` into the backend's textual program.
    fn lower(&mut self, graph: &RenderGraph) -> VsmlResult<String>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// Deterministic text listing, see [`RenderGraph::dump`].
    Dump,
    /// Pretty-printed JSON of the graph.
    Json,
}

/// Text listing backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct DumpBackend;

impl GraphBackend for DumpBackend {
    fn lower(&mut self, graph: &RenderGraph) -> VsmlResult<String> {
        Ok(graph.dump())
    }
}

/// JSON backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonBackend;

impl GraphBackend for JsonBackend {
    fn lower(&mut self, graph: &RenderGraph) -> VsmlResult<String> {
        serde_json::to_string_pretty(graph)
            .map_err(|e| VsmlError::serde(format!("encode graph JSON: {e}")))
    }
}

/// Create a backend implementation.
pub fn create_backend(kind: BackendKind) -> Box<dyn GraphBackend> {
    match kind {
        BackendKind::Dump => Box::new(DumpBackend),
        BackendKind::Json => Box::new(JsonBackend),
    }
}
