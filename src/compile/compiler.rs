use std::path::PathBuf;

use rayon::prelude::*;

use crate::compile::compose::{GraphBuilder, container_box};
use crate::compile::context::RenderContext;
use crate::compile::parallel::compose_parallel;
use crate::compile::process::RenderProcess;
use crate::compile::sequence::compose_sequence;
use crate::compile::source::compile_source;
use crate::content::document::Document;
use crate::content::model::ContentNode;
use crate::foundation::error::{VsmlError, VsmlResult};
use crate::graph::arena::OpArena;
use crate::graph::plan::RenderGraph;
use crate::style::node::Order;

/// Options for [`Compiler`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CompileOpts {
    /// Compile sibling subtrees on a worker pool.
    pub parallel: bool,
    /// Worker count when `parallel` is set; `None` lets rayon decide.
    pub threads: Option<usize>,
}

/// Folds a content tree bottom-up into a [`RenderGraph`].
#[derive(Clone, Debug)]
pub struct Compiler {
    ctx: RenderContext,
    opts: CompileOpts,
}

impl Compiler {
    pub fn new(ctx: RenderContext, opts: CompileOpts) -> Self {
        Self { ctx, opts }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Compile `root` and everything under it.
    ///
    /// Children are always combined in document order. When several siblings fail, the error of
    /// the first one in document order is returned and no graph is produced.
    #[tracing::instrument(skip_all, fields(parallel = self.opts.parallel, root = %root.label()))]
    pub fn compile(&self, root: &ContentNode) -> VsmlResult<RenderGraph> {
        self.ctx.fps.validate()?;
        self.ctx.resolution.validate()?;

        let arena = OpArena::new();
        let b = GraphBuilder::new(&self.ctx, &arena);
        let process = if self.opts.parallel {
            let pool = build_thread_pool(self.opts.threads)?;
            pool.install(|| compile_node(b, root, true, true))?
        } else {
            compile_node(b, root, true, false)?
        };

        let allocated = arena.len();
        let graph = RenderGraph::from_process(arena.into_ops(), &process);
        tracing::debug!(allocated, kept = graph.ops.len(), "compiled graph");
        Ok(graph)
    }
}

/// Validate `doc` and compile it, resolving relative sources against `base_path`.
pub fn compile_document(
    doc: &Document,
    base_path: impl Into<PathBuf>,
    opts: CompileOpts,
) -> VsmlResult<RenderGraph> {
    doc.validate()?;
    Compiler::new(doc.render_context(base_path), opts).compile(&doc.root)
}

fn compile_node(
    b: GraphBuilder<'_>,
    node: &ContentNode,
    is_root: bool,
    parallel: bool,
) -> VsmlResult<RenderProcess> {
    match node {
        ContentNode::Source(src) => compile_source(b, src).map_err(|e| e.in_element(src.label())),
        ContentNode::Wrap(wrap) => {
            let children: Vec<RenderProcess> = if parallel {
                let results: Vec<VsmlResult<RenderProcess>> = wrap
                    .children
                    .par_iter()
                    .map(|c| compile_node(b, c, false, true))
                    .collect();
                results.into_iter().collect::<VsmlResult<_>>()?
            } else {
                wrap.children
                    .iter()
                    .map(|c| compile_node(b, c, false, false))
                    .collect::<VsmlResult<_>>()?
            };

            let size = container_box(&wrap.style, is_root.then_some(b.ctx.resolution));
            let composed = match wrap.style.order {
                Order::Parallel => compose_parallel(b, wrap, children, size),
                Order::Sequence => compose_sequence(b, wrap, children, size),
            };
            composed.map_err(|e| e.in_element(wrap.label()))
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> VsmlResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(VsmlError::validation(
            "compile 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| VsmlError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
