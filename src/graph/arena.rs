use std::sync::{Mutex, PoisonError};

use crate::graph::ops::{Op, OpId};

/// Append-only operation store shared by every compile step.
///
/// Allocation takes a short lock, so sibling subtrees may push concurrently. Ids reflect
/// allocation order only; [`RenderGraph`](crate::graph::plan::RenderGraph) renumbers them.
#[derive(Debug, Default)]
pub struct OpArena {
    ops: Mutex<Vec<Op>>,
}

impl OpArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `op` and return its handle.
    pub fn push(&self, op: Op) -> OpId {
        let mut ops = self.ops.lock().unwrap_or_else(PoisonError::into_inner);
        let id = OpId(ops.len() as u32);
        ops.push(op);
        id
    }

    pub fn len(&self) -> usize {
        self.ops.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the stored operations, indexed by [`OpId`].
    pub fn into_ops(self) -> Vec<Op> {
        self.ops.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
