use serde::Serialize;

use crate::compile::process::RenderProcess;
use crate::graph::ops::{Op, OpId};

/// Finished operation graph handed to a [`GraphBackend`](crate::backend::GraphBackend).
///
/// Only operations reachable from the outputs are kept. They are numbered in post-order from
/// the video output then the audio output, so every input precedes its consumer and the
/// numbering does not depend on the order in which the arena was filled.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderGraph {
    pub ops: Vec<Op>,
    pub video: Option<OpId>,
    pub audio: Option<OpId>,
    /// Statically known output span in seconds.
    pub duration: Option<f64>,
}

impl RenderGraph {
    /// Collect and renumber everything `root` depends on out of `arena_ops`.
    pub fn from_process(arena_ops: Vec<Op>, root: &RenderProcess) -> Self {
        let mut remap: Vec<Option<OpId>> = vec![None; arena_ops.len()];
        let mut ops = Vec::new();

        let mut visit = |start: OpId, ops: &mut Vec<Op>| -> OpId {
            let mut stack = vec![(start, false)];
            while let Some((id, expanded)) = stack.pop() {
                let idx = id.0 as usize;
                if remap[idx].is_some() {
                    continue;
                }
                let op = &arena_ops[idx];
                if expanded {
                    let new = op.map_inputs(|i| remap[i.0 as usize].unwrap_or(i));
                    remap[idx] = Some(OpId(ops.len() as u32));
                    ops.push(new);
                } else {
                    stack.push((id, true));
                    stack.extend(op.inputs().iter().rev().map(|i| (*i, false)));
                }
            }
            remap[start.0 as usize].unwrap_or(start)
        };

        let video = root.video.map(|v| visit(v, &mut ops));
        let audio = root.audio.map(|a| visit(a, &mut ops));

        Self {
            ops,
            video,
            audio,
            duration: root.duration,
        }
    }

    pub fn op(&self, id: OpId) -> Option<&Op> {
        self.ops.get(id.0 as usize)
    }

    /// Deterministic text listing, stable across runs and thread counts.
    pub fn dump(&self) -> String {
        let mut s = String::new();
        s.push_str("RenderGraph\n");
        s.push_str(&format!("ops: {}\n", self.ops.len()));
        for (i, op) in self.ops.iter().enumerate() {
            s.push_str(&format!("  O{i}: {op}\n"));
        }
        let out = |o: Option<OpId>| o.map_or_else(|| "-".to_owned(), |o| o.to_string());
        s.push_str(&format!(
            "outputs: video={} audio={}\n",
            out(self.video),
            out(self.audio)
        ));
        match self.duration {
            Some(d) => s.push_str(&format!("duration: {d}s\n")),
            None => s.push_str("duration: open\n"),
        }
        s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/plan.rs"]
mod tests;
