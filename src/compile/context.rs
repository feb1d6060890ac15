use std::path::PathBuf;

use crate::foundation::core::{Fps, Resolution};

/// Document-wide settings threaded through every compile step.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderContext {
    pub fps: Fps,
    /// Output resolution; used for the root canvas when its size is not concrete.
    pub resolution: Resolution,
    /// Directory that relative source paths are joined onto.
    pub base_path: PathBuf,
}

impl RenderContext {
    pub fn new(fps: Fps, resolution: Resolution) -> Self {
        Self {
            fps,
            resolution,
            base_path: PathBuf::new(),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub(crate) fn resolve_path(&self, src: &str) -> PathBuf {
        crate::foundation::core::join_relative(&self.base_path, src)
    }
}
