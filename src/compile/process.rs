use crate::foundation::error::{VsmlError, VsmlResult};
use crate::graph::ops::OpId;
use crate::style::node::StyleNode;

/// Compiled output of one content node.
///
/// Produced once per node and moved into its parent compositor; never shared.
#[derive(Debug, PartialEq)]
pub struct RenderProcess {
    pub video: Option<OpId>,
    pub audio: Option<OpId>,
    pub style: StyleNode,
    /// Statically known span of the output in seconds, `None` when only the renderer can tell.
    pub duration: Option<f64>,
}

impl RenderProcess {
    /// Build a process, rejecting one with neither stream.
    pub fn new(
        element: &str,
        video: Option<OpId>,
        audio: Option<OpId>,
        style: StyleNode,
        duration: Option<f64>,
    ) -> VsmlResult<Self> {
        if video.is_none() && audio.is_none() {
            return Err(VsmlError::EmptyProcess {
                element: element.to_owned(),
            });
        }
        Ok(Self {
            video,
            audio,
            style,
            duration,
        })
    }
}
