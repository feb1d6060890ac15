use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::compile::context::RenderContext;
use crate::content::model::{ContentNode, SourceKind};
use crate::foundation::core::{Fps, Resolution};
use crate::foundation::error::{VsmlError, VsmlResult};

/// A loaded, style-resolved composition: global settings plus the content tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub fps: Fps,
    pub resolution: Resolution,
    pub root: ContentNode,
}

impl Document {
    /// Parse a document from JSON.
    ///
    /// A malformed element is reported under the identity of the innermost node that fails to
    /// parse on its own.
    pub fn from_reader<R: std::io::Read>(r: R) -> VsmlResult<Self> {
        let value: Value = serde_json::from_reader(r)
            .map_err(|e| VsmlError::serde(format!("parse document JSON: {e}")))?;
        Self::deserialize(&value).map_err(|e| {
            let err = VsmlError::serde(format!("parse document JSON: {e}"));
            match value.get("root").and_then(failing_element) {
                Some(label) => err.in_element(label),
                None => err,
            }
        })
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> VsmlResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            VsmlError::validation(format!("open document JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check global settings and per-node numeric attributes.
    pub fn validate(&self) -> VsmlResult<()> {
        self.fps.validate()?;
        self.resolution.validate()?;
        validate_node(&self.root)
    }

    /// Context for compiling this document, resolving relative sources against `base_path`.
    pub fn render_context(&self, base_path: impl Into<PathBuf>) -> RenderContext {
        RenderContext::new(self.fps, self.resolution).with_base_path(base_path)
    }
}

/// Label of the deepest node in `node` that does not deserialize.
fn failing_element(node: &Value) -> Option<String> {
    let (tag, body) = node.as_object()?.iter().next()?;
    let children = body.get("children").and_then(Value::as_array);
    if let Some(label) = children.into_iter().flatten().find_map(failing_element) {
        return Some(label);
    }
    ContentNode::deserialize(node)
        .is_err()
        .then(|| raw_label(tag, body))
}

/// Same identity as [`ContentNode::label`], read from unparsed JSON.
fn raw_label(tag: &str, body: &Value) -> String {
    if let Some(id) = body.get("id").and_then(Value::as_str) {
        return id.to_owned();
    }
    let field = |k: &str| body.get(k).and_then(Value::as_str).unwrap_or("?");
    match tag {
        "source" => {
            let kind = field("kind");
            let kind = kind
                .parse::<SourceKind>()
                .map_or_else(|_| kind.to_owned(), |k| k.to_string());
            format!("{kind}:{}", field("src"))
        }
        _ => {
            let n = body
                .get("children")
                .and_then(Value::as_array)
                .map_or(0, Vec::len);
            format!("wrap[{n}]")
        }
    }
}

fn validate_node(node: &ContentNode) -> VsmlResult<()> {
    let style = node.style();
    if !style.audio_volume.is_finite() || style.audio_volume < 0.0 {
        return Err(VsmlError::validation(format!(
            "audio volume must be a non-negative number, got {}",
            style.audio_volume
        ))
        .in_element(node.label()));
    }
    if let ContentNode::Wrap(w) = node {
        for child in &w.children {
            validate_node(child)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/content/document.rs"]
mod tests;
