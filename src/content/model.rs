use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{VsmlError, VsmlResult};
use crate::style::node::StyleNode;

/// Media kind of a leaf element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SourceKind {
    Image,
    Video,
    Audio,
    Text,
}

impl SourceKind {
    /// `true` when ingestion yields a visual stream.
    pub fn has_video(self) -> bool {
        !matches!(self, Self::Audio)
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Image => "img",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Text => "txt",
        }
    }
}

impl FromStr for SourceKind {
    type Err = VsmlError;

    fn from_str(s: &str) -> VsmlResult<Self> {
        match s.trim() {
            "img" | "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "txt" | "text" => Ok(Self::Text),
            other => Err(VsmlError::UnsupportedMediaKind(other.to_owned())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for SourceKind {
    type Error = VsmlError;

    fn try_from(s: String) -> VsmlResult<Self> {
        s.parse()
    }
}

impl From<SourceKind> for String {
    fn from(k: SourceKind) -> Self {
        k.as_str().to_owned()
    }
}

/// One element of the composition tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentNode {
    /// Media-referencing leaf.
    Source(SourceContent),
    /// Ordering/layout container.
    Wrap(WrapContent),
}

impl ContentNode {
    pub fn style(&self) -> &StyleNode {
        match self {
            Self::Source(s) => &s.style,
            Self::Wrap(w) => &w.style,
        }
    }

    pub fn has_video(&self) -> bool {
        match self {
            Self::Source(s) => s.kind.has_video(),
            Self::Wrap(w) => w.has_video,
        }
    }

    pub fn has_audio(&self) -> bool {
        match self {
            Self::Source(s) => s.has_audio(),
            Self::Wrap(w) => w.has_audio,
        }
    }

    /// Human-readable identity used in diagnostics.
    pub fn label(&self) -> String {
        match self {
            Self::Source(s) => s.label(),
            Self::Wrap(w) => w.label(),
        }
    }
}

/// Leaf element: a file reference, or literal text for [`SourceKind::Text`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Path of the media file, or the text itself for text leaves.
    pub src: String,
    pub kind: SourceKind,
    /// Whether the file carries an audio stream (only read for video leaves).
    #[serde(default)]
    pub has_audio: bool,
    #[serde(default)]
    pub style: StyleNode,
}

impl SourceContent {
    pub fn new(kind: SourceKind, src: impl Into<String>, style: StyleNode) -> Self {
        Self {
            id: None,
            src: src.into(),
            kind,
            has_audio: kind == SourceKind::Audio,
            style,
        }
    }

    /// Builder-style id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder-style audio flag for video leaves.
    pub fn with_audio(mut self, has_audio: bool) -> Self {
        self.has_audio = has_audio;
        self
    }

    /// Audio leaves always carry audio; images and text never do.
    pub fn has_audio(&self) -> bool {
        match self.kind {
            SourceKind::Audio => true,
            SourceKind::Video => self.has_audio,
            SourceKind::Image | SourceKind::Text => false,
        }
    }

    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("{}:{}", self.kind, self.src),
        }
    }
}

/// Container element. Presence flags aggregate the children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "WrapDef")]
pub struct WrapContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub children: Vec<ContentNode>,
    pub has_video: bool,
    pub has_audio: bool,
    pub style: StyleNode,
}

#[derive(Deserialize)]
struct WrapDef {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    children: Vec<ContentNode>,
    #[serde(default)]
    has_video: Option<bool>,
    #[serde(default)]
    has_audio: Option<bool>,
    #[serde(default)]
    style: StyleNode,
}

impl From<WrapDef> for WrapContent {
    fn from(def: WrapDef) -> Self {
        let mut wrap = WrapContent::new(def.children, def.style);
        wrap.id = def.id;
        if let Some(v) = def.has_video {
            wrap.has_video = v;
        }
        if let Some(a) = def.has_audio {
            wrap.has_audio = a;
        }
        wrap
    }
}

impl WrapContent {
    /// Container with presence flags computed from `children`.
    pub fn new(children: Vec<ContentNode>, style: StyleNode) -> Self {
        let has_video = children.iter().any(ContentNode::has_video);
        let has_audio = children.iter().any(ContentNode::has_audio);
        Self {
            id: None,
            children,
            has_video,
            has_audio,
            style,
        }
    }

    /// Builder-style id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("wrap[{}]", self.children.len()),
        }
    }
}

impl From<SourceContent> for ContentNode {
    fn from(s: SourceContent) -> Self {
        Self::Source(s)
    }
}

impl From<WrapContent> for ContentNode {
    fn from(w: WrapContent) -> Self {
        Self::Wrap(w)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
