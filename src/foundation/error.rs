/// Convenience result type used across the compiler.
pub type VsmlResult<T> = Result<T, VsmlError>;

/// Top-level error taxonomy.
///
/// Every variant is fatal: compilation is a deterministic transform, so nothing is retried and no
/// partial graph is produced once an error surfaces.
#[derive(thiserror::Error, Debug)]
pub enum VsmlError {
    /// A unit literal did not match its grammar.
    #[error("invalid {kind} value '{literal}'")]
    ValueParse {
        /// Value family (`time`, `graphic`, `color`, ...).
        kind: &'static str,
        /// Offending literal as written in the document.
        literal: String,
    },

    /// Unknown leaf media kind.
    #[error("unsupported media kind '{0}'")]
    UnsupportedMediaKind(String),

    /// Unknown container layer mode.
    #[error("unsupported layer mode '{0}'")]
    UnsupportedLayerMode(String),

    /// Unknown container order.
    #[error("unsupported order '{0}'")]
    UnsupportedOrder(String),

    /// Failure attributed to a specific element.
    #[error("element '{element}': {source}")]
    Element {
        /// Identity of the owning element.
        element: String,
        /// Underlying failure.
        #[source]
        source: Box<VsmlError>,
    },

    /// A sequence child has no statically known span but is followed by other children.
    #[error("element '{element}' has no determinable duration inside a sequence")]
    IndeterminateDuration {
        /// Identity of the element whose span is unknown.
        element: String,
    },

    /// A node produced neither a video nor an audio stream.
    #[error("element '{element}' produces neither video nor audio")]
    EmptyProcess {
        /// Identity of the empty element.
        element: String,
    },

    /// Invalid user-provided or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VsmlError {
    /// Build a [`VsmlError::ValueParse`] value.
    pub fn value_parse(kind: &'static str, literal: impl Into<String>) -> Self {
        Self::ValueParse {
            kind,
            literal: literal.into(),
        }
    }

    /// Build a [`VsmlError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VsmlError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Attribute this error to `element`.
    ///
    /// Errors already attributed to an element keep the innermost identity.
    pub fn in_element(self, element: impl Into<String>) -> Self {
        match self {
            Self::Element { .. } | Self::IndeterminateDuration { .. } | Self::EmptyProcess { .. } => {
                self
            }
            other => Self::Element {
                element: element.into(),
                source: Box::new(other),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
