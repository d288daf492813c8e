//! Error types for decoding and encoding, plus document path reporting.

use std::fmt;

use thiserror::Error;

/// One step in a document path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, ".{k}"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Chain of keys and indices from the document root.
///
/// Renders as `$` for the root, `$.user.tags[2]` for nested positions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path(Vec<PathSegment>);

impl Path {
    pub fn root() -> Self {
        Path(Vec::new())
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Path(segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Errors produced by the trial-decode algorithm.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// None of the candidate interpretations (scalar, sequence, keyed,
    /// unkeyed) matched at this position.
    #[error("could not decode any meaningful value at `{path}`")]
    Exhausted { path: Path },

    /// A nested recursive decode failed; the enclosing container annotates
    /// it with its own path and passes the cause through unchanged.
    #[error("decode failed inside container at `{path}`")]
    Upstream {
        path: Path,
        #[source]
        source: Box<DecodeError>,
    },

    /// Document nesting exceeded the configured recursion limit.
    #[error("nesting at `{path}` exceeds the recursion limit of {limit}")]
    DepthLimitExceeded { path: Path, limit: usize },
}

impl DecodeError {
    /// The document path at which this error was raised.
    pub fn path(&self) -> &Path {
        match self {
            DecodeError::Exhausted { path }
            | DecodeError::Upstream { path, .. }
            | DecodeError::DepthLimitExceeded { path, .. } => path,
        }
    }

    /// Wrap a failed child decode with the enclosing container's path.
    ///
    /// Already-wrapped errors pass through unchanged so the chain stays one
    /// level deep no matter how far the failure bubbles. Depth-limit errors
    /// also pass through: they abort the whole decode and are reported as
    /// themselves.
    pub(crate) fn upstream(container_path: &[PathSegment], inner: DecodeError) -> DecodeError {
        match inner {
            wrapped @ (DecodeError::Upstream { .. } | DecodeError::DepthLimitExceeded { .. }) => {
                wrapped
            }
            other => DecodeError::Upstream {
                path: Path::from(container_path.to_vec()),
                source: Box::new(other),
            },
        }
    }
}

/// Failure while decoding a document directly from JSON text or bytes:
/// either the text is not JSON at all, or the parsed document could not be
/// decoded into a value tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors produced on the encode side.
///
/// The value tree itself encodes totally; this only surfaces failures from
/// wrapped concrete values behind [`ErasedEncodable`](crate::ErasedEncodable),
/// passed through unchanged.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("wrapped value failed to encode: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EncodeError {
    /// Wrap a concrete encoder's failure.
    pub fn upstream(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        EncodeError::Upstream(Box::new(err))
    }
}
