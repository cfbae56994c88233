//! Records handed to the host's diff viewer.
//!
//! We never render anything ourselves. A successful invocation produces a
//! [`SimpleDiffRequest`] with two canonical texts and their titles; any
//! failure produces an [`ErrorDiffRequest`] the viewer shows as a placeholder.

use serde::{Deserialize, Serialize};

/// What one invocation of the action hands to the diff viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffRequest {
    Simple(SimpleDiffRequest),
    Error(ErrorDiffRequest),
}

impl DiffRequest {
    pub fn error(message: impl Into<String>) -> Self {
        DiffRequest::Error(ErrorDiffRequest {
            message: message.into(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DiffRequest::Error(_))
    }

    pub fn as_simple(&self) -> Option<&SimpleDiffRequest> {
        match self {
            DiffRequest::Simple(simple) => Some(simple),
            DiffRequest::Error(_) => None,
        }
    }
}

/// Two canonical documents plus titles, ready for side-by-side display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleDiffRequest {
    pub main_title: String,
    pub left_content: String,
    pub left_title: String,
    pub right_content: String,
    pub right_title: String,
}

impl SimpleDiffRequest {
    /// True when the viewer would show no differences.
    pub fn is_identical(&self) -> bool {
        self.left_content == self.right_content
    }
}

/// Placeholder shown instead of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDiffRequest {
    pub message: String,
}
