//! The JSON diff action.
//!
//! A host adapter asks three things of an action: should it be offered for
//! this selection, what is it called, and what should the diff viewer show
//! once the user triggers it. [`DiffAction`] is that contract;
//! [`JsonDiffAction`] answers it by resolving two files, canonicalizing each
//! independently and packaging both texts with their titles.
//!
//! Failures never escape [`DiffAction::build_result`]. They come back as a
//! [`DiffRequest::Error`] whose message is fit for a dialog, while the full
//! cause goes to the log.

use std::fmt;
use std::io;
use std::path::PathBuf;

use canonical::{CanonicalDocument, CanonicalError, CanonicalizeConfig};
use selection::{
    FileChooser, FileReference, SecondFileProblem, SelectionConfig, SelectionError, resolve_inputs,
};
use thiserror::Error;
use tracing::{Level, info, warn};

use crate::config::{ActionLabels, JsonDiffConfig};
use crate::request::{DiffRequest, SimpleDiffRequest};
use crate::title::{PathTitles, TitleGenerator};

/// Shown when either document cannot be read or canonicalized. The failing
/// side is not named.
pub const GENERIC_PROBLEM: &str = "Problem with one of the JSON files";

/// Capabilities a host adapter invokes on a diff action.
pub trait DiffAction<F> {
    /// Whether the action should be offered for `selection`.
    fn is_applicable(&self, selection: &[F]) -> bool;

    /// Menu text for `selection`.
    fn label(&self, selection: &[F]) -> &str;

    /// Runs the action. Blocks while `chooser` is open.
    fn build_result(&self, selection: &[F], chooser: &dyn FileChooser<F>) -> DiffRequest;
}

/// Which side of the diff a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Why an invocation produced an error placeholder.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("failed to read {side} file {}: {source}", path.display())]
    Read {
        side: Side,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to canonicalize {side} file {}: {source}", path.display())]
    Canonical {
        side: Side,
        path: PathBuf,
        #[source]
        source: CanonicalError,
    },
}

impl ActionError {
    /// Text for the error placeholder.
    ///
    /// Selection problems name the file at fault; read and parse problems on
    /// either side share [`GENERIC_PROBLEM`].
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Selection(
                err @ (SelectionError::SecondFileUnresolved(_)
                | SelectionError::FirstFileInvalidated),
            ) => err.to_string(),
            _ => GENERIC_PROBLEM.to_string(),
        }
    }

    /// Full cause for logs.
    pub fn detail(&self) -> String {
        match self {
            ActionError::Selection(err) => err.detail(),
            other => other.to_string(),
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            ActionError::Selection(_) => None,
            ActionError::Read { side, .. } | ActionError::Canonical { side, .. } => Some(*side),
        }
    }
}

/// Compares two JSON files after sorting their keys at every level.
#[derive(Debug, Clone)]
pub struct JsonDiffAction<T = PathTitles> {
    canonical: CanonicalizeConfig,
    selection: SelectionConfig,
    labels: ActionLabels,
    titles: T,
}

impl JsonDiffAction<PathTitles> {
    pub fn new(canonical: CanonicalizeConfig, selection: SelectionConfig) -> Self {
        Self {
            canonical,
            selection,
            labels: ActionLabels::default(),
            titles: PathTitles::default(),
        }
    }

    pub fn from_config(config: &JsonDiffConfig) -> Self {
        Self {
            canonical: config.canonicalize_config(),
            selection: config.selection_config(),
            labels: config.presentation.labels(),
            titles: config.presentation.titles(),
        }
    }
}

impl Default for JsonDiffAction<PathTitles> {
    fn default() -> Self {
        Self::new(CanonicalizeConfig::default(), SelectionConfig::default())
    }
}

impl<T: TitleGenerator> JsonDiffAction<T> {
    /// Swaps in host-provided title formatting.
    pub fn with_titles<U: TitleGenerator>(self, titles: U) -> JsonDiffAction<U> {
        JsonDiffAction {
            canonical: self.canonical,
            selection: self.selection,
            labels: self.labels,
            titles,
        }
    }

    pub fn with_labels(mut self, labels: ActionLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn selection_config(&self) -> &SelectionConfig {
        &self.selection
    }

    /// Same as [`DiffAction::build_result`] but keeps the error value.
    pub fn try_build<F, C>(
        &self,
        files: &[F],
        chooser: &C,
    ) -> Result<SimpleDiffRequest, ActionError>
    where
        F: FileReference + Clone,
        C: FileChooser<F> + ?Sized,
    {
        let inputs = resolve_inputs(files, chooser, &self.selection)?;

        let left = self.canonicalize_side(&inputs.left, Side::Left)?;
        let right = match self.canonicalize_side(&inputs.right, Side::Right) {
            // A picked file that cannot be read is a selection problem, even
            // when it looked readable to the chooser.
            Err(ActionError::Read { source, .. }) if inputs.chosen_interactively => {
                warn!(
                    path = %inputs.right.path().display(),
                    error = %source,
                    "picked_file_unreadable"
                );
                return Err(
                    SelectionError::SecondFileUnresolved(SecondFileProblem::Unreadable).into(),
                );
            }
            other => other?,
        };

        let (left_path, right_path) = (inputs.left.path(), inputs.right.path());
        Ok(SimpleDiffRequest {
            main_title: self.titles.main_title(left_path, right_path),
            left_content: left.canonical_text,
            left_title: self.titles.content_title(left_path),
            right_content: right.canonical_text,
            right_title: self.titles.content_title(right_path),
        })
    }

    fn canonicalize_side<F: FileReference>(
        &self,
        file: &F,
        side: Side,
    ) -> Result<CanonicalDocument, ActionError> {
        let raw = file.contents().map_err(|source| ActionError::Read {
            side,
            path: file.path().to_path_buf(),
            source,
        })?;

        canonical::canonicalize(&raw, file.charset(), &self.canonical).map_err(|source| {
            ActionError::Canonical {
                side,
                path: file.path().to_path_buf(),
                source,
            }
        })
    }
}

impl<F, T> DiffAction<F> for JsonDiffAction<T>
where
    F: FileReference + Clone,
    T: TitleGenerator,
{
    fn is_applicable(&self, files: &[F]) -> bool {
        selection::is_applicable(files, &self.selection)
    }

    fn label(&self, files: &[F]) -> &str {
        if files.len() == 1 {
            &self.labels.single_file
        } else {
            &self.labels.two_files
        }
    }

    fn build_result(&self, files: &[F], chooser: &dyn FileChooser<F>) -> DiffRequest {
        let span = tracing::span!(Level::INFO, "action.build", candidates = files.len());
        let _guard = span.enter();

        match self.try_build(files, chooser) {
            Ok(request) => {
                info!(
                    main_title = %request.main_title,
                    identical = request.is_identical(),
                    "diff_request_ready"
                );
                DiffRequest::Simple(request)
            }
            Err(err) => {
                warn!(
                    side = ?err.side(),
                    error = %err.detail(),
                    "diff_request_failure"
                );
                DiffRequest::error(err.user_message())
            }
        }
    }
}
