//! JSON diff selection layer
//!
//! This is where files enter the diff action. We decide whether the current
//! selection is something the action should be offered for, and turn an
//! accepted selection into exactly two files: left and right.
//!
//! ## What we do here
//!
//! - **Gate the action** - one or two files, none of them folders, all with the
//!   `.json` extension (case-insensitive)
//! - **Keep order** - with two files, the first selected is the left side
//! - **Ask for a second file** - with one file, an injected [`FileChooser`]
//!   blocks until the user picks or cancels
//! - **Re-check after the dialog** - the picked file must be usable, and the
//!   first file must still exist once the modal dialog closes
//! - **Log everything** - structured `tracing` events for both outcomes
//!
//! ## Example
//!
//! ```
//! use selection::{is_applicable, LocalFile, SelectionConfig};
//!
//! let cfg = SelectionConfig::default();
//! let pair = vec![LocalFile::new("a.json"), LocalFile::new("b.JSON")];
//! assert!(is_applicable(&pair, &cfg));
//!
//! let mixed = vec![LocalFile::new("a.json"), LocalFile::new("notes.txt")];
//! assert!(!is_applicable(&mixed, &cfg));
//! ```
use tracing::{info, warn, Level};

mod chooser;
mod config;
mod error;
mod file;

pub use crate::chooser::FileChooser;
pub use crate::config::{ConfigError, SelectionConfig};
pub use crate::error::{SecondFileProblem, SelectionError};
pub use crate::file::{FileReference, LocalFile};

/// The two sides of a diff, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs<F> {
    pub left: F,
    pub right: F,
    /// True when `right` came from the chooser rather than the selection.
    pub chosen_interactively: bool,
}

/// True when `file` is a regular file whose extension matches the configured
/// one, ignoring ASCII case.
pub fn is_json_file<F: FileReference>(file: &F, cfg: &SelectionConfig) -> bool {
    if file.is_directory() {
        return false;
    }
    file.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(&cfg.extension))
}

/// Whether the action should be offered for `candidates`.
///
/// Empty selections and selections larger than `cfg.max_candidates` are never
/// applicable; otherwise every candidate must pass [`is_json_file`].
pub fn is_applicable<F: FileReference>(candidates: &[F], cfg: &SelectionConfig) -> bool {
    if candidates.is_empty() || candidates.len() > cfg.max_candidates {
        return false;
    }
    candidates.iter().all(|file| is_json_file(file, cfg))
}

/// Resolves the selection into a left and a right file.
///
/// Two candidates are used as given. A single candidate becomes the left side
/// and the chooser supplies the right side; the call blocks for as long as the
/// chooser does.
pub fn resolve_inputs<F, C>(
    candidates: &[F],
    chooser: &C,
    cfg: &SelectionConfig,
) -> Result<ResolvedInputs<F>, SelectionError>
where
    F: FileReference + Clone,
    C: FileChooser<F> + ?Sized,
{
    let span = tracing::span!(
        Level::INFO,
        "selection.resolve",
        candidates = candidates.len()
    );
    let _guard = span.enter();

    match resolve_inner(candidates, chooser, cfg) {
        Ok(inputs) => {
            info!(
                left = %inputs.left.path().display(),
                right = %inputs.right.path().display(),
                interactive = inputs.chosen_interactively,
                "selection_resolved"
            );
            Ok(inputs)
        }
        Err(err) => {
            warn!(error = %err.detail(), "selection_failure");
            Err(err)
        }
    }
}

fn resolve_inner<F, C>(
    candidates: &[F],
    chooser: &C,
    cfg: &SelectionConfig,
) -> Result<ResolvedInputs<F>, SelectionError>
where
    F: FileReference + Clone,
    C: FileChooser<F> + ?Sized,
{
    if !is_applicable(candidates, cfg) {
        return Err(SelectionError::NotApplicable {
            count: candidates.len(),
        });
    }

    match candidates {
        [left, right] => Ok(ResolvedInputs {
            left: left.clone(),
            right: right.clone(),
            chosen_interactively: false,
        }),
        [left] => {
            let right = chooser
                .choose(left)
                .ok_or(SelectionError::SecondFileUnresolved(
                    SecondFileProblem::Cancelled,
                ))?;
            check_second_file(&right, cfg)?;

            // The modal dialog may have given the host time to delete or move
            // the first file.
            if !left.is_valid() {
                return Err(SelectionError::FirstFileInvalidated);
            }

            Ok(ResolvedInputs {
                left: left.clone(),
                right,
                chosen_interactively: true,
            })
        }
        _ => Err(SelectionError::NotApplicable {
            count: candidates.len(),
        }),
    }
}

fn check_second_file<F: FileReference>(
    file: &F,
    cfg: &SelectionConfig,
) -> Result<(), SelectionError> {
    let problem = if !file.is_valid() {
        Some(SecondFileProblem::Missing)
    } else if file.is_directory() {
        Some(SecondFileProblem::Directory)
    } else if !file.is_readable() {
        Some(SecondFileProblem::Unreadable)
    } else if cfg.reject_empty_files && file.is_empty() {
        Some(SecondFileProblem::Empty)
    } else if !is_json_file(file, cfg) {
        Some(SecondFileProblem::NotJson)
    } else {
        None
    };

    match problem {
        Some(problem) => Err(SelectionError::SecondFileUnresolved(problem)),
        None => Ok(()),
    }
}
