//! Workspace umbrella crate for jsondiff.
//!
//! This crate stitches together file selection and JSON canonicalization so a
//! host (IDE plugin, CLI, test harness) can compare two JSON files while
//! ignoring key order, through a single [`DiffAction`] entry point.
//!
//! ```
//! use jsondiff::{DiffAction, JsonDiffAction, LocalFile};
//!
//! let action = JsonDiffAction::default();
//! let files = vec![LocalFile::new("a.json"), LocalFile::new("b.json")];
//! assert!(action.is_applicable(&files[..]));
//! assert_eq!(action.label(&files[..]), "Compare JSON Files");
//! ```

mod action;
mod config;
mod request;
mod title;

pub use canonical::{
    CanonicalDocument, CanonicalError, CanonicalizeConfig, Charset, canonicalize,
    canonicalize_str, deep_sort, hash_text, render,
};
pub use selection::{
    FileChooser, FileReference, LocalFile, ResolvedInputs, SecondFileProblem, SelectionConfig,
    SelectionError, is_applicable, is_json_file, resolve_inputs,
};

pub use crate::action::{ActionError, DiffAction, GENERIC_PROBLEM, JsonDiffAction, Side};
pub use crate::config::{
    ActionLabels, CanonicalYamlConfig, ConfigLoadError, JsonDiffConfig, PresentationYamlConfig,
    SelectionYamlConfig,
};
pub use crate::request::{DiffRequest, ErrorDiffRequest, SimpleDiffRequest};
pub use crate::title::{PathTitles, TitleGenerator};
