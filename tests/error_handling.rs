use std::fs;
use std::path::PathBuf;

use jsondiff::{
    ActionError, CanonicalError, CanonicalizeConfig, DiffAction, DiffRequest, GENERIC_PROBLEM,
    JsonDiffAction, LocalFile, SecondFileProblem, SelectionConfig, SelectionError,
    canonicalize_str,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn cancel(_: &LocalFile) -> Option<LocalFile> {
    None
}

#[test]
fn truncated_object_is_a_parse_error() {
    let err = canonicalize_str(r#"{"a":"#, &CanonicalizeConfig::default()).unwrap_err();
    assert!(matches!(err, CanonicalError::Parse { .. }));
}

#[test]
fn malformed_file_on_either_side_yields_generic_error() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.json", r#"{"a":1}"#);
    let bad = write(&dir, "bad.json", r#"{"a":"#);
    let action = JsonDiffAction::default();

    let left_bad = [LocalFile::new(&bad), LocalFile::new(&good)];
    let right_bad = [LocalFile::new(&good), LocalFile::new(&bad)];

    for files in [left_bad, right_bad] {
        let request = action.build_result(&files[..], &cancel);
        assert_eq!(request, DiffRequest::error(GENERIC_PROBLEM));
    }
}

#[test]
fn trailing_content_after_document_is_rejected() {
    let dir = TempDir::new().unwrap();
    let files = [
        LocalFile::new(write(&dir, "a.json", "{} {}")),
        LocalFile::new(write(&dir, "b.json", "{}")),
    ];
    let err = JsonDiffAction::default()
        .try_build(&files[..], &cancel)
        .unwrap_err();
    assert!(matches!(
        err,
        ActionError::Canonical {
            source: CanonicalError::Parse { .. },
            ..
        }
    ));
    assert_eq!(err.user_message(), GENERIC_PROBLEM);
}

#[test]
fn cancelling_the_chooser_reports_second_file() {
    let dir = TempDir::new().unwrap();
    let files = [LocalFile::new(write(&dir, "a.json", "{}"))];
    let request = JsonDiffAction::default().build_result(&files[..], &cancel);
    assert_eq!(request, DiffRequest::error("Problem with second JSON file"));
}

#[test]
fn unusable_second_pick_reports_second_file() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "a.json", "{}");
    let empty = write(&dir, "empty.json", "");
    let text = write(&dir, "notes.txt", "{}");
    let folder = dir.path().join("folder.json");
    fs::create_dir(&folder).unwrap();
    let missing = dir.path().join("missing.json");

    let cases = [
        (empty, SecondFileProblem::Empty),
        (text, SecondFileProblem::NotJson),
        (folder, SecondFileProblem::Directory),
        (missing, SecondFileProblem::Missing),
    ];

    let action = JsonDiffAction::default();
    let files = [LocalFile::new(&first)];
    for (pick, expected) in cases {
        let chooser = |_: &LocalFile| Some(LocalFile::new(&pick));
        let err = action.try_build(&files[..], &chooser).unwrap_err();
        assert!(
            matches!(
                &err,
                ActionError::Selection(SelectionError::SecondFileUnresolved(problem))
                    if *problem == expected
            ),
            "unexpected error {err:?}"
        );
        assert_eq!(err.user_message(), "Problem with second JSON file");
    }
}

#[test]
fn empty_second_file_reaches_parser_when_allowed() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "a.json", "{}");
    let empty = write(&dir, "empty.json", "");

    let action = JsonDiffAction::new(
        CanonicalizeConfig::default(),
        SelectionConfig {
            reject_empty_files: false,
            ..SelectionConfig::default()
        },
    );
    let chooser = |_: &LocalFile| Some(LocalFile::new(&empty));
    let request = action.build_result(&[LocalFile::new(&first)][..], &chooser);
    assert_eq!(request, DiffRequest::error(GENERIC_PROBLEM));
}

#[test]
fn first_file_deleted_while_choosing_reports_first_file() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "a.json", "{}");
    let second = write(&dir, "b.json", "{}");

    let chooser = |_: &LocalFile| {
        fs::remove_file(&first).expect("remove first file");
        Some(LocalFile::new(&second))
    };
    let request = JsonDiffAction::default().build_result(&[LocalFile::new(&first)][..], &chooser);
    assert_eq!(request, DiffRequest::error("Problem with first JSON file"));
}

#[test]
fn object_root_can_be_required() {
    let dir = TempDir::new().unwrap();
    let files = [
        LocalFile::new(write(&dir, "a.json", "[1,2]")),
        LocalFile::new(write(&dir, "b.json", "{}")),
    ];
    let action = JsonDiffAction::new(
        CanonicalizeConfig {
            require_object_root: true,
            ..CanonicalizeConfig::default()
        },
        SelectionConfig::default(),
    );

    let err = action.try_build(&files[..], &cancel).unwrap_err();
    assert!(matches!(
        err,
        ActionError::Canonical {
            source: CanonicalError::NonObjectRoot,
            ..
        }
    ));
}

#[test]
fn oversized_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let files = [
        LocalFile::new(write(&dir, "a.json", r#"{"payload":"0123456789"}"#)),
        LocalFile::new(write(&dir, "b.json", "{}")),
    ];
    let action = JsonDiffAction::new(
        CanonicalizeConfig {
            max_input_bytes: Some(8),
            ..CanonicalizeConfig::default()
        },
        SelectionConfig::default(),
    );

    let err = action.try_build(&files[..], &cancel).unwrap_err();
    assert!(matches!(
        err,
        ActionError::Canonical {
            source: CanonicalError::InputTooLarge { limit: 8, .. },
            ..
        }
    ));
}
