//! Display titles for the diff viewer.
//!
//! Formatting belongs to the host; [`PathTitles`] is the default used when
//! the host has no opinion. Content titles read `name (parent)`; the main
//! title folds a shared parent or a shared file name so it stays short.

use std::path::Path;

/// Turns file paths into human-readable titles.
pub trait TitleGenerator {
    /// Title above one side of the diff.
    fn content_title(&self, path: &Path) -> String;

    /// Title of the whole diff window.
    fn main_title(&self, left: &Path, right: &Path) -> String;
}

/// Path-based titles joined by a separator (`" vs "` by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTitles {
    separator: String,
}

impl PathTitles {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for PathTitles {
    fn default() -> Self {
        Self::new(" vs ")
    }
}

impl TitleGenerator for PathTitles {
    fn content_title(&self, path: &Path) -> String {
        match split(path) {
            Some((name, parent)) => format!("{name} ({parent})"),
            None => path.display().to_string(),
        }
    }

    fn main_title(&self, left: &Path, right: &Path) -> String {
        let sep = &self.separator;
        match (split(left), split(right)) {
            (Some((left_name, left_parent)), Some((right_name, right_parent))) => {
                if left_parent == right_parent {
                    format!("{left_name}{sep}{right_name} ({left_parent})")
                } else if left_name == right_name {
                    format!("{left_name} ({left_parent}{sep}{right_parent})")
                } else {
                    format!("{}{sep}{}", left.display(), right.display())
                }
            }
            _ => format!("{}{sep}{}", left.display(), right.display()),
        }
    }
}

/// File name and non-empty parent, both as display strings.
fn split(path: &Path) -> Option<(String, String)> {
    let name = path.file_name()?.to_string_lossy().into_owned();
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty())?;
    Some((name, parent.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_title_shows_parent() {
        let titles = PathTitles::default();
        assert_eq!(
            titles.content_title(Path::new("/work/cfg/app.json")),
            "app.json (/work/cfg)"
        );
        assert_eq!(titles.content_title(Path::new("app.json")), "app.json");
    }

    #[test]
    fn shared_parent_is_folded() {
        let titles = PathTitles::default();
        assert_eq!(
            titles.main_title(Path::new("/w/a.json"), Path::new("/w/b.json")),
            "a.json vs b.json (/w)"
        );
    }

    #[test]
    fn shared_name_is_folded() {
        let titles = PathTitles::default();
        assert_eq!(
            titles.main_title(Path::new("/old/app.json"), Path::new("/new/app.json")),
            "app.json (/old vs /new)"
        );
    }

    #[test]
    fn unrelated_paths_are_joined() {
        let titles = PathTitles::new(" <> ");
        assert_eq!(
            titles.main_title(Path::new("/x/a.json"), Path::new("/y/b.json")),
            "/x/a.json <> /y/b.json"
        );
        assert_eq!(
            titles.main_title(Path::new("a.json"), Path::new("b.json")),
            "a.json <> b.json"
        );
    }
}
