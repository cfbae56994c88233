//! The interactive "pick a second file" capability.
//!
//! Hosts show a modal dialog; tests pass a closure. Either way the call blocks
//! until the user picks something or cancels, and there is no timeout.

/// Lets the user pick one more file, starting from the one already known.
///
/// Implementations are expected to offer files only (no folders, no archive
/// contents), but the result is validated again regardless.
pub trait FileChooser<F> {
    /// Returns `None` when the user cancels.
    fn choose(&self, known: &F) -> Option<F>;
}

impl<F, C> FileChooser<F> for C
where
    C: Fn(&F) -> Option<F>,
{
    fn choose(&self, known: &F) -> Option<F> {
        self(known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick<F, C: FileChooser<F>>(chooser: &C, known: &F) -> Option<F> {
        chooser.choose(known)
    }

    #[test]
    fn closures_are_choosers() {
        let always = |known: &String| Some(format!("{known}.other"));
        assert_eq!(pick(&always, &"a".to_string()), Some("a.other".to_string()));

        let cancel = |_: &String| -> Option<String> { None };
        assert_eq!(pick(&cancel, &"a".to_string()), None);
    }
}
