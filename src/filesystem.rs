//! Filesystem existence guards.
//!
//! Existence is answered by a [`FileSystem`], so tests and sandboxed callers
//! can substitute their own view. [`StdFileSystem`] asks the operating
//! system. A blank path is rejected as [`ErrorKind::BadArgument`] before
//! the filesystem is consulted.

use crate::messages::{render, MessageKey};
use crate::presence::Whitespace;
use crate::{ErrorKind, GateState, Guard, GuardError};
use std::path::Path;

// ============================================================================
// FileSystem
// ============================================================================

/// Read-only existence queries.
pub trait FileSystem {
    /// Whether `path` names an existing directory.
    fn directory_exists(&self, path: &Path) -> bool;

    /// Whether `path` names an existing regular file.
    fn file_exists(&self, path: &Path) -> bool;
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    #[inline]
    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[inline]
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    #[inline]
    fn directory_exists(&self, path: &Path) -> bool {
        (**self).directory_exists(path)
    }

    #[inline]
    fn file_exists(&self, path: &Path) -> bool {
        (**self).file_exists(path)
    }
}

// ============================================================================
// Guards
// ============================================================================

impl<'a, T, E, G> Guard<'a, T, E, G>
where
    T: AsRef<Path>,
    E: From<GuardError>,
    G: GateState<'a>,
{
    fn check_exists<X>(self, exists: X, kind: ErrorKind, key: MessageKey) -> Result<T, E>
    where
        X: FnOnce(&Path) -> bool,
    {
        let (value, mut violation) = self.into_parts()?;
        let path = value.as_ref();

        if path.is_blank() {
            if violation.fires(true) {
                return Err(violation.raise(ErrorKind::BadArgument, || {
                    render(MessageKey::StrWhitespace, &[])
                }));
            }
            return Ok(value);
        }

        if violation.fires(!exists(path)) {
            let shown = path.display().to_string();
            return Err(violation.raise_with(
                kind,
                || render(key, &[&shown]),
                |err| err.with_context("path", shown.clone()),
            ));
        }
        Ok(value)
    }

    /// Raise [`ErrorKind::DirectoryNotFound`] unless the path is an existing
    /// directory.
    #[inline]
    pub fn if_directory_not_found(self) -> Result<T, E> {
        self.if_directory_not_found_in(&StdFileSystem)
    }

    /// [`if_directory_not_found`](Self::if_directory_not_found) against `fs`.
    pub fn if_directory_not_found_in<F>(self, fs: &F) -> Result<T, E>
    where
        F: FileSystem + ?Sized,
    {
        self.check_exists(
            |p| fs.directory_exists(p),
            ErrorKind::DirectoryNotFound,
            MessageKey::DirectoryNotFoundPath,
        )
    }

    /// Raise [`ErrorKind::FileNotFound`] unless the path is an existing file.
    #[inline]
    pub fn if_file_not_found(self) -> Result<T, E> {
        self.if_file_not_found_in(&StdFileSystem)
    }

    /// [`if_file_not_found`](Self::if_file_not_found) against `fs`.
    pub fn if_file_not_found_in<F>(self, fs: &F) -> Result<T, E>
    where
        F: FileSystem + ?Sized,
    {
        self.check_exists(
            |p| fs.file_exists(p),
            ErrorKind::FileNotFound,
            MessageKey::FileNotFoundPath,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard;
    use std::cell::Cell;
    use std::fs;
    use std::path::PathBuf;

    struct Fixed {
        dirs: bool,
        files: bool,
        queries: Cell<usize>,
    }

    impl FileSystem for Fixed {
        fn directory_exists(&self, _: &Path) -> bool {
            self.queries.set(self.queries.get() + 1);
            self.dirs
        }

        fn file_exists(&self, _: &Path) -> bool {
            self.queries.set(self.queries.get() + 1);
            self.files
        }
    }

    fn fixed(dirs: bool, files: bool) -> Fixed {
        Fixed { dirs, files, queries: Cell::new(0) }
    }

    #[test]
    fn existing_directory_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_path_buf();
        assert_eq!(Guard::new(path.clone()).if_directory_not_found().unwrap(), path);
    }

    #[test]
    fn missing_directory_raises_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("missing");
        let err = guard!(data_dir).if_directory_not_found().unwrap_err();

        let shown = dir.path().join("missing").display().to_string();
        assert_eq!(err.kind(), ErrorKind::DirectoryNotFound);
        assert_eq!(err.arg_name(), Some("data_dir"));
        assert_eq!(err.context("path"), Some(shown.as_str()));
        assert_eq!(err.message(), format!("directory '{shown}' not found"));
    }

    #[test]
    fn file_checks() {
        let dir = tempfile::tempdir().unwrap();
        let file: PathBuf = dir.path().join("app.toml");
        fs::write(&file, "x = 1").unwrap();

        assert!(Guard::new(&file).if_file_not_found().is_ok());
        assert!(Guard::new(dir.path()).if_file_not_found().is_err());

        let err = Guard::new(file.with_extension("yaml")).if_file_not_found().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.context("path").is_some_and(|p| p.ends_with("app.yaml")));
    }

    #[test]
    fn blank_path_is_bad_argument_without_lookup() {
        let fs = fixed(true, true);
        let err = Guard::new("  ").if_directory_not_found_in(&fs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadArgument);
        assert_eq!(err.message(), "string is empty or whitespace");
        assert_eq!(fs.queries.get(), 0);

        let err = Guard::new(String::new()).if_file_not_found_in(&fs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadArgument);
    }

    #[test]
    fn substitute_filesystem() {
        let fs = fixed(false, true);
        assert!(Guard::new("/srv/data").if_directory_not_found_in(&fs).is_err());
        assert!(Guard::new("/srv/data").if_file_not_found_in(&fs).is_ok());
        assert_eq!(fs.queries.get(), 2);
    }

    #[test]
    fn closed_gate_passes_missing_and_blank_paths() {
        let fs = fixed(false, false);
        assert!(Guard::new("").when(|| false).if_file_not_found_in(&fs).is_ok());
        assert!(Guard::new("/nope").when(|| false).if_file_not_found_in(&fs).is_ok());
        assert!(Guard::new("/nope").when(|| true).if_file_not_found_in(&fs).is_err());
    }
}
