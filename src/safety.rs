//! Symlink safety check
//!
//! Published notes are usually symlinks from the public directory into the
//! vault. A link whose target resolves outside the vault is never read.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Whether `candidate` resolves to a path inside `base`.
///
/// Both paths are resolved (symlinks followed where they exist) before the
/// comparison, which is done per path component rather than on the raw
/// string. A sibling such as `/vault-other` is therefore outside `/vault`,
/// which a plain string prefix test would accept.
pub fn is_safe_path(candidate: &Path, base: &Path) -> bool {
    let resolved = resolve(candidate);
    let base = resolve(base);
    resolved.starts_with(&base)
}

/// Canonical form of a path; paths that do not exist are made absolute and
/// normalized lexically.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = dunce::canonicalize(path) {
        return canonical;
    }
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    normalize(&absolute)
}

fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}

/// Where a source note should be read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceResolution {
    /// A regular file, read in place
    Regular(PathBuf),
    /// A symlink whose target stays inside the base directory
    Linked { link: PathBuf, target: PathBuf },
    /// A symlink pointing outside the base directory
    Escapes { link: PathBuf, target: PathBuf },
    /// A symlink whose target does not exist
    Dangling(PathBuf),
}

impl SourceResolution {
    /// Path to read, `None` when the note must be skipped
    pub fn readable_path(&self) -> Option<&Path> {
        match self {
            SourceResolution::Regular(path) => Some(path),
            SourceResolution::Linked { target, .. } => Some(target),
            SourceResolution::Escapes { .. } | SourceResolution::Dangling(_) => None,
        }
    }

    pub fn is_link(&self) -> bool {
        !matches!(self, SourceResolution::Regular(_))
    }
}

/// Resolve a source note, checking symlinks against `base`
pub fn resolve_source(path: &Path, base: &Path) -> SourceResolution {
    let is_symlink = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);

    if !is_symlink {
        return SourceResolution::Regular(path.to_path_buf());
    }

    match dunce::canonicalize(path) {
        Ok(target) if is_safe_path(&target, base) => SourceResolution::Linked {
            link: path.to_path_buf(),
            target,
        },
        Ok(target) => SourceResolution::Escapes {
            link: path.to_path_buf(),
            target,
        },
        Err(_) => SourceResolution::Dangling(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_safe_path_inside() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("vault");
        fs::create_dir_all(base.join("computer")).unwrap();
        let note = base.join("computer/note.md");
        fs::write(&note, "x").unwrap();

        assert!(is_safe_path(&note, &base));
        assert!(is_safe_path(&base, &base));
    }

    #[test]
    fn test_is_safe_path_outside() {
        let temp_dir = TempDir::new().unwrap();
        let root = dunce::canonicalize(temp_dir.path()).unwrap();
        let base = root.join("vault");
        let sibling = root.join("vault-other");
        fs::create_dir_all(&base).unwrap();
        fs::create_dir_all(&sibling).unwrap();

        assert!(!is_safe_path(&sibling, &base));
        assert!(!is_safe_path(&root, &base));
        assert!(!is_safe_path(&base.join("../vault-other/x.md"), &base));
    }

    #[test]
    fn test_is_safe_path_is_stable() {
        let temp_dir = TempDir::new().unwrap();
        let root = dunce::canonicalize(temp_dir.path()).unwrap();
        let path = root.join("a/b.md");
        let first = is_safe_path(&path, &root);
        let second = is_safe_path(&path, &root);
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
    }

    #[test]
    fn test_resolve_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let note = temp_dir.path().join("note.md");
        fs::write(&note, "x").unwrap();

        let resolution = resolve_source(&note, temp_dir.path());
        assert_eq!(resolution, SourceResolution::Regular(note.clone()));
        assert_eq!(resolution.readable_path(), Some(note.as_path()));
        assert!(!resolution.is_link());
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_symlinks() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let vault = temp_dir.path().join("vault");
        let public = vault.join("public");
        let outside = temp_dir.path().join("outside");
        fs::create_dir_all(vault.join("computer")).unwrap();
        fs::create_dir_all(&public).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(vault.join("computer/in.md"), "in").unwrap();
        fs::write(outside.join("out.md"), "out").unwrap();

        symlink(vault.join("computer/in.md"), public.join("in.md")).unwrap();
        symlink(outside.join("out.md"), public.join("out.md")).unwrap();
        symlink(vault.join("missing.md"), public.join("gone.md")).unwrap();

        let inside = resolve_source(&public.join("in.md"), &vault);
        let expected = dunce::canonicalize(vault.join("computer/in.md")).unwrap();
        assert_eq!(inside.readable_path(), Some(expected.as_path()));
        assert!(inside.is_link());

        let escapes = resolve_source(&public.join("out.md"), &vault);
        assert!(matches!(escapes, SourceResolution::Escapes { .. }));
        assert_eq!(escapes.readable_path(), None);

        let dangling = resolve_source(&public.join("gone.md"), &vault);
        assert_eq!(dangling, SourceResolution::Dangling(public.join("gone.md")));
    }
}
