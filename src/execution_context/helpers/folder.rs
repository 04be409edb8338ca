use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::prelude::*;

/// Filesystem-safe folder name derived from `now`.
///
/// The UTC timestamp is rendered with millisecond precision (`2024-01-02T03:04:05.678Z`),
/// then every `:` and the fractional-seconds `.` become `-`.
pub fn unique_folder_name(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-")
        .replacen('.', "-", 1)
}

/// Absolute form of `path`, resolved against the current working directory.
///
/// An empty path resolves to the current directory. `..` segments are removed
/// lexically, symlinks are left untouched.
pub fn resolve_absolute(path: &Path) -> Result<PathBuf> {
    let to_resolve_error = |source| Error::ResolvePath {
        path: path.to_owned(),
        source,
    };
    let absolute = if path.as_os_str().is_empty() {
        std::env::current_dir().map_err(to_resolve_error)?
    } else {
        std::path::absolute(path).map_err(to_resolve_error)?
    };

    Ok(normalize_parent_segments(&absolute))
}

fn normalize_parent_segments(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if let Some(Component::Normal(_)) = components.last() {
                    components.pop();
                }
            }
            _ => components.push(component),
        }
    }
    components.iter().collect()
}

/// Create `path` and its missing parents. An existing folder is not an error.
pub fn ensure_folder(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| Error::CreateFolder {
        path: path.to_owned(),
        source,
    })?;
    debug!("Folder ready at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unique_folder_name_format() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(678);

        assert_eq!(unique_folder_name(now), "2024-01-02T03-04-05-678Z");
    }

    #[test]
    fn test_unique_folder_name_keeps_zero_millis() {
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();

        assert_eq!(unique_folder_name(now), "2023-12-31T23-59-59-000Z");
    }

    #[test]
    fn test_unique_folder_name_differs_per_millisecond() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let later = now + chrono::Duration::milliseconds(1);

        assert_ne!(unique_folder_name(now), unique_folder_name(later));
    }

    #[test]
    fn test_resolve_absolute_keeps_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(resolve_absolute(dir.path()).unwrap(), dir.path());
    }

    #[test]
    fn test_resolve_absolute_relative_path() {
        let resolved = resolve_absolute(Path::new("./config")).unwrap();

        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("config"));
    }

    #[test]
    fn test_resolve_absolute_empty_path_is_current_dir() {
        let resolved = resolve_absolute(Path::new("")).unwrap();

        assert_eq!(resolved, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_resolve_absolute_relative_parent() {
        let cwd = std::env::current_dir().unwrap();

        let resolved = resolve_absolute(Path::new("../x")).unwrap();

        assert_eq!(resolved, cwd.parent().unwrap_or(&cwd).join("x"));
    }

    #[test]
    fn test_resolve_absolute_removes_parent_segments() {
        let resolved = resolve_absolute(Path::new("/data/runs/../cfg/./nested/..")).unwrap();

        assert_eq!(resolved, Path::new("/data/cfg"));
    }

    #[test]
    fn test_resolve_absolute_parent_of_root_stays_root() {
        let resolved = resolve_absolute(Path::new("/../../etc")).unwrap();

        assert_eq!(resolved, Path::new("/etc"));
    }

    #[test]
    fn test_ensure_folder_creates_parents_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        ensure_folder(&nested).unwrap();
        ensure_folder(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_folder_fails_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-folder");
        std::fs::write(&file, "").unwrap();

        let err = ensure_folder(&file.join("child")).unwrap_err();

        assert!(matches!(err, Error::CreateFolder { .. }));
    }
}
