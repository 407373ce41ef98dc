use std::fs::File;
use std::path::Path;

use crate::error::LoadError;

/// Validates that an opened export file is not larger than `max_size_bytes`
///
/// Takes the opened handle rather than the path so the size that is checked
/// belongs to the file that will be read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than `max_size_bytes`
pub fn validate_file_size(file: &File, path: &Path, max_size_bytes: u64) -> Result<(), LoadError> {
    let metadata =
        file.metadata().map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;

    let file_size = metadata.len();
    if file_size > max_size_bytes {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size: file_size,
            max: max_size_bytes,
        });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use dm_explorer::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Downloads/user_data.json");
/// // Returns "~/Downloads/user_data.json" for the user alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

/// Internal helper for path formatting with an explicit home directory (for testing)
///
/// Home is matched on whole path components, so `/home/al` is not a prefix of
/// `/home/alice`.
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && !home.as_os_str().is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return Path::new("~").join(rest).to_string_lossy().into_owned();
    }

    path.to_string_lossy().into_owned()
}
