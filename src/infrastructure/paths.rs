//! Path manipulation utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the data directory for LoginGate files.
///
/// The directory is `/host/.local/share/zellij/logingate` in the Zellij
/// sandbox. `/host` points to the cwd of the last focused terminal, or the
/// folder where Zellij was started, which is usually the user's home. The
/// session file `session.json` and the trace file live here.
///
/// # Examples
///
/// ```
/// use logingate::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/logingate"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("logingate")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use logingate::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("~user/file"), "~user/file");
        assert_eq!(expand_tilde("dir/~/file"), "dir/~/file");
    }

    #[test]
    fn data_dir_is_under_host() {
        assert!(get_data_dir().starts_with("/host"));
    }
}
