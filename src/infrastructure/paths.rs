//! Path resolution for data and configuration files.
//!
//! Locations follow the XDG base directory layout:
//!
//! | purpose | location                                                          |
//! |---------|-------------------------------------------------------------------|
//! | data    | `$XDG_DATA_HOME/epicurious` or `~/.local/share/epicurious`        |
//! | config  | `$XDG_CONFIG_HOME/epicurious/config.toml` or `~/.config/...`      |
//!
//! Empty environment variables count as unset.

use std::path::PathBuf;

const APP_DIR: &str = "epicurious";
const CONFIG_FILE: &str = "config.toml";

/// Returns the data directory holding trace files.
///
/// Falls back to a directory under the system temp dir when neither
/// `XDG_DATA_HOME` nor `HOME` is set.
///
/// # Examples
///
/// ```
/// use epicurious::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("epicurious"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env_var("XDG_DATA_HOME"), env_var("HOME"))
}

/// Returns the default configuration file path, whether or not it exists.
///
/// `None` when neither `XDG_CONFIG_HOME` nor `HOME` is set.
#[must_use]
pub fn get_config_path() -> Option<PathBuf> {
    config_path_from(env_var("XDG_CONFIG_HOME"), env_var("HOME"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and all paths when `HOME` is unset, are
/// returned unchanged. `~user` forms are not supported.
///
/// # Examples
///
/// ```
/// use epicurious::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, env_var("HOME").as_deref())
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn data_dir_from(xdg_data_home: Option<String>, home: Option<String>) -> PathBuf {
    xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home.map(|h| PathBuf::from(h).join(".local").join("share")))
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

fn config_path_from(xdg_config_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home.map(|h| PathBuf::from(h).join(".config")))
        .map(|base| base.join(APP_DIR).join(CONFIG_FILE))
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_prefers_xdg() {
        assert_eq!(
            data_dir_from(Some("/xdg/data".into()), Some("/home/cook".into())),
            PathBuf::from("/xdg/data/epicurious")
        );
        assert_eq!(
            data_dir_from(None, Some("/home/cook".into())),
            PathBuf::from("/home/cook/.local/share/epicurious")
        );
        assert_eq!(data_dir_from(None, None), std::env::temp_dir().join("epicurious"));
    }

    #[test]
    fn config_path_layout() {
        assert_eq!(
            config_path_from(Some("/xdg/config".into()), None),
            Some(PathBuf::from("/xdg/config/epicurious/config.toml"))
        );
        assert_eq!(
            config_path_from(None, Some("/home/cook".into())),
            Some(PathBuf::from("/home/cook/.config/epicurious/config.toml"))
        );
        assert_eq!(config_path_from(None, None), None);
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde_with("~/themes/a.toml", Some("/home/cook/")), "/home/cook/themes/a.toml");
        assert_eq!(expand_tilde_with("~", Some("/home/cook")), "/home/cook");
        assert_eq!(expand_tilde_with("~other/x", Some("/home/cook")), "~other/x");
        assert_eq!(expand_tilde_with("~/x", None), "~/x");
        assert_eq!(expand_tilde_with("/abs", Some("/home/cook")), "/abs");
    }
}
