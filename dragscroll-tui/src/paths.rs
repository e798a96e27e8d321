//! Where the demo looks for its config file.

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "dragscroll";
const APPLICATION: &str = "dragscroll";

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "DRAGSCROLL_CONFIG";

const CONFIG_FILE: &str = "dragscroll.toml";

/// Path of the slider config file.
///
/// `$DRAGSCROLL_CONFIG` wins; otherwise the platform config dir:
/// - Linux: `$XDG_CONFIG_HOME/dragscroll/dragscroll.toml`
/// - macOS: `~/Library/Application Support/dev.dragscroll.dragscroll/dragscroll.toml`
/// - Windows: `%APPDATA%\dragscroll\dragscroll\config\dragscroll.toml`
pub fn config_file() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
