//! Platform data home resolution.
//!
//! The data home is built by plain string concatenation with `/` on every
//! platform, so a Windows base such as `C:\Users\u\AppData\Local` resolves to
//! `C:\Users\u\AppData\Local/woah`.

use tracing::debug;

use crate::{APP_DIR, FALLBACK_DIR};

/// Platform family that decides which environment variables are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux and other non-Apple Unix systems (XDG base directories).
    Xdg,
    Windows,
    /// macOS and iOS.
    Apple,
    /// Anything else. Always resolves to the fallback.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::Apple
        } else if cfg!(windows) {
            Platform::Windows
        } else if cfg!(unix) {
            Platform::Xdg
        } else {
            Platform::Other
        }
    }
}

/// Resolve the data home for the running platform from the process environment.
pub fn find_data_home() -> String {
    resolve(Platform::current(), env_var)
}

/// Resolve the data home for `platform`, reading variables through `lookup`.
///
/// `lookup` returns `None` for an unset variable. The result is never empty.
pub fn resolve<F>(platform: Platform, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let base = base_dir(platform, &lookup).unwrap_or_default();

    if base.is_empty() {
        debug!(?platform, "no usable base directory, using {FALLBACK_DIR}");
        FALLBACK_DIR.to_string()
    } else {
        format!("{base}/{APP_DIR}")
    }
}

fn base_dir<F>(platform: Platform, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match platform {
        Platform::Xdg => {
            if let Some(dir) = lookup("XDG_DATA_HOME").filter(|dir| !dir.is_empty()) {
                debug!(%dir, "using XDG_DATA_HOME");
                return Some(dir);
            }
            lookup("HOME").map(|home| {
                debug!(%home, "using HOME/.local/share");
                format!("{home}/.local/share")
            })
        }
        Platform::Windows => lookup("LOCALAPPDATA").inspect(|dir| {
            debug!(%dir, "using LOCALAPPDATA");
        }),
        Platform::Apple => lookup("HOME").map(|home| {
            debug!(%home, "using HOME/Library/Application Support");
            format!("{home}/Library/Application Support")
        }),
        Platform::Other => None,
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
}
