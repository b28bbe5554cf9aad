//! Template repository references.
//!
//! Templates live in git repositories. A reference is parsed from any of the
//! common git URL shapes into its host, owner and name, and maps to a
//! directory under the data home.

use std::fmt;

use woah_util::errors::WoahError;

/// Scheme prefixes stripped before the host. Longer prefixes come first.
const PREFIXES: &[&str] = &[
    "ssh://git@",
    "https://",
    "http://",
    "ssh://",
    "git://",
    "git@",
];

/// A parsed template repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub url: String,
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parse a git URL such as `https://github.com/owner/name.git` or
    /// `git@github.com:owner/name.git`.
    ///
    /// Path segments after the name are ignored, and the name ends at its
    /// first `.`.
    pub fn parse(url: &str) -> Result<Self, WoahError> {
        let invalid = || WoahError::InvalidUrl {
            url: url.to_string(),
        };

        let trimmed = url.trim();
        let rest = PREFIXES
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(*prefix))
            .unwrap_or(trimmed);
        // Drop `user@` or `user:token@` ahead of the host.
        let authority = rest.split('/').next().unwrap_or(rest);
        let rest = match authority.rfind('@') {
            Some(at) => &rest[at + 1..],
            None => rest,
        };
        let rest = rest.strip_prefix("www.").unwrap_or(rest);

        let split = rest.find(|c: char| c == '/' || c == ':').ok_or_else(invalid)?;
        let (host, path) = (&rest[..split], &rest[split + 1..]);
        if host.is_empty() || !host.chars().all(is_host_char) {
            return Err(invalid());
        }

        let mut segments = path.split('/');
        let owner = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let name = segments
            .next()
            .and_then(|s| s.split('.').next())
            .filter(|s| !s.is_empty())
            .ok_or_else(invalid)?;

        tracing::debug!(host, owner, name, "parsed repository URL");

        Ok(Self {
            url: trimmed.to_string(),
            host: host.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Directory the template would occupy under `data_home`.
    pub fn destination(&self, data_home: &str) -> String {
        format!("{data_home}/{}", self.name)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn is_host_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-')
}
