//! Build identification for `verdict --version` and the health report.
//!
//! Git fields come from vergen at build time and read "unknown" when the
//! crate is built outside a git checkout.

use std::fmt;
use std::sync::OnceLock;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const UNKNOWN: &str = "unknown";

/// Where a binary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub branch: &'static str,
    pub sha: &'static str,
    pub dirty: bool,
}

impl BuildInfo {
    /// Metadata embedded in this build.
    pub const fn current() -> Self {
        Self {
            version: PKG_VERSION,
            branch: match option_env!("VERGEN_GIT_BRANCH") {
                Some(branch) => branch,
                None => UNKNOWN,
            },
            sha: match option_env!("VERGEN_GIT_SHA") {
                Some(sha) => sha,
                None => UNKNOWN,
            },
            dirty: match option_env!("VERGEN_GIT_DIRTY") {
                Some(dirty) => matches!(dirty.as_bytes(), b"true"),
                None => false,
            },
        }
    }

    fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(self.sha)
    }
}

/// `{version}+{branch}.{sha7}`, with `.dirty` for builds from a modified tree.
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}.{}", self.version, self.branch, self.short_sha())?;
        if self.dirty {
            f.write_str(".dirty")?;
        }
        Ok(())
    }
}

pub fn version_string() -> String {
    BuildInfo::current().to_string()
}

/// [`version_string`] with a `'static` lifetime, for clap's `--version`.
pub fn long_version() -> &'static str {
    static LONG: OnceLock<String> = OnceLock::new();
    LONG.get_or_init(version_string)
}
