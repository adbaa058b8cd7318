use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical project-relative path used in edges, diagnostics, and reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - `.` and `..` segments resolved lexically (no filesystem access);
///   `..` segments that escape the project root are preserved, so callers
///   can detect paths that leave the project
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ProjectPath(String);

impl Default for ProjectPath {
    fn default() -> Self {
        ProjectPath::new(".")
    }
}

impl ProjectPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let raw = s.as_ref().replace('\\', "/");

        let mut segments: Vec<&str> = Vec::new();
        for seg in raw.split('/') {
            match seg {
                "" | "." => {}
                ".." => match segments.last() {
                    Some(&"..") | None => segments.push(".."),
                    Some(_) => {
                        segments.pop();
                    }
                },
                other => segments.push(other),
            }
        }

        if segments.is_empty() {
            return Self(".".to_string());
        }
        Self(segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The directory containing this path; `.` for top-level entries.
    pub fn parent(&self) -> ProjectPath {
        match self.0.rsplit_once('/') {
            Some((dir, _)) => ProjectPath(dir.to_string()),
            None => ProjectPath(".".to_string()),
        }
    }

    pub fn join(&self, tail: &str) -> ProjectPath {
        if self.0 == "." {
            return ProjectPath::new(tail);
        }
        ProjectPath::new(format!("{}/{}", self.0, tail))
    }

    /// True when lexical normalization left the path outside the project root.
    pub fn escapes_root(&self) -> bool {
        self.0 == ".." || self.0.starts_with("../")
    }
}

impl From<&Utf8Path> for ProjectPath {
    fn from(value: &Utf8Path) -> Self {
        ProjectPath::new(value.as_str())
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
