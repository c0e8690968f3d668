//! Snapshot file encoding.
//!
//! Two interchangeable textual encodings, selected by configuration:
//! YAML (default) and pretty-printed JSON. Round-trip law:
//! `decode(encode(s)) == s`, including exact preservation of which
//! categories are absent.

use crate::error::Result;
use crate::model::Snapshot;

/// Snapshot file format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotFormat {
    /// Human-friendly, the historical default
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotFormat::Yaml => write!(f, "yaml"),
            SnapshotFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for SnapshotFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(SnapshotFormat::Yaml),
            "json" => Ok(SnapshotFormat::Json),
            _ => Err(format!("Invalid format '{}'. Use 'yaml' or 'json'", s)),
        }
    }
}

/// Encode a snapshot to the given textual format.
pub fn encode(snapshot: &Snapshot, format: SnapshotFormat) -> Result<String> {
    match format {
        SnapshotFormat::Yaml => Ok(serde_yaml::to_string(snapshot)?),
        SnapshotFormat::Json => Ok(serde_json::to_string_pretty(snapshot)?),
    }
}

/// Decode a snapshot from the given textual format.
pub fn decode(input: &str, format: SnapshotFormat) -> Result<Snapshot> {
    match format {
        SnapshotFormat::Yaml => Ok(serde_yaml::from_str(input)?),
        SnapshotFormat::Json => Ok(serde_json::from_str(input)?),
    }
}
