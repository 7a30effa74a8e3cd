//! Artwork size and exemption policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Accepted icon dimensions.
pub const DEFAULT_ICON_SIZES: [ImageSize; 2] = [ImageSize::new(256, 256), ImageSize::new(512, 512)];

/// Accepted fanart dimensions.
pub const DEFAULT_FANART_SIZES: [ImageSize; 3] = [
    ImageSize::new(1280, 720),
    ImageSize::new(1920, 1080),
    ImageSize::new(3840, 2160),
];

/// Addon id fragments whose addon kinds carry no fanart.
pub const DEFAULT_FANART_EXEMPT_MARKERS: [&str; 4] = [".module.", "metadata.", "context.", ".language."];

/// Errors that can occur while loading a policy file.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("failed to read policy file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse policy file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Dimension rules and fallback exemptions applied by the artwork check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkPolicy {
    /// Icon must match one of these exactly.
    pub icon_sizes: Vec<ImageSize>,
    /// Fanart must match one of these exactly.
    pub fanart_sizes: Vec<ImageSize>,
    /// If the addon path contains any of these, no fanart fallback is assumed.
    pub fanart_exempt_markers: Vec<String>,
}

impl Default for ArtworkPolicy {
    fn default() -> Self {
        Self {
            icon_sizes: DEFAULT_ICON_SIZES.to_vec(),
            fanart_sizes: DEFAULT_FANART_SIZES.to_vec(),
            fanart_exempt_markers: DEFAULT_FANART_EXEMPT_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl ArtworkPolicy {
    /// Parse a policy from a JSON file. Omitted fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path).map_err(|source| PolicyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| PolicyError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn accepts_icon(&self, size: ImageSize) -> bool {
        self.icon_sizes.contains(&size)
    }

    pub fn accepts_fanart(&self, size: ImageSize) -> bool {
        self.fanart_sizes.contains(&size)
    }

    /// True if the addon kind encoded in `addon_path` skips the fanart convention.
    pub fn is_fanart_exempt(&self, addon_path: &str) -> bool {
        self.fanart_exempt_markers
            .iter()
            .any(|marker| addon_path.contains(marker.as_str()))
    }
}

/// Renders sizes as `AxB or CxD`.
pub(crate) fn join_sizes(sizes: &[ImageSize]) -> String {
    sizes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_policy() {
        let policy = ArtworkPolicy::default();
        assert!(policy.accepts_icon(ImageSize::new(256, 256)));
        assert!(policy.accepts_icon(ImageSize::new(512, 512)));
        assert!(!policy.accepts_icon(ImageSize::new(256, 512)));
        assert!(policy.accepts_fanart(ImageSize::new(3840, 2160)));
        assert!(!policy.accepts_fanart(ImageSize::new(1080, 1920)));
    }

    #[test]
    fn test_join_sizes() {
        assert_eq!(
            join_sizes(&DEFAULT_FANART_SIZES),
            "1280x720 or 1920x1080 or 3840x2160"
        );
    }

    #[test]
    fn test_fanart_exemption_markers() {
        let policy = ArtworkPolicy::default();
        assert!(policy.is_fanart_exempt("/addons/script.module.requests"));
        assert!(policy.is_fanart_exempt("/addons/metadata.themoviedb.org"));
        assert!(policy.is_fanart_exempt("/addons/context.youtube"));
        assert!(policy.is_fanart_exempt("/addons/resource.language.de_de"));
        assert!(!policy.is_fanart_exempt("/addons/plugin.video.example"));
    }

    #[test]
    fn test_policy_from_file_keeps_defaults_for_missing_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("policy.json");
        fs::write(
            &path,
            r#"{ "icon_sizes": [ { "width": 128, "height": 128 } ] }"#,
        )
        .unwrap();

        let policy = ArtworkPolicy::from_file(&path).unwrap();
        assert_eq!(policy.icon_sizes, vec![ImageSize::new(128, 128)]);
        assert_eq!(policy.fanart_sizes, DEFAULT_FANART_SIZES.to_vec());
        assert_eq!(policy.fanart_exempt_markers.len(), 4);
    }

    #[test]
    fn test_policy_from_file_reports_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("policy.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ArtworkPolicy::from_file(&path).unwrap_err();
        assert!(matches!(err, PolicyError::Parse { .. }));
    }

    #[test]
    fn test_policy_from_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ArtworkPolicy::from_file(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PolicyError::Read { .. }));
    }
}
