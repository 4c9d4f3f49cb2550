use crate::detector::EdgelParams;
use crate::error::{EdgelError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file consumed by `edgels_demo`.
///
/// ```json
/// {
///   "input": "data/scene.png",
///   "params": { "blur": { "kernel_size": 5, "sigma": 1.0 }, "pyramid_levels": 4 },
///   "output": {
///     "bandpass_image": "out/bandpass.png",
///     "edgels_json": "out/edgels.json",
///     "overlay_image": "out/overlay.png"
///   }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct EdgelToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: EdgelParams,
    pub output: EdgelOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgelOutputConfig {
    /// Min–max normalized band-pass image.
    pub bandpass_image: PathBuf,
    /// Edgels and run summary.
    pub edgels_json: PathBuf,
    /// Band-pass image with the edgels drawn on top.
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgelToolConfig> {
    let data = fs::read_to_string(path).map_err(|source| EdgelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| EdgelError::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_default_params() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(
            &path,
            r#"{ "input": "in.png", "output": { "bandpass_image": "s.png", "edgels_json": "e.json" } }"#,
        )
        .unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.input, PathBuf::from("in.png"));
        assert_eq!(cfg.params, EdgelParams::default());
        assert!(cfg.output.overlay_image.is_none());
    }

    #[test]
    fn malformed_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ \"input\": 3 }").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, EdgelError::Config { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn missing_config_is_io_error() {
        let err = load_config(Path::new("/no/such/config.json")).unwrap_err();
        assert!(matches!(err, EdgelError::Io { .. }));
    }
}
