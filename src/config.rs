//! Demo-scene configuration, merged from an optional JSON file with camelCase
//! keys. Absent fields keep their defaults.

use std::path::Path;

use serde::Deserialize;

use crate::document::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub width: f64,
    pub height: f64,
    pub title: Option<String>,
    pub desc: Option<String>,
    /// Background color painted over the full view-box before the scene.
    pub background: Option<String>,
    pub viewbox: (f64, f64, f64, f64),
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: None,
            desc: None,
            background: None,
            viewbox: (0.0, 0.0, 400.0, 300.0),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SceneConfigFile {
    width: Option<f64>,
    height: Option<f64>,
    title: Option<String>,
    desc: Option<String>,
    background: Option<String>,
    view_box: Option<ViewBoxFile>,
}

#[derive(Debug, Deserialize)]
struct ViewBoxFile {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<SceneConfig> {
    let mut config = SceneConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: SceneConfigFile = serde_json::from_str(&contents)?;

    if let Some(v) = parsed.width {
        config.width = v;
    }
    if let Some(v) = parsed.height {
        config.height = v;
    }
    if parsed.title.is_some() {
        config.title = parsed.title;
    }
    if parsed.desc.is_some() {
        config.desc = parsed.desc;
    }
    if parsed.background.is_some() {
        config.background = parsed.background;
    }
    if let Some(vb) = parsed.view_box {
        config.viewbox = (vb.x, vb.y, vb.width, vb.height);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_file_overrides_defaults() {
        let parsed: SceneConfigFile = serde_json::from_str(
            r#"{"width": 640, "viewBox": {"x": 0, "y": 0, "width": 320, "height": 240}}"#,
        )
        .unwrap();
        assert_eq!(parsed.width, Some(640.0));
        let vb = parsed.view_box.unwrap();
        assert_eq!((vb.width, vb.height), (320.0, 240.0));
        assert!(parsed.background.is_none());
    }

    #[test]
    fn missing_file_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.viewbox, (0.0, 0.0, 400.0, 300.0));
    }
}
