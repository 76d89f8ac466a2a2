//! Camera and keybinding options with TOML preset support.
//!
//! Options serialize to/from TOML so a viewer session can start from a
//! preset file, and export a JSON Schema for UI generation.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::TerraviewError;
use crate::math::Vec3;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and framing parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON Schema as a pretty-printed string.
    pub fn schema_json() -> Result<String, TerraviewError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| TerraviewError::OptionsParse(e.to_string()))
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TerraviewError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| TerraviewError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TerraviewError> {
        let content =
            std::fs::read_to_string(path).map_err(TerraviewError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TerraviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TerraviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TerraviewError::Io)?;
        }
        std::fs::write(path, content).map_err(TerraviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Build an uninitialized camera from the camera section.
    #[must_use]
    pub fn build_camera(&self) -> Camera {
        let [x, y, z] = self.camera.scene_center;
        Camera::new(
            self.camera.scene_radius,
            Vec3::new(x, y, z),
            self.camera.projection,
        )
        .with_fovy(self.camera.fovy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Projection;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
projection = "orthographic"
scene_radius = 12.5
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.projection, Projection::Orthographic);
        assert_eq!(opts.camera.scene_radius, 12.5);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.camera.scene_center, [0.0; 3]);
        assert_eq!(
            opts.keybindings.lookup("KeyP"),
            Some(KeyAction::ToggleProjection)
        );
    }

    #[test]
    fn loaded_bindings_rebuild_lookup() {
        let toml_str = r#"
[keybindings.bindings]
reset_camera = "Home"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("Home"), Some(KeyAction::ResetCamera));
        assert_eq!(opts.keybindings.lookup("KeyI"), None);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Options::from_toml("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, TerraviewError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyI"), Some(KeyAction::ResetCamera));
        assert_eq!(opts.keybindings.lookup("Equal"), Some(KeyAction::WidenFov));
        assert_eq!(opts.keybindings.lookup("Minus"), Some(KeyAction::NarrowFov));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("terraview-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.fovy = 30.0;
        opts.save(&dir.join("narrow.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["default", "narrow"]);
        assert_eq!(Options::load(&dir.join("narrow.toml")).unwrap(), opts);
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(TerraviewError::Io(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn build_camera_uses_options() {
        let mut opts = Options::default();
        opts.camera.fovy = 60.0;
        opts.camera.scene_radius = 4.0;
        opts.camera.scene_center = [1.0, 2.0, 3.0];
        let camera = opts.build_camera();
        assert_eq!(camera.fovy(), 60.0);
        assert_eq!(camera.radius(), 4.0);
        assert_eq!(camera.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.projection(), Projection::Perspective);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("scene_radius").is_some());
        assert!(camera.get("scene_center").is_none());

        assert!(Options::schema_json().unwrap().contains("Field of View"));
    }
}
