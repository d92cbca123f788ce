//! Sprite atlas loading.
//!
//! A sprite sheet is described by a JSON document next to its image:
//!
//! ```json
//! {
//!   "image": "hero.png",
//!   "frames": { "idle0": { "x": 0, "y": 0, "w": 16, "h": 16 } },
//!   "animations": { "idle": { "frames": ["idle0"], "frameDuration": 0.2 } },
//!   "scale": 2
//! }
//! ```
//!
//! `image` is resolved against the JSON file's own directory and `scale`
//! defaults to 1. The sheet is immutable once built; playback state lives in
//! [`Animator`](crate::components::animation::Animator).

use std::path::{Path, PathBuf};

use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source rectangle of one frame, in atlas image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A named, always-looping sequence of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDef {
    pub frames: Vec<String>,
    /// Seconds each frame stays on screen.
    #[serde(rename = "frameDuration")]
    pub frame_duration: f32,
}

fn default_scale() -> f32 {
    1.0
}

/// On-disk shape of a sprite sheet descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteSheetData {
    pub image: String,
    pub frames: FxHashMap<String, FrameRect>,
    pub animations: FxHashMap<String, AnimationDef>,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

#[derive(Error, Debug)]
pub enum SpriteSheetError {
    #[error("Failed to read sprite sheet {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid sprite sheet JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to load atlas image {path}: {message}")]
    Texture { path: PathBuf, message: String },

    #[error("Animation '{animation}' references unknown frame '{frame}'")]
    MissingFrame { animation: String, frame: String },

    #[error("Animation '{0}' has no frames")]
    EmptyAnimation(String),
}

/// Loads the atlas image for a sheet. Implemented by the host; the sheet only
/// keeps the key the texture was registered under.
pub trait TextureLoader {
    fn load_texture(&mut self, key: &str, path: &Path) -> Result<(), String>;
}

#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image_path: PathBuf,
    texture_key: String,
    frames: FxHashMap<String, FrameRect>,
    animations: FxHashMap<String, AnimationDef>,
    scale: f32,
    loaded: bool,
}

impl SpriteSheet {
    /// Build an unloaded sheet from descriptor text. `base_dir` is the
    /// directory the descriptor lives in.
    pub fn parse(json: &str, base_dir: &Path) -> Result<Self, SpriteSheetError> {
        let data: SpriteSheetData = serde_json::from_str(json)?;

        for (name, anim) in &data.animations {
            if anim.frames.is_empty() {
                return Err(SpriteSheetError::EmptyAnimation(name.clone()));
            }
            if let Some(missing) = anim.frames.iter().find(|f| !data.frames.contains_key(*f)) {
                return Err(SpriteSheetError::MissingFrame {
                    animation: name.clone(),
                    frame: missing.clone(),
                });
            }
        }

        let image_path = base_dir.join(&data.image);
        Ok(Self {
            texture_key: image_path.to_string_lossy().into_owned(),
            image_path,
            frames: data.frames,
            animations: data.animations,
            scale: data.scale,
            loaded: false,
        })
    }

    /// Read the descriptor at `json_path`, then load its image through `loader`.
    ///
    /// On any error the caller gets no sheet at all; there is no partially
    /// loaded state to observe.
    pub fn load(
        json_path: impl AsRef<Path>,
        loader: &mut dyn TextureLoader,
    ) -> Result<Self, SpriteSheetError> {
        let json_path = json_path.as_ref();
        let json = std::fs::read_to_string(json_path).map_err(|source| SpriteSheetError::Io {
            path: json_path.to_path_buf(),
            source,
        })?;
        let base_dir = json_path.parent().unwrap_or_else(|| Path::new("."));
        let mut sheet = Self::parse(&json, base_dir)?;
        sheet.attach_texture(loader)?;

        info!(
            "Loaded sprite sheet {} ({} frames, {} animations)",
            json_path.display(),
            sheet.frames.len(),
            sheet.animations.len()
        );
        Ok(sheet)
    }

    /// Load the atlas image and mark the sheet ready for drawing.
    pub fn attach_texture(&mut self, loader: &mut dyn TextureLoader) -> Result<(), SpriteSheetError> {
        loader
            .load_texture(&self.texture_key, &self.image_path)
            .map_err(|message| SpriteSheetError::Texture {
                path: self.image_path.clone(),
                message,
            })?;
        self.loaded = true;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    pub fn texture_key(&self) -> &str {
        &self.texture_key
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn frame(&self, name: &str) -> Option<&FrameRect> {
        self.frames.get(name)
    }

    pub fn animation(&self, name: &str) -> Option<&AnimationDef> {
        self.animations.get(name)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const HERO_JSON: &str = r#"{
        "image": "hero.png",
        "frames": {
            "idle0": { "x": 0, "y": 0, "w": 16, "h": 16 },
            "idle1": { "x": 16, "y": 0, "w": 16, "h": 16 },
            "run0": { "x": 0, "y": 16, "w": 16, "h": 16 },
            "run1": { "x": 16, "y": 16, "w": 16, "h": 16 },
            "run2": { "x": 32, "y": 16, "w": 16, "h": 16 }
        },
        "animations": {
            "idle": { "frames": ["idle0", "idle1"], "frameDuration": 0.5 },
            "run": { "frames": ["run0", "run1", "run2"], "frameDuration": 0.1 }
        },
        "scale": 2
    }"#;

    pub(crate) struct StubLoader {
        pub(crate) fail: bool,
        pub(crate) requested: Vec<(String, PathBuf)>,
    }

    impl StubLoader {
        pub(crate) fn ok() -> Self {
            Self {
                fail: false,
                requested: Vec::new(),
            }
        }
    }

    impl TextureLoader for StubLoader {
        fn load_texture(&mut self, key: &str, path: &Path) -> Result<(), String> {
            self.requested.push((key.to_string(), path.to_path_buf()));
            if self.fail {
                Err("image decode failed".to_string())
            } else {
                Ok(())
            }
        }
    }

    fn write_temp_sheet(name: &str, json: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("emberfall-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("hero.json");
        std::fs::write(&path, json).expect("write sheet");
        path
    }

    #[test]
    fn test_parse_resolves_image_against_base_dir() {
        let sheet = SpriteSheet::parse(HERO_JSON, Path::new("assets/sprites")).unwrap();
        assert_eq!(sheet.image_path(), Path::new("assets/sprites/hero.png"));
        assert!(!sheet.is_loaded());
        assert_eq!(sheet.scale(), 2.0);
        assert_eq!(sheet.animation("run").unwrap().frames.len(), 3);
        assert_eq!(sheet.frame("run1").unwrap().x, 16.0);
    }

    #[test]
    fn test_scale_defaults_to_one() {
        let json = r#"{ "image": "a.png", "frames": {}, "animations": {} }"#;
        let sheet = SpriteSheet::parse(json, Path::new(".")).unwrap();
        assert_eq!(sheet.scale(), 1.0);
    }

    #[test]
    fn test_parse_rejects_unknown_frame() {
        let json = r#"{
            "image": "a.png",
            "frames": { "a": { "x": 0, "y": 0, "w": 1, "h": 1 } },
            "animations": { "walk": { "frames": ["a", "b"], "frameDuration": 0.1 } }
        }"#;
        match SpriteSheet::parse(json, Path::new(".")) {
            Err(SpriteSheetError::MissingFrame { animation, frame }) => {
                assert_eq!(animation, "walk");
                assert_eq!(frame, "b");
            }
            other => panic!("expected MissingFrame, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_animation() {
        let json = r#"{ "image": "a.png", "frames": {},
            "animations": { "none": { "frames": [], "frameDuration": 0.1 } } }"#;
        assert!(matches!(
            SpriteSheet::parse(json, Path::new(".")),
            Err(SpriteSheetError::EmptyAnimation(_))
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            SpriteSheet::parse("{ not json", Path::new(".")),
            Err(SpriteSheetError::Parse(_))
        ));
    }

    #[test]
    fn test_load_marks_sheet_loaded() {
        let path = write_temp_sheet("ok", HERO_JSON);
        let mut loader = StubLoader {
            fail: false,
            requested: Vec::new(),
        };
        let sheet = SpriteSheet::load(&path, &mut loader).unwrap();
        assert!(sheet.is_loaded());
        assert_eq!(loader.requested.len(), 1);
        assert_eq!(loader.requested[0].1, path.parent().unwrap().join("hero.png"));
        assert_eq!(loader.requested[0].0, sheet.texture_key());
    }

    #[test]
    fn test_load_propagates_image_failure() {
        let path = write_temp_sheet("fail", HERO_JSON);
        let mut loader = StubLoader {
            fail: true,
            requested: Vec::new(),
        };
        let err = SpriteSheet::load(&path, &mut loader).unwrap_err();
        assert!(matches!(err, SpriteSheetError::Texture { .. }));
        assert!(err.to_string().contains("image decode failed"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let mut loader = StubLoader {
            fail: false,
            requested: Vec::new(),
        };
        let err = SpriteSheet::load("/nonexistent/emberfall/sheet.json", &mut loader).unwrap_err();
        assert!(matches!(err, SpriteSheetError::Io { .. }));
        assert!(loader.requested.is_empty());
    }
}
