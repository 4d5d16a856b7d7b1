//! Instruction templates
//!
//! Every supported prompt style is a variant of [`TemplateKey`]. Rendering a
//! key substitutes the caller's theme into a fixed instruction that tells the
//! model which constraints to honor (camera-only description, instrumental
//! music, anonymized subjects and so on).
//!
//! The theme is interpolated as-is. It is not escaped or sanitized, so a
//! theme can steer the model in ways the instruction does not intend. That is
//! acceptable for a single-user tool; expose the service to untrusted callers
//! with that in mind.
//!
//! # Examples
//!
//! ```rust
//! use prompt_forge::templates::TemplateKey;
//!
//! let key: TemplateKey = "realistic".parse().unwrap();
//! let instruction = key.render("a red fox in snow");
//! assert!(instruction.contains("\"a red fox in snow\""));
//! ```

mod audio;
mod coding;
mod image;
mod video;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of a prompt style, as sent by clients in `systemPrompt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateKey {
    Realistic,
    Cinematic,
    Drawing,
    ImageEditing,
    AiCoding,
    AceStep,
    Music,
    #[serde(rename = "videoSceneWan21")]
    VideoSceneWan21,
}

impl TemplateKey {
    /// All keys, in the order they are presented to clients
    pub const ALL: [TemplateKey; 8] = [
        TemplateKey::Realistic,
        TemplateKey::Cinematic,
        TemplateKey::Drawing,
        TemplateKey::ImageEditing,
        TemplateKey::AiCoding,
        TemplateKey::AceStep,
        TemplateKey::Music,
        TemplateKey::VideoSceneWan21,
    ];

    /// Wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKey::Realistic => "realistic",
            TemplateKey::Cinematic => "cinematic",
            TemplateKey::Drawing => "drawing",
            TemplateKey::ImageEditing => "imageEditing",
            TemplateKey::AiCoding => "aiCoding",
            TemplateKey::AceStep => "aceStep",
            TemplateKey::Music => "music",
            TemplateKey::VideoSceneWan21 => "videoSceneWan21",
        }
    }

    /// Render the full instruction for `theme`
    pub fn render(&self, theme: &str) -> String {
        match self {
            TemplateKey::Realistic => image::realistic(theme),
            TemplateKey::Cinematic => image::cinematic(theme),
            TemplateKey::Drawing => image::drawing(theme),
            TemplateKey::ImageEditing => image::image_editing(theme),
            TemplateKey::AiCoding => coding::ai_coding(theme),
            TemplateKey::AceStep => audio::ace_step(theme),
            TemplateKey::Music => audio::music_tags(theme),
            TemplateKey::VideoSceneWan21 => video::wan21_scene(theme),
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::InvalidSelection(s.to_string()))
    }
}

/// Resolve `key` and render it with `theme` in one step
pub fn render(key: &str, theme: &str) -> crate::error::Result<String> {
    let key: TemplateKey = key.parse()?;
    Ok(key.render(theme))
}
