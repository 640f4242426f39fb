//! Texture registry and lookup seam
//!
//! Entities never hold textures. Anything that draws resolves names to
//! `TextureId`s once, at construction, through a `ResourceProvider`; the host
//! renderer maps ids back to the real GPU textures when it consumes a draw list.

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Opaque handle the host resolves at draw time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Name -> texture lookup
pub trait ResourceProvider {
    fn texture(&self, name: &str) -> Result<TextureId, AssetError>;
}

/// Everything the host needs to load one texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureInfo {
    pub name: String,
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// Texture names used by the game, with their pixel sizes
pub const DEFAULT_TEXTURES: &[(&str, u32, u32)] = &[
    ("background", 288, 456),
    ("floor", 288, 56),
    ("pipe_top", 52, 320),
    ("pipe_bottom", 52, 320),
    ("bird_0", 34, 24),
    ("bird_1", 34, 24),
    ("bird_2", 34, 24),
    ("digit_0", 24, 36),
    ("digit_1", 24, 36),
    ("digit_2", 24, 36),
    ("digit_3", 24, 36),
    ("digit_4", 24, 36),
    ("digit_5", 24, 36),
    ("digit_6", 24, 36),
    ("digit_7", 24, 36),
    ("digit_8", 24, 36),
    ("digit_9", 24, 36),
    ("get_ready", 184, 50),
    ("tap_hint", 114, 98),
    ("game_over", 192, 42),
    ("score_panel", 226, 114),
    ("new_best", 32, 14),
    ("sound_on", 20, 20),
    ("sound_off", 20, 20),
];

/// In-process texture registry; ids are indices in registration order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetTable {
    textures: Vec<TextureInfo>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every texture in `DEFAULT_TEXTURES`, loaded from `root`
    pub fn with_defaults(root: &str) -> Self {
        let textures = DEFAULT_TEXTURES
            .iter()
            .map(|&(name, width, height)| TextureInfo {
                name: name.to_string(),
                path: format!("{root}/{name}.png"),
                width,
                height,
            })
            .collect();
        Self { textures }
    }

    /// Add a texture; names must be unique
    pub fn register(
        &mut self,
        name: &str,
        path: &str,
        width: u32,
        height: u32,
    ) -> Result<TextureId, AssetError> {
        if self.find(name).is_some() {
            return Err(AssetError::Duplicate {
                name: name.to_string(),
            });
        }
        self.textures.push(TextureInfo {
            name: name.to_string(),
            path: path.to_string(),
            width,
            height,
        });
        Ok(TextureId(self.textures.len() as u32 - 1))
    }

    pub fn info(&self, id: TextureId) -> Option<&TextureInfo> {
        self.textures.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.textures.iter().position(|t| t.name == name)
    }
}

impl ResourceProvider for AssetTable {
    fn texture(&self, name: &str) -> Result<TextureId, AssetError> {
        self.find(name)
            .map(|idx| TextureId(idx as u32))
            .ok_or_else(|| AssetError::Missing {
                name: name.to_string(),
            })
    }
}
