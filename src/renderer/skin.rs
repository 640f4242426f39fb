//! Texture ids resolved once per scene

use crate::assets::{ResourceProvider, TextureId};
use crate::consts::BIRD_FRAME_COUNT;
use crate::error::AssetError;

/// Every texture the game scene draws with
#[derive(Debug, Clone, PartialEq)]
pub struct Skin {
    pub background: TextureId,
    pub floor: TextureId,
    pub pipe_top: TextureId,
    pub pipe_bottom: TextureId,
    pub bird: [TextureId; BIRD_FRAME_COUNT],
    pub digits: [TextureId; 10],
    pub get_ready: TextureId,
    pub tap_hint: TextureId,
    pub game_over: TextureId,
    pub score_panel: TextureId,
    pub new_best: TextureId,
    pub sound_on: TextureId,
    pub sound_off: TextureId,
}

impl Skin {
    /// Resolve every texture; the first missing name is the error
    pub fn load(provider: &dyn ResourceProvider) -> Result<Self, AssetError> {
        let mut bird = [TextureId(0); BIRD_FRAME_COUNT];
        for (i, slot) in bird.iter_mut().enumerate() {
            *slot = provider.texture(&format!("bird_{i}"))?;
        }
        let mut digits = [TextureId(0); 10];
        for (i, slot) in digits.iter_mut().enumerate() {
            *slot = provider.texture(&format!("digit_{i}"))?;
        }

        Ok(Self {
            background: provider.texture("background")?,
            floor: provider.texture("floor")?,
            pipe_top: provider.texture("pipe_top")?,
            pipe_bottom: provider.texture("pipe_bottom")?,
            bird,
            digits,
            get_ready: provider.texture("get_ready")?,
            tap_hint: provider.texture("tap_hint")?,
            game_over: provider.texture("game_over")?,
            score_panel: provider.texture("score_panel")?,
            new_best: provider.texture("new_best")?,
            sound_on: provider.texture("sound_on")?,
            sound_off: provider.texture("sound_off")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetTable;

    #[test]
    fn test_load_from_defaults() {
        let table = AssetTable::with_defaults("assets");
        let skin = Skin::load(&table).unwrap();
        assert_eq!(skin.bird[1], table.texture("bird_1").unwrap());
        assert_eq!(skin.digits[9], table.texture("digit_9").unwrap());
    }

    #[test]
    fn test_missing_texture_fails() {
        let mut table = AssetTable::new();
        table.register("background", "bg.png", 288, 456).unwrap();
        assert!(matches!(
            Skin::load(&table),
            Err(AssetError::Missing { name }) if name == "bird_0"
        ));
    }
}
