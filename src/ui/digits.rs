//! Numbers drawn with one sprite per digit

use glam::Vec2;

use crate::renderer::{DrawList, Skin};

/// Unscaled glyph size
pub const DIGIT_SIZE: Vec2 = Vec2::new(24.0, 36.0);
/// Unscaled gap between glyphs
pub const DIGIT_SPACING: f32 = 2.0;

/// Horizontal anchoring of a number relative to its x position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// Decimal digits of `value`, most significant first
pub fn digits_of(value: u32) -> Vec<usize> {
    value
        .to_string()
        .bytes()
        .map(|b| (b - b'0') as usize)
        .collect()
}

/// Top-left position of every glyph for `value` anchored at `anchor`
pub fn layout_number(value: u32, anchor: Vec2, align: Align, scale: f32) -> Vec<(usize, Vec2)> {
    let digits = digits_of(value);
    let glyph = DIGIT_SIZE * scale;
    let step = glyph.x + DIGIT_SPACING * scale;
    let total = step * digits.len() as f32 - DIGIT_SPACING * scale;
    let start_x = match align {
        Align::Left => anchor.x,
        Align::Center => anchor.x - total * 0.5,
        Align::Right => anchor.x - total,
    };
    digits
        .into_iter()
        .enumerate()
        .map(|(i, d)| (d, Vec2::new(start_x + step * i as f32, anchor.y)))
        .collect()
}

pub fn draw_number(
    value: u32,
    anchor: Vec2,
    align: Align,
    scale: f32,
    skin: &Skin,
    out: &mut DrawList,
) {
    let size = DIGIT_SIZE * scale;
    for (digit, pos) in layout_number(value, anchor, align, scale) {
        out.sprite(skin.digits[digit], pos, size);
    }
}
