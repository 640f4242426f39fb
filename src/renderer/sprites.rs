//! How the simulation entities turn into draw commands

use glam::Vec2;

use super::draw_list::DrawList;
use super::skin::Skin;
use super::vertex::colors;
use super::Drawable;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Bird, Flash, PipePair, PipePool, ScrollingLayer};

/// Pipe art is taller than any segment and gets cropped by the screen
pub const PIPE_SPRITE_HEIGHT: f32 = 320.0;

impl Drawable for Bird {
    fn draw(&self, skin: &Skin, out: &mut DrawList) {
        let texture = skin.bird[self.frame % skin.bird.len()];
        let size = Vec2::new(self.width, self.height);
        out.sprite_ex(texture, self.pos, size, self.angle, 1.0);
    }
}

impl Drawable for PipePair {
    fn draw(&self, skin: &Skin, out: &mut DrawList) {
        if !self.active {
            return;
        }
        let size = Vec2::new(self.width, PIPE_SPRITE_HEIGHT);
        // Top art hangs down to the gap, bottom art starts at the gap end
        let top_y = self.top.y + self.top.height - PIPE_SPRITE_HEIGHT;
        out.sprite(skin.pipe_top, Vec2::new(self.x, top_y), size);
        out.sprite(skin.pipe_bottom, Vec2::new(self.x, self.bottom.y), size);
    }
}

impl Drawable for PipePool {
    fn draw(&self, skin: &Skin, out: &mut DrawList) {
        for pipe in self.pipes() {
            pipe.draw(skin, out);
        }
    }
}

/// Background and floor share the drawing, only the texture differs
pub fn draw_layer(layer: &ScrollingLayer, texture: crate::assets::TextureId, out: &mut DrawList) {
    let size = Vec2::new(layer.width, layer.height);
    for x in layer.tile_offsets() {
        out.sprite(texture, Vec2::new(x, layer.y), size);
    }
}

impl Drawable for Flash {
    fn draw(&self, _skin: &Skin, out: &mut DrawList) {
        if !self.is_active() || self.alpha <= 0.0 {
            return;
        }
        let mut color = colors::WHITE;
        color[3] = self.alpha;
        out.fill(Vec2::ZERO, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), color);
    }
}
