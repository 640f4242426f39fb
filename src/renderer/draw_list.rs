//! Back-to-front list of draw commands
//!
//! Scenes fill a `DrawList` each frame; the host either walks the commands
//! directly or uploads `to_vertices()` in one buffer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shapes;
use super::vertex::{NO_TEXTURE, Vertex};
use crate::assets::TextureId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Textured quad; `angle` in degrees about the quad's center
    Sprite {
        texture: TextureId,
        pos: Vec2,
        size: Vec2,
        angle: f32,
        alpha: f32,
    },
    /// Solid rectangle
    Fill {
        pos: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprite(&mut self, texture: TextureId, pos: Vec2, size: Vec2) {
        self.sprite_ex(texture, pos, size, 0.0, 1.0);
    }

    pub fn sprite_ex(&mut self, texture: TextureId, pos: Vec2, size: Vec2, angle: f32, alpha: f32) {
        self.commands.push(DrawCommand::Sprite {
            texture,
            pos,
            size,
            angle,
            alpha,
        });
    }

    pub fn fill(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]) {
        self.commands.push(DrawCommand::Fill { pos, size, color });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Multiply the alpha of every command pushed from `start` on
    pub fn fade_from(&mut self, start: usize, factor: f32) {
        for cmd in self.commands.iter_mut().skip(start) {
            match cmd {
                DrawCommand::Sprite { alpha, .. } => *alpha *= factor,
                DrawCommand::Fill { color, .. } => color[3] *= factor,
            }
        }
    }

    /// Sprite commands using `texture`
    pub fn count_texture(&self, texture: TextureId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { texture: t, .. } if *t == texture))
            .count()
    }

    /// Tessellate every command, six vertices per quad
    pub fn to_vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(self.commands.len() * 6);
        for cmd in &self.commands {
            let quad = match *cmd {
                DrawCommand::Sprite {
                    texture,
                    pos,
                    size,
                    angle,
                    alpha,
                } => {
                    let color = [1.0, 1.0, 1.0, alpha];
                    if angle == 0.0 {
                        shapes::quad(pos, size, color, texture.0)
                    } else {
                        shapes::rotated_quad(pos + size * 0.5, size, angle, color, texture.0)
                    }
                }
                DrawCommand::Fill { pos, size, color } => {
                    shapes::quad(pos, size, color, NO_TEXTURE)
                }
            };
            vertices.extend_from_slice(&quad);
        }
        vertices
    }
}
