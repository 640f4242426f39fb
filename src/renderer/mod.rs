//! Rendering module
//!
//! Produces draw lists and tessellated vertices; the host owns the GPU and
//! maps `TextureId`s to its own textures.

pub mod draw_list;
pub mod shapes;
pub mod skin;
pub mod sprites;
pub mod vertex;

pub use draw_list::{DrawCommand, DrawList};
pub use skin::Skin;
pub use sprites::draw_layer;
pub use vertex::Vertex;

/// Anything that can append itself to a frame's draw list
pub trait Drawable {
    fn draw(&self, skin: &Skin, out: &mut DrawList);
}
