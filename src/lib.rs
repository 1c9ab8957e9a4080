pub mod canvas;
pub mod catalog;
pub mod common;
pub mod draw;
pub mod encode;
pub mod helpers;
pub mod noise;
pub mod palette;
pub mod persist;
pub mod preview;
pub mod scene;
pub mod sprites;
pub mod tiles;

pub use encode::{scene_bitmap, sprite_pack, SceneBitmap, SpritePack};
