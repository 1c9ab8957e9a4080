pub type ColorValue = u8; // Color channel value (0-255)
pub type ColorIdx = u8; // Index into the sprite palette (0-15)
pub type ColorRGB = (ColorValue, ColorValue, ColorValue);
pub type Color565 = u16; // Packed RRRRRGGGGGGBBBBB
pub type PixelCoord = i32;
pub type Seed = u32;

// Fixed canvas sizes. Nothing else is supported by the consumer.
pub const SPRITE_SIZE: usize = 16;
pub const SCENE_WIDTH: usize = 128;
pub const SCENE_HEIGHT: usize = 96;
