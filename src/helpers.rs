use crate::common::{Color565, ColorRGB, ColorValue};

// Truncating scale of an 8-bit channel down to `bits` bits.
pub fn scale_channel(c: ColorValue, bits: u32) -> u16 {
    let max = (1u32 << bits) - 1;
    (c as u32 * max / 255) as u16
}

pub fn rgb565(red: ColorValue, green: ColorValue, blue: ColorValue) -> Color565 {
    let r5 = scale_channel(red, 5);
    let g6 = scale_channel(green, 6);
    let b5 = scale_channel(blue, 5);
    r5 << 11 | g6 << 5 | b5
}

pub fn quantize(color: ColorRGB) -> Color565 {
    let (r, g, b) = color;
    rgb565(r, g, b)
}
