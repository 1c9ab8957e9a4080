use serde::{Serialize, Serializer};

use crate::common::{ColorIdx, ColorValue};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    pub red: ColorValue,
    pub green: ColorValue,
    pub blue: ColorValue,
    pub alpha: ColorValue,
}

impl Rgba {
    pub const fn new(red: ColorValue, green: ColorValue, blue: ColorValue, alpha: ColorValue) -> Self {
        Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

// Palette entries are written as hex strings, which is what the front end parses.
impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

pub const TRANSPARENT: ColorIdx = 0;
pub const NAVY: ColorIdx = 1;
pub const PLUM: ColorIdx = 2;
pub const DARK_GREEN: ColorIdx = 3;
pub const BROWN: ColorIdx = 4;
pub const DARK_GRAY: ColorIdx = 5;
pub const LIGHT_GRAY: ColorIdx = 6;
pub const WHITE: ColorIdx = 7;
pub const RED: ColorIdx = 8;
pub const ORANGE: ColorIdx = 9;
pub const YELLOW: ColorIdx = 10;
pub const GREEN: ColorIdx = 11;
pub const BLUE: ColorIdx = 12;
pub const LAVENDER: ColorIdx = 13;
pub const PINK: ColorIdx = 14;
// Fully transparent like index 0 but with a peach RGB. Nothing draws with it;
// the slot is kept so existing packs keep the same palette.
pub const RESERVED: ColorIdx = 15;

pub const PALETTE: [Rgba; 16] = [
    Rgba::new(0x00, 0x00, 0x00, 0x00),
    Rgba::new(0x1d, 0x2b, 0x53, 0xff),
    Rgba::new(0x7e, 0x25, 0x53, 0xff),
    Rgba::new(0x00, 0x87, 0x51, 0xff),
    Rgba::new(0xab, 0x52, 0x36, 0xff),
    Rgba::new(0x5f, 0x57, 0x4f, 0xff),
    Rgba::new(0xc2, 0xc3, 0xc7, 0xff),
    Rgba::new(0xff, 0xf1, 0xe8, 0xff),
    Rgba::new(0xff, 0x00, 0x4d, 0xff),
    Rgba::new(0xff, 0xa3, 0x00, 0xff),
    Rgba::new(0xff, 0xec, 0x27, 0xff),
    Rgba::new(0x00, 0xe4, 0x36, 0xff),
    Rgba::new(0x29, 0xad, 0xff, 0xff),
    Rgba::new(0x83, 0x76, 0x9c, 0xff),
    Rgba::new(0xff, 0x77, 0xa8, 0xff),
    Rgba::new(0xff, 0xcc, 0xaa, 0x00),
];
