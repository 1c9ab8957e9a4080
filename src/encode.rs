use anyhow::{bail, ensure, Context, Result};
use hashbrown::HashSet;
use log::{debug, info};
use serde::Serialize;
use serde_repr::Serialize_repr;

use crate::{
    canvas::{SceneCanvas, SpriteCanvas},
    catalog::catalog,
    common::{Color565, ColorIdx},
    helpers::quantize,
    palette::{Rgba, PALETTE},
    scene,
};

#[derive(Serialize_repr, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FormatVersion {
    V1 = 1,
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitmapFormat {
    #[serde(rename = "indexed8")]
    Indexed8,
    #[serde(rename = "rgb565")]
    Rgb565,
}

// Field order is the JSON key order the front end expects.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SpriteRecord {
    pub id: String,
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<ColorIdx>,
}

impl SpriteRecord {
    pub fn new(id: String, width: usize, height: usize, pixels: Vec<ColorIdx>) -> Result<Self> {
        ensure!(
            pixels.len() == width * height,
            "sprite {id:?} declares {width}x{height} but has {} pixels",
            pixels.len()
        );
        Ok(SpriteRecord {
            id,
            width,
            height,
            pixels,
        })
    }

    pub fn from_canvas(id: String, canvas: &SpriteCanvas) -> Result<Self> {
        Self::new(id, canvas.width(), canvas.height(), canvas.flatten())
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SpritePack {
    pub version: FormatVersion,
    pub format: BitmapFormat,
    pub palette: Vec<Rgba>,
    pub sprites: Vec<SpriteRecord>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SceneBitmap {
    pub version: FormatVersion,
    pub format: BitmapFormat,
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color565>,
}

pub fn encode_sprite_pack(
    palette: &[Rgba],
    sprites: impl IntoIterator<Item = (String, SpriteCanvas)>,
) -> Result<SpritePack> {
    let mut seen = HashSet::new();
    let mut records = vec![];
    for (id, canvas) in sprites {
        ensure!(seen.insert(id.clone()), "duplicate sprite id {id:?}");
        if let Some(&bad) = canvas
            .flatten()
            .iter()
            .find(|&&c| c as usize >= palette.len())
        {
            bail!(
                "sprite {id:?} uses color {bad} but the palette has {} entries",
                palette.len()
            );
        }
        debug!("Encoding sprite {id}");
        let record = SpriteRecord::from_canvas(id, &canvas)
            .context("flattening sprite canvas")?;
        records.push(record);
    }
    info!("Encoded {} sprites", records.len());
    Ok(SpritePack {
        version: FormatVersion::V1,
        format: BitmapFormat::Indexed8,
        palette: palette.to_vec(),
        sprites: records,
    })
}

pub fn encode_scene_bitmap(canvas: &SceneCanvas) -> Result<SceneBitmap> {
    let (width, height) = (canvas.width(), canvas.height());
    let pixels = canvas.flatten().into_iter().map(quantize).collect::<Vec<_>>();
    ensure!(
        pixels.len() == width * height,
        "scene declares {width}x{height} but has {} pixels",
        pixels.len()
    );
    info!("Encoded {width}x{height} scene");
    Ok(SceneBitmap {
        version: FormatVersion::V1,
        format: BitmapFormat::Rgb565,
        width,
        height,
        pixels,
    })
}

pub fn sprite_pack() -> Result<SpritePack> {
    encode_sprite_pack(&PALETTE, catalog())
}

pub fn scene_bitmap() -> Result<SceneBitmap> {
    encode_scene_bitmap(&scene::compose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{canvas::Canvas, sprites::blank};

    #[test]
    fn record_length_must_match_dimensions() {
        assert!(SpriteRecord::new("ok".into(), 2, 2, vec![0; 4]).is_ok());
        let err = SpriteRecord::new("short".into(), 2, 2, vec![0; 3]).unwrap_err();
        assert!(err.to_string().contains("short"));
        assert!(err.to_string().contains("2x2"));
    }

    #[test]
    fn duplicate_ids_abort() {
        let err = encode_sprite_pack(
            &PALETTE,
            vec![("rock".to_string(), blank()), ("rock".to_string(), blank())],
        )
        .unwrap_err();
        assert!(err.to_string().contains("rock"));
    }

    #[test]
    fn out_of_palette_index_aborts() {
        let mut canvas = blank();
        canvas.set(3, 3, 16);
        let err = encode_sprite_pack(&PALETTE, vec![("bad".to_string(), canvas)]).unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn pack_header() {
        let pack = encode_sprite_pack(&PALETTE, vec![("a".to_string(), blank())]).unwrap();
        assert_eq!(pack.version, FormatVersion::V1);
        assert_eq!(pack.format, BitmapFormat::Indexed8);
        assert_eq!(pack.palette.len(), 16);
        assert_eq!(pack.sprites[0].pixels.len(), 256);
    }

    #[test]
    fn scene_record_json_shape() {
        let canvas = Canvas::new(2, 1, (255, 255, 255));
        let bitmap = encode_scene_bitmap(&canvas).unwrap();
        let json = serde_json::to_string(&bitmap).unwrap();
        assert_eq!(
            json,
            r#"{"version":1,"format":"rgb565","width":2,"height":1,"pixels":[65535,65535]}"#
        );
    }
}
