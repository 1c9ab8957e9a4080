use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{ensure, Context, Result};
use log::info;

use crate::{canvas::SceneCanvas, encode::SpritePack, persist::create_parent_dir};

pub const SHEET_COLUMNS: usize = 16;

pub struct RgbaImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // 4 bytes per pixel
}

// Cells are sized to the largest sprite; unused space stays transparent.
pub fn sprite_sheet(pack: &SpritePack, columns: usize) -> Result<RgbaImage> {
    ensure!(columns > 0, "sprite sheet needs at least one column");
    let cell_w = pack.sprites.iter().map(|s| s.width).max().unwrap_or(0);
    let cell_h = pack.sprites.iter().map(|s| s.height).max().unwrap_or(0);
    let rows = pack.sprites.len().div_ceil(columns);
    let width = cell_w * columns.min(pack.sprites.len());
    let height = cell_h * rows;
    let mut data = vec![0u8; width * height * 4];

    for (i, sprite) in pack.sprites.iter().enumerate() {
        let (ox, oy) = ((i % columns) * cell_w, (i / columns) * cell_h);
        for (j, &idx) in sprite.pixels.iter().enumerate() {
            let color = pack
                .palette
                .get(idx as usize)
                .with_context(|| {
                    format!("sprite {:?} uses color {idx} outside the palette", sprite.id)
                })?;
            let (x, y) = (ox + j % sprite.width, oy + j / sprite.width);
            let o = (y * width + x) * 4;
            data[o..o + 4].copy_from_slice(&[color.red, color.green, color.blue, color.alpha]);
        }
    }
    Ok(RgbaImage {
        width,
        height,
        data,
    })
}

pub fn scene_image(canvas: &SceneCanvas) -> RgbaImage {
    let data = canvas
        .flatten()
        .into_iter()
        .flat_map(|(r, g, b)| [r, g, b, 255])
        .collect();
    RgbaImage {
        width: canvas.width(),
        height: canvas.height(),
        data,
    }
}

pub fn save_png(path: &Path, image: &RgbaImage) -> Result<()> {
    info!("Saving {}", path.display());
    create_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        image.width as u32,
        image.height as u32,
    );
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.data)?;
    writer.finish()?;
    Ok(())
}

pub fn save_previews(dir: &Path, pack: &SpritePack, scene: &SceneCanvas) -> Result<()> {
    save_png(&dir.join("sprites.png"), &sprite_sheet(pack, SHEET_COLUMNS)?)?;
    save_png(&dir.join("scene.png"), &scene_image(scene))?;
    Ok(())
}
