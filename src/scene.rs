// Overworld backdrop. Layers are painted bottom to top: grass, grain, river,
// trees, goblins.

use log::debug;

use crate::{
    canvas::{Canvas, SceneCanvas},
    common::{ColorRGB, PixelCoord, SCENE_HEIGHT, SCENE_WIDTH},
    draw::rect,
    noise::LinearHash,
};

pub const GRASS: ColorRGB = (28, 70, 44);
pub const GRASS_LIGHT: ColorRGB = (34, 82, 48);
pub const GRASS_DARK: ColorRGB = (24, 58, 38);
pub const RIVER: ColorRGB = (28, 95, 125);
pub const RIVER_RIPPLE: ColorRGB = (40, 120, 155);
pub const CANOPY: ColorRGB = (20, 98, 38);
pub const CANOPY_EDGE: ColorRGB = (42, 80, 38);
pub const GOBLIN: ColorRGB = (45, 220, 80);

const GRAIN_LIGHT: LinearHash = LinearHash::new(17, 19, 23);
const GRAIN_DARK: LinearHash = LinearHash::new(11, 13, 37);
const RIPPLE: LinearHash = LinearHash::new(1, 1, 4);

// River band spans [center - 6, center + 8).
const RIVER_LEFT: PixelCoord = 6;
const RIVER_RIGHT: PixelCoord = 8;

const TREE_CORE_R2: PixelCoord = 25;
const TREE_EDGE_R2: PixelCoord = 36;
const TREE_REACH: PixelCoord = 5;

pub const TREE_SPOTS: [(PixelCoord, PixelCoord); 6] =
    [(84, 20), (92, 28), (75, 45), (110, 52), (88, 70), (68, 73)];

pub const GOBLIN_SPOTS: [(PixelCoord, PixelCoord); 5] =
    [(56, 30), (60, 31), (62, 35), (58, 38), (52, 34)];

// Diagonal drift plus a y^2 mod 11 wobble
pub fn river_center(y: PixelCoord) -> PixelCoord {
    let drift = (SCENE_WIDTH as PixelCoord * 20 + y * 35) / 100;
    drift + (y * y) % 11 - 5
}

fn paint_grain(canvas: &mut SceneCanvas) {
    let coords: Vec<_> = canvas.coords().collect();
    for (x, y) in coords {
        if GRAIN_LIGHT.hits(x, y, 0) {
            canvas.set(x, y, GRASS_LIGHT);
        } else if GRAIN_DARK.hits(x, y, 0) {
            canvas.set(x, y, GRASS_DARK);
        }
    }
}

fn paint_river(canvas: &mut SceneCanvas) {
    for y in 0..canvas.height() as PixelCoord {
        let center = river_center(y);
        for x in (center - RIVER_LEFT)..(center + RIVER_RIGHT) {
            let color = if RIPPLE.hits(x, y, 0) { RIVER_RIPPLE } else { RIVER };
            canvas.set(x, y, color);
        }
    }
}

// Solid canopy disk with a one-pixel softer rim, clipped to the stamp's box.
fn stamp_tree(canvas: &mut SceneCanvas, cx: PixelCoord, cy: PixelCoord) {
    for y in (cy - TREE_REACH)..=(cy + TREE_REACH) {
        for x in (cx - TREE_REACH)..=(cx + TREE_REACH) {
            let d2 = (x - cx) * (x - cx) + (y - cy) * (y - cy);
            if d2 <= TREE_CORE_R2 {
                canvas.set(x, y, CANOPY);
            } else if d2 <= TREE_EDGE_R2 {
                canvas.set(x, y, CANOPY_EDGE);
            }
        }
    }
}

fn stamp_goblin(canvas: &mut SceneCanvas, gx: PixelCoord, gy: PixelCoord) {
    rect(canvas, gx - 1, gy - 1, 3, 3, GOBLIN);
}

pub fn compose() -> SceneCanvas {
    let mut canvas = Canvas::new(SCENE_WIDTH, SCENE_HEIGHT, GRASS);
    paint_grain(&mut canvas);
    paint_river(&mut canvas);
    for (cx, cy) in TREE_SPOTS {
        stamp_tree(&mut canvas, cx, cy);
    }
    for (gx, gy) in GOBLIN_SPOTS {
        stamp_goblin(&mut canvas, gx, gy);
    }
    debug!(
        "Composed {}x{} scene with {} trees and {} goblins",
        canvas.width(),
        canvas.height(),
        TREE_SPOTS.len(),
        GOBLIN_SPOTS.len()
    );
    canvas
}
