// Terrain tiles. A family is a base color plus three hash-driven overrides:
// low values, a narrow band of values, then a sparse speckle.

use std::ops::RangeInclusive;

use crate::{
    canvas::{Canvas, SpriteCanvas},
    common::{ColorIdx, Seed, SPRITE_SIZE},
    noise::LinearHash,
    palette::*,
};

#[derive(Clone, Debug)]
pub struct TileFamily {
    pub name: &'static str,
    pub base: ColorIdx,
    pub hash: LinearHash,
    pub low_below: u32,
    pub low: ColorIdx,
    pub band: RangeInclusive<u32>,
    pub band_color: ColorIdx,
    pub speckle: LinearHash,
    pub speckle_color: ColorIdx,
    pub seeds: RangeInclusive<Seed>,
}

impl TileFamily {
    pub fn render(&self, seed: Seed) -> SpriteCanvas {
        let mut s = Canvas::new(SPRITE_SIZE, SPRITE_SIZE, self.base);
        let coords: Vec<_> = s.coords().collect();
        for (x, y) in coords {
            let n = self.hash.sample(x, y, seed);
            if n < self.low_below {
                s.set(x, y, self.low);
            } else if self.band.contains(&n) {
                s.set(x, y, self.band_color);
            } else if self.speckle.hits(x, y, seed) {
                s.set(x, y, self.speckle_color);
            }
        }
        s
    }

    pub fn sprite_id(&self, seed: Seed) -> String {
        format!("{}_tile_{}", self.name, seed)
    }

    pub fn variants(&self) -> impl Iterator<Item = (String, SpriteCanvas)> + '_ {
        self.seeds
            .clone()
            .map(move |seed| (self.sprite_id(seed), self.render(seed)))
    }
}

// `grass_tile` (unseeded) occupies the first grass slot, so the seeded
// variants start at 2.
pub const GRASS: TileFamily = TileFamily {
    name: "grass",
    base: DARK_GREEN,
    hash: LinearHash::seeded(11, 1, 7, 2, 13, 37),
    low_below: 4,
    low: GREEN,
    band: 9..=10,
    band_color: YELLOW,
    speckle: LinearHash::new(1, 1, 11).with_seed_offset(1),
    speckle_color: LIGHT_GRAY,
    seeds: 2..=8,
};

pub const SWAMP: TileFamily = TileFamily {
    name: "swamp",
    base: NAVY,
    hash: LinearHash::seeded(9, 1, 5, 1, 17, 41),
    low_below: 8,
    low: DARK_GREEN,
    band: 11..=13,
    band_color: BLUE,
    speckle: LinearHash::new(1, 1, 9).with_seed_offset(1),
    speckle_color: DARK_GRAY,
    seeds: 1..=8,
};

pub const HILLS: TileFamily = TileFamily {
    name: "hills",
    base: BROWN,
    hash: LinearHash::seeded(7, 1, 13, 1, 19, 47),
    low_below: 10,
    low: DARK_GRAY,
    band: 20..=22,
    band_color: LIGHT_GRAY,
    speckle: LinearHash::new(3, 1, 12).with_seed_offset(1),
    speckle_color: YELLOW,
    seeds: 1..=8,
};

pub const CAVES: TileFamily = TileFamily {
    name: "caves",
    base: DARK_GRAY,
    hash: LinearHash::seeded(5, 1, 11, 2, 23, 43),
    low_below: 11,
    low: NAVY,
    band: 16..=17,
    band_color: LIGHT_GRAY,
    speckle: LinearHash::new(1, 2, 13).with_seed_offset(1),
    speckle_color: LAVENDER,
    seeds: 1..=8,
};

pub const RUINS: TileFamily = TileFamily {
    name: "ruins",
    base: DARK_GRAY,
    hash: LinearHash::seeded(13, 1, 9, 1, 7, 53),
    low_below: 9,
    low: BROWN,
    band: 15..=17,
    band_color: LIGHT_GRAY,
    speckle: LinearHash::new(2, 1, 10).with_seed_offset(1),
    speckle_color: WHITE,
    seeds: 1..=8,
};

pub const BADLANDS: TileFamily = TileFamily {
    name: "badlands",
    base: BROWN,
    hash: LinearHash::seeded(15, 1, 3, 1, 29, 59),
    low_below: 12,
    low: ORANGE,
    band: 21..=23,
    band_color: YELLOW,
    speckle: LinearHash::new(1, 1, 8).with_seed_offset(1),
    speckle_color: DARK_GRAY,
    seeds: 1..=8,
};

pub const TILE_FAMILIES: [&TileFamily; 6] = [&GRASS, &SWAMP, &HILLS, &CAVES, &RUINS, &BADLANDS];

pub fn water_tile() -> SpriteCanvas {
    let mut s = Canvas::new(SPRITE_SIZE, SPRITE_SIZE, BLUE);
    let wave = LinearHash::new(1, 1, 3);
    let foam = LinearHash::new(1, 1, 4);
    let coords: Vec<_> = s.coords().collect();
    for (x, y) in coords {
        match y {
            3 | 7 | 11 | 14 if !wave.hits(x, y, 0) => s.set(x, y, NAVY),
            1 | 5 | 9 | 13 if foam.hits(x, y, 0) => s.set(x, y, WHITE),
            _ => {}
        }
    }
    s
}

pub fn grass_tile() -> SpriteCanvas {
    let mut s = Canvas::new(SPRITE_SIZE, SPRITE_SIZE, DARK_GREEN);
    let blades = LinearHash::new(13, 7, 19);
    let flowers = LinearHash::new(9, 11, 29);
    let coords: Vec<_> = s.coords().collect();
    for (x, y) in coords {
        if blades.sample(x, y, 0) < 3 {
            s.set(x, y, GREEN);
        } else if flowers.hits(x, y, 0) {
            s.set(x, y, YELLOW);
        }
    }
    s
}
