use crate::{
    canvas::{Canvas, SpriteCanvas},
    common::{ColorIdx, PixelCoord, SPRITE_SIZE},
    draw::{circle, point, rect},
    palette::*,
    tiles::{grass_tile, water_tile},
};

pub type Recipe = fn() -> SpriteCanvas;

// Non-seeded recipes, in catalog order
pub const RECIPES: &[(&str, Recipe)] = &[
    ("goblin", goblin),
    ("tree", tree),
    ("rock", rock),
    ("mushroom", mushroom),
    ("fish", fish),
    ("deer", deer),
    ("wolf", wolf),
    ("barbarian", barbarian),
    ("pine_tree", pine_tree),
    ("dead_tree", dead_tree),
    ("berry_bush", berry_bush),
    ("fern", fern),
    ("reed", reed),
    ("flower_red", flower_red),
    ("flower_blue", flower_blue),
    ("sapling", sapling),
    ("rabbit", rabbit),
    ("boar", boar),
    ("crow", crow),
    ("snake", snake),
    ("bear", bear),
    ("goblin_child", goblin_child),
    ("shaman", shaman),
    ("human_raider", human_raider),
    ("elf_ranger", elf_ranger),
    ("ogre", ogre),
    ("spring_turret", spring_turret),
    ("spike_trap", spike_trap),
    ("snare_line", snare_line),
    ("watchtower", watchtower),
    ("alarm_gong", alarm_gong),
    ("workshop_bench", workshop_bench),
    ("cistern_pump", cistern_pump),
    ("smokehouse", smokehouse),
    ("medic_hut", medic_hut),
    ("signal_beacon", signal_beacon),
    ("gatehouse_mechanism", gatehouse_mechanism),
    ("water_tile", water_tile),
    ("grass_tile", grass_tile),
];

pub fn blank() -> SpriteCanvas {
    Canvas::new(SPRITE_SIZE, SPRITE_SIZE, TRANSPARENT)
}

// Creatures

pub fn goblin() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 5, 7, 6, 6, GREEN); // body
    rect(&mut s, 8, 8, 2, 5, DARK_GREEN); // shading
    circle(&mut s, 8, 5, 3, GREEN); // head
    point(&mut s, 4, 5, GREEN); // ears
    point(&mut s, 12, 5, GREEN);
    point(&mut s, 7, 5, RED); // eyes
    point(&mut s, 9, 5, RED);
    rect(&mut s, 11, 9, 2, 1, LIGHT_GRAY); // dagger
    point(&mut s, 13, 9, ORANGE);
    point(&mut s, 6, 13, BROWN); // feet
    point(&mut s, 9, 13, BROWN);
    s
}

pub fn fish() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 4, 7, 7, 3, BLUE);
    point(&mut s, 3, 8, BLUE);
    point(&mut s, 11, 7, BLUE);
    point(&mut s, 11, 9, BLUE);
    point(&mut s, 12, 8, WHITE);
    point(&mut s, 6, 8, NAVY);
    s
}

pub fn deer() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 5, 8, 6, 4, BROWN);
    rect(&mut s, 10, 7, 3, 3, BROWN);
    rect(&mut s, 6, 12, 1, 3, BROWN);
    rect(&mut s, 9, 12, 1, 3, BROWN);
    point(&mut s, 12, 8, WHITE);
    point(&mut s, 13, 7, YELLOW); // antlers
    point(&mut s, 13, 6, YELLOW);
    s
}

pub fn wolf() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 4, 8, 8, 3, DARK_GRAY);
    rect(&mut s, 10, 7, 3, 2, DARK_GRAY);
    rect(&mut s, 5, 11, 1, 3, DARK_GRAY);
    rect(&mut s, 9, 11, 1, 3, DARK_GRAY);
    point(&mut s, 3, 9, DARK_GRAY);
    point(&mut s, 12, 7, WHITE);
    point(&mut s, 13, 7, RED);
    s
}

pub fn rabbit() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 6, 9, 5, 3, LIGHT_GRAY);
    rect(&mut s, 10, 8, 2, 2, LIGHT_GRAY);
    rect(&mut s, 10, 5, 1, 3, LIGHT_GRAY);
    rect(&mut s, 11, 5, 1, 3, LIGHT_GRAY);
    point(&mut s, 11, 8, NAVY);
    point(&mut s, 5, 10, LIGHT_GRAY);
    s
}

pub fn boar() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 4, 8, 8, 4, BROWN);
    rect(&mut s, 11, 9, 2, 2, BROWN);
    rect(&mut s, 5, 12, 1, 3, BROWN);
    rect(&mut s, 9, 12, 1, 3, BROWN);
    point(&mut s, 12, 10, WHITE); // tusks
    point(&mut s, 13, 10, WHITE);
    s
}

pub fn crow() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 5, 8, 6, 3, NAVY);
    point(&mut s, 10, 8, LIGHT_GRAY);
    point(&mut s, 11, 9, ORANGE);
    point(&mut s, 4, 9, NAVY);
    point(&mut s, 6, 11, DARK_GRAY);
    point(&mut s, 8, 11, DARK_GRAY);
    s
}

pub fn snake() -> SpriteCanvas {
    let mut s = blank();
    for i in 0..10 {
        let y = 9 + (i % 3) - 1;
        point(&mut s, 3 + i, y, GREEN);
    }
    point(&mut s, 12, 8, WHITE);
    point(&mut s, 13, 8, RED);
    s
}

pub fn bear() -> SpriteCanvas {
    let mut s = blank();
    circle(&mut s, 8, 9, 5, DARK_GRAY);
    circle(&mut s, 6, 6, 2, DARK_GRAY);
    circle(&mut s, 10, 6, 2, DARK_GRAY);
    point(&mut s, 7, 8, NAVY);
    point(&mut s, 9, 8, NAVY);
    point(&mut s, 8, 10, WHITE);
    s
}

// Humanoids share a head-over-torso layout with a blade on the right.

fn armed_figure(skin: ColorIdx, tunic: ColorIdx) -> SpriteCanvas {
    let mut s = blank();
    circle(&mut s, 8, 5, 3, skin);
    rect(&mut s, 5, 8, 6, 6, tunic);
    rect(&mut s, 11, 9, 2, 1, LIGHT_GRAY);
    s
}

pub fn barbarian() -> SpriteCanvas {
    let mut s = armed_figure(WHITE, BROWN);
    point(&mut s, 13, 9, RED);
    point(&mut s, 7, 5, NAVY);
    point(&mut s, 9, 5, NAVY);
    s
}

pub fn human_raider() -> SpriteCanvas {
    let mut s = armed_figure(WHITE, PLUM);
    point(&mut s, 13, 9, RED);
    point(&mut s, 7, 5, NAVY);
    point(&mut s, 9, 5, NAVY);
    s
}

pub fn elf_ranger() -> SpriteCanvas {
    let mut s = blank();
    circle(&mut s, 8, 5, 3, WHITE);
    point(&mut s, 4, 5, GREEN);
    point(&mut s, 12, 5, GREEN);
    rect(&mut s, 5, 8, 6, 6, DARK_GREEN);
    rect(&mut s, 11, 9, 2, 1, LIGHT_GRAY);
    point(&mut s, 13, 9, YELLOW);
    s
}

pub fn goblin_child() -> SpriteCanvas {
    let mut s = blank();
    circle(&mut s, 8, 6, 2, GREEN);
    rect(&mut s, 6, 8, 4, 4, DARK_GREEN);
    point(&mut s, 7, 6, RED);
    point(&mut s, 9, 6, RED);
    point(&mut s, 6, 12, BROWN);
    point(&mut s, 9, 12, BROWN);
    s
}

pub fn shaman() -> SpriteCanvas {
    let mut s = blank();
    circle(&mut s, 8, 5, 3, GREEN);
    rect(&mut s, 5, 8, 6, 6, LAVENDER);
    rect(&mut s, 3, 7, 2, 1, YELLOW); // staff
    rect(&mut s, 4, 8, 1, 5, YELLOW);
    point(&mut s, 7, 5, WHITE);
    point(&mut s, 9, 5, WHITE);
    point(&mut s, 8, 3, YELLOW);
    s
}

pub fn ogre() -> SpriteCanvas {
    let mut s = blank();
    circle(&mut s, 8, 5, 4, BROWN);
    rect(&mut s, 4, 8, 8, 7, DARK_GRAY);
    rect(&mut s, 12, 10, 2, 2, LIGHT_GRAY);
    point(&mut s, 7, 5, NAVY);
    point(&mut s, 10, 5, NAVY);
    point(&mut s, 8, 7, WHITE);
    s
}

// Flora and terrain features

pub fn tree() -> SpriteCanvas {
    let mut s = blank();
    circle(&mut s, 8, 6, 5, GREEN); // canopy
    circle(&mut s, 6, 7, 4, DARK_GREEN);
    circle(&mut s, 10, 7, 4, DARK_GREEN);
    rect(&mut s, 7, 9, 2, 6, BROWN); // trunk
    point(&mut s, 8, 3, YELLOW);
    point(&mut s, 10, 5, YELLOW);
    point(&mut s, 5, 6, YELLOW);
    s
}

pub fn rock() -> SpriteCanvas {
    let mut s = blank();
    circle(&mut s, 7, 10, 4, DARK_GRAY);
    circle(&mut s, 10, 9, 3, LIGHT_GRAY);
    point(&mut s, 9, 8, WHITE);
    point(&mut s, 7, 9, WHITE);
    s
}

pub fn mushroom() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 4, 6, 8, 3, RED); // cap
    rect(&mut s, 5, 5, 6, 1, RED);
    point(&mut s, 6, 7, WHITE); // spots
    point(&mut s, 9, 7, WHITE);
    rect(&mut s, 7, 9, 2, 4, WHITE); // stem
    s
}

pub fn pine_tree() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 7, 12, 2, 3, BROWN);
    for y in 3..13 {
        let span = 1 + (y - 3) / 2;
        for x in (8 - span)..(9 + span) {
            let color = if (x + y) % 3 != 0 { DARK_GREEN } else { GREEN };
            point(&mut s, x, y, color);
        }
    }
    point(&mut s, 8, 2, GREEN);
    s
}

pub fn dead_tree() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 7, 6, 2, 9, BROWN);
    rect(&mut s, 5, 7, 2, 1, DARK_GRAY);
    rect(&mut s, 9, 8, 2, 1, DARK_GRAY);
    rect(&mut s, 4, 9, 2, 1, DARK_GRAY);
    rect(&mut s, 10, 10, 2, 1, DARK_GRAY);
    point(&mut s, 8, 5, LIGHT_GRAY);
    s
}

pub fn berry_bush() -> SpriteCanvas {
    let mut s = blank();
    circle(&mut s, 8, 9, 5, DARK_GREEN);
    for (x, y) in [(6, 8), (9, 7), (10, 10), (7, 11)] {
        point(&mut s, x, y, RED);
    }
    point(&mut s, 8, 6, GREEN);
    s
}

pub fn fern() -> SpriteCanvas {
    let mut s = blank();
    for y in 7..14 {
        point(&mut s, 8, y, GREEN);
    }
    for i in 0..5 {
        point(&mut s, 8 - i, 10 - i, DARK_GREEN);
        point(&mut s, 8 + i, 10 - i, DARK_GREEN);
        point(&mut s, 8 - i, 11 + i, DARK_GREEN);
        point(&mut s, 8 + i, 11 + i, DARK_GREEN);
    }
    s
}

pub fn reed() -> SpriteCanvas {
    let mut s = blank();
    for x in [6, 8, 10] {
        for y in 5..15 {
            let color = if (x + y) % 4 != 0 { GREEN } else { DARK_GREEN };
            point(&mut s, x, y, color);
        }
    }
    for x in [5, 7, 9, 11] {
        point(&mut s, x, 5, YELLOW);
        point(&mut s, x, 6, YELLOW);
    }
    s
}

const PETALS: [(PixelCoord, PixelCoord); 5] = [(-1, -1), (0, -2), (1, -1), (-1, 0), (1, 0)];

fn flower(petal: ColorIdx) -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 7, 9, 2, 6, GREEN);
    point(&mut s, 8, 8, YELLOW);
    for (dx, dy) in PETALS {
        point(&mut s, 8 + dx, 8 + dy, petal);
    }
    s
}

pub fn flower_red() -> SpriteCanvas {
    flower(RED)
}

pub fn flower_blue() -> SpriteCanvas {
    flower(BLUE)
}

pub fn sapling() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 7, 10, 2, 5, BROWN);
    circle(&mut s, 8, 8, 3, GREEN);
    point(&mut s, 6, 9, DARK_GREEN);
    point(&mut s, 10, 9, DARK_GREEN);
    s
}

// Traps and structures

pub fn spring_turret() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 4, 10, 8, 3, DARK_GRAY);
    rect(&mut s, 7, 7, 2, 4, LIGHT_GRAY);
    rect(&mut s, 8, 5, 5, 2, LIGHT_GRAY);
    point(&mut s, 13, 5, ORANGE);
    point(&mut s, 6, 11, YELLOW);
    point(&mut s, 9, 11, YELLOW);
    // coil
    for x in 5..11 {
        point(&mut s, x, 9 + x % 2, LAVENDER);
    }
    s
}

pub fn spike_trap() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 3, 11, 10, 2, BROWN);
    for i in 0..5 {
        point(&mut s, 4 + i * 2, 10, LIGHT_GRAY);
        point(&mut s, 4 + i * 2, 9, WHITE);
    }
    point(&mut s, 3, 12, DARK_GRAY);
    point(&mut s, 12, 12, DARK_GRAY);
    s
}

pub fn snare_line() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 4, 11, 8, 1, BROWN);
    for x in (4..12).step_by(2) {
        point(&mut s, x, 10, LIGHT_GRAY);
    }
    circle(&mut s, 10, 8, 2, LIGHT_GRAY);
    point(&mut s, 10, 8, TRANSPARENT); // loop hole
    for y in 8..11 {
        point(&mut s, 5, y, GREEN);
    }
    s
}

pub fn watchtower() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 6, 4, 4, 2, LIGHT_GRAY);
    rect(&mut s, 5, 6, 6, 2, DARK_GRAY);
    rect(&mut s, 6, 8, 1, 6, BROWN);
    rect(&mut s, 9, 8, 1, 6, BROWN);
    rect(&mut s, 7, 9, 2, 1, DARK_GRAY);
    point(&mut s, 7, 5, RED);
    point(&mut s, 8, 5, RED);
    point(&mut s, 5, 8, LIGHT_GRAY);
    point(&mut s, 10, 8, LIGHT_GRAY);
    s
}

pub fn alarm_gong() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 4, 4, 8, 1, LIGHT_GRAY);
    rect(&mut s, 5, 5, 1, 8, BROWN);
    rect(&mut s, 10, 5, 1, 8, BROWN);
    circle(&mut s, 8, 8, 3, ORANGE);
    point(&mut s, 8, 8, YELLOW);
    rect(&mut s, 2, 9, 2, 1, LIGHT_GRAY); // mallet
    point(&mut s, 3, 8, DARK_GRAY);
    s
}

pub fn workshop_bench() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 4, 8, 8, 2, BROWN);
    rect(&mut s, 5, 10, 1, 4, DARK_GRAY);
    rect(&mut s, 10, 10, 1, 4, DARK_GRAY);
    rect(&mut s, 6, 6, 4, 1, LIGHT_GRAY); // anvil
    rect(&mut s, 7, 5, 2, 1, LIGHT_GRAY);
    point(&mut s, 9, 6, YELLOW);
    point(&mut s, 10, 5, YELLOW);
    s
}

pub fn cistern_pump() -> SpriteCanvas {
    let mut s = blank();
    circle(&mut s, 8, 9, 4, BLUE);
    circle(&mut s, 8, 9, 3, NAVY);
    rect(&mut s, 7, 4, 2, 3, LIGHT_GRAY);
    rect(&mut s, 9, 4, 3, 1, LIGHT_GRAY);
    point(&mut s, 12, 4, WHITE);
    point(&mut s, 8, 9, WHITE);
    s
}

fn hut(walls: ColorIdx) -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 4, 7, 8, 6, walls);
    rect(&mut s, 6, 5, 4, 2, DARK_GRAY); // roof
    rect(&mut s, 7, 9, 2, 4, NAVY); // door
    s
}

pub fn smokehouse() -> SpriteCanvas {
    let mut s = hut(BROWN);
    point(&mut s, 8, 4, LIGHT_GRAY);
    point(&mut s, 9, 3, LAVENDER); // smoke
    point(&mut s, 10, 2, LAVENDER);
    s
}

pub fn medic_hut() -> SpriteCanvas {
    let mut s = hut(DARK_GREEN);
    rect(&mut s, 7, 7, 2, 4, WHITE); // cross
    rect(&mut s, 6, 8, 4, 2, WHITE);
    s
}

pub fn signal_beacon() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 7, 7, 2, 7, BROWN);
    point(&mut s, 8, 6, LIGHT_GRAY);
    point(&mut s, 8, 5, ORANGE);
    point(&mut s, 7, 4, YELLOW);
    point(&mut s, 9, 4, YELLOW);
    // rays
    point(&mut s, 6, 3, WHITE);
    point(&mut s, 10, 3, WHITE);
    point(&mut s, 5, 2, LIGHT_GRAY);
    point(&mut s, 11, 2, LIGHT_GRAY);
    s
}

pub fn gatehouse_mechanism() -> SpriteCanvas {
    let mut s = blank();
    rect(&mut s, 3, 9, 10, 4, DARK_GRAY);
    rect(&mut s, 5, 7, 6, 2, LIGHT_GRAY);
    rect(&mut s, 7, 10, 2, 3, NAVY);
    circle(&mut s, 5, 11, 2, LIGHT_GRAY); // winches
    circle(&mut s, 11, 11, 2, LIGHT_GRAY);
    point(&mut s, 5, 11, NAVY);
    point(&mut s, 11, 11, NAVY);
    s
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::*;

    #[test]
    fn recipe_ids_are_unique() {
        let ids: HashSet<_> = RECIPES.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), RECIPES.len());
    }

    #[test]
    fn goblin_details() {
        let s = goblin();
        assert_eq!(s.get(7, 5), Some(RED));
        assert_eq!(s.get(9, 5), Some(RED));
        assert_eq!(s.get(13, 9), Some(ORANGE));
        assert_eq!(s.get(0, 0), Some(TRANSPARENT));
        // The head overwrites the top row of shading; the rest survives.
        assert_eq!(s.get(8, 8), Some(GREEN));
        assert_eq!(s.get(8, 9), Some(DARK_GREEN));
    }

    #[test]
    fn snare_loop_is_punched_out() {
        let s = snare_line();
        assert_eq!(s.get(10, 8), Some(TRANSPARENT));
        assert_eq!(s.get(10, 7), Some(LIGHT_GRAY));
    }

    #[test]
    fn flowers_differ_only_in_petals() {
        let red = flower_red().flatten();
        let blue = flower_blue().flatten();
        let diffs: Vec<_> = red
            .iter()
            .zip(&blue)
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (*a, *b))
            .collect();
        assert_eq!(diffs, vec![(RED, BLUE); PETALS.len()]);
    }

    #[test]
    fn pine_tree_widens_downward() {
        let s = pine_tree();
        let row_width = |y| (0..16).filter(|&x| s.get(x, y) != Some(TRANSPARENT)).count();
        assert_eq!(row_width(3), 3);
        assert_eq!(row_width(12), 11);
        assert_eq!(s.get(8, 2), Some(GREEN));
    }
}
