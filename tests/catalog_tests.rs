use hashbrown::HashSet;

use goblin_bitmaps::{
    catalog::catalog,
    common::{SCENE_HEIGHT, SCENE_WIDTH, SPRITE_SIZE},
    palette::{PALETTE, RESERVED, TRANSPARENT},
    scene_bitmap, sprite_pack,
    sprites::RECIPES,
    tiles::TILE_FAMILIES,
};

#[test]
fn every_record_is_complete_and_in_palette() {
    let pack = sprite_pack().unwrap();
    assert_eq!(pack.palette.len(), PALETTE.len());
    for sprite in &pack.sprites {
        assert_eq!((sprite.width, sprite.height), (SPRITE_SIZE, SPRITE_SIZE));
        assert_eq!(sprite.pixels.len(), sprite.width * sprite.height, "{}", sprite.id);
        assert!(
            sprite.pixels.iter().all(|&p| (p as usize) < pack.palette.len()),
            "{} has an index outside the palette",
            sprite.id
        );
    }
}

#[test]
fn ids_are_unique() {
    let pack = sprite_pack().unwrap();
    let ids: HashSet<_> = pack.sprites.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), pack.sprites.len());
}

#[test]
fn recipes_are_deterministic() {
    for (id, recipe) in RECIPES {
        assert_eq!(recipe().flatten(), recipe().flatten(), "{id}");
    }
    assert_eq!(catalog(), catalog());
}

#[test]
fn every_tile_family_is_seed_sensitive() {
    for family in TILE_FAMILIES {
        let renders: HashSet<_> = (1..=8).map(|seed| family.render(seed).flatten()).collect();
        assert!(renders.len() >= 2, "{} variants are all identical", family.name);
    }
}

#[test]
fn creature_sprites_have_transparent_background() {
    for (id, recipe) in RECIPES.iter().filter(|(id, _)| !id.ends_with("_tile")) {
        let canvas = recipe();
        assert_eq!(canvas.get(0, 0), Some(TRANSPARENT), "{id}");
        assert!(canvas.flatten().iter().any(|&p| p != TRANSPARENT), "{id} is empty");
    }
}

#[test]
fn reserved_slot_is_never_drawn() {
    let pack = sprite_pack().unwrap();
    assert!(pack
        .sprites
        .iter()
        .all(|s| s.pixels.iter().all(|&p| p != RESERVED)));
}

#[test]
fn scene_dimensions() {
    let bitmap = scene_bitmap().unwrap();
    assert_eq!((bitmap.width, bitmap.height), (SCENE_WIDTH, SCENE_HEIGHT));
    assert_eq!(bitmap.pixels.len(), SCENE_WIDTH * SCENE_HEIGHT);
}
