use itertools::Itertools;
use log::debug;

use crate::{canvas::SpriteCanvas, sprites::RECIPES, tiles::TILE_FAMILIES};

// Pack order: fixed recipes, then each family's seeded variants.
pub fn catalog() -> Vec<(String, SpriteCanvas)> {
    let mut sprites = RECIPES
        .iter()
        .map(|(id, recipe)| (id.to_string(), recipe()))
        .collect_vec();
    for family in TILE_FAMILIES {
        sprites.extend(family.variants());
    }
    debug!("Rendered {} sprites", sprites.len());
    sprites
}

pub fn catalog_ids() -> Vec<String> {
    RECIPES
        .iter()
        .map(|(id, _)| id.to_string())
        .chain(
            TILE_FAMILIES
                .iter()
                .flat_map(|family| family.seeds.clone().map(move |seed| family.sprite_id(seed))),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_rendered_catalog() {
        let rendered = catalog().into_iter().map(|(id, _)| id).collect_vec();
        assert_eq!(rendered, catalog_ids());
    }

    #[test]
    fn catalog_order() {
        let ids = catalog_ids();
        assert_eq!(ids.len(), 86);
        assert_eq!(ids[0], "goblin");
        assert_eq!(ids[37], "water_tile");
        assert_eq!(ids[38], "grass_tile");
        assert_eq!(ids[39], "grass_tile_2");
        assert_eq!(ids[46], "swamp_tile_1");
        assert_eq!(ids.last().map(String::as_str), Some("badlands_tile_8"));
    }
}
