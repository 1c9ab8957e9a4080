use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use goblin_bitmaps::{
    catalog::catalog_ids,
    encode::{encode_scene_bitmap, sprite_pack},
    persist::{save_json, JsonStyle},
    preview::save_previews,
    scene,
};

#[derive(Parser, Debug)]
#[command(about = "Generate the goblin sprite pack and overworld backdrop")]
struct Args {
    /// Where to write the indexed sprite pack
    #[arg(long, default_value = "assets/sprites-8bit.json")]
    sprites_out: PathBuf,

    /// Where to write the RGB565 scene bitmap
    #[arg(long, default_value = "assets/environment-16bit.json")]
    scene_out: PathBuf,

    /// Indent the JSON output instead of writing it compact
    #[arg(long)]
    pretty: bool,

    /// Also write PNG previews into this directory
    #[arg(long)]
    preview_dir: Option<PathBuf>,

    /// Print the sprite ids and exit
    #[arg(long)]
    list: bool,
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list {
        for id in catalog_ids() {
            println!("{id}");
        }
        return Ok(());
    }

    let style = if args.pretty {
        JsonStyle::Pretty
    } else {
        JsonStyle::Compact
    };

    let pack = sprite_pack()?;
    save_json(&args.sprites_out, &pack, style)?;

    let scene_canvas = scene::compose();
    let bitmap = encode_scene_bitmap(&scene_canvas)?;
    save_json(&args.scene_out, &bitmap, style)?;

    if let Some(dir) = &args.preview_dir {
        save_previews(dir, &pack, &scene_canvas)?;
    }

    info!(
        "Wrote {} and {}",
        args.sprites_out.display(),
        args.scene_out.display()
    );
    Ok(())
}
