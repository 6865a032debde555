use anyhow::Context;

use flutter_icon_gen::{IconArtwork, export, logging};

const PNG_PATH: &str = "flutter_icon.png";
const ICO_PATH: &str = "flutter_icon.ico";

fn main() -> anyhow::Result<()> {
    logging::init();

    let canvas = IconArtwork::flutter().render();

    export::write_png(PNG_PATH, &canvas).with_context(|| format!("failed to write {PNG_PATH}"))?;
    println!("Flutter icon created: {PNG_PATH}");

    export::write_ico(ICO_PATH, &canvas).with_context(|| format!("failed to write {ICO_PATH}"))?;
    println!("Flutter icon converted to ICO: {ICO_PATH}");

    Ok(())
}
