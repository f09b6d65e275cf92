use rand::RngCore;

use mondrian_layout::prelude::*;
use mondrian_layout_examples::{init_tracing, render_composition_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Draw a short numeric label so the output file names stay readable.
    let seed = format!("{}", rand::rng().next_u32() % 999_999);

    let viewport = Viewport::new(800.0, 600.0);
    let config = CompositionConfig::new(viewport);
    let composition = compose_seeded(&config, &seed)?;

    let out = format!("mondrian-{seed}.png");
    render_composition_to_png(&composition, &viewport, &RenderConfig::default(), &out)?;
    println!("seed {seed} -> {out}");

    Ok(())
}
