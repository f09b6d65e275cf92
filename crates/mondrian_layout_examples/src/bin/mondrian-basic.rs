use mondrian_layout::prelude::*;
use mondrian_layout_examples::{init_tracing, render_composition_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Seed label from the command line, or the classic default
    let seed = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mondrian-1".to_string());

    let viewport = Viewport::new(800.0, 600.0);
    let config = CompositionConfig::new(viewport);
    let composition = compose_seeded(&config, &seed)?;

    let out = format!("mondrian-basic-{seed}.png");
    render_composition_to_png(&composition, &viewport, &RenderConfig::default(), &out)?;
    println!(
        "{}: {} rectangles, {} segments, {} cells -> {out}",
        seed,
        composition.rectangles.len(),
        composition.segments.len(),
        composition.cells.len()
    );

    Ok(())
}
