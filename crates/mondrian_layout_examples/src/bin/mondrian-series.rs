use mondrian_layout::prelude::*;
use mondrian_layout_examples::{init_tracing, render_composition_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let viewport = Viewport::new(800.0, 600.0);
    let config = CompositionConfig::new(viewport);
    let render_config = RenderConfig::default();

    for index in 1..=6 {
        let seed = format!("mondrian-{index}");
        let composition = compose_seeded(&config, &seed)?;

        let filled = composition
            .cells
            .iter()
            .filter(|cell| cell.fill.is_some())
            .count();
        println!(
            "{seed}: {} cells ({filled} filled), {} segments",
            composition.cells.len(),
            composition.segments.len()
        );

        let out = format!("mondrian-series-{index}.png");
        render_composition_to_png(&composition, &viewport, &render_config, &out)?;
    }

    Ok(())
}
