use mondrian_layout::prelude::*;
use mondrian_layout_examples::{composition_to_svg, init_tracing, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let seed = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mondrian-1".to_string());

    let viewport = Viewport::new(800.0, 600.0);
    let config = CompositionConfig::new(viewport);
    let composition = compose_seeded(&config, &seed)?;

    // Export at double the nominal size, named after the seed.
    let render_config = RenderConfig::default().with_export_scale(2.0);
    let document = composition_to_svg(&composition, &viewport, &render_config);

    let out = format!("mondrian-{seed}.svg");
    svg::save(&out, &document)?;
    println!("wrote {out}");

    Ok(())
}
