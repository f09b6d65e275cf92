//! Rendering helpers shared by the example binaries.
//!
//! Cells are painted first, then the line network is stroked on top, so the
//! grid stays visible over the fills.
use std::path::Path;

use image::{Rgba, RgbaImage};
use mondrian_layout::prelude::{Composition, LineSegment, Rgb, Viewport};
use svg::node::element::{Line, Rectangle};
use svg::Document;
use tracing_subscriber::EnvFilter;

/// Install a global tracing subscriber honoring `RUST_LOG`, defaulting to
/// `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Shared rendering options.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Stroke width of the line network in canvas units.
    pub stroke_width: f32,
    /// Canvas background.
    pub background: [u8; 3],
    /// Multiplier applied to the nominal size on SVG export.
    pub export_scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stroke_width: 6.0,
            background: [255, 255, 255],
            export_scale: 2.0,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stroke width of the line network.
    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the canvas background color.
    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    /// Sets the SVG export scale.
    pub fn with_export_scale(mut self, export_scale: f32) -> Self {
        self.export_scale = export_scale;
        self
    }
}

/// Rasterize a composition and write it as a PNG.
pub fn render_composition_to_png(
    composition: &Composition,
    viewport: &Viewport,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let width = viewport.width.ceil() as u32;
    let height = viewport.height.ceil() as u32;
    let [r, g, b] = config.background;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));

    for cell in &composition.cells {
        if let Some(fill) = cell.fill {
            fill_region(
                &mut canvas,
                cell.top_left.x,
                cell.top_left.y,
                cell.bottom_right.x,
                cell.bottom_right.y,
                fill,
            );
        }
    }

    for segment in &composition.segments {
        stroke_segment(&mut canvas, segment, config.stroke_width);
    }

    canvas.save(path)?;
    Ok(())
}

/// Build an SVG document for a composition.
///
/// The document's nominal size is multiplied by the export scale so exports
/// stay crisp when printed larger than the canvas.
pub fn composition_to_svg(
    composition: &Composition,
    viewport: &Viewport,
    config: &RenderConfig,
) -> Document {
    let mut document = Document::new()
        .set("width", viewport.width * config.export_scale)
        .set("height", viewport.height * config.export_scale)
        .set(
            "viewBox",
            format!("0 0 {} {}", viewport.width, viewport.height),
        );

    let [r, g, b] = config.background;
    document = document.add(
        Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", viewport.width)
            .set("height", viewport.height)
            .set("fill", hex_color(Rgb::new(r, g, b))),
    );

    for cell in &composition.cells {
        let Some(fill) = cell.fill else {
            continue;
        };
        let size = cell.size();
        document = document.add(
            Rectangle::new()
                .set("x", cell.top_left.x)
                .set("y", cell.top_left.y)
                .set("width", size.x)
                .set("height", size.y)
                .set("fill", hex_color(fill)),
        );
    }

    for segment in &composition.segments {
        document = document.add(
            Line::new()
                .set("x1", segment.from.x)
                .set("y1", segment.from.y)
                .set("x2", segment.to.x)
                .set("y2", segment.to.y)
                .set("stroke", "black")
                .set("stroke-width", config.stroke_width)
                .set("stroke-linecap", "square"),
        );
    }

    document
}

fn hex_color(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn fill_region(canvas: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, fill: Rgb) {
    let x0 = x0.clamp(0, canvas.width() as i32) as u32;
    let y0 = y0.clamp(0, canvas.height() as i32) as u32;
    let x1 = x1.clamp(0, canvas.width() as i32) as u32;
    let y1 = y1.clamp(0, canvas.height() as i32) as u32;
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, Rgba([fill.r, fill.g, fill.b, 255]));
        }
    }
}

fn stroke_segment(canvas: &mut RgbaImage, segment: &LineSegment, stroke_width: f32) {
    // The line network is axis-aligned; a stroked segment is a filled band
    // centered on it.
    let half = stroke_width / 2.0;
    let min_x = segment.from.x.min(segment.to.x);
    let max_x = segment.from.x.max(segment.to.x);
    let min_y = segment.from.y.min(segment.to.y);
    let max_y = segment.from.y.max(segment.to.y);

    let x0 = (min_x - half).floor() as i32;
    let x1 = (max_x + half).ceil() as i32;
    let y0 = (min_y - half).floor() as i32;
    let y1 = (max_y + half).ceil() as i32;
    fill_region(canvas, x0, y0, x1, y1, Rgb::new(0, 0, 0));
}
