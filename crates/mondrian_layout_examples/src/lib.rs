#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    composition_to_svg, init_tracing, render_composition_to_png, RenderConfig,
};
