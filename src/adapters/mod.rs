// Adapters layer: host-side renderers for evaluations.

pub mod render;

pub use render::{renderer_for, JsonRenderer, TextRenderer};
