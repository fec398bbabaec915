//! Render target module
//!
//! The offscreen MSAA target the scene is drawn into and the resolve target
//! the editor viewport displays.

mod render_target;

pub use render_target::{RenderTarget, RenderTargetState};
