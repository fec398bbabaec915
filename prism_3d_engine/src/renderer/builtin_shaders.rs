//! GLSL 330 sources bundled with the engine
//!
//! `LIT_*` implements the lighting and material uniform contract of
//! `resource::uniform_names`; `SCREEN_*` is the fullscreen-quad pair used by
//! `PostProcess`.

pub const LIT_VERTEX: &str = include_str!("../../shaders/lit.vert");
pub const LIT_FRAGMENT: &str = include_str!("../../shaders/lit.frag");

pub const SCREEN_VERTEX: &str = include_str!("../../shaders/screen.vert");
pub const SCREEN_FRAGMENT: &str = include_str!("../../shaders/screen.frag");

/// Pool label of the lit shader
pub const LIT_LABEL: &str = "lit";
/// Pool label of the screen shader
pub const SCREEN_LABEL: &str = "screen";
