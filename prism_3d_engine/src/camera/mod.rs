//! Camera module: fly camera for the editor viewport.
//!
//! The engine does not store cameras; the host owns one and passes it to
//! `Renderer::render_frame`.

mod camera;

pub use camera::{Camera, CameraMovement, MAX_PITCH, FOV_RANGE};
