/// Render target - multisampled offscreen pass plus its resolve target
///
/// The scene is drawn into a multisample framebuffer, then blitted into a
/// single-sampled framebuffer whose color texture is what the editor viewport
/// displays. Both framebuffers always share one size: `rescale` builds the new
/// pair completely before replacing the old one.
///
/// Lifecycle: `Uninitialized` → `init` → `Ready` (→ `rescale` → `Ready`) →
/// `destroy` → `Destroyed`.

use std::rc::Rc;
use crate::error::{Error, Result};
use crate::graphics_device::{
    Framebuffer, FramebufferDesc, GraphicsDevice, Texture, TextureHandle,
};
use crate::{engine_debug, engine_error, engine_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTargetState {
    Uninitialized,
    Ready,
    Destroyed,
}

struct FramebufferPair {
    multisample: Box<dyn Framebuffer>,
    resolve: Box<dyn Framebuffer>,
}

pub struct RenderTarget {
    device: Rc<dyn GraphicsDevice>,
    samples: u32,
    state: RenderTargetState,
    framebuffers: Option<FramebufferPair>,
}

impl RenderTarget {
    /// Uninitialized target drawing with `samples` samples per pixel
    pub fn new(device: Rc<dyn GraphicsDevice>, samples: u32) -> Self {
        Self {
            device,
            samples: samples.max(1),
            state: RenderTargetState::Uninitialized,
            framebuffers: None,
        }
    }

    pub fn state(&self) -> RenderTargetState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == RenderTargetState::Ready
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Allocate both framebuffers
    ///
    /// Only valid from `Uninitialized`. On failure the target stays
    /// `Uninitialized`.
    pub fn init(&mut self, width: u32, height: u32) -> Result<()> {
        if self.state != RenderTargetState::Uninitialized {
            return Err(Error::InvalidResource(format!(
                "render target init in state {:?}",
                self.state
            )));
        }
        let pair = self.allocate(width, height)?;
        self.framebuffers = Some(pair);
        self.state = RenderTargetState::Ready;
        engine_debug!(
            "prism3d::RenderTarget",
            "Render target ready ({}x{}, {} samples)",
            width, height, self.samples
        );
        Ok(())
    }

    fn allocate(&self, width: u32, height: u32) -> Result<FramebufferPair> {
        if width == 0 || height == 0 {
            engine_error!("prism3d::RenderTarget", "Render target size {}x{} is empty", width, height);
            return Err(Error::InvalidResource(format!("render target size {}x{}", width, height)));
        }
        let multisample = self
            .device
            .create_framebuffer(&FramebufferDesc {
                label: "multisample",
                width,
                height,
                samples: self.samples,
            })
            .map_err(|e| {
                engine_error!("prism3d::RenderTarget", "Multisample framebuffer: {}", e);
                e
            })?;
        let resolve = self
            .device
            .create_framebuffer(&FramebufferDesc { label: "resolve", width, height, samples: 1 })
            .map_err(|e| {
                engine_error!("prism3d::RenderTarget", "Resolve framebuffer: {}", e);
                e
            })?;
        Ok(FramebufferPair { multisample, resolve })
    }

    /// Direct scene drawing into the multisample framebuffer
    pub fn bind_multisample(&self) {
        match &self.framebuffers {
            Some(pair) if self.is_ready() => self.device.bind_framebuffer(Some(pair.multisample.as_ref())),
            _ => engine_warn!("prism3d::RenderTarget", "bind_multisample on a target that is not ready"),
        }
    }

    /// Return to the default framebuffer
    pub fn unbind(&self) {
        if self.is_ready() {
            self.device.bind_framebuffer(None);
        }
    }

    /// Resolve the multisample color buffer into the resolve target
    ///
    /// Call after the scene draws and before `unbind`.
    pub fn blit(&self) {
        match &self.framebuffers {
            Some(pair) if self.is_ready() => {
                self.device.blit_framebuffer(pair.multisample.as_ref(), pair.resolve.as_ref())
            }
            _ => engine_warn!("prism3d::RenderTarget", "blit on a target that is not ready"),
        }
    }

    /// Reallocate both framebuffers at `width` x `height`
    ///
    /// The old pair stays in place unless both new framebuffers were created.
    pub fn rescale(&mut self, width: u32, height: u32) -> Result<()> {
        if !self.is_ready() {
            engine_error!("prism3d::RenderTarget", "rescale in state {:?}", self.state);
            return Err(Error::InvalidResource(format!("render target rescale in state {:?}", self.state)));
        }
        if self.multisample_size() == (width, height) {
            return Ok(());
        }
        let pair = self.allocate(width, height)?;
        self.framebuffers = Some(pair);
        engine_debug!("prism3d::RenderTarget", "Render target rescaled to {}x{}", width, height);
        Ok(())
    }

    /// Presentable color texture of the resolve target
    pub fn resolved_texture(&self) -> Option<TextureHandle> {
        self.resolved_color().map(|texture| texture.handle())
    }

    pub fn resolved_color(&self) -> Option<&dyn Texture> {
        match &self.framebuffers {
            Some(pair) if self.is_ready() => Some(pair.resolve.color_texture()),
            _ => None,
        }
    }

    /// (0, 0) when not allocated
    pub fn multisample_size(&self) -> (u32, u32) {
        self.framebuffers
            .as_ref()
            .map_or((0, 0), |pair| (pair.multisample.width(), pair.multisample.height()))
    }

    /// (0, 0) when not allocated
    pub fn resolve_size(&self) -> (u32, u32) {
        self.framebuffers
            .as_ref()
            .map_or((0, 0), |pair| (pair.resolve.width(), pair.resolve.height()))
    }

    /// Release both framebuffers; further calls do nothing
    pub fn destroy(&mut self) {
        if self.state == RenderTargetState::Destroyed {
            return;
        }
        self.framebuffers = None;
        self.state = RenderTargetState::Destroyed;
        engine_debug!("prism3d::RenderTarget", "Render target destroyed");
    }
}

#[cfg(test)]
#[path = "render_target_tests.rs"]
mod tests;
