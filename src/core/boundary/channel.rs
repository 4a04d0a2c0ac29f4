//=========================================================================
// Channel Boundary
//=========================================================================
//
// Turns every boundary call into a `BoundaryCall` message on a
// crossbeam channel.
//
// Architecture:
//   Bridge → ChannelEngine  ─┐
//                            ├─→ Sender<BoundaryCall> → engine thread
//   Bridge → ChannelSurface ─┘
//
// Engine and surface may share one sender, in which case the receiver
// sees the exact interleaving of input calls and render requests.
//
// A disconnected receiver never panics the host thread: the call is
// logged and dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::warn;

//=== Internal Dependencies ===============================================

use super::interface::{HostSurface, NativeEngine};

//=== BoundaryCall ========================================================

/// One call across the engine boundary, in message form.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryCall {
    /// `destroy(flag)`.
    Destroy(i32),

    /// `pause()`.
    Pause,

    /// `resume()`.
    Resume,

    /// `input(action, x, y)` with owned copies of the coordinate arrays.
    Input {
        action: i32,
        x: Vec<f32>,
        y: Vec<f32>,
    },

    /// `request_render()` on the host surface.
    RenderRequested,
}

impl BoundaryCall {
    /// Returns `true` for calls that reach the engine (not the surface).
    pub fn is_engine_call(&self) -> bool {
        !matches!(self, Self::RenderRequested)
    }
}

//--- send() --------------------------------------------------------------

fn send(sender: &Sender<BoundaryCall>, call: BoundaryCall) {
    if let Err(err) = sender.send(call) {
        warn!(
            target: "bridge",
            "Boundary channel disconnected, dropping {:?}",
            err.into_inner()
        );
    }
}

//=== ChannelEngine =======================================================

/// [`NativeEngine`] that forwards each call over a channel.
#[derive(Debug, Clone)]
pub struct ChannelEngine {
    sender: Sender<BoundaryCall>,
}

impl ChannelEngine {
    pub fn new(sender: Sender<BoundaryCall>) -> Self {
        Self { sender }
    }
}

impl NativeEngine for ChannelEngine {
    fn destroy(&mut self, flag: i32) {
        send(&self.sender, BoundaryCall::Destroy(flag));
    }

    fn pause(&mut self) {
        send(&self.sender, BoundaryCall::Pause);
    }

    fn resume(&mut self) {
        send(&self.sender, BoundaryCall::Resume);
    }

    fn input(&mut self, action: i32, x: &[f32], y: &[f32]) {
        send(
            &self.sender,
            BoundaryCall::Input {
                action,
                x: x.to_vec(),
                y: y.to_vec(),
            },
        );
    }
}

//=== ChannelSurface ======================================================

/// [`HostSurface`] that reports render requests over a channel.
#[derive(Debug, Clone)]
pub struct ChannelSurface {
    sender: Sender<BoundaryCall>,
}

impl ChannelSurface {
    pub fn new(sender: Sender<BoundaryCall>) -> Self {
        Self { sender }
    }
}

impl HostSurface for ChannelSurface {
    fn request_render(&mut self) {
        send(&self.sender, BoundaryCall::RenderRequested);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
