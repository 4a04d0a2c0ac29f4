//=========================================================================
// Bridge Core
//
// Platform-independent half of the bridge: everything between a host
// event and a call on the native engine boundary.
//
// Responsibilities:
// - Pack multi-touch events into index-aligned coordinate arrays
// - Forward pointer snapshots and request a frame after each one
// - Sequence pause / resume / destroy against host visibility
// - Guarantee nothing reaches the engine after destroy
//
// Notes:
// The core never touches an OS window. Hosts feed it `HostEvent`s; the
// winit host in `platform` is one such feeder.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod boundary;
pub mod pointer;

mod bridge;
mod host_event;
mod lifecycle;
mod touch_bridge;

//=== Public API ==========================================================

pub use bridge::{Bridge, BridgeBuilder};
pub use host_event::{DisplayMetrics, HostEvent};
pub use lifecycle::{EngineLifecycleController, SessionState};
pub use pointer::{Pointer, PointerSample, PointerSnapshot, PointerSource};
pub use touch_bridge::{SampleAllocation, TouchBridge};
