//=========================================================================
// Engine Boundary
//=========================================================================
//
// Contract between the bridge and the native engine.
//
// Components:
// - `interface`: entry-point traits and wire constants (the contract)
// - `channel`: crossbeam-backed adapters that turn calls into messages
//
//=========================================================================

//=== Module Declarations =================================================

pub mod channel;
pub mod interface;

//=== Public API ==========================================================

pub use channel::{BoundaryCall, ChannelEngine, ChannelSurface};
pub use interface::{
    DestroyMode, HostSurface, NativeEngine, ACTION_POINTER_UPDATE, DESTROY_FINISHING,
    DESTROY_RECREATABLE,
};
