//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use nudom_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Host entry point
pub use crate::host::{Host, HostBuilder};
pub use crate::platform::PlatformError;

// Bridge core
pub use crate::core::{
    Bridge, BridgeBuilder, DisplayMetrics, HostEvent, SampleAllocation, SessionState,
};

// Engine boundary
pub use crate::core::boundary::{DestroyMode, HostSurface, NativeEngine, ACTION_POINTER_UPDATE};

// Pointer data
pub use crate::core::{Pointer, PointerSnapshot, PointerSource};
