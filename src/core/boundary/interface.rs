//=========================================================================
// Engine Boundary Interface
//=========================================================================
//
// The opaque call surface of the native engine, plus the render hook of
// the host surface.
//
// Four engine entry points cross this boundary and nothing else:
//   destroy(flag) / pause() / resume() / input(action, x[], y[])
//
// Every call is a fire-and-forget notification. None of them report a
// result back to the bridge.
//
//=========================================================================

//=== Wire Constants ======================================================

/// Action tag sent with every pointer snapshot.
///
/// The engine receives `1` for an undistinguished pointer-state update.
/// Down/move/up/cancel are not told apart at this layer.
pub const ACTION_POINTER_UPDATE: i32 = 1;

/// `destroy` flag: the host is finishing for good.
pub const DESTROY_FINISHING: i32 = 0;

/// `destroy` flag: the host is torn down but may be re-created.
pub const DESTROY_RECREATABLE: i32 = 1;

//=== DestroyMode =========================================================

/// Reason the host is tearing the engine session down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestroyMode {
    /// Permanent finish (user left, activity finishing).
    Finishing,

    /// Non-final teardown (configuration change, process churn).
    Recreatable,
}

impl DestroyMode {
    /// Maps the host's "is finishing" flag to a destroy mode.
    pub fn from_finishing(finishing: bool) -> Self {
        if finishing {
            Self::Finishing
        } else {
            Self::Recreatable
        }
    }

    /// Numeric flag handed to [`NativeEngine::destroy`].
    pub fn flag(self) -> i32 {
        match self {
            Self::Finishing => DESTROY_FINISHING,
            Self::Recreatable => DESTROY_RECREATABLE,
        }
    }
}

//=== NativeEngine ========================================================

/// Procedural entry points of the external engine.
///
/// Implementations are expected to enforce their own sequencing rules.
/// The bridge only guarantees that nothing is called after `destroy`.
pub trait NativeEngine {
    /// Terminal teardown. `flag` is [`DESTROY_FINISHING`] or [`DESTROY_RECREATABLE`].
    fn destroy(&mut self, flag: i32);

    /// Suspend engine activity.
    fn pause(&mut self);

    /// Resume engine activity.
    fn resume(&mut self);

    /// Deliver the current pointer snapshot. `x` and `y` are index-aligned.
    fn input(&mut self, action: i32, x: &[f32], y: &[f32]);
}

//=== HostSurface =========================================================

/// Drawable surface owned by the host.
///
/// Render requests are coalesced by the surface; calling this at touch
/// frequency is fine.
pub trait HostSurface {
    fn request_render(&mut self);
}

//=== Blanket Impls =======================================================

impl<T: NativeEngine + ?Sized> NativeEngine for Box<T> {
    fn destroy(&mut self, flag: i32) {
        (**self).destroy(flag)
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn resume(&mut self) {
        (**self).resume()
    }

    fn input(&mut self, action: i32, x: &[f32], y: &[f32]) {
        (**self).input(action, x, y)
    }
}

impl<T: HostSurface + ?Sized> HostSurface for Box<T> {
    fn request_render(&mut self) {
        (**self).request_render()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
