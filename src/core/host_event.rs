//=========================================================================
// Host Events
//=========================================================================
//
// Everything the host can tell the bridge, as one tagged enum.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::pointer::PointerSnapshot;

//=== DisplayMetrics ======================================================

/// Display density supplied once, when the host surface is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    scale_factor: f32,
}

impl DisplayMetrics {
    /// # Panics
    ///
    /// Panics if `scale_factor` is not a positive, finite number.
    pub fn new(scale_factor: f32) -> Self {
        assert!(
            scale_factor.is_finite() && scale_factor > 0.0,
            "Scale factor must be positive, got {}",
            scale_factor
        );
        Self { scale_factor }
    }

    /// Device pixels per density-independent unit.
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { scale_factor: 1.0 }
    }
}

//=== HostEvent ===========================================================

/// A host lifecycle or input notification.
///
/// Events are delivered serially from the host dispatch thread, already
/// in a legal order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Surface created with the given display metrics.
    Create(DisplayMetrics),

    /// Host is going to background.
    Pause,

    /// Host is returning to foreground.
    Resume,

    /// Final teardown. `finishing` is `false` when the host may be
    /// re-created (rotation, process churn).
    Destroy { finishing: bool },

    /// Current state of every active contact.
    Touch(PointerSnapshot),
}

impl HostEvent {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Destroy { .. } => "destroy",
            Self::Touch(_) => "touch",
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
