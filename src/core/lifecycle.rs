//=========================================================================
// Engine Lifecycle Controller
//=========================================================================
//
// Forwards host visibility transitions to the engine, one call each.
//
// State machine (mirrored, engine owns the real one):
// ```text
//   Active ──pause()──→ Paused
//   Paused ──resume()─→ Active
//   Active | Paused ──destroy(flag)──→ Destroyed   (terminal)
// ```
//
// The controller never reorders or de-duplicates: a redundant pause or
// resume is still forwarded. The one hard rule is that nothing reaches
// the engine after `destroy`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use crate::core::boundary::{DestroyMode, NativeEngine};

//=== SessionState ========================================================

/// Bridge-side mirror of the engine session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Active,
    Paused,
    /// Terminal. No engine call is issued once here.
    Destroyed,
}

//=== EngineLifecycleController ===========================================

#[derive(Debug, Default)]
pub struct EngineLifecycleController {
    state: SessionState,
}

impl EngineLifecycleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == SessionState::Destroyed
    }

    //--- Transitions ------------------------------------------------------

    /// Host went to background. Returns `false` if the session is gone.
    pub fn pause<E: NativeEngine + ?Sized>(&mut self, engine: &mut E) -> bool {
        if !self.ensure_live("pause") {
            return false;
        }
        if self.state == SessionState::Paused {
            debug!(target: "bridge::lifecycle", "Pause while already paused, forwarding anyway");
        }

        info!(target: "bridge::lifecycle", "Pausing engine");
        engine.pause();
        self.state = SessionState::Paused;
        true
    }

    /// Host returned to foreground. Returns `false` if the session is gone.
    pub fn resume<E: NativeEngine + ?Sized>(&mut self, engine: &mut E) -> bool {
        if !self.ensure_live("resume") {
            return false;
        }
        if self.state == SessionState::Active {
            debug!(target: "bridge::lifecycle", "Resume while already active, forwarding anyway");
        }

        info!(target: "bridge::lifecycle", "Resuming engine");
        engine.resume();
        self.state = SessionState::Active;
        true
    }

    /// Final teardown. Issued at most once per session.
    pub fn destroy<E: NativeEngine + ?Sized>(&mut self, engine: &mut E, mode: DestroyMode) -> bool {
        if !self.ensure_live("destroy") {
            return false;
        }

        info!(
            target: "bridge::lifecycle",
            "Destroying engine ({:?}, flag {})",
            mode,
            mode.flag()
        );
        engine.destroy(mode.flag());
        self.state = SessionState::Destroyed;
        true
    }

    //--- ensure_live() ----------------------------------------------------
    //
    // Host contract violation: a call arrived after destroy. Trips in
    // debug builds; logged and dropped in release builds.
    //
    pub(crate) fn ensure_live(&self, call: &str) -> bool {
        debug_assert!(
            self.state != SessionState::Destroyed,
            "{} delivered after engine destroy",
            call
        );

        if self.state == SessionState::Destroyed {
            error!(
                target: "bridge::lifecycle",
                "Dropping {}: engine session already destroyed",
                call
            );
            return false;
        }
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
