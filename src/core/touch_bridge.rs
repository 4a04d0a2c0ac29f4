//=========================================================================
// Touch Bridge
//=========================================================================
//
// Converts one host multi-touch event into a PointerSample, hands it to
// the engine, then asks the surface for a frame.
//
// Per event:
//   1. Build the sample (fresh or refilled, see `SampleAllocation`)
//   2. engine.input(ACTION_POINTER_UPDATE, x, y)
//   3. surface.request_render()
//   4. Report the event as consumed
//
// Zero-pointer events are forwarded like any other. The engine decides
// what an empty sample means.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::boundary::{HostSurface, NativeEngine, ACTION_POINTER_UPDATE};
use crate::core::pointer::{PointerSample, PointerSource};

//=== SampleAllocation ====================================================

/// How the touch bridge obtains the sample for each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleAllocation {
    /// Allocate new arrays for every event.
    #[default]
    PerEvent,

    /// Refill one retained buffer, growing it as needed.
    Reuse,
}

//=== TouchBridge =========================================================

#[derive(Debug, Default)]
pub struct TouchBridge {
    allocation: SampleAllocation,
    buffer: PointerSample,
}

impl TouchBridge {
    pub fn new(allocation: SampleAllocation) -> Self {
        Self {
            allocation,
            buffer: PointerSample::default(),
        }
    }

    pub fn allocation(&self) -> SampleAllocation {
        self.allocation
    }

    //--- on_touch() -------------------------------------------------------
    //
    // Always returns `true`: the event is consumed and no further
    // platform gesture handling should run for it.
    //
    pub fn on_touch<E, H, P>(&mut self, engine: &mut E, surface: &mut H, source: &P) -> bool
    where
        E: NativeEngine + ?Sized,
        H: HostSurface + ?Sized,
        P: PointerSource + ?Sized,
    {
        match self.allocation {
            SampleAllocation::PerEvent => {
                let sample = PointerSample::capture(source);
                Self::forward(engine, surface, &sample);
            }
            SampleAllocation::Reuse => {
                self.buffer.refill(source);
                Self::forward(engine, surface, &self.buffer);
            }
        }

        true
    }

    //--- Internal Helpers -------------------------------------------------

    fn forward<E, H>(engine: &mut E, surface: &mut H, sample: &PointerSample)
    where
        E: NativeEngine + ?Sized,
        H: HostSurface + ?Sized,
    {
        trace!(
            target: "bridge::touch",
            "Forwarding {} pointer(s): x={:?} y={:?}",
            sample.len(),
            sample.x(),
            sample.y()
        );

        engine.input(ACTION_POINTER_UPDATE, sample.x(), sample.y());
        surface.request_render();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
