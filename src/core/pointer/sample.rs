//=========================================================================
// Pointer Sample
//=========================================================================
//
// Parallel `x` / `y` arrays built from one pointer source. This is the
// exact payload the engine's `input` entry point receives.
//
// Invariant: `x.len() == y.len()` at all times.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::source::PointerSource;

//=== PointerSample =======================================================

/// Index-aligned coordinate arrays for the contacts of one event.
///
/// Values are copied positionally with no transform: no density scaling,
/// no filtering, no reordering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerSample {
    x: Vec<f32>,
    y: Vec<f32>,
}

impl PointerSample {
    //--- Construction -----------------------------------------------------

    /// Builds a fresh sample sized exactly to the source's pointer count.
    pub fn capture<P: PointerSource + ?Sized>(source: &P) -> Self {
        let mut sample = Self::with_capacity(source.pointer_count());
        sample.refill(source);
        sample
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    //--- refill() ---------------------------------------------------------
    //
    // Replaces the contents with the source's pointers, keeping the
    // allocation. Used by the buffer-reuse strategy.
    //
    pub fn refill<P: PointerSource + ?Sized>(&mut self, source: &P) {
        let count = source.pointer_count();

        self.x.clear();
        self.y.clear();
        self.x.reserve(count);
        self.y.reserve(count);

        for i in 0..count {
            self.x.push(source.x(i));
            self.y.push(source.y(i));
        }

        debug_assert_eq!(self.x.len(), self.y.len());
    }

    //--- Accessors --------------------------------------------------------

    pub fn x(&self) -> &[f32] {
        &self.x
    }

    pub fn y(&self) -> &[f32] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.x.capacity().min(self.y.capacity())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
