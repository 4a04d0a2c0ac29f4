//=========================================================================
// Pointer Sources
//=========================================================================
//
// Read-only view of one multi-touch event, and the owned snapshot type
// the host hands to the bridge.
//
// Indices are ephemeral: index `i` names a contact only within the
// event it was read from.
//
//=========================================================================

//=== PointerSource =======================================================

/// One multi-touch event, read positionally.
///
/// `x(i)` and `y(i)` are only defined for `i < pointer_count()`. Both
/// come from the same event snapshot, so an out-of-range index is a bug
/// in the caller and implementations may panic.
pub trait PointerSource {
    fn pointer_count(&self) -> usize;
    fn x(&self, index: usize) -> f32;
    fn y(&self, index: usize) -> f32;
}

//=== Pointer =============================================================

/// A single contact in host-surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Pointer {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

//=== PointerSnapshot =====================================================

/// Owned, ordered list of the contacts active in one event.
///
/// An empty snapshot is legal and means no contact is down.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerSnapshot {
    pointers: Vec<Pointer>,
}

impl PointerSnapshot {
    pub fn new(pointers: Vec<Pointer>) -> Self {
        Self { pointers }
    }

    /// Snapshot with no active contacts.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pointers(&self) -> &[Pointer] {
        &self.pointers
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
}

impl<P: Into<Pointer>> FromIterator<P> for PointerSnapshot {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            pointers: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl PointerSource for PointerSnapshot {
    fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    fn x(&self, index: usize) -> f32 {
        self.pointers[index].x
    }

    fn y(&self, index: usize) -> f32 {
        self.pointers[index].y
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
