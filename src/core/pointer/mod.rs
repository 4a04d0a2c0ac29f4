//=========================================================================
// Pointer Data
//=========================================================================
//
// Multi-touch snapshot types.
//
// Flow:
// ```text
//   PointerSource (one host event)
//         ↓ capture / refill
//   PointerSample (x[], y[])
//         ↓
//   NativeEngine::input
// ```
//
//=========================================================================

//=== Submodules ==========================================================

mod sample;
mod source;

//=== Public API ==========================================================

pub use sample::PointerSample;
pub use source::{Pointer, PointerSnapshot, PointerSource};
