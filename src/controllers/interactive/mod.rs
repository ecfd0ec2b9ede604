//! Host-side frame loop state for real-time rendering.
//!
//! Input adapters feed held-key snapshots and wall time in; each frame comes
//! out as an immutable `AnimationState` for the core to shade.

pub mod frame_loop;

pub use frame_loop::{FrameDecision, FrameLoop};
