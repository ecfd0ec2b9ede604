use std::time::Duration;

use tracing::{debug, info};

use crate::core::animation::{PanControlsSnapshot, PanState};
use crate::core::data::animation_state::AnimationState;
use crate::core::data::resolution::Resolution;
use crate::core::variants::VariantConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameDecision {
    Render(AnimationState),
    Quit,
}

/// Host-side state carried between frames: the user pan offset, the quit
/// policy and a frame counter.
///
/// Input polled between frames mutates this state; each frame then receives
/// an immutable [`AnimationState`] snapshot.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    pan: PanState,
    pan_step: Option<f64>,
    auto_quit: Option<Duration>,
    quit_requested: bool,
    frames_started: u64,
}

impl FrameLoop {
    #[must_use]
    pub fn new(config: &VariantConfig) -> Self {
        Self {
            pan: PanState::default(),
            pan_step: config.pan_step,
            auto_quit: config.auto_quit,
            quit_requested: false,
            frames_started: 0,
        }
    }

    /// Deadline after which the loop quits on its own, measured from start.
    #[must_use]
    pub fn auto_quit(&self) -> Option<Duration> {
        self.auto_quit
    }

    #[must_use]
    pub fn frames_started(&self) -> u64 {
        self.frames_started
    }

    #[must_use]
    pub fn pan(&self) -> PanState {
        self.pan
    }

    pub fn request_quit(&mut self) {
        if !self.quit_requested {
            info!(frames = self.frames_started, "quit requested");
        }
        self.quit_requested = true;
    }

    #[must_use]
    pub fn deadline_passed(&self, elapsed: Duration) -> bool {
        self.auto_quit.is_some_and(|deadline| elapsed >= deadline)
    }

    /// Applies one frame of held-key panning and returns the state to render,
    /// or [`FrameDecision::Quit`] once a quit was requested or the auto-quit
    /// deadline passed.
    pub fn begin_frame(
        &mut self,
        elapsed: Duration,
        resolution: Resolution,
        controls: PanControlsSnapshot,
    ) -> FrameDecision {
        if self.deadline_passed(elapsed) && !self.quit_requested {
            info!(elapsed_secs = elapsed.as_secs_f64(), "auto-quit deadline reached");
            self.quit_requested = true;
        }

        if self.quit_requested {
            return FrameDecision::Quit;
        }

        if let Some(step) = self.pan_step {
            self.pan.step(controls, step);
        }

        self.frames_started += 1;

        let state = AnimationState::new(elapsed.as_secs_f64(), resolution)
            .with_camera_offset(self.pan.offset());

        debug!(
            frame = self.frames_started,
            t = state.elapsed_seconds,
            offset_re = state.camera_offset.real,
            offset_im = state.camera_offset.imag,
            "frame started"
        );

        FrameDecision::Render(state)
    }
}
