//! UI fade-out panel
//!
//! Re-expresses a coroutine-style fade as an explicit progress
//! accumulator advanced each tick. At most one fade is active; starting
//! a new one cancels the prior one outright, no queuing.

use serde::{Deserialize, Serialize};

/// Configuration for the fade panel
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Fade-out duration in seconds
    pub duration: f32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self { duration: 0.6 }
    }
}

/// Fade progress as a tagged state
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadeState {
    /// Fully visible (alpha 1)
    Visible,
    /// Fading out; elapsed seconds since the fade started
    Fading {
        /// Seconds accumulated so far
        elapsed: f32,
    },
    /// Fully faded out (alpha 0)
    Hidden,
}

/// A panel that fades from fully visible to hidden over a fixed duration
pub struct FadePanel {
    duration: f32,
    state: FadeState,
}

impl Default for FadePanel {
    fn default() -> Self {
        Self::new(FadeConfig::default())
    }
}

impl FadePanel {
    /// Create a visible panel with the given fade configuration
    pub fn new(config: FadeConfig) -> Self {
        Self {
            duration: config.duration,
            state: FadeState::Visible,
        }
    }

    /// Begin a fade-out
    ///
    /// Cancels any fade already in progress and restarts from zero
    /// elapsed time. A non-positive duration hides the panel immediately.
    pub fn start(&mut self) {
        self.state = if self.duration > 0.0 {
            FadeState::Fading { elapsed: 0.0 }
        } else {
            FadeState::Hidden
        };
    }

    /// Cancel an in-progress fade and restore full visibility
    pub fn cancel(&mut self) {
        self.state = FadeState::Visible;
    }

    /// Advance the fade by `dt` seconds and return the current alpha
    pub fn update(&mut self, dt: f32) -> f32 {
        if let FadeState::Fading { elapsed } = self.state {
            let elapsed = elapsed + dt.max(0.0);
            self.state = if elapsed >= self.duration {
                FadeState::Hidden
            } else {
                FadeState::Fading { elapsed }
            };
        }
        self.alpha()
    }

    /// Current alpha without advancing the fade
    ///
    /// 1.0 when visible, 0.0 when hidden, linear in between.
    pub fn alpha(&self) -> f32 {
        match self.state {
            FadeState::Visible => 1.0,
            FadeState::Fading { elapsed } => 1.0 - elapsed / self.duration,
            FadeState::Hidden => 0.0,
        }
    }

    /// Current state
    pub fn state(&self) -> FadeState {
        self.state
    }

    /// Whether a fade is in progress
    pub fn is_fading(&self) -> bool {
        matches!(self.state, FadeState::Fading { .. })
    }

    /// Whether the panel has fully faded out
    pub fn is_hidden(&self) -> bool {
        self.state == FadeState::Hidden
    }
}
