pub const TRANSITION_SECS: f64 = 0.2;
pub const OVERLAY_SLIDE_PX: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    to_idx: usize,
    start: f64,
    dur: f64,
}

impl Transition {
    pub fn new(to_idx: usize, start: f64) -> Self {
        Self {
            to_idx,
            start,
            dur: TRANSITION_SECS,
        }
    }

    pub fn target(&self) -> usize {
        self.to_idx
    }

    /// Linear progress in `0.0..=1.0` at frame time `now`.
    pub fn progress(&self, now: f64) -> f32 {
        ((now - self.start) / self.dur.max(1e-6)).clamp(0.0, 1.0) as f32
    }

    pub fn is_done(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn opacity(&self, now: f64) -> f32 {
        smoothstep(self.progress(now))
    }

    pub fn slide_offset(&self, now: f64) -> f32 {
        OVERLAY_SLIDE_PX * (1.0 - smoothstep(self.progress(now)))
    }
}

fn smoothstep(p: f32) -> f32 {
    p * p * (3.0 - 2.0 * p)
}

/// Tracks the last index shown on one surface and restarts the fade on change.
#[derive(Debug, Clone, Default)]
pub struct TransitionTracker {
    current: Option<Transition>,
}

impl TransitionTracker {
    pub fn observe(&mut self, index: usize, now: f64) -> Transition {
        match self.current {
            Some(t) if t.target() == index => t,
            _ => {
                let t = Transition::new(index, now);
                self.current = Some(t);
                t
            }
        }
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
