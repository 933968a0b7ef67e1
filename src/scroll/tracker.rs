/// Normalized scroll position of a page: `offset / (content - viewport)`,
/// clamped to [0, 1]. A page that cannot scroll reports 0.
pub fn progress_from_offsets(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// Smooths raw page scroll into the progress value the scene reads.
///
/// Exponential approach with time constant `damping` seconds, so the result
/// does not depend on the frame rate. Snaps once within `SNAP` of the target
/// so the ends of the timeline are reached exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    target: f32,
    current: f32,
    damping: f32,
}

const SNAP: f32 = 1e-4;

impl ScrollTracker {
    pub fn new(damping: f32) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            damping: damping.max(0.0),
        }
    }

    pub fn set_target(&mut self, progress: f32) {
        self.target = progress.clamp(0.0, 1.0);
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn progress(&self) -> f32 {
        self.current
    }

    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.damping <= 0.0 || !dt.is_finite() {
            self.current = self.target;
            return self.current;
        }
        let k = 1.0 - (-dt.max(0.0) / self.damping).exp();
        self.current += (self.target - self.current) * k;
        if (self.target - self.current).abs() < SNAP {
            self.current = self.target;
        }
        self.current
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(0.25)
    }
}
