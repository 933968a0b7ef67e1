//! Scroll timeline: fade windows, the sync controller and page scroll smoothing.

mod fade;
mod sync;
mod tracker;

pub use fade::{ComponentId, FadeDirection, FadeSchedule, FadeWindow, OpacityMap};
pub use sync::{
    is_visible, Fadeable, IntroTransform, OverlayStyle, ScrollSync, INTRO_DRIFT_Y, INTRO_GROWTH,
    OVERLAY_INTERACTIVE_ABOVE, OVERLAY_MIN_SCALE, OVERLAY_SLIDE_PX,
};
pub use tracker::{progress_from_offsets, ScrollTracker};
