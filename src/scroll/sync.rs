use log::debug;

use super::fade::{ComponentId, FadeSchedule, OpacityMap};
use crate::config::VISIBILITY_EPSILON;

/// How far the intro group rises (world units) once fully faded.
pub const INTRO_DRIFT_Y: f32 = 8.0;
/// Extra scale of the intro group once fully faded.
pub const INTRO_GROWTH: f32 = 0.2;
/// Vertical slide of the overlay while hidden, CSS pixels.
pub const OVERLAY_SLIDE_PX: f32 = 40.0;
pub const OVERLAY_MIN_SCALE: f32 = 0.95;
/// The overlay takes pointer input only above this opacity.
pub const OVERLAY_INTERACTIVE_ABOVE: f32 = 0.8;

/// A visual element driven by the scroll timeline.
pub trait Fadeable {
    fn component(&self) -> ComponentId;
    fn set_opacity(&mut self, opacity: f32);
}

pub fn is_visible(opacity: f32) -> bool {
    opacity > VISIBILITY_EPSILON
}

/// Group transform of the intro scene for a given intro opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroTransform {
    pub visible: bool,
    pub offset_y: f32,
    pub scale: f32,
}

impl IntroTransform {
    pub fn from_opacity(opacity: f32) -> Self {
        let faded = 1.0 - opacity.clamp(0.0, 1.0);
        Self {
            visible: is_visible(opacity),
            offset_y: faded * INTRO_DRIFT_Y,
            scale: 1.0 + faded * INTRO_GROWTH,
        }
    }
}

impl Default for IntroTransform {
    fn default() -> Self {
        Self::from_opacity(1.0)
    }
}

/// CSS-equivalent state of the HTML overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub opacity: f32,
    pub visible: bool,
    pub translate_y_px: f32,
    pub scale: f32,
    pub interactive: bool,
}

impl OverlayStyle {
    pub fn from_opacity(opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        Self {
            opacity,
            visible: is_visible(opacity),
            translate_y_px: (1.0 - opacity) * OVERLAY_SLIDE_PX,
            scale: OVERLAY_MIN_SCALE + (1.0 - OVERLAY_MIN_SCALE) * opacity,
            interactive: opacity > OVERLAY_INTERACTIVE_ABOVE,
        }
    }

    pub fn css_opacity(&self) -> String {
        format!("{:.4}", self.opacity)
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translateY({:.2}px) scale({:.4})",
            self.translate_y_px, self.scale
        )
    }

    pub fn css_pointer_events(&self) -> &'static str {
        if self.interactive {
            "auto"
        } else {
            "none"
        }
    }

    pub fn css_visibility(&self) -> &'static str {
        if self.visible {
            "visible"
        } else {
            "hidden"
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from_opacity(0.0)
    }
}

/// Maps scroll progress onto the fade schedule and pushes the resulting
/// opacity into each registered component.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    schedule: FadeSchedule,
    last: Option<OpacityMap>,
}

impl ScrollSync {
    pub fn new(schedule: FadeSchedule) -> Self {
        Self {
            schedule,
            last: None,
        }
    }

    /// Pure evaluation, no side effects.
    pub fn opacities(&self, progress: f32) -> OpacityMap {
        self.schedule.evaluate(progress.clamp(0.0, 1.0))
    }

    /// Evaluate the schedule and call `set_opacity` on every component.
    pub fn apply(&mut self, progress: f32, components: &mut [&mut dyn Fadeable]) -> OpacityMap {
        let map = self.opacities(progress);
        for component in components.iter_mut() {
            let id = component.component();
            component.set_opacity(map.get(id));
        }
        self.log_transitions(&map);
        self.last = Some(map);
        map
    }

    fn log_transitions(&self, map: &OpacityMap) {
        let Some(prev) = &self.last else {
            return;
        };
        for (id, opacity) in map.iter() {
            let was = is_visible(prev.get(id));
            let now = is_visible(opacity);
            if was != now {
                debug!(
                    "{} {}",
                    id.name(),
                    if now { "shown" } else { "hidden" }
                );
            }
        }
    }
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new(FadeSchedule::default())
    }
}
