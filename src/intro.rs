//! The opening composition: a bright backdrop of soft blobs with floating
//! liquid shapes in front of it. Both halves fade out as the page scrolls.

use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::camera::Viewport;
use crate::color::{Gradient, Rgb};
use crate::scroll::{is_visible, ComponentId, Fadeable, IntroTransform};

/// Depth of the backdrop group.
pub const BACKDROP_Z: f32 = -10.0;
/// The base plane is this many viewports wide so its edges are never seen.
const BASE_PLANE_SPAN: f32 = 10.0;

/// Gentle bobbing around the parent origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Time offset so shapes do not bob in lockstep.
    pub phase: f32,
}

impl FloatMotion {
    pub fn rotation(&self, time: f32) -> Quat {
        let a = (time + self.phase) / 4.0 * self.speed;
        Quat::from_euler(
            EulerRot::XYZ,
            a.cos() / 8.0 * self.rotation_intensity,
            a.sin() / 8.0 * self.rotation_intensity,
            a.sin() / 20.0 * self.rotation_intensity,
        )
    }

    pub fn lift(&self, time: f32) -> f32 {
        let a = (time + self.phase) / 4.0 * self.speed;
        a.sin() / 10.0 * self.float_intensity
    }
}

/// A distorted, gradient-mapped sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidShape {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub radius: f32,
    /// Surface displacement as a fraction of the radius.
    pub distort: f32,
    pub distort_speed: f32,
    pub float: FloatMotion,
}

/// Per-frame draw data for one liquid shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidInstance {
    pub center: Vec3,
    pub orientation: Quat,
    pub radius: f32,
    pub distort: f32,
    pub distort_speed: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub spot_position: Vec3,
    pub spot_intensity: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 1.5,
            spot_position: Vec3::new(10.0, 10.0, 10.0),
            spot_intensity: 1.0,
        }
    }
}

/// The floating liquid shapes and their shared group transform.
#[derive(Debug, Clone)]
pub struct LiquidGroup {
    shapes: Vec<LiquidShape>,
    gradient: Gradient,
    lighting: Lighting,
    opacity: f32,
    transform: IntroTransform,
}

impl LiquidGroup {
    pub fn new(shapes: Vec<LiquidShape>, gradient: Gradient) -> Self {
        Self {
            shapes,
            gradient,
            lighting: Lighting::default(),
            opacity: 1.0,
            transform: IntroTransform::default(),
        }
    }

    pub fn shapes(&self) -> &[LiquidShape] {
        &self.shapes
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn transform(&self) -> IntroTransform {
        self.transform
    }

    pub fn is_visible(&self) -> bool {
        self.transform.visible
    }

    /// World-space draw data at `time`; empty while hidden.
    pub fn instances(&self, time: f32, out: &mut Vec<LiquidInstance>) {
        out.clear();
        if !self.is_visible() {
            return;
        }
        let lift = Vec3::Y * self.transform.offset_y;
        let scale = self.transform.scale;
        for shape in &self.shapes {
            let bob = shape.float.rotation(time);
            let local = bob * shape.position + Vec3::Y * shape.float.lift(time);
            let own = Quat::from_euler(
                EulerRot::XYZ,
                shape.rotation.x,
                shape.rotation.y,
                shape.rotation.z,
            );
            out.push(LiquidInstance {
                center: local * scale + lift,
                orientation: bob * own,
                radius: shape.radius * shape.scale * scale,
                distort: shape.distort,
                distort_speed: shape.distort_speed,
                opacity: self.opacity,
            });
        }
    }
}

impl Fadeable for LiquidGroup {
    fn component(&self) -> ComponentId {
        ComponentId::Intro
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.transform = IntroTransform::from_opacity(self.opacity);
    }
}

/// A radial-gradient sprite placed relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftBlob {
    /// Center as a fraction of the viewport size.
    pub anchor: Vec2,
    pub depth: f32,
    /// Edge length as a fraction of the viewport width.
    pub size: f32,
    pub color: Rgb,
    pub base_opacity: f32,
}

/// Per-frame draw data for a backdrop quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropQuad {
    pub center: Vec3,
    pub size: Vec2,
    pub color: Rgb,
    pub opacity: f32,
    /// Radial falloff for blobs; the base plane is solid.
    pub soft: bool,
}

#[derive(Debug, Clone)]
pub struct Backdrop {
    base_color: Rgb,
    blobs: Vec<SoftBlob>,
    opacity: f32,
}

impl Backdrop {
    pub fn new(base_color: Rgb, blobs: Vec<SoftBlob>) -> Self {
        Self {
            base_color,
            blobs,
            opacity: 1.0,
        }
    }

    pub fn blobs(&self) -> &[SoftBlob] {
        &self.blobs
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        is_visible(self.opacity)
    }

    /// Base plane first, then blobs in declaration order (back to front).
    pub fn quads(&self, viewport: Viewport, out: &mut Vec<BackdropQuad>) {
        out.clear();
        if !self.is_visible() {
            return;
        }
        let (w, h) = (viewport.width, viewport.height);
        out.push(BackdropQuad {
            center: Vec3::new(0.0, 0.0, BACKDROP_Z - 1.0),
            size: Vec2::new(w, h) * BASE_PLANE_SPAN,
            color: self.base_color,
            opacity: self.opacity,
            soft: false,
        });
        for blob in &self.blobs {
            out.push(BackdropQuad {
                center: Vec3::new(blob.anchor.x * w, blob.anchor.y * h, BACKDROP_Z + blob.depth),
                size: Vec2::splat(blob.size * w),
                color: blob.color,
                opacity: self.opacity * blob.base_opacity,
                soft: true,
            });
        }
    }
}

impl Fadeable for Backdrop {
    fn component(&self) -> ComponentId {
        ComponentId::Backdrop
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

/// Backdrop and liquid group together, laid out as on the landing page.
#[derive(Debug, Clone)]
pub struct IntroScene {
    pub backdrop: Backdrop,
    pub liquids: LiquidGroup,
}

impl IntroScene {
    pub fn new(backdrop: Backdrop, liquids: LiquidGroup) -> Self {
        Self { backdrop, liquids }
    }
}

impl Default for IntroScene {
    fn default() -> Self {
        let blob = |x: f32, y: f32, depth: f32, size: f32, hex: &str, base_opacity: f32| SoftBlob {
            anchor: Vec2::new(x, y),
            depth,
            size,
            color: Rgb::from_hex(hex).unwrap_or(Rgb::WHITE),
            base_opacity,
        };
        let backdrop = Backdrop::new(
            Rgb::WHITE,
            vec![
                blob(-0.4, -0.3, 0.0, 1.0, "#FF9A9A", 0.6),
                blob(0.4, -0.4, 0.0, 1.2, "#A78BFA", 0.5),
                blob(0.0, 0.1, 0.1, 0.8, "#FBCFE8", 0.4),
                blob(0.3, 0.4, 0.0, 0.9, "#ECBFBF", 0.4),
            ],
        );

        let liquids = LiquidGroup::new(
            vec![
                LiquidShape {
                    position: Vec3::new(-3.5, -0.5, 0.0),
                    rotation: Vec3::new(0.2, 0.2, 0.0),
                    scale: 1.3,
                    radius: 1.2,
                    distort: 0.4,
                    distort_speed: 3.0,
                    float: FloatMotion {
                        speed: 2.0,
                        rotation_intensity: 0.5,
                        float_intensity: 0.5,
                        phase: 0.0,
                    },
                },
                LiquidShape {
                    position: Vec3::new(5.0, 3.0, -2.0),
                    rotation: Vec3::ZERO,
                    scale: 1.0,
                    radius: 0.8,
                    distort: 0.5,
                    distort_speed: 2.0,
                    float: FloatMotion {
                        speed: 1.5,
                        rotation_intensity: 1.0,
                        float_intensity: 1.0,
                        phase: 3.7,
                    },
                },
                LiquidShape {
                    position: Vec3::new(4.0, -4.0, -1.0),
                    rotation: Vec3::ZERO,
                    scale: 0.7,
                    radius: 0.8,
                    distort: 0.6,
                    distort_speed: 1.5,
                    float: FloatMotion {
                        speed: 1.0,
                        rotation_intensity: 2.0,
                        float_intensity: 0.5,
                        phase: 8.1,
                    },
                },
            ],
            Gradient::brand(),
        );

        Self::new(backdrop, liquids)
    }
}
