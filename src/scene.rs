//! Platform-independent half of the render driver: owns every animated
//! component and advances them once per display frame.

use log::info;

use crate::camera::Camera;
use crate::color::Rgb;
use crate::config::{FogConfig, SceneConfig};
use crate::error::ConfigError;
use crate::intro::IntroScene;
use crate::overlay::Overlay;
use crate::scroll::{Fadeable, OpacityMap, ScrollSync};
use crate::wave::WaveField;

/// What the host hands the scene each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Seconds since the loop started; monotonic.
    pub time: f32,
    /// Normalized page scroll in [0, 1].
    pub scroll_progress: f32,
}

pub struct Scene {
    camera: Camera,
    sync: ScrollSync,
    field: WaveField,
    intro: IntroScene,
    overlay: Overlay,
    fog: FogConfig,
    background: Rgb,
    scroll_damping: f32,
    opacities: OpacityMap,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let SceneConfig {
            wave,
            fades,
            camera,
            orbit,
            fog,
            background,
            scroll_damping,
        } = config;
        let mut field = WaveField::new(wave)?;
        let mut sync = ScrollSync::new(fades);
        let mut intro = IntroScene::default();
        let mut overlay = Overlay::new();
        let components: &mut [&mut dyn Fadeable] = &mut [
            &mut field,
            &mut intro.liquids,
            &mut intro.backdrop,
            &mut overlay,
        ];
        let opacities = sync.apply(0.0, components);
        info!(
            "scene ready: {} wave vertices, {} liquid shapes, {} backdrop blobs",
            field.config().vertex_count(),
            intro.liquids.shapes().len(),
            intro.backdrop.blobs().len()
        );
        Ok(Self {
            camera: Camera::new(camera, orbit),
            sync,
            field,
            intro,
            overlay,
            fog,
            background,
            scroll_damping,
            opacities,
        })
    }

    /// One update pass: push scroll-driven opacity into every component, then
    /// recompute the wave field. A pure function of `input`; calling it twice
    /// with the same input leaves identical state.
    pub fn update(&mut self, input: FrameInput) -> OpacityMap {
        let components: &mut [&mut dyn Fadeable] = &mut [
            &mut self.field,
            &mut self.intro.liquids,
            &mut self.intro.backdrop,
            &mut self.overlay,
        ];
        self.opacities = self.sync.apply(input.scroll_progress, components);
        self.field.update(input.time);
        self.opacities
    }

    pub fn opacities(&self) -> OpacityMap {
        self.opacities
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    pub fn intro(&self) -> &IntroScene {
        &self.intro
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }

    pub fn fog(&self) -> FogConfig {
        self.fog
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn scroll_damping(&self) -> f32 {
        self.scroll_damping
    }
}
