use crate::error::ConfigError;

/// Every visual element whose opacity follows the scroll timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentId {
    /// Floating liquid shapes in front of the backdrop.
    Intro,
    /// White base plane and soft gradient blobs.
    Backdrop,
    WaveField,
    /// The HTML glass panel layer.
    Overlay,
}

impl ComponentId {
    pub const COUNT: usize = 4;
    pub const ALL: [ComponentId; Self::COUNT] = [
        ComponentId::Intro,
        ComponentId::Backdrop,
        ComponentId::WaveField,
        ComponentId::Overlay,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComponentId::Intro => "intro",
            ComponentId::Backdrop => "backdrop",
            ComponentId::WaveField => "wave-field",
            ComponentId::Overlay => "overlay",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// 0 before the window, 1 after it.
    In,
    /// 1 before the window, 0 after it.
    Out,
}

/// A scroll interval over which one component ramps linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeWindow {
    start: f32,
    end: f32,
    direction: FadeDirection,
}

impl FadeWindow {
    pub fn new(
        component: ComponentId,
        start: f32,
        end: f32,
        direction: FadeDirection,
    ) -> Result<Self, ConfigError> {
        let window = Self {
            start,
            end,
            direction,
        };
        window.check(component)?;
        Ok(window)
    }

    fn check(&self, component: ComponentId) -> Result<(), ConfigError> {
        let component = component.name();
        let (start, end) = (self.start, self.end);
        if !(start < end) {
            return Err(ConfigError::InvertedWindow {
                component,
                start,
                end,
            });
        }
        if start < 0.0 || end > 1.0 {
            return Err(ConfigError::WindowOutOfRange {
                component,
                start,
                end,
            });
        }
        Ok(())
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    /// How far `progress` is through the window, clamped to [0, 1].
    pub fn ramp(&self, progress: f32) -> f32 {
        ((progress - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    pub fn opacity(&self, progress: f32) -> f32 {
        match self.direction {
            FadeDirection::In => self.ramp(progress),
            FadeDirection::Out => 1.0 - self.ramp(progress),
        }
    }
}

/// Opacity per component for one frame. Fixed size, so computing it each
/// frame allocates nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpacityMap {
    values: [f32; ComponentId::COUNT],
}

impl OpacityMap {
    pub fn opaque() -> Self {
        Self {
            values: [1.0; ComponentId::COUNT],
        }
    }

    pub fn get(&self, id: ComponentId) -> f32 {
        self.values[id.slot()]
    }

    pub fn set(&mut self, id: ComponentId, opacity: f32) {
        self.values[id.slot()] = opacity.clamp(0.0, 1.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, f32)> + '_ {
        ComponentId::ALL.iter().map(|&id| (id, self.get(id)))
    }
}

/// The page timeline: which component fades over which scroll interval.
/// Components without a window stay fully opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeSchedule {
    entries: Vec<(ComponentId, FadeWindow)>,
}

impl FadeSchedule {
    pub fn new(entries: Vec<(ComponentId, FadeWindow)>) -> Result<Self, ConfigError> {
        let schedule = Self { entries };
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, (id, window)) in self.entries.iter().enumerate() {
            window.check(*id)?;
            if self.entries[..i].iter().any(|(other, _)| other == id) {
                return Err(ConfigError::DuplicateComponent(id.name()));
            }
        }
        Ok(())
    }

    pub fn evaluate(&self, progress: f32) -> OpacityMap {
        let mut map = OpacityMap::opaque();
        for (id, window) in &self.entries {
            map.set(*id, window.opacity(progress));
        }
        map
    }
}

impl Default for FadeSchedule {
    /// Intro and backdrop fade out over the first half of the page; the wave
    /// field and overlay fade in over the last quarter.
    fn default() -> Self {
        let window = |start, end, direction| FadeWindow {
            start,
            end,
            direction,
        };
        Self {
            entries: vec![
                (ComponentId::Intro, window(0.0, 0.5, FadeDirection::Out)),
                (ComponentId::Backdrop, window(0.0, 0.5, FadeDirection::Out)),
                (ComponentId::WaveField, window(0.75, 1.0, FadeDirection::In)),
                (ComponentId::Overlay, window(0.75, 1.0, FadeDirection::In)),
            ],
        }
    }
}
