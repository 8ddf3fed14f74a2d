//! Per-tick animation: swing phase, tilt, and the station the badge sits at.
//!
//! The phase is kept as a count of fixed steps so the wrap check is an
//! integer comparison and cannot be skipped by accumulated rounding.

use glam::Vec2;

/// Degrees added to the phase every tick.
pub const PHASE_STEP: f32 = 0.125;
/// Ticks spent at each station.
pub const TICKS_PER_STATION: u32 = 168;
/// Phase value at which the swing wraps and the badge moves on.
pub const PHASE_THRESHOLD: f32 = TICKS_PER_STATION as f32 * PHASE_STEP;
/// Phase past which the tilt flips sign.
pub const TILT_MIDPOINT: f32 = 10.0;

const CORNER: f32 = 4.25;

/// The five places the badge visits, in visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Station {
    #[default]
    Center,
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Station {
    pub const ALL: [Station; 5] = [
        Station::Center,
        Station::TopRight,
        Station::TopLeft,
        Station::BottomLeft,
        Station::BottomRight,
    ];

    /// Successor in the cycle. Total over all stations.
    pub fn next(self) -> Station {
        match self {
            Station::Center => Station::TopRight,
            Station::TopRight => Station::TopLeft,
            Station::TopLeft => Station::BottomLeft,
            Station::BottomLeft => Station::BottomRight,
            Station::BottomRight => Station::Center,
        }
    }

    /// Translation applied to the badge, in view units.
    pub fn offset(self) -> Vec2 {
        match self {
            Station::Center => Vec2::ZERO,
            Station::TopRight => Vec2::new(CORNER, CORNER),
            Station::TopLeft => Vec2::new(-CORNER, CORNER),
            Station::BottomLeft => Vec2::new(-CORNER, -CORNER),
            Station::BottomRight => Vec2::new(CORNER, -CORNER),
        }
    }

    /// 0 while centered, 1 everywhere else.
    pub fn wiggle(self) -> f32 {
        match self {
            Station::Center => 0.0,
            _ => 1.0,
        }
    }
}

/// Triangular swing: positive up to the midpoint, mirrored after it.
pub fn tilt_for(phase: f32) -> f32 {
    if phase > TILT_MIDPOINT {
        -phase
    } else {
        phase
    }
}

/// Everything the renderer and geometry need to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    steps: u32,
    station: Station,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase 0 at the given station.
    pub fn starting_at(station: Station) -> Self {
        Self { steps: 0, station }
    }

    /// Advances one frame. Returns true when the badge moved to the next
    /// station on this tick.
    pub fn tick(&mut self) -> bool {
        self.steps += 1;
        if self.steps >= TICKS_PER_STATION {
            self.steps -= TICKS_PER_STATION;
            self.station = self.station.next();
            return true;
        }
        false
    }

    pub fn phase(&self) -> f32 {
        self.steps as f32 * PHASE_STEP
    }

    /// Rotation about the view axis, in degrees.
    pub fn tilt(&self) -> f32 {
        tilt_for(self.phase())
    }

    pub fn station(&self) -> Station {
        self.station
    }

    pub fn offset(&self) -> Vec2 {
        self.station.offset()
    }

    pub fn wiggle(&self) -> f32 {
        self.station.wiggle()
    }
}
