//! The badge mesh: a fixed blue block letter over a row of red stripes.
//!
//! Positions are laid out as a flat `x, y, z` array ready for upload; the
//! stripes are re-evaluated every frame, the letter never changes.

use crate::animation::AnimationState;

pub const POSITION_SIZE: usize = 3;
pub const COLOR_SIZE: usize = 4;

pub const BLUE_TRIANGLES: usize = 18;
pub const RED_TRIANGLES: usize = 12;
pub const BLUE_VERTICES: usize = BLUE_TRIANGLES * 3;
pub const RED_VERTICES: usize = RED_TRIANGLES * 3;
pub const VERTEX_COUNT: usize = BLUE_VERTICES + RED_VERTICES;

pub const BLUE: [f32; 4] = [0.07, 0.16, 0.29, 1.0];
pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

type Triangle = [[f32; 2]; 3];

static LETTER: [Triangle; BLUE_TRIANGLES] = [
    // top bar
    [[-4.0, 4.5], [-4.0, 3.0], [-3.25, 3.0]],
    [[-4.0, 4.5], [-3.25, 3.0], [-1.5, 3.0]],
    [[-4.0, 4.5], [-1.5, 3.0], [4.0, 4.5]],
    [[4.0, 4.5], [4.0, 3.0], [3.25, 3.0]],
    [[4.0, 4.5], [3.25, 3.0], [1.5, 3.0]],
    [[4.0, 4.5], [1.5, 3.0], [-1.5, 3.0]],
    // left column
    [[-3.25, 3.0], [-1.5, 3.0], [-1.5, 1.75]],
    [[-3.25, 3.0], [-1.5, 1.75], [-1.5, -0.25]],
    [[-3.25, 3.0], [-1.5, -0.25], [-3.25, -1.25]],
    [[-1.5, -0.25], [-3.25, -1.25], [-1.5, -1.25]],
    [[-1.5, 1.75], [-1.5, -0.25], [-0.875, 1.75]],
    [[-1.5, -0.25], [-0.875, -0.25], [-0.875, 1.75]],
    // right column
    [[3.25, 3.0], [1.5, 3.0], [1.5, 1.75]],
    [[3.25, 3.0], [1.5, 1.75], [1.5, -0.25]],
    [[3.25, 3.0], [1.5, -0.25], [3.25, -1.25]],
    [[1.5, -0.25], [3.25, -1.25], [1.5, -1.25]],
    [[1.5, 1.75], [1.5, -0.25], [0.875, 1.75]],
    [[1.5, -0.25], [0.875, -0.25], [0.875, 1.75]],
];

/// Resting position of each stripe triangle and the signed amplitude its
/// vertical offset is scaled by.
static STRIPES: [(Triangle, f32); RED_TRIANGLES] = [
    ([[-3.25, -1.75], [-3.25, -2.375], [-2.625, -2.75]], -1.0),
    ([[-3.25, -1.75], [-2.625, -1.75], [-2.625, -2.75]], -1.0),
    ([[-2.125, -1.75], [-2.125, -3.125], [-1.5, -3.5]], 0.8),
    ([[-2.125, -1.75], [-1.5, -3.5], [-1.5, -1.75]], 0.8),
    ([[-0.875, -1.75], [-0.875, -3.875], [-0.25, -4.125]], 0.6),
    ([[-0.875, -1.75], [-0.25, -4.125], [-0.25, -1.75]], 0.6),
    ([[3.25, -1.75], [3.25, -2.375], [2.625, -2.75]], 0.6),
    ([[3.25, -1.75], [2.625, -1.75], [2.625, -2.75]], 0.6),
    ([[2.125, -1.75], [2.125, -3.125], [1.5, -3.5]], -0.8),
    ([[2.125, -1.75], [1.5, -3.5], [1.5, -1.75]], -0.8),
    ([[0.875, -1.75], [0.875, -3.875], [0.25, -4.125]], -1.0),
    ([[0.875, -1.75], [0.25, -4.125], [0.25, -1.75]], -1.0),
];

/// Vertical displacement shared by every vertex of a stripe.
pub fn stripe_offset(amplitude: f32, wiggle: f32, tilt_degrees: f32) -> f32 {
    amplitude * wiggle * tilt_degrees.to_radians().sin()
}

/// CPU-side copy of both vertex buffers.
#[derive(Debug, Clone)]
pub struct Badge {
    positions: [f32; VERTEX_COUNT * POSITION_SIZE],
    colors: [f32; VERTEX_COUNT * COLOR_SIZE],
}

impl Default for Badge {
    fn default() -> Self {
        Self::new()
    }
}

impl Badge {
    /// Builds the mesh at rest: no wiggle, no tilt.
    pub fn new() -> Self {
        let mut positions = [0.0; VERTEX_COUNT * POSITION_SIZE];
        let letter = LETTER.iter().flatten();
        let stripes = STRIPES.iter().flat_map(|(tri, _)| tri.iter());
        for (dst, [x, y]) in positions.chunks_exact_mut(POSITION_SIZE).zip(letter.chain(stripes)) {
            dst.copy_from_slice(&[*x, *y, 0.0]);
        }

        let mut colors = [0.0; VERTEX_COUNT * COLOR_SIZE];
        for (i, dst) in colors.chunks_exact_mut(COLOR_SIZE).enumerate() {
            dst.copy_from_slice(if i < BLUE_VERTICES { &BLUE } else { &RED });
        }

        Self { positions, colors }
    }

    /// Rewrites the stripe Y coordinates for the given frame.
    pub fn update(&mut self, state: &AnimationState) {
        let (wiggle, tilt) = (state.wiggle(), state.tilt());
        let red = &mut self.positions[BLUE_VERTICES * POSITION_SIZE..];
        for (dst, (tri, amplitude)) in red.chunks_exact_mut(3 * POSITION_SIZE).zip(STRIPES.iter()) {
            let dy = stripe_offset(*amplitude, wiggle, tilt);
            for (vertex, [_, y]) in dst.chunks_exact_mut(POSITION_SIZE).zip(tri.iter()) {
                vertex[1] = y + dy;
            }
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_SIZE
    }
}
