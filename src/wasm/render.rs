use js_sys::Float32Array;
use web_sys::{WebGlBuffer, WebGlRenderingContext as GL};

use super::context::Surface;
use super::shader::ShaderProgram;
use crate::animation::AnimationState;
use crate::config::Config;
use crate::error::{BadgeError, Result};
use crate::geometry::{Badge, COLOR_SIZE, POSITION_SIZE};
use crate::transform::model_view;

/// Owns the GL handles for the badge and draws one frame at a time.
pub struct Renderer {
    gl: GL,
    width: i32,
    height: i32,
    program: ShaderProgram,
    positions: WebGlBuffer,
    colors: WebGlBuffer,
    badge: Badge,
}

impl Renderer {
    pub fn new(surface: Surface, program: ShaderProgram, config: &Config) -> Result<Self> {
        let Surface { gl, width, height } = surface;
        let positions = gl.create_buffer().ok_or(BadgeError::Create("position buffer"))?;
        let colors = gl.create_buffer().ok_or(BadgeError::Create("color buffer"))?;

        let badge = Badge::new();
        upload(&gl, &colors, badge.colors(), GL::STATIC_DRAW);
        upload(&gl, &positions, badge.positions(), GL::DYNAMIC_DRAW);

        let [r, g, b, a] = config.clear_color;
        gl.clear_color(r, g, b, a);
        gl.enable(GL::DEPTH_TEST);

        Ok(Self { gl, width, height, program, positions, colors, badge })
    }

    pub fn draw(&self, state: &AnimationState) {
        let gl = &self.gl;
        gl.viewport(0, 0, self.width, self.height);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        let m = model_view(state.offset(), state.tilt());

        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.positions));
        gl.vertex_attrib_pointer_with_i32(
            self.program.position,
            POSITION_SIZE as i32,
            GL::FLOAT,
            false,
            0,
            0,
        );
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.colors));
        gl.vertex_attrib_pointer_with_i32(
            self.program.color,
            COLOR_SIZE as i32,
            GL::FLOAT,
            false,
            0,
            0,
        );

        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.program.model_view),
            false,
            &m.to_cols_array(),
        );
        gl.draw_arrays(GL::TRIANGLES, 0, self.badge.vertex_count() as i32);
    }

    /// Re-evaluates the stripes for `state` and rewrites the position buffer.
    pub fn refresh(&mut self, state: &AnimationState) {
        self.badge.update(state);
        upload(&self.gl, &self.positions, self.badge.positions(), GL::DYNAMIC_DRAW);
    }
}

fn upload(gl: &GL, buffer: &WebGlBuffer, data: &[f32], usage: u32) {
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    let array = Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, usage);
}
