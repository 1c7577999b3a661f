//! Drawing the network with macroquad.
//!
//! Lines go through an additive-blend material so overlapping connections
//! brighten each other. Nodes are one small circle texture, rasterized once
//! at startup and tinted per node.

use macroquad::material::{
    gl_use_default_material, gl_use_material, load_material, Material, MaterialParams,
};
use macroquad::miniquad::{
    BlendFactor, BlendState, BlendValue, Equation, PipelineParams, ShaderSource,
};
use macroquad::prelude::{
    clear_background, draw_line, draw_texture_ex, vec2, Color, DrawTextureParams, FilterMode,
    Image, Texture2D, BLANK,
};

use crate::config::NODE_RADIUS;
use crate::driver::Simulation;
use crate::error::RenderError;

const LINE_VERTEX_SHADER: &str = r#"#version 100
attribute vec3 position;
attribute vec2 texcoord;
attribute vec4 color0;

varying lowp vec2 uv;
varying lowp vec4 color;

uniform mat4 Model;
uniform mat4 Projection;

void main() {
    gl_Position = Projection * Model * vec4(position, 1);
    color = color0 / 255.0;
    uv = texcoord;
}
"#;

const LINE_FRAGMENT_SHADER: &str = r#"#version 100
varying lowp vec4 color;
varying lowp vec2 uv;

uniform sampler2D Texture;

void main() {
    gl_FragColor = color * texture2D(Texture, uv);
}
"#;

/// Per-pixel coverage of an anti-aliased disc of `radius`, row-major.
///
/// The texture is square with a one pixel margin on each side; coverage
/// ramps from 1 to 0 across the half pixel either side of the rim.
pub fn circle_coverage(radius: f32) -> (u16, Vec<f32>) {
    let size = (radius * 2.0).ceil() as u16 + 2;
    let center = size as f32 / 2.0;
    let mut coverage = Vec::with_capacity(size as usize * size as usize);
    for y in 0..size {
        for x in 0..size {
            let d = vec2(x as f32 + 0.5 - center, y as f32 + 0.5 - center).length();
            coverage.push((radius + 0.5 - d).clamp(0.0, 1.0));
        }
    }
    (size, coverage)
}

/// White disc texture, tinted per node when drawn.
fn circle_texture(radius: f32) -> Texture2D {
    let (size, coverage) = circle_coverage(radius);
    let mut image = Image::gen_image_color(size, size, BLANK);
    for (i, alpha) in coverage.iter().enumerate() {
        let x = (i % size as usize) as u32;
        let y = (i / size as usize) as u32;
        image.set_pixel(x, y, Color::new(1.0, 1.0, 1.0, *alpha));
    }
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Linear);
    texture
}

fn additive_material() -> Result<Material, RenderError> {
    let material = load_material(
        ShaderSource::Glsl {
            vertex: LINE_VERTEX_SHADER,
            fragment: LINE_FRAGMENT_SHADER,
        },
        MaterialParams {
            pipeline_params: PipelineParams {
                color_blend: Some(BlendState::new(
                    Equation::Add,
                    BlendFactor::Value(BlendValue::SourceAlpha),
                    BlendFactor::One,
                )),
                ..Default::default()
            },
            ..Default::default()
        },
    )?;
    Ok(material)
}

/// GPU resources created once and reused every frame.
pub struct Renderer {
    line_material: Material,
    node_texture: Texture2D,
}

impl Renderer {
    /// Must be called from inside the macroquad main loop.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Self {
            line_material: additive_material()?,
            node_texture: circle_texture(NODE_RADIUS),
        })
    }

    /// Submits one frame: transparent clear, connection lines, then node sprites on top.
    pub fn draw(&self, sim: &Simulation) {
        clear_background(BLANK);

        gl_use_material(&self.line_material);
        for seg in sim.lines().segments() {
            draw_line(seg.from.x, seg.from.y, seg.to.x, seg.to.y, seg.width, seg.color);
        }
        gl_use_default_material();

        let size = self.node_texture.width();
        let params = DrawTextureParams {
            dest_size: Some(vec2(size, size)),
            ..Default::default()
        };
        for node in sim.nodes() {
            draw_texture_ex(
                &self.node_texture,
                node.pos.x - size / 2.0,
                node.pos.y - size / 2.0,
                node.tag.color(),
                params.clone(),
            );
        }
    }
}
