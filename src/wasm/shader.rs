use web_sys::{
    Document, Node, WebGlProgram, WebGlRenderingContext as GL, WebGlShader, WebGlUniformLocation,
};

use crate::config::Config;
use crate::error::{BadgeError, Result};

/// Linked program with the locations the renderer feeds every frame.
pub struct ShaderProgram {
    pub position: u32,
    pub color: u32,
    pub model_view: WebGlUniformLocation,
}

/// Concatenates the text children of a `<script type="x-shader/...">` block.
fn source_from_dom(document: &Document, id: &str) -> Result<(u32, String)> {
    let script = document
        .get_element_by_id(id)
        .ok_or_else(|| BadgeError::ShaderSourceMissing(id.to_owned()))?;

    let kind = match script.get_attribute("type").as_deref() {
        Some("x-shader/x-vertex") => GL::VERTEX_SHADER,
        Some("x-shader/x-fragment") => GL::FRAGMENT_SHADER,
        other => {
            return Err(BadgeError::UnknownShaderType {
                id: id.to_owned(),
                kind: other.unwrap_or_default().to_owned(),
            })
        }
    };

    let mut source = String::new();
    let mut child = script.first_child();
    while let Some(node) = child {
        if node.node_type() == Node::TEXT_NODE {
            source.push_str(&node.text_content().unwrap_or_default());
        }
        child = node.next_sibling();
    }
    Ok((kind, source))
}

fn compile(gl: &GL, document: &Document, id: &str) -> Result<WebGlShader> {
    let (kind, source) = source_from_dom(document, id)?;
    let shader = gl.create_shader(kind).ok_or(BadgeError::Create("shader"))?;
    gl.shader_source(&shader, &source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !ok {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        return Err(BadgeError::ShaderCompile { id: id.to_owned(), log });
    }
    Ok(shader)
}

fn attribute(gl: &GL, program: &WebGlProgram, name: &'static str) -> Result<u32> {
    let loc = gl.get_attrib_location(program, name);
    if loc < 0 {
        return Err(BadgeError::AttributeMissing(name));
    }
    let loc = loc as u32;
    gl.enable_vertex_attrib_array(loc);
    Ok(loc)
}

/// Compiles both shader blocks, links them and makes the program current.
pub fn setup(gl: &GL, document: &Document, config: &Config) -> Result<ShaderProgram> {
    let vertex = compile(gl, document, config.vertex_shader_id)?;
    let fragment = compile(gl, document, config.fragment_shader_id)?;

    let program = gl.create_program().ok_or(BadgeError::Create("program"))?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !linked {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        return Err(BadgeError::ProgramLink(log));
    }
    gl.use_program(Some(&program));

    let position = attribute(gl, &program, config.position_attribute)?;
    let color = attribute(gl, &program, config.color_attribute)?;
    let model_view = gl
        .get_uniform_location(&program, config.model_view_uniform)
        .ok_or(BadgeError::UniformMissing(config.model_view_uniform))?;

    log::debug!("shader program linked (position={position}, color={color})");
    Ok(ShaderProgram { position, color, model_view })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wasm::context::{self, tests::canvas};
    use wasm_bindgen_test::*;

    const VS: &str = "
        attribute vec3 aVertexPosition;
        attribute vec4 aVertexColor;
        uniform mat4 uMVMatrix;
        varying vec4 vColor;
        void main(void) {
            gl_Position = uMVMatrix * vec4(aVertexPosition, 1.0);
            vColor = aVertexColor;
        }";
    const FS: &str = "
        precision mediump float;
        varying vec4 vColor;
        void main(void) { gl_FragColor = vColor; }";

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn add_script(id: &str, kind: &str, source: &str) {
        let document = document();
        let script = document.create_element("script").unwrap();
        script.set_id(id);
        script.set_attribute("type", kind).unwrap();
        script.set_text_content(Some(source));
        document.body().unwrap().append_child(&script).unwrap();
    }

    fn gl(id: &str) -> GL {
        context::create(&canvas(id)).expect("webgl context").gl
    }

    #[wasm_bindgen_test]
    fn missing_block() {
        let err = source_from_dom(&document(), "no-such-block").err();
        assert_eq!(err, Some(BadgeError::ShaderSourceMissing("no-such-block".into())));
    }

    #[wasm_bindgen_test]
    fn unknown_block_type() {
        add_script("plain-block", "text/plain", "void main(void) {}");
        let err = source_from_dom(&document(), "plain-block").err();
        assert_eq!(
            err,
            Some(BadgeError::UnknownShaderType {
                id: "plain-block".into(),
                kind: "text/plain".into(),
            })
        );
    }

    #[wasm_bindgen_test]
    fn text_children_become_source() {
        add_script("text-vs", "x-shader/x-vertex", VS);
        let (kind, source) = source_from_dom(&document(), "text-vs").unwrap();
        assert_eq!(kind, GL::VERTEX_SHADER);
        assert_eq!(source, VS);
    }

    #[wasm_bindgen_test]
    fn compile_failure_reports_info_log() {
        add_script("broken-vs", "x-shader/x-vertex", "void main(void) { nope }");
        add_script("broken-fs", "x-shader/x-fragment", FS);
        let config = Config {
            vertex_shader_id: "broken-vs",
            fragment_shader_id: "broken-fs",
            ..Config::default()
        };
        match setup(&gl("gl-broken"), &document(), &config) {
            Err(BadgeError::ShaderCompile { id, log }) => {
                assert_eq!(id, "broken-vs");
                assert!(!log.is_empty());
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("broken shader compiled"),
        }
    }

    #[wasm_bindgen_test]
    fn links_and_resolves_locations() {
        add_script("good-vs", "x-shader/x-vertex", VS);
        add_script("good-fs", "x-shader/x-fragment", FS);
        let config = Config {
            vertex_shader_id: "good-vs",
            fragment_shader_id: "good-fs",
            ..Config::default()
        };
        let program = match setup(&gl("gl-good"), &document(), &config) {
            Ok(program) => program,
            Err(err) => panic!("setup failed: {err}"),
        };
        assert_ne!(program.position, program.color);
    }

    #[wasm_bindgen_test]
    fn missing_attribute_is_reported() {
        add_script("bare-vs", "x-shader/x-vertex", "void main(void) { gl_Position = vec4(0.0); }");
        add_script(
            "bare-fs",
            "x-shader/x-fragment",
            "precision mediump float; void main(void) { gl_FragColor = vec4(1.0); }",
        );
        let config = Config {
            vertex_shader_id: "bare-vs",
            fragment_shader_id: "bare-fs",
            ..Config::default()
        };
        let err = setup(&gl("gl-bare"), &document(), &config).err();
        assert_eq!(err, Some(BadgeError::AttributeMissing("aVertexPosition")));
    }
}
