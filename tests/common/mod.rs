#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use square_wasm::gl::{GlContext, ShaderStage};

/// Every call the fake received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    UseProgram(u32),
    CreateBuffer(u32),
    BindBuffer { target: u32, buffer: u32 },
    BufferData { target: u32, data: Vec<f32>, usage: u32 },
    VertexAttribPointer {
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    UniformMatrix4 {
        location: Option<String>,
        transpose: bool,
        data: [f32; 16],
    },
    ClearColor([f32; 4]),
    ClearDepth(f32),
    Enable(u32),
    DepthFunc(u32),
    Clear(u32),
    DrawArrays { mode: u32, first: i32, count: i32 },
}

pub const COMPILE_ERROR: &str = "ERROR: 0:1: syntax error";
pub const LINK_ERROR: &str = "ERROR: fragment shader is missing main()";
pub const VARYING_ERROR: &str = "ERROR: varying not written by vertex shader";

/// In-memory stand-in for a WebGL context.
///
/// A shader "compiles" when it defines `main` and its braces balance. Linking
/// needs one shader per stage, and every `varying` the fragment stage reads
/// must also be declared by the vertex stage; `fail_link` forces a failure.
/// Attributes and uniforms are looked up by name in the program's sources,
/// so a shader that never declares `aVertexPosition` reports it inactive.
pub struct FakeGl {
    pub calls: RefCell<Vec<Call>>,
    pub fail_link: bool,
    pub refuse_buffers: bool,
    pub client_size: (u32, u32),
    next_id: Cell<u32>,
    sources: RefCell<HashMap<u32, String>>,
    stages: RefCell<HashMap<u32, ShaderStage>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    linked: RefCell<HashMap<u32, bool>>,
}

impl Default for FakeGl {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_link: false,
            refuse_buffers: false,
            client_size: (640, 480),
            next_id: Cell::new(1),
            sources: RefCell::new(HashMap::new()),
            stages: RefCell::new(HashMap::new()),
            attached: RefCell::new(HashMap::new()),
            linked: RefCell::new(HashMap::new()),
        }
    }
}

impl FakeGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_link() -> Self {
        Self {
            fail_link: true,
            ..Self::default()
        }
    }

    pub fn refusing_buffers() -> Self {
        Self {
            refuse_buffers: true,
            ..Self::default()
        }
    }

    pub fn with_client_size(width: u32, height: u32) -> Self {
        Self {
            client_size: (width, height),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn is_linked(&self, program: u32) -> bool {
        self.linked.borrow().get(&program).copied().unwrap_or(false)
    }

    fn id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn compiles(source: &str) -> bool {
        let opens = source.matches('{').count();
        let closes = source.matches('}').count();
        source.contains("void main()") && opens > 0 && opens == closes
    }

    fn program_sources(&self, program: u32) -> String {
        self.stage_sources(program, None).join("\n")
    }

    fn stage_sources(&self, program: u32, stage: Option<ShaderStage>) -> Vec<String> {
        let sources = self.sources.borrow();
        let stages = self.stages.borrow();
        self.attached
            .borrow()
            .get(&program)
            .map(|shaders| {
                shaders
                    .iter()
                    .filter(|shader| stage.map_or(true, |s| stages.get(shader) == Some(&s)))
                    .filter_map(|shader| sources.get(shader).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn varyings(source: &str) -> Vec<String> {
        source
            .lines()
            .filter_map(|line| line.trim().strip_prefix("varying "))
            .filter_map(|decl| decl.trim_end_matches(';').split_whitespace().last())
            .map(str::to_string)
            .collect()
    }

    fn varyings_match(&self, program: u32) -> bool {
        let vertex = self.stage_sources(program, Some(ShaderStage::Vertex)).join("\n");
        let fragment = self.stage_sources(program, Some(ShaderStage::Fragment)).join("\n");
        let written = Self::varyings(&vertex);
        Self::varyings(&fragment)
            .iter()
            .all(|name| written.contains(name))
    }
}

impl GlContext for FakeGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;

    fn create_shader(&self, stage: ShaderStage) -> Option<u32> {
        let id = self.id();
        self.stages.borrow_mut().insert(id, stage);
        self.record(Call::CreateShader(stage, id));
        Some(id)
    }

    fn shader_source(&self, shader: &u32, source: &str) {
        self.sources.borrow_mut().insert(*shader, source.to_string());
        self.record(Call::ShaderSource(*shader));
    }

    fn compile_shader(&self, shader: &u32) {
        self.record(Call::CompileShader(*shader));
    }

    fn shader_compile_status(&self, shader: &u32) -> bool {
        self.sources
            .borrow()
            .get(shader)
            .map(|source| Self::compiles(source))
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &u32) -> Option<String> {
        if self.shader_compile_status(shader) {
            Some(String::new())
        } else {
            Some(COMPILE_ERROR.to_string())
        }
    }

    fn delete_shader(&self, shader: &u32) {
        self.record(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        let id = self.id();
        self.record(Call::CreateProgram(id));
        Some(id)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.attached
            .borrow_mut()
            .entry(*program)
            .or_default()
            .push(*shader);
        self.record(Call::AttachShader {
            program: *program,
            shader: *shader,
        });
    }

    fn link_program(&self, program: &u32) {
        let ok = !self.fail_link
            && self.stage_sources(*program, Some(ShaderStage::Vertex)).len() == 1
            && self.stage_sources(*program, Some(ShaderStage::Fragment)).len() == 1
            && self.varyings_match(*program);
        self.linked.borrow_mut().insert(*program, ok);
        self.record(Call::LinkProgram(*program));
    }

    fn program_link_status(&self, program: &u32) -> bool {
        self.is_linked(*program)
    }

    fn program_info_log(&self, program: &u32) -> Option<String> {
        if self.is_linked(*program) {
            None
        } else if !self.fail_link && !self.varyings_match(*program) {
            Some(VARYING_ERROR.to_string())
        } else {
            Some(LINK_ERROR.to_string())
        }
    }

    fn use_program(&self, program: &u32) {
        self.record(Call::UseProgram(*program));
    }

    fn attrib_location(&self, program: &u32, name: &str) -> i32 {
        let declared = format!("attribute vec4 {name};");
        if self.is_linked(*program) && self.program_sources(*program).contains(&declared) {
            0
        } else {
            -1
        }
    }

    fn uniform_location(&self, program: &u32, name: &str) -> Option<String> {
        let declared = format!("uniform mat4 {name};");
        if self.is_linked(*program) && self.program_sources(*program).contains(&declared) {
            Some(name.to_string())
        } else {
            None
        }
    }

    fn create_buffer(&self) -> Option<u32> {
        if self.refuse_buffers {
            return None;
        }
        let id = self.id();
        self.record(Call::CreateBuffer(id));
        Some(id)
    }

    fn bind_buffer(&self, target: u32, buffer: &u32) {
        self.record(Call::BindBuffer {
            target,
            buffer: *buffer,
        });
    }

    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32) {
        self.record(Call::BufferData {
            target,
            data: data.to_vec(),
            usage,
        });
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(Call::VertexAttribPointer {
            index,
            size,
            ty,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn uniform_matrix4fv(&self, location: Option<&String>, transpose: bool, data: &[f32; 16]) {
        self.record(Call::UniformMatrix4 {
            location: location.cloned(),
            transpose,
            data: *data,
        });
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Call::ClearColor([r, g, b, a]));
    }

    fn clear_depth(&self, depth: f32) {
        self.record(Call::ClearDepth(depth));
    }

    fn enable(&self, cap: u32) {
        self.record(Call::Enable(cap));
    }

    fn depth_func(&self, func: u32) {
        self.record(Call::DepthFunc(func));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(Call::DrawArrays { mode, first, count });
    }

    fn client_size(&self) -> (u32, u32) {
        self.client_size
    }
}
