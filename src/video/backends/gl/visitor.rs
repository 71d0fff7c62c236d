use std::collections::HashMap;
use std::ffi::CString;
use std::mem;
use std::os::raw::c_void;
use std::ptr;

use gl::types::*;

use crate::errors::*;
use crate::math::prelude::{perspective, vec3, Deg, Matrix, Matrix4, Vector2};

use super::super::super::assets::prelude::*;
use super::super::super::command::Command;
use super::super::Visitor;
use super::capabilities::{Capabilities, Version};

/// Vertex stage of the built-in programs used by immediate draw commands. The
/// `{}` is replaced with the interpolation qualifier of the color varying.
const IMMEDIATE_VS: &str = "#version 330 core
layout (location = 0) in vec2 a_Position;
layout (location = 1) in vec4 a_Color;
uniform mat4 u_MVP;
{} out vec4 v_Color;
void main() {
    gl_Position = u_MVP * vec4(a_Position, 0.0, 1.0);
    v_Color = a_Color;
}
";

const IMMEDIATE_FS: &str = "#version 330 core
{} in vec4 v_Color;
out vec4 FragColor;
void main() {
    FragColor = v_Color;
}
";

/// Floats per immediate vertex: position (2) and color (4).
const IMMEDIATE_STRIDE: usize = 6;

/// Returns the model-view-projection matrix applied to immediate draws: a 45 degree
/// perspective looking at the XY plane from 5 units away.
pub fn projection(dimensions: Vector2<u32>) -> Matrix4<f32> {
    let aspect = if dimensions.x == 0 || dimensions.y == 0 {
        1.0
    } else {
        dimensions.x as f32 / dimensions.y as f32
    };

    perspective(Deg(45.0), aspect, 0.1, 50.0) * Matrix4::from_translation(vec3(0.0, 0.0, -5.0))
}

#[derive(Debug, Clone, Copy)]
struct GLProgramData {
    id: GLuint,
    mvp: GLint,
}

#[derive(Debug, Clone, Copy)]
struct GLMeshData {
    vao: GLuint,
    vbo: GLuint,
    primitive: MeshPrimitive,
    len: GLsizei,
}

struct GLImmediate {
    vao: GLuint,
    vbo: GLuint,
    smooth: GLProgramData,
    flat: GLProgramData,
}

struct GLMutableState {
    shading: Shading,
    dimensions: Vector2<u32>,
    vertices: Vec<f32>,
}

pub struct GLVisitor {
    state: GLMutableState,
    capabilities: Capabilities,
    immediate: GLImmediate,
    stages: HashMap<(GLenum, String), GLuint>,
    shaders: HashMap<ShaderHandle, GLuint>,
    meshes: HashMap<MeshHandle, GLMeshData>,
}

impl GLVisitor {
    pub unsafe fn new() -> Result<Self> {
        let capabilities = Capabilities::parse()?;
        info!("OpenGL Version: {:?}", capabilities.version);
        info!("GLSL Version: {}", capabilities.shading_language);
        info!("Vendor: {}", capabilities.vendor);
        info!("Renderer: {}", capabilities.renderer);
        debug!("GLVisitor {:#?}", capabilities);
        check_capabilities(&capabilities)?;

        let mut stages = HashMap::new();
        let smooth = Self::create_immediate_program(&mut stages, "")?;
        let flat = Self::create_immediate_program(&mut stages, "flat")?;

        let mut vao = 0;
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        let mut vbo = 0;
        gl::GenBuffers(1, &mut vbo);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

        let stride = (IMMEDIATE_STRIDE * mem::size_of::<f32>()) as GLsizei;
        gl::VertexAttribPointer(0, 2, gl::FLOAT, gl::FALSE, stride, ptr::null());
        gl::EnableVertexAttribArray(0);
        gl::VertexAttribPointer(
            1,
            4,
            gl::FLOAT,
            gl::FALSE,
            stride,
            (2 * mem::size_of::<f32>()) as *const c_void,
        );
        gl::EnableVertexAttribArray(1);
        gl::BindVertexArray(0);
        check()?;

        gl::Enable(gl::BLEND);
        gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        gl::Enable(gl::MULTISAMPLE);
        gl::ProvokingVertex(gl::LAST_VERTEX_CONVENTION);

        let mut visitor = GLVisitor {
            state: GLMutableState {
                shading: Shading::Flat,
                dimensions: Vector2::new(0, 0),
                vertices: Vec::new(),
            },
            capabilities,
            immediate: GLImmediate {
                vao,
                vbo,
                smooth,
                flat,
            },
            stages,
            shaders: HashMap::new(),
            meshes: HashMap::new(),
        };

        visitor.reset_render_state()?;
        Ok(visitor)
    }

    unsafe fn create_immediate_program(
        stages: &mut HashMap<(GLenum, String), GLuint>,
        qualifier: &str,
    ) -> Result<GLProgramData> {
        let vs = IMMEDIATE_VS.replace("{}", qualifier);
        let fs = IMMEDIATE_FS.replace("{}", qualifier);

        let vs = Self::stage(stages, gl::VERTEX_SHADER, &vs)?;
        let fs = Self::stage(stages, gl::FRAGMENT_SHADER, &fs)?;
        let id = Self::link(&[vs, fs])?;

        let name = CString::new("u_MVP")?;
        let mvp = gl::GetUniformLocation(id, name.as_ptr());
        check()?;

        Ok(GLProgramData { id, mvp })
    }

    /// Returns the compiled shader object of `src`, compiling it on first use. Shader
    /// objects are shared between every program that links the same source.
    unsafe fn stage(
        stages: &mut HashMap<(GLenum, String), GLuint>,
        tp: GLenum,
        src: &str,
    ) -> Result<GLuint> {
        let key = (tp, src.to_owned());
        if let Some(&id) = stages.get(&key) {
            return Ok(id);
        }

        let id = Self::compile(tp, src)?;
        stages.insert(key, id);
        Ok(id)
    }

    unsafe fn reset_render_state(&mut self) -> Result<()> {
        self.state.shading = Shading::Flat;
        gl::PolygonMode(gl::FRONT_AND_BACK, gl::FILL);
        gl::Disable(gl::CULL_FACE);
        gl::FrontFace(gl::CCW);
        self.set_point_size(1.0)?;
        self.set_line_width(1.0)
    }

    unsafe fn set_point_size(&mut self, size: f32) -> Result<()> {
        let (min, max) = self.capabilities.point_size_range;
        gl::PointSize(clamp(size, min, max));
        check()
    }

    unsafe fn set_line_width(&mut self, width: f32) -> Result<()> {
        let (min, max) = self.capabilities.line_width_range;
        gl::LineWidth(clamp(width, min, max));
        check()
    }

    unsafe fn set_cull_face(&mut self, face: CullFace) -> Result<()> {
        match face {
            CullFace::Nothing => gl::Disable(gl::CULL_FACE),
            CullFace::Front => {
                gl::Enable(gl::CULL_FACE);
                gl::CullFace(gl::FRONT);
            }
            CullFace::Back => {
                gl::Enable(gl::CULL_FACE);
                gl::CullFace(gl::BACK);
            }
        }

        check()
    }

    unsafe fn draw(&mut self, primitive: MeshPrimitive, vertices: &[Vertex]) -> Result<()> {
        let program = match self.state.shading {
            Shading::Smooth => self.immediate.smooth,
            Shading::Flat => self.immediate.flat,
        };

        let data = &mut self.state.vertices;
        data.clear();
        for v in vertices {
            data.extend_from_slice(&[
                v.position.x,
                v.position.y,
                v.color.r,
                v.color.g,
                v.color.b,
                v.color.a,
            ]);
        }

        let mvp = projection(self.state.dimensions);

        gl::UseProgram(program.id);
        gl::UniformMatrix4fv(program.mvp, 1, gl::FALSE, mvp.as_ptr());
        gl::BindVertexArray(self.immediate.vao);
        gl::BindBuffer(gl::ARRAY_BUFFER, self.immediate.vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (data.len() * mem::size_of::<f32>()) as GLsizeiptr,
            data.as_ptr() as *const c_void,
            MeshHint::Stream.into(),
        );

        gl::DrawArrays(primitive.into(), 0, vertices.len() as GLsizei);
        gl::BindVertexArray(0);
        check()
    }

    unsafe fn draw_mesh(&mut self, shader: ShaderHandle, mesh: MeshHandle) -> Result<()> {
        let program = *self
            .shaders
            .get(&shader)
            .ok_or_else(|| Error::ShaderHandleInvalid(shader))?;

        let mesh = *self
            .meshes
            .get(&mesh)
            .ok_or_else(|| Error::MeshHandleInvalid(mesh))?;

        gl::UseProgram(program);
        gl::BindVertexArray(mesh.vao);
        gl::DrawArrays(mesh.primitive.into(), 0, mesh.len);
        gl::BindVertexArray(0);
        check()
    }

    unsafe fn compile(shader: GLenum, src: &str) -> Result<GLuint> {
        let shader = gl::CreateShader(shader);
        // Attempt to compile the shader
        let c_str = CString::new(src.as_bytes())?;
        gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        // Get the compile status
        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

        // Fail on error
        if status != GLint::from(gl::TRUE) {
            let mut len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; cmp_len(len)];
            gl::GetShaderInfoLog(
                shader,
                buf.len() as GLsizei,
                ptr::null_mut(),
                buf.as_mut_ptr() as *mut GLchar,
            );

            gl::DeleteShader(shader);
            Err(Error::ShaderCompile {
                log: info_log(&buf),
                source: src.to_owned(),
            }
            .into())
        } else {
            Ok(shader)
        }
    }

    unsafe fn link<'a, T>(shaders: T) -> Result<GLuint>
    where
        T: IntoIterator<Item = &'a GLuint>,
    {
        let program = gl::CreateProgram();
        let shaders: Vec<_> = shaders.into_iter().cloned().collect();
        for &shader in &shaders {
            gl::AttachShader(program, shader)
        }

        gl::LinkProgram(program);

        for &shader in &shaders {
            gl::DetachShader(program, shader)
        }

        // Get the link status
        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

        // Fail on error
        if status != GLint::from(gl::TRUE) {
            let mut len: GLint = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; cmp_len(len)];
            gl::GetProgramInfoLog(
                program,
                buf.len() as GLsizei,
                ptr::null_mut(),
                buf.as_mut_ptr() as *mut GLchar,
            );

            gl::DeleteProgram(program);
            Err(Error::ProgramLink(info_log(&buf)).into())
        } else {
            Ok(program)
        }
    }

    unsafe fn create_buffer(tp: GLenum, hint: MeshHint, data: &[f32]) -> Result<GLuint> {
        let mut id = 0;
        gl::GenBuffers(1, &mut id);
        if id == 0 {
            bail!("[GL] Failed to generate buffer object.");
        }

        gl::BindBuffer(tp, id);

        let value = if data.is_empty() {
            ptr::null()
        } else {
            data.as_ptr() as *const c_void
        };

        gl::BufferData(
            tp,
            (data.len() * mem::size_of::<f32>()) as GLsizeiptr,
            value,
            hint.into(),
        );

        check()?;
        Ok(id)
    }
}

impl Visitor for GLVisitor {
    unsafe fn create_shader(&mut self, handle: ShaderHandle, vs: &str, fs: &str) -> Result<()> {
        let vs = Self::stage(&mut self.stages, gl::VERTEX_SHADER, vs)?;
        let fs = Self::stage(&mut self.stages, gl::FRAGMENT_SHADER, fs)?;
        let id = Self::link(&[vs, fs])?;

        self.shaders.insert(handle, id);
        check()
    }

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()> {
        let id = self
            .shaders
            .remove(&handle)
            .ok_or_else(|| Error::ShaderHandleInvalid(handle))?;

        gl::DeleteProgram(id);
        check()
    }

    unsafe fn create_mesh(
        &mut self,
        handle: MeshHandle,
        params: MeshParams,
        data: &MeshData,
    ) -> Result<()> {
        let positions: Vec<f32> = data
            .positions
            .iter()
            .flat_map(|v| vec![v.x, v.y, v.z])
            .collect();

        let mut vao = 0;
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        let vbo = Self::create_buffer(gl::ARRAY_BUFFER, params.hint, &positions)?;
        gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, 0, ptr::null());
        gl::EnableVertexAttribArray(0);
        gl::BindVertexArray(0);
        check()?;

        self.meshes.insert(
            handle,
            GLMeshData {
                vao,
                vbo,
                primitive: params.primitive,
                len: data.len() as GLsizei,
            },
        );

        Ok(())
    }

    unsafe fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        let mesh = self
            .meshes
            .remove(&handle)
            .ok_or_else(|| Error::MeshHandleInvalid(handle))?;

        gl::DeleteVertexArrays(1, &mesh.vao);
        gl::DeleteBuffers(1, &mesh.vbo);
        check()
    }

    unsafe fn update_viewport(&mut self, dimensions: Vector2<u32>) -> Result<()> {
        self.state.dimensions = dimensions;
        gl::Viewport(0, 0, dimensions.x as GLint, dimensions.y as GLint);
        check()
    }

    unsafe fn execute(&mut self, cmd: &Command) -> Result<()> {
        match *cmd {
            Command::Clear(color) => {
                gl::ClearColor(color.r, color.g, color.b, color.a);
                gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
                check()
            }
            Command::ResetRenderState => self.reset_render_state(),
            Command::SetShading(shading) => {
                self.state.shading = shading;
                Ok(())
            }
            Command::SetPolygonMode(mode) => {
                gl::PolygonMode(gl::FRONT_AND_BACK, mode.into());
                check()
            }
            Command::SetCullFace(face) => self.set_cull_face(face),
            Command::SetPointSize(size) => self.set_point_size(size),
            Command::SetLineWidth(width) => self.set_line_width(width),
            Command::Draw(primitive, ref vertices) => self.draw(primitive, vertices),
            Command::DrawMesh(shader, mesh) => self.draw_mesh(shader, mesh),
        }
    }

    unsafe fn flush(&mut self) -> Result<()> {
        gl::Finish();
        check()
    }

    unsafe fn advance(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Drop for GLVisitor {
    fn drop(&mut self) {
        unsafe {
            for (_, mesh) in self.meshes.drain() {
                gl::DeleteVertexArrays(1, &mesh.vao);
                gl::DeleteBuffers(1, &mesh.vbo);
            }

            for (_, id) in self.shaders.drain() {
                gl::DeleteProgram(id);
            }

            gl::DeleteVertexArrays(1, &self.immediate.vao);
            gl::DeleteBuffers(1, &self.immediate.vbo);
            gl::DeleteProgram(self.immediate.smooth.id);
            gl::DeleteProgram(self.immediate.flat.id);

            for (_, id) in self.stages.drain() {
                gl::DeleteShader(id);
            }
        }
    }
}

fn clamp(v: f32, min: f32, max: f32) -> f32 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

#[inline]
fn cmp_len(len: GLint) -> usize {
    if len > 0 {
        len as usize
    } else {
        1
    }
}

/// Converts a null-terminated info log into a string.
fn info_log(buf: &[u8]) -> String {
    let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).trim_end().to_owned()
}

fn check_capabilities(caps: &Capabilities) -> Result<()> {
    if !(caps.version >= Version::GL(3, 3)) {
        return Err(Error::Requirement(format!(
            "OpenGL 3.3 core profile (found {:?})",
            caps.version
        ))
        .into());
    }

    Ok(())
}

unsafe fn check() -> Result<()> {
    let msg = match gl::GetError() {
        gl::NO_ERROR => return Ok(()),
        gl::INVALID_ENUM => "An unacceptable value is specified for an enumerated argument.",
        gl::INVALID_VALUE => "A numeric argument is out of range.",
        gl::INVALID_OPERATION => "The specified operation is not allowed in the current state.",
        gl::INVALID_FRAMEBUFFER_OPERATION => {
            "The command is trying to render to or read from the framebuffer while the \
             currently bound framebuffer is not framebuffer complete."
        }
        gl::OUT_OF_MEMORY => "There is not enough memory left to execute the command.",
        _ => "Oops, Unknown OpenGL error.",
    };

    Err(Error::GL(msg.to_owned()).into())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::prelude::{Point3, Transform};

    #[test]
    fn projection_keeps_origin_centered() {
        let mvp = projection(Vector2::new(800, 600));
        let p = mvp.transform_point(Point3::new(0.0, 0.0, 0.0));
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn projection_fits_figures() {
        // Figures span roughly [-2, 2] on both axes and must stay on screen.
        let mvp = projection(Vector2::new(800, 600));
        let p = mvp.transform_point(Point3::new(2.0, 2.0, 0.0));
        assert!(p.x > 0.0 && p.x < 1.0);
        assert!(p.y > 0.0 && p.y < 1.0);
    }

    #[test]
    fn info_log_stops_at_nul() {
        assert_eq!(info_log(b"0:1(1): error\n\0\0"), "0:1(1): error");
        assert_eq!(info_log(b""), "");
    }
}
