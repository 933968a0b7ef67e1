use std::cell::RefCell;
use std::rc::Rc;

use glam::{Mat4, Vec3};
use log::{info, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, HtmlElement, PointerEvent, WebGl2RenderingContext as GL,
    WebGlBuffer, WebGlProgram, WebGlUniformLocation, WebGlVertexArrayObject, Window,
};

use super::dom;
use super::gl::{as_bytes, compile_program, uniform, QuadMesh};
use super::shaders;
use crate::config::SceneConfig;
use crate::intro::{BackdropQuad, LiquidInstance};
use crate::scene::{FrameInput, Scene};
use crate::scroll::ScrollTracker;
use crate::wave::{WaveField, VERTEX_STRIDE};

const F32_SIZE: i32 = std::mem::size_of::<f32>() as i32;

/// All wave lines in one dynamic buffer, drawn as one line strip per line.
struct WavePass {
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    vbo: WebGlBuffer,
    vertices: Vec<f32>,
    line_count: i32,
    points_per_line: i32,
    u_model: WebGlUniformLocation,
    u_view: WebGlUniformLocation,
    u_proj: WebGlUniformLocation,
    u_fog_color: WebGlUniformLocation,
    u_fog_range: WebGlUniformLocation,
}

impl WavePass {
    fn new(gl: &GL, field: &WaveField) -> Result<Self, String> {
        let program = compile_program(gl, shaders::WAVE_VERTEX, shaders::WAVE_FRAGMENT)?;
        let vertices = vec![0.0; field.interleaved_len()];

        let vao = gl.create_vertex_array().ok_or("create vao")?;
        let vbo = gl.create_buffer().ok_or("create vbo")?;

        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vbo));
        gl.buffer_data_with_i32(
            GL::ARRAY_BUFFER,
            vertices.len() as i32 * F32_SIZE,
            GL::DYNAMIC_DRAW,
        );

        let stride = VERTEX_STRIDE as i32 * F32_SIZE;
        // a_pos: location 0
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, stride, 0);
        // a_color: location 1
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_with_i32(1, 3, GL::FLOAT, false, stride, 3 * F32_SIZE);

        gl.bind_vertex_array(None);
        gl.bind_buffer(GL::ARRAY_BUFFER, None);

        Ok(Self {
            u_model: uniform(gl, &program, "u_model")?,
            u_view: uniform(gl, &program, "u_view")?,
            u_proj: uniform(gl, &program, "u_proj")?,
            u_fog_color: uniform(gl, &program, "u_fog_color")?,
            u_fog_range: uniform(gl, &program, "u_fog_range")?,
            program,
            vao,
            vbo,
            vertices,
            line_count: field.config().line_count as i32,
            points_per_line: field.config().points_per_line as i32,
        })
    }

    fn draw(&mut self, gl: &GL, scene: &Scene) {
        let field = scene.field();
        if !field.is_visible() {
            return;
        }
        field.write_interleaved(&mut self.vertices);

        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.vbo));
        gl.buffer_sub_data_with_i32_and_u8_array(GL::ARRAY_BUFFER, 0, as_bytes(&self.vertices));
        gl.bind_buffer(GL::ARRAY_BUFFER, None);

        let camera = scene.camera();
        let fog = scene.fog();
        gl.use_program(Some(&self.program));
        let model = Mat4::from_rotation_x(field.config().tilt);
        gl.uniform_matrix4fv_with_f32_array(Some(&self.u_model), false, &model.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(Some(&self.u_view), false, &camera.view().to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.u_proj),
            false,
            &camera.projection().to_cols_array(),
        );
        gl.uniform3f(Some(&self.u_fog_color), fog.color.r, fog.color.g, fog.color.b);
        gl.uniform2f(Some(&self.u_fog_range), fog.near, fog.far);

        // Additive: brightness lives in the vertex color.
        gl.blend_func(GL::ONE, GL::ONE);
        gl.bind_vertex_array(Some(&self.vao));
        for line in 0..self.line_count {
            gl.draw_arrays(GL::LINE_STRIP, line * self.points_per_line, self.points_per_line);
        }
        gl.bind_vertex_array(None);
    }
}

struct BackdropPass {
    program: WebGlProgram,
    quad: QuadMesh,
    quads: Vec<BackdropQuad>,
    u_view_proj: WebGlUniformLocation,
    u_center: WebGlUniformLocation,
    u_size: WebGlUniformLocation,
    u_color: WebGlUniformLocation,
    u_opacity: WebGlUniformLocation,
    u_soft: WebGlUniformLocation,
}

impl BackdropPass {
    fn new(gl: &GL) -> Result<Self, String> {
        let program = compile_program(gl, shaders::BACKDROP_VERTEX, shaders::BACKDROP_FRAGMENT)?;
        Ok(Self {
            quad: QuadMesh::new(gl)?,
            quads: Vec::new(),
            u_view_proj: uniform(gl, &program, "u_view_proj")?,
            u_center: uniform(gl, &program, "u_center")?,
            u_size: uniform(gl, &program, "u_size")?,
            u_color: uniform(gl, &program, "u_color")?,
            u_opacity: uniform(gl, &program, "u_opacity")?,
            u_soft: uniform(gl, &program, "u_soft")?,
            program,
        })
    }

    fn draw(&mut self, gl: &GL, scene: &Scene) {
        let camera = scene.camera();
        scene.intro().backdrop.quads(camera.viewport(), &mut self.quads);
        if self.quads.is_empty() {
            return;
        }

        gl.use_program(Some(&self.program));
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.u_view_proj),
            false,
            &camera.view_projection().to_cols_array(),
        );
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        for q in &self.quads {
            gl.uniform3f(Some(&self.u_center), q.center.x, q.center.y, q.center.z);
            gl.uniform2f(Some(&self.u_size), q.size.x, q.size.y);
            gl.uniform3f(Some(&self.u_color), q.color.r, q.color.g, q.color.b);
            gl.uniform1f(Some(&self.u_opacity), q.opacity);
            gl.uniform1i(Some(&self.u_soft), q.soft as i32);
            self.quad.draw(gl);
        }
    }
}

struct LiquidPass {
    program: WebGlProgram,
    quad: QuadMesh,
    instances: Vec<LiquidInstance>,
    u_view_proj: WebGlUniformLocation,
    u_cam_right: WebGlUniformLocation,
    u_cam_up: WebGlUniformLocation,
    u_cam_position: WebGlUniformLocation,
    u_center: WebGlUniformLocation,
    u_extent: WebGlUniformLocation,
    u_orientation: WebGlUniformLocation,
    u_distort: WebGlUniformLocation,
    u_distort_speed: WebGlUniformLocation,
    u_time: WebGlUniformLocation,
    u_opacity: WebGlUniformLocation,
}

impl LiquidPass {
    fn new(gl: &GL, scene: &Scene) -> Result<Self, String> {
        let program = compile_program(gl, shaders::LIQUID_VERTEX, shaders::LIQUID_FRAGMENT)?;
        let liquids = &scene.intro().liquids;

        // Static uniforms: gradient and lights never change.
        gl.use_program(Some(&program));
        let stops = liquids.gradient().stops();
        let count = stops.len().min(shaders::MAX_GRADIENT_STOPS);
        let offsets: Vec<f32> = stops[..count].iter().map(|s| s.offset).collect();
        let colors: Vec<f32> = stops[..count]
            .iter()
            .flat_map(|s| s.color.to_array())
            .collect();
        gl.uniform1i(Some(&uniform(gl, &program, "u_stop_count")?), count as i32);
        gl.uniform1fv_with_f32_array(Some(&uniform(gl, &program, "u_stop_offsets")?), &offsets);
        gl.uniform3fv_with_f32_array(Some(&uniform(gl, &program, "u_stop_colors")?), &colors);

        let light = liquids.lighting();
        let spot = light.spot_position;
        gl.uniform1f(Some(&uniform(gl, &program, "u_ambient")?), light.ambient);
        gl.uniform3f(Some(&uniform(gl, &program, "u_spot_position")?), spot.x, spot.y, spot.z);
        gl.uniform1f(
            Some(&uniform(gl, &program, "u_spot_intensity")?),
            light.spot_intensity,
        );
        gl.use_program(None);

        Ok(Self {
            quad: QuadMesh::new(gl)?,
            instances: Vec::with_capacity(liquids.shapes().len()),
            u_view_proj: uniform(gl, &program, "u_view_proj")?,
            u_cam_right: uniform(gl, &program, "u_cam_right")?,
            u_cam_up: uniform(gl, &program, "u_cam_up")?,
            u_cam_position: uniform(gl, &program, "u_cam_position")?,
            u_center: uniform(gl, &program, "u_center")?,
            u_extent: uniform(gl, &program, "u_extent")?,
            u_orientation: uniform(gl, &program, "u_orientation")?,
            u_distort: uniform(gl, &program, "u_distort")?,
            u_distort_speed: uniform(gl, &program, "u_distort_speed")?,
            u_time: uniform(gl, &program, "u_time")?,
            u_opacity: uniform(gl, &program, "u_opacity")?,
            program,
        })
    }

    fn draw(&mut self, gl: &GL, scene: &Scene, time: f32) {
        scene.intro().liquids.instances(time, &mut self.instances);
        if self.instances.is_empty() {
            return;
        }

        let camera = scene.camera();
        let view = camera.view();
        let right = Vec3::new(view.x_axis.x, view.y_axis.x, view.z_axis.x);
        let up = Vec3::new(view.x_axis.y, view.y_axis.y, view.z_axis.y);
        let eye = camera.position();

        gl.use_program(Some(&self.program));
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.u_view_proj),
            false,
            &camera.view_projection().to_cols_array(),
        );
        gl.uniform3f(Some(&self.u_cam_right), right.x, right.y, right.z);
        gl.uniform3f(Some(&self.u_cam_up), up.x, up.y, up.z);
        gl.uniform3f(Some(&self.u_cam_position), eye.x, eye.y, eye.z);
        gl.uniform1f(Some(&self.u_time), time);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        for inst in &self.instances {
            let q = inst.orientation;
            gl.uniform3f(Some(&self.u_center), inst.center.x, inst.center.y, inst.center.z);
            gl.uniform1f(Some(&self.u_extent), inst.radius * (1.0 + inst.distort));
            gl.uniform4f(Some(&self.u_orientation), q.x, q.y, q.z, q.w);
            gl.uniform1f(Some(&self.u_distort), inst.distort);
            gl.uniform1f(Some(&self.u_distort_speed), inst.distort_speed);
            gl.uniform1f(Some(&self.u_opacity), inst.opacity);
            self.quad.draw(gl);
        }
    }
}

/// A pass that failed to build is dropped; the rest of the frame still draws.
fn optional<T>(name: &str, pass: Result<T, String>) -> Option<T> {
    match pass {
        Ok(pass) => Some(pass),
        Err(e) => {
            warn!("{name} pass disabled: {e}");
            None
        }
    }
}

struct Renderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    overlay: Option<HtmlElement>,
    scene: Scene,
    tracker: ScrollTracker,
    wave: Option<WavePass>,
    backdrop: Option<BackdropPass>,
    liquid: Option<LiquidPass>,
    start_ms: f64,
    last_ms: f64,
    css_height: f32,
    drag: Option<(f32, f32)>,
}

impl Renderer {
    fn new(
        gl: GL,
        canvas: HtmlCanvasElement,
        overlay: Option<HtmlElement>,
        scene: Scene,
        now_ms: f64,
    ) -> Self {
        let wave = optional("wave", WavePass::new(&gl, scene.field()));
        let backdrop = optional("backdrop", BackdropPass::new(&gl));
        let liquid = optional("liquid", LiquidPass::new(&gl, &scene));
        let tracker = ScrollTracker::new(scene.scroll_damping());
        Self {
            gl,
            canvas,
            overlay,
            scene,
            tracker,
            wave,
            backdrop,
            liquid,
            start_ms: now_ms,
            last_ms: now_ms,
            css_height: 1.0,
            drag: None,
        }
    }

    fn resize(&mut self, window: &Window) {
        let (w, h) = dom::fit_canvas(window, &self.canvas);
        self.css_height = h;
        self.scene.camera_mut().set_viewport_size(w, h);
    }

    fn frame(&mut self, window: &Window, now_ms: f64) {
        let dt = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_ms = now_ms;
        let time = ((now_ms - self.start_ms) / 1000.0) as f32;

        self.tracker.set_target(dom::page_scroll_progress(window));
        let scroll_progress = self.tracker.advance(dt);
        self.scene.update(FrameInput {
            time,
            scroll_progress,
        });

        if let Some(style) = self.scene.overlay_mut().take_changed() {
            if let Some(el) = &self.overlay {
                if let Err(e) = dom::apply_overlay_style(el, &style) {
                    warn!("overlay style: {e:?}");
                }
            }
        }

        self.draw(time);
    }

    fn draw(&mut self, time: f32) {
        let gl = &self.gl;
        let bg = self.scene.background();
        gl.viewport(0, 0, self.canvas.width() as i32, self.canvas.height() as i32);
        gl.clear_color(bg.r, bg.g, bg.b, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        // Everything is blended back to front; nothing writes depth.
        gl.disable(GL::DEPTH_TEST);
        gl.depth_mask(false);
        gl.enable(GL::BLEND);

        if let Some(pass) = &mut self.backdrop {
            pass.draw(gl, &self.scene);
        }
        if let Some(pass) = &mut self.liquid {
            pass.draw(gl, &self.scene, time);
        }
        if let Some(pass) = &mut self.wave {
            pass.draw(gl, &self.scene);
        }
    }

    fn pointer_down(&mut self, e: &PointerEvent) {
        self.drag = Some((e.client_x() as f32, e.client_y() as f32));
        if let Err(err) = self.canvas.set_pointer_capture(e.pointer_id()) {
            warn!("pointer capture: {err:?}");
        }
    }

    fn pointer_move(&mut self, e: &PointerEvent) {
        let Some((x0, y0)) = self.drag else {
            return;
        };
        let (x, y) = (e.client_x() as f32, e.client_y() as f32);
        self.scene
            .camera_mut()
            .orbit_drag(x - x0, y - y0, self.css_height);
        self.drag = Some((x, y));
    }

    fn pointer_up(&mut self) {
        self.drag = None;
    }
}

fn listen_pointer(
    target: &HtmlCanvasElement,
    event: &str,
    renderer: &Rc<RefCell<Renderer>>,
    handler: fn(&mut Renderer, &PointerEvent),
) -> Result<(), JsValue> {
    let renderer = renderer.clone();
    let closure = Closure::wrap(Box::new(move |e: PointerEvent| {
        handler(&mut renderer.borrow_mut(), &e);
    }) as Box<dyn FnMut(PointerEvent)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Build the scene, hook resize and orbit input, and start the frame loop.
pub fn start(canvas: HtmlCanvasElement, overlay: Option<HtmlElement>) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or("WebGL2 not supported")?
        .dyn_into()?;

    let scene = Scene::new(SceneConfig::default())
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("scene config: {e}"))))?;
    let renderer = Rc::new(RefCell::new(Renderer::new(
        gl,
        canvas.clone(),
        overlay,
        scene,
        dom::now_ms(&win),
    )));
    renderer.borrow_mut().resize(&win);

    // Resize canvas to fit window
    let resize_closure = {
        let renderer = renderer.clone();
        let win = win.clone();
        Closure::wrap(Box::new(move || {
            renderer.borrow_mut().resize(&win);
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Constrained orbit
    listen_pointer(&canvas, "pointerdown", &renderer, |r, e| r.pointer_down(e))?;
    listen_pointer(&canvas, "pointermove", &renderer, |r, e| r.pointer_move(e))?;
    listen_pointer(&canvas, "pointerup", &renderer, |r, _| r.pointer_up())?;
    listen_pointer(&canvas, "pointercancel", &renderer, |r, _| r.pointer_up())?;

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let loop_win = win.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        renderer.borrow_mut().frame(&loop_win, now_ms);

        // schedule next
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(e) = loop_win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                warn!("frame loop stopped: {e:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    info!("frame loop started");

    Ok(())
}
