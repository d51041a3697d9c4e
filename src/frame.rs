use crate::core::{SceneComposer, Viewer};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic time since page start, shared by input handlers and the frame loop.
#[derive(Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneComposer>>,
    pub viewer: Rc<RefCell<Viewer>>,
    pub started: Rc<RefCell<bool>>,
    pub canvas: web::HtmlCanvasElement,
    pub clock: Clock,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    /// One display refresh: zoom easing always runs; the scene only advances
    /// and draws after the start action.
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let w = self.canvas.width();
        let h = self.canvas.height();
        {
            let mut viewer = self.viewer.borrow_mut();
            viewer.update(now);
            viewer.set_aspect(w, h);
        }

        if !*self.started.borrow() {
            return;
        }
        let mut scene = self.scene.borrow_mut();
        if !scene.is_running() {
            return;
        }
        scene.advance_frame();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            let viewer = self.viewer.borrow();
            if let Err(e) = g.render(&mut scene, &viewer.camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<SceneComposer>>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let sphere = scene.borrow().sphere.clone();
    match render::GpuState::new(leaked_canvas, &sphere).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
