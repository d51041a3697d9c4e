#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, LEAF_SPRITE_PATH, PHOTO_PATH, START_BUTTON_ID};
use crate::core::{SceneComposer, SceneParams, Viewer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

type SharedFrame = Rc<RefCell<frame::FrameContext<'static>>>;

/// Start action: begin drawing, spawn the cube burst once, hide the button.
fn wire_start_button(
    document: &web::Document,
    started: &Rc<RefCell<bool>>,
    scene: &Rc<RefCell<SceneComposer>>,
) {
    let started = started.clone();
    let scene = scene.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        if !*started.borrow() {
            *started.borrow_mut() = true;
            scene.borrow_mut().start_burst();
            log::info!("[scene] started");
        }
        if let Some(d) = dom::window_document() {
            if !overlay::is_start_button_hidden(&d) {
                overlay::hide_start_button(&d);
            }
        }
    });
}

/// Fire-and-forget texture loads; each completes at most once.
fn spawn_texture_loads(frame_ctx: &SharedFrame) {
    let ctx = frame_ctx.clone();
    spawn_local(async move {
        match assets::load_image(PHOTO_PATH).await {
            Ok(img) => {
                let mut guard = ctx.borrow_mut();
                let ctx = &mut *guard;
                if let Some(g) = ctx.gpu.as_mut() {
                    g.upload_texture(render::TextureSlot::Photo, &img);
                    ctx.scene.borrow_mut().attach_image_panel();
                }
            }
            Err(e) => log::warn!("[assets] {}", e),
        }
    });

    let ctx = frame_ctx.clone();
    spawn_local(async move {
        match assets::load_image(LEAF_SPRITE_PATH).await {
            Ok(img) => {
                if let Some(g) = ctx.borrow_mut().gpu.as_mut() {
                    g.upload_texture(render::TextureSlot::LeafSprite, &img);
                }
            }
            Err(e) => log::warn!("[assets] {} (leaf sprites stay untextured)", e),
        }
    });
}

/// Freeze the scene on `pagehide`; thaw it when the page is restored from
/// the back/forward cache.
fn wire_page_lifecycle(
    window: &web::Window,
    scene: &Rc<RefCell<SceneComposer>>,
    viewer: &Rc<RefCell<Viewer>>,
) {
    let hide_scene = scene.clone();
    let hide_viewer = viewer.clone();
    dom::listen(window, "pagehide", move |ev: web::PageTransitionEvent| {
        hide_scene.borrow_mut().stop();
        hide_viewer.borrow_mut().zoom.cancel();
        log::info!("[scene] stopped (persisted={})", ev.persisted());
    });

    let show_scene = scene.clone();
    dom::listen(window, "pageshow", move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            show_scene.borrow_mut().resume();
            log::info!("[scene] resumed");
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("midori-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let scene = Rc::new(RefCell::new(SceneComposer::build(
        SceneParams::default(),
        StdRng::from_entropy(),
    )));
    let viewer = Rc::new(RefCell::new(Viewer::default()));
    viewer
        .borrow_mut()
        .set_aspect(canvas.width(), canvas.height());
    let clock = frame::Clock::start();

    // Controls are live before the start action
    events::wire_input_handlers(
        &window,
        events::InputWiring {
            canvas: canvas.clone(),
            viewer: viewer.clone(),
            clock,
        },
    );

    // Clicks during adapter/device setup still count
    let started = Rc::new(RefCell::new(false));
    wire_start_button(&document, &started, &scene);
    wire_page_lifecycle(&window, &scene, &viewer);

    let gpu = frame::init_gpu(&canvas, &scene).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        viewer,
        started,
        canvas,
        clock,
        gpu,
    }));

    spawn_texture_loads(&frame_ctx);
    frame::start_loop(frame_ctx);
    Ok(())
}
