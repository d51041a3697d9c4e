mod pointer;
mod touch;

use crate::core::Viewer;
use crate::frame::Clock;
use crate::input::{self, InputSource};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub viewer: Rc<RefCell<Viewer>>,
    pub clock: Clock,
}

/// Install drag listeners for the detected input family plus the
/// double-click mode toggle. Wheel zoom exists only on the mouse path.
pub fn wire_input_handlers(window: &web::Window, w: InputWiring) {
    let source = input::detect_input_source(window);
    log::info!("[input] using {:?} input", source);
    match source {
        InputSource::Mouse => pointer::wire_mouse(&w),
        InputSource::Touch => touch::wire_touch(&w),
    }
    pointer::wire_dblclick(&w);
}
