use super::InputWiring;
use crate::dom::listen;
use crate::input;
use web_sys as web;

// Touch drives drag only; there is no pinch zoom.
pub(super) fn wire_touch(w: &InputWiring) {
    let viewer = w.viewer.clone();
    listen(&w.canvas, "touchstart", move |ev: web::TouchEvent| {
        if let Some(pos) = input::primary_touch_px(&ev) {
            viewer.borrow_mut().drag_start(pos.x, pos.y);
        }
    });

    let viewer = w.viewer.clone();
    listen(&w.canvas, "touchmove", move |ev: web::TouchEvent| {
        if let Some(pos) = input::primary_touch_px(&ev) {
            viewer.borrow_mut().drag_move(pos.x, pos.y);
        }
    });

    let viewer = w.viewer.clone();
    listen(&w.canvas, "touchend", move |_ev: web::TouchEvent| {
        viewer.borrow_mut().drag_end();
    });
}
