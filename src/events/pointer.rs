use super::InputWiring;
use crate::dom::listen;
use crate::input;
use web_sys as web;

pub(super) fn wire_mouse(w: &InputWiring) {
    wire_mousedown(w);
    wire_mousemove(w);
    wire_mouseup(w);
    wire_wheel(w);
}

fn wire_mousedown(w: &InputWiring) {
    let viewer = w.viewer.clone();
    listen(&w.canvas, "mousedown", move |ev: web::MouseEvent| {
        let pos = input::mouse_client_px(&ev);
        viewer.borrow_mut().drag_start(pos.x, pos.y);
    });
}

fn wire_mousemove(w: &InputWiring) {
    let viewer = w.viewer.clone();
    listen(&w.canvas, "mousemove", move |ev: web::MouseEvent| {
        let pos = input::mouse_client_px(&ev);
        viewer.borrow_mut().drag_move(pos.x, pos.y);
    });
}

fn wire_mouseup(w: &InputWiring) {
    let viewer = w.viewer.clone();
    listen(&w.canvas, "mouseup", move |_ev: web::MouseEvent| {
        viewer.borrow_mut().drag_end();
    });
}

fn wire_wheel(w: &InputWiring) {
    let viewer = w.viewer.clone();
    let clock = w.clock;
    listen(&w.canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let target = viewer
            .borrow_mut()
            .wheel(ev.delta_y() as f32, clock.now());
        log::debug!("[zoom] wheel dy={:.1} -> target z={:.2}", ev.delta_y(), target);
    });
}

pub(super) fn wire_dblclick(w: &InputWiring) {
    let viewer = w.viewer.clone();
    listen(&w.canvas, "dblclick", move |_ev: web::MouseEvent| {
        viewer.borrow_mut().toggle_mode();
    });
}
