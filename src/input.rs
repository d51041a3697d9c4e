use crate::constants::MOBILE_UA_MARKERS;
use glam::Vec2;
use web_sys as web;

/// Which family of DOM events drives dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
}

/// Case-insensitive match against the mobile user-agent markers.
#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m))
}

#[inline]
pub fn input_source_for(user_agent: &str) -> InputSource {
    if is_mobile_user_agent(user_agent) {
        InputSource::Touch
    } else {
        InputSource::Mouse
    }
}

pub fn detect_input_source(window: &web::Window) -> InputSource {
    let ua = window.navigator().user_agent().unwrap_or_default();
    input_source_for(&ua)
}

// ---------------- Event coordinate helpers ----------------
#[inline]
pub fn mouse_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// First active touch point, if any.
#[inline]
pub fn primary_touch_px(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}
