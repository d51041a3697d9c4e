use crate::constants::START_BUTTON_ID;
use web_sys as web;

#[inline]
pub fn hide_start_button(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_BUTTON_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_start_button_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(START_BUTTON_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}
