use fps_core::Settings;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Overlay follows pointer lock: visible whenever the player is not captured.
#[inline]
pub fn sync_with_lock(document: &web::Document, locked: bool) {
    if locked {
        hide(document);
    } else {
        show(document);
    }
}

pub fn settings_hint_text(settings: &Settings) -> String {
    format!(
        "FOV: {:.0}° • Sensitivity: {:.1} • Volume: {:.0}%",
        settings.fov,
        settings.mouse_sensitivity,
        settings.master_volume * 100.0
    )
}

/// Update the hint overlay with the current settings
pub fn update_hint(document: &web::Document, settings: &Settings) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>{}</div>",
            settings_hint_text(settings)
        );
        el.set_inner_html(&hint_html);
    }
}
