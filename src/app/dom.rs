//! Browser lookups that may fail outside a fully loaded page. Everything here
//! degrades to `None`/no-op instead of panicking.

use leptos::{ev::EventDescriptor, prelude::*};
use wasm_bindgen::{JsCast, JsValue};

use crate::dock::{Size, NO_DRAG_SELECTOR};
use crate::drawer::anchor_scroll_top;

pub fn viewport_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width, height))
}

/// `document.readyState` is `complete`.
pub fn page_loaded() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .is_some_and(|d| d.ready_state() == "complete")
}

/// Rendered box of `el`; an empty rect counts as not measurable yet.
pub fn element_size(el: &web_sys::Element) -> Option<Size> {
    let rect = el.get_bounding_client_rect();
    if rect.width() > 0.0 && rect.height() > 0.0 {
        Some(Size::new(rect.width(), rect.height()))
    } else {
        None
    }
}

/// Whether the event started on a control that handles its own pointer input.
pub fn is_no_drag_target(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(NO_DRAG_SELECTOR).ok().flatten())
        .is_some()
}

pub fn set_body_class(class: &str, on: bool) {
    let body = match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        Some(body) => body,
        None => return,
    };
    let list = body.class_list();
    let res = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = res {
        log::debug!("couldn't toggle body class {class}: {e:?}");
    }
}

fn smooth_scroll(top: f64) {
    if let Some(window) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn scroll_to_top() {
    smooth_scroll(0.0);
}

/// Smooth-scrolls to an in-page `#anchor` below the navbar and puts the hash
/// in the URL. Returns `false` for anything that isn't a local anchor.
pub fn scroll_to_anchor(href: &str) -> bool {
    let id = match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => id,
        _ => return false,
    };
    let window = match web_sys::window() {
        Some(w) => w,
        None => return false,
    };
    let el = match window.document().and_then(|d| d.get_element_by_id(id)) {
        Some(el) => el,
        None => return true,
    };
    let scroll_y = window.scroll_y().unwrap_or_default();
    smooth_scroll(anchor_scroll_top(el.get_bounding_client_rect().top(), scroll_y));
    if let Ok(history) = window.history() {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(href)) {
            log::debug!("couldn't update location hash: {e:?}");
        }
    }
    true
}

/// Window listener tied to the calling component. Attached once the component
/// is live in the browser and removed when it is disposed.
pub fn on_window<E, F>(event: E, cb: F)
where
    E: EventDescriptor + Clone + 'static,
    E::EventType: JsCast,
    F: Fn(E::EventType) + Clone + 'static,
{
    Effect::watch(
        || (),
        move |_, _, _| {
            let handle = window_event_listener(event.clone(), cb.clone());
            on_cleanup(move || handle.remove());
        },
        true,
    );
}
