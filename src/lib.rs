#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod dock;
pub mod drawer;
pub mod pager;
pub mod splash;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (hot reload) is harmless, the first logger stays
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
