use std::time::Duration;

use leptos::{either::Either, ev, html, prelude::*};

use crate::dock::{
    store::{self, BrowserStorage},
    DockEffect, DockEvent, FloatingDock, Layout, Point, PointerTarget, PLAYER_EMBED_URL,
};

use super::dom;

const NO_SELECT_CLASS: &str = "select-none";

#[derive(Default)]
struct Handles {
    pointer: Vec<WindowListenerHandle>,
    resize: Option<WindowListenerHandle>,
    long_press: Option<TimeoutHandle>,
}

/// Connects a [`FloatingDock`] to the page: turns DOM events into
/// [`DockEvent`]s and carries out the returned effects.
#[derive(Clone, Copy)]
struct DockDriver {
    dock: RwSignal<FloatingDock>,
    wrap_ref: NodeRef<html::Div>,
    handles: StoredValue<Handles, LocalStorage>,
}

impl DockDriver {
    fn new() -> Self {
        Self {
            dock: RwSignal::new(FloatingDock::default()),
            wrap_ref: NodeRef::new(),
            handles: StoredValue::new_local(Handles::default()),
        }
    }

    fn layout(self) -> Option<Layout> {
        let viewport = dom::viewport_size()?;
        let measured = self
            .wrap_ref
            .get_untracked()
            .and_then(|el| dom::element_size(&el));
        Some(Layout::new(viewport, measured))
    }

    fn dispatch(self, event: DockEvent) {
        let effects = self
            .dock
            .try_update(|dock| dock.handle(event))
            .unwrap_or_default();
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(self, effect: DockEffect) {
        match effect {
            DockEffect::StartLongPress { session, delay } => {
                let fire = move || {
                    // fired timers must not be cleared later
                    self.handles.update_value(|h| h.long_press = None);
                    self.dispatch(DockEvent::LongPress { session });
                };
                match set_timeout_with_handle(fire, delay) {
                    Ok(handle) => self.handles.update_value(|h| h.long_press = Some(handle)),
                    Err(e) => log::warn!("couldn't start long-press timer: {e:?}"),
                }
            }
            DockEffect::CancelLongPress => {
                if let Some(handle) = self
                    .handles
                    .try_update_value(|h| h.long_press.take())
                    .flatten()
                {
                    handle.clear();
                }
            }
            DockEffect::AttachPointerListeners => {
                let on_move = window_event_listener(ev::pointermove, move |ev| {
                    if let Some(layout) = self.layout() {
                        self.dispatch(DockEvent::PointerMove {
                            pointer_id: ev.pointer_id(),
                            at: Point::new(ev.client_x().into(), ev.client_y().into()),
                            layout,
                        });
                    }
                });
                let on_up = window_event_listener(ev::pointerup, move |ev| {
                    self.dispatch(DockEvent::PointerUp {
                        pointer_id: ev.pointer_id(),
                    });
                });
                let on_cancel = window_event_listener(ev::pointercancel, move |ev| {
                    self.dispatch(DockEvent::PointerCancel {
                        pointer_id: ev.pointer_id(),
                    });
                });
                self.handles
                    .update_value(|h| h.pointer.extend([on_move, on_up, on_cancel]));
            }
            DockEffect::DetachPointerListeners => self.detach_pointer_listeners(),
            DockEffect::CapturePointer(pointer_id) => {
                if let Some(el) = self.wrap_ref.get_untracked() {
                    if let Err(e) = el.set_pointer_capture(pointer_id) {
                        log::debug!("pointer capture refused: {e:?}");
                    }
                }
            }
            DockEffect::ReleasePointer(pointer_id) => {
                if let Some(el) = self.wrap_ref.get_untracked() {
                    // already lost when the pointer was cancelled
                    let _ = el.release_pointer_capture(pointer_id);
                }
            }
            DockEffect::LockTextSelection => dom::set_body_class(NO_SELECT_CLASS, true),
            DockEffect::UnlockTextSelection => dom::set_body_class(NO_SELECT_CLASS, false),
            DockEffect::Persist(pos) => {
                if let Err(e) = store::save_position(&BrowserStorage, pos) {
                    log::warn!("dock position not saved: {e}");
                }
            }
            DockEffect::SettleDrop => set_timeout(
                move || self.dispatch(DockEvent::DropSettled),
                Duration::ZERO,
            ),
            DockEffect::RequestLayout => request_animation_frame(move || {
                if let Some(layout) = self.layout() {
                    self.dispatch(DockEvent::Layout(layout));
                }
            }),
        }
    }

    fn detach_pointer_listeners(self) {
        let listeners = self
            .handles
            .try_update_value(|h| std::mem::take(&mut h.pointer))
            .unwrap_or_default();
        for listener in listeners {
            listener.remove();
        }
    }

    fn mount(self) {
        let viewport = match dom::viewport_size() {
            Some(viewport) => viewport,
            None => return,
        };
        let stored = store::load_position(&BrowserStorage);
        self.dispatch(DockEvent::Mount { stored, viewport });

        let on_resize = window_event_listener(ev::resize, move |_| {
            if let Some(layout) = self.layout() {
                self.dispatch(DockEvent::Resize(layout));
            }
        });
        self.handles.update_value(|h| h.resize = Some(on_resize));
    }

    fn unmount(self) {
        self.detach_pointer_listeners();
        let (resize, timer) = self
            .handles
            .try_update_value(|h| (h.resize.take(), h.long_press.take()))
            .unwrap_or_default();
        if let Some(resize) = resize {
            resize.remove();
        }
        if let Some(timer) = timer {
            timer.clear();
        }
        if self
            .dock
            .try_with_untracked(FloatingDock::is_dragging)
            .unwrap_or(false)
        {
            dom::set_body_class(NO_SELECT_CLASS, false);
        }
    }

    fn on_pointer_down(self, ev: ev::PointerEvent) {
        let target = if dom::is_no_drag_target(&ev) {
            PointerTarget::Control
        } else {
            PointerTarget::Body
        };
        self.dispatch(DockEvent::PointerDown {
            pointer_id: ev.pointer_id(),
            at: Point::new(ev.client_x().into(), ev.client_y().into()),
            target,
        });
    }
}

/// Floating "Playing Spotify" pill that opens into a draggable, resizable
/// player card.
#[component]
pub fn MusicDock() -> impl IntoView {
    let driver = DockDriver::new();
    let dock = driver.dock;

    Effect::watch(
        || (),
        move |_, _, _| {
            driver.mount();
            on_cleanup(move || driver.unmount());
        },
        true,
    );

    let wrap_style = move || {
        dock.with(|d| {
            let width = if d.is_open() {
                format!("{}px", d.card_width())
            } else {
                "auto".to_string()
            };
            match d.position() {
                Some(p) => format!(
                    "left: {}px; top: {}px; width: {width}; touch-action: none;",
                    p.x, p.y
                ),
                // measurable but invisible until placed
                None => format!("left: 0; top: 0; width: {width}; visibility: hidden;"),
            }
        })
    };
    let wrap_class = move || {
        if dock.with(FloatingDock::is_open) {
            "floating-dock fixed z-[56] cursor-grab active:cursor-grabbing"
        } else {
            "floating-dock fixed z-[56] cursor-move"
        }
    };

    view! {
        <div
            node_ref=driver.wrap_ref
            class=wrap_class
            style=wrap_style
            on:pointerdown=move |ev| driver.on_pointer_down(ev)
        >
            {move || {
                if dock.with(FloatingDock::is_open) {
                    Either::Right(view! { <DockCard driver /> })
                } else {
                    Either::Left(view! { <DockPill driver /> })
                }
            }}
        </div>
    }
}

#[component]
fn DockPill(driver: DockDriver) -> impl IntoView {
    view! {
        <button
            on:click=move |_| driver.dispatch(DockEvent::Toggle)
            class="group relative inline-flex items-center justify-center gap-2 rounded-full border px-3 py-1.5 text-xs font-medium border-[color:var(--border)] bg-[var(--background)]/90 text-[var(--foreground)] shadow-lg backdrop-blur hover:opacity-90 focus:outline-none focus-visible:ring-2 focus-visible:ring-black/60 select-none"
            aria-label="Open Spotify player"
        >
            <i class="extra-music h-4 w-4" />
            "Playing Spotify"
            <span
                class="pointer-events-none absolute top-full left-1/2 -translate-x-1/2 mt-1 whitespace-nowrap rounded-[50px] bg-black/5 px-2 py-1 text-[11px] text-[#494949] opacity-0 transition-opacity duration-200 group-hover:opacity-100 group-focus-visible:opacity-100"
                role="tooltip"
                aria-hidden="true"
            >
                "Tap to play music"
            </span>
        </button>
    }
}

#[component]
fn DockCard(driver: DockDriver) -> impl IntoView {
    let dock = driver.dock;
    let content_style = move || {
        let (w, h) = dock.with(FloatingDock::content_size);
        format!("width: {w}px; height: {h}px;")
    };
    let player_style = move || {
        dock.with(|d| {
            let config = d.config();
            format!(
                "width: {}px; height: {}px; transform: scale({}); transform-origin: top left; will-change: transform;",
                config.base_width,
                config.base_height,
                d.scale()
            )
        })
    };
    let (base_w, base_h) = dock.with_untracked(|d| (d.config().base_width, d.config().base_height));

    view! {
        <div
            class="rounded-2xl border border-[color:var(--border)] bg-[var(--background)]/90 text-[var(--foreground)] shadow-xl backdrop-blur p-2 overflow-visible select-none"
            style=move || format!("width: {}px;", dock.with(FloatingDock::card_width))
        >
            <div class="relative mb-2 flex items-center justify-between gap-3 px-1 group">
                <span class="text-xs font-medium opacity-70">"Playing Spotify"</span>
                <span
                    class="pointer-events-none absolute bottom-full left-1/2 -translate-x-1/2 z-50 whitespace-nowrap rounded-[50px] bg-black/5 px-2 py-1 text-[11px] text-[#494949] opacity-0 transition-opacity duration-200 group-hover:opacity-100 group-focus-within:opacity-100"
                    role="tooltip"
                >
                    "Hi! Enjoy my playlist 🎵"
                </span>
                <input
                    data-no-drag=""
                    type="range"
                    min=move || dock.with(FloatingDock::min_scale).to_string()
                    max=move || dock.with(FloatingDock::max_scale).to_string()
                    step="0.01"
                    prop:value=move || dock.with(FloatingDock::scale).to_string()
                    on:input=move |ev| {
                        // a non-numeric value is dropped, range clamping happens in the dock
                        if let Ok(scale) = event_target_value(&ev).parse::<f64>() {
                            driver.dispatch(DockEvent::SetScale(scale));
                        }
                    }
                    class="w-24 accent-current"
                    aria-label="Resize player"
                />
                <button
                    data-no-drag=""
                    on:click=move |_| driver.dispatch(DockEvent::Toggle)
                    class="rounded-full p-1 hover:bg-black/5 focus:outline-none focus-visible:ring-2 focus-visible:ring-black/20"
                    aria-label="Close Spotify dock"
                >
                    <i class="extra-close h-4 w-4" />
                </button>
            </div>
            <div class="relative overflow-hidden rounded-xl" style=content_style>
                <div style=player_style>
                    <iframe
                        src=PLAYER_EMBED_URL
                        width=base_w.to_string()
                        height=base_h.to_string()
                        allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"
                        {..leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        style="display: block; border: 0;"
                    ></iframe>
                </div>
            </div>
        </div>
    }
}
