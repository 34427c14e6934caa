use leptos::{ev, prelude::*};
use leptos_use::use_media_query;

use crate::drawer::{Drawer, MOBILE_QUERY};
use crate::splash::{logo_splash, DRAWER_SPLASH};

use super::dom;
use super::splash_screen::use_splash;

const LEFT_LINKS: [(&str, &str); 3] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Contact", "#footer"),
];
const RIGHT_LINKS: [(&str, &str); 3] = [
    ("Work", "#work"),
    ("Illustrations", "#illustrations"),
    ("Services", "#services"),
];

const LINK_CLASS: &str = "rounded-full px-3 py-1.5 text-sm text-neutral-700 transition-colors hover:bg-black/5 hover:text-neutral-900 focus:outline-none focus-visible:ring-2 focus-visible:ring-black/20";

fn nav_links() -> impl Iterator<Item = (&'static str, &'static str)> {
    LEFT_LINKS.into_iter().chain(RIGHT_LINKS)
}

/// Smooth in-page navigation for `#anchor` links.
fn anchor_click(href: &'static str) -> impl Fn(ev::MouseEvent) + Clone + 'static {
    move |ev: ev::MouseEvent| {
        if dom::scroll_to_anchor(href) {
            ev.prevent_default();
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let drawer = RwSignal::new(Drawer::default());
    let is_mobile = use_media_query(MOBILE_QUERY.to_string());

    Effect::new(move |_| {
        let mobile = is_mobile.get();
        drawer.update(|d| d.set_mobile(mobile));
    });

    let splash = use_splash();
    let replay_splash = move |_| {
        if let Some(splash) = splash {
            splash.replay(logo_splash(is_mobile.get_untracked()));
        }
    };

    let links = |items: [(&'static str, &'static str); 3]| {
        items
            .into_iter()
            .map(|(label, href)| {
                view! {
                    <a href=href class=LINK_CLASS on:click=anchor_click(href)>
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header id="home" class="sticky top-0 z-50 h-[72px] bg-[#f5f4ef]/85 backdrop-blur">
            <nav class="mx-auto flex h-full max-w-7xl items-center justify-between px-5">
                <div class="hidden sm:flex items-center gap-1">{links(LEFT_LINKS)}</div>
                <button
                    on:click=replay_splash
                    class="flex items-center gap-2 font-serif text-2xl tracking-tight text-neutral-900"
                    aria-label="Replay intro"
                >
                    <img src="/assets/logo.svg" alt="" class="h-8 w-8" />
                    "Eryca"
                </button>
                <div class="hidden sm:flex items-center gap-1">{links(RIGHT_LINKS)}</div>
                <button
                    on:click=move |_| drawer.update(Drawer::open)
                    class="rounded-full p-2 hover:bg-black/5 focus:outline-none focus-visible:ring-2 focus-visible:ring-black/20"
                    aria-label="Open menu"
                >
                    <i class="extra-menu h-5 w-5" />
                </button>
            </nav>
        </header>
        <NavDrawer drawer />
    }
}

#[component]
fn NavDrawer(drawer: RwSignal<Drawer>) -> impl IntoView {
    let touch_start = StoredValue::new(None::<f64>);

    dom::on_window(ev::keydown, move |ev: ev::KeyboardEvent| {
        drawer.try_update(|d| d.on_key(&ev.key()));
    });

    Effect::new(move |_| {
        let locked = drawer.with(Drawer::locks_scroll);
        dom::set_body_class("overflow-hidden", locked);
        on_cleanup(|| dom::set_body_class("overflow-hidden", false));
    });

    let close = move |_| drawer.update(Drawer::close);
    let splash = use_splash();
    let replay_splash = move |_| {
        drawer.update(Drawer::close);
        if let Some(splash) = splash {
            splash.replay(DRAWER_SPLASH);
        }
    };

    let first_touch_x =
        |touches: web_sys::TouchList| touches.get(0).map(|t| f64::from(t.client_x()));
    let on_touch_start = move |ev: ev::TouchEvent| {
        touch_start.set_value(first_touch_x(ev.touches()));
    };
    let on_touch_end = move |ev: ev::TouchEvent| {
        let start = touch_start.try_update_value(Option::take).flatten();
        if let (Some(start), Some(end)) = (start, first_touch_x(ev.changed_touches())) {
            drawer.update(|d| d.on_drag_end(end - start));
        }
    };

    let items = nav_links()
        .map(|(label, href)| {
            view! {
                <li>
                    <a
                        href=href
                        class="flex items-center gap-4 rounded-xl px-4 py-3 text-neutral-800 hover:bg-black/5"
                        title=label
                        on:click=move |ev: ev::MouseEvent| {
                            if dom::scroll_to_anchor(href) {
                                ev.prevent_default();
                            }
                            drawer.update(Drawer::on_anchor);
                        }
                    >
                        <span class="inline-block h-[6px] w-[6px] shrink-0 rounded-full bg-neutral-900" />
                        <span
                            class="text-base font-medium"
                            class=("sr-only", move || !drawer.with(Drawer::shows_panel))
                        >
                            {label}
                        </span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div
            class="fixed inset-0 z-[60] bg-black/30 backdrop-blur-sm transition-opacity duration-300"
            class=("opacity-0", move || !drawer.with(Drawer::is_open))
            class=("pointer-events-none", move || !drawer.with(Drawer::is_open))
            on:click=close
            aria-hidden="true"
        />
        <aside
            class="fixed inset-y-0 right-0 z-[61] flex flex-col bg-[#f5f4ef] shadow-2xl transition-[transform,width] duration-300 ease-out"
            class=("translate-x-full", move || !drawer.with(Drawer::is_open))
            style=move || format!("width: {};", drawer.with(|d| d.width().css()))
            role="dialog"
            aria-modal="true"
            aria-label="Navigation"
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
        >
            <div class="flex h-[72px] items-center justify-between px-4">
                <button
                    on:click=replay_splash
                    class="flex items-center gap-2 font-serif text-xl text-neutral-900"
                    aria-label="Replay intro"
                >
                    <img src="/assets/logo.svg" alt="" class="h-8 w-8" />
                    <span class=("sr-only", move || !drawer.with(Drawer::shows_panel))>"Eryca"</span>
                </button>
                <Show when=move || drawer.with(Drawer::shows_rail)>
                    <button
                        on:click=move |_| drawer.update(Drawer::toggle_expanded)
                        class="rounded-full p-2 hover:bg-black/5"
                        aria-label=move || {
                            if drawer.with(Drawer::is_expanded) { "Collapse menu" } else { "Expand menu" }
                        }
                    >
                        <i class="extra-chevron-left h-4 w-4" class=("rotate-180", move || drawer.with(Drawer::is_expanded)) />
                    </button>
                </Show>
                <button on:click=close class="rounded-full p-2 hover:bg-black/5" aria-label="Close menu">
                    <i class="extra-close h-5 w-5" />
                </button>
            </div>
            <ul class="flex-1 space-y-1 overflow-y-auto px-2 py-4">{items}</ul>
            <Show when=move || drawer.with(Drawer::shows_panel)>
                <p class="px-6 py-6 text-xs text-neutral-500">"eryca847@gmail.com"</p>
            </Show>
        </aside>
    }
}
