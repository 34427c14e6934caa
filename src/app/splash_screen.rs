use std::time::Duration;

use leptos::{ev, prelude::*};

use crate::splash::{HideTicket, Splash};

use super::dom;

/// Shared handle for showing the splash overlay again from anywhere in the
/// tree. Provided as context by [`super::App`].
#[derive(Debug, Clone, Copy)]
pub struct SplashHandle {
    splash: RwSignal<Splash>,
}

impl SplashHandle {
    pub fn new() -> Self {
        Self {
            splash: RwSignal::new(Splash::default()),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.splash.with(Splash::is_visible)
    }

    /// Shows the overlay for `duration`; a newer call outlives older ones.
    pub fn show_for(self, duration: Duration) {
        if let Some(ticket) = self.splash.try_update(|s| s.show_for(duration)) {
            self.schedule_hide(ticket);
        }
    }

    fn on_page_load(self) {
        if let Some(ticket) = self.splash.try_update(Splash::page_loaded).flatten() {
            self.schedule_hide(ticket);
        }
    }

    fn schedule_hide(self, ticket: HideTicket) {
        let splash = self.splash;
        set_timeout(
            move || {
                splash.try_update(|s| s.expire(ticket));
            },
            ticket.after,
        );
    }

    /// Re-shows the splash and takes the page back to the top.
    pub fn replay(self, duration: Duration) {
        self.show_for(duration);
        dom::scroll_to_top();
    }
}

impl Default for SplashHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_splash() -> Option<SplashHandle> {
    use_context::<SplashHandle>()
}

#[component]
pub fn SplashScreen() -> impl IntoView {
    let handle = use_splash().unwrap_or_default();

    // count down from the window `load`, not from hydration
    Effect::watch(
        || (),
        move |_, _, _| {
            if dom::page_loaded() {
                handle.on_page_load();
            } else {
                let on_load = window_event_listener(ev::load, move |_| handle.on_page_load());
                on_cleanup(move || on_load.remove());
            }
        },
        true,
    );

    view! {
        <div
            class="fixed inset-0 z-[100] flex items-center justify-center bg-[#f5f4ef] transition-opacity duration-500"
            class=("opacity-0", move || !handle.is_visible())
            class=("pointer-events-none", move || !handle.is_visible())
            aria-hidden=move || (!handle.is_visible()).to_string()
        >
            <div class="flex flex-col items-center gap-4 splash-in">
                <img src="/assets/logo.svg" alt="" class="h-16 w-16" />
                <span class="font-serif text-3xl tracking-tight text-neutral-900">"Eryca"</span>
                <span class="h-[2px] w-24 overflow-hidden rounded-full bg-neutral-900/10">
                    <span class="block h-full w-1/2 bg-neutral-900 splash-bar" />
                </span>
            </div>
        </div>
    }
}
