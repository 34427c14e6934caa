use leptos::{ev, html, prelude::*};
use leptos_use::use_event_listener;

use crate::pager::{Pager, Step, SwipeTracker, SLIDE_SWIPE_PX};

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub src: &'static str,
    pub alt: &'static str,
}

impl Slide {
    pub const fn new(src: &'static str, alt: &'static str) -> Self {
        Self { src, alt }
    }
}

/// Image slider with prev/next buttons, dots, arrow keys while focused and
/// touch swipes. Renders nothing for an empty list.
#[component]
pub fn ImageCarousel(slides: Vec<Slide>, #[prop(into)] title: String) -> impl IntoView {
    if slides.is_empty() {
        return None;
    }
    let len = slides.len();
    let slides = StoredValue::new(slides);
    let pager = RwSignal::new(Pager::new(len));
    let swipe = StoredValue::new(SwipeTracker::default());
    let box_ref = NodeRef::<html::Div>::new();

    let step = move |step: Step| pager.update(|p| p.step(step));

    let _ = use_event_listener(box_ref, ev::keydown, move |ev| {
        if let Some(s) = Step::from_key(&ev.key()) {
            ev.prevent_default();
            step(s);
        }
    });

    let on_touch_start = move |ev: ev::TouchEvent| match ev.touches().get(0) {
        Some(touch) => swipe.update_value(|t| t.begin(touch.client_x().into())),
        None => swipe.update_value(SwipeTracker::cancel),
    };
    let on_touch_end = move |ev: ev::TouchEvent| {
        let x = match ev.changed_touches().get(0) {
            Some(touch) => f64::from(touch.client_x()),
            None => return swipe.update_value(SwipeTracker::cancel),
        };
        if let Some(s) = swipe.try_update_value(|t| t.finish(x, SLIDE_SWIPE_PX)).flatten() {
            step(s);
        }
    };

    let current = move || {
        let (index, direction) = pager.with(|p| (p.index(), p.direction()));
        let slide = slides.with_value(|s| s.get(index).cloned());
        slide.map(|slide| {
            view! {
                <img
                    src=slide.src
                    alt=slide.alt
                    class="slide-in h-full w-full object-cover"
                    style=format!("--slide-from: {}px;", direction.enter_offset())
                    draggable="false"
                />
            }
        })
    };

    let dots = (0..len)
        .map(|i| {
            view! {
                <button
                    on:click=move |_| pager.update(|p| p.go_to(i))
                    class="h-2 rounded-full bg-white transition-all"
                    class=("w-6", move || pager.with(|p| p.is_current(i)))
                    class=("w-2", move || !pager.with(|p| p.is_current(i)))
                    class=("opacity-50", move || !pager.with(|p| p.is_current(i)))
                    aria-label=format!("Go to slide {}", i + 1)
                    aria-current=move || pager.with(|p| p.is_current(i)).to_string()
                />
            }
        })
        .collect_view();

    Some(view! {
        <div
            node_ref=box_ref
            tabindex="0"
            role="region"
            aria-roledescription="carousel"
            aria-label=title
            class="group relative aspect-[4/3] w-full overflow-hidden rounded-2xl bg-neutral-200 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400/70"
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
        >
            {current}
            <button
                on:click=move |_| step(Step::Prev)
                class="absolute left-3 top-1/2 -translate-y-1/2 rounded-full bg-white/80 p-2 shadow opacity-0 transition-opacity group-hover:opacity-100 group-focus-within:opacity-100"
                aria-label="Previous slide"
            >
                <i class="extra-chevron-left h-4 w-4" />
            </button>
            <button
                on:click=move |_| step(Step::Next)
                class="absolute right-3 top-1/2 -translate-y-1/2 rounded-full bg-white/80 p-2 shadow opacity-0 transition-opacity group-hover:opacity-100 group-focus-within:opacity-100"
                aria-label="Next slide"
            >
                <i class="extra-chevron-right h-4 w-4" />
            </button>
            <div class="absolute bottom-3 left-1/2 flex -translate-x-1/2 gap-2">{dots}</div>
        </div>
    })
}
