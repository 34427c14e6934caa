use leptos::{either::Either, ev, prelude::*};

use crate::pager::{Pager, Step, SwipeTracker, PAGE_SWIPE_PX};

use super::dom;

const PAGE_COUNT: usize = 2;

const EXPERIENCES: [(&str, &str); 4] = [
    ("Freelance Art Commissions", "2019 — present"),
    (
        "UI/UX Intern, Tarumanagara Enterprise",
        "May 2025 — Aug 2025 · 4 months",
    ),
    ("Mini Projects", "2024 — 2025"),
    ("Junior Member, Public Relations (DPM FTI)", "2025"),
];
const DESIGN_SKILLS: [&str; 5] = ["Figma", "Photoshop", "Illustrator", "Premiere Pro", "After Effects"];
const CODE_SKILLS: [&str; 6] = ["HTML", "CSS", "JavaScript", "React", "Next.js", "Python"];

const NAV_BUTTON: &str = "inline-flex items-center justify-center rounded-full border border-neutral-300 bg-white px-3 py-2 text-neutral-800 hover:bg-neutral-50 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400/70";

/// Two-page CV card. Arrow keys anywhere on the page flip it, as does a
/// horizontal drag across the card.
#[component]
pub fn ResumePager() -> impl IntoView {
    let pager = RwSignal::new(Pager::new(PAGE_COUNT));
    let swipe = StoredValue::new(SwipeTracker::default());

    let step = move |step: Step| pager.update(|p| p.step(step));

    dom::on_window(ev::keydown, move |ev: ev::KeyboardEvent| {
        if let Some(s) = Step::from_key(&ev.key()) {
            step(s);
        }
    });

    let on_pointer_down = move |ev: ev::PointerEvent| {
        swipe.update_value(|t| t.begin(ev.client_x().into()));
    };
    let on_pointer_up = move |ev: ev::PointerEvent| {
        let x = f64::from(ev.client_x());
        if let Some(s) = swipe.try_update_value(|t| t.finish(x, PAGE_SWIPE_PX)).flatten() {
            step(s);
        }
    };
    let cancel_swipe = move |_| swipe.update_value(SwipeTracker::cancel);

    view! {
        <div class="relative">
            <div class="mb-1 relative -top-2 flex items-center justify-between">
                <span class="flex items-center gap-2 text-[11px] font-semibold tracking-widest text-neutral-500 uppercase">
                    <span class="inline-block h-[6px] w-[6px] rounded-full bg-neutral-900" />
                    {move || format!("Page {} / {}", pager.with(Pager::index) + 1, PAGE_COUNT)}
                </span>
                <div class="flex items-center gap-2">
                    <button
                        on:click=move |_| step(Step::Prev)
                        class=NAV_BUTTON
                        aria-label="Previous page"
                    >
                        <i class="extra-chevron-left h-4 w-4" />
                    </button>
                    <button on:click=move |_| step(Step::Next) class=NAV_BUTTON aria-label="Next page">
                        <i class="extra-chevron-right h-4 w-4" />
                    </button>
                </div>
            </div>
            <div class="mb-2 flex gap-1.5">
                {(0..PAGE_COUNT)
                    .map(|i| {
                        view! {
                            <button
                                on:click=move |_| pager.update(|p| p.go_to(i))
                                class="h-1.5 rounded-full transition-all"
                                class=("w-6", move || pager.with(|p| p.is_current(i)))
                                class=("bg-neutral-900", move || pager.with(|p| p.is_current(i)))
                                class=("w-3", move || !pager.with(|p| p.is_current(i)))
                                class=("bg-neutral-300", move || !pager.with(|p| p.is_current(i)))
                                aria-label=format!("Go to page {}", i + 1)
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="touch-pan-y select-none"
                on:pointerdown=on_pointer_down
                on:pointerup=on_pointer_up
                on:pointercancel=cancel_swipe
                on:pointerleave=cancel_swipe
            >
                {move || {
                    let (index, direction) = pager.with(|p| (p.index(), p.direction()));
                    let style = format!("--slide-from: {}px;", direction.enter_offset());
                    let page = if index == 0 {
                        Either::Left(view! { <ProfilePage /> })
                    } else {
                        Either::Right(view! { <ExperiencePage /> })
                    };
                    view! {
                        <div class="slide-in" style=style>
                            {page}
                        </div>
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ProfilePage() -> impl IntoView {
    view! {
        <div class="space-y-7 rounded-[20px] bg-white/70 p-6 md:p-7 shadow-[0_12px_32px_rgba(0,0,0,0.06)] ring-1 ring-black/5 backdrop-blur min-h-[320px]">
            <section>
                <h3 class="text-xl md:text-2xl font-semibold text-neutral-900">"Eryca"</h3>
                <div class="mt-2 grid gap-1.5 text-sm md:text-[15px] sm:grid-cols-2">
                    <span>"Jakarta, Indonesia"</span>
                    <a href="mailto:eryca847@gmail.com" class="underline">
                        "eryca847@gmail.com"
                    </a>
                </div>
                <span class="mt-4 block h-[2px] rounded-full bg-neutral-900/80" />
            </section>
            <ResumeList
                title="Education"
                items=vec![
                    ("B.Sc. in Informatics Engineering, Universitas Tarumanagara", "2023 — present"),
                    ("SMA BPK PENABUR Cianjur", "2020 — 2023"),
                ]
            />
            <ResumeList
                title="Language"
                items=vec![("Indonesian", "Native"), ("English", "Professional working")]
            />
        </div>
    }
}

#[component]
fn ExperiencePage() -> impl IntoView {
    let chips = |skills: &'static [&'static str], color: &'static str| {
        skills
            .iter()
            .map(|skill| {
                view! {
                    <span class=format!(
                        "rounded-[10px] {color} px-3 py-1 text-xs md:text-sm font-semibold text-white shadow-sm",
                    )>{*skill}</span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="space-y-7 rounded-[20px] bg-white/70 p-6 md:p-7 shadow-[0_12px_32px_rgba(0,0,0,0.06)] ring-1 ring-black/5 backdrop-blur min-h-[320px]">
            <ResumeList title="Experience" items=EXPERIENCES.to_vec() />
            <section>
                <h4 class="mb-2 text-[10px] font-semibold uppercase tracking-[0.22em] text-neutral-500">
                    "Skills"
                </h4>
                <div class="grid gap-4 sm:grid-cols-2">
                    <div>
                        <p class="text-xs font-bold mb-1">"🎨 Design"</p>
                        <div class="flex flex-wrap gap-2">{chips(&DESIGN_SKILLS, "bg-[#713103]")}</div>
                    </div>
                    <div>
                        <p class="text-xs font-bold mb-1">"💻 Programming"</p>
                        <div class="flex flex-wrap gap-2">{chips(&CODE_SKILLS, "bg-[#432c1c]")}</div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ResumeList(title: &'static str, items: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <section>
            <h4 class="mb-2 text-[10px] font-semibold uppercase tracking-[0.22em] text-neutral-500">
                {title}
            </h4>
            <ul class="space-y-2">
                {items
                    .into_iter()
                    .map(|(what, when)| {
                        view! {
                            <li class="relative pl-5 text-sm md:text-[15px]">
                                <span class="absolute left-0 top-2 h-[6px] w-[6px] rounded-full bg-neutral-900" />
                                <span class="font-medium">{what}</span>
                                " · "
                                <span class="text-neutral-600">{when}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
