use leptos::prelude::*;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

const LINK_GROUPS: [(&str, &[(&str, &str)]); 2] = [
    ("Explore", &[("Work", "#work"), ("Illustrations", "#illustrations")]),
    ("Studio", &[("About", "#about"), ("Services", "#services")]),
];

#[component]
pub fn Footer() -> impl IntoView {
    let groups = LINK_GROUPS
        .iter()
        .map(|(heading, links)| {
            view! {
                <div>
                    <h4 class="mb-3 text-[11px] font-semibold uppercase tracking-[0.22em] text-neutral-500">
                        {*heading}
                    </h4>
                    <ul class="space-y-2 text-sm">
                        {links
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <li>
                                        <a href=*href class="text-neutral-700 hover:text-neutral-950">
                                            {*label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <footer id="footer" class="mt-16 border-t border-black/5 bg-[#f5f4ef]">
            <div class="mx-auto grid max-w-6xl gap-10 px-6 py-12 md:grid-cols-4">
                <div class="md:col-span-2">
                    <p class="font-serif text-2xl text-neutral-950">"Eryca"</p>
                    <p class="mt-2 max-w-sm text-sm text-neutral-600">
                        "Open for freelance design, front-end and illustration work."
                    </p>
                    <a
                        href="mailto:eryca847@gmail.com"
                        class="mt-4 inline-flex items-center gap-2 text-sm font-medium text-neutral-900 underline"
                    >
                        <i class="extra-email h-4 w-4" />
                        "eryca847@gmail.com"
                    </a>
                </div>
                {groups}
            </div>
            <div class="mx-auto flex max-w-6xl items-center justify-between px-6 pb-8 text-xs text-neutral-500">
                <span>{format!("©{BUILD_YEAR} Eryca. All rights reserved.")}</span>
                <a href="#home" class="hover:text-neutral-900" aria-label="Back to top">
                    "Back to top ↑"
                </a>
            </div>
        </footer>
    }
}
