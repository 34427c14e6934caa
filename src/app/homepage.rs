use leptos::prelude::*;
use leptos_meta::Title;

use crate::pager::Pager;

use super::carousel::{ImageCarousel, Slide};
use super::resume::ResumePager;

struct CaseStudy {
    title: &'static str,
    blurb: &'static str,
    image: &'static str,
    tag: &'static str,
}

static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        title: "Parable Floristry",
        blurb: "Boutique floristry brand site with crisp UX and motion.",
        image: "/assets/w2.jpg",
        tag: "Brand & Web",
    },
    CaseStudy {
        title: "Tarumanagara Enterprise",
        blurb: "Vision-led site with clean information flow.",
        image: "/assets/u00.jpg",
        tag: "UX Strategy",
    },
    CaseStudy {
        title: "Eryca Portfolio",
        blurb: "Fast, clear, and crafted personal portfolio.",
        image: "/assets/w11.jpg",
        tag: "Design & Front-End",
    },
];

const SERVICES: [(&str, &str); 3] = [
    ("UI/UX Design", "Research, wireframes and polished interfaces in Figma."),
    ("Front-End Build", "Responsive, accessible sites that load fast."),
    ("Illustration", "Character and editorial art, commissioned or licensed."),
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
    avatar: &'static str,
}

static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "If you ask me what I came to do in this world… I am here to live out loud.",
        name: "Émile Zola",
        role: "French Novelist & Critic",
        avatar: "/assets/zola.png",
    },
    Testimonial {
        quote: "Every portrait that is painted with feeling is a portrait of the artist, not of the sitter.",
        name: "Oscar Wilde",
        role: "The Picture of Dorian Gray",
        avatar: "/assets/wilde.jpg",
    },
    Testimonial {
        quote: "Learn to light a candle in the darkest moments of someone’s life. Be the light that helps others see it is what gives life its deepest significance.",
        name: "Roy T. Bennett",
        role: "Author of The Light in the Heart.",
        avatar: "/assets/bennett.jpg",
    },
    Testimonial {
        quote: "What you do makes a difference, and you have to decide what kind of difference you want to make.",
        name: "Jane Goodall",
        role: "The world’s leading chimpanzee researcher.",
        avatar: "/assets/goodall.jpeg",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Designer & Front-End Developer" />
        <Hero />
        <About />
        <CaseStudies />
        <Illustrations />
        <Services />
        <Testimonials />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative isolate">
            <img
                src="/assets/bg1.svg"
                alt=""
                class="absolute inset-0 -z-10 w-full object-cover h-[50vh] sm:h-[60vh] md:h-[72vh] lg:h-[80vh]"
            />
            <div class="relative mx-auto flex min-h-[50vh] sm:min-h-[60vh] md:min-h-[72vh] lg:min-h-[80vh] max-w-7xl flex-col items-center justify-center px-5 text-center">
                <h1 class="mt-2 font-serif leading-tight tracking-tight text-5xl">"Eryca"</h1>
                <p class="mx-auto mt-4 max-w-2xl text-black/60 text-lg">
                    "UI/UX designer, front-end developer and illustrator based in Jakarta."
                </p>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="relative z-0 py-16 md:py-20">
            <div class="mx-auto max-w-6xl px-6">
                <div class="mb-8 md:mb-10 text-center">
                    <span class="inline-flex items-center gap-2 rounded-full border border-amber-200 bg-amber-50 px-3 py-1 text-[11px] font-medium tracking-[0.16em] text-amber-700">
                        "ABOUT"
                        <span class="h-[6px] w-[6px] rounded-full bg-amber-600" />
                    </span>
                    <h2 class="mt-2 text-2xl md:text-4xl font-serif leading-tight text-neutral-950">
                        "Designer & Front-End Developer crafting friendly, clear interfaces."
                    </h2>
                    <p class="mt-2 text-sm md:text-2xl text-neutral-600/80 max-w-[60ch] mx-auto">
                        "Turning ideas into usable, delightful experiences with clarity, motion, and accessibility."
                    </p>
                </div>
                <div class="grid items-start gap-8 md:gap-12 md:grid-cols-12">
                    <div class="col-span-12 md:col-span-5 space-y-4">
                        <img
                            src="/assets/eryca.jpg"
                            alt="Portrait of Eryca"
                            class="aspect-[4/5] w-full rounded-[20px] object-cover"
                        />
                        <p class="text-neutral-700">
                            "Hi! I'm Eryca. I design and build interfaces, and draw whenever I get the chance."
                        </p>
                    </div>
                    <div class="col-span-12 md:col-span-7">
                        <ResumePager />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mb-10 text-center">
            <h2 class="font-serif text-3xl md:text-4xl text-neutral-950">{title}</h2>
            <p class="mx-auto mt-3 max-w-2xl text-neutral-600">{subtitle}</p>
        </div>
    }
}

#[component]
fn CaseStudies() -> impl IntoView {
    view! {
        <section id="work" class="py-16">
            <div class="mx-auto max-w-6xl px-6">
                <SectionHeading
                    title="Selected Works & Case Studies"
                    subtitle="Highlights from personal and client work, each covering goals, process and impact."
                />
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    {CASE_STUDIES
                        .iter()
                        .map(|study| {
                            view! {
                                <article class="group overflow-hidden rounded-2xl bg-white/85 ring-1 ring-black/5 shadow-[0_10px_28px_rgba(0,0,0,0.06)]">
                                    <img
                                        src=study.image
                                        alt=study.title
                                        class="aspect-[4/3] w-full object-cover transition-transform duration-500 group-hover:scale-105"
                                        loading="lazy"
                                    />
                                    <div class="p-5">
                                        <span class="text-[11px] font-semibold uppercase tracking-[0.22em] text-neutral-500">
                                            {study.tag}
                                        </span>
                                        <h3 class="mt-1 text-lg font-semibold text-neutral-900">
                                            {study.title}
                                        </h3>
                                        <p class="mt-1 text-sm text-neutral-600">{study.blurb}</p>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Illustrations() -> impl IntoView {
    let slides = vec![
        Slide::new("/assets/ill1.jpg", "Character study in warm tones"),
        Slide::new("/assets/ill2.jpg", "Editorial illustration of a flower market"),
        Slide::new("/assets/ill3.jpg", "Digital painting of a rainy street"),
        Slide::new("/assets/ill4.jpg", "Sketchbook page with portrait studies"),
    ];
    view! {
        <section id="illustrations" class="py-16">
            <div class="mx-auto max-w-4xl px-6">
                <SectionHeading
                    title="Illustrations"
                    subtitle="A few pieces from commissions and personal sketchbooks."
                />
                <ImageCarousel slides title="Illustrations" />
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section id="services" class="py-16">
            <div class="mx-auto max-w-6xl px-6">
                <SectionHeading title="Services" subtitle="Ways we can work together." />
                <ul class="grid gap-6 md:grid-cols-3">
                    {SERVICES
                        .iter()
                        .map(|(name, about)| {
                            view! {
                                <li class="rounded-2xl bg-white/85 p-6 ring-1 ring-black/5">
                                    <h3 class="text-lg font-semibold text-neutral-900">{*name}</h3>
                                    <p class="mt-2 text-sm text-neutral-600">{*about}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

/// Quote picker: hovering, focusing or clicking an avatar selects its quote.
#[component]
fn Testimonials() -> impl IntoView {
    let pager = RwSignal::new(Pager::new(TESTIMONIALS.len()));
    let select = move |i: usize| pager.update(|p| p.go_to(i));

    let active = move || TESTIMONIALS.get(pager.with(Pager::index));

    view! {
        <section class="py-16">
            <div class="mx-auto max-w-4xl px-6 text-center">
                <i class="extra-quote mx-auto h-8 w-8 text-neutral-400" />
                <blockquote class="mt-6 min-h-[6rem] font-serif text-2xl md:text-3xl leading-snug text-neutral-900">
                    {move || active().map(|t| t.quote)}
                </blockquote>
                <p class="mt-4 text-sm text-neutral-600">
                    <span class="font-semibold text-neutral-900">{move || active().map(|t| t.name)}</span>
                    " · "
                    {move || active().map(|t| t.role)}
                </p>
                <div class="mt-8 flex justify-center gap-4">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            view! {
                                <button
                                    on:mouseenter=move |_| select(i)
                                    on:focus=move |_| select(i)
                                    on:click=move |_| select(i)
                                    class="rounded-full ring-offset-2 transition-all"
                                    class=("ring-2", move || pager.with(|p| p.is_current(i)))
                                    class=("ring-neutral-900", move || pager.with(|p| p.is_current(i)))
                                    class=("opacity-60", move || !pager.with(|p| p.is_current(i)))
                                    aria-label=t.name
                                    aria-pressed=move || pager.with(|p| p.is_current(i)).to_string()
                                >
                                    <img src=t.avatar alt="" class="h-14 w-14 rounded-full object-cover" />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
