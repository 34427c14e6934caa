mod carousel;
mod dom;
mod footer;
mod homepage;
mod music_dock;
mod navbar;
mod resume;
mod splash_screen;

use footer::Footer;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use music_dock::MusicDock;
use navbar::Navbar;
use splash_screen::{SplashHandle, SplashScreen};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/porto-eryca.css" />
                <MetaTags />
            </head>
            <body class="bg-[#f5f4ef] text-neutral-900 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SplashHandle::new());

    view! {
        <Title formatter=|title| format!("Eryca - {title}") />
        <Meta name="description" content="Portfolio of Eryca, UI/UX designer and illustrator." />

        <Router>
            <SplashScreen />
            <Navbar />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <MusicDock />
        </Router>
    }
}
