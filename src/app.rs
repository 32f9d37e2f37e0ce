//! Root application component: session wiring, navigation shell, routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session controller for the lifetime of the shell. It bridges
//! the controller's store into a read-only signal, provides both through
//! context, probes the session once on mount (browser only) and invalidates
//! in-flight work on cleanup.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::{error_banner::ErrorBanner, footer::Footer, nav_bar::NavBar};
use crate::config::ConsoleConfig;
use crate::net::http::BrowserGateway;
use crate::pages::{
    help::HelpPage,
    home::HomePage,
    not_found::NotFoundPage,
    tokens::TokensPage,
    uploads::{FilesPage, UploadPage, UploadsPage},
    users::{UserPage, UsersPage},
};
use crate::routes::{RouteMatch, RouteTable, ViewKind};
use crate::session::{BrowserNavigator, SessionController};

/// Session controller shared through context.
pub type ConsoleController = Arc<SessionController<BrowserGateway, BrowserNavigator>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controller: ConsoleController = Arc::new(SessionController::new(
        BrowserGateway,
        BrowserNavigator,
        ConsoleConfig::from_build_env(),
    ));

    let session = RwSignal::new(controller.store().snapshot());
    let subscription = controller.store().subscribe(move |snapshot| {
        // The signal is gone once the shell is disposed.
        let _ = session.try_set(snapshot.clone());
    });

    provide_context(session.read_only());
    provide_context(Arc::clone(&controller));

    let generation = controller.mount();
    log::debug!("console shell mounted (generation {})", generation.value());

    #[cfg(feature = "hydrate")]
    {
        let probe = Arc::clone(&controller);
        leptos::task::spawn_local(async move {
            // Cleanup may run before this task is first polled.
            if !probe.lifecycle().is_current(generation) {
                return;
            }
            let outcome = probe.probe().await;
            log::debug!("session probe: {outcome:?}");
        });
    }

    let teardown = Arc::clone(&controller);
    on_cleanup(move || {
        teardown.teardown();
        drop(subscription);
    });

    let site_title = controller.config().site_title.clone();

    view! {
        <Stylesheet id="leptos" href="/pkg/symbols-console.css"/>
        <Title text=site_title/>

        <Router>
            <NavBar/>
            <section class="section">
                <div class="container">
                    <ErrorBanner/>
                    <RouteOutlet/>
                </div>
            </section>
            <Footer/>
        </Router>
    }
}

/// Renders the first route in [`RouteTable::console`] matching the location.
#[component]
fn RouteOutlet() -> impl IntoView {
    let pathname = use_location().pathname;
    let table = RouteTable::console();

    move || match table.resolve(&pathname.get()) {
        Some(matched) => render_route(matched),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

fn render_route(matched: RouteMatch) -> AnyView {
    let id = matched.params.get("id").unwrap_or_default().to_owned();
    match matched.view {
        ViewKind::Home => view! { <HomePage/> }.into_any(),
        ViewKind::Help => view! { <HelpPage/> }.into_any(),
        ViewKind::Tokens => view! { <TokensPage/> }.into_any(),
        ViewKind::Files => view! { <FilesPage/> }.into_any(),
        ViewKind::Upload => view! { <UploadPage id=id/> }.into_any(),
        ViewKind::Uploads => view! { <UploadsPage/> }.into_any(),
        ViewKind::User => view! { <UserPage id=id/> }.into_any(),
        ViewKind::Users => view! { <UsersPage/> }.into_any(),
    }
}
