use std::rc::Rc;

use ::common::DashboardCatalog;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod common;
pub mod settings;

use crate::common::error::ErrorDisplay;
use crate::common::toast::ToastProvider;
use components::chat::ChatPage;
use components::feed::FeedPage;
use components::layout::Layout;
use components::report::ReportPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Feed,
    #[at("/chats/:id")]
    Chat { id: String },
    #[at("/reports/:id")]
    Report { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Feed => {
            log::trace!("Rendering Feed page");
            html! { <Layout><FeedPage /></Layout> }
        }
        Route::Chat { id } => {
            log::trace!("Rendering Chat page for item {}", id);
            html! { <Layout><ChatPage {id} /></Layout> }
        }
        Route::Report { id } => {
            log::trace!("Rendering Report page for item {}", id);
            html! { <Layout><ReportPage {id} /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout><h1 class="text-2xl font-bold p-6">{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_memo((), |_| {
        DashboardCatalog::builtin().and_then(|catalog| {
            catalog.validate()?;
            Ok(Rc::new(catalog))
        })
    });

    match &*catalog {
        Ok(catalog) => html! {
            <ContextProvider<Rc<DashboardCatalog>> context={catalog.clone()}>
                <ToastProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </ToastProvider>
            </ContextProvider<Rc<DashboardCatalog>>>
        },
        Err(err) => {
            log::error!("Failed to load dashboard catalog: {}", err);
            html! { <ErrorDisplay message={err.to_string()} /> }
        }
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== InsightFeed Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
