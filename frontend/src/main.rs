use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod i18n;
mod preferences;
mod scroll;
mod typewriter;
mod content {
    pub mod icons;
    pub mod services;
}
mod contact {
    pub mod form;
    pub mod relay;
}
mod components {
    pub mod logo;
    pub mod nav;
    pub mod recaptcha;
    pub mod typewriter_text;
}
mod pages {
    pub mod contact;
    pub mod landing;
    pub mod services;
}

use components::nav::Nav;
use pages::landing::Landing;
use preferences::LanguageProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <LanguageProvider>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </LanguageProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
