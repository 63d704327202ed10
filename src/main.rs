use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod lead {
    pub mod error;
    pub mod submission;
    pub mod validate;
    pub mod webhook;
    pub mod download;
    pub mod notice;
    pub mod flow;
}
mod components {
    pub mod animation;
    pub mod button;
    pub mod header;
    pub mod lead_form;
    pub mod sticky_footer;
    pub mod testimonials;
    pub mod toast;
    pub mod video;
}
mod pages {
    pub mod home;
    pub mod franchise_guide;
    pub mod not_found;
}

use components::{
    animation::REVEAL_STYLES,
    button::BUTTON_STYLES,
    toast::Toaster,
    video::VIDEO_STYLES,
};
use config::LeadConfig;
use pages::{franchise_guide::FranchiseGuide, home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/franchise-guide")]
    FranchiseGuide,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::FranchiseGuide => {
            info!("Rendering Franchise Guide page");
            html! { <FranchiseGuide /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<LeadConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<LeadConfig>> context={props.config.clone()}>
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #1f2937;
                    }
                "#}
                {BUTTON_STYLES}
                {VIDEO_STYLES}
                {REVEAL_STYLES}
            </style>
            <Toaster>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </Toaster>
        </ContextProvider<Rc<LeadConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let config = LeadConfig::from_env();
    console_log::init_with_level(config.log_level()).expect("error initializing log");

    if !config.has_webhook() {
        warn!("LEAD_WEBHOOK_URL is not set, lead submissions will fail");
    }
    if !config.has_admin_email() {
        warn!("LEAD_ADMIN_EMAIL is not set, leads will be sent with an empty adminEmail");
    }
    if !config.verify_response {
        warn!("Webhook responses are not verified, delivery failures will go unnoticed");
    }

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::FranchiseGuide.to_path(), "/franchise-guide");
        assert_eq!(Route::recognize("/franchise-guide"), Some(Route::FranchiseGuide));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }
}
