use log::info;
use yew::prelude::*;

mod clipboard;
mod config;
mod content;
mod controller;
mod error;
mod relay;
mod scroll_listener;
mod state;
mod pages {
    pub mod landing;
}
mod components {
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod sections;
}

use pages::landing::LandingPage;

#[function_component]
fn App() -> Html {
    html! { <LandingPage /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting ClinicalOps landing page");
    yew::Renderer::<App>::new().render();
}
