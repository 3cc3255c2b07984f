use log::info;
use yew::prelude::*;

mod config;
mod dom;
mod styles;
mod interaction {
    pub mod anchor;
    pub mod debounce;
    pub mod email;
    pub mod feedback;
    pub mod mobile_menu;
    pub mod navbar;
    pub mod reveal;
    pub mod ripple;
    pub mod selection;
    pub mod timed;
    pub mod timer;
}
mod components {
    pub mod button;
    pub mod card;
    pub mod cta;
    pub mod dashboard_preview;
    pub mod nav_link;
    pub mod navbar;
    pub mod pricing;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use components::navbar::Navbar;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        |_| {
            info!("Linear-inspired site initialized");
            || ()
        },
        (),
    );

    html! {
        <>
            <style>{ styles::SITE_CSS }</style>
            <Navbar />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
