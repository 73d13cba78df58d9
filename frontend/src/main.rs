use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components;
mod demo;
mod utils;
mod pages {
    pub mod dashboard;
    pub mod demo;
    pub mod home;
}

use components::footer::{CallToAction, Footer};
use components::navbar::Navbar;
use components::testimonial::Testimonials;
use pages::{dashboard::Dashboard, demo::Demo, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(Site)]
fn site() -> Html {
    html! {
        <div class="app-container">
            <Navbar />
            <Home />
            <Demo />
            <Dashboard />
            <Testimonials />
            <CallToAction />
            <Footer />
        </div>
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h2>{"Page not found"}</h2>
            <Link<Route> to={Route::Home} classes="btn-primary">
                {"Back to KidSafe"}
            </Link<Route>>
        </section>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Site /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting KidSafe site");
    yew::Renderer::<App>::new().render();
}
