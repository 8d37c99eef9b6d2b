#![recursion_limit = "512"]

mod components;
mod config;
mod error;
mod models;
mod routes;
mod services;

use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

pub use config::DirectoryConfig;
pub use error::FetchError;
pub use models::user::{User, UserId};
use routes::{switch, Route};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <div class="min-h-screen bg-gray-50">
                    <Switch<Route> render={Switch::render(switch)} />
                </div>
            </BrowserRouter>
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::debug!("starting user directory");
    yew::start_app::<App>();
}
