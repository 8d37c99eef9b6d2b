use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::user_directory::UserDirectory;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Users,

    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: &Route) -> Html {
    match route {
        Route::Users => html! { <UserDirectory /> },
        Route::NotFound => html! {
            <main class="container mx-auto py-8">
                <h1 class="text-4xl font-bold text-gray-900">{ "404" }</h1>
                <Link<Route> to={Route::Users} classes="text-blue-600 hover:underline">
                    { "Back to users" }
                </Link<Route>>
            </main>
        },
    }
}
