use arcade_common::GameDescriptor;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub game: GameDescriptor,
}

/// Play page for games that are not available in the browser yet
#[function_component(ComingSoon)]
pub fn coming_soon(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow max-w-xl mx-auto">
            <div class="card-body items-center text-center">
                <i class="fas fa-gamepad text-4xl mb-4 opacity-50"></i>
                <h2 class="card-title">{props.game.title}</h2>
                <p class="text-gray-500">{props.game.description}</p>
                <p class="text-sm mt-2">{"This game is coming soon."}</p>
                <div class="card-actions mt-4">
                    <Link<Route> to={Route::Games} classes="btn btn-outline">
                        <i class="fas fa-arrow-left mr-2"></i>
                        {"Back to games"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
