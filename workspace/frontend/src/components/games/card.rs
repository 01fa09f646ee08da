use arcade_common::{GameCategory, GameDescriptor, ProgressView};
use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub game: GameDescriptor,
    pub progress: ProgressView,
}

fn category_icon(category: GameCategory) -> &'static str {
    match category {
        GameCategory::Credit => "fas fa-credit-card",
        GameCategory::Money => "fas fa-dollar-sign",
        GameCategory::Banking => "fas fa-landmark",
        GameCategory::Investing => "fas fa-chart-line",
    }
}

#[function_component(GameCard)]
pub fn game_card(props: &Props) -> Html {
    let game = &props.game;
    let progress = &props.progress;

    html! {
        <div class="card bg-base-100 border border-base-300 shadow-sm">
            <div class="card-body p-5">
                <div class="flex items-center justify-between">
                    <h3 class="card-title text-lg">{game.title}</h3>
                    <span class="badge badge-outline">{game.badge}</span>
                </div>
                <p class="text-sm text-gray-500">{game.description}</p>

                <div class="flex items-center gap-4 text-sm text-gray-500 mt-2">
                    <span class="flex items-center gap-1">
                        <i class="fas fa-clock"></i>
                        {game.duration}
                    </span>
                    <span class="flex items-center gap-1">
                        <i class={category_icon(game.category)}></i>
                        {game.skill}
                    </span>
                </div>

                <div class="mt-4 space-y-2">
                    <div class="flex justify-between text-xs">
                        <span>{"Progress"}</span>
                        <span>{progress.label}</span>
                    </div>
                    <progress class="progress w-full" value={progress.value.to_string()} max="100"></progress>
                </div>

                <div class="card-actions mt-2">
                    <Link<Route> to={Route::from(game.route)} classes="btn btn-neutral w-full">
                        <i class="fas fa-gamepad mr-2"></i>
                        {"Play"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
