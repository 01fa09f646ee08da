use arcade_common::{find_game, GameRoute};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod auth;
pub mod common;
pub mod hooks;
pub mod settings;
pub mod store;

use auth::AuthProvider;
use components::games::GamesPage;
use components::layout::layout::Layout;
use components::placeholder::ComingSoon;
use components::stockmarket::StockMarketPage;
use store::PriceStoreProvider;

#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard/games")]
    Games,
    #[at("/dashboard/games/credit-score")]
    CreditScore,
    #[at("/dashboard/games/tax-rush")]
    TaxRush,
    #[at("/dashboard/games/flip-card")]
    FlipCard,
    #[at("/dashboard/games/bank-vault-dash")]
    BankVaultDash,
    #[at("/dashboard/games/stockmarket/app")]
    StockMarket,
    #[at("/dashboard/games/banking-basics")]
    BankingBasics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<GameRoute> for Route {
    fn from(route: GameRoute) -> Self {
        match route {
            GameRoute::CreditScore => Route::CreditScore,
            GameRoute::TaxRush => Route::TaxRush,
            GameRoute::FlipCard => Route::FlipCard,
            GameRoute::BankVaultDash => Route::BankVaultDash,
            GameRoute::StockMarket => Route::StockMarket,
            GameRoute::BankingBasics => Route::BankingBasics,
        }
    }
}

impl Route {
    fn game(self) -> Option<GameRoute> {
        match self {
            Route::CreditScore => Some(GameRoute::CreditScore),
            Route::TaxRush => Some(GameRoute::TaxRush),
            Route::FlipCard => Some(GameRoute::FlipCard),
            Route::BankVaultDash => Some(GameRoute::BankVaultDash),
            Route::StockMarket => Some(GameRoute::StockMarket),
            Route::BankingBasics => Some(GameRoute::BankingBasics),
            Route::Home | Route::Games | Route::NotFound => None,
        }
    }
}

fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route {
        Route::Home | Route::Games => {
            log::trace!("Rendering games listing");
            html! { <Layout title="Mini-Games"><GamesPage /></Layout> }
        }
        Route::StockMarket => {
            log::trace!("Rendering stock market simulator");
            html! { <Layout title="Stock Market Simulator"><StockMarketPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
        game_route => match game_route.game().and_then(find_game) {
            Some(game) => html! {
                <Layout title={game.title}><ComingSoon game={*game} /></Layout>
            },
            None => html! { <Redirect<Route> to={Route::NotFound} /> },
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <PriceStoreProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </PriceStoreProvider>
        </AuthProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Money Arcade Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_common::GAMES;

    #[test]
    fn test_card_routes_match_router_paths() {
        for game in GAMES.iter() {
            let route = Route::from(game.route);
            assert_eq!(route.to_path(), game.route.path());
            assert_eq!(route.game(), Some(game.route));
        }
    }

    #[test]
    fn test_listing_paths_resolve() {
        assert_eq!(Route::recognize("/dashboard/games"), Some(Route::Games));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/dashboard/games/stockmarket/app"), Some(Route::StockMarket));
    }
}
