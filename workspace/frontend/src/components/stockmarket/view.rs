use yew::prelude::*;
use super::chart::StockChart;
use crate::store::PriceStoreContext;

#[function_component(StockMarketPage)]
pub fn stock_market_page() -> Html {
    let store = use_context::<PriceStoreContext>();
    let symbols: Vec<String> = store
        .as_ref()
        .map(|s| s.symbols().into_iter().map(str::to_string).collect())
        .unwrap_or_default();

    let Some(first) = symbols.first().cloned() else {
        return html! {
            <div class="alert alert-info">
                <i class="fas fa-info-circle"></i>
                <span>{"No market data yet. Prices show up here once the simulation starts trading."}</span>
            </div>
        };
    };

    html! {
        <>
            <StockChart
                symbol={first.clone()}
                title={format!("{} Full History", first)}
                show_full_history=true
                height={400}
            />
            <div class="grid gap-4 md:grid-cols-2">
                {for symbols.into_iter().map(|symbol| html! {
                    <StockChart key={symbol.clone()} symbol={symbol.clone()} live_update=true />
                })}
            </div>
        </>
    }
}
