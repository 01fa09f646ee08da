use std::ops::Deref;
use std::rc::Rc;

use arcade_common::PriceBook;
use yew::prelude::*;

/// Changes the price store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceAction {
    Record { symbol: String, price: f64 },
    Reset,
}

/// Price book held by the store provider. Components subscribe by
/// taking [`PriceStoreContext`] from context and re-render on every
/// dispatched action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceStore(PriceBook);

impl Deref for PriceStore {
    type Target = PriceBook;

    fn deref(&self) -> &PriceBook {
        &self.0
    }
}

impl Reducible for PriceStore {
    type Action = PriceAction;

    fn reduce(self: Rc<Self>, action: PriceAction) -> Rc<Self> {
        let mut book = self.0.clone();
        match action {
            PriceAction::Record { symbol, price } => book.record(&symbol, price),
            PriceAction::Reset => {
                log::debug!("Price store reset");
                book.reset();
            }
        }
        Rc::new(PriceStore(book))
    }
}

pub type PriceStoreContext = UseReducerHandle<PriceStore>;

#[derive(Properties, PartialEq)]
pub struct PriceStoreProviderProps {
    pub children: Children,
    #[prop_or_default]
    pub initial: PriceBook,
}

#[function_component(PriceStoreProvider)]
pub fn price_store_provider(props: &PriceStoreProviderProps) -> Html {
    let initial = props.initial.clone();
    let store = use_reducer(move || PriceStore(initial));

    html! {
        <ContextProvider<PriceStoreContext> context={store}>
            {props.children.clone()}
        </ContextProvider<PriceStoreContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_records_and_resets() {
        let store = Rc::new(PriceStore::default());
        let store = store.reduce(PriceAction::Record { symbol: "ACME".to_string(), price: 10.0 });
        let store = store.reduce(PriceAction::Record { symbol: "ACME".to_string(), price: 11.0 });

        assert_eq!(store.history("ACME"), Some(&[10.0, 11.0][..]));
        assert_eq!(store.latest("ACME"), Some(11.0));

        let store = store.reduce(PriceAction::Reset);
        assert_eq!(store.history("ACME"), None);
    }
}
