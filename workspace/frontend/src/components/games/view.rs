use std::rc::Rc;

use arcade_common::{listing_state, ActivitySource, ListingState, GAMES};
use yew::prelude::*;

use super::card::GameCard;
use crate::api_client::activity::HttpActivitySource;
use crate::auth::AuthContext;
use crate::common::alert::WarningBanner;
use crate::common::loading::{FullPageLoading, Loading, LoadingSize};
use crate::hooks::use_user_activities;

#[derive(Properties)]
pub struct Props {
    /// Where activities come from; defaults to the backend API.
    #[prop_or_default]
    pub source: Option<Rc<dyn ActivitySource>>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        match (&self.source, &other.source) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

#[function_component(GamesPage)]
pub fn games_page(props: &Props) -> Html {
    let auth = use_context::<AuthContext>();
    let identity = auth.as_ref().and_then(|a| a.user_id().cloned());

    let http_source = use_memo((), |_| HttpActivitySource::new());
    let source: Rc<dyn ActivitySource> = match &props.source {
        Some(source) => source.clone(),
        None => http_source,
    };
    let activities = use_user_activities(source, identity.clone());

    let state = listing_state(identity.as_ref(), &activities);
    if state == ListingState::AwaitingUser {
        log::trace!("No user yet, waiting for auth");
        return html! { <FullPageLoading text="Loading games..." /> };
    }

    html! {
        <>
            <div class="flex items-center justify-between">
                <h2 class="text-3xl font-bold tracking-tight">{"Mini-Games"}</h2>
                <button class="btn btn-outline btn-sm">
                    <i class="fas fa-award mr-2"></i>
                    {"My Achievements"}
                </button>
            </div>

            {if let Some(err) = activities.error() {
                html! { <WarningBanner message={err.user_message()} /> }
            } else {
                html! {}
            }}

            {match state {
                ListingState::Ready => html! {
                    <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                        {for GAMES.iter().map(|game| html! {
                            <GameCard
                                key={game.title}
                                game={*game}
                                progress={game.progress_view(&activities)}
                            />
                        })}
                    </div>
                },
                _ => html! { <Loading size={LoadingSize::Large} text="Loading games..." /> },
            }}
        </>
    }
}
