use arcade_common::{UserData, UserId};
use web_sys::window;
use yew::prelude::*;

use crate::settings::storage_key;

/// Current user as seen by the pages. `user` is `None` until the host
/// page has signed someone in.
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub user: Option<UserData>,
    pub sign_in: Callback<UserData>,
    pub sign_out: Callback<()>,
}

impl AuthContext {
    pub fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|u| &u.id)
    }
}

fn load_user() -> Option<UserData> {
    let storage = window()?.local_storage().ok()??;
    let id = storage.get_item(&storage_key("user_id")).ok()??;
    if id.is_empty() {
        return None;
    }
    let display_name = storage.get_item(&storage_key("user_name")).ok().flatten();
    Some(UserData {
        id: UserId::new(id),
        display_name,
    })
}

fn store_user(user: Option<&UserData>) {
    let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) else {
        log::warn!("localStorage unavailable, session will not persist");
        return;
    };
    let result = match user {
        Some(user) => storage
            .set_item(&storage_key("user_id"), user.id.as_str())
            .and_then(|_| match &user.display_name {
                Some(name) => storage.set_item(&storage_key("user_name"), name),
                None => storage.remove_item(&storage_key("user_name")),
            }),
        None => storage
            .remove_item(&storage_key("user_id"))
            .and_then(|_| storage.remove_item(&storage_key("user_name"))),
    };
    if let Err(e) = result {
        log::error!("Failed to persist session: {:?}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let user = use_state(load_user);

    let sign_in = {
        let user = user.clone();
        Callback::from(move |data: UserData| {
            log::info!("Signed in as {}", data.id);
            store_user(Some(&data));
            user.set(Some(data));
        })
    };

    let sign_out = {
        let user = user.clone();
        Callback::from(move |_| {
            log::info!("Signed out");
            store_user(None);
            user.set(None);
        })
    };

    let context = AuthContext {
        user: (*user).clone(),
        sign_in,
        sign_out,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
