use yew::prelude::*;
use yew_router::prelude::*;
use crate::auth::AuthContext;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let auth = use_context::<AuthContext>();
    let user = auth.as_ref().and_then(|a| a.user.clone());

    let on_sign_out = auth.map(|a| {
        let sign_out = a.sign_out.clone();
        Callback::from(move |_: MouseEvent| sign_out.emit(()))
    });

    html! {
        <div class="navbar bg-neutral text-neutral-content">
            <div class="navbar-start">
                <Link<Route> to={Route::Games} classes="btn btn-ghost text-xl">{"Money Arcade"}</Link<Route>>
            </div>
            <div class="navbar-center hidden lg:flex">
                <span class="font-semibold">{props.title.clone()}</span>
            </div>
            <div class="navbar-end gap-2">
                {match user {
                    Some(user) => html! {
                        <>
                            <span class="text-sm">
                                <i class="fas fa-user mr-1"></i>
                                {user.display_name.unwrap_or_else(|| user.id.to_string())}
                            </span>
                            <button class="btn btn-ghost btn-sm" onclick={on_sign_out}>
                                <i class="fas fa-sign-out-alt"></i>
                            </button>
                        </>
                    },
                    None => html! { <span class="text-sm opacity-70">{"Guest"}</span> },
                }}
            </div>
        </div>
    }
}
