use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: AttrValue,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-100">
            <Navbar title={props.title.clone()} />
            <main class="flex-1 space-y-4 p-8 pt-6">
                { for props.children.iter() }
            </main>
        </div>
    }
}
