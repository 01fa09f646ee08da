use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub size: LoadingSize,
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[derive(Clone, PartialEq, Default)]
pub enum LoadingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoadingSize {
    fn class(&self) -> &'static str {
        match self {
            LoadingSize::Small => "loading-sm",
            LoadingSize::Medium => "loading-md",
            LoadingSize::Large => "loading-lg",
        }
    }
}

/// Spinner inside the page body, with optional caption to its right
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex justify-center items-center py-12 gap-2">
            <span class={classes!("loading", "loading-spinner", props.size.class())}></span>
            {if let Some(text) = &props.text {
                html! { <span class="text-base-content">{text.clone()}</span> }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FullPageLoadingProps {
    pub text: AttrValue,
}

/// Spinner covering the whole screen, used before anything else can render
#[function_component(FullPageLoading)]
pub fn full_page_loading(props: &FullPageLoadingProps) -> Html {
    html! {
        <div class="flex min-h-screen items-center justify-center bg-base-100">
            <div class="flex flex-col items-center gap-2">
                <span class="loading loading-spinner loading-lg"></span>
                <p class="text-sm text-gray-500">{props.text.clone()}</p>
            </div>
        </div>
    }
}
