use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WarningBannerProps {
    pub message: AttrValue,
}

/// Non-blocking warning shown above content that still renders.
#[function_component(WarningBanner)]
pub fn warning_banner(props: &WarningBannerProps) -> Html {
    html! {
        <div role="alert" class="alert alert-warning">
            <i class="fas fa-exclamation-circle"></i>
            <span>{props.message.clone()}</span>
        </div>
    }
}
