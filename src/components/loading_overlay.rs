use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingOverlayProps {
    pub show: bool,
    #[prop_or(AttrValue::Static("Sending message..."))]
    pub text: AttrValue,
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <div class="loading-overlay">
            <div class="loading-content">
                <div class="loading-spinner"></div>
                <p class="loading-text">{ props.text.clone() }</p>
            </div>
        </div>
    }
}
