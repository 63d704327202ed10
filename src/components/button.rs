use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::config::LeadConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or("button")]
    pub kind: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, is_loading: bool) -> Classes {
    classes!(
        "btn",
        match variant {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        },
        match size {
            ButtonSize::Default => "btn-md",
            ButtonSize::Lg => "btn-lg",
        },
        is_loading.then_some("btn-loading"),
    )
}

/// Shared button. While loading it is disabled and shows a spinner.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(
        button_classes(props.variant, props.size, props.is_loading),
        props.class.clone()
    );

    html! {
        <button
            type={props.kind}
            {class}
            disabled={props.is_loading || props.disabled}
            onclick={props.onclick.clone()}
        >
            if props.is_loading {
                <span class="btn-busy">
                    <span class="btn-spinner"></span>
                    {"Processing..."}
                </span>
            } else {
                { for props.children.iter() }
            }
        </button>
    }
}

pub fn open_booking_page(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        error!("Failed to open booking page: {:?}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct BookCallButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
}

/// Opens the consultation booking page in a new tab.
#[function_component(BookCallButton)]
pub fn book_call_button(props: &BookCallButtonProps) -> Html {
    let config = use_context::<Rc<LeadConfig>>().unwrap_or_default();
    let onclick = Callback::from(move |_: MouseEvent| open_booking_page(&config.booking_url));

    html! {
        <Button size={props.size} class={props.class.clone()} {onclick}>
            <span class="btn-icon">{"📅"}</span>
            {props.label.clone()}
        </Button>
    }
}

pub const BUTTON_STYLES: &str = r#"
    .btn {
        position: relative;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        font-weight: 500;
        border-radius: 0.375rem;
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .btn-primary {
        background: #16a34a;
        color: #fff;
        border: none;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }
    .btn-primary:hover {
        background: #15803d;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .btn-secondary {
        background: #fff;
        color: #15803d;
        border: 1px solid #bbf7d0;
    }
    .btn-secondary:hover {
        background: #f0fdf4;
        border-color: #86efac;
    }
    .btn-md { padding: 0.75rem 1.5rem; }
    .btn-lg { padding: 1rem 2rem; font-size: 1.125rem; }
    .btn-loading, .btn:disabled {
        opacity: 0.8;
        cursor: not-allowed;
    }
    .btn-busy {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .btn-spinner {
        width: 16px;
        height: 16px;
        border: 2px solid rgba(255, 255, 255, 0.3);
        border-top-color: currentColor;
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        let classes = button_classes(ButtonVariant::Secondary, ButtonSize::Lg, false);
        assert!(classes.contains("btn-secondary"));
        assert!(classes.contains("btn-lg"));
        assert!(!classes.contains("btn-loading"));

        let loading = button_classes(ButtonVariant::Primary, ButtonSize::Default, true);
        assert!(loading.contains("btn-primary"));
        assert!(loading.contains("btn-md"));
        assert!(loading.contains("btn-loading"));
    }
}
