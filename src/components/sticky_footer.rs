use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::button::{BookCallButton, ButtonSize};

/// Show once the visitor has scrolled past half a viewport.
pub fn footer_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * 0.5
}

#[function_component(StickyFooter)]
pub fn sticky_footer() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let visible = footer_visible(scroll_y, viewport_height);

    html! {
        <div class={classes!("sticky-footer", visible.then(|| "visible"))}>
            <style>
                {r#"
                    .sticky-footer {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        transform: translateY(100%);
                        transition: transform 0.5s ease;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        box-shadow: 0 -4px 12px rgba(0, 0, 0, 0.08);
                    }
                    .sticky-footer.visible {
                        transform: translateY(0);
                    }
                    .sticky-footer .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .sticky-footer p {
                        color: #1f2937;
                        font-weight: 500;
                        margin: 0;
                    }
                    .sticky-footer .pulse {
                        white-space: nowrap;
                        animation: pulseSubtle 2s ease-in-out infinite;
                    }
                    @keyframes pulseSubtle {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.03); }
                    }
                    @media (max-width: 640px) {
                        .sticky-footer .footer-content {
                            flex-direction: column;
                            text-align: center;
                        }
                    }
                "#}
            </style>
            <div class="footer-content">
                <p>{"Take the first step towards business success. Book a free consultation today."}</p>
                <BookCallButton
                    label="Book a Free Call with Adrienne"
                    size={ButtonSize::Default}
                    class={classes!("pulse")}
                />
            </div>
        </div>
    }
}
