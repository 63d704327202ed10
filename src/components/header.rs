use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub const LOGO_SRC: &str = "/lovable-uploads/ea74c930-6d85-45ed-9bf6-e77dd589877c.png";
const SCROLL_THRESHOLD: f64 = 10.0;

pub fn is_condensed(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let window_clone = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(is_condensed(scroll_y));
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1rem 1.5rem;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                    }
                    .site-header .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .site-header .header-logo {
                        height: 3.5rem;
                        width: auto;
                        object-fit: contain;
                    }
                    .site-header .header-tagline {
                        color: #374151;
                        font-weight: 500;
                        transition: font-size 0.3s ease;
                    }
                    .site-header.scrolled .header-tagline {
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .site-header .header-tagline { display: none; }
                        .site-header .header-logo { height: 3rem; }
                    }
                "#}
            </style>
            <div class="header-content">
                <img src={LOGO_SRC} alt="Success Franchising" class="header-logo" />
                <div class="header-tagline">
                    {"Want to build a successful business through franchising?"}
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condenses_after_threshold() {
        assert!(!is_condensed(0.0));
        assert!(!is_condensed(10.0));
        assert!(is_condensed(10.5));
    }
}
