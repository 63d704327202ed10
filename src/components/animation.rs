use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const REVEALED_CLASS: &str = "visible";
const REVEAL_THRESHOLD: f64 = 0.1;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_reveal_targets() -> Option<(IntersectionObserver, ObserverCallback)> {
    let document = web_sys::window()?.document()?;

    let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                let _ = target.class_list().add_1(REVEALED_CLASS);
                // Reveal once, then stop watching.
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };

    let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    Some((observer, callback))
}

/// Fades in every `.animate-on-scroll` element the first time it scrolls
/// into view.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        |_| {
            let observed = observe_reveal_targets();
            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

pub const REVEAL_STYLES: &str = r#"
    .animate-on-scroll {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .animate-on-scroll.visible {
        opacity: 1;
        transform: translateY(0);
    }
"#;
