use log::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::Button;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let path = location.map(|l| l.path().to_string()).unwrap_or_default();

    use_effect_with_deps(
        |path| {
            error!("404 Error: User attempted to access non-existent route: {}", path);
            || ()
        },
        path,
    );

    let go_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #f9fafb;
                        padding: 1.5rem;
                    }
                    .not-found .content {
                        text-align: center;
                        max-width: 28rem;
                    }
                    .not-found .badge {
                        display: inline-block;
                        background: #dcfce7;
                        color: #15803d;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 1rem;
                    }
                    .not-found h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1.5rem;
                    }
                    .not-found p {
                        color: #4b5563;
                        font-size: 1.125rem;
                        margin-bottom: 2rem;
                    }
                "#}
            </style>
            <div class="content">
                <div class="badge">{"404 Error"}</div>
                <h1>{"Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist or has been moved. Let's get you back on track."}</p>
                <Button onclick={go_home}>
                    <span class="btn-icon">{"←"}</span>
                    {"Return to Home"}
                </Button>
            </div>
        </div>
    }
}
