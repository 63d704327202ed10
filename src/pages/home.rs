use chrono::Datelike;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animation::use_scroll_reveal;
use crate::components::button::{BookCallButton, Button, ButtonSize, ButtonVariant};
use crate::components::header::{Header, LOGO_SRC};
use crate::components::lead_form::LeadForm;
use crate::components::sticky_footer::StickyFooter;
use crate::components::testimonials::TestimonialSlider;
use crate::components::video::VideoEmbed;
use crate::lead::submission::FormType;
use crate::Route;

const INTRO_VIDEO_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

#[function_component(Home)]
pub fn home() -> Html {
    let lead_form_ref = use_node_ref();
    use_scroll_reveal();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let scroll_to_form = {
        let lead_form_ref = lead_form_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(section) = lead_form_ref.cast::<web_sys::Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #f9fafb;
                    }
                    .badge {
                        display: inline-block;
                        background: #dcfce7;
                        color: #15803d;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 1rem;
                    }
                    .hero {
                        padding: 7rem 1.5rem 5rem;
                        text-align: center;
                    }
                    .hero-inner, .section-inner {
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 .accent { color: #16a34a; }
                    .hero .lead {
                        color: #4b5563;
                        font-size: 1.25rem;
                        max-width: 48rem;
                        margin: 0 auto 2.5rem;
                    }
                    .hero .video-embed {
                        margin-bottom: 2.5rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        margin-bottom: 2rem;
                    }
                    .section {
                        padding: 4rem 1.5rem;
                    }
                    .section.muted { background: #f3f4f6; }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .section-heading h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .section-heading p {
                        color: #4b5563;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .section-cta {
                        margin-top: 3rem;
                        text-align: center;
                    }
                    .site-footer {
                        background: #111827;
                        color: #fff;
                        padding: 2rem 1.5rem;
                        text-align: center;
                    }
                    .site-footer img {
                        height: 3rem;
                        margin: 0 auto 1rem;
                        filter: invert(1);
                    }
                    .site-footer p {
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .hero h1 { font-size: 1.875rem; }
                        .section-heading h2 { font-size: 1.875rem; }
                    }
                "#}
            </style>
            <Header />

            <section class="hero">
                <div class="hero-inner">
                    <div class="animate-on-scroll">
                        <div class="badge">{"Want to build a successful business through franchising?"}</div>
                    </div>
                    <h1 class="animate-on-scroll">
                        {"Unlock Your "}<span class="accent">{"Franchising Potential"}</span>{" With Expert Guidance"}
                    </h1>
                    <p class="lead animate-on-scroll">
                        {"Join successful franchise owners who have built thriving businesses with our proven strategies and personalized coaching."}
                    </p>
                    <div class="animate-on-scroll">
                        <VideoEmbed src={INTRO_VIDEO_URL} title="Adrienne's Intro Video" />
                    </div>
                    <div class="hero-cta-group animate-on-scroll">
                        <BookCallButton label="Book a Free 15-Minute Consultation" size={ButtonSize::Lg} />
                        <Link<Route> to={Route::FranchiseGuide}>
                            <Button variant={ButtonVariant::Secondary} size={ButtonSize::Lg}>
                                <span class="btn-icon">{"↓"}</span>
                                {"Get Franchise Guide"}
                            </Button>
                        </Link<Route>>
                        <Button variant={ButtonVariant::Secondary} size={ButtonSize::Lg} onclick={scroll_to_form}>
                            {"Download the Free Guide"}
                        </Button>
                    </div>
                </div>
            </section>

            <section class="section muted" ref={lead_form_ref}>
                <div class="section-inner">
                    <div class="section-heading animate-on-scroll">
                        <h2>{"Get Your Free Franchise Success Guide"}</h2>
                        <p>{"Discover proven strategies from industry experts to build and scale your franchise business successfully."}</p>
                    </div>
                    <div class="animate-on-scroll">
                        <LeadForm
                            form_type={FormType::Download}
                            title="Download Your Free Franchise Guide"
                            show_ebook_cover={true}
                        />
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-inner">
                    <div class="section-heading animate-on-scroll">
                        <div class="badge">{"Success Stories"}</div>
                        <h2>{"Hear From Our Clients"}</h2>
                        <p>{"See how our franchise expertise has helped business owners achieve their goals and build successful franchises."}</p>
                    </div>
                    <div class="animate-on-scroll">
                        <TestimonialSlider />
                    </div>
                    <div class="section-cta animate-on-scroll">
                        <BookCallButton label="Book a Free 15-Minute Consultation" size={ButtonSize::Lg} />
                    </div>
                </div>
            </section>

            <StickyFooter />

            <footer class="site-footer">
                <img src={LOGO_SRC} alt="Success Franchising" />
                <p>{format!("© {} Success Franchising. All rights reserved.", year)}</p>
            </footer>
        </div>
    }
}
