use yew::prelude::*;

use crate::components::animation::use_scroll_reveal;
use crate::components::header::Header;
use crate::components::lead_form::LeadForm;
use crate::components::sticky_footer::StickyFooter;
use crate::lead::submission::FormType;

/// Stand-alone guide request page. The PDF is offered after the lead is in.
#[function_component(FranchiseGuide)]
pub fn franchise_guide() -> Html {
    use_scroll_reveal();

    html! {
        <div class="guide-page">
            <style>
                {r#"
                    .guide-page {
                        min-height: 100vh;
                        background: #f9fafb;
                    }
                    .guide-page main {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 7rem 1rem 3rem;
                    }
                    .guide-page .intro {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .guide-page h1 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .guide-page .intro p {
                        font-size: 1.25rem;
                        color: #4b5563;
                    }
                "#}
            </style>
            <Header />
            <main>
                <div class="intro animate-on-scroll">
                    <h1>{"Franchise Guide Request"}</h1>
                    <p>{"Get your comprehensive franchise guide by filling out the form below."}</p>
                </div>
                <LeadForm
                    form_type={FormType::Contact}
                    title="Franchise Guide Request Form"
                    show_ebook_cover={false}
                />
            </main>
            <StickyFooter />
        </div>
    }
}
