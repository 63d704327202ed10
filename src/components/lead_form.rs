use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::button::Button;
use crate::components::toast::{ToastAction, ToastContext};
use crate::config::LeadConfig;
use crate::lead::download::AnchorDownload;
use crate::lead::flow::{LeadFlow, SubmissionOutcome, SubmissionPhase};
use crate::lead::submission::{FormType, LeadField, LeadSubmission};
use crate::lead::webhook::{FetchTransport, PageContext};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub form_type: FormType,
    pub title: AttrValue,
    #[prop_or(true)]
    pub show_ebook_cover: bool,
}

/// Timers for notices the last submission has yet to show. A gloo `Timeout`
/// is cancelled when dropped, so clearing the list cancels them.
struct PendingNotices<H> {
    timers: Vec<H>,
}

impl<H> Default for PendingNotices<H> {
    fn default() -> Self {
        Self { timers: Vec::new() }
    }
}

impl<H> PendingNotices<H> {
    fn push(&mut self, timer: H) {
        self.timers.push(timer);
    }

    fn cancel_all(&mut self) {
        self.timers.clear();
    }
}

/// Shows the notices for an outcome, immediately or on a timer, and walks
/// the phase back to idle once the last one is out.
fn present_outcome(
    outcome: &SubmissionOutcome,
    form_type: FormType,
    config: &LeadConfig,
    toasts: Option<&ToastContext>,
    phase: &UseStateHandle<SubmissionPhase>,
    pending: &RefCell<PendingNotices<Timeout>>,
) {
    let Some(toasts) = toasts else {
        warn!("No toast surface mounted, dropping {:?}", outcome);
        phase.set(SubmissionPhase::Idle);
        return;
    };

    for scheduled in outcome.notices(form_type, config.download_offer_delay_ms) {
        if scheduled.delay_ms == 0 {
            toasts.dispatch(ToastAction::Show(scheduled.notice));
        } else {
            let toasts = toasts.clone();
            let phase = phase.clone();
            pending.borrow_mut().push(Timeout::new(scheduled.delay_ms, move || {
                toasts.dispatch(ToastAction::Show(scheduled.notice));
                phase.set(SubmissionPhase::Idle);
            }));
        }
    }
    phase.set(outcome.settled_phase(form_type));
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let config = use_context::<Rc<LeadConfig>>().unwrap_or_default();
    let toasts = use_context::<ToastContext>();
    let form = use_state(LeadSubmission::default);
    let phase = use_state(|| SubmissionPhase::Idle);
    let pending = use_mut_ref(PendingNotices::<Timeout>::default);

    let on_field = |field: LeadField| {
        let form = form.clone();
        Callback::from(move |value: String| form.set((*form).clone().with(field, value)))
    };
    let on_input = |field: LeadField| {
        let update = on_field(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update.emit(input.value());
        })
    };
    let on_textarea = |field: LeadField| {
        let update = on_field(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update.emit(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let phase = phase.clone();
        let config = config.clone();
        let toasts = toasts.clone();
        let pending = pending.clone();
        let form_type = props.form_type;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // A stale offer timer would flip the phase back to idle mid-flight.
            pending.borrow_mut().cancel_all();
            let snapshot = (*form).clone();
            let form = form.clone();
            let phase = phase.clone();
            let config = config.clone();
            let toasts = toasts.clone();
            let pending = pending.clone();
            spawn_local(async move {
                let page = PageContext::capture();
                let flow = LeadFlow::new(&config, &FetchTransport, &AnchorDownload);
                let phase_setter = phase.clone();
                let outcome = flow
                    .submit(form_type, &snapshot, &page, move |p| phase_setter.set(p))
                    .await;

                if outcome.resets_form() {
                    form.set(LeadSubmission::default());
                }
                present_outcome(&outcome, form_type, &config, toasts.as_ref(), &phase, &pending);
            });
        })
    };

    html! {
        <div class={classes!("lead-form-card", (!props.show_ebook_cover).then(|| "no-cover"))} id="lead-form">
            <style>
                {r#"
                    .lead-form-card {
                        background: #fff;
                        border-radius: 0.75rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        overflow: hidden;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                    }
                    .lead-form-card.no-cover {
                        grid-template-columns: 1fr;
                    }
                    .ebook-cover {
                        background: #f0fdf4;
                        padding: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .ebook {
                        background: #fff;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 1.5rem;
                        max-width: 20rem;
                        text-align: center;
                        transform: rotate(-2deg);
                        transition: transform 0.3s ease;
                    }
                    .ebook:hover { transform: rotate(0deg); }
                    .ebook-label {
                        color: #16a34a;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }
                    .ebook h3 { font-size: 1.5rem; color: #1f2937; margin: 0.5rem 0 0.75rem; }
                    .ebook-rule { width: 6rem; height: 4px; background: #22c55e; margin: 0 auto 1rem; }
                    .ebook p { color: #4b5563; }
                    .lead-form { padding: 2rem; }
                    .lead-form h2 { font-size: 1.5rem; color: #1f2937; margin-bottom: 1.5rem; }
                    .lead-form .field-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .lead-form .field { margin-bottom: 1rem; }
                    .lead-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.25rem;
                    }
                    .lead-form .required { color: #ef4444; }
                    .lead-form input, .lead-form textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                        font: inherit;
                        box-sizing: border-box;
                    }
                    .lead-form input:focus, .lead-form textarea:focus {
                        outline: none;
                        border-color: #22c55e;
                        box-shadow: 0 0 0 2px rgba(34, 197, 94, 0.2);
                    }
                    .lead-form textarea { resize: none; }
                    .lead-form .submit { width: 100%; }
                    .lead-form .consent { font-size: 0.75rem; color: #6b7280; margin-top: 1rem; }
                    @media (max-width: 768px) {
                        .lead-form-card { grid-template-columns: 1fr; }
                        .lead-form .field-row { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            if props.show_ebook_cover {
                <div class="ebook-cover">
                    <div class="ebook">
                        <div class="ebook-label">{"Free Guide"}</div>
                        <h3>{"Franchise Success Blueprint"}</h3>
                        <div class="ebook-rule"></div>
                        <p>{"40 Reasons to Start a Franchise, 8 Reasons Not To & 8 Steps to Find the Right One for Success"}</p>
                        <div style="font-size: 2.5rem;">{"📘"}</div>
                    </div>
                </div>
            }
            <div class="lead-form">
                <h2>{props.title.clone()}</h2>
                <form {onsubmit} novalidate={true}>
                    <div class="field-row">
                        <div class="field">
                            <label for="firstName">{"First Name "}<span class="required">{"*"}</span></label>
                            <input
                                type="text"
                                id="firstName"
                                name={LeadField::FirstName.name()}
                                value={form.get(LeadField::FirstName).to_string()}
                                oninput={on_input(LeadField::FirstName)}
                                placeholder="Your first name"
                            />
                        </div>
                        <div class="field">
                            <label for="lastName">{"Last Name "}<span class="required">{"*"}</span></label>
                            <input
                                type="text"
                                id="lastName"
                                name={LeadField::LastName.name()}
                                value={form.get(LeadField::LastName).to_string()}
                                oninput={on_input(LeadField::LastName)}
                                placeholder="Your last name"
                            />
                        </div>
                    </div>
                    <div class="field">
                        <label for="email">{"Email "}<span class="required">{"*"}</span></label>
                        <input
                            type="email"
                            id="email"
                            name={LeadField::Email.name()}
                            value={form.get(LeadField::Email).to_string()}
                            oninput={on_input(LeadField::Email)}
                            placeholder="your.email@example.com"
                        />
                    </div>
                    <div class="field">
                        <label for="phone">{"Phone (Optional)"}</label>
                        <input
                            type="tel"
                            id="phone"
                            name={LeadField::Phone.name()}
                            value={form.get(LeadField::Phone).to_string()}
                            oninput={on_input(LeadField::Phone)}
                            placeholder="(555) 123-4567"
                        />
                    </div>
                    <div class="field">
                        <label for="description">{"Tell us about yourself (Optional)"}</label>
                        <textarea
                            id="description"
                            name={LeadField::Description.name()}
                            rows="3"
                            value={form.get(LeadField::Description).to_string()}
                            oninput={on_textarea(LeadField::Description)}
                            placeholder="I'm interested in franchising because..."
                        />
                    </div>
                    <Button kind="submit" class={classes!("submit")} is_loading={phase.is_busy()}>
                        {"Download PDF"}
                    </Button>
                    <p class="consent">
                        {"By submitting this form, you agree to receive the free guide and occasional emails about franchising opportunities. We respect your privacy and will never share your information."}
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_submission_cancels_pending_offer() {
        let offer = Rc::new(());
        let mut pending = PendingNotices::default();
        pending.push(Rc::clone(&offer));
        assert_eq!(Rc::strong_count(&offer), 2);

        pending.cancel_all();
        assert_eq!(Rc::strong_count(&offer), 1, "timer handle should be dropped");

        let next = Rc::new(());
        pending.push(Rc::clone(&next));
        assert_eq!(Rc::strong_count(&next), 2);
    }
}
