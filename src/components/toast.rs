use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::LeadConfig;
use crate::lead::download::{start_download, AnchorDownload};
use crate::lead::notice::{Notice, NoticeAction, NoticeVariant};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// At most one toast is on screen. Showing a new one replaces the old one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    next_id: u32,
    pub current: Option<Toast>,
}

pub enum ToastAction {
    Show(Notice),
    Dismiss(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(notice) => Rc::new(Self {
                next_id: self.next_id.wrapping_add(1),
                current: Some(Toast { id: self.next_id, notice }),
            }),
            // A stale timer must not close a newer toast.
            ToastAction::Dismiss(id) if self.current.as_ref().map(|t| t.id) == Some(id) => Rc::new(Self {
                next_id: self.next_id,
                current: None,
            }),
            ToastAction::Dismiss(_) => self,
        }
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let state = use_reducer(ToastState::default);
    let config = use_context::<Rc<LeadConfig>>().unwrap_or_default();

    {
        let state = state.clone();
        let duration = config.toast_duration_ms;
        let current_id = state.current.as_ref().map(|t| t.id);
        use_effect_with_deps(
            move |current_id| {
                let timeout = current_id.map(|id| {
                    Timeout::new(duration, move || state.dispatch(ToastAction::Dismiss(id)))
                });
                move || drop(timeout)
            },
            current_id,
        );
    }

    let toast_view = match state.current.as_ref() {
        Some(toast) => {
            let id = toast.id;
            let notice = toast.notice;
            let on_close = {
                let state = state.clone();
                Callback::from(move |_: MouseEvent| state.dispatch(ToastAction::Dismiss(id)))
            };
            let action = notice.action().map(|action| {
                let state = state.clone();
                let guide = config.guide.clone();
                let onclick = Callback::from(move |_: MouseEvent| match action {
                    NoticeAction::DownloadGuide => {
                        if start_download(&AnchorDownload, &guide) {
                            state.dispatch(ToastAction::Dismiss(id));
                        } else {
                            state.dispatch(ToastAction::Show(Notice::DownloadUnavailable));
                        }
                    }
                });
                html! {
                    <button class="toast-action" {onclick}>{action.label()}</button>
                }
            });
            let variant_class = match notice.variant() {
                NoticeVariant::Default => "toast-default",
                NoticeVariant::Destructive => "toast-destructive",
            };
            html! {
                <div class={classes!("toast", variant_class)} role="status" aria-live="polite">
                    <div class="toast-body">
                        <div class="toast-title">{notice.title()}</div>
                        <div class="toast-description">{notice.description()}</div>
                        { for action }
                    </div>
                    <button class="toast-close" aria-label="Close" onclick={on_close}>{"✕"}</button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<ToastContext> context={state.clone()}>
            <style>
                {r#"
                    .toast-viewport {
                        position: fixed;
                        top: 1rem;
                        right: 1rem;
                        z-index: 100;
                        max-width: 420px;
                        width: calc(100% - 2rem);
                    }
                    .toast {
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 1rem 1.25rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-default {
                        background: #fff;
                        color: #1f2937;
                        border: 1px solid #e5e7eb;
                    }
                    .toast-destructive {
                        background: #dc2626;
                        color: #fff;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.9rem;
                        opacity: 0.9;
                    }
                    .toast-action {
                        margin-top: 0.75rem;
                        padding: 0.4rem 0.9rem;
                        border-radius: 0.375rem;
                        border: none;
                        background: #16a34a;
                        color: #fff;
                        cursor: pointer;
                    }
                    .toast-close {
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        opacity: 0.7;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(-10px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for props.children.iter() }
            <div class="toast-viewport">{toast_view}</div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_current() {
        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Show(Notice::RequestReceived))
            .reduce(ToastAction::Show(Notice::DownloadOffer));
        let current = state.current.as_ref().unwrap();
        assert_eq!(current.notice, Notice::DownloadOffer);
        assert_eq!(current.id, 1);
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Show(Notice::RequestReceived))
            .reduce(ToastAction::Show(Notice::DownloadOffer))
            .reduce(ToastAction::Dismiss(0));
        assert_eq!(state.current.as_ref().map(|t| t.notice), Some(Notice::DownloadOffer));

        let state = state.reduce(ToastAction::Dismiss(1));
        assert!(state.current.is_none());
    }
}
