use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::forms::{validate_newsletter, BackendHandle, FieldMap, SubmitFlow};
use crate::notifications::{InlineAction, InlineSlot, NotificationKind};

use super::notification::InlineMessage;

#[derive(Properties, PartialEq)]
pub struct NewsletterProps {
    #[prop_or_else(BackendHandle::newsletter_stub)]
    pub backend: BackendHandle,
}

#[function_component(NewsletterSignup)]
pub fn newsletter_signup(props: &NewsletterProps) -> Html {
    let email = use_state(String::new);
    let flow = use_mut_ref(SubmitFlow::new);
    let submitting = use_state(|| false);
    let slot = use_reducer(InlineSlot::default);

    let onsubmit = {
        let email = email.clone();
        let flow = flow.clone();
        let submitting = submitting.clone();
        let slot = slot.clone();
        let backend = props.backend.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !flow.borrow_mut().begin() {
                return;
            }

            if let Err(err) = validate_newsletter(&email) {
                slot.dispatch(InlineAction::Show(
                    NotificationKind::Error,
                    err.message().to_string(),
                ));
                let mut flow = flow.borrow_mut();
                flow.reject();
                flow.settle();
                return;
            }

            flow.borrow_mut().launch();
            submitting.set(true);

            let mut fields = FieldMap::new();
            fields.insert("email", (*email).clone());

            let email = email.clone();
            let flow = flow.clone();
            let submitting = submitting.clone();
            let slot = slot.clone();
            let backend = backend.clone();

            spawn_local(async move {
                let result = backend.0.submit(fields).await;
                submitting.set(false);

                match result {
                    Ok(()) => {
                        email.set(String::new());
                        slot.dispatch(InlineAction::Show(
                            NotificationKind::Success,
                            "Successfully subscribed! Check your email for your $50 coupon."
                                .to_string(),
                        ));
                        flow.borrow_mut().finish(true);
                    }
                    Err(_) => {
                        slot.dispatch(InlineAction::Show(
                            NotificationKind::Error,
                            "Subscription failed. Please try again.".to_string(),
                        ));
                        flow.borrow_mut().finish(false);
                    }
                }
                flow.borrow_mut().settle();
            });
        })
    };

    let on_expire = {
        let slot = slot.clone();
        Callback::from(move |id: u64| slot.dispatch(InlineAction::Expire(id)))
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    html! {
        <div class="newsletter">
            <style>
                {r#"
                    .newsletter form {
                        display: flex;
                        gap: 8px;
                        margin-top: 12px;
                    }
                    .newsletter input {
                        flex: 1;
                        padding: 10px 14px;
                        border: 1px solid #ddd;
                        border-radius: 8px;
                        font-size: 0.9rem;
                    }
                    .newsletter button {
                        padding: 10px 18px;
                        border: none;
                        border-radius: 8px;
                        background: #7ba377;
                        color: #fff;
                        cursor: pointer;
                        white-space: nowrap;
                    }
                    .newsletter button:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                "#}
            </style>
            <h4>{"Get $50 Off Your First Treatment"}</h4>
            <form {onsubmit}>
                <input
                    type="email"
                    placeholder="Your email address"
                    value={(*email).clone()}
                    onchange={on_email}
                />
                <button type="submit" disabled={*submitting}>
                    { if *submitting { "Subscribing..." } else { "Subscribe" } }
                </button>
            </form>
            <InlineMessage slot={slot.current().cloned()} {on_expire} />
        </div>
    }
}
