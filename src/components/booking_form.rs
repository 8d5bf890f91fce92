use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::analytics;
use crate::forms::{validate_booking, BackendHandle, FieldMap, SubmitFlow};
use crate::notifications::{AlertAction, AlertStack, NotificationKind};

use super::notification::NotificationHost;

const FORM_ID: &str = "bookingForm";

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    #[prop_or_else(BackendHandle::booking_stub)]
    pub backend: BackendHandle,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);

    let flow = use_mut_ref(SubmitFlow::new);
    let submitting = use_state(|| false);
    let alerts = use_reducer(AlertStack::default);

    let onsubmit = {
        let full_name = full_name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let service = service.clone();
        let message = message.clone();
        let flow = flow.clone();
        let submitting = submitting.clone();
        let alerts = alerts.clone();
        let backend = props.backend.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Refuse re-entry while an earlier submission is in flight.
            if !flow.borrow_mut().begin() {
                return;
            }

            analytics::dispatch(&analytics::form_submission(FORM_ID));

            let mut fields = FieldMap::new();
            fields.insert("fullName", (*full_name).clone());
            fields.insert("email", (*email).clone());
            fields.insert("phone", (*phone).clone());
            fields.insert("service", (*service).clone());
            fields.insert("message", (*message).clone());

            if let Err(err) = validate_booking(&fields) {
                alerts.dispatch(AlertAction::Push(
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

            let full_name = full_name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let service = service.clone();
            let message = message.clone();
            let flow = flow.clone();
            let submitting = submitting.clone();
            let alerts = alerts.clone();
            let backend = backend.clone();

            spawn_local(async move {
                let result = backend.0.submit(fields).await;

                // Re-enable the button no matter how the request ended.
                submitting.set(false);

                match result {
                    Ok(()) => {
                        full_name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        service.set(String::new());
                        message.set(String::new());
                        alerts.dispatch(AlertAction::Push(
                            NotificationKind::Success,
                            "Success! Your consultation request has been received. \
                             We'll contact you within 24 hours."
                                .to_string(),
                        ));
                        flow.borrow_mut().finish(true);
                    }
                    Err(err) => {
                        alerts.dispatch(AlertAction::Push(
                            NotificationKind::Error,
                            err.0,
                        ));
                        flow.borrow_mut().finish(false);
                    }
                }
                flow.borrow_mut().settle();
            });
        })
    };

    let on_dismiss = {
        let alerts = alerts.clone();
        Callback::from(move |id: u64| alerts.dispatch(AlertAction::Dismiss(id)))
    };

    let on_name = {
        let full_name = full_name.clone();
        Callback::from(move |e: Event| {
            full_name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: Event| {
            phone.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            service.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: Event| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    html! {
        <>
            <NotificationHost alerts={alerts.entries().to_vec()} {on_dismiss} />
            <form id={FORM_ID} class="booking-form" {onsubmit}>
                <style>
                    {r#"
                        .booking-form {
                            display: grid;
                            gap: 16px;
                            max-width: 560px;
                            margin: 0 auto;
                        }
                        .booking-form label {
                            display: block;
                            font-size: 0.85rem;
                            margin-bottom: 4px;
                            color: #4a4a4a;
                        }
                        .booking-form input,
                        .booking-form select,
                        .booking-form textarea {
                            width: 100%;
                            padding: 12px 14px;
                            border: 1px solid #ddd;
                            border-radius: 8px;
                            font-size: 0.95rem;
                            font-family: inherit;
                        }
                        .booking-form input:focus,
                        .booking-form select:focus,
                        .booking-form textarea:focus {
                            outline: none;
                            border-color: #7ba377;
                        }
                        .booking-form button[type="submit"] {
                            padding: 14px;
                            border: none;
                            border-radius: 8px;
                            background: linear-gradient(135deg, #7ba377, #5f8a5c);
                            color: #fff;
                            font-size: 1rem;
                            cursor: pointer;
                        }
                        .booking-form button[type="submit"]:disabled {
                            opacity: 0.6;
                            cursor: not-allowed;
                        }
                    "#}
                </style>
                <div>
                    <label for="fullName">{"Full Name *"}</label>
                    <input
                        id="fullName"
                        name="fullName"
                        type="text"
                        value={(*full_name).clone()}
                        onchange={on_name}
                    />
                </div>
                <div>
                    <label for="email">{"Email *"}</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        value={(*email).clone()}
                        onchange={on_email}
                    />
                </div>
                <div>
                    <label for="phone">{"Phone *"}</label>
                    <input
                        id="phone"
                        name="phone"
                        type="tel"
                        value={(*phone).clone()}
                        onchange={on_phone}
                    />
                </div>
                <div>
                    <label for="service">{"Service of Interest"}</label>
                    <select id="service" name="service" onchange={on_service}>
                        <option value="" selected={service.is_empty()}>{"Select a service"}</option>
                        <option value="injectables" selected={*service == "injectables"}>{"Injectables"}</option>
                        <option value="laser" selected={*service == "laser"}>{"Laser Treatments"}</option>
                        <option value="facials" selected={*service == "facials"}>{"Medical Facials"}</option>
                        <option value="body" selected={*service == "body"}>{"Body Contouring"}</option>
                    </select>
                </div>
                <div>
                    <label for="message">{"Anything we should know?"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        value={(*message).clone()}
                        onchange={on_message}
                    />
                </div>
                <button type="submit" disabled={*submitting}>
                    { if *submitting { "Submitting..." } else { "Book Free Consultation" } }
                </button>
            </form>
        </>
    }
}
