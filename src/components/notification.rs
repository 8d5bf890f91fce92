use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::notifications::{Notification, NotificationKind, AUTO_DISMISS_MS};

#[derive(Properties, PartialEq)]
pub struct HostProps {
    pub alerts: Vec<Notification>,
    pub on_dismiss: Callback<u64>,
}

/// Fixed stack of alerts in the top-right corner. Each card dismisses
/// itself after a timeout or when its close button is clicked.
#[function_component(NotificationHost)]
pub fn notification_host(props: &HostProps) -> Html {
    html! {
        <div class="alert-stack">
            <style>
                {r#"
                    .alert-stack {
                        position: fixed;
                        top: 20px;
                        right: 20px;
                        z-index: 3000;
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                        max-width: 380px;
                    }
                    @keyframes alertSlideIn {
                        from { transform: translateX(120%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .alert-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 12px;
                        padding: 14px 16px;
                        border-radius: 10px;
                        color: #fff;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                        animation: alertSlideIn 0.3s ease-out;
                        font-size: 0.9rem;
                        line-height: 1.4;
                    }
                    .alert-card.success {
                        background: linear-gradient(135deg, #7ba377, #5f8a5c);
                    }
                    .alert-card.error {
                        background: linear-gradient(135deg, #c77c78, #a85f5b);
                    }
                    .alert-close {
                        margin-left: auto;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1rem;
                        cursor: pointer;
                        opacity: 0.8;
                        padding: 0;
                    }
                    .alert-close:hover {
                        opacity: 1;
                    }
                "#}
            </style>
            {
                props.alerts.iter().map(|alert| html! {
                    <AlertCard
                        key={alert.id}
                        alert={alert.clone()}
                        on_dismiss={props.on_dismiss.clone()}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    alert: Notification,
    on_dismiss: Callback<u64>,
}

#[function_component(AlertCard)]
fn alert_card(props: &CardProps) -> Html {
    let id = props.alert.id;

    // The timeout is dropped (and thereby cancelled) when the card
    // unmounts, so manual dismissal never leaves a stale timer behind.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(AUTO_DISMISS_MS, move || {
                    on_dismiss.emit(id);
                });
                move || drop(timeout)
            },
            id,
        );
    }

    let class = match props.alert.kind {
        NotificationKind::Success => "alert-card success",
        NotificationKind::Error => "alert-card error",
    };

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div {class}>
            <span>{ &props.alert.text }</span>
            <button class="alert-close" onclick={on_close} aria-label="Dismiss">
                {"\u{2715}"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InlineProps {
    pub slot: Option<Notification>,
    pub on_expire: Callback<u64>,
}

/// Id the dismiss timer should fire for, if any.
pub fn expiry_target(slot: Option<&Notification>) -> Option<u64> {
    slot.map(|n| n.id)
}

/// Single message rendered inline next to a form, replacing whatever was
/// shown before. Used by the newsletter signup in the footer.
#[function_component(InlineMessage)]
pub fn inline_message(props: &InlineProps) -> Html {
    // The timer hook runs on every render, occupied slot or not; an empty
    // slot just means no timeout to arm.
    {
        let on_expire = props.on_expire.clone();
        use_effect_with_deps(
            move |id: &Option<u64>| {
                let timeout = id.map(|id| {
                    Timeout::new(AUTO_DISMISS_MS, move || {
                        on_expire.emit(id);
                    })
                });
                move || drop(timeout)
            },
            expiry_target(props.slot.as_ref()),
        );
    }

    let Some(current) = props.slot.as_ref() else {
        return html! {};
    };

    let class = match current.kind {
        NotificationKind::Success => "newsletter-message success",
        NotificationKind::Error => "newsletter-message error",
    };

    html! {
        <>
            <style>
                {r#"
                    .newsletter-message {
                        margin-top: 10px;
                        font-size: 0.85rem;
                    }
                    .newsletter-message.success { color: #7ba377; }
                    .newsletter-message.error { color: #c77c78; }
                "#}
            </style>
            <p {class}>{ &current.text }</p>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::expiry_target;
    use crate::notifications::{InlineSlot, NotificationKind};

    // The dismiss-timer dependency must be derivable for every slot state,
    // empty included, so the message component re-keys instead of branching.
    #[test]
    fn timer_target_follows_the_slot() {
        let mut slot = InlineSlot::default();
        assert_eq!(expiry_target(slot.current()), None);

        let first = slot.show(NotificationKind::Error, "Please enter a valid email address.");
        assert_eq!(expiry_target(slot.current()), Some(first));

        let second = slot.show(NotificationKind::Success, "Successfully subscribed!");
        assert_eq!(expiry_target(slot.current()), Some(second));

        slot.expire(second);
        assert_eq!(expiry_target(slot.current()), None);
    }
}
