use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

/// Elements that fade in the first time they scroll into view.
pub const FADE_IN_SELECTOR: &str = ".service-card, .result-card, .testimonial";

/// Images that defer loading until they approach the viewport.
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

const FADE_IN_THRESHOLD: f64 = 0.1;
const FADE_IN_ROOT_MARGIN: &str = "0px 0px -100px 0px";
const LAZY_ROOT_MARGIN: &str = "50px";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn reveal(element: &Element) {
    let _ = element.class_list().add_1("fade-in");
}

fn promote_lazy_image(image: &Element) {
    if let Some(src) = image.get_attribute("data-src") {
        let _ = image.set_attribute("src", &src);
        let _ = image.remove_attribute("data-src");
    }
}

fn for_each_matching(document: &Document, selector: &str, mut apply: impl FnMut(&Element)) {
    if let Ok(nodes) = document.query_selector_all(selector) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                apply(&element);
            }
        }
    }
}

/// One-shot observer: applies `on_visible` the first time an element
/// intersects, then stops watching it.
fn build_observer(
    on_visible: fn(&Element),
    threshold: Option<f64>,
    root_margin: &str,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for value in entries.iter() {
                let entry = value.unchecked_into::<IntersectionObserverEntry>();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_visible(&target);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        options.set_threshold(&JsValue::from(threshold));
    }
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok()?;
    Some((observer, callback))
}

fn setup(document: &Document) -> Vec<(IntersectionObserver, ObserverCallback)> {
    let mut observers = Vec::new();

    if let Some(pair) = build_observer(reveal, Some(FADE_IN_THRESHOLD), FADE_IN_ROOT_MARGIN) {
        for_each_matching(document, FADE_IN_SELECTOR, |element| pair.0.observe(element));
        observers.push(pair);
    }

    match build_observer(promote_lazy_image, None, LAZY_ROOT_MARGIN) {
        Some(pair) => {
            for_each_matching(document, LAZY_IMAGE_SELECTOR, |element| {
                pair.0.observe(element)
            });
            observers.push(pair);
        }
        // No observer support: load everything up front.
        None => for_each_matching(document, LAZY_IMAGE_SELECTOR, promote_lazy_image),
    }

    observers
}

/// Mounted once per page; wires the fade-in and lazy-load observers over the
/// rendered sections and tears them down on unmount.
#[function_component(ScrollEffects)]
pub fn scroll_effects() -> Html {
    use_effect_with_deps(
        |_| {
            let observers = web_sys::window()
                .and_then(|w| w.document())
                .map(|document| setup(&document))
                .unwrap_or_default();

            move || {
                for (observer, _callback) in &observers {
                    observer.disconnect();
                }
            }
        },
        (),
    );

    html! {
        <style>
            {r#"
                .service-card, .result-card, .testimonial {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .service-card.fade-in, .result-card.fade-in, .testimonial.fade-in {
                    opacity: 1;
                    transform: none;
                }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_selector_covers_every_card_kind() {
        for class in [".service-card", ".result-card", ".testimonial"] {
            assert!(FADE_IN_SELECTOR.split(", ").any(|s| s == class));
        }
    }

    #[test]
    fn lazy_selector_targets_deferred_images_only() {
        assert_eq!(LAZY_IMAGE_SELECTOR, "img[data-src]");
    }
}
