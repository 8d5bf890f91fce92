use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

/// Where the reveal edge sits, as a percentage of the container width.
///
/// A container that has not been laid out yet reports zero width; treat
/// that as fully hidden rather than dividing by zero.
pub fn reveal_percent(pointer_x: f64, rect_left: f64, rect_width: f64) -> f64 {
    if rect_width <= 0.0 {
        return 0.0;
    }
    let percent = (pointer_x - rect_left) / rect_width * 100.0;
    percent.clamp(0.0, 100.0)
}

/// CSS clip-path that hides everything to the right of the reveal edge.
pub fn clip_inset(percent: f64) -> String {
    format!("inset(0 {}% 0 0)", 100.0 - percent)
}

#[derive(Properties, PartialEq)]
pub struct BeforeAfterProps {
    pub before_src: String,
    pub after_src: String,
    #[prop_or(50.0)]
    pub initial_percent: f64,
    #[prop_or_default]
    pub alt: String,
}

#[function_component(BeforeAfterSlider)]
pub fn before_after_slider(props: &BeforeAfterProps) -> Html {
    let percent = use_state(|| props.initial_percent.clamp(0.0, 100.0));
    let engaged = use_mut_ref(|| false);
    let container_ref = use_node_ref();

    // Pointer release anywhere on the page ends the drag, even when the
    // cursor has left the container.
    {
        let engaged = engaged.clone();
        use_effect_with_deps(
            move |_| {
                let release = Closure::wrap(Box::new(move || {
                    *engaged.borrow_mut() = false;
                }) as Box<dyn FnMut()>);

                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let _ = document.add_event_listener_with_callback(
                        "mouseup",
                        release.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "touchend",
                        release.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let _ = document.remove_event_listener_with_callback(
                            "mouseup",
                            release.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "touchend",
                            release.as_ref().unchecked_ref(),
                        );
                    }
                    drop(release);
                }
            },
            (),
        );
    }

    let apply_x = {
        let percent = percent.clone();
        let container_ref = container_ref.clone();
        move |client_x: f64| {
            if let Some(container) = container_ref.cast::<HtmlElement>() {
                let rect = container.get_bounding_client_rect();
                percent.set(reveal_percent(client_x, rect.left(), rect.width()));
            }
        }
    };

    let on_handle_mousedown = {
        let engaged = engaged.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            *engaged.borrow_mut() = true;
        })
    };

    let on_handle_touchstart = {
        let engaged = engaged.clone();
        Callback::from(move |_: TouchEvent| {
            *engaged.borrow_mut() = true;
        })
    };

    let on_mousemove = {
        let engaged = engaged.clone();
        let apply_x = apply_x.clone();
        Callback::from(move |e: MouseEvent| {
            if *engaged.borrow() {
                apply_x(e.client_x() as f64);
            }
        })
    };

    let on_touchmove = {
        let engaged = engaged.clone();
        let apply_x = apply_x.clone();
        Callback::from(move |e: TouchEvent| {
            if !*engaged.borrow() {
                return;
            }
            if let Some(touch) = e.touches().get(0) {
                apply_x(touch.client_x() as f64);
            }
        })
    };

    // A plain click repositions the edge without a drag.
    let on_click = {
        let apply_x = apply_x.clone();
        Callback::from(move |e: MouseEvent| {
            apply_x(e.client_x() as f64);
        })
    };

    let p = *percent;

    html! {
        <div
            ref={container_ref}
            class="before-after-slider"
            onmousemove={on_mousemove}
            ontouchmove={on_touchmove}
            onclick={on_click}
        >
            <style>
                {r#"
                    .before-after-slider {
                        position: relative;
                        overflow: hidden;
                        border-radius: 12px;
                        user-select: none;
                        cursor: ew-resize;
                        aspect-ratio: 4 / 3;
                    }
                    .before-after-slider img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        pointer-events: none;
                    }
                    .slider-handle {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 4px;
                        margin-left: -2px;
                        background: #fff;
                        box-shadow: 0 0 8px rgba(0, 0, 0, 0.4);
                        cursor: ew-resize;
                    }
                    .slider-handle::after {
                        content: '\2194';
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 36px;
                        height: 36px;
                        border-radius: 50%;
                        background: #fff;
                        color: #7ba377;
                        font-size: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .ba-label {
                        position: absolute;
                        top: 12px;
                        padding: 4px 10px;
                        border-radius: 999px;
                        background: rgba(0, 0, 0, 0.55);
                        color: #fff;
                        font-size: 0.75rem;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                    }
                "#}
            </style>
            <img src={props.before_src.clone()} alt={format!("{} before", props.alt)} />
            <img
                class="after-image"
                src={props.after_src.clone()}
                alt={format!("{} after", props.alt)}
                style={format!("clip-path: {};", clip_inset(p))}
            />
            <div
                class="slider-handle"
                style={format!("left: {}%;", p)}
                onmousedown={on_handle_mousedown}
                ontouchstart={on_handle_touchstart}
            >
            </div>
            <span class="ba-label" style="left: 12px;">{"After"}</span>
            <span class="ba-label" style="right: 12px;">{"Before"}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_fifty() {
        assert_eq!(reveal_percent(200.0, 100.0, 200.0), 50.0);
    }

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(reveal_percent(50.0, 100.0, 200.0), 0.0);
        assert_eq!(reveal_percent(500.0, 100.0, 200.0), 100.0);
    }

    #[test]
    fn zero_width_container_yields_zero() {
        assert_eq!(reveal_percent(150.0, 100.0, 0.0), 0.0);
        assert_eq!(reveal_percent(150.0, 100.0, -1.0), 0.0);
    }

    #[test]
    fn repeated_updates_at_one_position_agree() {
        let first = reveal_percent(160.0, 100.0, 200.0);
        let second = reveal_percent(160.0, 100.0, 200.0);
        assert_eq!(first, second);
        assert_eq!(clip_inset(first), clip_inset(second));
    }

    #[test]
    fn monotonic_in_pointer_x() {
        let a = reveal_percent(120.0, 100.0, 200.0);
        let b = reveal_percent(180.0, 100.0, 200.0);
        assert!(a < b);
    }

    #[test]
    fn clip_hides_right_of_edge() {
        assert_eq!(clip_inset(50.0), "inset(0 50% 0 0)");
        assert_eq!(clip_inset(100.0), "inset(0 0% 0 0)");
        assert_eq!(clip_inset(0.0), "inset(0 100% 0 0)");
    }
}
