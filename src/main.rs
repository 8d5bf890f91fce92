use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod forms;
mod notifications;

mod components {
    pub mod before_after;
    pub mod booking_form;
    pub mod chat_widget;
    pub mod newsletter;
    pub mod notification;
    pub mod results_gallery;
    pub mod scroll_effects;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod privacy;
}

use pages::{faq::Faq, home::Home, privacy::PrivacyPolicy};

/// Height of the fixed nav bar; section scrolling stops below it.
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Scroll position past which the nav picks up its solid background.
const NAV_SCROLL_THRESHOLD: i32 = 50;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

/// Smooth-scroll so the section heading lands just below the fixed nav.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };

    let rect = element.get_bounding_client_rect();
    let current = window.scroll_y().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(rect.top() + current - NAV_OFFSET_PX);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("services", "Services"),
    ("results", "Results"),
    ("testimonials", "Testimonials"),
    ("booking", "Book Now"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right active"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 80px;
                        z-index: 2000;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(250, 248, 245, 0.97);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        max-width: 1100px;
                        height: 100%;
                        margin: 0 auto;
                        padding: 0 24px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.2rem;
                        font-weight: 600;
                        color: #7ba377;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 22px;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        padding: 0;
                        font-size: 0.9rem;
                        font-family: inherit;
                        color: #3a3a3a;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .nav-link:hover {
                        color: #7ba377;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #3a3a3a;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 80px;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 20px;
                            background: rgba(250, 248, 245, 0.98);
                            box-shadow: 0 8px 16px rgba(0, 0, 0, 0.08);
                        }
                        .nav-right.active { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Radiance"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_SECTIONS.iter().map(|(id, label)| {
                            let menu_open = menu_open.clone();
                            let id = *id;
                            let onclick = Callback::from(move |_: MouseEvent| {
                                menu_open.set(false);
                                scroll_to_section(id);
                            });
                            html! {
                                <button class="nav-link" {onclick} key={id}>
                                    { *label }
                                </button>
                            }
                        }).collect::<Html>()
                    }
                    <div onclick={{
                        let menu_open = menu_open.clone();
                        Callback::from(move |_: MouseEvent| menu_open.set(false))
                    }}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
