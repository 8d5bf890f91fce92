use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics;
use crate::components::booking_form::BookingForm;
use crate::components::chat_widget::ChatLauncher;
use crate::components::newsletter::NewsletterSignup;
use crate::components::results_gallery::ResultsGallery;
use crate::components::scroll_effects::ScrollEffects;
use crate::{scroll_to_section, Route};

const PHONE_DISPLAY: &str = "(555) 123-4567";
const PHONE_HREF: &str = "tel:+15551234567";

struct Service {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Injectables",
        blurb: "Botox and dermal fillers administered by board-certified providers.",
    },
    Service {
        title: "Laser Treatments",
        blurb: "Resurfacing, hair removal and pigment correction with medical-grade lasers.",
    },
    Service {
        title: "Medical Facials",
        blurb: "Clinical-strength peels and hydrafacials tailored to your skin.",
    },
    Service {
        title: "Body Contouring",
        blurb: "Non-invasive sculpting with no downtime.",
    },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The most professional med spa I've been to. My results looked natural \
                and the team answered every question.",
        author: "Danielle R.",
    },
    Testimonial {
        quote: "Booked a free consultation on a Tuesday, had my first laser session \
                that same week. Couldn't be happier.",
        author: "Maya K.",
    },
    Testimonial {
        quote: "Three years as a client and I wouldn't go anywhere else.",
        author: "Priya S.",
    },
];

/// CTA buttons report a click event and then scroll to the booking section.
fn cta(label: &'static str, section: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        analytics::dispatch(&analytics::cta_click(label, section));
        scroll_to_section("booking");
    })
}

#[function_component(Home)]
pub fn home() -> Html {
    let on_phone_click = Callback::from(|_: MouseEvent| {
        analytics::dispatch(&analytics::phone_click(PHONE_HREF));
    });

    html! {
        <div class="home-page">
            <ScrollEffects />
            <style>
                {r#"
                    .home-page {
                        color: #3a3a3a;
                        font-family: 'Inter', -apple-system, sans-serif;
                    }
                    .home-page section {
                        padding: 80px 24px;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .hero {
                        text-align: center;
                        padding-top: 140px;
                    }
                    .hero h1 {
                        font-size: 2.8rem;
                        font-weight: 600;
                        margin-bottom: 16px;
                    }
                    .hero .subtitle {
                        color: #777;
                        font-size: 1.1rem;
                        margin-bottom: 32px;
                    }
                    .hero-photo {
                        display: block;
                        width: 100%;
                        max-width: 820px;
                        margin: 48px auto 0;
                        border-radius: 16px;
                        background: #efede9;
                        min-height: 240px;
                        object-fit: cover;
                    }
                    .cta-button {
                        padding: 14px 32px;
                        border: none;
                        border-radius: 999px;
                        background: linear-gradient(135deg, #7ba377, #5f8a5c);
                        color: #fff;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .section-heading {
                        text-align: center;
                        font-size: 2rem;
                        margin-bottom: 40px;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 24px;
                    }
                    .service-card {
                        padding: 28px;
                        border-radius: 12px;
                        background: #faf8f5;
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                    }
                    .service-card h3 {
                        margin-bottom: 8px;
                    }
                    .service-card p {
                        color: #777;
                        font-size: 0.9rem;
                    }
                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 24px;
                    }
                    .testimonial {
                        margin: 0;
                        padding: 24px;
                        border-left: 3px solid #7ba377;
                        background: #faf8f5;
                        border-radius: 0 12px 12px 0;
                        font-style: italic;
                    }
                    .testimonial footer {
                        margin-top: 12px;
                        font-style: normal;
                        font-weight: 600;
                        color: #7ba377;
                    }
                    .site-footer {
                        background: #2e332d;
                        color: #d9ded7;
                        padding: 60px 24px 30px;
                    }
                    .site-footer .footer-grid {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 40px;
                    }
                    .site-footer a {
                        color: #d9ded7;
                    }
                "#}
            </style>

            <section id="home" class="hero">
                <h1>{"Radiance Medical Spa"}</h1>
                <p class="subtitle">
                    {"Physician-supervised aesthetics in a calm, modern setting."}
                </p>
                <button class="cta-button" onclick={cta("Book Free Consultation", "hero")}>
                    {"Book Free Consultation"}
                </button>
                <img
                    class="hero-photo"
                    data-src="/assets/spa-interior.jpg"
                    alt="Radiance treatment room"
                />
            </section>

            <section id="services">
                <h2 class="section-heading">{"Our Services"}</h2>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card" key={service.title}>
                                <h3>{ service.title }</h3>
                                <p>{ service.blurb }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="results">
                <h2 class="section-heading">{"Real Results"}</h2>
                <ResultsGallery />
            </section>

            <section id="testimonials">
                <h2 class="section-heading">{"What Clients Say"}</h2>
                <div class="testimonials-grid">
                    {
                        TESTIMONIALS.iter().map(|t| html! {
                            <blockquote class="testimonial" key={t.author}>
                                { t.quote }
                                <footer>{ t.author }</footer>
                            </blockquote>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="booking">
                <h2 class="section-heading">{"Book Your Free Consultation"}</h2>
                <BookingForm />
            </section>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div>
                        <h4>{"Radiance Medical Spa"}</h4>
                        <p>{"428 Willow Lane, Suite 200"}</p>
                        <p>
                            <a href={PHONE_HREF} onclick={on_phone_click}>
                                { PHONE_DISPLAY }
                            </a>
                        </p>
                    </div>
                    <div>
                        <h4>{"Hours"}</h4>
                        <p>{"Mon-Fri: 9am - 7pm"}</p>
                        <p>{"Sat: 10am - 4pm"}</p>
                        <p>
                            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        </p>
                    </div>
                    <NewsletterSignup />
                </div>
            </footer>

            <ChatLauncher />
        </div>
    }
}
