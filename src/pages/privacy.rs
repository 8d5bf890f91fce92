use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <style>
                {r#"
                    .legal-page {
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 140px 24px 80px;
                        font-family: 'Inter', -apple-system, sans-serif;
                        color: #3a3a3a;
                        line-height: 1.7;
                    }
                    .legal-page h1 {
                        margin-bottom: 8px;
                    }
                    .legal-page .updated {
                        color: #999;
                        font-size: 0.85rem;
                        margin-bottom: 32px;
                    }
                    .legal-page h2 {
                        margin: 32px 0 12px;
                        font-size: 1.2rem;
                        color: #7ba377;
                    }
                "#}
            </style>
            <h1>{"Privacy Policy"}</h1>
            <p class="updated">{"Last updated: August 2026"}</p>

            <h2>{"Information We Collect"}</h2>
            <p>
                {"When you request a consultation or subscribe to our newsletter we \
                  collect the details you provide: your name, email address, phone \
                  number and any message you include."}
            </p>

            <h2>{"How We Use It"}</h2>
            <p>
                {"We use your contact details to schedule your consultation, answer \
                  your questions and, if you opted in, send occasional offers. We \
                  never sell your information."}
            </p>

            <h2>{"Medical Information"}</h2>
            <p>
                {"Any health information you share during a consultation is handled \
                  per HIPAA requirements and stored separately from marketing data."}
            </p>

            <h2>{"Contact"}</h2>
            <p>
                {"Questions about this policy? Call us at (555) 123-4567 or visit the \
                  spa during business hours."}
            </p>

            <p>
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            </p>
        </div>
    }
}
