use yew::prelude::*;
use yew::{Children, Properties};

/// Clicking an open item closes it; clicking a closed item opens it and
/// closes whichever item was open before.
pub fn next_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

const QUESTIONS: [(&str, &str); 6] = [
    (
        "Do injectables look natural?",
        "Our providers take a conservative, build-up-gradually approach. Most clients \
         hear \"you look rested\", not \"what did you have done?\".",
    ),
    (
        "Does laser treatment hurt?",
        "Most clients describe it as a warm snapping sensation. We use cooling and \
         numbing options so sessions stay comfortable.",
    ),
    (
        "How long do results last?",
        "Botox typically lasts 3 to 4 months, fillers 6 to 18 months depending on the \
         product and area. Laser and body contouring results are long-lasting with \
         occasional maintenance.",
    ),
    (
        "Is there downtime?",
        "Injectables and facials have little to none. Laser resurfacing may involve a \
         few days of redness; we will walk you through aftercare at your consultation.",
    ),
    (
        "Who performs the treatments?",
        "Every treatment is performed by a licensed provider under physician \
         supervision.",
    ),
    (
        "What happens at the free consultation?",
        "A provider reviews your goals and medical history, examines your skin and \
         builds a treatment plan with transparent pricing. There is no obligation to \
         book anything.",
    ),
];

#[function_component(Faq)]
pub fn faq() -> Html {
    // One item open at a time; None means all collapsed.
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-page">
            <style>
                {r#"
                    .faq-page {
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 140px 24px 80px;
                        font-family: 'Inter', -apple-system, sans-serif;
                        color: #3a3a3a;
                    }
                    .faq-page h1 {
                        text-align: center;
                        margin-bottom: 40px;
                    }
                    .faq-item {
                        border-bottom: 1px solid #e5e2dd;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 18px 4px;
                        background: none;
                        border: none;
                        font-size: 1rem;
                        font-family: inherit;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-item.open .faq-question {
                        color: #7ba377;
                    }
                    .toggle-icon {
                        font-size: 1.2rem;
                        color: #7ba377;
                    }
                    .faq-answer {
                        padding: 0 4px 18px;
                        color: #777;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <h1>{"Frequently Asked Questions"}</h1>
            {
                QUESTIONS.iter().enumerate().map(|(index, (question, answer))| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_| {
                            open.set(next_open(*open, index));
                        })
                    };
                    html! {
                        <FaqItem
                            key={index}
                            question={*question}
                            open={*open == Some(index)}
                            {on_toggle}
                        >
                            <p>{ *answer }</p>
                        </FaqItem>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::next_open;

    #[test]
    fn opening_replaces_previous() {
        assert_eq!(next_open(None, 2), Some(2));
        assert_eq!(next_open(Some(2), 0), Some(0));
    }

    #[test]
    fn clicking_open_item_collapses() {
        assert_eq!(next_open(Some(3), 3), None);
    }
}
