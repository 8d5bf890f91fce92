use yew::prelude::*;

use super::before_after::BeforeAfterSlider;

/// Whether a card with this category shows under the active filter.
pub fn visible(filter: &str, category: &str) -> bool {
    filter == "all" || filter == category
}

const FILTERS: [(&str, &str); 4] = [
    ("all", "All Results"),
    ("injectables", "Injectables"),
    ("laser", "Laser"),
    ("body", "Body Contouring"),
];

struct ResultCard {
    category: &'static str,
    title: &'static str,
    detail: &'static str,
    before_src: &'static str,
    after_src: &'static str,
}

const CARDS: [ResultCard; 4] = [
    ResultCard {
        category: "injectables",
        title: "Lip Filler",
        detail: "One session, results at 2 weeks",
        before_src: "/assets/results/lip-before.jpg",
        after_src: "/assets/results/lip-after.jpg",
    },
    ResultCard {
        category: "injectables",
        title: "Forehead Lines",
        detail: "Results at 14 days",
        before_src: "/assets/results/forehead-before.jpg",
        after_src: "/assets/results/forehead-after.jpg",
    },
    ResultCard {
        category: "laser",
        title: "Sun Damage Correction",
        detail: "Three sessions over 12 weeks",
        before_src: "/assets/results/laser-before.jpg",
        after_src: "/assets/results/laser-after.jpg",
    },
    ResultCard {
        category: "body",
        title: "Abdomen Contouring",
        detail: "Six sessions, results at 3 months",
        before_src: "/assets/results/body-before.jpg",
        after_src: "/assets/results/body-after.jpg",
    },
];

#[function_component(ResultsGallery)]
pub fn results_gallery() -> Html {
    let active = use_state(|| "all");

    html! {
        <div class="results-gallery">
            <style>
                {r#"
                    .results-filters {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 10px;
                        justify-content: center;
                        margin-bottom: 30px;
                    }
                    .filter-btn {
                        padding: 8px 18px;
                        border: 1px solid #7ba377;
                        border-radius: 999px;
                        background: transparent;
                        color: #7ba377;
                        cursor: pointer;
                        font-size: 0.85rem;
                    }
                    .filter-btn.active {
                        background: #7ba377;
                        color: #fff;
                    }
                    .results-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 24px;
                    }
                    .result-card h4 {
                        margin: 12px 0 4px;
                    }
                    .result-card p {
                        margin: 0;
                        font-size: 0.85rem;
                        color: #777;
                    }
                "#}
            </style>
            <div class="results-filters">
                {
                    FILTERS.iter().map(|(value, label)| {
                        let active_handle = active.clone();
                        let value = *value;
                        let onclick = Callback::from(move |_: MouseEvent| {
                            active_handle.set(value);
                        });
                        html! {
                            <button
                                class={classes!("filter-btn", (*active == value).then_some("active"))}
                                {onclick}
                            >
                                { *label }
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="results-grid">
                {
                    // Hidden cards stay mounted so slider state and fade-in
                    // survive filter changes.
                    CARDS.iter().map(|card| {
                        let shown = visible(*active, card.category);
                        html! {
                            <div
                                class="result-card"
                                key={card.title}
                                style={(!shown).then_some("display: none;")}
                            >
                                <BeforeAfterSlider
                                    before_src={card.before_src}
                                    after_src={card.after_src}
                                    alt={card.title}
                                />
                                <h4>{ card.title }</h4>
                                <p>{ card.detail }</p>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_shows_everything() {
        for card in &CARDS {
            assert!(visible("all", card.category));
        }
    }

    #[test]
    fn category_filter_matches_exactly() {
        assert!(visible("laser", "laser"));
        assert!(!visible("laser", "injectables"));
        assert!(!visible("laser", "all"));
    }
}
