use yew::prelude::*;

use crate::content::METRICS;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub active_metric: usize,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-grid"></div>
            <div class="hero-content">
                <div class="badge">{"Production-Tested Across 10 Clinics"}</div>
                <h1 class="hero-title">
                    {"Patient Management"}
                    <br />
                    <span class="hero-title-accent">{"Built for Scale"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Centralized operations platform for multi-clinic surgical practices."}
                    <br />
                    {"Enterprise reliability. Surgical precision."}
                </p>
                <div class="hero-cta">
                    <a href="#contact" class="btn-primary">{"Schedule Consultation"}</a>
                    <a href="#tech" class="btn-secondary">{"View Technical Specs →"}</a>
                </div>
            </div>

            // Rotating metrics
            <div class="metrics-display">
                { for METRICS.iter().enumerate().map(|(idx, metric)| html! {
                    <div
                        key={metric.label}
                        class={classes!("metric-card", (props.active_metric == idx).then(|| "active"))}
                    >
                        <div class="metric-value">{metric.value}</div>
                        <div class="metric-label">{metric.label}</div>
                        <div class="metric-desc">{metric.desc}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
