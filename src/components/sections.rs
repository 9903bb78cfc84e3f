use yew::prelude::*;

use crate::content::{feature_animation_delay, FEATURES, STATS, STEPS, TECH_SPECS};

#[function_component(StatsBar)]
pub fn stats_bar() -> Html {
    html! {
        <section class="stats-bar">
            { for STATS.iter().enumerate().map(|(idx, (value, label))| html! {
                <>
                    if idx > 0 {
                        <div class="stat-divider"></div>
                    }
                    <div class="stat">
                        <div class="stat-value">{*value}</div>
                        <div class="stat-label">{*label}</div>
                    </div>
                </>
            }) }
        </section>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="features" id="features">
            <div class="section-header">
                <div class="section-label">{"Platform Capabilities"}</div>
                <h2 class="section-title">{"Built for Operational Excellence"}</h2>
            </div>
            <div class="features-grid">
                { for FEATURES.iter().enumerate().map(|(idx, feature)| html! {
                    <div key={feature.title} class="feature-card" style={feature_animation_delay(idx)}>
                        <div class="feature-icon">{feature.icon}</div>
                        <h3 class="feature-title">{feature.title}</h3>
                        <p class="feature-desc">{feature.desc}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section class="how-it-works" id="how-it-works">
            <div class="section-header">
                <div class="section-label">{"Onboarding"}</div>
                <h2 class="section-title">{"From First Call to Go-Live"}</h2>
            </div>
            <ol class="steps">
                { for STEPS.iter().enumerate().map(|(idx, step)| html! {
                    <li key={step.title} class="step">
                        <div class="step-number">{(idx + 1).to_string()}</div>
                        <h3 class="step-title">{step.title}</h3>
                        <p class="step-desc">{step.desc}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(TechStack)]
pub fn tech_stack() -> Html {
    html! {
        <section class="tech-stack" id="tech">
            <div class="tech-content">
                <div class="tech-header">
                    <div class="section-label">{"Infrastructure"}</div>
                    <h2 class="section-title">{"Enterprise-Grade Architecture"}</h2>
                    <p class="tech-subtitle">
                        {"Built on AWS with Spring Boot and React. Containerized deployment with automated CI/CD pipelines."}
                    </p>
                </div>
                <div class="tech-specs">
                    { for TECH_SPECS.iter().map(|group| html! {
                        <div key={group.title} class="spec-group">
                            <div class="spec-title">{group.title}</div>
                            { for group.items.iter().map(|item| html! {
                                <div class="spec-item">
                                    <span class="spec-dot"></span>
                                    {*item}
                                </div>
                            }) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
