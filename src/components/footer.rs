use yew::prelude::*;

use crate::components::nav::Logo;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <Logo />
                    <p class="footer-tagline">
                        {"Enterprise patient management for modern surgical practices."}
                    </p>
                </div>
                <div class="footer-links">
                    <div class="footer-column">
                        <div class="footer-column-title">{"Product"}</div>
                        <a href="#features">{"Features"}</a>
                        <a href="#tech">{"Technology"}</a>
                        <a href="#">{"Security"}</a>
                        <a href="#">{"Pricing"}</a>
                    </div>
                    <div class="footer-column">
                        <div class="footer-column-title">{"Company"}</div>
                        <a href="#">{"About"}</a>
                        <a href="#">{"Case Studies"}</a>
                        <a href="#contact">{"Contact"}</a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <div class="footer-legal">{"© 2025 ClinicalOps. Built with precision."}</div>
                <div class="footer-tech">{"Powered by AWS • Spring Boot • React"}</div>
            </div>
        </footer>
    }
}
