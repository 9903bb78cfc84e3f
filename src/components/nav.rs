use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// 0.0 at the top of the page, 1.0 once scrolled past the fade distance.
    pub opacity: f64,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { opacity, menu_open, on_toggle_menu } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="nav" style={format!("opacity: {};", opacity)}>
            <div class="nav-content">
                <Logo />
                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features">{"Features"}</a>
                    <a href="#tech">{"Technology"}</a>
                    <a href="#contact" class="nav-cta">{"Request Demo"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <div class="logo">
            <span class="logo-bracket">{"["}</span>
            {"ClinicalOps"}
            <span class="logo-bracket">{"]"}</span>
        </div>
    }
}
