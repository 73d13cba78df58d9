use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::utils::preferences::{apply_dark_mode, load_dark_mode, save_dark_mode, LocalStore};

pub const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("features", "Features"),
    ("demo", "Demo"),
    ("dashboard", "Dashboard"),
];

/// Smooth-scrolls to the element with the given id, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("No section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Icon and tooltip for the theme toggle.
fn toggle_face(dark_mode: bool) -> (&'static str, &'static str) {
    if dark_mode {
        ("☀️", "Switch to Light Mode")
    } else {
        ("🌙", "Switch to Dark Mode")
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    // Read before the first render so the toggle never shows the wrong icon
    let dark_mode = use_state(|| load_dark_mode(&LocalStore::open()));

    {
        let enabled = *dark_mode;
        use_effect_with_deps(
            move |_| {
                if enabled {
                    apply_dark_mode(true);
                }
                || ()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let toggle_dark_mode = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: MouseEvent| {
            let enabled = !*dark_mode;
            dark_mode.set(enabled);
            save_dark_mode(&mut LocalStore::open(), enabled);
            apply_dark_mode(enabled);
        })
    };

    let (toggle_icon, toggle_title) = toggle_face(*dark_mode);

    html! {
        <nav class="navbar">
            <div class="navbar-container">
                <div class="navbar-brand">
                    <h1>{"🤖 KidSafe AI"}</h1>
                </div>
                <button class="mobile-menu-btn" onclick={toggle_menu}>{"☰"}</button>
                <div class={classes!("navbar-menu", (*menu_open).then_some("active"))}>
                    { for SECTIONS.iter().map(|&(id, label)| {
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            scroll_to_section(id);
                            menu_open.set(false);
                        });
                        html! { <a onclick={onclick}>{label}</a> }
                    }) }
                    <button
                        class="dark-mode-toggle"
                        onclick={toggle_dark_mode}
                        title={toggle_title}
                    >
                        { toggle_icon }
                    </button>
                    <button class="btn-get-started">{"Get Started"}</button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::preferences::MemoryStore;

    #[test]
    fn saved_dark_theme_shows_the_light_switch_first() {
        let mut store = MemoryStore::default();
        save_dark_mode(&mut store, true);
        assert_eq!(toggle_face(load_dark_mode(&store)), ("☀️", "Switch to Light Mode"));
    }

    #[test]
    fn fresh_visitor_gets_the_dark_switch() {
        let store = MemoryStore::default();
        assert_eq!(toggle_face(load_dark_mode(&store)).0, "🌙");
    }
}
