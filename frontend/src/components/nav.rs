use yew::prelude::*;

use crate::config;
use crate::menu::{MenuAction, NavigationMenuController};
use crate::scroll::NavStyle;
use crate::sections::Anchor;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub style: NavStyle,
    pub menu: NavigationMenuController,
    pub on_menu: Callback<MenuAction>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { style, menu, on_menu } = props;

    let toggle_menu = {
        let on_menu = on_menu.clone();
        Callback::from(move |_: MouseEvent| on_menu.emit(MenuAction::Toggle))
    };

    let close_menu = {
        let on_menu = on_menu.clone();
        Callback::from(move |_: MouseEvent| on_menu.emit(MenuAction::Close))
    };

    // No prevent_default here, the browser still follows the fragment.
    let navigate = |anchor: Anchor| {
        let on_menu = on_menu.clone();
        Callback::from(move |_: MouseEvent| on_menu.emit(MenuAction::Navigate(anchor)))
    };

    html! {
        <nav class={style.class()}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="logo-mark">{"in"}</span>
                    <span class="logo-text">{"Repost AI"}</span>
                </a>

                <div class="nav-links">
                    { for Anchor::ALL.into_iter().map(|anchor| html! {
                        <a key={anchor.id()} href={anchor.href()} class="nav-link">{anchor.label()}</a>
                    }) }
                </div>

                <div class="nav-actions">
                    <button class="nav-login">{"Log in"}</button>
                    <a href={config::APP_URL} class="nav-cta" rel="noopener noreferrer">
                        {"Start Generating"}
                    </a>
                </div>

                <button
                    class="burger-menu"
                    aria-label={if menu.is_open() { "Close menu" } else { "Open menu" }}
                    onclick={toggle_menu}
                >
                    { if menu.is_open() { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if menu.is_open() {
                    html! {
                        <div class="mobile-menu">
                            { for Anchor::ALL.into_iter().map(|anchor| html! {
                                <a
                                    key={anchor.id()}
                                    href={anchor.href()}
                                    class="mobile-link"
                                    onclick={navigate(anchor)}
                                >
                                    {anchor.label()}
                                </a>
                            }) }
                            <a
                                href={config::APP_URL}
                                class="mobile-cta"
                                rel="noopener noreferrer"
                                onclick={close_menu}
                            >
                                {"Get Started"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
