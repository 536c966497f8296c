use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::components::logo::BrandMark;
use crate::content::icons::Icon;
use crate::i18n::Locale;
use crate::preferences::use_language;
use crate::scroll::{scroll_to_section, scroll_to_top, Section};

const SCROLLED_OFFSET: f64 = 8.0;

#[derive(Properties, PartialEq)]
pub struct LanguageSwitchProps {
    #[prop_or_default]
    pub class: Classes,
}

/// PT-BR / EN-US toggle bound to the language context.
#[function_component(LanguageSwitch)]
pub fn language_switch(props: &LanguageSwitchProps) -> Html {
    let language = use_language();
    let copy = language.locale.copy();

    html! {
        <div class={classes!("lang-switch", props.class.clone())}>
            { Icon::Globe.view("lang-icon") }
            <span class="lang-label">{copy.lang_label}</span>
            { for Locale::ALL.into_iter().map(|locale| {
                let set = language.set.clone();
                let active = language.locale == locale;
                html! {
                    <button
                        type="button"
                        class={classes!("lang-option", active.then_some("active"))}
                        aria-pressed={active.to_string()}
                        onclick={Callback::from(move |_: MouseEvent| set.emit(locale))}
                    >
                        {locale.switch_label()}
                    </button>
                }
            }) }
        </div>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let language = use_language();
    let copy = language.locale.copy();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new({
                    let window = window.clone();
                    move || {
                        let offset = window
                            .as_ref()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        is_scrolled.set(offset > SCROLLED_OFFSET);
                    }
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Link clicks still bubble to the smooth-scroll listener.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let go_top = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_top();
        })
    };

    let view_services = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            scroll_to_section(Section::Services);
        })
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" aria-label="XVAL" onclick={go_top}>
                    <BrandMark size={36} wordmark={false} />
                    <span class="nav-tagline">{copy.footer_tagline}</span>
                </a>

                <nav class={classes!("nav-links", (*menu_open).then_some("mobile-menu-open"))}>
                    { for Section::ALL.into_iter().map(|section| html! {
                        <a
                            href={section.href()}
                            data-scroll="true"
                            class="nav-link"
                            onclick={close_menu.clone()}
                        >
                            {section.nav_label(copy)}
                        </a>
                    }) }
                </nav>

                <div class="nav-actions">
                    <LanguageSwitch class="desktop-only" />
                    <a href={Section::Contact.href()} data-scroll="true" class="btn btn-outline desktop-only">
                        {copy.cta_talk}
                    </a>
                    <button type="button" class="btn btn-primary" onclick={view_services}>
                        {copy.cta_view_services}
                    </button>
                    <button
                        type="button"
                        class="burger-menu"
                        aria-label={copy.nav_menu}
                        aria-expanded={(*menu_open).to_string()}
                        onclick={toggle_menu}
                    >
                        { if *menu_open { Icon::Close.view("burger-icon") } else { Icon::Menu.view("burger-icon") } }
                    </button>
                </div>
            </div>
            <style>{r#"
.top-nav {
    position: sticky;
    top: 0;
    z-index: 40;
    background: rgba(10, 10, 15, 0.85);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    transition: box-shadow 0.3s ease;
}
.top-nav.scrolled {
    box-shadow: 0 8px 28px rgba(0, 0, 0, 0.45);
}
.nav-content {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0.75rem 1rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}
.nav-logo {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    text-decoration: none;
}
.nav-tagline {
    font-size: 0.75rem;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.55);
}
.nav-links {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.nav-link {
    color: rgba(255, 255, 255, 0.7);
    font-size: 0.9rem;
    font-weight: 700;
    text-decoration: none;
    transition: color 0.2s ease;
}
.nav-link:hover {
    color: #ffffff;
}
.nav-actions {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.lang-switch {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0.5rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.05);
}
.lang-icon {
    width: 1rem;
    height: 1rem;
    color: rgba(255, 255, 255, 0.45);
}
.lang-label {
    font-size: 0.75rem;
    font-weight: 800;
    color: rgba(255, 255, 255, 0.6);
}
.lang-option {
    border: none;
    border-radius: 0.75rem;
    padding: 0.25rem 0.5rem;
    font-size: 0.75rem;
    font-weight: 800;
    background: transparent;
    color: rgba(255, 255, 255, 0.65);
    cursor: pointer;
}
.lang-option.active {
    background: rgba(182, 255, 74, 0.18);
    color: #b6ff4a;
}
.burger-menu {
    display: none;
    background: none;
    border: none;
    color: #ffffff;
    cursor: pointer;
    padding: 0.25rem;
}
.burger-icon {
    width: 1.5rem;
    height: 1.5rem;
}
@media (max-width: 1024px) {
    .desktop-only,
    .nav-tagline {
        display: none;
    }
}
@media (max-width: 768px) {
    .burger-menu {
        display: block;
    }
    .nav-links {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 1rem;
        background: rgba(10, 10, 15, 0.97);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .nav-links.mobile-menu-open {
        display: flex;
    }
}
"#}</style>
        </header>
    }
}
