//! Page anchors and smooth in-page navigation.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};
use yew::prelude::*;

use crate::i18n::CopyText;

/// Sections reachable from the navigation bar and the call-to-action links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Services,
    Method,
    Cases,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Services,
        Section::Method,
        Section::Cases,
        Section::About,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Services => "servicos",
            Section::Method => "metodo",
            Section::Cases => "cases",
            Section::About => "sobre",
            Section::Contact => "contato",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Section::Services => "#servicos",
            Section::Method => "#metodo",
            Section::Cases => "#cases",
            Section::About => "#sobre",
            Section::Contact => "#contato",
        }
    }

    pub fn nav_label(self, copy: &CopyText) -> &'static str {
        match self {
            Section::Services => copy.nav_services,
            Section::Method => copy.nav_method,
            Section::Cases => copy.nav_cases,
            Section::About => copy.nav_about,
            Section::Contact => copy.nav_contact,
        }
    }
}

/// Element id an in-page href points at. `"#"` and external links yield `None`.
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_into_view(element: &Element) {
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    options.block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_section(section: Section) {
    if let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    {
        scroll_into_view(&target);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn handle_anchor_click(event: &MouseEvent) {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };

    let anchor = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("a[data-scroll]").ok().flatten());
    let Some(anchor) = anchor else { return };
    let Some(href) = anchor.get_attribute("href") else { return };
    let Some(id) = fragment(&href) else { return };
    let Some(target) = document.get_element_by_id(id) else { return };

    event.prevent_default();
    scroll_into_view(&target);
    if let Ok(history) = window.history() {
        if history
            .replace_state_with_url(&JsValue::NULL, "", Some(&href))
            .is_err()
        {
            debug!("Could not record {} in history", href);
        }
    }
}

/// Intercepts clicks on `a[data-scroll]` links for the lifetime of the
/// calling component.
#[hook]
pub fn use_smooth_scroll() {
    use_effect_with_deps(
        move |_| {
            let document = window().and_then(|w| w.document());
            let listener = Closure::<dyn Fn(MouseEvent)>::new(|event: MouseEvent| {
                handle_anchor_click(&event);
            });

            if let Some(document) = &document {
                let _ = document
                    .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_come_from_hash_links_only() {
        assert_eq!(fragment("#contato"), Some("contato"));
        assert_eq!(fragment("#"), None);
        assert_eq!(fragment("https://xval.com.br/"), None);
        assert_eq!(fragment(""), None);
    }

    #[test]
    fn section_links_point_at_their_anchor() {
        for section in Section::ALL {
            assert_eq!(fragment(section.href()), Some(section.id()));
        }
    }
}
