use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::typewriter::Reveal;

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub text: AttrValue,
    #[prop_or(28)]
    pub speed_ms: u32,
    #[prop_or(200)]
    pub start_delay_ms: u32,
    #[prop_or(true)]
    pub show_cursor: bool,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let reveal = use_state(|| Reveal::new(&props.text, prefers_reduced_motion()));

    // Restart from empty whenever the source text changes.
    {
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |text: &AttrValue| {
                let mut next = (*reveal).clone();
                if next.retarget(text, prefers_reduced_motion()) {
                    reveal.set(next);
                }
                || ()
            },
            props.text.clone(),
        );
    }

    // One pending timeout at a time. Dropping it on cleanup cancels it, so a
    // stale tick can never land after a text change or unmount.
    {
        let handle = reveal.clone();
        use_effect_with_deps(
            move |(current, start_delay_ms, speed_ms): &(Reveal, u32, u32)| {
                let pending = current.next_delay(*start_delay_ms, *speed_ms).map(|delay| {
                    let next = current.advanced();
                    Timeout::new(delay, move || handle.set(next))
                });
                move || drop(pending)
            },
            ((*reveal).clone(), props.start_delay_ms, props.speed_ms),
        );
    }

    let cursor = props.show_cursor && !reveal.is_complete();

    html! {
        <>
            { reveal.visible().to_string() }
            if cursor {
                <span class="typewriter-cursor" aria-hidden="true">{"|"}</span>
            }
        </>
    }
}
