//! Explicitly rendered reCAPTCHA v2 checkbox.
//!
//! `index.html` loads `api.js?render=explicit`, so the widget only appears
//! once this component finds `grecaptcha` and calls `render` on its slot.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use web_sys::{window, Element};
use yew::prelude::*;

const LOAD_POLL_MS: u32 = 250;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = grecaptcha, js_name = render, catch)]
    fn render_widget(container: &Element, params: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = grecaptcha, js_name = reset, catch)]
    fn reset_widget(widget_id: &JsValue) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct WidgetParams<'a> {
    sitekey: &'a str,
    theme: &'a str,
}

fn script_loaded() -> bool {
    let Some(window) = window() else { return false };
    Reflect::get(&window, &JsValue::from_str("grecaptcha"))
        .ok()
        .filter(|api| api.is_object())
        .and_then(|api| Reflect::get(&api, &JsValue::from_str("render")).ok())
        .map(|render| render.is_function())
        .unwrap_or(false)
}

/// JS callbacks handed to the widget. They must outlive it.
struct WidgetCallbacks {
    on_token: Closure<dyn Fn(String)>,
    on_expired: Closure<dyn Fn()>,
}

fn widget_params(site_key: &str, callbacks: &WidgetCallbacks) -> Result<JsValue, JsValue> {
    let params = serde_wasm_bindgen::to_value(&WidgetParams {
        sitekey: site_key,
        theme: "dark",
    })?;
    let expired: &JsValue = callbacks.on_expired.as_ref();
    Reflect::set(&params, &"callback".into(), callbacks.on_token.as_ref())?;
    Reflect::set(&params, &"expired-callback".into(), expired)?;
    Reflect::set(&params, &"error-callback".into(), expired)?;
    Ok(params)
}

#[derive(Properties, PartialEq)]
pub struct ReCaptchaProps {
    pub site_key: AttrValue,
    /// Bumping this resets the rendered widget.
    pub reset_generation: u32,
    pub on_token: Callback<String>,
    pub on_expired: Callback<()>,
}

#[function_component(ReCaptcha)]
pub fn recaptcha(props: &ReCaptchaProps) -> Html {
    let slot = use_node_ref();
    let widget_id = use_mut_ref(|| None::<JsValue>);

    {
        let slot = slot.clone();
        let widget_id = widget_id.clone();
        let on_token = props.on_token.clone();
        let on_expired = props.on_expired.clone();
        use_effect_with_deps(
            move |site_key: &AttrValue| {
                let callbacks = Rc::new(WidgetCallbacks {
                    on_token: Closure::new(move |token: String| on_token.emit(token)),
                    on_expired: Closure::new(move || on_expired.emit(())),
                });
                let site_key = site_key.to_string();
                let poller = Rc::new(RefCell::new(None::<Interval>));

                // Polls until the script is ready, then stops after the
                // first render attempt either way.
                *poller.borrow_mut() = Some({
                    let callbacks = callbacks.clone();
                    let widget_id = widget_id.clone();
                    let poller = poller.clone();
                    Interval::new(LOAD_POLL_MS, move || {
                        if !script_loaded() {
                            return;
                        }
                        let Some(container) = slot.cast::<Element>() else { return };
                        let rendered = widget_params(&site_key, &callbacks)
                            .and_then(|params| render_widget(&container, &params));
                        match rendered {
                            Ok(id) => {
                                debug!("reCAPTCHA widget rendered");
                                *widget_id.borrow_mut() = Some(id);
                            }
                            Err(e) => warn!("reCAPTCHA render failed: {:?}", e),
                        }
                        let finished = poller.borrow_mut().take();
                        drop(finished);
                    })
                });

                move || {
                    poller.borrow_mut().take();
                    widget_id.borrow_mut().take();
                    drop(callbacks);
                }
            },
            props.site_key.clone(),
        );
    }

    {
        let widget_id = widget_id.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(id) = widget_id.borrow().as_ref() {
                    if let Err(e) = reset_widget(id) {
                        warn!("reCAPTCHA reset failed: {:?}", e);
                    }
                }
                || ()
            },
            props.reset_generation,
        );
    }

    html! {
        <div class="recaptcha-slot" ref={slot}></div>
    }
}
