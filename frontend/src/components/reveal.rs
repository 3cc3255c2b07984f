use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom;
use crate::interaction::reveal::reveal_style;

/// Observer that stops watching each target after its first intersection.
/// Disconnects when dropped.
struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(target: &Element, on_visible: impl Fn() + 'static) -> Result<OnceObserver, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                observer.unobserve(&entry.target());
                on_visible();
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);
    Ok(OnceObserver { observer, _callback: callback })
}

/// True once the referenced element has scrolled into view at least once.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = node.cast::<Element>().and_then(|element| {
                    let on_visible = {
                        let revealed = revealed.clone();
                        move || revealed.set(true)
                    };
                    match observe_once(&element, on_visible) {
                        Ok(watch) => Some(watch),
                        Err(err) => {
                            // No observer support: show the content straight away.
                            dom::warn_js("viewport observer unavailable", err);
                            revealed.set(true);
                            None
                        }
                    }
                });
                move || drop(watch)
            },
            node,
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: AttrValue,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class="section-header" style={reveal_style(revealed, false)}>
            <h2 class="section-title">{ props.title.clone() }</h2>
            {
                if props.subtitle.is_empty() {
                    html! {}
                } else {
                    html! { <p class="section-subtitle">{ props.subtitle.clone() }</p> }
                }
            }
        </div>
    }
}
