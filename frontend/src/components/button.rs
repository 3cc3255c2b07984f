use log::debug;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::interaction::feedback::{PointerEvent, PressFeedback};
use crate::interaction::ripple::{ClickGeometry, RippleSlot};
use crate::interaction::timed::LoadingState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub large: bool,
    /// Show "Loading..." and stay disabled for a moment after each click.
    #[prop_or_default]
    pub simulate_loading: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let node = use_node_ref();
    let feedback = use_state_eq(PressFeedback::default);
    let ripples = use_state_eq(RippleSlot::default);
    let rerender = use_force_update();
    let loading = use_memo(move |_| LoadingState::new(move |_| rerender.force_update()), ());

    let pointer = |event: PointerEvent| {
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| feedback.set((*feedback).next(event)))
    };

    let onclick = {
        let node = node.clone();
        let ripples = ripples.clone();
        let loading = loading.clone();
        let onclick = props.onclick.clone();
        let simulate_loading = props.simulate_loading;
        Callback::from(move |e: MouseEvent| {
            if let Some(button) = node.cast::<Element>() {
                let rect = button.get_bounding_client_rect();
                let mut slot = (*ripples).clone();
                slot.spawn(ClickGeometry {
                    client_x: f64::from(e.client_x()),
                    client_y: f64::from(e.client_y()),
                    button_left: rect.left(),
                    button_top: rect.top(),
                    border_left: f64::from(button.client_left()),
                    border_top: f64::from(button.client_top()),
                    button_width: f64::from(button.client_width()),
                    button_height: f64::from(button.client_height()),
                });
                ripples.set(slot);
            }

            if simulate_loading {
                e.prevent_default();
                if !loading.start() {
                    debug!("ignoring click on a loading button");
                }
            }

            onclick.emit(e);
        })
    };

    html! {
        <button
            ref={node}
            class={classes!("btn", props.variant.class(), props.large.then(|| "btn-large"))}
            style={format!("transform: {};", feedback.transform())}
            disabled={loading.is_loading()}
            onmouseenter={pointer(PointerEvent::Enter)}
            onmouseleave={pointer(PointerEvent::Leave)}
            onmousedown={pointer(PointerEvent::Down)}
            onmouseup={pointer(PointerEvent::Up)}
            onclick={onclick}
        >
            {
                if loading.is_loading() {
                    html! { <>{"Loading..."}</> }
                } else {
                    props.children.iter().collect::<Html>()
                }
            }
            { for ripples.current().map(|ripple| html! {
                <span key={ripple.id.to_string()} class="ripple" style={ripple.style()}></span>
            }) }
        </button>
    }
}
