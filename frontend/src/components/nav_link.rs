use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;
use crate::interaction::anchor::anchor_selector;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<()>,
    pub children: Children,
}

/// Link that smooth-scrolls to in-page sections and navigates normally otherwise.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let notify = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(selector) = anchor_selector(&href) {
                e.prevent_default();
                dom::scroll_to_section(selector);
            }
            notify.emit(());
        })
    };

    html! {
        <a class="nav-link" href={props.href.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
