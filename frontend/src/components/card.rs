use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::interaction::reveal::reveal_style;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let hovered = use_state_eq(|| false);

    let hover = |over: bool| {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(over))
    };

    html! {
        <div
            ref={node}
            class="feature-card"
            style={reveal_style(revealed, *hovered)}
            onmouseenter={hover(true)}
            onmouseleave={hover(false)}
        >
            <div class="feature-icon">{ props.icon.clone() }</div>
            <h3 class="feature-title">{ props.title.clone() }</h3>
            <p class="feature-description">{ props.description.clone() }</p>
        </div>
    }
}
