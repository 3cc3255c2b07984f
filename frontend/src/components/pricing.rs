use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::reveal::{use_reveal, SectionHeader};
use crate::interaction::reveal::reveal_style;
use crate::interaction::selection::Selection;

struct Tier {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    blurb: &'static str,
    perks: &'static [&'static str],
    featured: bool,
}

static TIERS: [Tier; 3] = [
    Tier {
        name: "Free",
        price: "$0",
        period: "",
        blurb: "For individuals and small teams getting started",
        perks: &["Unlimited members", "250 issues", "Slack and GitHub integrations"],
        featured: false,
    },
    Tier {
        name: "Standard",
        price: "$8",
        period: "per user/month",
        blurb: "For growing teams that need more structure",
        perks: &["Unlimited issues", "Unlimited file uploads", "Admin roles", "Private teams"],
        featured: true,
    },
    Tier {
        name: "Plus",
        price: "$14",
        period: "per user/month",
        blurb: "For scaling organizations with advanced needs",
        perks: &["Everything in Standard", "Issue SLAs", "Insights", "Priority support"],
        featured: false,
    },
];

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    index: usize,
    selected: bool,
    onselect: Callback<usize>,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = &TIERS[props.index];
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let hovered = use_state_eq(|| false);

    let hover = |over: bool| {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(over))
    };

    let onclick = {
        let onselect = props.onselect.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| onselect.emit(index))
    };

    let variant = if tier.featured { ButtonVariant::Primary } else { ButtonVariant::Secondary };

    html! {
        <div
            ref={node}
            class={classes!(
                "pricing-card",
                tier.featured.then(|| "featured"),
                props.selected.then(|| "selected")
            )}
            style={reveal_style(revealed, *hovered)}
            onmouseenter={hover(true)}
            onmouseleave={hover(false)}
            onclick={onclick}
        >
            <h3 class="pricing-name">{ tier.name }</h3>
            <div class="pricing-price">
                <span class="price-amount">{ tier.price }</span>
                <span class="price-period">{ tier.period }</span>
            </div>
            <p class="pricing-blurb">{ tier.blurb }</p>
            <ul class="pricing-perks">
                { for tier.perks.iter().map(|perk| html! { <li>{ *perk }</li> }) }
            </ul>
            <Button variant={variant}>{ format!("Choose {}", tier.name) }</Button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let selected = use_state_eq(Selection::<usize>::default);

    let onselect = {
        let selected = selected.clone();
        Callback::from(move |index: usize| {
            let mut next = (*selected).clone();
            next.select(index);
            debug!("pricing tier {} selected", TIERS[index].name);
            selected.set(next);
        })
    };

    html! {
        <section class="pricing" id="pricing">
            <div class="container">
                <SectionHeader
                    title="Simple, transparent pricing"
                    subtitle="Start for free. Upgrade when your team is ready."
                />
                <div class="pricing-grid">
                    {
                        for (0..TIERS.len()).map(|index| html! {
                            <PricingCard
                                index={index}
                                selected={selected.is_selected(&index)}
                                onselect={onselect.clone()}
                            />
                        })
                    }
                </div>
            </div>
        </section>
    }
}
