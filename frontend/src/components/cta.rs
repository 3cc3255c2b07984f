use web_sys::{HtmlInputElement, InputEvent};
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::interaction::email::validate_email;

#[function_component(Cta)]
pub fn cta() -> Html {
    let email = use_state(String::new);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let invalid = !email.is_empty() && !validate_email(&email);

    html! {
        <section class="cta" id="cta">
            <div class="container">
                <h2 class="cta-title">{"Built for the future. Available today."}</h2>
                <p class="cta-subtitle">{"Join the teams already planning and shipping with Linear."}</p>
                <div class="cta-form">
                    <input
                        class={classes!("cta-email", invalid.then(|| "invalid"))}
                        type="email"
                        placeholder="you@company.com"
                        value={(*email).clone()}
                        oninput={oninput}
                    />
                    {
                        if invalid {
                            html! { <p class="cta-hint">{"Enter a valid email address"}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="cta-buttons">
                    <Button large=true simulate_loading=true>{"Get started"}</Button>
                    <Button variant={ButtonVariant::Secondary} large=true simulate_loading=true>
                        {"Contact sales"}
                    </Button>
                </div>
            </div>
        </section>
    }
}
