use log::debug;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::FeatureCard;
use crate::components::cta::Cta;
use crate::components::dashboard_preview::DashboardPreview;
use crate::components::pricing::Pricing;
use crate::components::reveal::SectionHeader;
use crate::config::SCROLL_DEBOUNCE_MS;
use crate::dom;
use crate::interaction::debounce::debounce;

static FEATURES: [(&str, &str, &str); 6] = [
    ("⚡", "Built for speed", "Synchronized in real time. Every action is instant, with no loading spinners."),
    ("⌨", "Keyboard first", "Every command is a shortcut away. Never reach for the mouse again."),
    ("🔁", "Cycles", "Work in focused sprints that roll over unfinished work automatically."),
    ("🗺", "Roadmaps", "Plan projects across teams and see progress at a glance."),
    ("🔗", "Integrations", "Connect GitHub, GitLab, Slack and Figma to keep context in one place."),
    ("📈", "Insights", "Understand throughput and bottlenecks with live analytics."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Settled scroll position, after the page has stopped moving.
    {
        let settled = use_memo(
            |_| debounce(SCROLL_DEBOUNCE_MS, |scroll_top: f64| debug!("scroll settled at {}px", scroll_top)),
            (),
        );
        use_event_with_window("scroll", move |_: Event| settled.call(dom::scroll_y()));
    }

    html! {
        <main class="landing">
            <section class="hero">
                <div class="container">
                    <h1 class="hero-title">{"Linear is a better way to build products"}</h1>
                    <p class="hero-subtitle">
                        {"Meet the new standard for modern software development. Streamline issues, sprints, and product roadmaps."}
                    </p>
                    <div class="hero-buttons">
                        <Button large=true>{"Start building"}</Button>
                        <Button variant={ButtonVariant::Secondary} large=true>{"Introducing Linear Asks"}</Button>
                    </div>
                    <DashboardPreview />
                </div>
            </section>

            <section class="features" id="features">
                <div class="container">
                    <SectionHeader
                        title="Made for modern product teams"
                        subtitle="Linear is shaped by the practices that distinguish world-class product teams."
                    />
                    <div class="features-grid">
                        {
                            for FEATURES.iter().map(|(icon, title, description)| html! {
                                <FeatureCard icon={*icon} title={*title} description={*description} />
                            })
                        }
                    </div>
                </div>
            </section>

            <Pricing />
            <Cta />

            <footer class="footer">
                <div class="container">
                    <span class="footer-brand">{"Linear"}</span>
                    <span class="footer-note">{"Designed for the way teams work."}</span>
                </div>
            </footer>
        </main>
    }
}
