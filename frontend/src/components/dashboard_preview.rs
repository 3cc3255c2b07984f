use log::debug;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::interaction::feedback::issue_press;
use crate::interaction::selection::Selection;
use crate::interaction::timed::IssuePress;

static VIEWS: [(&str, &str); 5] = [
    ("Inbox", "📥"),
    ("My issues", "🎯"),
    ("Views", "🗂"),
    ("Roadmaps", "🗺"),
    ("Projects", "📦"),
];

struct Issue {
    key: &'static str,
    title: &'static str,
    status: &'static str,
    priority: &'static str,
}

static ISSUES: [Issue; 4] = [
    Issue { key: "ENG-214", title: "Sync cycle progress to roadmap", status: "in-progress", priority: "High" },
    Issue { key: "ENG-209", title: "Keyboard shortcuts for triage", status: "todo", priority: "Medium" },
    Issue { key: "DES-87", title: "Refresh empty states", status: "in-review", priority: "Low" },
    Issue { key: "ENG-198", title: "Fix flaky webhook retries", status: "done", priority: "Urgent" },
];

#[derive(Properties, PartialEq)]
struct IssueItemProps {
    key_label: AttrValue,
    title: AttrValue,
    status: AttrValue,
    priority: AttrValue,
}

#[function_component(IssueItem)]
fn issue_item(props: &IssueItemProps) -> Html {
    let rerender = use_force_update();
    let press = use_memo(move |_| IssuePress::new(move |_| rerender.force_update()), ());

    let onclick = {
        let press = press.clone();
        Callback::from(move |_: MouseEvent| press.press())
    };

    html! {
        <div class="issue-item" style={format!("transform: {};", issue_press(press.is_pressed()))} onclick={onclick}>
            <span class={classes!("issue-status", props.status.to_string())}></span>
            <span class="issue-key">{ props.key_label.clone() }</span>
            <span class="issue-title">{ props.title.clone() }</span>
            <span class="issue-priority">{ props.priority.clone() }</span>
        </div>
    }
}

/// Mock of the product UI: a sidebar of views and an issue list.
#[function_component(DashboardPreview)]
pub fn dashboard_preview() -> Html {
    let active = use_state_eq(|| Selection::with_selected(0usize));

    {
        let active = active.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                let mut next = (*active).clone();
                next.clear();
                active.set(next);
            }
        });
    }

    let heading = active
        .current()
        .map(|index| VIEWS[*index].0)
        .unwrap_or("Workspace");

    html! {
        <div class="dashboard-preview" id="dashboard">
            <aside class="dashboard-sidebar">
                {
                    for VIEWS.iter().enumerate().map(|(index, (label, icon))| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*active).clone();
                                next.select(index);
                                debug!("dashboard view {} activated", index);
                                active.set(next);
                            })
                        };
                        html! {
                            <div class={classes!("nav-item", active.is_selected(&index).then(|| "active"))} onclick={onclick}>
                                <span class="nav-item-icon">{ *icon }</span>
                                { *label }
                            </div>
                        }
                    })
                }
            </aside>
            <section class="dashboard-main">
                <header class="dashboard-header">{ heading }</header>
                <div class="issue-list">
                    {
                        for ISSUES.iter().map(|issue| html! {
                            <IssueItem
                                key_label={issue.key}
                                title={issue.title}
                                status={issue.status}
                                priority={issue.priority}
                            />
                        })
                    }
                </div>
            </section>
        </div>
    }
}
