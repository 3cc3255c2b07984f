use std::rc::Rc;

use log::debug;
use web_sys::{Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::{use_event_with_window, use_window_size};

use crate::components::button::{Button, ButtonVariant};
use crate::components::nav_link::NavLink;
use crate::dom;
use crate::interaction::mobile_menu::MobileMenu;
use crate::interaction::navbar::{NavbarAppearance, NavbarScroll};

pub enum MenuAction {
    ViewportWidth(f64),
    Toggle,
    Close,
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            MenuAction::ViewportWidth(width) => {
                if next.observe_width(width) {
                    debug!("mobile menu toggle created at {}px", width);
                }
            }
            MenuAction::Toggle => next.toggle(),
            MenuAction::Close => next.close(),
        }
        Rc::new(next)
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scroll = use_mut_ref(NavbarScroll::default);
    let appearance = use_state_eq(NavbarAppearance::default);
    let menu = use_reducer_eq(MobileMenu::default);
    let (width, _) = use_window_size();

    {
        let appearance = appearance.clone();
        use_event_with_window("scroll", move |_: Event| {
            let next = scroll.borrow_mut().update(dom::scroll_y());
            appearance.set(next);
        });
    }

    // Runs at mount and again whenever the window is resized.
    {
        let menu = menu.dispatcher();
        use_effect_with_deps(
            move |width: &f64| {
                menu.dispatch(MenuAction::ViewportWidth(*width));
                || ()
            },
            width,
        );
    }

    {
        let menu = menu.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu.dispatch(MenuAction::Close);
            }
        });
    }

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Close))
    };

    html! {
        <nav class="navbar" style={appearance.style()}>
            <div class="container">
                <a href="#" class="nav-logo">
                    <span class="logo-mark"></span>
                    {"Linear"}
                </a>

                <div class={classes!("nav-menu", menu.is_open().then(|| "mobile-open"))}>
                    <NavLink href="#features" onclick={close_menu.clone()}>{"Features"}</NavLink>
                    <NavLink href="#dashboard" onclick={close_menu.clone()}>{"Method"}</NavLink>
                    <NavLink href="#pricing" onclick={close_menu.clone()}>{"Pricing"}</NavLink>
                    <NavLink href="#cta" onclick={close_menu}>{"Contact"}</NavLink>
                </div>

                <div class="nav-actions">
                    <Button variant={ButtonVariant::Ghost}>{"Log in"}</Button>
                    <Button>{"Sign up"}</Button>
                </div>

                {
                    if menu.has_toggle() {
                        html! {
                            <button class="mobile-menu-toggle btn btn-ghost" onclick={toggle_menu}>
                                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                    <path d="M3 12H21M3 6H21M3 18H21" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                                </svg>
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </nav>
    }
}
