//! Site header with dropdown navigation and mobile overlay.
//!
//! Menu state lives in a reducer over [`MenuState`]. While mounted the
//! header listens for pointer presses on the document (to close menus when
//! the press lands outside the header), window resizes, and Escape.

use std::rc::Rc;

use core_types::content::{NAV_LINKS, NavLink};
use core_types::{MenuAction, MenuState, SITE_NAME};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

const FALLBACK_WIDTH: f64 = 1280.0;

#[derive(Clone, PartialEq)]
struct HeaderMenu(MenuState);

impl Reducible for HeaderMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(HeaderMenu(next))
        }
    }
}

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Site header component.
#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_reducer(|| {
        HeaderMenu(MenuState::new(
            viewport_width().unwrap_or(FALLBACK_WIDTH),
        ))
    });
    let header_ref = use_node_ref();

    {
        let dispatcher = menu.dispatcher();
        let header_ref = header_ref.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window();
            let document = window.as_ref().and_then(|w| w.document());

            let on_mousedown = {
                let dispatcher = dispatcher.clone();
                Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
                    let target = event
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                    let inside = match (header_ref.get(), target) {
                        (Some(header), Some(target)) => header.contains(Some(&target)),
                        _ => false,
                    };
                    if !inside {
                        dispatcher.dispatch(MenuAction::ClickOutside);
                    }
                })
            };

            let on_resize = {
                let dispatcher = dispatcher.clone();
                Closure::<dyn Fn()>::new(move || {
                    if let Some(width) = viewport_width() {
                        dispatcher.dispatch(MenuAction::Resize { width });
                    }
                })
            };

            let on_keydown = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(
                move |event: web_sys::KeyboardEvent| {
                    if event.key() == "Escape" {
                        dispatcher.dispatch(MenuAction::Escape);
                    }
                },
            );

            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback(
                    "mousedown",
                    on_mousedown.as_ref().unchecked_ref(),
                );
                let _ = document
                    .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            }
            if let Some(window) = &window {
                let _ = window
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = &document {
                    let _ = document.remove_event_listener_with_callback(
                        "mousedown",
                        on_mousedown.as_ref().unchecked_ref(),
                    );
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        on_keydown.as_ref().unchecked_ref(),
                    );
                }
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let state = menu.0;
    let dispatch = |action: MenuAction| {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(action))
    };

    html! {
        <header
            ref={header_ref}
            class={classes!("site-header", state.is_any_open().then_some("menu-open"))}
        >
            <div class="header-inner">
                <Link<Route> to={Route::Home} classes="brand">
                    { SITE_NAME }
                </Link<Route>>

                <nav
                    class={classes!("site-nav", state.mobile_open.then_some("is-open"))}
                    aria-label="Main"
                >
                    <ul class="nav-list">
                        { for NAV_LINKS.iter().enumerate().map(|(index, link)| {
                            nav_entry(index, link, &state, &menu)
                        })}
                    </ul>
                    <div class="nav-actions" onclick={dispatch(MenuAction::SelectItem)}>
                        <Link<Route> to={Route::Login} classes="btn btn-secondary">
                            {"Sign in"}
                        </Link<Route>>
                        <Link<Route> to={Route::SignUp} classes="btn btn-primary">
                            {"Join us"}
                        </Link<Route>>
                    </div>
                </nav>

                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={state.mobile_open.to_string()}
                    onclick={dispatch(MenuAction::ToggleMobile)}
                >
                    <span class="menu-toggle-bar"></span>
                    <span class="menu-toggle-bar"></span>
                    <span class="menu-toggle-bar"></span>
                </button>
            </div>
        </header>
    }
}

/// A single top-level entry, rendered as a dropdown when it has children.
fn nav_entry(
    index: usize,
    link: &'static NavLink,
    state: &MenuState,
    menu: &UseReducerHandle<HeaderMenu>,
) -> Html {
    let select = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::SelectItem))
    };
    let href = format!("/{}", link.href);

    if !link.has_dropdown() {
        return html! {
            <li key={link.label} class="nav-item">
                <a href={href} onclick={select}>{ link.label }</a>
            </li>
        };
    }

    let open = state.is_dropdown_open(index);
    let hover = state.breakpoint.opens_on_hover();

    let on_toggle = {
        let menu = menu.clone();
        let action = state.trigger_action(index);
        Callback::from(move |_: MouseEvent| menu.dispatch(action))
    };
    let on_enter = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            if hover {
                menu.dispatch(MenuAction::OpenDropdown(index));
            }
        })
    };
    let on_leave = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            if hover {
                menu.dispatch(MenuAction::CloseDropdown);
            }
        })
    };

    html! {
        <li
            key={link.label}
            class={classes!("nav-item", "has-dropdown", open.then_some("is-open"))}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <button
                type="button"
                class="dropdown-trigger"
                aria-haspopup="true"
                aria-expanded={open.to_string()}
                onclick={on_toggle}
            >
                { link.label }
                <span class="chevron" aria-hidden="true"></span>
            </button>
            if open {
                <ul class="dropdown">
                    { for link.children.iter().map(|item| html! {
                        <li key={item.label}>
                            <a href={format!("/{}", item.href)} onclick={select.clone()}>
                                <span class="dropdown-label">{ item.label }</span>
                                <span class="dropdown-description">{ item.description }</span>
                            </a>
                        </li>
                    })}
                </ul>
            }
        </li>
    }
}
