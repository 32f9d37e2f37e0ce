//! Top navigation bar with role-gated links and the sign-in/out action.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar is a projection of the session snapshot: [`NavModel::from_snapshot`]
//! decides which links and which session action appear, and the component only
//! renders that model and forwards clicks to the session controller.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::ConsoleController;
use crate::routes::is_link_active;
use crate::state::session::SessionSnapshot;

/// A navigation link target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Highlight only on an exact path match.
    pub exact: bool,
}

const HOME: NavLink = NavLink {
    label: "Home",
    href: "/",
    exact: true,
};
const USER_MANAGEMENT: NavLink = NavLink {
    label: "User Management",
    href: "/users",
    exact: false,
};
const TOKENS: NavLink = NavLink {
    label: "API Tokens",
    href: "/tokens",
    exact: false,
};
const UPLOADS: NavLink = NavLink {
    label: "Uploads",
    href: "/uploads",
    exact: false,
};
const HELP: NavLink = NavLink {
    label: "Help",
    href: "/help",
    exact: false,
};

/// The button at the end of the bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    SignIn,
    SignOut { email: String },
}

impl SessionAction {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::SignIn => "Sign In".to_owned(),
            Self::SignOut { email } => format!("Sign Out ({email})"),
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<String> {
        match self {
            Self::SignIn => None,
            Self::SignOut { email } => Some(format!("Signed in as {email}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavModel {
    pub links: Vec<NavLink>,
    pub action: SessionAction,
}

impl NavModel {
    #[must_use]
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        let mut links = vec![HOME];
        if snapshot.is_superuser() {
            links.push(USER_MANAGEMENT);
        }
        links.extend([TOKENS, UPLOADS, HELP]);

        let action = match snapshot.current_user() {
            Some(user) => SessionAction::SignOut {
                email: user.email.clone(),
            },
            None => SessionAction::SignIn,
        };
        Self { links, action }
    }
}

/// CSS class for a nav link given the current location.
#[must_use]
pub fn nav_link_class(current_path: &str, link: &NavLink) -> &'static str {
    if is_link_active(current_path, link.href, link.exact) {
        "nav-item is-tab is-active"
    } else {
        "nav-item is-tab"
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<ReadSignal<SessionSnapshot>>();
    let controller = expect_context::<ConsoleController>();
    let pathname = use_location().pathname;

    let site_title = controller.config().site_title.clone();
    let model = Memo::new(move |_| NavModel::from_snapshot(&session.get()));

    let on_session_action = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let action = model.get_untracked().action;
        let controller = controller.clone();
        let generation = controller.lifecycle().current();
        leptos::task::spawn_local(async move {
            if !controller.lifecycle().is_current(generation) {
                return;
            }
            match action {
                SessionAction::SignIn => {
                    let outcome = controller.sign_in().await;
                    log::debug!("sign-in: {outcome:?}");
                }
                SessionAction::SignOut { .. } => {
                    let outcome = controller.sign_out().await;
                    log::debug!("sign-out: {outcome:?}");
                }
            }
        });
    };

    let links = move || {
        model
            .get()
            .links
            .into_iter()
            .map(|link| {
                view! {
                    <a
                        href=link.href
                        class=move || nav_link_class(&pathname.get(), &link)
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    let action = move || {
        let action = model.get().action;
        view! {
            <a class="button is-info" title=action.title() on:click=on_session_action.clone()>
                {action.label()}
            </a>
        }
    };

    view! {
        <nav class="nav has-shadow" id="top">
            <div class="container">
                <div class="nav-left">
                    <a class="nav-item" href="/">
                        {site_title}
                    </a>
                </div>
                <div class="nav-right nav-menu">
                    {links}
                    <span class="nav-item">{action}</span>
                </div>
            </div>
        </nav>
    }
}
