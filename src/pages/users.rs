//! User management section (superusers only).

use leptos::prelude::*;

use crate::util::auth::{Access, gated};

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <h1 class="title">"User Management"</h1>
        {gated(Access::Superuser, || view! {
            <p>"Grant and revoke permissions for console users."</p>
        })}
    }
}

/// Detail view for `/users/:id`.
#[component]
pub fn UserPage(id: String) -> impl IntoView {
    let heading = format!("User {id}");
    view! {
        <h1 class="title">{heading}</h1>
        {gated(Access::Superuser, || view! {
            <p>
                <a href="/users">"Back to all users"</a>
            </p>
        })}
    }
}
