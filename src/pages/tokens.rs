//! API token section.

use leptos::prelude::*;

use crate::util::auth::{Access, gated};

#[component]
pub fn TokensPage() -> impl IntoView {
    view! {
        <h1 class="title">"API Tokens"</h1>
        {gated(Access::SignedIn, || view! {
            <p>"API tokens let scripts upload symbols on your behalf."</p>
        })}
    }
}
