//! Help page.

use leptos::prelude::*;

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <div class="content">
            <h1 class="title">"Help"</h1>
            <p>
                "Symbols are uploaded with API tokens and downloaded anonymously. Sign in to create "
                "tokens and to browse your uploads."
            </p>
            <p>
                "Full documentation lives at "
                <a href="https://tecken.readthedocs.io" rel="noopener noreferrer">
                    "tecken.readthedocs.io"
                </a>
                "."
            </p>
        </div>
    }
}
