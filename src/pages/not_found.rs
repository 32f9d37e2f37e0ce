use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="content">
            <h1 class="title">"Page not found"</h1>
            <p>
                <a href="/">"Back to the start page"</a>
            </p>
        </div>
    }
}
