//! Upload section: listing, file listing, and single-upload detail.

use leptos::prelude::*;

use crate::util::auth::{Access, gated};

#[component]
pub fn UploadsPage() -> impl IntoView {
    view! {
        <h1 class="title">"Uploads"</h1>
        {gated(Access::SignedIn, || view! {
            <p>
                "Symbol archives uploaded with your tokens. "
                <a href="/uploads/files">"Browse all uploaded files"</a>
            </p>
        })}
    }
}

#[component]
pub fn FilesPage() -> impl IntoView {
    view! {
        <h1 class="title">"Files"</h1>
        {gated(Access::SignedIn, || view! {
            <p>"Individual symbol files extracted from uploads."</p>
        })}
    }
}

/// Detail view for `/uploads/upload/:id`.
#[component]
pub fn UploadPage(id: String) -> impl IntoView {
    let heading = format!("Upload {id}");
    view! {
        <h1 class="title">{heading}</h1>
        {gated(Access::SignedIn, || view! {
            <p>
                <a href="/uploads">"Back to all uploads"</a>
            </p>
        })}
    }
}
