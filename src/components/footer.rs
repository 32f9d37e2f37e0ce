//! Static page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="content has-text-centered">
                    <p>
                        <strong>"The Mozilla Symbol Server"</strong>
                        <br/>
                        "Powered by "
                        <a href="https://github.com/mozilla-services/tecken" rel="noopener noreferrer">
                            "Tecken"
                        </a>
                        " • "
                        <a href="https://tecken.readthedocs.io" rel="noopener noreferrer">
                            "Documentation"
                        </a>
                    </p>
                </div>
            </div>
        </footer>
    }
}
