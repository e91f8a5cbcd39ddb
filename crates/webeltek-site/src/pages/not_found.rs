//! Fallback for paths other than `/`

use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="mx-auto max-w-2xl px-4 py-24 text-center">
            <h1 class="text-3xl font-semibold">"Page not found"</h1>
            <p class="mt-3 text-blue-900/80">"The page you are looking for does not exist."</p>
            <a href="/" class="mt-8 inline-block rounded-xl bg-[#0a1d56] px-5 py-3 text-sm font-medium text-[#f8cb19] shadow-glow hover:bg-[#142b70] transition">
                "Back to home"
            </a>
        </section>
    }
}
