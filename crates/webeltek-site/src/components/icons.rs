//! Inline line icons

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    CheckCircle,
    Mail,
    MapPin,
    Menu,
    Close,
}

#[component]
pub fn FeatherIcon(
    icon: Icon,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let shape = match icon {
        Icon::ArrowRight => view! {
            <line x1="5" y1="12" x2="19" y2="12"/>
            <polyline points="12 5 19 12 12 19"/>
        }
        .into_view(),
        Icon::CheckCircle => view! {
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
            <polyline points="22 4 12 14.01 9 11.01"/>
        }
        .into_view(),
        Icon::Mail => view! {
            <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/>
            <polyline points="22,6 12,13 2,6"/>
        }
        .into_view(),
        Icon::MapPin => view! {
            <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"/>
            <circle cx="12" cy="10" r="3"/>
        }
        .into_view(),
        Icon::Menu => view! {
            <path d="M4 6h16M4 12h16M4 18h16"/>
        }
        .into_view(),
        Icon::Close => view! {
            <path d="M6 18L18 6M6 6l12 12"/>
        }
        .into_view(),
    };

    view! {
        <svg
            class=class
            width="1em"
            height="1em"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shape}
        </svg>
    }
}
