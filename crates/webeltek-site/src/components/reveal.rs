//! Scroll-triggered reveal

use leptos::*;

use crate::motion::{self, REVEAL_CLASS, STAGGER};

/// Wraps children so they fade up the first time they scroll into view.
///
/// `step` is the child's position inside a staggered group.
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(optional)] step: Option<usize>,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        REVEAL_CLASS.to_string()
    } else {
        format!("{REVEAL_CLASS} {class}")
    };
    let style = step.map(|index| STAGGER.style(index));

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

/// Installs the observer that drives every [`Reveal`] on the page.
#[component]
pub fn ScrollRevealScript() -> impl IntoView {
    view! { <script inner_html=motion::observer_script()></script> }
}
