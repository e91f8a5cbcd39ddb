//! Card components for the content sections

use leptos::*;

use super::{FeatherIcon, Icon, Reveal};
use crate::content::{FaqEntry, Highlight, Industry, PayrollOffering, Service};

const CARD_CLASS: &str = "rounded-2xl border border-blue-100 bg-white p-6";

#[component]
pub fn HighlightCard(highlight: Highlight, index: usize) -> impl IntoView {
    view! {
        <Reveal class=CARD_CLASS step=index>
            <div class="flex items-center gap-2" data-card="highlight">
                <FeatherIcon icon=Icon::CheckCircle class="text-blue-700"/>
                <h4 class="font-semibold">{highlight.title}</h4>
            </div>
            <p class="mt-2 text-sm text-blue-900/80">{highlight.description}</p>
        </Reveal>
    }
}

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <Reveal class="lift rounded-2xl border border-blue-100 bg-white p-6">
            <div class="flex items-center justify-between" data-card="service">
                <h3 class="text-lg font-semibold">{service.title}</h3>
                <span class="text-blue-700">"→"</span>
            </div>
            <p class="mt-3 text-sm text-blue-900/80">{service.description}</p>
            <a href="#contact" class="mt-4 inline-flex items-center gap-2 text-sm text-blue-700 hover:text-blue-900">
                "Contact Us"
                <FeatherIcon icon=Icon::ArrowRight/>
            </a>
        </Reveal>
    }
}

#[component]
pub fn PayrollCard(offering: PayrollOffering) -> impl IntoView {
    view! {
        <Reveal class="lift rounded-2xl border border-blue-100 bg-white p-6">
            <h4 class="text-lg font-semibold" data-card="payroll">{offering.title}</h4>
            <ul class="mt-3 space-y-2 text-sm text-blue-900/80">
                {offering.points.iter().map(|point| view! {
                    <li class="flex gap-2" data-point>
                        <span class="text-blue-700">"•"</span>
                        <span>{*point}</span>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </Reveal>
    }
}

#[component]
pub fn IndustryCard(industry: Industry) -> impl IntoView {
    view! {
        <div class="lift rounded-2xl border border-blue-100 bg-white p-6" data-card="industry">
            <div class="flex items-center justify-between">
                <h3 class="font-semibold">{industry.name}</h3>
                <span class="text-blue-700">"→"</span>
            </div>
            <p class="mt-2 text-sm text-blue-900/80">{industry.blurb}</p>
        </div>
    }
}

/// Question that expands to its answer using the native disclosure element.
#[component]
pub fn FaqItem(entry: FaqEntry) -> impl IntoView {
    view! {
        <details class="rounded-xl border border-blue-100 bg-white p-4 open:shadow transition" data-card="faq">
            <summary class="cursor-pointer list-none font-medium">{entry.question}</summary>
            <p class="mt-2 text-blue-900/80 text-sm">{entry.answer}</p>
        </details>
    }
}
