//! Page footer

use chrono::{Datelike, Utc};
use leptos::*;

use super::{FeatherIcon, Icon};
use crate::content::{ContactChannel, COMPANY, CONTACT_CHANNELS, FOOTER_LINKS, LOGO_SRC};

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="bg-white border-t border-blue-100">
            <div class="mx-auto max-w-7xl px-4 py-10 sm:px-6 lg:px-8 text-sm text-blue-900">
                <div class="grid gap-8 md:grid-cols-4">
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3">
                            <img src=LOGO_SRC alt=format!("{COMPANY} logo") class="h-8 w-auto"/>
                        </div>
                        <p class="mt-3 max-w-md">
                            "Premier IT talent acquisition, payroll management, and enterprise consulting since 2017."
                        </p>
                    </div>
                    <div>
                        <div class="font-semibold">"Company"</div>
                        <ul class="mt-3 space-y-2">
                            {FOOTER_LINKS.iter().map(|link| view! {
                                <li><a href=link.href class="hover:text-blue-700">{link.label}</a></li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div>
                        <div class="font-semibold">"Contact"</div>
                        <ul class="mt-3 space-y-2">
                            {CONTACT_CHANNELS.iter().map(|channel| {
                                let (icon, text) = match *channel {
                                    ContactChannel::Email(address) => (Icon::Mail, address),
                                    ContactChannel::Location(place) => (Icon::MapPin, place),
                                };
                                view! {
                                    <li class="flex items-center gap-2">
                                        <FeatherIcon icon=icon/>
                                        <span>{text}</span>
                                    </li>
                                }
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>

                <div class="mt-8 border-t border-blue-100 pt-6 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <p>{format!("© {year} {COMPANY}. All rights reserved.")}</p>
                    <div class="text-xs text-blue-700">"Newsletter coming soon."</div>
                </div>
            </div>
        </footer>
    }
}
