//! Site components

mod cards;
mod contact_form;
mod footer;
mod icons;
mod nav;
mod reveal;

pub use cards::*;
pub use contact_form::{ContactForm, ContactFormBody};
pub use footer::Footer;
pub use icons::{FeatherIcon, Icon};
pub use nav::{NavLinks, SiteNav};
pub use reveal::{Reveal, ScrollRevealScript};
