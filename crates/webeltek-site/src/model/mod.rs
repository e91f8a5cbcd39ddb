//! UI state owned by individual components
//!
//! These types hold no reactive machinery; components wrap them in signals.

mod contact;
mod menu;

pub use contact::{is_valid_email, ContactDraft, ContactForm, Field, SubmitError};
pub use menu::{follow_link, MenuState};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;

    fn submitted_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "John Doe");
        form.update_field(Field::Email, "john@example.com");
        form.submit().unwrap();
        form
    }

    #[test]
    fn test_desktop_link_changes_nothing() {
        let form = submitted_form();
        let snapshot = form.clone();

        let mut menu = MenuState::new();
        menu.toggle();
        for _ in NAV_ITEMS {
            follow_link(None);
        }

        assert_eq!(form, snapshot);
        assert!(menu.is_open());
    }

    #[test]
    fn test_drawer_link_only_closes_menu() {
        let form = submitted_form();
        let snapshot = form.clone();

        for _ in NAV_ITEMS {
            let mut menu = MenuState::new();
            menu.toggle();
            follow_link(Some(&mut menu));
            assert!(!menu.is_open());
        }

        let mut closed = MenuState::new();
        follow_link(Some(&mut closed));
        assert!(!closed.is_open());
        assert_eq!(form, snapshot);
    }
}
