//! Mobile navigation drawer state

/// Open/closed state of the collapsed-layout navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Collapse the drawer after a link in it was followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// State change for following an in-page link.
///
/// Links in the drawer pass its state and collapse it; desktop links pass
/// `None` and change nothing. Page sections never see the click.
pub fn follow_link(drawer: Option<&mut MenuState>) {
    if let Some(menu) = drawer {
        menu.close();
    }
}
