/// Media query under which the top navigation collapses behind a toggle.
pub const MOBILE_QUERY: &str = "(max-width: 1023px)";

/// Collapsible top navigation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    mobile: bool,
}

/// Attribute state for the toggle button and the nav wrapper.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NavPresentation {
    /// `topbar--open` on the top bar and `aria-expanded` on the toggle.
    pub open: bool,
    pub hidden: bool,
    /// `None` removes the attribute.
    pub aria_hidden: Option<bool>,
}

impl NavMenu {
    pub fn new(mobile: bool) -> Self {
        Self { open: false, mobile }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Escape key, or a viewport change.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn link_clicked(&mut self) {
        if self.mobile {
            self.close();
        }
    }

    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
        self.close();
    }

    pub fn presentation(&self) -> NavPresentation {
        if self.mobile {
            NavPresentation {
                open: self.open,
                hidden: !self.open,
                aria_hidden: Some(!self.open),
            }
        } else {
            NavPresentation {
                open: self.open,
                hidden: false,
                aria_hidden: None,
            }
        }
    }
}
