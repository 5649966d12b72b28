/// Visitor's motion preference (`prefers-reduced-motion`).
///
/// Every view transition (map centering, scrolling, lightbox effects) asks
/// this before animating.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Full,
    Reduced,
}

impl Motion {
    pub fn from_reduced_preference(reduced: bool) -> Self {
        if reduced { Motion::Reduced } else { Motion::Full }
    }

    pub fn animate(self) -> bool {
        self == Motion::Full
    }

    pub fn lightbox_open_effect(self) -> &'static str {
        match self {
            Motion::Full => "zoom",
            Motion::Reduced => "none",
        }
    }

    pub fn lightbox_close_effect(self) -> &'static str {
        match self {
            Motion::Full => "fade",
            Motion::Reduced => "none",
        }
    }
}
