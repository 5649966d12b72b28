/// How a map category is presented on filter chips and list entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub label: String,
}

impl CategoryStyle {
    pub fn new(icon: &'static str, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
        }
    }
}

const KNOWN: [(&str, &str); 4] = [
    ("Recicláveis", "♻️"),
    ("Vidro", "🪟"),
    ("Óleo", "🛢️"),
    ("Eletrônicos", "🔌"),
];

const FALLBACK_ICON: &str = "📍";

/// Style for `category`; unknown categories get a pin and their own name.
pub fn category_style(category: &str) -> CategoryStyle {
    let icon = KNOWN
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON);
    CategoryStyle::new(icon, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_have_icons() {
        assert_eq!(category_style("Vidro"), CategoryStyle::new("🪟", "Vidro"));
        assert_eq!(category_style("Óleo").icon, "🛢️");
    }

    #[test]
    fn unknown_category_gets_pin() {
        assert_eq!(category_style("Pilhas"), CategoryStyle::new("📍", "Pilhas"));
    }
}
