use std::collections::BTreeSet;

use crate::index_set::IndexSet;

/// Outcome of [`CategorySelection::toggle`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CategoryToggle {
    Activated,
    Deactivated,
    /// The category is the only active one and stays on.
    KeptLast,
    Unknown,
}

impl CategoryToggle {
    pub fn changed(self) -> bool {
        matches!(self, CategoryToggle::Activated | CategoryToggle::Deactivated)
    }
}

/// Active map categories.
///
/// Invariant: once built from at least one category, at least one stays
/// active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    categories: Vec<String>,
    active: IndexSet,
}

impl CategorySelection {
    /// Distinct categories in lexicographic order, all active.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories
            .into_iter()
            .map(Into::into)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let active = IndexSet::full(categories.len());
        Self { categories, active }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.index_of(category)
            .is_some_and(|i| self.active.contains(i))
    }

    pub fn active(&self) -> impl Iterator<Item = &str> + '_ {
        self.active.iter().map(|i| self.categories[i].as_str())
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn toggle(&mut self, category: &str) -> CategoryToggle {
        let Some(i) = self.index_of(category) else {
            return CategoryToggle::Unknown;
        };
        if self.active.contains(i) {
            if self.active.len() == 1 {
                return CategoryToggle::KeptLast;
            }
            self.active.remove(i);
            CategoryToggle::Deactivated
        } else {
            self.active.insert(i);
            CategoryToggle::Activated
        }
    }

    /// Makes sure `category` is active. Returns `true` if it was hidden.
    pub fn activate(&mut self, category: &str) -> bool {
        self.index_of(category)
            .is_some_and(|i| self.active.insert(i))
    }

    fn index_of(&self, category: &str) -> Option<usize> {
        self.categories
            .binary_search_by(|c| c.as_str().cmp(category))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn categories_are_distinct_and_sorted() {
        let s = CategorySelection::new(["Vidro", "Óleo", "Recicláveis", "Vidro"]);
        assert_eq!(s.categories(), ["Recicláveis", "Vidro", "Óleo"]);
        assert_eq!(s.active_count(), 3);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut s = CategorySelection::new(["Vidro", "Óleo"]);
        assert_eq!(s.toggle("Vidro"), CategoryToggle::Deactivated);
        assert!(!s.is_active("Vidro"));
        assert_eq!(s.active().collect::<Vec<_>>(), vec!["Óleo"]);
        assert_eq!(s.toggle("Vidro"), CategoryToggle::Activated);
        assert!(s.is_active("Vidro"));
    }

    #[test]
    fn last_active_category_cannot_be_turned_off() {
        let mut s = CategorySelection::new(["Vidro", "Óleo"]);
        s.toggle("Vidro");
        assert_eq!(s.toggle("Óleo"), CategoryToggle::KeptLast);
        assert!(s.is_active("Óleo"));
        assert_eq!(s.active_count(), 1);
    }

    #[test]
    fn unknown_category_is_ignored() {
        let mut s = CategorySelection::new(["Vidro"]);
        assert_eq!(s.toggle("Pilhas"), CategoryToggle::Unknown);
        assert!(!s.activate("Pilhas"));
    }

    #[test]
    fn activate_reports_change() {
        let mut s = CategorySelection::new(["Vidro", "Óleo"]);
        assert!(!s.activate("Vidro"));
        s.toggle("Vidro");
        assert!(s.activate("Vidro"));
        assert!(s.is_active("Vidro"));
    }

    proptest! {
        #[test]
        fn turning_off_all_but_one_keeps_the_last(
            names in prop::collection::btree_set("[a-z]{1,6}", 2..8),
            keep_seed in any::<usize>(),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let keep = names[keep_seed % names.len()].clone();
            let mut s = CategorySelection::new(names.clone());
            for n in names.iter().filter(|n| **n != keep) {
                prop_assert_eq!(s.toggle(n), CategoryToggle::Deactivated);
            }
            let before = s.clone();
            prop_assert_eq!(s.toggle(&keep), CategoryToggle::KeptLast);
            prop_assert_eq!(&s, &before);
            prop_assert_eq!(s.active().collect::<Vec<_>>(), vec![keep.as_str()]);
        }

        #[test]
        fn never_empty_under_random_toggles(
            names in prop::collection::btree_set("[a-z]{1,4}", 1..6),
            ops in prop::collection::vec(any::<usize>(), 0..40),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let mut s = CategorySelection::new(names.clone());
            for op in ops {
                s.toggle(&names[op % names.len()]);
                prop_assert!(s.active_count() >= 1);
            }
        }
    }
}
