use content::Project;
use foundation::text::compare_pt_br;

use crate::index_set::IndexSet;

/// Which tags are switched on.
///
/// "Everything" is its own state rather than a full explicit set, so a
/// persisted "all" keeps meaning "all" after new tags show up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveTags {
    All,
    /// Non-empty strict subset of the universe.
    Only(IndexSet),
}

/// Tag universe plus the active selection over it.
///
/// Invariant: the selection is never empty; it collapses to
/// [`ActiveTags::All`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelection {
    universe: Vec<String>,
    active: ActiveTags,
}

impl TagSelection {
    /// Distinct tags in pt-BR order, all active.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut universe: Vec<String> = tags.into_iter().map(Into::into).collect();
        universe.sort_by(|a, b| compare_pt_br(a, b));
        universe.dedup();
        Self {
            universe,
            active: ActiveTags::All,
        }
    }

    pub fn from_projects(projects: &[Project]) -> Self {
        Self::new(projects.iter().flat_map(|p| p.tags.iter().cloned()))
    }

    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    pub fn active_tags(&self) -> &ActiveTags {
        &self.active
    }

    pub fn is_all(&self) -> bool {
        matches!(self.active, ActiveTags::All)
    }

    /// Chip state: every tag reads as active while "all" is selected.
    pub fn is_active(&self, tag: &str) -> bool {
        match &self.active {
            ActiveTags::All => self.index_of(tag).is_some(),
            ActiveTags::Only(set) => self.index_of(tag).is_some_and(|i| set.contains(i)),
        }
    }

    /// Active tags in universe order.
    pub fn active(&self) -> Vec<&str> {
        match &self.active {
            ActiveTags::All => self.universe.iter().map(String::as_str).collect(),
            ActiveTags::Only(set) => set.iter().map(|i| self.universe[i].as_str()).collect(),
        }
    }

    /// Applies a chip click. Returns `true` if the selection changed.
    ///
    /// - from "all", the clicked tag becomes the only active one;
    /// - an active tag is switched off, falling back to "all" if it was the last;
    /// - an inactive tag is added, becoming "all" once nothing is left out.
    pub fn toggle(&mut self, tag: &str) -> bool {
        let Some(i) = self.index_of(tag) else {
            return false;
        };
        let next = match &self.active {
            ActiveTags::All => self.normalize([i].into_iter().collect()),
            ActiveTags::Only(set) => {
                let mut set = set.clone();
                if !set.remove(i) {
                    set.insert(i);
                }
                self.normalize(set)
            }
        };
        let changed = next != self.active;
        self.active = next;
        changed
    }

    /// Persisted form: empty for "all", otherwise the active tags.
    pub fn to_persisted(&self) -> Vec<String> {
        match &self.active {
            ActiveTags::All => Vec::new(),
            ActiveTags::Only(_) => self.active().into_iter().map(str::to_string).collect(),
        }
    }

    /// Restores a persisted selection, dropping tags this universe lacks.
    pub fn restore<S: AsRef<str>>(&mut self, persisted: &[S]) {
        let set: IndexSet = persisted
            .iter()
            .filter_map(|t| self.index_of(t.as_ref()))
            .collect();
        self.active = self.normalize(set);
    }

    fn normalize(&self, set: IndexSet) -> ActiveTags {
        if set.is_empty() || set.len() == self.universe.len() {
            ActiveTags::All
        } else {
            ActiveTags::Only(set)
        }
    }

    fn index_of(&self, tag: &str) -> Option<usize> {
        self.universe.iter().position(|t| t == tag)
    }
}

/// Number of projects carrying each tag, in universe order.
pub fn tag_counts<'a>(universe: &'a [String], projects: &[Project]) -> Vec<(&'a str, usize)> {
    universe
        .iter()
        .map(|tag| {
            let n = projects
                .iter()
                .map(|p| p.tags.iter().filter(|t| *t == tag).count())
                .sum();
            (tag.as_str(), n)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn universe() -> TagSelection {
        TagSelection::new(["Vidro", "Óleo", "Educação", "Vidro"])
    }

    #[test]
    fn universe_is_distinct_and_collated() {
        assert_eq!(universe().universe(), ["Educação", "Óleo", "Vidro"]);
        assert!(universe().is_all());
    }

    #[test]
    fn drill_down_from_all_isolates_tag() {
        let mut s = universe();
        assert!(s.toggle("Óleo"));
        assert_eq!(s.active(), vec!["Óleo"]);
        assert!(!s.is_all());
        assert!(s.is_active("Óleo"));
        assert!(!s.is_active("Vidro"));
    }

    #[test]
    fn adding_tags_back_to_full_becomes_all() {
        let mut s = universe();
        s.toggle("Óleo");
        s.toggle("Vidro");
        assert_eq!(s.active(), vec!["Óleo", "Vidro"]);
        s.toggle("Educação");
        assert!(s.is_all());
    }

    #[test]
    fn removing_last_active_tag_resets_to_all() {
        let mut s = universe();
        s.toggle("Vidro");
        assert!(s.toggle("Vidro"));
        assert!(s.is_all());
        assert_eq!(s.active().len(), 3);
    }

    #[test]
    fn removing_one_of_several_keeps_the_rest() {
        let mut s = universe();
        s.toggle("Vidro");
        s.toggle("Óleo");
        s.toggle("Vidro");
        assert_eq!(s.active(), vec!["Óleo"]);
    }

    #[test]
    fn single_tag_universe_stays_all() {
        let mut s = TagSelection::new(["Vidro"]);
        assert!(!s.toggle("Vidro"));
        assert!(s.is_all());
    }

    #[test]
    fn unknown_tags_are_ignored() {
        let mut s = universe();
        assert!(!s.toggle("Pilhas"));
        assert!(!s.is_active("Pilhas"));
    }

    #[test]
    fn persisted_all_round_trips_as_all() {
        let s = universe();
        let saved = s.to_persisted();
        assert!(saved.is_empty());
        let mut back = universe();
        back.toggle("Vidro");
        back.restore(&saved);
        assert!(back.is_all());
    }

    #[test]
    fn persisted_subset_round_trips() {
        let mut s = universe();
        s.toggle("Vidro");
        let saved = s.to_persisted();
        assert_eq!(saved, vec!["Vidro".to_string()]);
        let mut back = universe();
        back.restore(&saved);
        assert_eq!(back.active(), vec!["Vidro"]);
    }

    #[test]
    fn restore_drops_unknown_tags() {
        let mut s = universe();
        s.restore(&["Pilhas", "Óleo"]);
        assert_eq!(s.active(), vec!["Óleo"]);
        s.restore(&["Pilhas"]);
        assert!(s.is_all());
    }

    #[test]
    fn counts_follow_universe_order() {
        let projects = vec![
            Project {
                title: "A".into(),
                desc: None,
                tags: vec!["Vidro".into(), "Óleo".into()],
                thumb: None,
                url: None,
                kind: None,
            },
            Project {
                title: "B".into(),
                desc: None,
                tags: vec!["Vidro".into()],
                thumb: None,
                url: None,
                kind: None,
            },
        ];
        let s = TagSelection::from_projects(&projects);
        assert_eq!(
            tag_counts(s.universe(), &projects),
            vec![("Óleo", 1), ("Vidro", 2)]
        );
    }

    proptest! {
        #[test]
        fn selection_is_never_empty(
            names in prop::collection::btree_set("[a-z]{1,5}", 1..7),
            ops in prop::collection::vec(any::<usize>(), 0..50),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let mut s = TagSelection::new(names.clone());
            for op in ops {
                s.toggle(&names[op % names.len()]);
                prop_assert!(!s.active().is_empty());
                if let ActiveTags::Only(set) = s.active_tags() {
                    prop_assert!(!set.is_empty());
                    prop_assert!(set.len() < names.len());
                }
            }
        }

        #[test]
        fn drill_down_yields_exactly_the_clicked_tag(
            names in prop::collection::btree_set("[a-z]{1,5}", 2..7),
            pick in any::<usize>(),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let tag = &names[pick % names.len()];
            let mut s = TagSelection::new(names.clone());
            s.toggle(tag);
            prop_assert_eq!(s.active(), vec![tag.as_str()]);
        }

        #[test]
        fn deactivating_the_only_tag_restores_the_universe(
            names in prop::collection::btree_set("[a-z]{1,5}", 2..7),
            pick in any::<usize>(),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let tag = &names[pick % names.len()];
            let mut s = TagSelection::new(names.clone());
            s.toggle(tag);
            s.toggle(tag);
            prop_assert!(s.is_all());
            prop_assert_eq!(s.active().len(), names.len());
        }
    }
}
