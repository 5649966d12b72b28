//! Saving and restoring the catalog filter across visits.
//!
//! Nothing here fails outward: unreadable entries read as absent and write
//! errors are logged.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use storage::KeyValueStore;

use crate::filter::ProjectFilter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterKeys {
    pub tags: String,
    pub search: String,
}

impl Default for FilterKeys {
    fn default() -> Self {
        Self {
            tags: "lz-project-tags".to_string(),
            search: "lz-project-search".to_string(),
        }
    }
}

/// Loads the persisted tag selection and search term into `filter`.
pub fn restore<S: KeyValueStore>(store: &S, keys: &FilterKeys, filter: &mut ProjectFilter) {
    let tags: Vec<String> = match store.get_json::<Vec<Value>>(&keys.tags) {
        Ok(entries) => entries
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        Err(err) => {
            log::debug!("ignoring stored tag selection: {err}");
            Vec::new()
        }
    };
    filter.tags_mut().restore(&tags);

    match store.get(&keys.search) {
        Ok(term) => filter.set_search_term(term.unwrap_or_default()),
        Err(err) => log::debug!("ignoring stored search term: {err}"),
    }
}

pub fn save_tags<S: KeyValueStore>(store: &mut S, keys: &FilterKeys, filter: &ProjectFilter) {
    if let Err(err) = store.set_json(&keys.tags, &filter.tags().to_persisted()) {
        log::warn!("could not persist tag selection: {err}");
    }
}

pub fn save_search<S: KeyValueStore>(store: &mut S, keys: &FilterKeys, filter: &ProjectFilter) {
    if let Err(err) = store.set(&keys.search, filter.search_term()) {
        log::warn!("could not persist search term: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagSelection;
    use pretty_assertions::assert_eq;
    use storage::{InMemoryStore, StorageError};

    fn filter() -> ProjectFilter {
        ProjectFilter::new(TagSelection::new(["Educação", "Vidro", "Óleo"]))
    }

    #[test]
    fn nothing_stored_means_defaults() {
        let mut f = filter();
        restore(&InMemoryStore::new(), &FilterKeys::default(), &mut f);
        assert!(f.tags().is_all());
        assert_eq!(f.search_term(), "");
    }

    #[test]
    fn all_is_saved_as_empty_list() {
        let keys = FilterKeys::default();
        let mut store = InMemoryStore::new();
        save_tags(&mut store, &keys, &filter());
        assert_eq!(store.get("lz-project-tags").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn subset_and_search_round_trip() {
        let keys = FilterKeys::default();
        let mut store = InMemoryStore::new();
        let mut f = filter();
        f.toggle_tag("Vidro");
        f.set_search_term("garrafa");
        save_tags(&mut store, &keys, &f);
        save_search(&mut store, &keys, &f);

        let mut back = filter();
        restore(&store, &keys, &mut back);
        assert_eq!(back, f);
    }

    #[test]
    fn malformed_tag_entry_is_ignored() {
        let store = InMemoryStore::with_entries([
            ("lz-project-tags", "{not json"),
            ("lz-project-search", "vidro"),
        ]);
        let mut f = filter();
        restore(&store, &FilterKeys::default(), &mut f);
        assert!(f.tags().is_all());
        assert_eq!(f.search_term(), "vidro");
    }

    #[test]
    fn wrong_shape_is_ignored() {
        let store = InMemoryStore::with_entries([("lz-project-tags", r#"{"a":1}"#)]);
        let mut f = filter();
        restore(&store, &FilterKeys::default(), &mut f);
        assert!(f.tags().is_all());
    }

    #[test]
    fn non_string_entries_are_skipped() {
        let store =
            InMemoryStore::with_entries([("lz-project-tags", r#"["Vidro",1,null,"Óleo"]"#)]);
        let mut f = filter();
        restore(&store, &FilterKeys::default(), &mut f);
        assert_eq!(f.tags().active(), vec!["Óleo", "Vidro"]);
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn unavailable_storage_is_not_fatal() {
        let mut f = filter();
        restore(&BrokenStore, &FilterKeys::default(), &mut f);
        save_tags(&mut BrokenStore, &FilterKeys::default(), &f);
        save_search(&mut BrokenStore, &FilterKeys::default(), &f);
        assert!(f.tags().is_all());
    }
}
