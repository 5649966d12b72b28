use content::Project;
use selection::{FilterKeys, ProjectFilter, persist, tag_counts};
use storage::KeyValueStore;

use crate::backend::{CatalogSurface, GalleryBackend, GalleryOptions, TagChip};
use crate::card::ProjectCard;
use crate::motion::Motion;

/// Tag chips, search box and card grid over the project list.
///
/// Every render rebuilds the gallery so it only spans the cards on screen.
pub struct ProjectCatalogView<S: CatalogSurface, G: GalleryBackend, K: KeyValueStore> {
    surface: S,
    gallery: G,
    store: K,
    keys: FilterKeys,
    projects: Vec<Project>,
    filter: ProjectFilter,
    gallery_options: GalleryOptions,
    gallery_instance: Option<G::Instance>,
}

impl<S, G, K> ProjectCatalogView<S, G, K>
where
    S: CatalogSurface,
    G: GalleryBackend,
    K: KeyValueStore,
{
    pub fn mount(
        surface: S,
        gallery: G,
        store: K,
        keys: FilterKeys,
        projects: Vec<Project>,
        gallery_selector: &str,
        motion: Motion,
    ) -> Self {
        let mut filter = ProjectFilter::for_projects(&projects);
        persist::restore(&store, &keys, &mut filter);

        let mut view = Self {
            surface,
            gallery,
            store,
            keys,
            projects,
            filter,
            gallery_options: GalleryOptions::new(gallery_selector, motion),
            gallery_instance: None,
        };

        if !view.filter.search_term().is_empty() {
            view.surface.set_search_value(view.filter.search_term());
        }
        let chips = view.chips();
        view.surface.build_chips(&chips);
        view.render();
        view
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn gallery(&self) -> &G {
        &self.gallery
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    /// Search-box input.
    pub fn set_search_term(&mut self, term: &str) {
        self.filter.set_search_term(term);
        persist::save_search(&mut self.store, &self.keys, &self.filter);
        self.render();
    }

    /// Chip click.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.filter.toggle_tag(tag) {
            return;
        }
        persist::save_tags(&mut self.store, &self.keys, &self.filter);
        let tags = self.filter.tags();
        for t in tags.universe() {
            self.surface.set_chip_pressed(t, tags.is_active(t));
        }
        log::debug!("catalog tags -> {:?}", tags.active());
        self.render();
    }

    /// Redraws the grid for the current filter.
    pub fn render(&mut self) {
        let cards: Vec<ProjectCard> = self
            .filter
            .apply(&self.projects)
            .into_iter()
            .map(ProjectCard::from_project)
            .collect();
        self.surface.show_cards(&cards);
        self.surface.set_empty_state(cards.is_empty());

        if let Some(previous) = self.gallery_instance.take() {
            self.gallery.destroy(previous);
        }
        self.gallery_instance = self.gallery.register(&self.gallery_options);
    }

    fn chips(&self) -> Vec<TagChip> {
        let tags = self.filter.tags();
        tag_counts(tags.universe(), &self.projects)
            .into_iter()
            .map(|(tag, count)| TagChip {
                tag: tag.to_string(),
                label: format!("{tag} ({count})"),
                pressed: tags.is_active(tag),
            })
            .collect()
    }
}
