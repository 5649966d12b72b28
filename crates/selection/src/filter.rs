use content::Project;
use foundation::text::contains_ignore_case;

use crate::tags::TagSelection;

/// Tag selection plus free-text search over the project catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    tags: TagSelection,
    search: String,
}

impl ProjectFilter {
    pub fn new(tags: TagSelection) -> Self {
        Self {
            tags,
            search: String::new(),
        }
    }

    pub fn for_projects(projects: &[Project]) -> Self {
        Self::new(TagSelection::from_projects(projects))
    }

    pub fn tags(&self) -> &TagSelection {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagSelection {
        &mut self.tags
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.tags.toggle(tag)
    }

    /// Stored verbatim; case folding happens at match time.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn matches(&self, project: &Project) -> bool {
        let tag_ok = self.tags.is_all() || project.has_any_tag(self.tags.active());
        tag_ok && contains_ignore_case(&project.search_text(), &self.search)
    }

    /// Matching projects, in their original order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(title: &str, desc: Option<&str>, tags: &[&str]) -> Project {
        Project {
            title: title.into(),
            desc: desc.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            thumb: None,
            url: None,
            kind: None,
        }
    }

    fn catalog() -> Vec<Project> {
        vec![
            project("Coleta Seletiva", Some("Guia de separação"), &["Educação"]),
            project("Garrafas", None, &["Vidro"]),
            project("Sabão caseiro", Some("Reuso de óleo"), &["Óleo", "Educação"]),
            project("Sem tags", None, &[]),
        ]
    }

    #[test]
    fn empty_search_with_all_tags_matches_everything() {
        let projects = catalog();
        let f = ProjectFilter::for_projects(&projects);
        assert!(projects.iter().all(|p| f.matches(p)));
    }

    #[test]
    fn tag_mismatch_excludes_project() {
        let projects = catalog();
        let mut f = ProjectFilter::for_projects(&projects);
        f.toggle_tag("Óleo");
        assert!(!f.matches(&projects[1]));
        assert!(f.matches(&projects[2]));
        assert!(!f.matches(&projects[3]));
    }

    #[test]
    fn search_is_case_insensitive_over_title_desc_and_tags() {
        let projects = catalog();
        let mut f = ProjectFilter::for_projects(&projects);
        f.set_search_term("  ÓLEO ");
        let titles: Vec<_> = f.apply(&projects).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Sabão caseiro"]);

        f.set_search_term("educação");
        let titles: Vec<_> = f.apply(&projects).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Coleta Seletiva", "Sabão caseiro"]);
    }

    #[test]
    fn search_term_is_kept_verbatim() {
        let mut f = ProjectFilter::for_projects(&catalog());
        f.set_search_term("  Vidro ");
        assert_eq!(f.search_term(), "  Vidro ");
    }

    #[test]
    fn tags_and_search_combine() {
        let projects = catalog();
        let mut f = ProjectFilter::for_projects(&projects);
        f.toggle_tag("Educação");
        f.set_search_term("guia");
        let titles: Vec<_> = f.apply(&projects).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Coleta Seletiva"]);
    }
}
