use content::{PreviewKind, Project, preview_target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMedia {
    Thumbnail { src: String, alt: String },
    /// Text block standing in for a missing thumbnail.
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLink {
    pub href: String,
    pub kind: PreviewKind,
    pub aria_label: String,
    /// Set for iframe previews only.
    pub iframe_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalLink {
    pub href: String,
    pub aria_label: String,
}

/// Everything one project card shows, independent of the DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub media: CardMedia,
    pub preview: Option<PreviewLink>,
    pub original: Option<OriginalLink>,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> Self {
        let title = project.title.clone();

        let media = match project.thumb.as_deref().filter(|t| !t.is_empty()) {
            Some(src) => CardMedia::Thumbnail {
                src: src.to_string(),
                alt: format!("Miniatura do projeto {title}"),
            },
            None => CardMedia::Placeholder(
                project
                    .tags
                    .first()
                    .filter(|t| !t.is_empty())
                    .or(project.kind.as_ref().filter(|k| !k.is_empty()))
                    .cloned()
                    .unwrap_or_else(|| "Projeto".to_string()),
            ),
        };

        let preview = preview_target(project).map(|t| PreviewLink {
            iframe_title: (t.kind == PreviewKind::Iframe)
                .then(|| format!("Visualização do projeto {title}")),
            aria_label: format!("Visualizar {title}"),
            href: t.href,
            kind: t.kind,
        });

        let original = project
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|href| OriginalLink {
                href: href.to_string(),
                aria_label: format!("Abrir {title} em nova aba"),
            });

        ProjectCard {
            description: project.desc.clone().filter(|d| !d.is_empty()),
            tags: project.tags.clone(),
            media,
            preview,
            original,
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project() -> Project {
        Project {
            title: "Coleta Seletiva".into(),
            desc: Some("Como separar".into()),
            tags: vec!["Educação".into()],
            thumb: None,
            url: Some("https://youtu.be/abc123".into()),
            kind: Some("video".into()),
        }
    }

    #[test]
    fn video_card_has_preview_and_original() {
        let card = ProjectCard::from_project(&project());
        assert_eq!(card.media, CardMedia::Placeholder("Educação".into()));
        let preview = card.preview.unwrap();
        assert_eq!(preview.kind, PreviewKind::Video);
        assert!(preview.href.contains("/embed/abc123"));
        assert_eq!(preview.iframe_title, None);
        assert_eq!(
            card.original,
            Some(OriginalLink {
                href: "https://youtu.be/abc123".into(),
                aria_label: "Abrir Coleta Seletiva em nova aba".into(),
            })
        );
    }

    #[test]
    fn pdf_card_titles_its_iframe() {
        let mut p = project();
        p.kind = Some("pdf".into());
        p.thumb = Some("assets/t.jpg".into());
        let card = ProjectCard::from_project(&p);
        assert_eq!(
            card.media,
            CardMedia::Thumbnail {
                src: "assets/t.jpg".into(),
                alt: "Miniatura do projeto Coleta Seletiva".into(),
            }
        );
        assert_eq!(
            card.preview.unwrap().iframe_title.as_deref(),
            Some("Visualização do projeto Coleta Seletiva")
        );
    }

    #[test]
    fn unknown_kind_has_only_the_original_link() {
        let mut p = project();
        p.kind = Some("site".into());
        let card = ProjectCard::from_project(&p);
        assert!(card.preview.is_none());
        assert!(card.original.is_some());
    }

    #[test]
    fn placeholder_falls_back_to_kind_then_generic_label() {
        let mut p = project();
        p.tags.clear();
        assert_eq!(
            ProjectCard::from_project(&p).media,
            CardMedia::Placeholder("video".into())
        );
        p.kind = None;
        p.url = None;
        let card = ProjectCard::from_project(&p);
        assert_eq!(card.media, CardMedia::Placeholder("Projeto".into()));
        assert!(card.preview.is_none());
        assert!(card.original.is_none());
    }
}
