//! schema.org JSON-LD graph for search engines.

use serde_json::{Map, Value, json};

use crate::{ContentDocument, Event, Project};

const ORGANIZER: &str = "UNIVALI - Semana Lixo Zero";

/// Builds the `@graph` document for `doc`. Relative thumbnails resolve
/// against `base_url` (the page URL without `index.html`).
pub fn structured_data(doc: &ContentDocument, base_url: &str) -> Value {
    let base = url::Url::parse(base_url).ok();
    let mut graph: Vec<Value> = doc.events.iter().map(event_node).collect();
    graph.extend(doc.projects.iter().map(|p| project_node(p, base.as_ref())));

    json!({
        "@context": "https://schema.org",
        "@graph": graph,
    })
}

/// Page URL the thumbnails resolve against: origin plus path, minus a
/// trailing `index.html`.
pub fn page_base_url(origin: &str, pathname: &str) -> String {
    let path = pathname.strip_suffix("index.html").unwrap_or(pathname);
    format!("{origin}{path}")
}

fn event_node(event: &Event) -> Value {
    let online = event.is_online();
    let mut node = Map::new();
    node.insert("@type".into(), json!("Event"));
    node.insert("name".into(), json!(event.title));
    node.insert("startDate".into(), json!(event.date));
    insert_opt(&mut node, "endDate", event.end.as_deref());
    node.insert(
        "eventAttendanceMode".into(),
        json!(if online {
            "https://schema.org/OnlineEventAttendanceMode"
        } else {
            "https://schema.org/OfflineEventAttendanceMode"
        }),
    );
    node.insert(
        "eventStatus".into(),
        json!("https://schema.org/EventScheduled"),
    );

    let mut location = Map::new();
    if online {
        location.insert("@type".into(), json!("VirtualLocation"));
        insert_opt(&mut location, "url", event.cta.as_deref());
    } else {
        location.insert("@type".into(), json!("Place"));
        insert_opt(&mut location, "name", event.location.as_deref());
        insert_opt(&mut location, "address", event.location.as_deref());
    }
    node.insert("location".into(), Value::Object(location));
    node.insert(
        "organizer".into(),
        json!({ "@type": "Organization", "name": ORGANIZER }),
    );
    insert_opt(&mut node, "description", event.summary.as_deref());
    insert_opt(&mut node, "url", event.cta.as_deref());
    Value::Object(node)
}

fn project_node(project: &Project, base: Option<&url::Url>) -> Value {
    let thumb = project.thumb.as_deref().and_then(|t| resolve(base, t));
    let kind = project.kind.as_deref();

    let mut node = Map::new();
    let type_name = match kind {
        Some("video") => "VideoObject",
        Some("image") => "ImageObject",
        _ => "CreativeWork",
    };
    node.insert("@type".into(), json!(type_name));
    node.insert("name".into(), json!(project.title));
    insert_opt(&mut node, "description", project.desc.as_deref());
    insert_opt(&mut node, "url", project.url.as_deref());
    node.insert("inLanguage".into(), json!("pt-BR"));
    if !project.tags.is_empty() {
        node.insert("keywords".into(), json!(project.tags.join(", ")));
    }

    match kind {
        Some("video") => {
            if let Some(t) = thumb {
                node.insert("thumbnailUrl".into(), json!([t]));
            }
        }
        Some("pdf") => {
            node.insert("encodingFormat".into(), json!("application/pdf"));
            insert_opt(&mut node, "contentUrl", project.url.as_deref());
            insert_opt(&mut node, "thumbnailUrl", thumb.as_deref());
        }
        Some("image") => {
            insert_opt(&mut node, "contentUrl", project.url.as_deref());
            if let Some(t) = thumb {
                node.insert("thumbnailUrl".into(), json!([t]));
            }
        }
        _ => insert_opt(&mut node, "thumbnailUrl", thumb.as_deref()),
    }
    Value::Object(node)
}

fn resolve(base: Option<&url::Url>, href: &str) -> Option<String> {
    match base {
        Some(b) => b.join(href).ok().map(|u| u.to_string()),
        None => url::Url::parse(href).ok().map(|u| u.to_string()),
    }
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        map.insert(key.to_string(), json!(v));
    }
}
