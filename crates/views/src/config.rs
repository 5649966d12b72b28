use serde::{Deserialize, Serialize};

use selection::FilterKeys;

/// Site-wide settings.
///
/// Every field has a default; a page can override any subset through an
/// inline `<script id="site-config" type="application/json">` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub content_url: String,
    pub map: MapConfig,
    pub storage: StorageKeys,
    pub gallery: GalleryConfig,
    pub qr: QrConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_url: content::CONTENT_PATH.to_string(),
            map: MapConfig::default(),
            storage: StorageKeys::default(),
            gallery: GalleryConfig::default(),
            qr: QrConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Defaults with the fields present in `raw` replaced.
    pub fn with_overrides(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    pub max_zoom: u8,
    /// Zoom used when a single point is focused.
    pub focus_zoom: u8,
    /// Pixels kept free around the points when fitting the initial view.
    pub fit_padding: [u32; 2],
    /// Element scrolled into view after focusing a point.
    pub section_id: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contribuidores".to_string(),
            max_zoom: 19,
            focus_zoom: 15,
            fit_padding: [32, 48],
            section_id: "mapa".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub filter: FilterKeys,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            filter: FilterKeys::default(),
            theme: "lz-theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Class marking preview links that join the lightbox.
    pub link_class: String,
    /// `data-gallery` group shared by every preview link.
    pub group: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            link_class: "js-lightbox".to_string(),
            group: "projects".to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn selector(&self) -> String {
        format!(".{}", self.link_class)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    pub api_url: String,
    pub size_px: u32,
    pub filename: String,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            size_px: 1000,
            filename: "lixo-zero-express-qr.png".to_string(),
        }
    }
}

impl QrConfig {
    /// Image request encoding `page_url`.
    pub fn request_url(&self, page_url: &str) -> String {
        let data: String = url::form_urlencoded::byte_serialize(page_url.as_bytes()).collect();
        format!(
            "{}?size={size}x{size}&data={data}",
            self.api_url,
            size = self.size_px
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_published_site() {
        let c = SiteConfig::default();
        assert_eq!(c.content_url, "content/projects.json");
        assert_eq!(c.map.focus_zoom, 15);
        assert_eq!(c.map.fit_padding, [32, 48]);
        assert_eq!(c.storage.filter.tags, "lz-project-tags");
        assert_eq!(c.storage.filter.search, "lz-project-search");
        assert_eq!(c.storage.theme, "lz-theme");
        assert_eq!(c.gallery.selector(), ".js-lightbox");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let c = SiteConfig::with_overrides(
            r#"{ "content_url": "data/site.json", "map": { "focus_zoom": 17 } }"#,
        )
        .unwrap();
        assert_eq!(c.content_url, "data/site.json");
        assert_eq!(c.map.focus_zoom, 17);
        assert_eq!(c.map.max_zoom, 19);
        assert_eq!(c.qr, QrConfig::default());
    }

    #[test]
    fn blank_override_is_default() {
        assert_eq!(SiteConfig::with_overrides("  ").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(SiteConfig::with_overrides("{").is_err());
    }

    #[test]
    fn qr_request_encodes_page_url() {
        let url = QrConfig::default().request_url("https://site.example/lz/?a=1");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=1000x1000&data=https%3A%2F%2Fsite.example%2Flz%2F%3Fa%3D1"
        );
    }
}
