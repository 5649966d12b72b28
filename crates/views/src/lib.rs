//! Browser-independent view logic for the site: what the map, its panel,
//! the project catalog and the page chrome show, driven through capability
//! traits.

pub mod backend;
pub mod card;
pub mod catalog_view;
pub mod config;
pub mod map_view;
pub mod motion;
pub mod nav;
pub mod theme;

pub use backend::{
    CatalogSurface, FilterControl, GalleryBackend, GalleryOptions, ListEntry, MapBackend, MapPanel,
    TagChip,
};
pub use card::{CardMedia, OriginalLink, PreviewLink, ProjectCard};
pub use catalog_view::ProjectCatalogView;
pub use config::{GalleryConfig, MapConfig, QrConfig, SiteConfig, StorageKeys};
pub use map_view::{EMPTY_MAP_MESSAGE, MAP_UNAVAILABLE_MESSAGE, MapView, MapViewError};
pub use motion::Motion;
pub use nav::{MOBILE_QUERY, NavMenu, NavPresentation};
pub use theme::{Theme, load_theme, save_theme};
