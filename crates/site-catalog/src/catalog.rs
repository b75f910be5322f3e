//! Catalog types: sections, products, and feature icons.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One entry in a product's feature list, shown in the detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub text: String,
}

/// Closed set of feature icons. Each maps to a static SVG path fragment;
/// unknown names deserialize to [`FeatureIcon::Box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureIcon {
    Lightbulb,
    #[default]
    Box,
    Search,
    Lock,
}

impl FeatureIcon {
    pub fn name(self) -> &'static str {
        match self {
            FeatureIcon::Lightbulb => "lightbulb",
            FeatureIcon::Box => "box",
            FeatureIcon::Search => "search",
            FeatureIcon::Lock => "lock",
        }
    }

    pub fn from_name(name: &str) -> FeatureIcon {
        match name {
            "lightbulb" => FeatureIcon::Lightbulb,
            "search" => FeatureIcon::Search,
            "lock" => FeatureIcon::Lock,
            _ => FeatureIcon::Box,
        }
    }

    /// Inner SVG markup for a 24x24 stroked icon.
    pub fn svg_path(self) -> &'static str {
        match self {
            FeatureIcon::Lightbulb => {
                r#"<path d="M9 18h6M10 22h4M15 2a7 7 0 0 1-5 13.4V18a2 2 0 0 0 2 2h2a2 2 0 0 0 2-2v-2.6A7 7 0 0 1 15 2z"/>"#
            }
            FeatureIcon::Box => {
                r#"<path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/><polyline points="3.27 6.96 12 12.01 20.73 6.96"/><line x1="12" y1="22.08" x2="12" y2="12"/>"#
            }
            FeatureIcon::Search => {
                r#"<circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/>"#
            }
            FeatureIcon::Lock => {
                r#"<rect x="3" y="11" width="18" height="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
            }
        }
    }
}

impl Serialize for FeatureIcon {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FeatureIcon {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let name = String::deserialize(d)?;
        Ok(FeatureIcon::from_name(&name))
    }
}

/// A product card plus its detail-modal payload. Grid cards use `img`,
/// `title`, `desc`, `tags`; the remaining fields only surface in the modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub img: String,
    pub title: String,
    pub desc: String,
    pub tags: Vec<String>,
    /// Detail gallery. When absent the modal falls back to `[img]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<String>,
    /// Index into [`crate::contact::INTEREST_OPTIONS`] for the handoff
    /// pre-selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<u32>,
}

impl Product {
    /// The slideshow image list: `images` when present, else `[img]`.
    pub fn gallery(&self) -> Vec<String> {
        match &self.images {
            Some(imgs) if !imgs.is_empty() => imgs.clone(),
            _ => vec![self.img.clone()],
        }
    }
}

/// Per-section hero copy and product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub key: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: String,
    pub products_title: String,
    pub products_subtitle: String,
    pub products: Vec<Product>,
}

impl CatalogEntry {
    /// Content value for a `data-content` key, if this entry carries one.
    pub fn content_value(&self, key: &str) -> Option<&str> {
        match key {
            "heroTitle" => Some(&self.hero_title),
            "heroSubtitle" => Some(&self.hero_subtitle),
            "heroImage" => Some(&self.hero_image),
            "productsTitle" => Some(&self.products_title),
            "productsSubtitle" => Some(&self.products_subtitle),
            _ => None,
        }
    }
}

/// Ordered, immutable section table. The first entry is the default.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Catalog {
        assert!(!entries.is_empty(), "catalog must have at least one section");
        Catalog { entries }
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn default_key(&self) -> &str {
        &self.entries[0].key
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Resolve a URL fragment (with or without the leading `#`) to a
    /// section key, falling back to the default for unknown or empty
    /// fragments.
    pub fn resolve_fragment<'a>(&'a self, fragment: &str) -> &'a str {
        let key = fragment.trim_start_matches('#');
        match self.get(key) {
            Some(entry) => &entry.key,
            None => self.default_key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::INTEREST_OPTIONS;

    #[test]
    fn builtin_catalog_has_both_sections() {
        let cat = Catalog::builtin();
        assert_eq!(cat.default_key(), "vitrinas");
        assert!(cat.contains("muebleria"));
        assert_eq!(cat.keys().count(), 2);
    }

    #[test]
    fn resolve_fragment_defaults_on_unknown() {
        let cat = Catalog::builtin();
        assert_eq!(cat.resolve_fragment("#muebleria"), "muebleria");
        assert_eq!(cat.resolve_fragment("muebleria"), "muebleria");
        assert_eq!(cat.resolve_fragment("#oficinas"), "vitrinas");
        assert_eq!(cat.resolve_fragment(""), "vitrinas");
        assert_eq!(cat.resolve_fragment("#"), "vitrinas");
    }

    #[test]
    fn gallery_falls_back_to_card_image() {
        let cat = Catalog::builtin();
        for entry in ["vitrinas", "muebleria"].map(|k| cat.get(k).unwrap()) {
            for product in &entry.products {
                let gallery = product.gallery();
                assert!(!gallery.is_empty(), "{} has empty gallery", product.title);
                if product.images.is_none() {
                    assert_eq!(gallery, vec![product.img.clone()]);
                }
            }
        }
    }

    #[test]
    fn builtin_categories_index_valid_interest_options() {
        let cat = Catalog::builtin();
        for key in ["vitrinas", "muebleria"] {
            for product in &cat.get(key).unwrap().products {
                if let Some(c) = product.category {
                    assert!((c as usize) < INTEREST_OPTIONS.len());
                }
            }
        }
    }

    #[test]
    fn feature_icon_unknown_name_falls_back_to_box() {
        assert_eq!(FeatureIcon::from_name("lightbulb"), FeatureIcon::Lightbulb);
        assert_eq!(FeatureIcon::from_name("sparkles"), FeatureIcon::Box);

        let f: Feature = serde_json::from_str(r#"{"icon":"wrench","text":"x"}"#).unwrap();
        assert_eq!(f.icon, FeatureIcon::Box);
        let f: Feature = serde_json::from_str(r#"{"icon":"lock","text":"x"}"#).unwrap();
        assert_eq!(f.icon, FeatureIcon::Lock);
    }

    #[test]
    fn content_value_covers_hero_and_products_copy() {
        let cat = Catalog::builtin();
        let entry = cat.get("vitrinas").unwrap();
        assert_eq!(entry.content_value("heroTitle"), Some(entry.hero_title.as_str()));
        assert_eq!(entry.content_value("heroImage"), Some(entry.hero_image.as_str()));
        assert_eq!(entry.content_value("productsGrid"), None);
    }
}
