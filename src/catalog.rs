//! Catalog registry and preview parameter contracts.
//!
//! The registry is the machine-readable side of the component library: one
//! [`ComponentEntry`] per component carrying its prop contract
//! ([`PropSpec`]) and named example prop-sets ([`Variant`]). The `*Params`
//! records mirror the component props field-for-field so preview URLs can
//! override any subset; their serde defaults are the component defaults, so
//! the two contracts cannot drift.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ui::components::{HeroCentered, HeroSplit, hero_centered, hero_split};

/// One cataloged component.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentEntry {
    /// URL-safe identifier.
    pub slug: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Catalog grouping.
    pub category: &'static str,
    /// One-line description shown on the index.
    pub description: &'static str,
    /// Path of the preview route.
    pub preview_path: &'static str,
    /// Prop contract: name, kind, and default for every prop.
    pub props: &'static [PropSpec],
    /// Named example prop-sets.
    pub variants: &'static [Variant],
}

impl ComponentEntry {
    /// Preview URL for a variant of this component.
    #[must_use]
    pub fn variant_href(&self, variant: &Variant) -> String {
        if variant.query.is_empty() {
            self.preview_path.to_owned()
        } else {
            format!("{}?{}", self.preview_path, variant.query)
        }
    }
}

/// A single prop in a component's contract.
#[derive(Debug, Clone, Serialize)]
pub struct PropSpec {
    pub name: &'static str,
    pub kind: PropKind,
    /// Default value, rendered as text.
    pub default: &'static str,
}

/// Prop value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    Text,
    Boolean,
}

/// A named example prop-set, linked from the catalog index and the preview
/// toolbar. `query` is the URL-encoded query string applied on top of the
/// defaults; empty means "all defaults".
#[derive(Debug, Clone, Serialize)]
pub struct Variant {
    pub name: &'static str,
    pub query: &'static str,
}

/// Registry entry for [`HeroSplit`].
pub static HERO_SPLIT: ComponentEntry = ComponentEntry {
    slug: "hero-split",
    name: "HeroSplit",
    category: "heroes",
    description: "Two-column hero with copy, a button pair, and an image or placeholder panel.",
    preview_path: "/preview/hero-split",
    props: &[
        PropSpec {
            name: "title",
            kind: PropKind::Text,
            default: hero_split::defaults::TITLE,
        },
        PropSpec {
            name: "description",
            kind: PropKind::Text,
            default: hero_split::defaults::DESCRIPTION,
        },
        PropSpec {
            name: "primary_btn_text",
            kind: PropKind::Text,
            default: hero_split::defaults::PRIMARY_BTN_TEXT,
        },
        PropSpec {
            name: "secondary_btn_text",
            kind: PropKind::Text,
            default: hero_split::defaults::SECONDARY_BTN_TEXT,
        },
        PropSpec {
            name: "image_url",
            kind: PropKind::Text,
            default: hero_split::defaults::IMAGE_URL,
        },
        PropSpec {
            name: "image_placeholder",
            kind: PropKind::Text,
            default: hero_split::defaults::IMAGE_PLACEHOLDER,
        },
    ],
    variants: &[
        Variant {
            name: "Default",
            query: "",
        },
        Variant {
            name: "With image",
            query: "image_url=https%3A%2F%2Fpicsum.photos%2F1280%2F960",
        },
        Variant {
            name: "Custom copy",
            query: "title=Ship%20your%20next%20launch&primary_btn_text=Start%20free",
        },
    ],
};

/// Registry entry for [`HeroCentered`].
pub static HERO_CENTERED: ComponentEntry = ComponentEntry {
    slug: "hero-centered",
    name: "HeroCentered",
    category: "heroes",
    description: "Centered hero with optional badge, email capture, and disclaimer.",
    preview_path: "/preview/hero-centered",
    props: &[
        PropSpec {
            name: "badge",
            kind: PropKind::Text,
            default: hero_centered::defaults::BADGE,
        },
        PropSpec {
            name: "title",
            kind: PropKind::Text,
            default: hero_centered::defaults::TITLE,
        },
        PropSpec {
            name: "description",
            kind: PropKind::Text,
            default: hero_centered::defaults::DESCRIPTION,
        },
        PropSpec {
            name: "cta_text",
            kind: PropKind::Text,
            default: hero_centered::defaults::CTA_TEXT,
        },
        PropSpec {
            name: "show_email_input",
            kind: PropKind::Boolean,
            default: "true",
        },
        PropSpec {
            name: "email_placeholder",
            kind: PropKind::Text,
            default: hero_centered::defaults::EMAIL_PLACEHOLDER,
        },
        PropSpec {
            name: "disclaimer",
            kind: PropKind::Text,
            default: hero_centered::defaults::DISCLAIMER,
        },
    ],
    variants: &[
        Variant {
            name: "Default",
            query: "",
        },
        Variant {
            name: "No badge",
            query: "badge=",
        },
        Variant {
            name: "Button only",
            query: "show_email_input=false",
        },
        Variant {
            name: "With disclaimer",
            query: "disclaimer=We%20care%20about%20your%20data.%20Unsubscribe%20any%20time.",
        },
    ],
};

/// Every registered component, in catalog order.
#[must_use]
pub fn entries() -> [&'static ComponentEntry; 2] {
    [&HERO_SPLIT, &HERO_CENTERED]
}

/// Preview parameters for [`HeroSplit`]. Deserialized from the preview
/// query string; every field is optional and falls back to the component
/// default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeroSplitParams {
    pub title: String,
    pub description: String,
    pub primary_btn_text: String,
    pub secondary_btn_text: String,
    pub image_url: String,
    pub image_placeholder: String,
}

impl Default for HeroSplitParams {
    fn default() -> Self {
        Self {
            title: hero_split::defaults::TITLE.to_owned(),
            description: hero_split::defaults::DESCRIPTION.to_owned(),
            primary_btn_text: hero_split::defaults::PRIMARY_BTN_TEXT.to_owned(),
            secondary_btn_text: hero_split::defaults::SECONDARY_BTN_TEXT.to_owned(),
            image_url: hero_split::defaults::IMAGE_URL.to_owned(),
            image_placeholder: hero_split::defaults::IMAGE_PLACEHOLDER.to_owned(),
        }
    }
}

impl HeroSplitParams {
    /// Build the component view for these parameters.
    pub fn view(self) -> impl IntoView {
        view! {
            <HeroSplit
                title=self.title
                description=self.description
                primary_btn_text=self.primary_btn_text
                secondary_btn_text=self.secondary_btn_text
                image_url=self.image_url
                image_placeholder=self.image_placeholder
            />
        }
    }

    /// Render the component with these parameters to an HTML string.
    #[must_use]
    pub fn render(self) -> String {
        self.view().to_html()
    }
}

/// Preview parameters for [`HeroCentered`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeroCenteredParams {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub cta_text: String,
    pub show_email_input: bool,
    pub email_placeholder: String,
    pub disclaimer: String,
}

impl Default for HeroCenteredParams {
    fn default() -> Self {
        Self {
            badge: hero_centered::defaults::BADGE.to_owned(),
            title: hero_centered::defaults::TITLE.to_owned(),
            description: hero_centered::defaults::DESCRIPTION.to_owned(),
            cta_text: hero_centered::defaults::CTA_TEXT.to_owned(),
            show_email_input: hero_centered::defaults::SHOW_EMAIL_INPUT,
            email_placeholder: hero_centered::defaults::EMAIL_PLACEHOLDER.to_owned(),
            disclaimer: hero_centered::defaults::DISCLAIMER.to_owned(),
        }
    }
}

impl HeroCenteredParams {
    /// Build the component view for these parameters.
    pub fn view(self) -> impl IntoView {
        view! {
            <HeroCentered
                badge=self.badge
                title=self.title
                description=self.description
                cta_text=self.cta_text
                show_email_input=self.show_email_input
                email_placeholder=self.email_placeholder
                disclaimer=self.disclaimer
            />
        }
    }

    /// Render the component with these parameters to an HTML string.
    #[must_use]
    pub fn render(self) -> String {
        self.view().to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_render_same_as_omitted_props() {
        let from_params = HeroSplitParams::default().render();
        let from_props = view! { <HeroSplit/> }.to_html();
        assert_eq!(from_params, from_props);

        let from_params = HeroCenteredParams::default().render();
        let from_props = view! { <HeroCentered/> }.to_html();
        assert_eq!(from_params, from_props);
    }

    #[test]
    fn params_deserialize_with_defaults_for_missing_fields() {
        let params: HeroCenteredParams =
            serde_json::from_str(r#"{"badge":"Beta"}"#).expect("deserialize");
        assert_eq!(params.badge, "Beta");
        assert_eq!(params.title, hero_centered::defaults::TITLE);
        assert!(params.show_email_input);

        let params: HeroSplitParams = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(params.title, hero_split::defaults::TITLE);
        assert_eq!(params.image_url, "");
    }

    #[test]
    fn prop_specs_match_component_defaults() {
        let title = HERO_SPLIT
            .props
            .iter()
            .find(|p| p.name == "title")
            .expect("title prop");
        assert_eq!(title.default, hero_split::defaults::TITLE);
        assert_eq!(title.kind, PropKind::Text);

        let toggle = HERO_CENTERED
            .props
            .iter()
            .find(|p| p.name == "show_email_input")
            .expect("toggle prop");
        assert_eq!(toggle.kind, PropKind::Boolean);
        assert_eq!(toggle.default, "true");
    }

    #[test]
    fn variant_hrefs_append_query_when_present() {
        let default = &HERO_SPLIT.variants[0];
        assert_eq!(HERO_SPLIT.variant_href(default), "/preview/hero-split");

        let with_image = &HERO_SPLIT.variants[1];
        let href = HERO_SPLIT.variant_href(with_image);
        assert!(href.starts_with("/preview/hero-split?image_url="));
    }

    #[test]
    fn registry_lists_both_components() {
        let slugs: Vec<_> = entries().iter().map(|e| e.slug).collect();
        assert_eq!(slugs, ["hero-split", "hero-centered"]);
    }
}
