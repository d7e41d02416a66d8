//! Static template and vertical catalogs
//!
//! Both tables are fixed at build time. Templates map a key to a starter
//! repository plus a human-readable description; verticals are metadata-only
//! customizations of the `customer-portal` template.

/// Template key that supports vertical selection
pub const VERTICAL_TEMPLATE: &str = "customer-portal";

/// Vertical that applies no customization
pub const DEFAULT_VERTICAL: &str = "generic";

/// A starter template entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Catalog key
    pub key: &'static str,
    /// Remote repository identifier (`owner/name` shorthand or full URL)
    pub repo: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

/// A vertical entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertical {
    /// Catalog key
    pub key: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

const TEMPLATES: &[Template] = &[
    Template {
        key: "customer-portal",
        repo: "0800tim/customer-portal-starter",
        description: "Customer-facing subscription management portal",
    },
    Template {
        key: "merchant-dashboard",
        repo: "0800tim/merchant-dashboard-starter",
        description: "Admin dashboard with analytics and operations",
    },
    Template {
        key: "liquid-widgets",
        repo: "0800tim/liquid-widgets-starter",
        description: "Shopify Liquid theme components",
    },
];

const VERTICALS: &[Vertical] = &[
    Vertical {
        key: "generic",
        description: "Generic subscription portal",
    },
    Vertical {
        key: "pet-food",
        description: "Pet food subscriptions (pet profiles, dietary preferences)",
    },
    Vertical {
        key: "coffee",
        description: "Coffee subscriptions (roast, grind, tasting notes)",
    },
    Vertical {
        key: "wine",
        description: "Wine club (cellar, ratings, pairings)",
    },
    Vertical {
        key: "beauty",
        description: "Beauty box (skin profile, routine builder)",
    },
    Vertical {
        key: "supplements",
        description: "Supplements (dosage tracking, reminders)",
    },
];

/// All templates in catalog order
pub fn templates() -> &'static [Template] {
    TEMPLATES
}

/// All verticals in catalog order
pub fn verticals() -> &'static [Vertical] {
    VERTICALS
}

/// Look up a template by key
pub fn template(key: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.key == key)
}

/// Look up a vertical by key
pub fn vertical(key: &str) -> Option<&'static Vertical> {
    VERTICALS.iter().find(|v| v.key == key)
}

/// Comma-separated template keys, for error messages
pub fn template_keys() -> String {
    TEMPLATES
        .iter()
        .map(|t| t.key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated vertical keys, for error messages
pub fn vertical_keys() -> String {
    VERTICALS
        .iter()
        .map(|v| v.key)
        .collect::<Vec<_>>()
        .join(", ")
}
