//! Navigation menu structure.
//!
//! The menu document is fetched once at startup under a well-known
//! identifier and describes the site's link structure: an ordered list
//! of [`NavEntry`] values (plain links or dropdowns with link children)
//! plus a [`Footer`].
//!
//! Unlike page documents, links here are strict: an entry without `text`
//! or `page` fails the parse. Callers treat any menu parse failure as
//! "menu unavailable" and substitute a complete fallback menu, never a
//! partial merge.

use serde::Deserialize;

/// The site's link structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationMenu {
    /// Ordered top-level entries.
    pub entries: Vec<NavEntry>,
    /// Footer content.
    pub footer: Footer,
}

impl NavigationMenu {
    /// Parse a navigation menu from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the bytes are not valid
    /// JSON or do not match the menu schema.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// A top-level menu entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NavEntry {
    /// Direct link to a page.
    Link(NavLink),
    /// Labelled group of links.
    Dropdown(NavDropdown),
}

/// A link to a page, at top level or inside a dropdown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    /// Display text.
    pub text: String,
    /// Icon glyph identifier.
    #[serde(default)]
    pub icon: Option<String>,
    /// Target page identifier.
    #[serde(rename = "page")]
    pub page_id: String,
}

/// A labelled group of links.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavDropdown {
    /// Display text.
    pub text: String,
    /// Icon glyph identifier.
    #[serde(default)]
    pub icon: Option<String>,
    /// Links inside the group.
    #[serde(default, rename = "items")]
    pub children: Vec<NavLink>,
}

/// Footer content: brand tagline, social links, grouped link columns,
/// legal links, copyright.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Footer {
    pub tagline: Option<String>,
    pub social: Vec<SocialLink>,
    pub columns: Vec<FooterColumn>,
    pub legal: Vec<NavLink>,
    pub copyright: Option<String>,
    /// Trailing note under the copyright line.
    pub note: Option<String>,
}

/// An external social profile link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub icon: Option<String>,
    pub url: String,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_menu_parses_links_and_dropdowns() {
        let json = br#"{
            "entries": [
                {"type": "link", "text": "Home", "icon": "fas fa-home", "page": "home"},
                {
                    "type": "dropdown",
                    "text": "Services",
                    "icon": "fas fa-cube",
                    "items": [
                        {"text": "AI & Machine Learning", "icon": "fas fa-brain", "page": "ai-ml"}
                    ]
                }
            ]
        }"#;

        let menu = NavigationMenu::from_json(json).unwrap();

        assert_eq!(menu.entries.len(), 2);
        match &menu.entries[0] {
            NavEntry::Link(link) => assert_eq!(link.page_id, "home"),
            other => panic!("expected link, got {other:?}"),
        }
        match &menu.entries[1] {
            NavEntry::Dropdown(dd) => {
                assert_eq!(dd.text, "Services");
                assert_eq!(dd.children[0].page_id, "ai-ml");
            }
            other => panic!("expected dropdown, got {other:?}"),
        }
    }

    #[test]
    fn test_footer_parses_with_defaults() {
        let json = br#"{
            "entries": [],
            "footer": {
                "tagline": "Engineering Intelligent Solutions",
                "columns": [
                    {"title": "Company", "links": [{"text": "About Us", "page": "about"}]}
                ]
            }
        }"#;

        let menu = NavigationMenu::from_json(json).unwrap();

        assert_eq!(
            menu.footer.tagline.as_deref(),
            Some("Engineering Intelligent Solutions")
        );
        assert_eq!(menu.footer.columns[0].links[0].page_id, "about");
        assert!(menu.footer.social.is_empty());
        assert!(menu.footer.copyright.is_none());
    }

    #[test]
    fn test_link_without_target_is_an_error() {
        let json = br#"{"entries": [{"type": "link", "text": "Home"}]}"#;

        assert!(NavigationMenu::from_json(json).is_err());
    }

    #[test]
    fn test_empty_object_is_an_empty_menu() {
        let menu = NavigationMenu::from_json(b"{}").unwrap();

        assert!(menu.entries.is_empty());
        assert_eq!(menu.footer, Footer::default());
    }
}
