//! Navigation model for the Vela view engine.
//!
//! Pure menu logic layered over the router's event stream:
//!
//! - [`active_entry`] derives which menu link matches a page identifier
//! - [`ActiveEntryTracker`] keeps that derivation current by applying
//!   [`RouterEvent`]s
//! - [`load_menu`] fetches the site's menu document at startup and falls
//!   back to [`default_menu`] when the document is unavailable or
//!   unparseable (wholesale, never a partial merge)

use vela_model::{Footer, FooterColumn, NavDropdown, NavEntry, NavLink, NavigationMenu, SocialLink};
use vela_router::RouterEvent;
use vela_source::ContentSource;

/// Well-known identifier of the menu document.
pub const NAVIGATION_DOC_ID: &str = "navigation";

/// Find the menu link matching a page identifier.
///
/// Scans top-level links first, then dropdown children, in menu order;
/// the first match wins, so at most one entry is ever active. Returns
/// `None` when the page is not represented in the menu.
#[must_use]
pub fn active_entry<'a>(menu: &'a NavigationMenu, page_id: &str) -> Option<&'a NavLink> {
    menu.entries.iter().find_map(|entry| match entry {
        NavEntry::Link(link) if link.page_id == page_id => Some(link),
        NavEntry::Link(_) => None,
        NavEntry::Dropdown(dropdown) => dropdown
            .children
            .iter()
            .find(|child| child.page_id == page_id),
    })
}

/// Fetch and parse the site menu, falling back to [`default_menu`].
///
/// Any failure (transport, missing document, parse error) logs a
/// warning and yields the complete fallback menu. A fetched menu is
/// never merged with the fallback.
pub async fn load_menu(source: &dyn ContentSource, menu_id: &str) -> NavigationMenu {
    match source.fetch(menu_id).await {
        Ok(bytes) => match NavigationMenu::from_json(&bytes) {
            Ok(menu) => menu,
            Err(err) => {
                tracing::warn!(menu_id, error = %err, "Menu document malformed, using fallback");
                default_menu()
            }
        },
        Err(err) => {
            tracing::warn!(menu_id, error = %err, "Menu fetch failed, using fallback");
            default_menu()
        }
    }
}

fn link(text: &str, icon: &str, page_id: &str) -> NavLink {
    NavLink {
        text: text.to_owned(),
        icon: Some(icon.to_owned()),
        page_id: page_id.to_owned(),
    }
}

fn plain_link(text: &str, page_id: &str) -> NavLink {
    NavLink {
        text: text.to_owned(),
        icon: None,
        page_id: page_id.to_owned(),
    }
}

/// The hardcoded menu used when the menu document is unavailable.
#[must_use]
pub fn default_menu() -> NavigationMenu {
    NavigationMenu {
        entries: vec![
            NavEntry::Link(link("Home", "fas fa-home", "home")),
            NavEntry::Dropdown(NavDropdown {
                text: "Services".to_owned(),
                icon: Some("fas fa-cube".to_owned()),
                children: vec![
                    link("AI & Machine Learning", "fas fa-brain", "ai-ml"),
                    link("Modern Web & Mobile", "fas fa-code", "web-mobile"),
                    link("Enterprise Solutions", "fas fa-server", "enterprise"),
                    link("Creative & UX Design", "fas fa-paint-brush", "design"),
                ],
            }),
            NavEntry::Dropdown(NavDropdown {
                text: "Technologies".to_owned(),
                icon: Some("fas fa-microchip".to_owned()),
                children: vec![
                    link("AI/ML Stack", "fas fa-robot", "ai-stack"),
                    link("Web Stack", "fas fa-globe", "web-stack"),
                    link("Cloud & Data", "fas fa-cloud", "cloud-stack"),
                ],
            }),
            NavEntry::Link(link("Case Studies", "fas fa-chart-line", "case-studies")),
            NavEntry::Link(link("About", "fas fa-users", "about")),
            NavEntry::Link(link("Contact", "fas fa-envelope", "contact")),
        ],
        footer: Footer {
            tagline: Some("Engineering the Intelligent Future with AI-first solutions".to_owned()),
            social: vec![
                SocialLink {
                    icon: Some("fab fa-twitter".to_owned()),
                    url: "https://twitter.com".to_owned(),
                },
                SocialLink {
                    icon: Some("fab fa-linkedin-in".to_owned()),
                    url: "https://linkedin.com".to_owned(),
                },
                SocialLink {
                    icon: Some("fab fa-github".to_owned()),
                    url: "https://github.com".to_owned(),
                },
                SocialLink {
                    icon: Some("fab fa-dribbble".to_owned()),
                    url: "https://dribbble.com".to_owned(),
                },
            ],
            columns: vec![
                FooterColumn {
                    title: "Services".to_owned(),
                    links: vec![
                        plain_link("AI & Machine Learning", "ai-ml"),
                        plain_link("Web Development", "web-mobile"),
                        plain_link("Enterprise Solutions", "enterprise"),
                        plain_link("UX/UI Design", "design"),
                    ],
                },
                FooterColumn {
                    title: "Company".to_owned(),
                    links: vec![
                        plain_link("About Us", "about"),
                        plain_link("Case Studies", "case-studies"),
                        plain_link("Contact", "contact"),
                    ],
                },
                FooterColumn {
                    title: "Resources".to_owned(),
                    links: vec![
                        plain_link("Tech Stack", "ai-stack"),
                        plain_link("Privacy Policy", "privacy"),
                        plain_link("Terms of Service", "terms"),
                        plain_link("Cookie Policy", "cookies"),
                    ],
                },
            ],
            legal: vec![
                plain_link("Privacy Policy", "privacy"),
                plain_link("Terms of Service", "terms"),
                plain_link("Cookie Policy", "cookies"),
            ],
            copyright: Some("All rights reserved.".to_owned()),
            note: Some("Engineered with advanced AI".to_owned()),
        },
    }
}

/// Keeps the active menu entry current across navigations.
///
/// Apply every [`RouterEvent`] the router emits; only a successful
/// navigation moves the active entry, so failures and loading states
/// leave the previous entry highlighted.
#[derive(Debug)]
pub struct ActiveEntryTracker {
    menu: NavigationMenu,
    current: Option<String>,
}

impl ActiveEntryTracker {
    /// Create a tracker over a menu with no page displayed yet.
    #[must_use]
    pub fn new(menu: NavigationMenu) -> Self {
        Self {
            menu,
            current: None,
        }
    }

    /// The menu this tracker derives the active entry from.
    #[must_use]
    pub fn menu(&self) -> &NavigationMenu {
        &self.menu
    }

    /// Advance on a router event.
    pub fn apply(&mut self, event: &RouterEvent) {
        if let RouterEvent::PageChanged { page_id, .. } = event {
            self.current = Some(page_id.clone());
        }
    }

    /// The menu link matching the currently displayed page, if any.
    #[must_use]
    pub fn active(&self) -> Option<&NavLink> {
        self.current
            .as_deref()
            .and_then(|page_id| active_entry(&self.menu, page_id))
    }
}
