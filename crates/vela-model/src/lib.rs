//! Data model for the Vela view engine.
//!
//! This crate defines the two document families the engine consumes:
//!
//! - [`PageDocument`]: a fetched unit of page content, tagged with a
//!   [`PageKind`] that selects a render strategy and carrying an ordered
//!   sequence of typed [`Section`] blocks
//! - [`NavigationMenu`]: the site link structure (top-level links,
//!   dropdowns, footer)
//!
//! Documents are parsed from JSON with serde and are immutable once
//! parsed. Every field a content author can omit has a serde default, so
//! a partially populated document parses cleanly and the renderer decides
//! what placeholder to substitute. The one deliberate exception is the
//! navigation menu: links without `text` or `page` are a parse error,
//! which callers treat as "menu unavailable" and replace wholesale with
//! a fallback.

mod nav;
mod page;

pub use nav::{Footer, FooterColumn, NavDropdown, NavEntry, NavLink, NavigationMenu, SocialLink};
pub use page::{
    CallToAction, CaseListSection, CaseStudy, ContactMethod, ContactSection, ContentSection,
    FeatureCard, FeaturesSection, HeroSection, MissionSection, PageDocument, PageKind,
    ProcessSection, ProcessStep, Section, ShowcaseSection, StatItem, StatsSection, TeamMember,
    TeamSection, TechCategory, TechEntry, TechMatrixSection, ValueItem,
};
