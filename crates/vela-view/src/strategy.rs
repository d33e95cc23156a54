//! Render strategies, one per declared page kind.
//!
//! Strategies share the section mapping in [`crate::sections`] and
//! differ only in their defaults: the hero role and placeholder strings,
//! the feature-grid headings, and the fixed elements a page type always
//! carries (the service pages' closing call to action). The generic
//! strategy doubles as the fallback for unknown kinds.

use vela_model::{PageDocument, Section};

use crate::node::{ViewDescription, ViewNode};
use crate::sections::{
    FeaturesDefaults, HeroDefaults, case_list_node, contact_node, content_node, features_node,
    hero_node, mission_node, process_node, showcase_node, stats_node, team_node, tech_matrix_node,
};

/// A pure mapping from page document to view description.
///
/// Implementations must be deterministic and side-effect free: rendering
/// the same document twice yields the same view, and a structurally
/// empty document yields the strategy's skeleton rather than an error.
pub trait RenderStrategy: Send + Sync {
    /// Render a document into a view description.
    fn render(&self, doc: &PageDocument) -> ViewDescription;
}

/// Defaults that distinguish one strategy from another.
struct Profile {
    /// Browser-title placeholder when the document has none.
    title: &'static str,
    hero: HeroDefaults,
    features: FeaturesDefaults,
}

fn render_profile(profile: &Profile, doc: &PageDocument) -> ViewDescription {
    let mut view = ViewDescription::new(
        doc.title
            .clone()
            .unwrap_or_else(|| profile.title.to_owned()),
    );
    for section in &doc.sections {
        view.nodes.push(match section {
            Section::Hero(hero) => hero_node(hero, &profile.hero),
            Section::Stats(stats) => stats_node(stats),
            Section::Features(features) => features_node(features, &profile.features),
            Section::Showcase(showcase) => showcase_node(showcase),
            Section::Process(process) => process_node(process),
            Section::TechMatrix(matrix) => tech_matrix_node(matrix),
            Section::CaseList(list) => case_list_node(list),
            Section::Mission(mission) => mission_node(mission),
            Section::Team(team) => team_node(team),
            Section::Contact(contact) => contact_node(contact),
            Section::Content(content) => content_node(content),
        });
    }
    view
}

const SERVICE_FEATURES: FeaturesDefaults = FeaturesDefaults {
    title: "Capabilities",
    subtitle: "What we bring to the table",
    card_icon: "fas fa-cog",
    card_title: "Capability",
};

/// Landing page strategy.
pub struct HomeStrategy;

const HOME_PROFILE: Profile = Profile {
    title: "Home",
    hero: HeroDefaults {
        role: "hero",
        badge: "AI-First Software Engineering",
        badge_icon: "fas fa-bolt",
        title: "Intelligent Systems for the Next Era of Business",
        subtitle: "Transforming businesses with cutting-edge AI solutions",
        actions: &[
            ("Start AI Project", "fas fa-rocket", "contact"),
            ("View Case Studies", "fas fa-eye", "case-studies"),
            ("Watch Demo", "fas fa-play-circle", "about"),
        ],
    },
    features: FeaturesDefaults {
        title: "Our Core Service Pillars",
        subtitle: "Specialized expertise across multiple domains",
        card_icon: "fas fa-cube",
        card_title: "Service",
    },
};

impl RenderStrategy for HomeStrategy {
    fn render(&self, doc: &PageDocument) -> ViewDescription {
        render_profile(&HOME_PROFILE, doc)
    }
}

/// Individual service page strategy.
pub struct ServiceStrategy;

const SERVICE_PROFILE: Profile = Profile {
    title: "Service",
    hero: HeroDefaults {
        role: "service-hero",
        badge: "Service",
        badge_icon: "fas fa-cube",
        title: "Service Title",
        subtitle: "Service description",
        actions: &[],
    },
    features: SERVICE_FEATURES,
};

impl RenderStrategy for ServiceStrategy {
    fn render(&self, doc: &PageDocument) -> ViewDescription {
        let mut view = render_profile(&SERVICE_PROFILE, doc);
        // Service pages always close with a consultation prompt.
        view.nodes.push(
            ViewNode::new("closing-cta")
                .with_child(ViewNode::text("closing-cta.title", "Ready to Get Started?"))
                .with_child(
                    ViewNode::text("closing-cta.action", "Schedule Consultation")
                        .with_attr("icon", "fas fa-calendar")
                        .with_attr("page", "contact"),
                ),
        );
        view
    }
}

/// Technology stack page strategy.
pub struct TechStrategy;

const TECH_PROFILE: Profile = Profile {
    title: "Technologies",
    hero: HeroDefaults {
        role: "service-hero",
        badge: "Technology",
        badge_icon: "fas fa-microchip",
        title: "Technology Stack",
        subtitle: "Our technology expertise",
        actions: &[],
    },
    features: SERVICE_FEATURES,
};

impl RenderStrategy for TechStrategy {
    fn render(&self, doc: &PageDocument) -> ViewDescription {
        render_profile(&TECH_PROFILE, doc)
    }
}

/// Case study roster strategy.
pub struct CaseStudyStrategy;

const CASE_STUDY_PROFILE: Profile = Profile {
    title: "Case Studies",
    hero: HeroDefaults {
        role: "service-hero",
        badge: "Case Studies",
        badge_icon: "fas fa-chart-line",
        title: "Case Studies",
        subtitle: "Real-world results",
        actions: &[],
    },
    features: SERVICE_FEATURES,
};

impl RenderStrategy for CaseStudyStrategy {
    fn render(&self, doc: &PageDocument) -> ViewDescription {
        render_profile(&CASE_STUDY_PROFILE, doc)
    }
}

/// Company page strategy.
pub struct AboutStrategy;

const ABOUT_PROFILE: Profile = Profile {
    title: "About Us",
    hero: HeroDefaults {
        role: "service-hero",
        badge: "About Us",
        badge_icon: "fas fa-users",
        title: "About Us",
        subtitle: "Our story and mission",
        actions: &[],
    },
    features: SERVICE_FEATURES,
};

impl RenderStrategy for AboutStrategy {
    fn render(&self, doc: &PageDocument) -> ViewDescription {
        render_profile(&ABOUT_PROFILE, doc)
    }
}

/// Free-form content strategy; also the fallback for unknown kinds.
pub struct GenericStrategy;

const GENERIC_PROFILE: Profile = Profile {
    title: "Page",
    hero: HeroDefaults {
        role: "service-hero",
        badge: "Page",
        badge_icon: "fas fa-file",
        title: "Page Title",
        subtitle: "Page description",
        actions: &[],
    },
    features: SERVICE_FEATURES,
};

impl RenderStrategy for GenericStrategy {
    fn render(&self, doc: &PageDocument) -> ViewDescription {
        render_profile(&GENERIC_PROFILE, doc)
    }
}
