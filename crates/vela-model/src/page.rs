//! Page documents and their typed content sections.
//!
//! A [`PageDocument`] is the unit of fetched content: an identifier, a
//! [`PageKind`] tag selecting the render strategy, an optional display
//! title, and an ordered list of [`Section`] blocks. Section payloads are
//! internally tagged by a `kind` field in the JSON.
//!
//! # Leniency
//!
//! An unrecognized or missing page `type` is not an error: it parses to
//! [`PageKind::Unknown`] / [`PageKind::Generic`] and renders through the
//! generic strategy. An unrecognized *section* kind, by contrast, fails
//! the parse: section tags are the document schema, and a typo there
//! means the document does not say what the author intended.

use serde::Deserialize;

/// Declared page type, selecting the render strategy.
///
/// Parsed from the document's `type` field. A missing field defaults to
/// [`PageKind::Generic`]; any value outside the known set parses to
/// [`PageKind::Unknown`], which the view registry routes to the generic
/// strategy as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Landing page: hero, stats, service pillars, showcase, process, contact.
    Home,
    /// Individual service page: hero, capabilities, workflow.
    Service,
    /// Technology stack page: hero, tech matrix.
    Tech,
    /// Case study roster.
    CaseStudy,
    /// Company page: mission, values, team.
    About,
    /// Free-form content page.
    #[default]
    Generic,
    /// Catch-all for values outside the known set.
    Unknown,
}

impl PageKind {
    /// Map a declared `type` tag to a kind; anything unrecognized is
    /// [`PageKind::Unknown`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "home" => Self::Home,
            "service" => Self::Service,
            "tech" => Self::Tech,
            "case-study" => Self::CaseStudy,
            "about" => Self::About,
            "generic" => Self::Generic,
            _ => Self::Unknown,
        }
    }
}

impl<'de> serde::Deserialize<'de> for PageKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// A fetched unit of page content.
///
/// Immutable once parsed. `page_id` may be empty in the serialized form;
/// the content store backfills it with the lookup key that produced the
/// document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageDocument {
    /// Identifier used as the cache and fetch key.
    pub page_id: String,
    /// Declared page type.
    #[serde(rename = "type")]
    pub kind: PageKind,
    /// Display string for the browser title.
    pub title: Option<String>,
    /// Ordered content blocks.
    pub sections: Vec<Section>,
}

impl PageDocument {
    /// Parse a page document from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the bytes are not valid
    /// JSON or do not match the document schema. Callers classify this
    /// as a malformed document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// A typed content block inside a page document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Section {
    /// Leading banner with badge, title, and calls to action.
    Hero(HeroSection),
    /// Row of headline numbers.
    Stats(StatsSection),
    /// Card grid (service pillars, capabilities).
    Features(FeaturesSection),
    /// Narrative block with technology tags.
    Showcase(ShowcaseSection),
    /// Numbered delivery steps.
    Process(ProcessSection),
    /// Categorized tool listing.
    TechMatrix(TechMatrixSection),
    /// Case study roster with per-case result metrics.
    CaseList(CaseListSection),
    /// Mission paragraphs and company values.
    Mission(MissionSection),
    /// Team roster.
    Team(TeamSection),
    /// Contact methods.
    Contact(ContactSection),
    /// Free-form titled text block.
    Content(ContentSection),
}

/// A navigation intent attached to a section element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallToAction {
    /// Label text.
    pub text: Option<String>,
    /// Icon glyph identifier.
    pub icon: Option<String>,
    /// Target page identifier.
    pub page: Option<String>,
}

/// Leading banner block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSection {
    /// Small badge line above the title.
    pub badge: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Icon shown in the badge (service/tech pages).
    pub icon: Option<String>,
    /// Category label shown in the badge (service/tech pages).
    pub category: Option<String>,
    /// Calls to action rendered under the banner.
    pub actions: Vec<CallToAction>,
}

/// One headline number.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatItem {
    pub value: Option<String>,
    pub label: Option<String>,
}

/// Row of headline numbers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsSection {
    pub items: Vec<StatItem>,
}

/// One card in a feature grid.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureCard {
    /// Stable identifier for deep links.
    pub id: Option<String>,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Bullet list inside the card.
    pub features: Vec<String>,
    /// Optional "learn more" link.
    pub link: Option<CallToAction>,
}

/// Card grid block (service pillars on the home page, capabilities on
/// service pages).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub items: Vec<FeatureCard>,
}

/// Narrative block with a technology tag list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowcaseSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Heading of the detail column.
    pub heading: Option<String>,
    pub paragraphs: Vec<String>,
    pub technologies: Vec<String>,
}

/// One numbered delivery step.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessStep {
    pub number: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Numbered delivery steps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub steps: Vec<ProcessStep>,
}

/// One tool inside a technology category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechEntry {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// One category in a technology matrix.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechCategory {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub items: Vec<TechEntry>,
}

/// Categorized tool listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechMatrixSection {
    pub title: Option<String>,
    pub categories: Vec<TechCategory>,
}

/// One case study card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseStudy {
    pub icon: Option<String>,
    pub industry: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Outcome metrics shown under the card.
    pub results: Vec<StatItem>,
}

/// Case study roster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseListSection {
    pub cases: Vec<CaseStudy>,
}

/// One company value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueItem {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Mission paragraphs and company values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MissionSection {
    pub paragraphs: Vec<String>,
    pub values: Vec<ValueItem>,
}

/// One team member.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
}

/// Team roster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamSection {
    pub members: Vec<TeamMember>,
}

/// One way of reaching the company.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactMethod {
    pub icon: Option<String>,
    pub title: Option<String>,
    /// Address lines, phone numbers, and similar detail rows.
    pub details: Vec<String>,
    /// Optional action button.
    pub action: Option<CallToAction>,
}

/// Contact methods block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub methods: Vec<ContactMethod>,
}

/// Free-form titled text block with optional bullets and call to action.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentSection {
    pub title: Option<String>,
    pub text: Option<String>,
    pub features: Vec<String>,
    pub cta: Option<CallToAction>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_document_parses_as_generic() {
        let doc = PageDocument::from_json(b"{}").unwrap();

        assert_eq!(doc.kind, PageKind::Generic);
        assert_eq!(doc.page_id, "");
        assert!(doc.title.is_none());
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_known_kinds_parse() {
        for (raw, kind) in [
            ("home", PageKind::Home),
            ("service", PageKind::Service),
            ("tech", PageKind::Tech),
            ("case-study", PageKind::CaseStudy),
            ("about", PageKind::About),
            ("generic", PageKind::Generic),
        ] {
            let json = format!(r#"{{"type": "{raw}"}}"#);
            let doc = PageDocument::from_json(json.as_bytes()).unwrap();
            assert_eq!(doc.kind, kind, "kind {raw}");
        }
    }

    #[test]
    fn test_unknown_kind_parses_to_unknown() {
        let doc = PageDocument::from_json(br#"{"type": "landing-v2"}"#).unwrap();

        assert_eq!(doc.kind, PageKind::Unknown);
    }

    #[test]
    fn test_home_document_sections() {
        let json = br#"{
            "pageId": "home",
            "type": "home",
            "title": "Zoon.ai - AI-First Software Engineering",
            "sections": [
                {
                    "kind": "hero",
                    "badge": "AI-First Software Engineering",
                    "title": "Intelligent Systems",
                    "actions": [{"text": "Start AI Project", "icon": "fas fa-rocket", "page": "contact"}]
                },
                {
                    "kind": "stats",
                    "items": [{"value": "200+", "label": "Projects"}]
                },
                {
                    "kind": "features",
                    "title": "Our Core Service Pillars",
                    "items": [{"title": "AI & ML", "features": ["NLP", "Vision"]}]
                }
            ]
        }"#;

        let doc = PageDocument::from_json(json).unwrap();

        assert_eq!(doc.page_id, "home");
        assert_eq!(doc.kind, PageKind::Home);
        assert_eq!(doc.sections.len(), 3);
        match &doc.sections[1] {
            Section::Stats(stats) => {
                assert_eq!(stats.items[0].value.as_deref(), Some("200+"));
                assert_eq!(stats.items[0].label.as_deref(), Some("Projects"));
            }
            other => panic!("expected stats section, got {other:?}"),
        }
    }

    #[test]
    fn test_section_fields_all_optional() {
        let json = br#"{
            "sections": [
                {"kind": "hero"},
                {"kind": "stats"},
                {"kind": "features"},
                {"kind": "showcase"},
                {"kind": "process"},
                {"kind": "tech-matrix"},
                {"kind": "case-list"},
                {"kind": "mission"},
                {"kind": "team"},
                {"kind": "contact"},
                {"kind": "content"}
            ]
        }"#;

        let doc = PageDocument::from_json(json).unwrap();

        assert_eq!(doc.sections.len(), 11);
    }

    #[test]
    fn test_unknown_section_kind_is_an_error() {
        let json = br#"{"sections": [{"kind": "carousel"}]}"#;

        assert!(PageDocument::from_json(json).is_err());
    }

    #[test]
    fn test_not_json_is_an_error() {
        assert!(PageDocument::from_json(b"<html>not json</html>").is_err());
    }

    #[test]
    fn test_case_list_results_parse() {
        let json = br#"{
            "type": "case-study",
            "sections": [{
                "kind": "case-list",
                "cases": [{
                    "industry": "FinTech",
                    "title": "Fraud Detection",
                    "results": [{"label": "False positives", "value": "-85%"}]
                }]
            }]
        }"#;

        let doc = PageDocument::from_json(json).unwrap();

        match &doc.sections[0] {
            Section::CaseList(list) => {
                assert_eq!(list.cases[0].industry.as_deref(), Some("FinTech"));
                assert_eq!(list.cases[0].results[0].value.as_deref(), Some("-85%"));
            }
            other => panic!("expected case list, got {other:?}"),
        }
    }
}
