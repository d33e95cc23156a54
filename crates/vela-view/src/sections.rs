//! Section-to-node mapping shared by all render strategies.
//!
//! Every optional document field substitutes a stated default here, so
//! the view tree never contains a hole where content was omitted. The
//! free-form `content` block is the exception: its title and text are
//! author-driven and simply absent when not provided.

use vela_model::{
    CallToAction, CaseListSection, ContactSection, ContentSection, FeaturesSection, HeroSection,
    MissionSection, ProcessSection, ShowcaseSection, StatsSection, TeamSection, TechMatrixSection,
};

use crate::node::ViewNode;

/// Per-strategy defaults for the hero block.
pub(crate) struct HeroDefaults {
    /// Role of the hero node (`"hero"` on the landing page,
    /// `"service-hero"` elsewhere).
    pub role: &'static str,
    pub badge: &'static str,
    pub badge_icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Calls to action substituted when the document declares none.
    pub actions: &'static [(&'static str, &'static str, &'static str)],
}

/// Per-strategy defaults for the feature card grid.
pub(crate) struct FeaturesDefaults {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub card_icon: &'static str,
    pub card_title: &'static str,
}

fn or_default(value: Option<&String>, default: &str) -> String {
    value.map_or_else(|| default.to_owned(), Clone::clone)
}

fn action_node(role: &str, cta: &CallToAction) -> ViewNode {
    ViewNode::text(role, or_default(cta.text.as_ref(), "Learn More"))
        .with_attr("icon", or_default(cta.icon.as_ref(), "fas fa-rocket"))
        .with_attr("page", or_default(cta.page.as_ref(), "contact"))
}

pub(crate) fn hero_node(hero: &HeroSection, defaults: &HeroDefaults) -> ViewNode {
    let badge_text = hero
        .badge
        .as_ref()
        .or(hero.category.as_ref())
        .map_or_else(|| defaults.badge.to_owned(), Clone::clone);

    let mut node = ViewNode::new(defaults.role)
        .with_child(
            ViewNode::text(format!("{}.badge", defaults.role), badge_text)
                .with_attr("icon", or_default(hero.icon.as_ref(), defaults.badge_icon)),
        )
        .with_child(ViewNode::text(
            format!("{}.title", defaults.role),
            or_default(hero.title.as_ref(), defaults.title),
        ))
        .with_child(ViewNode::text(
            format!("{}.subtitle", defaults.role),
            or_default(hero.subtitle.as_ref(), defaults.subtitle),
        ));

    if hero.actions.is_empty() {
        for (text, icon, page) in defaults.actions {
            node = node.with_child(
                ViewNode::text(format!("{}.action", defaults.role), *text)
                    .with_attr("icon", *icon)
                    .with_attr("page", *page),
            );
        }
    } else {
        for cta in &hero.actions {
            node = node.with_child(action_node(&format!("{}.action", defaults.role), cta));
        }
    }

    node
}

pub(crate) fn stats_node(stats: &StatsSection) -> ViewNode {
    ViewNode::new("stats").with_children(stats.items.iter().map(|item| {
        ViewNode::new("stat")
            .with_child(ViewNode::text(
                "stat.value",
                or_default(item.value.as_ref(), "0"),
            ))
            .with_child(ViewNode::text(
                "stat.label",
                or_default(item.label.as_ref(), "Statistic"),
            ))
    }))
}

pub(crate) fn features_node(features: &FeaturesSection, defaults: &FeaturesDefaults) -> ViewNode {
    ViewNode::new("features")
        .with_child(ViewNode::text(
            "features.title",
            or_default(features.title.as_ref(), defaults.title),
        ))
        .with_child(ViewNode::text(
            "features.subtitle",
            or_default(features.subtitle.as_ref(), defaults.subtitle),
        ))
        .with_children(features.items.iter().map(|card| {
            let mut node = ViewNode::new("card")
                .with_attr("icon", or_default(card.icon.as_ref(), defaults.card_icon))
                .with_child(ViewNode::text(
                    "card.title",
                    or_default(card.title.as_ref(), defaults.card_title),
                ))
                .with_child(ViewNode::text(
                    "card.description",
                    or_default(card.description.as_ref(), "Description"),
                ));
            if let Some(id) = &card.id {
                node = node.with_attr("id", id.clone());
            }
            node = node.with_children(
                card.features
                    .iter()
                    .map(|feature| ViewNode::text("card.feature", feature.clone())),
            );
            if let Some(link) = &card.link {
                node = node.with_child(
                    ViewNode::text("card.link", or_default(link.text.as_ref(), "Learn More"))
                        .with_attr("page", or_default(link.page.as_ref(), "home")),
                );
            }
            node
        }))
}

pub(crate) fn showcase_node(showcase: &ShowcaseSection) -> ViewNode {
    ViewNode::new("showcase")
        .with_child(ViewNode::text(
            "showcase.title",
            or_default(showcase.title.as_ref(), "Our Advantage"),
        ))
        .with_child(ViewNode::text(
            "showcase.subtitle",
            or_default(showcase.subtitle.as_ref(), "Cutting-edge AI solutions"),
        ))
        .with_child(ViewNode::text(
            "showcase.heading",
            or_default(showcase.heading.as_ref(), "Specialized AI Development"),
        ))
        .with_children(
            showcase
                .paragraphs
                .iter()
                .map(|p| ViewNode::text("showcase.paragraph", p.clone())),
        )
        .with_children(
            showcase
                .technologies
                .iter()
                .map(|tech| ViewNode::text("showcase.technology", tech.clone())),
        )
}

pub(crate) fn process_node(process: &ProcessSection) -> ViewNode {
    ViewNode::new("process")
        .with_child(ViewNode::text(
            "process.title",
            or_default(process.title.as_ref(), "Our Process"),
        ))
        .with_child(ViewNode::text(
            "process.subtitle",
            or_default(process.subtitle.as_ref(), "How we deliver results"),
        ))
        .with_children(process.steps.iter().map(|step| {
            ViewNode::new("step")
                .with_child(ViewNode::text(
                    "step.number",
                    or_default(step.number.as_ref(), "01"),
                ))
                .with_child(ViewNode::text(
                    "step.title",
                    or_default(step.title.as_ref(), "Step"),
                ))
                .with_child(ViewNode::text(
                    "step.description",
                    or_default(step.description.as_ref(), "Description"),
                ))
        }))
}

pub(crate) fn tech_matrix_node(matrix: &TechMatrixSection) -> ViewNode {
    ViewNode::new("tech-matrix")
        .with_child(ViewNode::text(
            "tech-matrix.title",
            or_default(matrix.title.as_ref(), "Technologies"),
        ))
        .with_children(matrix.categories.iter().map(|category| {
            ViewNode::new("tech-category")
                .with_attr("icon", or_default(category.icon.as_ref(), "fas fa-cog"))
                .with_child(ViewNode::text(
                    "tech-category.title",
                    or_default(category.title.as_ref(), "Category"),
                ))
                .with_children(category.items.iter().map(|entry| {
                    ViewNode::new("tech-entry")
                        .with_child(ViewNode::text(
                            "tech-entry.name",
                            or_default(entry.name.as_ref(), "Tool"),
                        ))
                        .with_child(ViewNode::text(
                            "tech-entry.description",
                            or_default(entry.description.as_ref(), "Description"),
                        ))
                }))
        }))
}

pub(crate) fn case_list_node(list: &CaseListSection) -> ViewNode {
    ViewNode::new("case-list").with_children(list.cases.iter().map(|case| {
        ViewNode::new("case")
            .with_attr("icon", or_default(case.icon.as_ref(), "fas fa-chart-bar"))
            .with_child(ViewNode::text(
                "case.industry",
                or_default(case.industry.as_ref(), "Industry"),
            ))
            .with_child(ViewNode::text(
                "case.title",
                or_default(case.title.as_ref(), "Case Study"),
            ))
            .with_child(ViewNode::text(
                "case.description",
                or_default(case.description.as_ref(), "Description"),
            ))
            .with_children(case.results.iter().map(|result| {
                ViewNode::new("case.result")
                    .with_child(ViewNode::text(
                        "case.result.label",
                        or_default(result.label.as_ref(), "Metric"),
                    ))
                    .with_child(ViewNode::text(
                        "case.result.value",
                        or_default(result.value.as_ref(), "Value"),
                    ))
            }))
    }))
}

pub(crate) fn mission_node(mission: &MissionSection) -> ViewNode {
    ViewNode::new("mission")
        .with_child(ViewNode::text("mission.heading", "Our Mission"))
        .with_children(
            mission
                .paragraphs
                .iter()
                .map(|p| ViewNode::text("mission.paragraph", p.clone())),
        )
        .with_child(
            ViewNode::new("values")
                .with_child(ViewNode::text("values.heading", "Our Values"))
                .with_children(mission.values.iter().map(|value| {
                    ViewNode::new("value")
                        .with_child(ViewNode::text(
                            "value.title",
                            or_default(value.title.as_ref(), "Value"),
                        ))
                        .with_child(ViewNode::text(
                            "value.description",
                            or_default(value.description.as_ref(), "Description"),
                        ))
                })),
        )
}

pub(crate) fn team_node(team: &TeamSection) -> ViewNode {
    ViewNode::new("team")
        .with_child(ViewNode::text("team.heading", "Our Team"))
        .with_children(team.members.iter().map(|member| {
            ViewNode::new("member")
                .with_child(ViewNode::text(
                    "member.name",
                    or_default(member.name.as_ref(), "Team Member"),
                ))
                .with_child(ViewNode::text(
                    "member.role",
                    or_default(member.role.as_ref(), "Role"),
                ))
                .with_child(ViewNode::text(
                    "member.bio",
                    or_default(member.bio.as_ref(), "Bio"),
                ))
        }))
}

pub(crate) fn contact_node(contact: &ContactSection) -> ViewNode {
    ViewNode::new("contact")
        .with_child(ViewNode::text(
            "contact.title",
            or_default(contact.title.as_ref(), "Ready to Build Intelligence?"),
        ))
        .with_child(ViewNode::text(
            "contact.subtitle",
            or_default(contact.subtitle.as_ref(), "Start your AI journey today"),
        ))
        .with_children(contact.methods.iter().map(|method| {
            let mut node = ViewNode::new("contact-method")
                .with_attr("icon", or_default(method.icon.as_ref(), "fas fa-envelope"))
                .with_child(ViewNode::text(
                    "contact-method.title",
                    or_default(method.title.as_ref(), "Contact Method"),
                ))
                .with_children(
                    method
                        .details
                        .iter()
                        .map(|detail| ViewNode::text("contact-method.detail", detail.clone())),
                );
            if let Some(action) = &method.action {
                node = node.with_child(
                    ViewNode::text(
                        "contact-method.action",
                        or_default(action.text.as_ref(), "Learn More"),
                    )
                    .with_attr("icon", or_default(action.icon.as_ref(), "fas fa-calendar")),
                );
            }
            node
        }))
}

pub(crate) fn content_node(content: &ContentSection) -> ViewNode {
    let mut node = ViewNode::new("content");
    if let Some(title) = &content.title {
        node = node.with_child(ViewNode::text("content.title", title.clone()));
    }
    if let Some(text) = &content.text {
        node = node.with_child(ViewNode::text("content.text", text.clone()));
    }
    node = node.with_children(
        content
            .features
            .iter()
            .map(|feature| ViewNode::text("content.feature", feature.clone())),
    );
    if let Some(cta) = &content.cta {
        node = node.with_child(action_node("content.action", cta));
    }
    node
}
