//! Registry dispatching documents to render strategies by page kind.

use std::collections::HashMap;

use vela_model::{PageDocument, PageKind};

use crate::node::{ViewDescription, ViewNode};
use crate::strategy::{
    AboutStrategy, CaseStudyStrategy, GenericStrategy, HomeStrategy, RenderStrategy,
    ServiceStrategy, TechStrategy,
};

/// Maps a document's declared [`PageKind`] to a [`RenderStrategy`].
///
/// Lookup misses fall through to the generic strategy, so rendering is
/// total over all documents regardless of their declared kind.
pub struct ViewRegistry {
    strategies: HashMap<PageKind, Box<dyn RenderStrategy>>,
    fallback: Box<dyn RenderStrategy>,
}

impl ViewRegistry {
    /// Create a registry with the built-in strategy for each known kind.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            strategies: HashMap::new(),
            fallback: Box::new(GenericStrategy),
        };
        registry.register(PageKind::Home, Box::new(HomeStrategy));
        registry.register(PageKind::Service, Box::new(ServiceStrategy));
        registry.register(PageKind::Tech, Box::new(TechStrategy));
        registry.register(PageKind::CaseStudy, Box::new(CaseStudyStrategy));
        registry.register(PageKind::About, Box::new(AboutStrategy));
        registry.register(PageKind::Generic, Box::new(GenericStrategy));
        registry
    }

    /// Register (or replace) the strategy for a page kind.
    pub fn register(&mut self, kind: PageKind, strategy: Box<dyn RenderStrategy>) {
        self.strategies.insert(kind, strategy);
    }

    /// Render a document with the strategy for its declared kind.
    ///
    /// Pure: repeated calls with the same document produce the same
    /// view description.
    #[must_use]
    pub fn render(&self, doc: &PageDocument) -> ViewDescription {
        self.strategies
            .get(&doc.kind)
            .unwrap_or(&self.fallback)
            .render(doc)
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// The fixed failure view shown when a navigation cannot complete.
///
/// Identical for all failure causes, naming the page identifier that
/// was requested and offering recovery navigation.
#[must_use]
pub fn error_view(page_id: &str) -> ViewDescription {
    ViewDescription::new("Page Not Found").with_node(
        ViewNode::new("error")
            .with_attr("icon", "fas fa-exclamation-triangle")
            .with_child(ViewNode::text("error.title", "Page Not Found"))
            .with_child(ViewNode::text(
                "error.message",
                format!(
                    "Sorry, we couldn't load the \"{page_id}\" page. \
                     It may be temporarily unavailable."
                ),
            ))
            .with_child(
                ViewNode::text("error.action", "Return Home")
                    .with_attr("icon", "fas fa-home")
                    .with_attr("page", "home"),
            )
            .with_child(
                ViewNode::text("error.action", "Contact Support")
                    .with_attr("icon", "fas fa-headset")
                    .with_attr("page", "contact"),
            ),
    )
}
