//! View tree and render strategies for the Vela view engine.
//!
//! Rendering turns a [`PageDocument`](vela_model::PageDocument) into a
//! [`ViewDescription`]: an abstract, presentation-independent tree of
//! [`ViewNode`]s. The host environment decides how a node role like
//! `"stat.value"` becomes markup; this crate only guarantees structure
//! and content.
//!
//! Dispatch is by declared page kind through a [`ViewRegistry`] of
//! [`RenderStrategy`] implementations, with the generic strategy as the
//! fallback for unknown kinds. Rendering is pure and total: it never
//! fails, never mutates the document, and substitutes a stated default
//! for every optional field, so a partially populated document can never
//! surface an "undefined" to the user.

mod node;
mod registry;
mod sections;
mod strategy;

pub use node::{ViewDescription, ViewNode};
pub use registry::{ViewRegistry, error_view};
pub use strategy::{
    AboutStrategy, CaseStudyStrategy, GenericStrategy, HomeStrategy, RenderStrategy,
    ServiceStrategy, TechStrategy,
};
