//! # adl-base
//!
//! Core library for ADL semantic analysis: domain model, validation, and
//! model building.
//!
//! ADL is a declarative language describing an application's data model
//! (entities, fields, relationships, enumerations) and its code-generation
//! options. An external grammar parser turns ADL text into a loosely
//! structured intermediate [`document::Document`]; this crate turns that
//! document into a single validated, cross-referenced [`model::DomainModel`]
//! for consumption by a downstream source-code generator.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! builder    → multi-phase model builder (orchestration, cross-reference resolution)
//!   ↓
//! model      → domain-model aggregate, validity-gated mutation, canonical text form
//!   ↓
//! document   → intermediate-document input types (parser collaborator contract)
//!   ↓
//! reference  → static reference data (keywords, dialects, field types, options)
//!   ↓
//! error      → build failure taxonomy
//! ```

// ============================================================================
// MODULES (dependency order: error → reference → document → model → builder)
// ============================================================================

/// Build failure taxonomy: one category per way a document can be rejected
pub mod error;

/// Static reference data: reserved keywords, dialects, field types, options
pub mod reference;

/// Intermediate-document input types produced by the grammar parser
pub mod document;

/// Domain-model aggregate with validity-gated mutation
pub mod model;

/// Multi-phase model builder
pub mod builder;

// Re-export the types most callers need
pub use builder::{BuildParams, ModelBuilder};
pub use document::Document;
pub use error::{BuildError, BuildResult};
pub use model::DomainModel;
pub use reference::{ApplicationType, DatabaseType};
