// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Genesis.
//!
//! This module contains the workspace model and its flattening rules. All
//! I/O (reading `genesis.json`, writing artifacts, running tools) is handled
//! via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Serde only**: the document shape is the domain, so it owns its
//!   (de)serialization
//! - **Immutable snapshots**: flattening borrows the document and returns
//!   an owned view
//!
// Public API - what the world sees
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    Entry, FlatMap, FlatWorkspace, Library, LibrarySource, Member, Module, Packet, PacketSource,
    Project, Section, WorkspaceDocument,
    document::{DISCRIMINATOR, composite_id},
    flat::flatten_section,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Architecture, BuildConfiguration, ProjectKind};

pub use validation::DomainValidator;
