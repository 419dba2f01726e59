pub mod document;
pub mod flat;

pub use document::{
    Entry, Library, LibrarySource, Member, Module, Packet, PacketSource, Project, Section,
    WorkspaceDocument,
};
pub use flat::{FlatMap, FlatWorkspace};
