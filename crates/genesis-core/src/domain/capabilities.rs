//! Architecture registry.
//!
//! One abstract architecture name maps onto the naming conventions of the two
//! downstream toolchains: msbuild platforms and premake architectures. Each
//! architecture is described exactly once by its [`ArchitectureDef`].
//!
//! # Adding a New Architecture
//!
//! 1. Add one [`ArchitectureDef`] entry to [`ARCHITECTURE_REGISTRY`]
//! 2. Parsing, validation, and help text derive from the table

/// Toolchain-specific names for one architecture.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ArchitectureDef {
    /// Abstract name, matched case-insensitively.
    pub name: &'static str,

    /// Value for msbuild's `/p:Platform=`.
    pub msbuild: &'static str,

    /// Value for premake's `--arch=`.
    pub premake: &'static str,
}

/// Single source of truth for supported architectures.
pub static ARCHITECTURE_REGISTRY: &[ArchitectureDef] = &[
    ArchitectureDef {
        name: "x86",
        msbuild: "x86",
        premake: "x86",
    },
    ArchitectureDef {
        name: "x64",
        msbuild: "x64",
        premake: "x86_64",
    },
];

/// Look up an architecture by name, ignoring case.
pub fn find_architecture(name: &str) -> Option<&'static ArchitectureDef> {
    let name = name.trim();
    ARCHITECTURE_REGISTRY
        .iter()
        .find(|def| def.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn assert_registry_integrity() {
        let mut seen = HashSet::new();
        for def in ARCHITECTURE_REGISTRY {
            assert!(seen.insert(def.name.to_ascii_lowercase()), "duplicate {}", def.name);
            assert!(!def.msbuild.is_empty());
            assert!(!def.premake.is_empty());
        }
    }

    #[test]
    fn x64_maps_to_both_toolchains() {
        let def = find_architecture("X64").unwrap();
        assert_eq!(def.msbuild, "x64");
        assert_eq!(def.premake, "x86_64");
    }

    #[test]
    fn unknown_architecture_is_none() {
        assert!(find_architecture("arm99").is_none());
    }
}
