//! The fixed table of available generators.

use crate::{
    application::{
        ApplicationError,
        generators::{Generator, GeneratorInfo, PremakeGenerator, VsCodeGenerator},
    },
    error::GenesisResult,
};

/// Lookup table from lowercase name to generator.
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// A registry with no generators.
    pub fn empty() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// The generators shipped with Genesis.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(VsCodeGenerator::new()));
        registry.register(Box::new(PremakeGenerator::new()));
        registry
    }

    /// Add a generator. Names must be lowercase and unique.
    pub fn register(&mut self, generator: Box<dyn Generator>) {
        let name = generator.name();
        debug_assert_eq!(name, name.to_ascii_lowercase(), "generator names are lowercase");
        debug_assert!(
            self.resolve(name).is_none(),
            "generator '{name}' registered twice"
        );
        self.generators.push(generator);
    }

    /// Find a generator by name, ignoring case.
    pub fn resolve(&self, name: &str) -> Option<&dyn Generator> {
        let name = name.trim();
        self.generators
            .iter()
            .find(|g| g.name().eq_ignore_ascii_case(name))
            .map(Box::as_ref)
    }

    /// Like [`Self::resolve`], but an unknown name becomes an error that
    /// lists every registered generator.
    pub fn require(&self, name: &str) -> GenesisResult<&dyn Generator> {
        self.resolve(name).ok_or_else(|| {
            ApplicationError::UnknownGenerator {
                name: name.into(),
                available: self.list(),
            }
            .into()
        })
    }

    /// Name and description of every generator, in registration order.
    pub fn list(&self) -> Vec<GeneratorInfo> {
        self.generators.iter().map(|g| g.info()).collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenesisError;

    #[test]
    fn builtin_lists_vscode_and_premake() {
        let names: Vec<_> = GeneratorRegistry::builtin()
            .list()
            .into_iter()
            .map(|info| info.name)
            .collect();
        assert_eq!(names, ["vscode", "premake"]);
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let registry = GeneratorRegistry::builtin();
        assert_eq!(registry.resolve("VSCode").map(|g| g.name()), Some("vscode"));
        assert_eq!(registry.resolve("PREMAKE").map(|g| g.name()), Some("premake"));
        assert!(registry.resolve("cmake").is_none());
    }

    #[test]
    fn require_unknown_lists_every_generator() {
        let registry = GeneratorRegistry::builtin();
        let err = registry.require("cmake").err().unwrap();

        match err {
            GenesisError::Application(ApplicationError::UnknownGenerator { name, available }) => {
                assert_eq!(name, "cmake");
                assert_eq!(available.len(), 2);
                assert!(available.iter().all(|info| !info.description.is_empty()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        assert!(GeneratorRegistry::empty().resolve("vscode").is_none());
        assert!(GeneratorRegistry::empty().list().is_empty());
    }
}
