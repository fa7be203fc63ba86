//! Version schemes and the registry that maps scheme names to them

mod composer;
mod semver;

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::VersionParseError;

pub use self::composer::ComposerScheme;
pub use self::semver::SemverScheme;

/// A versioning convention: how version text is read and ordered.
pub trait VersionScheme: std::fmt::Debug + Send + Sync {
    /// Name used as the specifier prefix, e.g. `semver`
    fn name(&self) -> &str;

    /// Validate `text` and return its normalized form
    fn parse(&self, text: &str) -> Result<String, VersionParseError>;

    /// Order two versions previously returned by [`VersionScheme::parse`]
    fn compare(&self, a: &str, b: &str) -> Ordering;

    /// Structural decomposition, for schemes that have one
    fn as_structured(&self) -> Option<&dyn StructuredScheme> {
        None
    }
}

/// Component of a structured version that can be bumped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Minor,
    Patch,
    Prerelease,
    Build,
}

/// Schemes whose versions decompose into ordered components.
pub trait StructuredScheme {
    /// Ordered components of `version`. `None` marks an absent component.
    fn components(&self, version: &str) -> Result<Vec<Option<String>>, VersionParseError>;

    /// Increment `component` and reset every less significant one
    fn bump(&self, version: &str, component: Component) -> Result<String, VersionParseError>;
}

lazy_static! {
    static ref GLOBAL_REGISTRY: SchemeRegistry = SchemeRegistry::builtin();
}

/// Capability table from scheme name to implementation
#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    schemes: BTreeMap<String, Arc<dyn VersionScheme>>,
    aliases: BTreeMap<String, String>,
}

impl SchemeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every scheme shipped with this crate
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SemverScheme));
        registry.register(Arc::new(ComposerScheme));
        registry
    }

    /// Shared builtin registry used by the non-`_in` constructors
    pub fn global() -> &'static SchemeRegistry {
        &GLOBAL_REGISTRY
    }

    /// Register a scheme under its own name, returning any scheme it replaces
    pub fn register(&mut self, scheme: Arc<dyn VersionScheme>) -> Option<Arc<dyn VersionScheme>> {
        let name = scheme.name().to_string();
        log::debug!("Registering version scheme {}", name);
        self.aliases.remove(&name);
        self.schemes.insert(name, scheme)
    }

    /// Make `alias` resolve to the scheme registered as `target`
    pub fn alias(&mut self, alias: &str, target: &str) -> Result<(), VersionParseError> {
        if !self.schemes.contains_key(target) {
            return Err(VersionParseError::UnknownScheme(target.to_string()));
        }
        self.aliases.insert(alias.to_string(), target.to_string());
        Ok(())
    }

    /// Find a scheme by name or alias
    pub fn get(&self, name: &str) -> Option<Arc<dyn VersionScheme>> {
        let resolved = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.schemes.get(resolved).cloned()
    }

    /// Like [`SchemeRegistry::get`], failing on unknown names
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn VersionScheme>, VersionParseError> {
        self.get(name)
            .ok_or_else(|| VersionParseError::UnknownScheme(name.to_string()))
    }

    /// Registered scheme names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.schemes.keys().map(String::as_str).collect()
    }

    /// Registered aliases as `(alias, target)` pairs
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct LengthScheme;

    impl VersionScheme for LengthScheme {
        fn name(&self) -> &str {
            "length"
        }

        fn parse(&self, text: &str) -> Result<String, VersionParseError> {
            Ok(text.to_string())
        }

        fn compare(&self, a: &str, b: &str) -> Ordering {
            a.len().cmp(&b.len())
        }
    }

    #[test]
    fn test_builtin_names() {
        let registry = SchemeRegistry::builtin();
        assert_eq!(registry.names(), vec!["composer", "semver"]);
        assert!(registry.get("semver").is_some());
        assert!(registry.get("pypi").is_none());
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = SchemeRegistry::new();
        assert_eq!(
            registry.lookup("semver").unwrap_err(),
            VersionParseError::UnknownScheme("semver".to_string())
        );
    }

    #[test]
    fn test_register_custom_scheme() {
        let mut registry = SchemeRegistry::builtin();
        assert!(registry.register(Arc::new(LengthScheme)).is_none());

        let scheme = registry.lookup("length").unwrap();
        assert_eq!(scheme.compare("aaa", "b"), Ordering::Greater);
        assert!(scheme.as_structured().is_none());
    }

    #[test]
    fn test_alias() {
        let mut registry = SchemeRegistry::builtin();
        registry.alias("npm", "semver").unwrap();
        assert_eq!(registry.lookup("npm").unwrap().name(), "semver");
        assert_eq!(registry.aliases().collect::<Vec<_>>(), vec![("npm", "semver")]);

        assert!(registry.alias("php", "nope").is_err());
    }

    #[test]
    fn test_register_shadows_alias() {
        let mut registry = SchemeRegistry::builtin();
        registry.alias("length", "semver").unwrap();
        registry.register(Arc::new(LengthScheme));
        assert_eq!(registry.lookup("length").unwrap().name(), "length");
    }

    #[test]
    fn test_global_is_builtin() {
        assert_eq!(SchemeRegistry::global().names(), SchemeRegistry::builtin().names());
    }
}
