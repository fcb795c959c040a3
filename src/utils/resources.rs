//! Text resources compiled into the binary.
//!
//! A [`ResourceRegistry`] maps fully-qualified, dot-separated names such as
//! `SwitcherUtils.Templates.switcher.toml` to bytes embedded at build time,
//! usually through [`embedded_resources!`](crate::embedded_resources).

use crate::utils::error::{Result, UtilsError};
use crate::utils::text::decode_text;
use crate::utils::validation::validate_non_empty_string;
use encoding_rs::UTF_8;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const BUILTIN_NAMESPACE: &str = "SwitcherUtils.Templates";
pub const DEFAULT_SETTINGS_RESOURCE: &str = "SwitcherUtils.Templates.switcher.toml";

/// Builds a [`ResourceRegistry`] from `name => "path"` pairs.
///
/// Paths are resolved by `include_bytes!`, relative to the invoking file.
#[macro_export]
macro_rules! embedded_resources {
    ($($name:expr => $path:literal),* $(,)?) => {
        $crate::utils::resources::ResourceRegistry::new(&[
            $(($name, include_bytes!($path) as &'static [u8]),)*
        ])
    };
}

#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    entries: BTreeMap<&'static str, &'static [u8]>,
}

impl ResourceRegistry {
    /// Later entries replace earlier ones with the same name.
    pub fn new(entries: &[(&'static str, &'static [u8])]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&'static [u8]> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Resource names in ordinal order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scope where simple names are qualified with `namespace`.
    pub fn scoped<'a>(&'a self, namespace: &'a str) -> ResourceScope<'a> {
        ResourceScope {
            registry: self,
            namespace: Some(namespace),
        }
    }

    pub fn read_as_text(&self, resource_name: &str) -> Result<String> {
        read_embedded_resource_as_text(resource_name, self)
    }
}

/// Where a resource name is looked up: a whole registry, optionally
/// narrowed to a namespace.
#[derive(Debug, Clone, Copy)]
pub struct ResourceScope<'a> {
    registry: &'a ResourceRegistry,
    namespace: Option<&'a str>,
}

impl<'a> ResourceScope<'a> {
    pub fn namespace(&self) -> Option<&'a str> {
        self.namespace
    }

    /// Fully-qualified name for `resource_name` within this scope.
    ///
    /// A name equal to the namespace, or starting with the namespace followed
    /// by `.`, is already qualified. Any other name is prefixed with it.
    /// A blank namespace qualifies nothing.
    pub fn qualify<'n>(&self, resource_name: &'n str) -> Cow<'n, str> {
        match self.namespace.filter(|namespace| !namespace.trim().is_empty()) {
            Some(namespace) if !is_within_namespace(resource_name, namespace) => {
                Cow::Owned(format!("{}.{}", namespace, resource_name))
            }
            _ => Cow::Borrowed(resource_name),
        }
    }

    pub fn read_as_text(&self, resource_name: &str) -> Result<String> {
        read_embedded_resource_as_text(resource_name, *self)
    }
}

impl<'a> From<&'a ResourceRegistry> for ResourceScope<'a> {
    fn from(registry: &'a ResourceRegistry) -> Self {
        Self {
            registry,
            namespace: None,
        }
    }
}

fn is_within_namespace(name: &str, namespace: &str) -> bool {
    match name.strip_prefix(namespace) {
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    }
}

/// Reads an embedded resource and decodes it as UTF-8 text.
pub fn read_embedded_resource_as_text<'a, S>(resource_name: &str, scope: S) -> Result<String>
where
    S: Into<ResourceScope<'a>>,
{
    validate_non_empty_string("resource_name", resource_name)?;

    let scope = scope.into();
    let resolved = scope.qualify(resource_name);
    let bytes = scope
        .registry
        .get(&resolved)
        .ok_or_else(|| UtilsError::ResourceNotFound {
            name: resource_name.to_string(),
            resolved: resolved.to_string(),
        })?;

    Ok(decode_text(bytes, UTF_8))
}

/// Resources shipped with this crate.
pub fn builtin_resources() -> &'static ResourceRegistry {
    static BUILTIN: OnceLock<ResourceRegistry> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        crate::embedded_resources!(
            DEFAULT_SETTINGS_RESOURCE => "../../resources/switcher.toml",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ResourceRegistry {
        ResourceRegistry::new(&[
            ("Engines.Scripts.polyfill.js", b"// polyfill\n" as &[u8]),
            ("Engines.Scripts.bom.js", b"\xEF\xBB\xBFbom" as &[u8]),
            ("EnginesExtra.readme.txt", b"extra" as &[u8]),
            ("Engines", b"root" as &[u8]),
            ("standalone.txt", "naïve ✓".as_bytes()),
        ])
    }

    #[test]
    fn test_read_by_full_name() {
        let registry = registry();
        assert_eq!(registry.read_as_text("standalone.txt").unwrap(), "naïve ✓");
        assert_eq!(
            read_embedded_resource_as_text("Engines.Scripts.polyfill.js", &registry).unwrap(),
            "// polyfill\n"
        );
    }

    #[test]
    fn test_scoped_names_are_qualified() {
        let registry = registry();
        let scope = registry.scoped("Engines.Scripts");

        assert_eq!(scope.read_as_text("polyfill.js").unwrap(), "// polyfill\n");
        assert_eq!(
            scope.read_as_text("Engines.Scripts.polyfill.js").unwrap(),
            "// polyfill\n"
        );
    }

    #[test]
    fn test_qualify_respects_segment_boundary() {
        let registry = registry();
        let scope = registry.scoped("Engines");

        assert_eq!(scope.qualify("Engines.Scripts.bom.js"), "Engines.Scripts.bom.js");
        assert_eq!(scope.qualify("Engines"), "Engines");
        assert_eq!(scope.qualify("EnginesExtra.readme.txt"), "Engines.EnginesExtra.readme.txt");
        assert!(matches!(
            scope.read_as_text("EnginesExtra.readme.txt"),
            Err(UtilsError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_blank_namespace_reads_full_names() {
        let registry = registry();

        for namespace in ["", "  "] {
            let scope = registry.scoped(namespace);
            assert_eq!(scope.qualify("standalone.txt"), "standalone.txt");
            assert_eq!(scope.read_as_text("standalone.txt").unwrap(), "naïve ✓");
        }
    }

    #[test]
    fn test_bom_is_stripped() {
        assert_eq!(registry().read_as_text("Engines.Scripts.bom.js").unwrap(), "bom");
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let registry = registry();
        for name in ["", "   ", "\t\n"] {
            assert!(matches!(
                registry.read_as_text(name),
                Err(UtilsError::InvalidArgument { ref argument, .. }) if argument == "resource_name"
            ));
        }
    }

    #[test]
    fn test_missing_resource() {
        let err = registry().read_as_text("Does.Not.Exist").unwrap_err();
        match err {
            UtilsError::ResourceNotFound { name, resolved } => {
                assert_eq!(name, "Does.Not.Exist");
                assert_eq!(resolved, "Does.Not.Exist");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = registry().scoped("Engines.Scripts").read_as_text("missing.js").unwrap_err();
        assert!(err.to_string().contains("Engines.Scripts.missing.js"));
    }

    #[test]
    fn test_builtin_resources() {
        let builtin = builtin_resources();
        assert!(builtin.contains(DEFAULT_SETTINGS_RESOURCE));

        let template = builtin.scoped(BUILTIN_NAMESPACE).read_as_text("switcher.toml").unwrap();
        assert!(template.contains("[files]"));
    }
}
