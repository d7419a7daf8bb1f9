use std::collections::HashMap;
use std::fmt;

use crate::resource::Resource;
use crate::strategy::StrategyContext;
use crate::traversal::CollectionIterator;

/// Builds an iterator from the authoritative resources.
///
/// The builder must copy what it needs out of the slice: the returned
/// iterator owns its snapshot.
pub type StrategyBuilder = Box<
    dyn Fn(&[Resource], &mut StrategyContext<'_>) -> CollectionIterator<Resource> + Send + Sync,
>;

/// Metadata describing a registered strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyInfo {
    /// Name passed to `create_iterator`.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

struct StrategyEntry {
    builder: StrategyBuilder,
    description: String,
}

impl fmt::Debug for StrategyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyEntry")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Registry mapping strategy names to builders.
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    entries: HashMap<String, StrategyEntry>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in strategy.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        super::builtin::register_builtins(&mut registry);
        registry
    }

    /// Register a builder under `name`, replacing any previous one.
    ///
    /// Returns `true` if an existing strategy was replaced.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        builder: F,
    ) -> bool
    where
        F: Fn(&[Resource], &mut StrategyContext<'_>) -> CollectionIterator<Resource>
            + Send
            + Sync
            + 'static,
    {
        self.entries
            .insert(
                name.into(),
                StrategyEntry {
                    builder: Box::new(builder),
                    description: description.into(),
                },
            )
            .is_some()
    }

    /// Build the iterator for `name`, or `None` if it is not registered.
    pub fn build(
        &self,
        name: &str,
        resources: &[Resource],
        context: &mut StrategyContext<'_>,
    ) -> Option<CollectionIterator<Resource>> {
        self.entries
            .get(name)
            .map(|entry| (entry.builder)(resources, context))
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no strategy is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// List all registered strategies, sorted by name.
    pub fn list(&self) -> Vec<StrategyInfo> {
        let mut infos: Vec<StrategyInfo> = self
            .entries
            .iter()
            .map(|(name, entry)| StrategyInfo {
                name: name.clone(),
                description: entry.description.clone(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }
}
