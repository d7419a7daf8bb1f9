//! Collection façade
//!
//! [`DigitalLibrary`] owns the authoritative resource list and hands out
//! iterators by strategy name. Each iterator gets its own snapshot, so
//! adding or removing resources afterwards never changes an iterator that
//! already exists.

mod info;

pub use info::LibraryInfo;

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::ledger::UsageLedger;
use crate::resource::Resource;
use crate::sample;
use crate::strategy::{StrategyContext, StrategyInfo, StrategyRegistry};
use crate::traversal::{CollectionIterator, Linear, Traversal};
use crate::{IteratorOptions, LibraryConfig};

/// A collection that manufactures traversals over itself by name.
pub trait IterableCollection {
    /// Element type handed out by the traversals.
    type Item;
    /// Traversal type returned by [`IterableCollection::create_iterator`].
    type Iter: Traversal<Item = Self::Item>;

    /// Build a traversal for the strategy `name`.
    fn create_iterator(&mut self, name: &str, options: IteratorOptions) -> Self::Iter;

    /// Number of elements currently held.
    fn size(&self) -> usize;
}

/// In-memory library of resources with named traversal strategies.
#[derive(Debug)]
pub struct DigitalLibrary {
    /// Authoritative list, insertion ordered
    resources: Vec<Resource>,

    /// Strategy requests since construction or the last clear
    ledger: UsageLedger,

    registry: StrategyRegistry,
    config: LibraryConfig,

    /// Drives the `random` strategy
    rng: StdRng,
}

impl DigitalLibrary {
    /// Create an empty library with the built-in strategies.
    pub fn new() -> Self {
        Self::with_config(LibraryConfig::default())
    }

    /// Create an empty library with explicit configuration.
    pub fn with_config(config: LibraryConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            resources: Vec::new(),
            ledger: UsageLedger::new(),
            registry: StrategyRegistry::with_builtins(),
            config,
            rng,
        }
    }

    /// Create a library holding `resources` in the given order.
    pub fn from_resources(resources: impl IntoIterator<Item = Resource>) -> Self {
        Self::with_config_and_resources(LibraryConfig::default(), resources)
    }

    /// Create a library with explicit configuration holding `resources` in order.
    pub fn with_config_and_resources(
        config: LibraryConfig,
        resources: impl IntoIterator<Item = Resource>,
    ) -> Self {
        let mut library = Self::with_config(config);
        library.resources.extend(resources);
        library
    }

    /// Create a library preloaded with the curated sample dataset.
    pub fn with_sample_data() -> Self {
        Self::from_resources(sample::sample_resources())
    }

    /// Active configuration.
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Append a resource. Ids are not checked for uniqueness.
    pub fn add_resource(&mut self, resource: Resource) {
        debug!(id = %resource.id, "adding resource");
        self.resources.push(resource);
    }

    /// Remove every resource with `id`; returns whether anything was removed.
    pub fn remove_resource(&mut self, id: &str) -> bool {
        let before = self.resources.len();
        self.resources.retain(|r| r.id != id);
        let removed = before - self.resources.len();
        if removed > 0 {
            debug!(id, removed, "removed resources");
        }
        removed > 0
    }

    /// First resource with `id`, if any.
    pub fn find_resource_by_id(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Build an iterator for the strategy `name`.
    ///
    /// The request is counted in the usage ledger first, whether or not the
    /// name is known. Unknown names fall back to a forward traversal over
    /// the unmodified resources and log a warning.
    pub fn create_iterator(
        &mut self,
        name: &str,
        options: IteratorOptions,
    ) -> CollectionIterator<Resource> {
        self.ledger.record(name);

        let mut context = StrategyContext {
            reference_date: self.reference_date(),
            page_size: options.resolved_page_size(self.config.default_page_size),
            rng: &mut self.rng,
        };

        match self.registry.build(name, &self.resources, &mut context) {
            Some(iterator) => {
                debug!(
                    strategy = name,
                    kind = ?iterator.kind(),
                    snapshot_len = iterator.as_slice().len(),
                    "built iterator"
                );
                iterator
            }
            None => {
                warn!(strategy = name, "iterator strategy not recognized, using forward");
                CollectionIterator::Linear(Linear::new(self.resources.clone()))
            }
        }
    }

    /// Register (or replace) a strategy under `name`.
    pub fn register_strategy<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        builder: F,
    ) where
        F: Fn(&[Resource], &mut StrategyContext<'_>) -> CollectionIterator<Resource>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        let replaced = self.registry.register(name.clone(), description, builder);
        info!(strategy = %name, replaced, "registered iterator strategy");
    }

    /// Whether `name` resolves to a registered strategy.
    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Registered strategies sorted by name.
    pub fn strategies(&self) -> Vec<StrategyInfo> {
        self.registry.list()
    }

    /// Number of resources.
    pub fn size(&self) -> usize {
        self.resources.len()
    }

    /// Whether the library holds no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Read-only view of the authoritative list.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Copy of the usage ledger, in first-requested order.
    pub fn iterator_stats(&self) -> IndexMap<String, usize> {
        self.ledger.snapshot()
    }

    /// Most requested strategy name; ties go to the one requested first.
    pub fn most_used_iterator_type(&self) -> Option<&str> {
        self.ledger.most_used()
    }

    /// Empty the usage ledger. Existing iterators are unaffected.
    pub fn clear_stats(&mut self) {
        info!(entries = self.ledger.len(), "clearing iterator stats");
        self.ledger.clear();
    }

    /// Counts by type and mean positive rating.
    pub fn library_info(&self) -> LibraryInfo {
        LibraryInfo::from_resources(&self.resources)
    }

    fn reference_date(&self) -> NaiveDate {
        self.config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for DigitalLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Resource> for DigitalLibrary {
    fn extend<I: IntoIterator<Item = Resource>>(&mut self, iter: I) {
        for resource in iter {
            self.add_resource(resource);
        }
    }
}

impl IterableCollection for DigitalLibrary {
    type Item = Resource;
    type Iter = CollectionIterator<Resource>;

    fn create_iterator(&mut self, name: &str, options: IteratorOptions) -> Self::Iter {
        DigitalLibrary::create_iterator(self, name, options)
    }

    fn size(&self) -> usize {
        DigitalLibrary::size(self)
    }
}
