//! Category registry and its shared handle

use crate::patterns::PatternExtractor;
use crate::profile::CategoryProfile;
use ngramcat_core::CategoryId;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// A known category
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: CategoryId,
    enabled: bool,
    profile: Option<Arc<CategoryProfile>>,
}

impl Category {
    fn new(id: CategoryId) -> Self {
        Self {
            id,
            enabled: false,
            profile: None,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Whether the category takes part in classification
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a profile has been trained or loaded
    pub fn is_trained(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&CategoryProfile> {
        self.profile.as_deref()
    }
}

/// Owns every category, its enabled flag and its profile.
///
/// Categories are never removed; they are created by training (or by
/// [`ProfileRegistry::register`]) and afterwards only toggled or retrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileRegistry {
    categories: BTreeMap<CategoryId, Category>,
}

impl ProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the given categories; unknown ids are ignored
    pub fn enable<I: IntoIterator<Item = CategoryId>>(&mut self, ids: I) {
        self.set_enabled(ids, true);
    }

    /// Disable the given categories; unknown ids are ignored
    pub fn disable<I: IntoIterator<Item = CategoryId>>(&mut self, ids: I) {
        self.set_enabled(ids, false);
    }

    pub fn enable_all(&mut self) {
        self.categories.values_mut().for_each(|c| c.enabled = true);
    }

    pub fn disable_all(&mut self) {
        self.categories.values_mut().for_each(|c| c.enabled = false);
    }

    fn set_enabled<I: IntoIterator<Item = CategoryId>>(&mut self, ids: I, enabled: bool) {
        for id in ids {
            match self.categories.get_mut(&id) {
                Some(category) => category.enabled = enabled,
                None => debug!(category = id, enabled, "Ignoring unknown category"),
            }
        }
    }

    /// Enabled category ids, ascending
    pub fn active_categories(&self) -> Vec<CategoryId> {
        self.categories
            .values()
            .filter(|c| c.enabled)
            .map(|c| c.id)
            .collect()
    }

    /// All known category ids, ascending
    pub fn available_categories(&self) -> Vec<CategoryId> {
        self.categories.keys().copied().collect()
    }

    /// Declare a category without a profile. Returns false if already known.
    pub fn register(&mut self, id: CategoryId) -> bool {
        match self.categories.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Category::new(id));
                true
            }
        }
    }

    /// Install or replace a category's profile.
    ///
    /// A new category starts disabled; an existing one keeps its flag.
    pub fn set_profile(&mut self, id: CategoryId, profile: CategoryProfile) {
        self.install(id, Arc::new(profile));
    }

    fn install(&mut self, id: CategoryId, profile: Arc<CategoryProfile>) {
        debug!(category = id, patterns = profile.len(), "Installing profile");
        self.categories
            .entry(id)
            .or_insert_with(|| Category::new(id))
            .profile = Some(profile);
    }

    /// Train a category from text samples, replacing any previous profile.
    ///
    /// Samples without letters leave the registry untouched and return false.
    pub fn train<S: AsRef<str>>(
        &mut self,
        extractor: &PatternExtractor,
        id: CategoryId,
        samples: &[S],
    ) -> bool {
        match CategoryProfile::train(extractor, samples) {
            Some(profile) => {
                info!(category = id, patterns = profile.len(), "Trained category");
                self.set_profile(id, profile);
                true
            }
            None => {
                debug!(category = id, "Training input has no letters, skipping");
                false
            }
        }
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn profile(&self, id: CategoryId) -> Option<&CategoryProfile> {
        self.categories.get(&id).and_then(Category::profile)
    }

    /// Enabled, trained categories in ascending id order
    pub fn scorable(&self) -> impl Iterator<Item = (CategoryId, &CategoryProfile)> {
        self.categories
            .values()
            .filter(|c| c.enabled)
            .filter_map(|c| c.profile().map(|p| (c.id, p)))
    }

    /// Trained categories in ascending id order, regardless of flags
    pub fn trained(&self) -> impl Iterator<Item = (CategoryId, &CategoryProfile)> {
        self.categories
            .values()
            .filter_map(|c| c.profile().map(|p| (c.id, p)))
    }

    /// Number of known categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Registry handle for concurrent use.
///
/// Any number of readers classify against the registry while writers train
/// or toggle categories. Profiles are built outside the lock and swapped in,
/// so a reader never sees a half-built profile.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<ProfileRegistry>>,
}

impl SharedRegistry {
    /// Wrap a registry for sharing across threads
    pub fn new(registry: ProfileRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Shared read access
    pub fn read(&self) -> RwLockReadGuard<'_, ProfileRegistry> {
        self.inner.read()
    }

    /// Exclusive write access
    pub fn write(&self) -> RwLockWriteGuard<'_, ProfileRegistry> {
        self.inner.write()
    }

    /// Train a category, holding the write lock only for the swap
    pub fn train<S: AsRef<str>>(
        &self,
        extractor: &PatternExtractor,
        id: CategoryId,
        samples: &[S],
    ) -> bool {
        let Some(profile) = CategoryProfile::train(extractor, samples) else {
            debug!(category = id, "Training input has no letters, skipping");
            return false;
        };

        info!(category = id, patterns = profile.len(), "Trained category");
        self.inner.write().install(id, Arc::new(profile));
        true
    }

    /// Frozen copy of the current state; profiles are shared, not cloned
    pub fn snapshot(&self) -> ProfileRegistry {
        self.inner.read().clone()
    }
}
