use std::cell::{Cell, RefCell};

use crate::model::{Profile, ProfileList};

/// Last server-confirmed profile snapshot.
///
/// The only way in is [`ProfileStore::replace`], so readers always see a whole
/// snapshot. Shared by `Rc` between the controller (the writer) and the view
/// binder (a reader).
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: RefCell<ProfileList>,
    revision: Cell<u64>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, list: ProfileList) {
        *self.profiles.borrow_mut() = list;
        self.revision.set(self.revision.get() + 1);
    }

    pub fn current(&self) -> ProfileList {
        self.profiles.borrow().clone()
    }

    /// Number of snapshots stored so far; `0` until the first successful fetch.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    pub fn len(&self) -> usize {
        self.profiles.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.borrow().is_empty()
    }

    pub fn find(&self, name: &str) -> Option<Profile> {
        self.profiles.borrow().iter().find(|p| p.name == name).cloned()
    }

    /// Profiles matching `query` (trimmed, case-insensitive), in server order.
    pub fn filtered(&self, query: &str) -> ProfileList {
        filter_profiles(&self.profiles.borrow(), query)
    }
}

pub fn filter_profiles(profiles: &[Profile], query: &str) -> ProfileList {
    let needle = query.trim().to_lowercase();
    profiles
        .iter()
        .filter(|p| p.matches(&needle))
        .cloned()
        .collect()
}
