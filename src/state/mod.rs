use std::sync::Arc;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::store::Store;

/// Handle to the process-wide store, cloned into every request context.
#[derive(Clone)]
pub struct State {
    store: Arc<RwLock<Store>>,
}

impl State {
    pub fn init(store: Store) -> Self {
        State {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn store(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read()
    }

    /// Held for the whole of a create so id assignment and the append are atomic.
    pub fn store_mut(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write()
    }
}
