use crate::core::employee_store::EmployeeStore;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedEmployeeStore = Arc<RwLock<EmployeeStore<u32>>>;

/// Shared state handed to every resolver. A single lock serialises writers; readers
/// work on snapshots taken under the read lock.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: SharedEmployeeStore,
}

impl AppState {
    pub fn new(store: EmployeeStore<u32>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
