use stringlab_backend::store::StringStore;

/// Shared application state / 共享应用状态
///
/// The store is the only shared mutable state in the process; handlers
/// receive it through an `Arc<AppState>`.
pub struct AppState {
    pub store: StringStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: StringStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
