mod task;

pub use task::StoreError;
pub use task::TaskStore;
