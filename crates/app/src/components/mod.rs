pub mod load_state;
pub mod status_badge;

pub use load_state::{LoadError, LoadingCards};
pub use status_badge::StatusBadge;
