pub mod error;
pub mod feature_flags;

// Role-gated navigation and views
pub mod access;
pub mod navigation;
pub mod role;
pub mod session;
pub mod views;

// Portal data
pub mod activity;
pub mod dashboard;
pub mod directory;
pub mod password;
pub mod report;
pub mod requests;
pub mod review;
pub mod settings;

pub use error::*;
pub use feature_flags::*;

pub use access::*;
pub use navigation::*;
pub use role::*;
pub use session::*;
pub use views::*;

pub use activity::*;
pub use dashboard::*;
pub use directory::*;
pub use password::*;
pub use report::*;
pub use requests::*;
pub use review::*;
pub use settings::*;
