// Plain markup
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod rating_scale;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod avatar;
pub mod progress;
pub mod separator;
pub mod switch;
pub mod tabs;
pub mod toast;

// App shell
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use rating_scale::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
pub use switch::*;
pub use tabs::*;
pub use textarea::*;
pub use toast::*;
