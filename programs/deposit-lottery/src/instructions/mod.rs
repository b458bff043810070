pub mod close_draw;
pub mod complete_draw;
pub mod delete_entry;
pub mod initialize_config;
pub mod lock_slot;
pub mod purge_entries;
pub mod start_draw;
pub mod update_config;

pub use close_draw::*;
pub use complete_draw::*;
pub use delete_entry::*;
pub use initialize_config::*;
pub use lock_slot::*;
pub use purge_entries::*;
pub use start_draw::*;
pub use update_config::*;
