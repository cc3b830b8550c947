pub mod add;
pub mod delete;
pub mod list;
pub mod modify;
pub mod save;
pub mod search;
