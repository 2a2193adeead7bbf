pub mod add;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod list;
pub mod shared;
pub mod show;
pub mod toggle;
