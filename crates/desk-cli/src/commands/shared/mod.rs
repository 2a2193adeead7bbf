pub mod editor;
pub mod responses;
