pub mod catalog;
pub mod dispatch;
pub mod feed;
pub mod ideas;
