pub mod allocate;
pub mod catalog;
pub mod dispatch;
pub mod grid;
pub mod normalize;
pub mod schema;
pub mod shared;
pub mod sql;
