pub mod setup;
pub mod summary;
pub mod transactions;
pub mod ui;
