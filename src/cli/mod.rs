pub mod compare;
pub mod complement;
pub mod detail;
pub mod holding;
pub mod overlap;
pub mod search;
pub mod setup;
pub mod top;
pub mod ui;
