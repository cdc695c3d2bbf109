pub mod captable;
pub mod check;
pub mod dilution;
pub mod timeline;
