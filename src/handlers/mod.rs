pub mod countries;
pub mod diagnostics;
