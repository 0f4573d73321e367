pub mod country;
pub mod diagnostics;
