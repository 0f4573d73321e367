pub mod aggregation;
pub mod upstream;
