use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Diagnostics {
    pub countriesnowapi: u16,
    pub restcountriesapi: u16,
    pub version: &'static str,
    pub uptime: u64,
}
