pub mod http;
pub mod scan;
