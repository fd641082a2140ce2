pub mod ports;

pub use ports::*;

/// File extensions accepted from the capture flow.
pub const SUPPORTED_FORMATS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn is_supported_format(extension: &str) -> bool {
    SUPPORTED_FORMATS
        .iter()
        .any(|format| format.eq_ignore_ascii_case(extension))
}
