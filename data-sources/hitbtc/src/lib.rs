pub mod error;
pub mod protocol;
pub mod public;
pub mod ws;

/// Correlation id sent with every request. The venue echoes it back, but
/// replies are matched by shape, so a fixed value is enough.
pub const REQUEST_ID: u32 = 123;
