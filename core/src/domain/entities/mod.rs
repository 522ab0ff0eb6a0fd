//! Domain entities representing core client objects.

pub mod entity_match;
pub mod otp_code;
pub mod session;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use entity_match::{EntityMatch, EntityType};
pub use otp_code::{OtpDigits, CODE_LENGTH};
pub use session::{LoginResponse, UserRole};
