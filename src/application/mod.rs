//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod enroll;
pub mod history;
pub mod ports;
pub mod session;

// Re-export use cases
pub use enroll::{EnrollError, EnrollSpeakersUseCase};
pub use history::{FetchHistoryUseCase, HistoryError};
pub use session::{SessionController, SessionError};
