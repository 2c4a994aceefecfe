//! Session domain module

mod session;

pub use session::{AudioSource, InvalidStateTransition, Session, SessionStatus};
