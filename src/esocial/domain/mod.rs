//! Domain model for eSocial event validation.
//!
//! All types here are transient values: they are built per validation call
//! from caller-supplied input, never mutated afterwards, and hold no
//! references to one another beyond composition.

mod envelope;
mod error;
mod event_type;
mod path;
mod result;

pub use envelope::EventEnvelope;
pub use error::{ErrorCode, ParseEventTypeError, ValidationError};
pub use event_type::EventType;
pub use path::{FieldPath, PathSegment};
pub use result::ValidationResult;
