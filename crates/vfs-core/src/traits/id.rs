//! Identifier generation.
//!
//! Entities are keyed by UUIDv7 values. Because UUIDv7 encodes the
//! creation instant in its most significant bits, ordering rows by id
//! reproduces insertion order without a separate sequence column.

use std::sync::Mutex;

use uuid::timestamp::context::ContextV7;
use uuid::{Timestamp, Uuid};

/// Produces identifiers for newly created entities.
pub trait IdGenerator: Send + Sync {
    /// Generate the next identifier.
    fn next_id(&self) -> Uuid;
}

/// UUIDv7 generator whose output is strictly increasing.
///
/// The shared [`ContextV7`] counter disambiguates ids generated within
/// the same millisecond, so consecutive calls always sort in call order.
pub struct MonotonicIdGenerator {
    // ContextV7 is not Sync; the mutex provides the sharing the
    // IdGenerator trait promises.
    context: Mutex<ContextV7>,
}

impl MonotonicIdGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self {
            context: Mutex::new(ContextV7::new()),
        }
    }
}

impl Default for MonotonicIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for MonotonicIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v7(Timestamp::now(&*self.context.lock().unwrap()))
    }
}
