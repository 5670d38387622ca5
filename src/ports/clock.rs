//! Clock port.
//!
//! The only source of "now" for the application layer. Domain code takes
//! instants as arguments and never asks for the time itself.

use crate::domain::foundation::Timestamp;

/// Supplies the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_object_safe() {
        fn _accepts_dyn(_clock: &dyn Clock) {}
    }
}
