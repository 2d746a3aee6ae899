//! Identity and time ports consumed by the post service.

use crate::domain::Principal;

/// Supplies the identifier of whoever invoked the current operation.
pub trait IdentitySource: Send + Sync {
    fn current_caller(&self) -> Principal;
}

/// A principal is trivially its own identity source.
impl IdentitySource for Principal {
    fn current_caller(&self) -> Principal {
        self.clone()
    }
}

/// Time source returning nanoseconds; never decreases within a process.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_is_identity_source() {
        let alice = Principal::new("alice");
        assert_eq!(alice.current_caller(), alice);
    }
}
