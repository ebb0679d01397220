//! Negative node id allocation.

use addr_model::NodeId;

use crate::error::TransformError;

/// Default starting point; the first allocated id is one below it.
pub const INITIAL_ID: i64 = -747;

/// Hands out strictly decreasing negative ids.
///
/// Single-threaded: one allocator per batch run.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    current: i64,
}

impl IdAllocator {
    pub fn new(initial: i64) -> Result<Self, TransformError> {
        if initial > 0 {
            return Err(TransformError::InvalidInitialId(initial));
        }
        Ok(Self { current: initial })
    }

    /// Decrements the counter and returns the new value.
    pub fn next_id(&mut self) -> Result<NodeId, TransformError> {
        let next = self
            .current
            .checked_sub(1)
            .ok_or(TransformError::IdsExhausted { last: self.current })?;
        let id = NodeId::new(next).map_err(|_| TransformError::InvalidInitialId(self.current))?;
        self.current = next;
        Ok(id)
    }

    /// The most recently allocated value (or the initial value).
    pub fn current(&self) -> i64 {
        self.current
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            current: INITIAL_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_below_initial() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.next_id().unwrap().value(), -748);
        assert_eq!(ids.next_id().unwrap().value(), -749);
        assert_eq!(ids.current(), -749);
    }

    #[test]
    fn zero_initial_yields_minus_one() {
        let mut ids = IdAllocator::new(0).unwrap();
        let taken: Vec<i64> = (0..3).map(|_| ids.next_id().unwrap().value()).collect();
        assert_eq!(taken, vec![-1, -2, -3]);
    }

    #[test]
    fn positive_initial_rejected() {
        assert!(matches!(
            IdAllocator::new(5),
            Err(TransformError::InvalidInitialId(5))
        ));
    }

    #[test]
    fn exhaustion_is_an_error() {
        let mut ids = IdAllocator::new(i64::MIN + 1).unwrap();
        assert_eq!(ids.next_id().unwrap().value(), i64::MIN);
        assert!(matches!(
            ids.next_id(),
            Err(TransformError::IdsExhausted { last: i64::MIN })
        ));
        assert_eq!(ids.current(), i64::MIN);
    }
}
