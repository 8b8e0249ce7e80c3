use crate::decaying::{DecayEntry, DecayingDomain};

impl DecayingDomain {
    /// Accumulates real time and reports whether a check is due.
    pub fn tick(&mut self, real_seconds: f32) -> bool {
        self.elapsed += real_seconds;
        if self.elapsed < self.check_interval {
            return false;
        }
        self.elapsed = 0.0;
        true
    }

    /// Removes and returns entries whose expiry is not after `now`.
    pub fn take_expired(&mut self, now: i64) -> Vec<DecayEntry> {
        let (expired, pending): (Vec<DecayEntry>, Vec<DecayEntry>) = self
            .entries
            .drain(..)
            .partition(|entry| entry.expiry <= now);
        self.entries = pending;
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiling::{LayerId, Role};

    #[test]
    fn test_check_runs_once_per_interval() {
        let mut domain = DecayingDomain::new(0.25);
        assert!(!domain.tick(0.1));
        assert!(!domain.tick(0.1));
        assert!(domain.tick(0.1));
        assert_eq!(domain.elapsed, 0.0);
        assert!(!domain.tick(0.2));
    }

    #[test]
    fn test_reregistration_replaces_entry() {
        let mut domain = DecayingDomain::default();
        domain.register(LayerId(1), [2, 3], 100, Role::GroundBase, None);
        domain.register(LayerId(1), [2, 3], 400, Role::GroundHoed, None);
        domain.register(LayerId(2), [2, 3], 50, Role::GroundBase, None);
        assert_eq!(domain.entries.len(), 2);
        assert_eq!(domain.entries[0].expiry, 400);
        assert_eq!(domain.entries[0].previous, Role::GroundHoed);
    }

    #[test]
    fn test_reregistration_keeps_first_covered_tile() {
        let mut domain = DecayingDomain::default();
        domain.register(LayerId(1), [2, 3], 100, Role::GroundBase, Some("dirt".into()));
        domain.register(LayerId(1), [2, 3], 400, Role::GroundBase, Some("wet".into()));
        assert_eq!(domain.entries[0].expiry, 400);
        assert_eq!(domain.entries[0].covered.as_deref(), Some("dirt"));
    }

    #[test]
    fn test_take_expired_keeps_pending() {
        let mut domain = DecayingDomain::default();
        domain.register(LayerId(1), [0, 0], 100, Role::GroundBase, None);
        domain.register(LayerId(1), [1, 0], 200, Role::GroundBase, None);
        let expired = domain.take_expired(150);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].cell, [0, 0]);
        assert_eq!(domain.entries.len(), 1);
        assert_eq!(domain.entries[0].cell, [1, 0]);
    }
}
