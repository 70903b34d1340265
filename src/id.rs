/// Monotonic id source. Settlements and journal entries draw from the same
/// sequence, so an id is never reused across kinds.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Resume a sequence, e.g. after loading saved villages.
    pub fn starting_from(start: u64) -> Self {
        Self { next: start.max(1) }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn resumed_sequence_never_issues_zero() {
        let mut ids = IdGenerator::starting_from(0);
        assert_eq!(ids.next_id(), 1);
        let mut ids = IdGenerator::starting_from(500);
        assert_eq!(ids.next_id(), 500);
    }
}
