pub mod jsonl;

pub use jsonl::{EVENTS_FILE, STATES_FILE, VillageSnapshot, flush_journal_to_jsonl};
