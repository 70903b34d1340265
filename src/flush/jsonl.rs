use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ecs::resources::EconomyJournal;
use crate::model::{EconomyState, SettlementId};

pub const EVENTS_FILE: &str = "economy_events.jsonl";
pub const STATES_FILE: &str = "village_states.jsonl";

/// One village's raw economy as written to `village_states.jsonl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillageSnapshot {
    pub settlement_id: SettlementId,
    pub name: String,
    /// Absolute day the village was spawned, if it was spawned on a clock.
    #[serde(default)]
    pub founded_day: Option<u32>,
    pub state: EconomyState,
}

/// Write serializable items one JSON object per line.
fn write_jsonl<W: Write, T: Serialize>(writer: W, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush journal entries and village states into `output_dir`.
///
/// Creates the directory if needed. Journal entries are appended to
/// `economy_events.jsonl`, so repeated flushes of a cleared journal build one
/// continuous log. `village_states.jsonl` is rewritten as a full snapshot.
pub fn flush_journal_to_jsonl(
    journal: &EconomyJournal,
    villages: &[VillageSnapshot],
    output_dir: &Path,
) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    let events = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_dir.join(EVENTS_FILE))?;
    write_jsonl(events, journal.entries.iter())?;

    write_jsonl(File::create(output_dir.join(STATES_FILE))?, villages.iter())?;

    Ok(())
}
