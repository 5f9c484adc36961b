use crate::config::CollectorConfig;
use crate::crawlers::PageSource;
use crate::error::Result;
use crate::results::ExtractedRecord;
use std::collections::HashSet;

/// Records gathered so far by one run of the loop.
///
/// Records are append-only: once inserted they are never removed or changed,
/// and every collected id is also in the seen set.
#[derive(Debug, Default)]
pub struct CollectionState {
    collected: Vec<ExtractedRecord>,
    seen_ids: HashSet<String>,
    stable_rounds: u32,
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record unless its id was already collected; returns whether it was added
    pub fn insert(&mut self, record: ExtractedRecord) -> bool {
        if self.seen_ids.contains(&record.id) {
            return false;
        }
        self.seen_ids.insert(record.id.clone());
        self.collected.push(record);
        true
    }

    /// Update the empty-round counter after a scan that added `new_records`
    pub fn finish_round(&mut self, new_records: usize) {
        if new_records == 0 {
            self.stable_rounds += 1;
        } else {
            self.stable_rounds = 0;
        }
    }

    pub fn stable_rounds(&self) -> u32 {
        self.stable_rounds
    }

    pub fn records(&self) -> &[ExtractedRecord] {
        &self.collected
    }

    fn len(&self) -> usize {
        self.collected.len()
    }

    pub fn into_records(self) -> Vec<ExtractedRecord> {
        self.collected
    }
}

/// Loop phases; leaving the loop is the terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Scanning,
    WaitingForLoad,
}

/// Scan the page once and add every new record; returns how many were added
async fn scan_round<S>(source: &mut S, state: &mut CollectionState) -> Result<usize>
where
    S: PageSource + ?Sized,
{
    let candidates = source.list_candidates().await?;
    let mut added = 0;

    for candidate in &candidates {
        // Malformed rows and placeholders are skipped without touching the state
        let Some(record) = source.extract_from(candidate) else {
            continue;
        };
        if state.insert(record) {
            added += 1;
        }
    }

    ::log::debug!(
        "Scanned {} candidates, {} new records",
        candidates.len(),
        added
    );
    Ok(added)
}

/// Scroll through the whole list and return every distinct record in discovery order.
///
/// The page gives no signal when lazy loading is finished, so the loop stops
/// after `stable_round_threshold` consecutive scans find nothing new. On a
/// slow connection this can end before the list is exhausted.
pub async fn collect_all<S>(source: &mut S, config: &CollectorConfig) -> Result<Vec<ExtractedRecord>>
where
    S: PageSource + ?Sized,
{
    let mut state = CollectionState::new();
    let mut loop_state = LoopState::Scanning;
    let mut round = 0usize;
    let start_time = std::time::Instant::now();

    loop {
        match loop_state {
            LoopState::Scanning => {
                round += 1;
                let added = scan_round(source, &mut state).await?;
                state.finish_round(added);

                ::log::info!(
                    "Round {}: {} new, {} total, {} stable round(s)",
                    round,
                    added,
                    state.len(),
                    state.stable_rounds()
                );

                source.scroll_to_bottom().await?;
                loop_state = LoopState::WaitingForLoad;
            }
            LoopState::WaitingForLoad => {
                tokio::time::sleep(config.poll_interval).await;
                if state.stable_rounds() >= config.stable_round_threshold {
                    break;
                }
                loop_state = LoopState::Scanning;
            }
        }
    }

    ::log::info!(
        "Collected {} records in {} rounds ({:.2} seconds)",
        state.len(),
        round,
        start_time.elapsed().as_secs_f64()
    );
    Ok(state.into_records())
}
