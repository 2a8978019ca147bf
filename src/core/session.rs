use super::coin::FlipOutcome;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const HISTORY_CAP: usize = 10;
pub const LABEL_MAX_CHARS: usize = 15;

/// Truncate by characters, not bytes; default labels may be CJK.
fn clamp_label(text: &str) -> String {
    text.chars().take(LABEL_MAX_CHARS).collect()
}

/// User-configurable face text, applied to textures and history records.
#[derive(Clone, Debug)]
pub struct FaceLabels {
    heads: String,
    tails: String,
}

impl FaceLabels {
    pub fn new(heads: &str, tails: &str) -> Self {
        Self {
            heads: clamp_label(heads),
            tails: clamp_label(tails),
        }
    }

    pub fn heads(&self) -> &str {
        &self.heads
    }

    pub fn tails(&self) -> &str {
        &self.tails
    }

    pub fn set_heads(&mut self, text: &str) {
        self.heads = clamp_label(text);
    }

    pub fn set_tails(&mut self, text: &str) {
        self.tails = clamp_label(text);
    }

    pub fn for_outcome(&self, outcome: FlipOutcome) -> &str {
        match outcome {
            FlipOutcome::Heads => &self.heads,
            FlipOutcome::Tails => &self.tails,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FlipRecord {
    pub id: u64,
    pub outcome: FlipOutcome,
    /// Face text snapshotted when the flip started, not when it landed.
    pub label: String,
    pub timestamp_ms: f64,
}

#[derive(Clone, Debug)]
struct PendingFlip {
    outcome: FlipOutcome,
    label: String,
}

/// Single owner of mutable session state: labels, the in-flight flip, and
/// the bounded result history. The RNG is seeded by the caller so tests can
/// fix outcomes.
pub struct Session {
    labels: FaceLabels,
    history: Vec<FlipRecord>,
    pending: Option<PendingFlip>,
    rng: StdRng,
    next_id: u64,
}

impl Session {
    pub fn new(labels: FaceLabels, seed: u64) -> Self {
        Self {
            labels,
            history: Vec::new(),
            pending: None,
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn labels(&self) -> &FaceLabels {
        &self.labels
    }

    pub fn labels_mut(&mut self) -> &mut FaceLabels {
        &mut self.labels
    }

    pub fn is_flipping(&self) -> bool {
        self.pending.is_some()
    }

    pub fn history(&self) -> &[FlipRecord] {
        &self.history
    }

    /// Begin a flip: draws the outcome and snapshots its label. Returns
    /// `None` (a no-op) if a flip is already in flight.
    pub fn request_flip(&mut self) -> Option<FlipOutcome> {
        if self.pending.is_some() {
            return None;
        }
        let outcome = FlipOutcome::draw(&mut self.rng);
        let label = self.labels.for_outcome(outcome).to_string();
        self.pending = Some(PendingFlip { outcome, label });
        Some(outcome)
    }

    /// Land the in-flight flip: prepend its record and cap the history.
    pub fn complete_flip(&mut self, timestamp_ms: f64) -> Option<&FlipRecord> {
        let pending = self.pending.take()?;
        let id = self.next_id;
        self.next_id += 1;
        self.history.insert(
            0,
            FlipRecord {
                id,
                outcome: pending.outcome,
                label: pending.label,
                timestamp_ms,
            },
        );
        self.history.truncate(HISTORY_CAP);
        self.history.first()
    }
}
