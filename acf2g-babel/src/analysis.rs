//! Layout usage analysis
//!
//! Tallies which records use each layout kind, to size a migration before
//! running it. A record counts once per kind no matter how many instances of
//! that kind it holds.

use crate::error::StoreError;
use crate::layout::{LayoutKind, RecordId};
use crate::store::{RecordFilter, RecordSource};

/// Records using one layout kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindUsage {
    /// Stored kind name
    pub kind: String,
    /// Whether the kind is one the converter knows
    pub known: bool,
    pub record_ids: Vec<RecordId>,
}

impl KindUsage {
    pub fn count(&self) -> usize {
        self.record_ids.len()
    }
}

/// Usage of every known kind, followed by any unknown kinds encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutUsage {
    pub kinds: Vec<KindUsage>,
}

impl LayoutUsage {
    fn new() -> Self {
        let kinds = LayoutKind::ALL
            .into_iter()
            .map(|kind| KindUsage {
                kind: kind.name().to_string(),
                known: true,
                record_ids: Vec::new(),
            })
            .collect();
        Self { kinds }
    }

    pub fn get(&self, kind: &str) -> Option<&KindUsage> {
        self.kinds.iter().find(|usage| usage.kind == kind)
    }

    /// Kinds found in the records that the converter would reject.
    pub fn unknown(&self) -> impl Iterator<Item = &KindUsage> {
        self.kinds.iter().filter(|usage| !usage.known)
    }

    fn record(&mut self, kind: &str, id: RecordId) {
        match self.kinds.iter_mut().find(|usage| usage.kind == kind) {
            Some(usage) => usage.record_ids.push(id),
            None => self.kinds.push(KindUsage {
                kind: kind.to_string(),
                known: false,
                record_ids: vec![id],
            }),
        }
    }
}

/// Tally layout usage over the records selected by `filter`.
pub fn analyse(source: &dyn RecordSource, filter: &RecordFilter) -> Result<LayoutUsage, StoreError> {
    let mut usage = LayoutUsage::new();

    for record in source.fetch_records(filter)? {
        let layouts = match source.get_layout_instances(record.id) {
            Ok(layouts) => layouts,
            Err(error @ StoreError::InvalidLayouts { .. }) => {
                log::warn!("{error}, not counted");
                continue;
            }
            Err(error) => return Err(error),
        };
        if layouts.is_empty() {
            continue;
        }

        let mut seen: Vec<&str> = Vec::new();
        for layout in &layouts {
            if !seen.contains(&layout.kind.as_str()) {
                seen.push(&layout.kind);
            }
        }
        for kind in seen {
            usage.record(kind, record.id);
        }
    }

    Ok(usage)
}
