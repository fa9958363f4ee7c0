//! Batch conversion of stored records
//!
//! Converting a batch runs in two phases. Every selected record is first
//! converted into its new body; this phase only reads from the store and can
//! run in parallel. The bodies are then written back one record at a time, in
//! fetch order.
//!
//! A record that fails in either phase is logged and reported in the
//! [`BatchReport`]; the rest of the batch carries on. Only a failing record
//! query stops the batch, since there is nothing left to convert.
//!
//! Records without any layouts are skipped rather than given an empty body,
//! so content written outside the layout fields is never wiped.

use crate::assemble::assemble;
use crate::error::{ConvertError, Result, StoreError};
use crate::layout::RecordId;
use crate::registry::ConverterRegistry;
use crate::store::{ImageResolver, RecordFilter, RecordSink, RecordSource};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Convert records on the rayon thread pool
    pub parallel: bool,
}

/// A record that could not be converted or saved.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFailure {
    pub id: RecordId,
    pub error: ConvertError,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub converted: Vec<RecordId>,
    /// Records left untouched because they hold no layouts
    pub skipped: Vec<RecordId>,
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build the new body of a single record without saving it.
///
/// Returns `None` when the record holds no layouts.
pub fn convert_body<S>(
    registry: &ConverterRegistry,
    store: &S,
    id: RecordId,
) -> Result<Option<String>>
where
    S: RecordSource + ImageResolver,
{
    let layouts = store.get_layout_instances(id)?;
    if layouts.is_empty() {
        return Ok(None);
    }
    log::debug!("record {id}: {} layout(s)", layouts.len());
    assemble(registry, &layouts, store).map(Some)
}

/// Convert a single record and save its new body.
///
/// A record without layouts is left as it is and `None` is returned.
pub fn convert_record<S>(
    registry: &ConverterRegistry,
    store: &mut S,
    id: RecordId,
) -> Result<Option<RecordId>>
where
    S: RecordSource + RecordSink + ImageResolver,
{
    match convert_body(registry, store, id)? {
        Some(body) => Ok(Some(store.update_record_content(id, body)?)),
        None => {
            log::info!("record {id} has no layouts, skipped");
            Ok(None)
        }
    }
}

/// Convert every record selected by `filter`.
///
/// A positive `filter.id` converts exactly that record, whether or not a
/// query would have matched it; a missing record is reported as a failure.
pub fn convert_records<S>(
    registry: &ConverterRegistry,
    store: &mut S,
    filter: &RecordFilter,
    options: BatchOptions,
) -> std::result::Result<BatchReport, StoreError>
where
    S: RecordSource + RecordSink + ImageResolver,
{
    let ids: Vec<RecordId> = match filter.single_id() {
        Some(id) => vec![id],
        None => store
            .fetch_records(filter)?
            .into_iter()
            .map(|record| record.id)
            .collect(),
    };
    log::info!("converting {} record(s)", ids.len());

    let bodies = convert_bodies(registry, store, &ids, options);

    let mut report = BatchReport::default();
    for (id, body) in ids.into_iter().zip(bodies) {
        let saved = match body {
            Ok(Some(body)) => store.update_record_content(id, body).map_err(ConvertError::from),
            Ok(None) => {
                log::info!("record {id} has no layouts, skipped");
                report.skipped.push(id);
                continue;
            }
            Err(error) => Err(error),
        };
        match saved {
            Ok(id) => {
                log::info!("record {id} converted");
                report.converted.push(id);
            }
            Err(error) => {
                log::warn!("record {id} not converted: {error}");
                report.failures.push(RecordFailure { id, error });
            }
        }
    }

    Ok(report)
}

fn convert_bodies<S>(
    registry: &ConverterRegistry,
    store: &S,
    ids: &[RecordId],
    options: BatchOptions,
) -> Vec<Result<Option<String>>>
where
    S: RecordSource + ImageResolver,
{
    #[cfg(feature = "parallel")]
    if options.parallel {
        use rayon::prelude::*;
        return ids
            .par_iter()
            .map(|id| convert_body(registry, store, *id))
            .collect();
    }

    #[cfg(not(feature = "parallel"))]
    if options.parallel {
        log::debug!("built without the parallel feature, converting sequentially");
    }

    ids.iter()
        .map(|id| convert_body(registry, store, *id))
        .collect()
}
