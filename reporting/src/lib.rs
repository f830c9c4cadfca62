//! Reporting engine for the Tea Factory Management Platform
//!
//! Pure aggregation over supply, payment, and inventory records as they
//! arrive from the backend: period and search filtering, grouped top-N
//! rankings, scalar and payment summaries, and export row projection.
//!
//! Every function here is synchronous, deterministic, and allocation-only.
//! Data-shape problems (missing fields, numeric strings, unparsable dates)
//! degrade to zeros or exclusions rather than erroring; only caller
//! mistakes (e.g., a malformed export column set) surface as errors.

pub mod debounce;
pub mod error;
pub mod export;
pub mod filter;
pub mod record;
pub mod status;
pub mod summary;

pub use debounce::{Clock, RefetchDebouncer, SystemClock};
pub use error::ExportError;
pub use export::{CellValue, Column, ExportTable, Sheet, Workbook};
pub use filter::{PeriodFilter, SearchFilter};
pub use record::RawRecord;
pub use status::{PaymentStatusClass, StatusVocabulary};
pub use summary::{GroupSummary, PaymentSummary, ReportSummary, ScalarSummary};
