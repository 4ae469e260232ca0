//! Normalization engine for the WHO ICTRP clinical-trial feed.
//!
//! Transforms one feed row at a time into a canonical trial document,
//! reconciling the registry-specific free-text conventions for dates,
//! phases, study designs, arms, interventions, countries, and authors into
//! one vocabulary. The field normalizers share no mutable state; the row
//! orchestrator in [`record`] composes them, and the batch runner adds the
//! post-hoc duplicate-identifier check.

pub mod arms;
pub mod authors;
pub mod condition;
pub mod country;
pub mod datetime;
pub mod design;
pub mod eligibility;
pub mod error;
pub mod events;
pub mod outcome;
pub mod record;
pub mod status;
pub mod vocab;

pub use datetime::{DateFormat, format_date};
pub use error::{NormalizeError, Result};
pub use record::{Batch, DuplicateId, binarize, normalize_batch, normalize_row};
