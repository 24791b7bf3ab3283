//! Per-day label resolution: time zone normalisation, name substitution and
//! the same-day collision policy.

mod index;
mod resolver;

pub use index::LabelIndex;
pub use resolver::{format_label, resolve_label, resolve_local_date};
