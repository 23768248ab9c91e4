extern crate pad;
extern crate num;
extern crate tracing;

/// User-facing time units, their parsing, and currency display.
pub mod units;

/// Calendar constants and the weekly working hours.
pub mod schedule;

/// Guessing the unit of a bare pay figure.
pub mod infer;

/// Conversion of a pay quote into every supported unit.
pub mod convert;

/// List and table rendering of conversion results.
pub mod report;
