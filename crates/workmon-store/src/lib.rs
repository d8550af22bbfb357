// workmon Store Library
//
// Durable, deduplicated, append-only persistence of project records in a
// single spreadsheet file, plus full-table retrieval.
//
// ## Architecture
//
// ```text
// workmon-api (HTTP handlers)
//     ↓
// workmon-store (ProjectStore: load / dedup / append)
//     ↓
// .xlsx table on disk (calamine reads, rust_xlsxwriter writes)
// ```
//
// The file format has no incremental-append primitive, so every append is
// a full read plus a full rewrite. That is intentional for this
// low-volume, single-process workload; see `ProjectStore` for the
// concurrency contract.

pub mod project_store;
pub mod workbook;

pub use project_store::ProjectStore;
