pub mod case_catalog;
pub mod payload_builder;
pub mod report_writer;

pub use case_catalog::{CaseCatalog, ExpiryCases, YearMonth};
pub use payload_builder::build_payload;
pub use report_writer::ReportWriter;
