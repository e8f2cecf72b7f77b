pub mod report;

pub use report::offload_report;
