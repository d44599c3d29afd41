pub mod accounting;
pub mod clearer;
pub mod orchestrator;
pub mod report;
pub mod targets;
