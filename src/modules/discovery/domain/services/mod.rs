pub mod discovery_evaluator;

pub use discovery_evaluator::DiscoveryEvaluator;
