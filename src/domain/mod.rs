// Domain layer - pure models and rules, no I/O
pub mod aggregation;
pub mod chart;
pub mod signal;
pub mod synthesizer;
pub mod theme;
