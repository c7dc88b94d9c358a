pub mod decay_config;
pub mod defaults;
pub mod ember_config;
pub mod observability_config;

pub use decay_config::DecayConfig;
pub use ember_config::EmberConfig;
pub use observability_config::ObservabilityConfig;
