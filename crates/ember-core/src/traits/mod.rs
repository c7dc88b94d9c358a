pub mod decay_tracker;

pub use decay_tracker::IDecayTracker;
