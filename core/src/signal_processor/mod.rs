pub mod processor;
pub mod signal;


pub use processor::EventProcessor;
pub use signal::GameSignal;
