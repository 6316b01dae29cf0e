mod gateway;
mod result;
mod suite;
mod tracing;

pub use {gateway::*, result::*, suite::*, tracing::*};
