mod app;
mod error;
mod gateway;

pub use {app::*, error::*, gateway::*};
