mod auth;
mod core;
mod error;
mod escrow;
mod execute;
mod pair;
mod query;
mod registry;
mod state;

pub use {
    auth::*, core::*, error::*, escrow::*, execute::*, pair::*, query::*, registry::*, state::*,
};
