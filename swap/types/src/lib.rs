mod asset;
mod error;
mod events;
mod memo;
mod msgs;
mod name;
mod records;
mod response;
mod symbol;

pub use {
    asset::*, error::*, events::*, memo::*, msgs::*, name::*, records::*, response::*, symbol::*,
};
