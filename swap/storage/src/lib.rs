mod buffer;
mod codec;
mod encoding;
mod error;
mod index;
mod key;
mod map;
mod mem;
mod multi;
mod prefix;
mod storage;

pub use {
    buffer::*, encoding::*, error::*, index::*, key::*, map::*, mem::*, multi::*, prefix::*,
    storage::*,
};
