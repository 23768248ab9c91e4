//! Code relating to user-input units and the display of amounts in them.

mod time;
mod money;

pub use self::time::*;
pub use self::money::*;
