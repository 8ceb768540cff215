pub extern crate serde;
pub extern crate serde_json;
pub extern crate uuid;

mod history;
mod message;
mod stroke_accumulator;
mod types;

pub use history::*;
pub use message::*;
pub use stroke_accumulator::*;
pub use types::*;
