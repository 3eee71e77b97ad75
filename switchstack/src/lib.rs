pub mod mode;
pub mod stack;

pub use mode::{InvalidMode, Mode};
pub use stack::Stack;
