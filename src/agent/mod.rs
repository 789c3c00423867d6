pub mod ai;

mod selector;
pub use selector::*;
