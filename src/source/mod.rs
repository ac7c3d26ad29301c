pub mod loader;
pub mod tree;
pub mod typeinfo;
pub mod types;

pub use loader::*;
pub use tree::*;
pub use typeinfo::*;
pub use types::*;
