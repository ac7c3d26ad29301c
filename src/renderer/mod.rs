pub mod components;
pub mod disambiguate;
pub mod masking;
pub mod otree;
pub mod renderer;
pub mod renders;
pub mod report;
pub mod sink;
pub mod traits;
pub mod visitor;

pub use components::*;
pub use disambiguate::*;
pub use masking::*;
pub use otree::*;
pub use renderer::*;
pub use report::*;
pub use sink::*;
pub use traits::*;
pub use visitor::*;
