pub mod animation;
pub mod config;
pub mod constants;
pub mod geom;
pub mod graph;
pub mod label;
pub mod node;
pub mod pulse;
pub mod surface;

pub use animation::*;
pub use config::*;
pub use geom::*;
pub use graph::*;
pub use label::*;
pub use node::*;
pub use pulse::*;
pub use surface::*;
