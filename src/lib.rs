mod analysis;
mod analyzer;
mod char_classes;
mod crack_time;
mod entropy;
mod error;
mod patterns;
mod recommendation;
mod strength;
mod wordlist;

pub use analysis::*;
pub use analyzer::*;
pub use char_classes::*;
pub use crack_time::*;
pub use entropy::*;
pub use error::*;
pub(crate) use patterns::*;
pub use recommendation::*;
pub use strength::*;
pub use wordlist::*;
