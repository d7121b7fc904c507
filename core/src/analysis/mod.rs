pub use letters::*;
pub use overlap::*;

mod letters;
mod overlap;
