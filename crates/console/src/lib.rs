pub mod chain;
pub mod input;
pub mod labels;
pub mod paginate;
pub mod select;

pub use chain::{ChainOutcome, read_chain};
pub use input::Console;
pub use labels::Label;
pub use paginate::paginate;
