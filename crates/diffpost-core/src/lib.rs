pub mod compute;
pub mod consts;
pub mod error;
pub mod filters;
pub mod frame;
pub mod io;
pub mod oracle;
pub mod pipeline;

pub use error::{DiffPostError, Result};
pub use filters::{posterize_diff, sharpen, Level, Thresholds};
pub use frame::{Dimensions, Image};
pub use oracle::{compare, Mismatch, Oracle, Verdict};
pub use pipeline::run_pipeline;
