pub use paint::*;
pub use presenter::*;

mod paint;
mod presenter;
