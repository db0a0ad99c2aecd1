mod category;
mod common;
mod layout;
mod legend;
mod template;
mod tier;

pub use category::*;
pub use common::*;
pub use layout::*;
pub use legend::*;
pub use template::*;
pub use tier::*;
