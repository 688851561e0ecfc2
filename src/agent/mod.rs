pub mod definition;
pub mod interface;
pub mod provisioner;

pub use definition::*;
pub use interface::*;
pub use provisioner::*;
