pub mod error;
pub mod index;
pub mod io;
pub mod keep_list;
pub mod subset;

pub use error::{PruneError, Result};
pub use index::VcfIndex;
pub use keep_list::KeepList;
pub use subset::{MissingPolicy, SubsetOptions, SubsetSummary};
