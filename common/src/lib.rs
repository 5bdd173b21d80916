#![deny(missing_docs)]

//! Types shared between the chain index and the components that read from it

mod block;
mod traits;

pub use block::BlockMeta;
pub use traits::ChainIndexView;
