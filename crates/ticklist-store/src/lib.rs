/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task store crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod error;
pub mod store;
pub mod task;

// Re-export commonly used types
pub use error::{Result, StoreError};
pub use store::TaskStore;
pub use task::{ColorTag, NewTask, PALETTE, Task};
