// Service exports
pub mod directory;
pub mod suppression;

pub use directory::{DirectoryClient, DirectoryError};
pub use suppression::{
    MemorySuppressionStore, PostgresSuppressionStore, SuppressionError, SuppressionGate,
    SuppressionRecord, SuppressionStore,
};
