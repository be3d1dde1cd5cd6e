//! Database Models

// Serde helpers
pub mod serde_helpers;

// Entities
pub mod order;
pub mod organisation;
pub mod product;
pub mod snapshot;

// Re-exports
pub use order::{Order, OrderCreate, OrderType, OrderUpdate};
pub use organisation::{Organisation, OrganisationCreate, OrganisationType, OrganisationUpdate};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use snapshot::ProductSnapshot;
