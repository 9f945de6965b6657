mod clock;
mod container_registry;
mod container_service;
mod object_storage;

pub use clock::{Clock, SystemClock};
pub use container_registry::ContainerRegistry;
pub use container_service::ContainerService;
pub use object_storage::ObjectStorage;
