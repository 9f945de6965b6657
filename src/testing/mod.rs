mod fake_container_service;
mod fake_object_storage;
mod fake_registry;
mod fixed_clock;

pub use fake_container_service::FakeContainerService;
pub use fake_object_storage::FakeObjectStorage;
pub use fake_registry::FakeRegistry;
pub use fixed_clock::FixedClock;
