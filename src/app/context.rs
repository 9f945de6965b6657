use crate::ports::{Clock, ContainerRegistry, ContainerService, ObjectStorage};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ContainerRegistry, S: ContainerService, O: ObjectStorage, C: Clock> {
    registry: R,
    containers: S,
    storage: O,
    clock: C,
}

impl<R, S, O, C> AppContext<R, S, O, C>
where
    R: ContainerRegistry,
    S: ContainerService,
    O: ObjectStorage,
    C: Clock,
{
    /// Create a new application context.
    pub fn new(registry: R, containers: S, storage: O, clock: C) -> Self {
        Self { registry, containers, storage, clock }
    }

    /// Get a reference to the container registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Get a reference to the container service.
    pub fn containers(&self) -> &S {
        &self.containers
    }

    /// Get a reference to the object storage.
    pub fn storage(&self) -> &O {
        &self.storage
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
