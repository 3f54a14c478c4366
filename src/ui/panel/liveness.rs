//! Mount status and load generations.
//!
//! A load result may only be applied while the panel is live and the load
//! is still the newest one started. Both checks happen under the same lock
//! as the state write, so an unmount cannot slip in between them.

/// Where the panel is in its host lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountStatus {
    /// Constructed, not yet attached by the host. Fully usable.
    #[default]
    Detached,
    Mounted,
    /// Removed by the host. Late async results are dropped.
    Unmounted,
}

#[derive(Debug, Default)]
pub struct Liveness {
    status: MountStatus,
    generation: u64,
}

impl Liveness {
    pub fn status(&self) -> MountStatus {
        self.status
    }

    pub fn is_live(&self) -> bool {
        self.status != MountStatus::Unmounted
    }

    /// Attach to the host. Loads started before this can no longer write
    /// state.
    pub fn mount(&mut self) {
        self.status = MountStatus::Mounted;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Mark the panel gone and invalidate every outstanding load.
    pub fn unmount(&mut self) {
        self.status = MountStatus::Unmounted;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Start a new load; any older load becomes stale.
    pub fn begin_load(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Whether a load started as `generation` may still write state.
    pub fn accepts(&self, generation: u64) -> bool {
        self.is_live() && self.generation == generation
    }
}
