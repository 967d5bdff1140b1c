//! Process-wide record of containers that already have a slider.

use std::{collections::HashSet, sync::OnceLock};

use glide_ui::ElementId;
use parking_lot::Mutex;

static CLAIMED_CONTAINERS: OnceLock<Mutex<HashSet<ElementId>>> = OnceLock::new();

fn claimed() -> &'static Mutex<HashSet<ElementId>> {
    CLAIMED_CONTAINERS.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Exclusive ownership of a container, released on drop.
#[derive(Debug)]
pub(crate) struct ContainerClaim {
    id: ElementId,
    released: bool,
}

impl ContainerClaim {
    /// Claims `id`, or returns `None` if another slider owns it.
    pub(crate) fn acquire(id: ElementId) -> Option<Self> {
        let inserted = claimed().lock().insert(id);
        inserted.then(|| Self {
            id,
            released: false,
        })
    }

    pub(crate) fn release(&mut self) {
        if !self.released {
            claimed().lock().remove(&self.id);
            self.released = true;
        }
    }
}

impl Drop for ContainerClaim {
    fn drop(&mut self) {
        self.release();
    }
}
