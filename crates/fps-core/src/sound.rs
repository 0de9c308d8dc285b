//! Bookkeeping for positional one-shot sounds.
//!
//! The registry does not play anything. Front-ends create the real audio
//! nodes for each id it hands out and report back when playback ends.

use glam::Vec3;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SoundId(pub u32);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SoundError {
    #[error("no live sound instance with id {0:?}")]
    UnknownInstance(SoundId),
}

#[derive(Clone, Debug)]
pub struct SoundInstance {
    pub id: SoundId,
    pub position: Vec3,
}

#[derive(Default, Debug)]
pub struct SoundRegistry {
    next_id: u32,
    live: Vec<SoundInstance>,
}

impl SoundRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new playing instance at `position`.
    pub fn spawn(&mut self, position: Vec3) -> SoundId {
        let id = SoundId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(SoundInstance { id, position });
        log::debug!("[sound] spawn {:?} at ({:.2},{:.2},{:.2})", id, position.x, position.y, position.z);
        id
    }

    /// Move a live instance, e.g. when its emitter moved this frame.
    pub fn set_position(&mut self, id: SoundId, position: Vec3) -> Result<(), SoundError> {
        let inst = self
            .live
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(SoundError::UnknownInstance(id))?;
        inst.position = position;
        Ok(())
    }

    /// Drop a finished instance.
    pub fn release(&mut self, id: SoundId) -> Result<SoundInstance, SoundError> {
        let idx = self
            .live
            .iter()
            .position(|s| s.id == id)
            .ok_or(SoundError::UnknownInstance(id))?;
        log::debug!("[sound] release {:?}", id);
        Ok(self.live.remove(idx))
    }

    #[inline]
    pub fn is_playing(&self, id: SoundId) -> bool {
        self.live.iter().any(|s| s.id == id)
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn instances(&self) -> &[SoundInstance] {
        &self.live
    }
}
