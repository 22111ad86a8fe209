//! Ordered rectangle batches, one draw call each.
//!
//! A [`RectList`] records rectangles in paint order. Consecutive rectangles
//! of the same variant (and, for atlas rectangles, the same atlas) share a
//! batch; anything else opens a new one so submission order is preserved.

use crate::atlas::AtlasId;
use crate::instance::{AtlasInstance, SolidInstance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    Solid,
    Atlas(AtlasId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RectBatch {
    Solid(Vec<SolidInstance>),
    Atlas {
        atlas: AtlasId,
        instances: Vec<AtlasInstance>,
    },
}

impl RectBatch {
    pub fn kind(&self) -> BatchKind {
        match self {
            RectBatch::Solid(_) => BatchKind::Solid,
            RectBatch::Atlas { atlas, .. } => BatchKind::Atlas(*atlas),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RectBatch::Solid(instances) => instances.len(),
            RectBatch::Atlas { instances, .. } => instances.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectList {
    batches: Vec<RectBatch>,
}

impl RectList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_solid(&mut self, instance: SolidInstance) {
        match self.batches.last_mut() {
            Some(RectBatch::Solid(instances)) => instances.push(instance),
            _ => self.batches.push(RectBatch::Solid(vec![instance])),
        }
    }

    pub fn extend_solid<I>(&mut self, instances: I)
    where
        I: IntoIterator<Item = SolidInstance>,
    {
        for instance in instances {
            self.push_solid(instance);
        }
    }

    pub fn push_atlas(&mut self, atlas: AtlasId, instance: AtlasInstance) {
        match self.batches.last_mut() {
            Some(RectBatch::Atlas {
                atlas: current,
                instances,
            }) if *current == atlas => instances.push(instance),
            _ => self.batches.push(RectBatch::Atlas {
                atlas,
                instances: vec![instance],
            }),
        }
    }

    pub fn batches(&self) -> &[RectBatch] {
        &self.batches
    }

    /// Total rectangles across all batches.
    pub fn instance_count(&self) -> usize {
        self.batches.iter().map(RectBatch::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn clear(&mut self) {
        self.batches.clear();
    }
}
