//! Vertex data attached to scene objects.

use std::sync::Arc;

/// A flat `f32` attribute buffer with a fixed component count per item.
#[derive(Debug, Clone)]
pub struct BufferAttribute {
    data: Arc<[f32]>,
    item_size: usize,
}

impl BufferAttribute {
    /// Wrap `data`; its length must be a multiple of `item_size`.
    pub fn new(data: impl Into<Arc<[f32]>>, item_size: usize) -> Option<Self> {
        let data = data.into();
        if item_size == 0 || data.len() % item_size != 0 {
            return None;
        }
        Some(Self { data, item_size })
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// True when both attributes view the same allocation.
    pub fn shares_storage(&self, other: &BufferAttribute) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Number of items (points, for a position attribute).
    pub fn count(&self) -> usize {
        self.data.len() / self.item_size
    }
}

/// Geometry holding a `position` attribute of 3 floats per vertex.
#[derive(Debug, Clone)]
pub struct BufferGeometry {
    position: BufferAttribute,
}

impl BufferGeometry {
    pub fn from_positions(position: BufferAttribute) -> Option<Self> {
        (position.item_size() == 3).then_some(Self { position })
    }

    pub fn position(&self) -> &BufferAttribute {
        &self.position
    }

    pub fn vertex_count(&self) -> usize {
        self.position.count()
    }
}
