//! Scene graph: the set of drawable objects submitted each frame.

mod geometry;
mod material;
mod uniform;

pub use geometry::*;
pub use material::*;
pub use uniform::*;

use std::fmt;

use crate::gpu::RendererError;

/// Identity of an object inside one [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object-{}", self.0)
    }
}

/// A point-sprite drawable: one sprite per geometry vertex.
#[derive(Debug, Clone)]
pub struct Points {
    pub geometry: BufferGeometry,
    pub material: ShaderMaterial,
}

impl Points {
    pub fn new(geometry: BufferGeometry, material: ShaderMaterial) -> Self {
        Self { geometry, material }
    }
}

/// Ordered collection of drawables.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<(ObjectId, Points)>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object and return its id. Draw order is insertion order.
    ///
    /// An object whose position buffer is already in the scene is rejected.
    pub fn add(&mut self, points: Points) -> Result<ObjectId, RendererError> {
        if let Some((existing, _)) = self.objects.iter().find(|(_, p)| {
            p.geometry
                .position()
                .shares_storage(points.geometry.position())
        }) {
            return Err(RendererError::DuplicateObject(existing.to_string()));
        }
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push((id, points));
        Ok(id)
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<Points> {
        let index = self.objects.iter().position(|(oid, _)| *oid == id)?;
        Some(self.objects.remove(index).1)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.iter().any(|(oid, _)| *oid == id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&Points> {
        self.objects
            .iter()
            .find(|(oid, _)| *oid == id)
            .map(|(_, points)| points)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Points)> {
        self.objects.iter().map(|(id, points)| (*id, points))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
