use super::entities::{Entity, EntityId};

/// Ordered set of entities with an optional live-count cap
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    cap: Option<usize>,
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new(), cap: None }
    }

    /// A collection that refuses appends once `cap` entities are live
    pub fn capped(cap: usize) -> Self {
        Self { items: Vec::with_capacity(cap), cap: Some(cap) }
    }

    pub fn get(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.items.iter().map(Entity::id).collect()
    }

    /// Merge `patch` into the entity with `id`. Absent ids are ignored.
    ///
    /// Returns whether an entity was touched.
    pub fn update(&mut self, id: EntityId, patch: T::Patch) -> bool {
        match self.items.iter_mut().find(|e| e.id() == id) {
            Some(entity) => {
                entity.apply(patch);
                true
            }
            None => {
                log::trace!("update ignored, id {id} not present");
                false
            }
        }
    }

    /// Push a new entity unless the cap is reached. Returns whether it was added.
    pub fn append(&mut self, entity: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(entity);
        true
    }

    /// Drop every entity matching `predicate`, returning how many went
    pub fn remove<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|e| !predicate(e));
        before - self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cap.is_some_and(|cap| self.items.len() >= cap)
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
