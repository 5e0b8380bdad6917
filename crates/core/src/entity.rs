//! Entity trait: identity + continuity across state changes.

use std::collections::HashSet;

use crate::error::{DomainError, DomainResult};
use crate::id::SequentialId;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Allocate the id for a new entity: highest existing id + 1, or the first id
/// when the collection is empty.
///
/// Ids of removed entities are reused only if they were the highest.
pub fn next_id<'a, E, I>(entities: I) -> DomainResult<E::Id>
where
    E: Entity + 'a,
    E::Id: SequentialId,
    I: IntoIterator<Item = &'a E>,
{
    match entities.into_iter().map(|e| *e.id()).max() {
        None => Ok(<E::Id as SequentialId>::first()),
        Some(highest) => <E::Id as SequentialId>::next(highest)
            .ok_or_else(|| DomainError::invalid_input(format!("no id left after {highest:?}"))),
    }
}

/// Reject a collection in which two entities share an id.
pub fn ensure_unique_ids<'a, E, I>(entities: I) -> DomainResult<()>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen = HashSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(DomainError::invalid_input(format!(
                "duplicate id {:?}",
                entity.id()
            )));
        }
    }
    Ok(())
}
