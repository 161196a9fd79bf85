//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete reservation hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as reservation owner)
/// 2. Park
/// 3. Trail (inside the park)
/// 4. Reservation (for the trail)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, park, trail, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::park::Model,
        entity::trail::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let park = crate::factory::park::create_park(db).await?;
    let trail = crate::factory::trail::create_trail(db, park.id).await?;
    let reservation = crate::factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .trail_id(Some(trail.id))
        .build()
        .await?;

    Ok((user, park, trail, reservation))
}

/// Creates a park and a trail inside it, without any booking.
///
/// Useful for availability tests that seed their own reservations.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((park, trail))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_park_with_trail(
    db: &DatabaseConnection,
) -> Result<(entity::park::Model, entity::trail::Model), DbErr> {
    let park = crate::factory::park::create_park(db).await?;
    let trail = crate::factory::trail::create_trail(db, park.id).await?;

    Ok((park, trail))
}
