//! Domain models for points of interest along a trail.

use entity::point_of_interest::PoiKind;

/// A marked point along a trail.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    /// Unique identifier for the point.
    pub id: i32,
    /// ID of the trail the point lies on.
    pub trail_id: i32,
    /// Point name, unique within its trail.
    pub name: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// What the point marks.
    pub kind: Option<PoiKind>,
    /// Position of the point along the trail, 1-based.
    pub trail_order: Option<i32>,
}

impl PointOfInterest {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::point_of_interest::Model) -> Self {
        Self {
            id: entity.id,
            trail_id: entity.trail_id,
            name: entity.name,
            description: entity.description,
            kind: entity.kind,
            trail_order: entity.trail_order,
        }
    }
}

/// Parameters for creating a new point of interest.
#[derive(Debug, Clone)]
pub struct CreatePointOfInterestParams {
    pub trail_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<PoiKind>,
    /// Position along the trail. `None` appends after the current last point.
    pub trail_order: Option<i32>,
}

/// Parameters for updating an existing point of interest.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdatePointOfInterestParams {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub kind: Option<Option<PoiKind>>,
    pub trail_order: Option<Option<i32>>,
}
