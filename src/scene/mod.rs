mod shape;

pub use shape::{ShapeData, ShapeId};

use crate::error::SceneError;
use slotmap::SlotMap;

/// Caller-owned collection of shapes.
///
/// Shapes are addressed by typed IDs (generational indices), so a removed
/// shape's ID never aliases a later insertion.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    shapes: SlotMap<ShapeId, ShapeData>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene holding copies of the given shapes, in order.
    pub fn from_shapes<'a, I>(shapes: I) -> Self
    where
        I: IntoIterator<Item = &'a ShapeData>,
    {
        let mut scene = Self::new();
        for shape in shapes {
            scene.add_shape(*shape);
        }
        scene
    }

    /// Inserts a shape and returns its ID.
    pub fn add_shape(&mut self, data: ShapeData) -> ShapeId {
        self.shapes.insert(data)
    }

    /// Returns a reference to the shape data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the scene.
    pub fn shape(&self, id: ShapeId) -> Result<&ShapeData, SceneError> {
        self.shapes.get(id).ok_or(SceneError::ShapeNotFound)
    }

    /// Returns a mutable reference to the shape data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the scene.
    pub fn shape_mut(&mut self, id: ShapeId) -> Result<&mut ShapeData, SceneError> {
        self.shapes.get_mut(id).ok_or(SceneError::ShapeNotFound)
    }

    /// Removes a shape, returning its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the scene.
    pub fn remove_shape(&mut self, id: ShapeId) -> Result<ShapeData, SceneError> {
        self.shapes.remove(id).ok_or(SceneError::ShapeNotFound)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over all shapes in insertion order (until removals free slots).
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &ShapeData)> {
        self.shapes.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Circle;
    use crate::math::Vector2;

    fn ball(x: f64) -> ShapeData {
        ShapeData::new(Circle::new(Vector2::new(x, 0.0), 1.0).unwrap())
            .with_velocity(Vector2::new(1.0, 0.0))
            .with_rotational_speed(0.5)
    }

    #[test]
    fn add_and_get() {
        let mut scene = Scene::new();
        let id = scene.add_shape(ball(2.0));
        assert_eq!(scene.len(), 1);
        let shape = scene.shape(id).unwrap();
        assert_eq!(shape.circle.center().x, 2.0);
        assert!(shape.is_anticlockwise());
    }

    #[test]
    fn shape_mut_updates_in_place() {
        let mut scene = Scene::new();
        let id = scene.add_shape(ball(0.0));
        scene.shape_mut(id).unwrap().rotational_speed = -1.0;
        assert!(!scene.shape(id).unwrap().is_anticlockwise());
    }

    #[test]
    fn removed_id_is_stale() {
        let mut scene = Scene::new();
        let id = scene.add_shape(ball(0.0));
        scene.remove_shape(id).unwrap();
        assert!(scene.is_empty());
        assert_eq!(scene.shape(id).unwrap_err(), SceneError::ShapeNotFound);
        assert_eq!(scene.remove_shape(id).unwrap_err(), SceneError::ShapeNotFound);

        let other = scene.add_shape(ball(1.0));
        assert!(scene.shape(id).is_err());
        assert!(scene.shape(other).is_ok());
    }

    #[test]
    fn from_shapes_copies_input() {
        let mut shapes = vec![ball(0.0), ball(5.0)];
        let scene = Scene::from_shapes(&shapes);
        shapes[0].rotational_speed = 9.0;

        assert_eq!(scene.len(), 2);
        let xs: Vec<f64> = scene.iter().map(|(_, s)| s.circle.center().x).collect();
        assert_eq!(xs, vec![0.0, 5.0]);
        assert!(scene.iter().all(|(_, s)| (s.rotational_speed - 0.5).abs() < 1e-12));
    }
}
