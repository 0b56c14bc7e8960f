use cgmath::Point3;

/// An outline drawn on the ground plane, in drawing order.
///
/// A closed shape repeats its first point at the end. Only the x and z
/// coordinates take part in extrusion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape(Vec<Point3<f32>>);

impl Shape {
    pub fn new(points: Vec<Point3<f32>>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point3<f32>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The ground-plane outline with consecutive duplicates and the closing
    /// point removed, as `[x, z]` pairs.
    pub fn outline(&self) -> Vec<[f32; 2]> {
        let mut outline: Vec<[f32; 2]> = Vec::with_capacity(self.0.len());
        for point in &self.0 {
            let xz = [point.x, point.z];
            if outline.last() != Some(&xz) {
                outline.push(xz);
            }
        }
        while outline.len() > 1 && outline.first() == outline.last() {
            outline.pop();
        }
        outline
    }
}

impl From<Vec<Point3<f32>>> for Shape {
    fn from(points: Vec<Point3<f32>>) -> Self {
        Self(points)
    }
}
