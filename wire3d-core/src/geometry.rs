//! Wireframe meshes and the built-in shape generators
use std::fmt;
use std::str::FromStr;

use crate::error::{RenderError, Result};
use crate::math::{add, Vec3};

/// A pair of vertex indices joined by a line
pub type Edge = [usize; 2];

/// A wireframe mesh: vertices, index-pair edges and an identity tag
///
/// The tag selects the mesh's color when frames are composed. Every edge
/// index is guaranteed to be within `0..vertices.len()`. `position` is added
/// to each vertex when projecting, so transforms spin the mesh in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    edges: Vec<Edge>,
    tag: usize,
    position: Vec3,
}

impl Mesh {
    /// Build a mesh, rejecting edges that point outside the vertex list
    pub fn new(vertices: Vec<Vec3>, edges: Vec<Edge>) -> Result<Self> {
        let vertex_count = vertices.len();
        if let Some(&[a, b]) = edges
            .iter()
            .find(|[a, b]| *a >= vertex_count || *b >= vertex_count)
        {
            return Err(RenderError::InvalidEdge { a, b, vertex_count });
        }

        Ok(Self {
            vertices,
            edges,
            tag: 0,
            position: Vec3::zeros(),
        })
    }

    pub fn with_tag(mut self, tag: usize) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Vertices offset by the mesh position
    pub fn placed_vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(move |&v| add(v, self.position))
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn tag(&self) -> usize {
        self.tag
    }

    /// Replace every vertex with `f(vertex)`, keeping edges and tag
    pub(crate) fn map_vertices(mut self, f: impl Fn(Vec3) -> Vec3) -> Self {
        for vertex in &mut self.vertices {
            *vertex = f(*vertex);
        }
        self
    }

    /// Largest absolute coordinate over all vertices (NaN if any is NaN)
    pub fn bounds_magnitude(&self) -> f32 {
        self.vertices
            .iter()
            .flat_map(|v| v.iter())
            .fold(0.0_f32, |acc, c| {
                if c.is_nan() || acc.is_nan() {
                    f32::NAN
                } else {
                    acc.max(c.abs())
                }
            })
    }

    /// Unit cube centered at the origin: 8 corners at ±1, 12 edges
    pub fn cube() -> Self {
        let vertices = vec![
            Vec3::new(-1.0, -1.0, -1.0), // 0
            Vec3::new(1.0, -1.0, -1.0),  // 1
            Vec3::new(-1.0, 1.0, -1.0),  // 2
            Vec3::new(1.0, 1.0, -1.0),   // 3
            Vec3::new(-1.0, -1.0, 1.0),  // 4
            Vec3::new(1.0, -1.0, 1.0),   // 5
            Vec3::new(-1.0, 1.0, 1.0),   // 6
            Vec3::new(1.0, 1.0, 1.0),    // 7
        ];

        // Corners differing in exactly one coordinate sign
        let edges = vec![
            [0, 1],
            [0, 2],
            [0, 4],
            [1, 3],
            [1, 5],
            [2, 3],
            [2, 6],
            [3, 7],
            [4, 5],
            [4, 6],
            [5, 7],
            [6, 7],
        ];

        Self {
            vertices,
            edges,
            tag: 0,
            position: Vec3::zeros(),
        }
    }

    /// Regular tetrahedron inscribed in the unit cube: 4 vertices, 6 edges
    pub fn tetrahedron() -> Self {
        let vertices = vec![
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
        ];

        let edges = vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

        Self {
            vertices,
            edges,
            tag: 0,
            position: Vec3::zeros(),
        }
    }
}

/// The closed set of procedurally generated shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Cube,
    Tetrahedron,
}

impl Shape {
    pub fn generate(self) -> Mesh {
        match self {
            Shape::Cube => Mesh::cube(),
            Shape::Tetrahedron => Mesh::tetrahedron(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Cube => f.write_str("cube"),
            Shape::Tetrahedron => f.write_str("tetrahedron"),
        }
    }
}

impl FromStr for Shape {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cube" => Ok(Shape::Cube),
            "tetrahedron" | "tetra" => Ok(Shape::Tetrahedron),
            other => Err(RenderError::InvalidArgument(format!(
                "unknown shape '{}' (expected cube or tetrahedron)",
                other
            ))),
        }
    }
}
