//! Basis rotation analyzer.
//!
//! From the multiplication operator this module derives the signed
//! permutation structure of an algebra's basis: the group table over the
//! `2d` signed basis elements, the per-generator rotation layers, the loops
//! (orbits) of the primary generator, and the labeled, positioned vertex
//! and edge lists an external renderer consumes.
//!
//! Analysis is bounded at doubling level 5 (32 dimensions) and is
//! deterministic for a given algebra and options; nothing is persisted
//! between calls.

mod group; // Signed basis members and the group table
mod layers; // Layer selection, edge matrices, connectivity
mod layout; // Fixed position and color tables
mod loops; // Orbit decomposition of the primary generator

pub use group::{group_table, signed_index, signed_members};
pub use layers::edge_matrix;

use crate::basis::{BasisFormat, basis_label};
use crate::core::{AlgebraError, CayleyDickson};

/// Options for [`analyze`].
///
/// Defaults: no explicit layers (accumulate until connected), both signs,
/// symbolic labels.
///
/// ```
/// use hypercomplex::{BasisFormat, RotationOptions};
/// let options = RotationOptions::new()
///     .layer("i")
///     .layer("e2")
///     .format(BasisFormat::new().translate(true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RotationOptions {
    pub(crate) layers: Vec<String>,
    pub(crate) positives: bool,
    pub(crate) negatives: bool,
    pub(crate) show_all: bool,
    pub(crate) format: BasisFormat,
}

impl RotationOptions {
    /// Default options.
    pub fn new() -> Self {
        RotationOptions {
            layers: Vec::new(),
            positives: false,
            negatives: false,
            show_all: false,
            format: BasisFormat::new(),
        }
    }

    /// Add an explicit layer selector: a signed index (`"3"`), a translated
    /// letter (`"j"`) or the symbolic form (`"e2"`), each optionally
    /// prefixed with `-` for the negative generator.
    ///
    /// Explicit selectors disable the connectivity early-stop.
    #[must_use]
    pub fn layer(mut self, selector: impl Into<String>) -> Self {
        self.layers.push(selector.into());
        self
    }

    /// Restrict default generator accumulation to the positive range.
    #[must_use]
    pub fn positives(mut self, positives: bool) -> Self {
        self.positives = positives;
        self
    }

    /// Restrict default generator accumulation to the negative range.
    #[must_use]
    pub fn negatives(mut self, negatives: bool) -> Self {
        self.negatives = negatives;
        self
    }

    /// Accumulate every candidate generator instead of stopping at the
    /// first connected union.
    #[must_use]
    pub fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// Label formatting options.
    #[must_use]
    pub fn format(mut self, format: BasisFormat) -> Self {
        self.format = format;
        self
    }
}

/// A labeled, positioned vertex of the rotation diagram, one per signed
/// basis element.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationVertex {
    /// Signed basis index in `0..2d`.
    pub index: usize,
    /// Label from the term formatter (`"i"`, `"-e3"`, ...).
    pub label: String,
    /// Exported 2-D position from the fixed layout table.
    pub position: [f64; 2],
}

/// A directed edge `from -> from * e_generator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationEdge {
    /// Source signed basis index.
    pub from: usize,
    /// Target signed basis index.
    pub to: usize,
    /// The signed generator index whose layer this edge belongs to.
    pub generator: usize,
}

/// An accepted generator layer and its renderer color.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationLayer {
    /// The signed generator index.
    pub generator: usize,
    /// RGBA color from the fixed palette.
    pub color: [f64; 4],
}

/// Everything an external renderer needs to draw the rotation diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationDiagram {
    /// Doubling level of the analyzed algebra.
    pub level: u32,
    /// Dimension `d` of the analyzed algebra; the diagram has `2d`
    /// vertices.
    pub dimensions: usize,
    /// One vertex per signed basis element.
    pub vertices: Vec<RotationVertex>,
    /// Directed edges of every accepted layer.
    pub edges: Vec<RotationEdge>,
    /// Accepted layers in acceptance order, with colors.
    pub layers: Vec<RotationLayer>,
    /// Orbits of the primary (first accepted) generator, each starting at
    /// its smallest index.
    pub loops: Vec<Vec<usize>>,
}

/// Analyze the signed basis rotations of the algebra `A`.
///
/// Builds the group table, selects layers per `options`, decomposes the
/// primary layer into loops and attaches layout data.
///
/// # Errors
/// - [`AlgebraError::UnsupportedLevel`] for level 0 (no generators) and for
///   levels above [`MAX_ROTATION_LEVEL`](crate::MAX_ROTATION_LEVEL).
/// - [`AlgebraError::InvalidLayer`] when an explicit selector is
///   unparseable or no usable generator remains.
///
/// # Example
/// ```
/// use hypercomplex::{Quaternion, RotationOptions, analyze};
/// let diagram = analyze::<Quaternion>(&RotationOptions::new()).unwrap();
/// assert_eq!(diagram.vertices.len(), 8);
/// assert_eq!(diagram.loops[0], vec![0, 1, 4, 5]); // 1 -> i -> -1 -> -i
/// ```
pub fn analyze<A: CayleyDickson>(options: &RotationOptions) -> Result<RotationDiagram, AlgebraError> {
    if A::LEVEL == 0 || A::LEVEL > crate::MAX_ROTATION_LEVEL {
        return Err(AlgebraError::unsupported_level(
            A::LEVEL,
            crate::MAX_ROTATION_LEVEL,
        ));
    }

    let dimensions = A::DIMENSIONS;
    let size = 2 * dimensions;
    let group = group_table::<A>();
    let accepted = layers::accepted_generators(&group, dimensions, options)?;
    let loops = loops::primary_loops(&group, accepted[0]);

    let vertices = (0..size)
        .map(|index| RotationVertex {
            index,
            label: basis_label(dimensions, index, &options.format),
            position: layout::vertex_position(A::LEVEL, index),
        })
        .collect();

    let mut edges = Vec::with_capacity(accepted.len() * size);
    for &generator in &accepted {
        for (from, row) in group.iter().enumerate() {
            edges.push(RotationEdge {
                from,
                to: row[generator],
                generator,
            });
        }
    }

    let layers = accepted
        .iter()
        .map(|&generator| RotationLayer {
            generator,
            color: layout::generator_color(A::LEVEL, generator),
        })
        .collect();

    Ok(RotationDiagram {
        level: A::LEVEL,
        dimensions,
        vertices,
        edges,
        layers,
        loops,
    })
}
