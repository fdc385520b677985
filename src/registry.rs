//! Algebra registry: level/name lookup and level dispatch.
//!
//! A fixed process-wide mapping from doubling level (0..=8) and canonical
//! name (`Real`, `Complex`, ... `Voudon`, plus the one-letter bindings) to
//! a descriptor of the corresponding type, built once. Front-ends use it to
//! translate a user-supplied order or name into a target algebra, and the
//! level-dispatch helpers to reach the monomorphized operations without
//! touching generics.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::basis::BasisFormat;
use crate::core::error::AlgebraError;
use crate::rotation::{RotationDiagram, RotationOptions};
use crate::{
    Chingon, Complex, Octonion, Pathion, Quaternion, Real, Routon, Sedenion, Voudon,
    multiplication_table_indexes, multiplication_table_strings,
};

/// Highest registered doubling level (256 dimensions).
pub const MAX_LEVEL: u32 = 8;

/// A registered algebra: its canonical name, one-letter bindings, doubling
/// level and dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgebraDescriptor {
    /// Canonical name, e.g. `"Quaternion"`.
    pub name: &'static str,
    /// One-letter bindings, e.g. `H` and `Q` for the quaternions.
    pub symbols: &'static [&'static str],
    /// Doubling level.
    pub level: u32,
    /// Dimension, `2^level`.
    pub dimensions: usize,
}

static DESCRIPTORS: [AlgebraDescriptor; 9] = [
    AlgebraDescriptor {
        name: "Real",
        symbols: &["R"],
        level: 0,
        dimensions: 1,
    },
    AlgebraDescriptor {
        name: "Complex",
        symbols: &["C"],
        level: 1,
        dimensions: 2,
    },
    AlgebraDescriptor {
        name: "Quaternion",
        symbols: &["H", "Q"],
        level: 2,
        dimensions: 4,
    },
    AlgebraDescriptor {
        name: "Octonion",
        symbols: &["O"],
        level: 3,
        dimensions: 8,
    },
    AlgebraDescriptor {
        name: "Sedenion",
        symbols: &["S"],
        level: 4,
        dimensions: 16,
    },
    AlgebraDescriptor {
        name: "Pathion",
        symbols: &["P"],
        level: 5,
        dimensions: 32,
    },
    AlgebraDescriptor {
        name: "Chingon",
        symbols: &["X"],
        level: 6,
        dimensions: 64,
    },
    AlgebraDescriptor {
        name: "Routon",
        symbols: &["U"],
        level: 7,
        dimensions: 128,
    },
    AlgebraDescriptor {
        name: "Voudon",
        symbols: &["V"],
        level: 8,
        dimensions: 256,
    },
];

// Name index: lowercased canonical names plus exact one-letter bindings.
static NAME_INDEX: LazyLock<FxHashMap<String, u32>> = LazyLock::new(|| {
    let mut index = FxHashMap::default();
    for descriptor in &DESCRIPTORS {
        index.insert(descriptor.name.to_lowercase(), descriptor.level);
        for symbol in descriptor.symbols {
            index.insert((*symbol).to_owned(), descriptor.level);
        }
    }
    index
});

/// All registered algebras in level order.
pub fn descriptors() -> &'static [AlgebraDescriptor] {
    &DESCRIPTORS
}

/// Look up an algebra by doubling level.
///
/// # Errors
/// [`AlgebraError::UnsupportedLevel`] above [`MAX_LEVEL`].
pub fn by_level(level: u32) -> Result<&'static AlgebraDescriptor, AlgebraError> {
    DESCRIPTORS
        .get(level as usize)
        .ok_or_else(|| AlgebraError::unsupported_level(level, MAX_LEVEL))
}

/// Look up an algebra by canonical name (case-insensitive) or one-letter
/// binding (exact).
///
/// # Errors
/// [`AlgebraError::UnknownAlgebra`] when nothing matches.
pub fn by_name(name: &str) -> Result<&'static AlgebraDescriptor, AlgebraError> {
    let level = NAME_INDEX
        .get(name)
        .or_else(|| NAME_INDEX.get(&name.to_lowercase()))
        .copied()
        .ok_or_else(|| AlgebraError::unknown_algebra(name))?;
    by_level(level)
}

/// Level-dispatched signed-index multiplication table.
pub(crate) fn table_for_level(level: u32) -> Result<Vec<Vec<isize>>, AlgebraError> {
    match level {
        0 => Ok(multiplication_table_indexes::<Real<f64>>()),
        1 => Ok(multiplication_table_indexes::<Complex>()),
        2 => Ok(multiplication_table_indexes::<Quaternion>()),
        3 => Ok(multiplication_table_indexes::<Octonion>()),
        4 => Ok(multiplication_table_indexes::<Sedenion>()),
        5 => Ok(multiplication_table_indexes::<Pathion>()),
        6 => Ok(multiplication_table_indexes::<Chingon>()),
        7 => Ok(multiplication_table_indexes::<Routon>()),
        8 => Ok(multiplication_table_indexes::<Voudon>()),
        _ => Err(AlgebraError::unsupported_level(level, MAX_LEVEL)),
    }
}

/// Level-dispatched multiplication table through the term formatter.
pub(crate) fn table_strings_for_level(
    level: u32,
    format: &BasisFormat,
) -> Result<Vec<Vec<String>>, AlgebraError> {
    match level {
        0 => Ok(multiplication_table_strings::<Real<f64>>(format)),
        1 => Ok(multiplication_table_strings::<Complex>(format)),
        2 => Ok(multiplication_table_strings::<Quaternion>(format)),
        3 => Ok(multiplication_table_strings::<Octonion>(format)),
        4 => Ok(multiplication_table_strings::<Sedenion>(format)),
        5 => Ok(multiplication_table_strings::<Pathion>(format)),
        6 => Ok(multiplication_table_strings::<Chingon>(format)),
        7 => Ok(multiplication_table_strings::<Routon>(format)),
        8 => Ok(multiplication_table_strings::<Voudon>(format)),
        _ => Err(AlgebraError::unsupported_level(level, MAX_LEVEL)),
    }
}

/// Level-dispatched rotation analysis.
///
/// The analyzer's own bound applies: levels 0 and 6..=8 resolve but refuse
/// with a not-supported error.
pub(crate) fn rotation_for_level(
    level: u32,
    options: &RotationOptions,
) -> Result<RotationDiagram, AlgebraError> {
    match level {
        0 => crate::rotation::analyze::<Real<f64>>(options),
        1 => crate::rotation::analyze::<Complex>(options),
        2 => crate::rotation::analyze::<Quaternion>(options),
        3 => crate::rotation::analyze::<Octonion>(options),
        4 => crate::rotation::analyze::<Sedenion>(options),
        5 => crate::rotation::analyze::<Pathion>(options),
        6 => crate::rotation::analyze::<Chingon>(options),
        7 => crate::rotation::analyze::<Routon>(options),
        8 => crate::rotation::analyze::<Voudon>(options),
        _ => Err(AlgebraError::unsupported_level(
            level,
            crate::MAX_ROTATION_LEVEL,
        )),
    }
}
