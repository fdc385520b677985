//! Layer selection: generator parsing, edge matrices and connectivity.
//!
//! A layer is the edge set of right-multiplication by one signed basis
//! element. Generators are selected either explicitly (by index, translated
//! letter or symbolic `e<k>` name, each optionally signed) or by
//! accumulating generators in index order until the union graph connects.

use crate::basis::BasisFormat;
use crate::core::error::AlgebraError;
use crate::rotation::RotationOptions;

/// The `N x N` permutation matrix of right-multiplication by the
/// `generator`-th signed basis element: entry `(i, j)` is `1` iff
/// `group[i][generator] == j`.
pub fn edge_matrix(group: &[Vec<usize>], generator: usize) -> Vec<Vec<u8>> {
    let size = group.len();
    let mut edges = vec![vec![0_u8; size]; size];
    for (i, row) in group.iter().enumerate() {
        edges[i][row[generator]] = 1;
    }
    edges
}

/// Parse one layer selector into a signed generator index in `0..2d`.
///
/// Accepted forms: a decimal signed index (`"3"`), a translated letter
/// (`"j"`), or the symbolic element form (`"e2"`). A leading `-` selects
/// the negative generator, a leading `+` the positive one.
pub(crate) fn parse_layer(
    selector: &str,
    format: &BasisFormat,
    dimensions: usize,
) -> Result<usize, AlgebraError> {
    let trimmed = selector.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let index = if body.chars().all(|c| c.is_ascii_digit()) && !body.is_empty() {
        body.parse::<usize>()
            .map_err(|_| AlgebraError::invalid_layer(selector))?
    } else if let Some(digits) = body.strip_prefix(format.element) {
        digits
            .parse::<usize>()
            .map_err(|_| AlgebraError::invalid_layer(selector))?
    } else if body.chars().count() == 1 {
        let letter = body.chars().next().ok_or_else(|| AlgebraError::invalid_layer(selector))?;
        format
            .indices
            .iter()
            .position(|&c| c == letter)
            .ok_or_else(|| AlgebraError::invalid_layer(selector))?
    } else {
        return Err(AlgebraError::invalid_layer(selector));
    };

    if index >= 2 * dimensions {
        return Err(AlgebraError::invalid_layer(selector));
    }
    if negative {
        Ok(index % dimensions + dimensions)
    } else {
        Ok(index)
    }
}

fn connected(adjacency: &[Vec<usize>]) -> bool {
    let size = adjacency.len();
    let mut seen = vec![false; size];
    let mut stack = vec![0_usize];
    seen[0] = true;
    let mut count = 1;
    while let Some(vertex) = stack.pop() {
        for &next in &adjacency[vertex] {
            if !seen[next] {
                seen[next] = true;
                count += 1;
                stack.push(next);
            }
        }
    }
    count == size
}

/// Select the generators whose layers the diagram shows, in acceptance
/// order.
///
/// Explicit layer selectors are used verbatim (implying `show_all`);
/// otherwise generators accumulate in index order (restricted to the
/// positive or negative range when requested) until the union graph is
/// connected. The degenerate generators `0` and `d` are always skipped.
pub(crate) fn accepted_generators(
    group: &[Vec<usize>],
    dimensions: usize,
    options: &RotationOptions,
) -> Result<Vec<usize>, AlgebraError> {
    let size = 2 * dimensions;

    let (candidates, show_all) = if options.layers.is_empty() {
        let range: Vec<usize> = if options.negatives && !options.positives {
            (dimensions + 1..size).collect()
        } else if options.positives && !options.negatives {
            (1..dimensions).collect()
        } else {
            (1..size).collect()
        };
        (range, options.show_all)
    } else {
        let mut parsed = Vec::with_capacity(options.layers.len());
        for selector in &options.layers {
            parsed.push(parse_layer(selector, &options.format, dimensions)?);
        }
        (parsed, true)
    };

    let mut accepted = Vec::new();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); size];
    for generator in candidates {
        if generator == 0 || generator == dimensions {
            continue;
        }
        accepted.push(generator);
        for (i, row) in group.iter().enumerate() {
            let j = row[generator];
            adjacency[i].push(j);
            adjacency[j].push(i);
        }
        if !show_all && connected(&adjacency) {
            break;
        }
    }

    if accepted.is_empty() {
        return Err(AlgebraError::invalid_layer(options.layers.join(",")));
    }
    Ok(accepted)
}
