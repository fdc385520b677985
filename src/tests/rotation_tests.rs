// Rotation analyzer: group tables, loops, layers and the exported layout.

use std::collections::BTreeSet;

use crate::{
    BasisFormat, Chingon, Complex, Octonion, Pathion, Quaternion, Real, RotationOptions, Sedenion,
    analyze, edge_matrix, group_table, rotation_diagram, signed_index, signed_members,
};

#[test]
fn test_quaternion_group_table() {
    // The eight signed basis elements form the quaternion group Q8
    let expected = vec![
        vec![0, 1, 2, 3, 4, 5, 6, 7],
        vec![1, 4, 3, 6, 5, 0, 7, 2],
        vec![2, 7, 4, 1, 6, 3, 0, 5],
        vec![3, 2, 5, 4, 7, 6, 1, 0],
        vec![4, 5, 6, 7, 0, 1, 2, 3],
        vec![5, 0, 7, 2, 1, 4, 3, 6],
        vec![6, 3, 0, 5, 2, 7, 4, 1],
        vec![7, 6, 1, 0, 3, 2, 5, 4],
    ];
    assert_eq!(group_table::<Quaternion>(), expected);
}

#[test]
fn test_quaternion_group_order_and_closure() {
    let group = group_table::<Quaternion>();
    assert_eq!(group.len(), 8);
    // Closed, and every row is a permutation of the signed basis
    for row in &group {
        let mut sorted = row.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..8).collect::<Vec<_>>());
    }
    // i * i = -1, i * j = k, j * i = -k
    assert_eq!(group[1][1], 4);
    assert_eq!(group[1][2], 3);
    assert_eq!(group[2][1], 7);
}

#[test]
fn test_signed_members_and_index_round_trip() {
    let members = signed_members::<Octonion>();
    assert_eq!(members.len(), 16);
    for (index, member) in members.iter().enumerate() {
        assert_eq!(signed_index(member), index);
    }
}

#[test]
fn test_edge_matrix_is_permutation_matrix() {
    let group = group_table::<Quaternion>();
    let edges = edge_matrix(&group, 1);
    for (i, row) in edges.iter().enumerate() {
        assert_eq!(row.iter().sum::<u8>(), 1);
        let target = row.iter().position(|&cell| cell == 1).expect("one entry set");
        assert_eq!(target, group[i][1]);
    }
    // Columns sum to one as well
    for column in 0..edges.len() {
        assert_eq!(edges.iter().map(|row| row[column]).sum::<u8>(), 1);
    }
}

#[test]
fn test_quaternion_primary_loops() {
    let diagram = analyze::<Quaternion>(&RotationOptions::new()).expect("level 2 is supported");
    // The identity orbit 1 -> i -> -1 -> -i, then j -> -k -> -j -> k
    assert_eq!(diagram.loops, vec![vec![0, 1, 4, 5], vec![2, 7, 6, 3]]);
    for cycle in &diagram.loops {
        assert_eq!(cycle.len(), 4);
        assert_eq!(*cycle.iter().min().expect("non-empty"), cycle[0]);
    }
}

#[test]
fn test_default_layer_accumulation() {
    // Generators accumulate in index order until the union connects
    let complex = analyze::<Complex>(&RotationOptions::new()).expect("level 1 is supported");
    assert_eq!(layer_generators(&complex), vec![1]);

    let quaternion = analyze::<Quaternion>(&RotationOptions::new()).expect("supported");
    assert_eq!(layer_generators(&quaternion), vec![1, 2]);

    let octonion = analyze::<Octonion>(&RotationOptions::new()).expect("supported");
    assert_eq!(layer_generators(&octonion), vec![1, 2, 3, 4]);

    let sedenion = analyze::<Sedenion>(&RotationOptions::new()).expect("supported");
    assert_eq!(layer_generators(&sedenion), (1..=8).collect::<Vec<_>>());

    let pathion = analyze::<Pathion>(&RotationOptions::new()).expect("supported");
    assert_eq!(layer_generators(&pathion), (1..=16).collect::<Vec<_>>());
}

fn layer_generators(diagram: &crate::RotationDiagram) -> Vec<usize> {
    diagram.layers.iter().map(|layer| layer.generator).collect()
}

#[test]
fn test_octonion_loops_per_generator() {
    let diagram = analyze::<Octonion>(&RotationOptions::new().layer("e2"))
        .expect("explicit layer is supported");
    assert_eq!(
        diagram.loops,
        vec![
            vec![0, 2, 8, 10],
            vec![1, 3, 9, 11],
            vec![4, 14, 12, 6],
            vec![5, 15, 13, 7],
        ]
    );
}

#[test]
fn test_octonion_quaternionic_triples() {
    // Across the seven imaginary generators, the loops avoiding the unit
    // project onto the seven quaternionic triples of the octonions.
    let mut triples = BTreeSet::new();
    for generator in 1..8_usize {
        let diagram = analyze::<Octonion>(&RotationOptions::new().layer(format!("e{}", generator)))
            .expect("explicit layer is supported");
        assert_eq!(diagram.loops.len(), 4);
        for cycle in &diagram.loops {
            assert_eq!(cycle.len(), 4);
            let unsigned: BTreeSet<usize> = cycle.iter().map(|&v| v % 8).collect();
            assert_eq!(unsigned.len(), 2);
            if unsigned.contains(&0) {
                continue;
            }
            let pair: Vec<usize> = unsigned.into_iter().collect();
            let mut triple = vec![generator, pair[0], pair[1]];
            assert_eq!(pair[0] ^ pair[1], generator);
            triple.sort_unstable();
            triples.insert(triple);
        }
    }
    let expected: BTreeSet<Vec<usize>> = [
        vec![1, 2, 3],
        vec![1, 4, 5],
        vec![1, 6, 7],
        vec![2, 4, 6],
        vec![2, 5, 7],
        vec![3, 4, 7],
        vec![3, 5, 6],
    ]
    .into_iter()
    .collect();
    assert_eq!(triples, expected);
}

#[test]
fn test_refuses_unsupported_levels() {
    let error = analyze::<Chingon>(&RotationOptions::new());
    assert_eq!(error, Err(crate::AlgebraError::unsupported_level(6, 5)));

    let error = analyze::<Real<f64>>(&RotationOptions::new());
    assert_eq!(error, Err(crate::AlgebraError::unsupported_level(0, 5)));

    assert!(rotation_diagram(6).is_err());
    assert!(rotation_diagram(9).is_err());
    assert!(rotation_diagram(2).is_ok());
}

#[test]
fn test_vertex_labels_and_positions() {
    let format = BasisFormat::new().translate(true);
    let diagram = analyze::<Quaternion>(&RotationOptions::new().format(format))
        .expect("level 2 is supported");
    let labels: Vec<&str> = diagram
        .vertices
        .iter()
        .map(|vertex| vertex.label.as_str())
        .collect();
    assert_eq!(labels, vec!["1", "i", "j", "k", "-1", "-i", "-j", "-k"]);

    // Negative vertices mirror through the origin
    assert_eq!(diagram.vertices[0].position, [1.0, 0.0]);
    assert_eq!(diagram.vertices[4].position, [-1.0, 0.0]);
    assert_eq!(diagram.vertices[2].position, [2.0, 2.0]);
    assert_eq!(diagram.vertices[6].position, [-2.0, -2.0]);
}

#[test]
fn test_edges_follow_the_group_table() {
    let diagram = analyze::<Quaternion>(&RotationOptions::new()).expect("supported");
    let group = group_table::<Quaternion>();
    assert_eq!(diagram.edges.len(), diagram.layers.len() * 8);
    for edge in &diagram.edges {
        assert_eq!(edge.to, group[edge.from][edge.generator]);
    }
}

#[test]
fn test_layer_colors() {
    let diagram = analyze::<Quaternion>(&RotationOptions::new()).expect("supported");
    // Generator 1 (i) is red
    assert_eq!(diagram.layers[0].color, [1.0, 0.0, 0.0, 1.0]);

    // The negative generator darkens by half
    let negative = analyze::<Quaternion>(&RotationOptions::new().layer("-e1"))
        .expect("explicit layer is supported");
    assert_eq!(negative.layers[0].generator, 5);
    assert_eq!(negative.layers[0].color, [0.5, 0.0, 0.0, 1.0]);
}

#[test]
fn test_layer_selectors() {
    // Letter selectors resolve through the translation table
    let by_letter =
        analyze::<Quaternion>(&RotationOptions::new().layer("j")).expect("letter selector");
    assert_eq!(by_letter.layers[0].generator, 2);

    // Index selectors are taken verbatim
    let by_index = analyze::<Quaternion>(&RotationOptions::new().layer("3")).expect("index");
    assert_eq!(by_index.layers[0].generator, 3);

    // Signed letters select the negative generator
    let negative = analyze::<Quaternion>(&RotationOptions::new().layer("-j")).expect("signed");
    assert_eq!(negative.layers[0].generator, 6);

    // Unknown selectors are type errors
    assert!(analyze::<Quaternion>(&RotationOptions::new().layer("z9")).is_err());

    // Degenerate selectors leave no usable layer
    assert!(analyze::<Quaternion>(&RotationOptions::new().layer("0")).is_err());
}

#[test]
fn test_positive_and_negative_ranges() {
    let positives = analyze::<Quaternion>(&RotationOptions::new().positives(true).show_all(true))
        .expect("supported");
    assert_eq!(layer_generators(&positives), vec![1, 2, 3]);

    let negatives = analyze::<Quaternion>(&RotationOptions::new().negatives(true).show_all(true))
        .expect("supported");
    assert_eq!(layer_generators(&negatives), vec![5, 6, 7]);
}
