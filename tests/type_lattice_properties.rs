use csv_query::data::type_inference::TypeInference;
use csv_query::{SemanticCellType, Table};

#[test]
fn test_join_is_commutative() {
    for a in SemanticCellType::ALL {
        for b in SemanticCellType::ALL {
            assert_eq!(a.join(b), b.join(a), "join({:?}, {:?})", a, b);
        }
    }
}

#[test]
fn test_join_is_associative() {
    for a in SemanticCellType::ALL {
        for b in SemanticCellType::ALL {
            for c in SemanticCellType::ALL {
                assert_eq!(
                    a.join(b).join(c),
                    a.join(b.join(c)),
                    "join over ({:?}, {:?}, {:?})",
                    a,
                    b,
                    c
                );
            }
        }
    }
}

#[test]
fn test_join_is_idempotent_with_undetermined_identity() {
    for t in SemanticCellType::ALL {
        assert_eq!(t.join(t), t);
        assert_eq!(SemanticCellType::Undetermined.join(t), t);
    }
}

/// Every rotation and the reverse of the data rows must infer the same types
#[test]
fn test_column_type_is_order_independent() {
    let header = "id,flag,where,note";
    let rows = vec![
        r#"1,yes,"10.5,20.25",hello"#,
        r#"2,,"-3.0,4.0","#,
        r#"3,no,,7"#,
        r#",true,"(0.0, 0.0)",a|b"#,
    ];

    let expected = Table::from_lines(std::iter::once(header).chain(rows.iter().copied()))
        .unwrap()
        .header()
        .to_vec();
    assert_eq!(
        expected.iter().map(|h| h.data_type).collect::<Vec<_>>(),
        vec![
            SemanticCellType::Integer,
            SemanticCellType::Boolean,
            SemanticCellType::GeoCoordinate,
            SemanticCellType::Text,
        ]
    );

    let mut permutations: Vec<Vec<&str>> = (0..rows.len())
        .map(|k| {
            let mut rotated = rows.clone();
            rotated.rotate_left(k);
            rotated
        })
        .collect();
    permutations.push(rows.iter().rev().copied().collect());

    for permutation in permutations {
        let table =
            Table::from_lines(std::iter::once(header).chain(permutation.iter().copied())).unwrap();
        assert_eq!(table.header(), expected.as_slice(), "rows: {:?}", permutation);
    }
}

#[test]
fn test_header_type_is_join_of_row_types() {
    let table = Table::from_lines(["a,b,c", "1,x,", "2,1.5,", "3,,"]).unwrap();

    for (col, header) in table.header().iter().enumerate() {
        let joined = SemanticCellType::join_all(table.rows().iter().map(|r| r.fields()[col].data_type));
        assert_eq!(header.data_type, joined);
    }
}

#[test]
fn test_classifier_never_fails() {
    let inputs = [
        "", ",", ",,,,", "\"", "\"\"", " ", "-", "+", ".", "1.", "-.5", "(", "()", "(,)", ";", "|",
        "||", "0x1F", "١٢٣", "true false", "NaN", "-inf",
    ];
    for input in inputs {
        let t = TypeInference::classify(input);
        assert!(SemanticCellType::ALL.contains(&t));
    }
}
