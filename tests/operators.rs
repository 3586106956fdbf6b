extern crate algebra_spaces;

#[cfg(test)]
mod tests {
    use algebra_spaces::errors::SpaceError;
    use algebra_spaces::fields::{BooleanField, Real};
    use algebra_spaces::matrices::MatrixSpace;
    use algebra_spaces::operators::{Operator, OperatorTable, Outcome, operate_scalars};
    use algebra_spaces::scalars::Scalar;
    use algebra_spaces::tensors::TensorSpace;
    use algebra_spaces::vectors::VectorSpace;

    #[test]
    fn aliases_dispatch_to_the_same_operator() {
        let r2 = VectorSpace::new(Real, 2).unwrap();
        let by_name = r2.operate("addition", &[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        let by_alias = r2.operate("add", &[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        assert_eq!(by_name, by_alias);
        assert!(by_alias.into_vector().unwrap().equality([4.0, 6.0]));
    }

    #[test]
    fn variadic_addition() {
        let sum = operate_scalars(&Real, "add", &[&1.0, &2.0, &3.0]).unwrap();
        assert_eq!(sum.into_scalar().unwrap().value(), &6.0);

        let r2 = VectorSpace::new(Real, 2).unwrap();
        let vector = r2.element(vec![1.0, 1.0]).unwrap();
        let sum = vector
            .operate("add", &[&[2.0, 2.0], &vec![3.0, 3.0]])
            .unwrap()
            .into_vector()
            .unwrap();
        assert_eq!(sum.data(), &[6.0, 6.0]);
    }

    #[test]
    fn variadic_subtraction_folds_left() {
        let difference = operate_scalars(&Real, "sub", &[&10.0, &3.0, &2.0]).unwrap();
        assert_eq!(difference.into_scalar().unwrap().value(), &5.0);
    }

    #[test]
    fn variadic_equality() {
        let t = TensorSpace::new(Real, [2, 2]).unwrap();
        let x = t.element(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let equal = t.operate("eq", &[&x, &[1.0, 2.0, 3.0, 4.0], &x]).unwrap();
        assert_eq!(equal.truth(), Some(true));
        let unequal = x.operate("equal", &[&x, &[1.0, 2.0, 3.0, 5.0]]).unwrap();
        assert_eq!(unequal.truth(), Some(false));
        assert_eq!(x.operate("notEqual", &[&[0.0; 4]]).unwrap().truth(), Some(true));
    }

    #[test]
    fn matrix_operators_by_name() {
        let r2x2 = MatrixSpace::square(Real, 2).unwrap();
        let matrix = r2x2.element(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let identity = r2x2.identity().unwrap();

        let determinant = matrix.operate("det", &[]).unwrap();
        assert_eq!(determinant.into_scalar().unwrap().value(), &-2.0);
        let trace = r2x2.operate("trace", &[&matrix]).unwrap();
        assert_eq!(trace.into_scalar().unwrap().value(), &5.0);

        let product = r2x2
            .operate("mul", &[&identity, &matrix, &identity])
            .unwrap()
            .into_matrix()
            .unwrap();
        assert_eq!(product, matrix);

        let transposed = matrix.operate("tr", &[]).unwrap().into_matrix().unwrap();
        assert_eq!(transposed.data(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn transposing_a_row_by_name_gives_a_vector() {
        let r1x2 = MatrixSpace::new(Real, 1, 2).unwrap();
        let outcome = r1x2.operate("transposed", &[&[5.0, 6.0]]).unwrap();
        assert_eq!(outcome.into_vector().unwrap().data(), &[5.0, 6.0]);
    }

    #[test]
    fn vector_products_by_name() {
        let r3 = VectorSpace::new(Real, 3).unwrap();
        let cross = r3
            .operate("cross", &[&[3.0, -3.0, 1.0], &[4.0, 9.0, 2.0]])
            .unwrap();
        assert!(cross.into_vector().unwrap().equality([-15.0, -2.0, 39.0]));
        let dot = r3.operate("dot", &[&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]]).unwrap();
        assert_eq!(dot.into_scalar().unwrap().value(), &6.0);
    }

    #[test]
    fn unknown_and_unsupported_operators() {
        let r2 = VectorSpace::new(Real, 2).unwrap();
        assert_eq!(
            r2.operate("plus", &[&[1.0, 2.0], &[3.0, 4.0]]).unwrap_err(),
            SpaceError::UnknownOperator("plus".to_string())
        );
        assert!(matches!(
            r2.operate("det", &[&[1.0, 2.0]]),
            Err(SpaceError::UnsupportedOperation { operation: "determinant", .. })
        ));
        let t = TensorSpace::new(Real, [2]).unwrap();
        assert!(matches!(
            t.operate("cross", &[&[1.0, 2.0], &[3.0, 4.0]]),
            Err(SpaceError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn wrong_number_of_operands() {
        let r2 = VectorSpace::new(Real, 2).unwrap();
        assert_eq!(
            r2.operate("add", &[&[1.0, 2.0]]).unwrap_err(),
            SpaceError::Arity {
                operator: "addition",
                expected: "at least 2",
                actual: 1
            }
        );
        assert!(matches!(
            r2.operate("neg", &[&[1.0, 2.0], &[1.0, 2.0]]),
            Err(SpaceError::Arity { operator: "negation", actual: 2, .. })
        ));
        assert!(operate_scalars(&Real, "inv", &[]).is_err());
    }

    #[test]
    fn scalar_operators_by_name() {
        let t = Scalar::new(BooleanField, true).unwrap();
        let sum = t.operate("add", &[&false]).unwrap().into_scalar().unwrap();
        assert!(*sum.value());
        let negated = t.operate("neg", &[]).unwrap().into_scalar().unwrap();
        assert!(!*negated.value());
        assert_eq!(
            operate_scalars(&Real, "div", &[&1.0, &0.0]).unwrap_err(),
            SpaceError::NotInvertible
        );
        assert_eq!(
            operate_scalars(&Real, "add", &[&1.0, &f64::NAN]).unwrap_err(),
            SpaceError::NotInStructure { position: 1 }
        );
    }

    #[test]
    fn custom_operator_table() {
        let table = OperatorTable::from_json(
            r#"{
                "group": ["addition", "negation", "equality", "disequality", "subtraction"],
                "aliasesOf": {"addition": ["plus"], "negation": ["minus"]}
            }"#,
        )
        .unwrap();
        assert_eq!(table.resolve("plus"), Some(Operator::Addition));
        // the bundled aliases are not part of a custom table
        assert_eq!(table.resolve("add"), None);

        let r2 = VectorSpace::new(Real, 2).unwrap();
        let sum = r2
            .operate_with(&table, "plus", &[&[1.0, 2.0], &[3.0, 4.0]])
            .unwrap();
        assert!(matches!(sum, Outcome::Vector(_)));
        assert!(r2.operate_with(&table, "add", &[&[1.0, 2.0], &[3.0, 4.0]]).is_err());
    }

    #[test]
    fn bundled_table() {
        let table = OperatorTable::builtin();
        for operator in [
            Operator::Addition,
            Operator::Subtraction,
            Operator::Negation,
            Operator::Equality,
            Operator::Disequality,
        ] {
            assert!(table.is_group(operator));
        }
        assert!(!table.is_group(Operator::Determinant));
        assert_eq!(table.aliases_of(Operator::ScalarProduct), &["dotProduct", "dot"]);
    }
}
