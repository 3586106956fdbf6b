extern crate algebra_spaces;

#[cfg(test)]
mod tests {
    use algebra_spaces::errors::SpaceError;
    use algebra_spaces::fields::{Complex, Real};
    use algebra_spaces::tensors::TensorSpace;
    use algebra_spaces::tensors::indexing::{to_flat_index, to_multi_index};

    #[test]
    fn equality_of_rank_3_tensors() {
        let t2x2x2 = TensorSpace::new(Real, [2, 2, 2]).unwrap();
        let tensor1 = t2x2x2.element((1..=8).map(|x| x as f64).collect()).unwrap();
        let tensor2 = t2x2x2.element((2..=9).map(|x| x as f64).collect()).unwrap();
        assert!(t2x2x2.equality(&tensor1, &tensor1));
        assert!(!t2x2x2.equality(&tensor1, &tensor2));
        assert!(tensor1.disequality(&tensor2));
        let difference = tensor2.subtraction(&tensor1).unwrap();
        assert!(difference.equality(vec![1.0; 8]));
    }

    #[test]
    fn indexing_is_row_major() {
        let shape = [2, 3, 4];
        let t = TensorSpace::new(Real, shape).unwrap();
        let tensor = t.element((0..24).map(|x| x as f64).collect()).unwrap();
        let mut expected = 0.0;
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(tensor.get(&[i, j, k]), Some(&expected));
                    assert_eq!(to_flat_index(&[i, j, k], &shape), expected as usize);
                    assert_eq!(to_multi_index(expected as usize, &shape), vec![i, j, k]);
                    expected += 1.0;
                }
            }
        }
        assert_eq!(tensor.get(&[0, 3, 0]), None);
    }

    #[test]
    fn contraction_of_a_square_is_its_trace() {
        let t3x3 = TensorSpace::new(Real, [3, 3]).unwrap();
        let tensor = t3x3.element((1..=9).map(|x| x as f64).collect()).unwrap();
        let contracted = tensor.contraction((0, 1)).unwrap();
        assert_eq!(contracted.shape(), &[] as &[usize]);
        assert_eq!(contracted.data(), &[15.0]);
    }

    #[test]
    fn contraction_of_middle_axes() {
        let space = TensorSpace::new(Real, [2, 3, 3]).unwrap();
        let tensor = space.element((0..18).map(|x| x as f64).collect()).unwrap();
        let contracted = space.contraction((1, 2), &tensor).unwrap();
        assert_eq!(contracted.shape(), &[2]);
        // 0 + 4 + 8 and 9 + 13 + 17
        assert_eq!(contracted.data(), &[12.0, 39.0]);
        // the axes may be given in either order
        assert_eq!(space.contraction((2, 1), &tensor).unwrap(), contracted);
    }

    #[test]
    fn contraction_of_unequal_axes_fails() {
        let space = TensorSpace::new(Real, [2, 3]).unwrap();
        assert_eq!(
            space.contraction((0, 1), [0.0; 6]).unwrap_err(),
            SpaceError::IncompatibleAxes {
                axes: (0, 1),
                shape: vec![2, 3]
            }
        );
        assert!(space.contraction((0, 0), [0.0; 6]).is_err());
        assert!(space.contraction((0, 5), [0.0; 6]).is_err());
    }

    #[test]
    fn invalid_shapes() {
        assert_eq!(
            TensorSpace::new(Real, [2, 0, 3]).unwrap_err(),
            SpaceError::InvalidShape(vec![2, 0, 3])
        );
    }

    #[test]
    fn complex_tensors() {
        let space = TensorSpace::new(Complex, [2]).unwrap();
        let i = [0.0, 1.0];
        let scaled = space.scalar_multiplication(&i, [[1.0, 0.0], [0.0, 1.0]]).unwrap();
        assert_eq!(scaled.data(), &[[0.0, 1.0], [-1.0, 0.0]]);
        assert!(space.negation(&scaled).unwrap().addition(&scaled).unwrap().equality(space.zero()));
    }

    #[test]
    fn scalar_must_be_a_member() {
        let space = TensorSpace::new(Real, [2]).unwrap();
        assert!(space.scalar_multiplication(&f64::NAN, [1.0, 2.0]).is_err());
    }
}
