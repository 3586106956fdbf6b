extern crate algebra_spaces;

#[cfg(test)]
mod tests {
    use algebra_spaces::errors::SpaceError;
    use algebra_spaces::fields::{BooleanField, Complex, Real};
    use algebra_spaces::scalars::{Scalar, ScalarStructure};

    #[test]
    fn boolean_field() {
        let t = Scalar::new(BooleanField, true).unwrap();
        assert!(*t.addition(&false).unwrap().value());
        assert!(!*t.negation().unwrap().value());
        assert!(!*t.addition(&true).unwrap().value());
        assert!(*t.multiplication(&true).unwrap().value());
        assert!(*t.inversion().unwrap().value());
        assert_eq!(
            Scalar::new(BooleanField, false).unwrap().inversion().unwrap_err(),
            SpaceError::NotInvertible
        );
    }

    #[test]
    fn real_division() {
        let six = Scalar::new(Real, 6.0).unwrap();
        assert_eq!(six.division(&4.0).unwrap().value(), &1.5);
        assert_eq!(six.division(&0.0).unwrap_err(), SpaceError::NotInvertible);
        assert!(six.subtraction(&6.0).unwrap().equality(&Real.zero()));
    }

    #[test]
    fn values_must_be_members() {
        assert_eq!(
            Scalar::new(Real, f64::NAN).unwrap_err(),
            SpaceError::NotInStructure { position: 0 }
        );
        assert!(Scalar::new(Complex, [1.0, f64::NEG_INFINITY]).is_err());
    }

    #[test]
    fn complex_arithmetic() {
        let i = Scalar::new(Complex, [0.0, 1.0]).unwrap();
        assert_eq!(i.multiplication(&[0.0, 1.0]).unwrap().value(), &[-1.0, 0.0]);
        assert_eq!(i.inversion().unwrap().value(), &[0.0, -1.0]);
        assert!(i.disequality(&[1.0, 0.0]));
        assert_eq!(i, Scalar::new(Complex, [0.0, 1.0]).unwrap());
    }
}
