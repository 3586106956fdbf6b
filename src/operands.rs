/*!
 * Operand coercion.
 *
 * Every operator in this crate accepts either raw coordinate data or an already constructed
 * element on either side. Both are turned into flat data by the [`Operand`] trait before an
 * operation reads them, so
 *
 * ```
 * use algebra_spaces::fields::Real;
 * use algebra_spaces::vectors::VectorSpace;
 *
 * let r2 = VectorSpace::new(Real, 2).unwrap();
 * let vector = r2.element(vec![1.0, 2.0]).unwrap();
 * let from_raw = r2.addition([1.0, 2.0], [3.0, 4.0]).unwrap();
 * let from_mixed = r2.addition(&vector, vec![3.0, 4.0]).unwrap();
 * assert_eq!(from_raw, from_mixed);
 * ```
 */

/**
 * Anything which can be read as flat, row major data for an operation.
 *
 * Raw data has no shape of its own and is accepted by any space it has the right number of
 * values for. Elements report their shape so that, for example, a 2x3 matrix is not
 * silently accepted where a 3x2 one is expected.
 */
pub trait Operand<V> {
    fn to_data(&self) -> &[V];

    fn shape(&self) -> Option<&[usize]> {
        None
    }
}

impl<V> Operand<V> for [V] {
    fn to_data(&self) -> &[V] {
        self
    }
}

impl<V, const N: usize> Operand<V> for [V; N] {
    fn to_data(&self) -> &[V] {
        self
    }
}

impl<V> Operand<V> for Vec<V> {
    fn to_data(&self) -> &[V] {
        self
    }
}

impl<V, O> Operand<V> for &O
where
    O: Operand<V> + ?Sized,
{
    fn to_data(&self) -> &[V] {
        (**self).to_data()
    }

    fn shape(&self) -> Option<&[usize]> {
        (**self).shape()
    }
}

/**
 * Reads an operand as data for a space of the given shape, returning the data only if the
 * operand has the right number of values and, for elements, the same shape.
 */
pub(crate) fn coerce<'a, V, O>(
    operation: &'static str,
    shape: &[usize],
    operand: &'a O,
) -> Result<&'a [V], crate::errors::SpaceError>
where
    O: Operand<V> + ?Sized,
{
    let data = operand.to_data();
    let expected = crate::tensors::elements(shape);
    if let Some(operand_shape) = operand.shape() {
        if operand_shape != shape {
            return Err(crate::errors::mismatch(
                operation,
                format!("shape {:?}", shape),
                format!("shape {:?}", operand_shape),
            ));
        }
    }
    if data.len() != expected {
        return Err(crate::errors::mismatch(
            operation,
            format!("{} values", expected),
            format!("{} values", data.len()),
        ));
    }
    Ok(data)
}

#[test]
fn raw_data_is_accepted_by_length() {
    let shape = [2, 2];
    let data = [1, 2, 3, 4];
    assert_eq!(coerce("test", &shape, &data).unwrap(), &[1, 2, 3, 4]);
    assert_eq!(coerce("test", &shape, &vec![1, 2, 3, 4]).unwrap(), &[1, 2, 3, 4]);
    assert!(coerce("test", &shape, &[1, 2, 3]).is_err());
}
