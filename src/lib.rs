/*!
 * Tensor, vector and matrix spaces generic over a scalar structure.
 *
 * A [scalar structure](./scalars/trait.ScalarStructure.html) such as the
 * [real numbers](./fields/struct.Real.html) or the
 * [boolean field](./fields/struct.BooleanField.html) defines zero, one, membership and the
 * arithmetic of its values. Spaces are built over a structure with a fixed shape, and every
 * operator a space provides is defined in terms of the structure's operators.
 *
 * ```
 * use algebra_spaces::fields::Real;
 * use algebra_spaces::matrices::MatrixSpace;
 *
 * let r2x2 = MatrixSpace::square(Real, 2).unwrap();
 * let identity = r2x2.identity().unwrap();
 * let product = r2x2.multiplication(&identity, [1.0, 2.0, 3.0, 4.0]).unwrap();
 * assert!(product.equality([1.0, 2.0, 3.0, 4.0]));
 * assert_eq!(product.trace().unwrap().value(), &5.0);
 * ```
 *
 * Every operator accepts raw data or elements as [operands](./operands/index.html), and can
 * also be called by name or alias through the [operator table](./operators/index.html).
 *
 * # Modules
 * - [Scalars](./scalars/index.html)
 * - [Tensors](./tensors/index.html)
 * - [Vectors](./vectors/index.html)
 * - [Matrices](./matrices/index.html)
 */

pub mod errors;
pub mod fields;
pub mod linear_algebra;
pub mod matrices;
pub mod operands;
pub mod operators;
pub mod scalars;
pub mod tensors;
pub mod vectors;
