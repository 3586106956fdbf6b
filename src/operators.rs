/*!
 * Operator aliasing and dispatch.
 *
 * Every operator has a canonical name, such as `addition`, and any number of aliases, such as
 * `add`, configured by the `operators.json` table bundled with this crate. The table also
 * lists the **group** operators, which every space lifts element wise from its scalar
 * structure.
 *
 * Rather than adding aliased methods to each space, the table is a lookup consulted whenever
 * an operator is called by name through `operate`, which exists in static form on every
 * space, taking all operands, and in instance form on every element, taking itself as the
 * first operand.
 *
 * ```
 * use algebra_spaces::fields::Real;
 * use algebra_spaces::vectors::VectorSpace;
 *
 * let r2 = VectorSpace::new(Real, 2).unwrap();
 * let vector = r2.element(vec![1.0, 2.0]).unwrap();
 * let sum = r2.operate("add", &[&vector, &[3.0, 4.0]]).unwrap();
 * assert!(sum.into_vector().unwrap().equality([4.0, 6.0]));
 *
 * // variadic, folding left to right
 * let sum = vector.operate("addition", &[&vector, &vector]).unwrap();
 * assert!(sum.into_vector().unwrap().equality([3.0, 6.0]));
 * ```
 */

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::errors::{OperatorTableError, SpaceError};
use crate::matrices::{Matrix, MatrixSpace, Transposed};
use crate::operands::Operand;
use crate::scalars::{Scalar, ScalarStructure};
use crate::tensors::{Tensor, TensorSpace};
use crate::vectors::{Vector, VectorSpace};

/**
 * The canonical operators which can be called by name.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Operator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Negation,
    Inversion,
    Equality,
    Disequality,
    CrossProduct,
    ScalarProduct,
    Transpose,
    Trace,
    Determinant,
}

impl Operator {
    pub const ALL: [Operator; 13] = [
        Operator::Addition,
        Operator::Subtraction,
        Operator::Multiplication,
        Operator::Division,
        Operator::Negation,
        Operator::Inversion,
        Operator::Equality,
        Operator::Disequality,
        Operator::CrossProduct,
        Operator::ScalarProduct,
        Operator::Transpose,
        Operator::Trace,
        Operator::Determinant,
    ];

    /**
     * The canonical name of this operator, as used in the operator table.
     */
    pub fn name(self) -> &'static str {
        match self {
            Operator::Addition => "addition",
            Operator::Subtraction => "subtraction",
            Operator::Multiplication => "multiplication",
            Operator::Division => "division",
            Operator::Negation => "negation",
            Operator::Inversion => "inversion",
            Operator::Equality => "equality",
            Operator::Disequality => "disequality",
            Operator::CrossProduct => "crossProduct",
            Operator::ScalarProduct => "scalarProduct",
            Operator::Transpose => "transpose",
            Operator::Trace => "trace",
            Operator::Determinant => "determinant",
        }
    }

    pub fn from_name(name: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|operator| operator.name() == name)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperatorConfig {
    group: Vec<String>,
    aliases_of: BTreeMap<String, Vec<String>>,
}

/**
 * A lookup from every canonical operator name and alias to its operator.
 */
#[derive(Clone, Debug)]
pub struct OperatorTable {
    lookup: HashMap<String, Operator>,
    aliases: BTreeMap<Operator, Vec<String>>,
    group: Vec<Operator>,
}

static BUILTIN: OnceLock<OperatorTable> = OnceLock::new();

impl OperatorTable {
    /**
     * Parses an operator table from JSON of the form
     * `{"group": [names...], "aliasesOf": {name: [aliases...]}}`.
     *
     * Canonical names always resolve to their own operator. Building the table does not
     * depend on the order aliases are listed in, and listing the same alias twice for one
     * operator has no further effect, but an alias claimed by two different operators is an
     * error.
     */
    pub fn from_json(json: &str) -> Result<OperatorTable, OperatorTableError> {
        let config: OperatorConfig = serde_json::from_str(json)?;
        let parse = |name: &String| {
            Operator::from_name(name).ok_or_else(|| OperatorTableError::UnknownOperator(name.clone()))
        };

        let mut lookup: HashMap<String, Operator> = Operator::ALL
            .into_iter()
            .map(|operator| (operator.name().to_string(), operator))
            .collect();
        let mut aliases = BTreeMap::new();
        for (name, names) in &config.aliases_of {
            let operator = parse(name)?;
            let mut listed: Vec<String> = Vec::with_capacity(names.len());
            for alias in names {
                match lookup.get(alias) {
                    Some(existing) if *existing != operator => {
                        return Err(OperatorTableError::DuplicateAlias {
                            alias: alias.clone(),
                            first: existing.name(),
                            second: operator.name(),
                        });
                    }
                    _ => {
                        lookup.insert(alias.clone(), operator);
                    }
                }
                if !listed.contains(alias) {
                    listed.push(alias.clone());
                }
            }
            aliases.insert(operator, listed);
        }
        let mut group = config.group.iter().map(parse).collect::<Result<Vec<_>, _>>()?;
        group.sort();
        group.dedup();

        tracing::debug!(
            names = lookup.len(),
            group = group.len(),
            "loaded operator table"
        );
        Ok(OperatorTable {
            lookup,
            aliases,
            group,
        })
    }

    /**
     * The operator table bundled with this crate, parsed the first time it is used.
     */
    pub fn builtin() -> &'static OperatorTable {
        BUILTIN.get_or_init(|| {
            OperatorTable::from_json(include_str!("operators.json"))
                .expect("bundled operator table must be valid")
        })
    }

    /**
     * Looks up the operator for a canonical name or alias.
     */
    pub fn resolve(&self, name: &str) -> Option<Operator> {
        self.lookup.get(name).copied()
    }

    /**
     * The aliases configured for an operator, in the order they were listed.
     */
    pub fn aliases_of(&self, operator: Operator) -> &[String] {
        self.aliases.get(&operator).map(Vec::as_slice).unwrap_or(&[])
    }

    /**
     * The operators every space lifts element wise from its scalar structure.
     */
    pub fn group(&self) -> &[Operator] {
        &self.group
    }

    pub fn is_group(&self, operator: Operator) -> bool {
        self.group.contains(&operator)
    }

    fn dispatch(&self, name: &str, operands: usize) -> Result<Operator, SpaceError> {
        let operator = self
            .resolve(name)
            .ok_or_else(|| SpaceError::UnknownOperator(name.to_string()))?;
        tracing::trace!(name, operator = operator.name(), operands, "dispatching operator");
        Ok(operator)
    }
}

/**
 * The result of calling an operator by name.
 */
#[derive(Clone, Debug)]
pub enum Outcome<S: ScalarStructure> {
    Tensor(Tensor<S>),
    Vector(Vector<S>),
    Matrix(Matrix<S>),
    Scalar(Scalar<S>),
    Truth(bool),
}

impl<S: ScalarStructure> Outcome<S> {
    pub fn into_tensor(self) -> Option<Tensor<S>> {
        match self {
            Outcome::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    pub fn into_vector(self) -> Option<Vector<S>> {
        match self {
            Outcome::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    pub fn into_matrix(self) -> Option<Matrix<S>> {
        match self {
            Outcome::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn into_scalar(self) -> Option<Scalar<S>> {
        match self {
            Outcome::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn truth(&self) -> Option<bool> {
        match self {
            Outcome::Truth(truth) => Some(*truth),
            _ => None,
        }
    }
}

impl<S: ScalarStructure> From<Transposed<S>> for Outcome<S> {
    fn from(transposed: Transposed<S>) -> Self {
        match transposed {
            Transposed::Vector(vector) => Outcome::Vector(vector),
            Transposed::Matrix(matrix) => Outcome::Matrix(matrix),
        }
    }
}

impl<S: ScalarStructure> PartialEq for Outcome<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Tensor(x), Outcome::Tensor(y)) => x == y,
            (Outcome::Vector(x), Outcome::Vector(y)) => x == y,
            (Outcome::Matrix(x), Outcome::Matrix(y)) => x == y,
            (Outcome::Scalar(x), Outcome::Scalar(y)) => x == y,
            (Outcome::Truth(x), Outcome::Truth(y)) => x == y,
            _ => false,
        }
    }
}

fn check_arity(
    operator: Operator,
    expected: &'static str,
    actual: usize,
    valid: bool,
) -> Result<(), SpaceError> {
    if valid {
        Ok(())
    } else {
        Err(SpaceError::Arity {
            operator: operator.name(),
            expected,
            actual,
        })
    }
}

fn unsupported(operator: Operator, on: &str) -> SpaceError {
    SpaceError::UnsupportedOperation {
        operation: operator.name(),
        reason: format!("on {}", on),
    }
}

enum Lifted<V> {
    Data(Vec<V>),
    Truth(bool),
}

// Applies a group operator element wise over the operands, folding variadic operators from
// left to right.
fn lifted<S: ScalarStructure>(
    tensors: &TensorSpace<S>,
    operator: Operator,
    operands: &[&dyn Operand<S::Value>],
) -> Result<Lifted<S::Value>, SpaceError> {
    let count = operands.len();
    match operator {
        Operator::Addition | Operator::Subtraction => {
            check_arity(operator, "at least 2", count, count >= 2)?;
            let step = |left: &dyn Operand<S::Value>, right: &dyn Operand<S::Value>| {
                if operator == Operator::Addition {
                    tensors.addition_data(left, right)
                } else {
                    tensors.subtraction_data(left, right)
                }
            };
            let mut accumulated = step(operands[0], operands[1])?;
            for operand in &operands[2..] {
                accumulated = step(&accumulated as &dyn Operand<S::Value>, *operand)?;
            }
            Ok(Lifted::Data(accumulated))
        }
        Operator::Negation => {
            check_arity(operator, "1", count, count == 1)?;
            Ok(Lifted::Data(tensors.negation_data(operands[0])?))
        }
        Operator::Equality => {
            check_arity(operator, "at least 2", count, count >= 2)?;
            let first = operands[0];
            Ok(Lifted::Truth(
                operands[1..]
                    .iter()
                    .all(|operand| tensors.equal_data(first, *operand)),
            ))
        }
        Operator::Disequality => {
            check_arity(operator, "2", count, count == 2)?;
            Ok(Lifted::Truth(!tensors.equal_data(operands[0], operands[1])))
        }
        _ => Err(unsupported(operator, "element wise")),
    }
}

impl<S: ScalarStructure> TensorSpace<S> {
    /**
     * Calls an operator by canonical name or alias, using the bundled operator table.
     *
     * Tensor spaces support the group operators.
     */
    pub fn operate(
        &self,
        name: &str,
        operands: &[&dyn Operand<S::Value>],
    ) -> Result<Outcome<S>, SpaceError> {
        self.operate_with(OperatorTable::builtin(), name, operands)
    }

    pub fn operate_with(
        &self,
        table: &OperatorTable,
        name: &str,
        operands: &[&dyn Operand<S::Value>],
    ) -> Result<Outcome<S>, SpaceError> {
        let operator = table.dispatch(name, operands.len())?;
        if !table.is_group(operator) {
            return Err(unsupported(operator, "tensors"));
        }
        Ok(match lifted(self, operator, operands)? {
            Lifted::Data(data) => Outcome::Tensor(self.adopt(data)),
            Lifted::Truth(truth) => Outcome::Truth(truth),
        })
    }
}

impl<S: ScalarStructure> VectorSpace<S> {
    /**
     * Calls an operator by canonical name or alias, using the bundled operator table.
     *
     * Vector spaces support the group operators, cross product and scalar product.
     */
    pub fn operate(
        &self,
        name: &str,
        operands: &[&dyn Operand<S::Value>],
    ) -> Result<Outcome<S>, SpaceError> {
        self.operate_with(OperatorTable::builtin(), name, operands)
    }

    pub fn operate_with(
        &self,
        table: &OperatorTable,
        name: &str,
        operands: &[&dyn Operand<S::Value>],
    ) -> Result<Outcome<S>, SpaceError> {
        let operator = table.dispatch(name, operands.len())?;
        let count = operands.len();
        if table.is_group(operator) {
            return Ok(match lifted(self.tensor_space(), operator, operands)? {
                Lifted::Data(data) => Outcome::Vector(self.adopt(data)),
                Lifted::Truth(truth) => Outcome::Truth(truth),
            });
        }
        match operator {
            Operator::CrossProduct => {
                check_arity(operator, "2", count, count == 2)?;
                Ok(Outcome::Vector(self.cross_product(operands[0], operands[1])?))
            }
            Operator::ScalarProduct => {
                check_arity(operator, "2", count, count == 2)?;
                Ok(Outcome::Scalar(self.scalar_product(operands[0], operands[1])?))
            }
            _ => Err(unsupported(operator, "vectors")),
        }
    }
}

impl<S: ScalarStructure> MatrixSpace<S> {
    /**
     * Calls an operator by canonical name or alias, using the bundled operator table.
     *
     * Matrix spaces support the group operators, multiplication, transpose, and for square
     * matrices trace and determinant.
     */
    pub fn operate(
        &self,
        name: &str,
        operands: &[&dyn Operand<S::Value>],
    ) -> Result<Outcome<S>, SpaceError> {
        self.operate_with(OperatorTable::builtin(), name, operands)
    }

    pub fn operate_with(
        &self,
        table: &OperatorTable,
        name: &str,
        operands: &[&dyn Operand<S::Value>],
    ) -> Result<Outcome<S>, SpaceError> {
        let operator = table.dispatch(name, operands.len())?;
        let count = operands.len();
        if table.is_group(operator) {
            return Ok(match lifted(self.tensor_space(), operator, operands)? {
                Lifted::Data(data) => Outcome::Matrix(self.adopt(data)),
                Lifted::Truth(truth) => Outcome::Truth(truth),
            });
        }
        match operator {
            Operator::Multiplication => {
                check_arity(operator, "at least 2", count, count >= 2)?;
                let mut product = self.multiplication(operands[0], operands[1])?;
                // each product carries the space derived for its own size
                for operand in &operands[2..] {
                    product = product.multiplication(*operand)?;
                }
                Ok(Outcome::Matrix(product))
            }
            Operator::Transpose => {
                check_arity(operator, "1", count, count == 1)?;
                Ok(self.transpose(operands[0])?.into())
            }
            Operator::Trace => {
                check_arity(operator, "1", count, count == 1)?;
                Ok(Outcome::Scalar(self.trace(operands[0])?))
            }
            Operator::Determinant => {
                check_arity(operator, "1", count, count == 1)?;
                Ok(Outcome::Scalar(self.determinant(operands[0])?))
            }
            _ => Err(unsupported(operator, "matrices")),
        }
    }
}

// Builds the operand list for an instance call, with the element first
fn with_first<'a, V>(
    first: &'a dyn Operand<V>,
    others: &[&'a dyn Operand<V>],
) -> Vec<&'a dyn Operand<V>> {
    let mut operands = Vec::with_capacity(others.len() + 1);
    operands.push(first);
    operands.extend_from_slice(others);
    operands
}

macro_rules! instance_operate {
    ($Element:ident) => {
        impl<S: ScalarStructure> $Element<S> {
            /**
             * Calls an operator by canonical name or alias with this element as the first
             * operand, using the bundled operator table.
             */
            pub fn operate(
                &self,
                name: &str,
                others: &[&dyn Operand<S::Value>],
            ) -> Result<Outcome<S>, SpaceError> {
                self.operate_with(OperatorTable::builtin(), name, others)
            }

            pub fn operate_with(
                &self,
                table: &OperatorTable,
                name: &str,
                others: &[&dyn Operand<S::Value>],
            ) -> Result<Outcome<S>, SpaceError> {
                self.space()
                    .operate_with(table, name, &with_first(self, others))
            }
        }
    };
}

instance_operate!(Tensor);
instance_operate!(Vector);
instance_operate!(Matrix);

/**
 * Calls an operator by canonical name or alias on raw values of a scalar structure, using
 * the bundled operator table. This is the static form of the operators on [`Scalar`].
 *
 * ```
 * use algebra_spaces::fields::Real;
 * use algebra_spaces::operators::operate_scalars;
 * let sum = operate_scalars(&Real, "add", &[&1.0, &2.0, &3.0]).unwrap();
 * assert_eq!(sum.into_scalar().unwrap().value(), &6.0);
 * ```
 */
pub fn operate_scalars<S: ScalarStructure>(
    structure: &S,
    name: &str,
    values: &[&S::Value],
) -> Result<Outcome<S>, SpaceError> {
    operate_scalars_with(OperatorTable::builtin(), structure, name, values)
}

pub fn operate_scalars_with<S: ScalarStructure>(
    table: &OperatorTable,
    structure: &S,
    name: &str,
    values: &[&S::Value],
) -> Result<Outcome<S>, SpaceError> {
    let operator = table.dispatch(name, values.len())?;
    let count = values.len();
    if let Some(position) = values.iter().position(|value| !structure.contains(value)) {
        return Err(SpaceError::NotInStructure { position });
    }
    let scalar = |value: S::Value| -> Result<Outcome<S>, SpaceError> {
        Ok(Outcome::Scalar(Scalar::computed(structure.clone(), value)?))
    };
    match operator {
        Operator::Addition | Operator::Subtraction | Operator::Multiplication => {
            check_arity(operator, "at least 2", count, count >= 2)?;
            let step = |left: &S::Value, right: &S::Value| match operator {
                Operator::Addition => structure.addition(left, right),
                Operator::Subtraction => structure.subtraction(left, right),
                _ => structure.multiplication(left, right),
            };
            let mut accumulated = step(values[0], values[1]);
            for value in &values[2..] {
                accumulated = step(&accumulated, value);
            }
            scalar(accumulated)
        }
        Operator::Division => {
            check_arity(operator, "at least 2", count, count >= 2)?;
            let mut accumulated = values[0].clone();
            for value in &values[1..] {
                accumulated = structure
                    .division(&accumulated, value)
                    .ok_or(SpaceError::NotInvertible)?;
            }
            scalar(accumulated)
        }
        Operator::Negation => {
            check_arity(operator, "1", count, count == 1)?;
            scalar(structure.negation(values[0]))
        }
        Operator::Inversion => {
            check_arity(operator, "1", count, count == 1)?;
            scalar(structure.inverse(values[0]).ok_or(SpaceError::NotInvertible)?)
        }
        Operator::Equality => {
            check_arity(operator, "at least 2", count, count >= 2)?;
            let first = values[0];
            Ok(Outcome::Truth(
                values[1..].iter().all(|value| structure.equality(first, value)),
            ))
        }
        Operator::Disequality => {
            check_arity(operator, "2", count, count == 2)?;
            Ok(Outcome::Truth(!structure.equality(values[0], values[1])))
        }
        _ => Err(unsupported(operator, "scalars")),
    }
}

impl<S: ScalarStructure> Scalar<S> {
    /**
     * Calls an operator by canonical name or alias with this scalar as the first operand,
     * using the bundled operator table.
     */
    pub fn operate(&self, name: &str, others: &[&S::Value]) -> Result<Outcome<S>, SpaceError> {
        let mut values = Vec::with_capacity(others.len() + 1);
        values.push(self.value());
        values.extend_from_slice(others);
        operate_scalars(self.structure(), name, &values)
    }
}
