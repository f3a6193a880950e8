use {
    crate::arithmetic::Rational,
    itertools::Itertools as _,
    log::trace,
    thiserror::Error,
};

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConstraintError {
    #[error("all constraints in a conjunction must have the same number of columns: expected {expected}, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("a projection step produced more than {limit} constraints")]
    ResourceExhausted { limit: usize },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Relation {
    Equal,
    Less,
    Greater,
}

/// A linear constraint `lhs · x rel rhs` over a fixed block of columns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    pub lhs: Vec<Rational>,
    pub relation: Relation,
    pub rhs: Rational,
}

impl Constraint {
    pub fn new(lhs: Vec<Rational>, relation: Relation, rhs: Rational) -> Constraint {
        Constraint { lhs, relation, rhs }
    }
}

/// An ordered conjunction of constraints of uniform arity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintConjunction {
    constraints: Vec<Constraint>,
}

impl ConstraintConjunction {
    /// An empty conjunction is permitted and denotes truth.
    pub fn new(constraints: Vec<Constraint>) -> Result<ConstraintConjunction, ConstraintError> {
        if let Some(first) = constraints.first() {
            let expected = first.lhs.len();
            for constraint in &constraints {
                if constraint.lhs.len() != expected {
                    return Err(ConstraintError::ArityMismatch {
                        expected,
                        found: constraint.lhs.len(),
                    });
                }
            }
        }

        Ok(ConstraintConjunction { constraints })
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Eliminate the variable at `column` from the conjunction, by a pivot
    /// equation when one exists and by Fourier-Motzkin projection otherwise.
    pub fn eliminate_variable(
        &mut self,
        column: usize,
        limit: Option<usize>,
    ) -> Result<(), ConstraintError> {
        if !eliminate_by_equality(&mut self.constraints, column) {
            eliminate_by_inequality(&mut self.constraints, column, limit)?;
        }
        Ok(())
    }

    /// Decide whether the conjunction has a rational solution.
    ///
    /// Works on a copy: every column is eliminated in index order, after
    /// which each remaining constraint relates zero to a constant.
    pub fn is_satisfiable(&self) -> bool {
        let Some(first) = self.constraints.first() else {
            return true;
        };
        let columns = first.lhs.len();

        let mut constraints = self.constraints.clone();
        for column in 0..columns {
            if !eliminate_by_equality(&mut constraints, column) {
                eliminate_by_inequality(&mut constraints, column, None)
                    .expect("an unbounded projection cannot be exhausted");
            }
        }

        constraints.iter().all(|constraint| match constraint.relation {
            Relation::Equal => constraint.rhs.is_zero(),
            Relation::Less => constraint.rhs.is_positive(),
            Relation::Greater => constraint.rhs.is_negative(),
        })
    }
}

/// Use the first equation with a non-zero coefficient at `column` as a pivot
/// to cancel the column from every other constraint, then drop the pivot.
/// Returns false without touching the conjunction if there is no such
/// equation.
fn eliminate_by_equality(constraints: &mut Vec<Constraint>, column: usize) -> bool {
    let Some(pivot_index) = constraints.iter().position(|constraint| {
        constraint.relation == Relation::Equal && !constraint.lhs[column].is_zero()
    }) else {
        return false;
    };

    let pivot = constraints[pivot_index].clone();
    let pivot_coefficient = pivot.lhs[column];

    for constraint in constraints.iter_mut() {
        let coefficient = constraint.lhs[column];
        if coefficient.is_zero() {
            continue;
        }

        let factor = coefficient / pivot_coefficient;
        for (entry, pivot_entry) in constraint.lhs.iter_mut().zip(&pivot.lhs) {
            *entry = *entry - factor * *pivot_entry;
        }
        constraint.rhs = constraint.rhs - factor * pivot.rhs;
    }

    constraints.remove(pivot_index);
    trace!("eliminated column {column} by equality");

    true
}

/// Fourier-Motzkin projection of `column`.
///
/// Every constraint with a non-zero coefficient at the column bounds the
/// variable from above or from below; each upper/lower pair yields a new
/// strict inequality free of the column, and the combined constraints are
/// dropped.
fn eliminate_by_inequality(
    constraints: &mut Vec<Constraint>,
    column: usize,
    limit: Option<usize>,
) -> Result<(), ConstraintError> {
    let mut upper = vec![];
    let mut lower = vec![];

    for (index, constraint) in constraints.iter().enumerate() {
        let coefficient = constraint.lhs[column];
        if coefficient.is_zero() {
            continue;
        }

        match constraint.relation {
            Relation::Less => {
                if coefficient.is_positive() {
                    upper.push(index);
                } else {
                    lower.push(index);
                }
            }
            Relation::Greater => {
                if coefficient.is_positive() {
                    lower.push(index);
                } else {
                    upper.push(index);
                }
            }
            Relation::Equal => (),
        }
    }

    if let Some(limit) = limit {
        let projected = constraints.len() - upper.len() - lower.len() + upper.len() * lower.len();
        if projected > limit {
            return Err(ConstraintError::ResourceExhausted { limit });
        }
    }

    let mut synthesized = upper
        .iter()
        .cartesian_product(&lower)
        .map(|(&upper_index, &lower_index)| {
            let upper = &constraints[upper_index];
            let lower = &constraints[lower_index];
            let upper_coefficient = upper.lhs[column];
            let lower_coefficient = lower.lhs[column];

            let lhs = upper
                .lhs
                .iter()
                .zip(&lower.lhs)
                .map(|(&u, &l)| u / upper_coefficient - l / lower_coefficient)
                .collect();
            let rhs = upper.rhs / upper_coefficient - lower.rhs / lower_coefficient;

            Constraint::new(lhs, Relation::Less, rhs)
        })
        .collect();

    let mut index = 0;
    constraints.retain(|_| {
        let combined = upper.contains(&index) || lower.contains(&index);
        index += 1;
        !combined
    });
    constraints.append(&mut synthesized);

    trace!(
        "eliminated column {column} by projecting {} upper against {} lower bounds",
        upper.len(),
        lower.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::{Constraint, ConstraintConjunction, ConstraintError, Relation},
        crate::arithmetic::Rational,
    };

    fn constraint(lhs: Vec<i64>, relation: Relation, rhs: i64) -> Constraint {
        Constraint::new(
            lhs.into_iter().map(Rational::from).collect(),
            relation,
            Rational::from(rhs),
        )
    }

    #[test]
    fn empty_conjunction_is_satisfiable() {
        let conjunction = ConstraintConjunction::new(vec![]).unwrap();
        assert!(conjunction.is_satisfiable());
    }

    #[test]
    fn mismatched_arities_are_rejected() {
        assert_eq!(
            ConstraintConjunction::new(vec![
                constraint(vec![1, 2], Relation::Less, 0),
                constraint(vec![1], Relation::Less, 0),
            ]),
            Err(ConstraintError::ArityMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn contradictory_bounds_are_unsatisfiable() {
        // x + y > 8, x + y < 7
        let conjunction = ConstraintConjunction::new(vec![
            constraint(vec![1, 1], Relation::Greater, 8),
            constraint(vec![1, 1], Relation::Less, 7),
        ])
        .unwrap();
        assert!(!conjunction.is_satisfiable());
    }

    #[test]
    fn equations_propagate_into_inequalities() {
        // 2x + 3y - z > 0, x - y > 0, -3x + z = 0, y < 0
        let conjunction = ConstraintConjunction::new(vec![
            constraint(vec![2, 3, -1], Relation::Greater, 0),
            constraint(vec![1, -1, 0], Relation::Greater, 0),
            constraint(vec![-3, 0, 1], Relation::Equal, 0),
            constraint(vec![0, 1, 0], Relation::Less, 0),
        ])
        .unwrap();
        assert!(!conjunction.is_satisfiable());
    }

    #[test]
    fn solvable_equations_are_satisfiable() {
        // x + y = 4, 2x + y = 6
        let conjunction = ConstraintConjunction::new(vec![
            constraint(vec![1, 1], Relation::Equal, 4),
            constraint(vec![2, 1], Relation::Equal, 6),
        ])
        .unwrap();
        assert!(conjunction.is_satisfiable());
    }

    #[test]
    fn one_sided_bounds_are_satisfiable() {
        // x < 3, y > 5
        let conjunction = ConstraintConjunction::new(vec![
            constraint(vec![1, 0], Relation::Less, 3),
            constraint(vec![0, 1], Relation::Greater, 5),
        ])
        .unwrap();
        assert!(conjunction.is_satisfiable());
    }

    #[test]
    fn equality_elimination_is_idempotent() {
        let mut conjunction = ConstraintConjunction::new(vec![
            constraint(vec![1, 1], Relation::Equal, 4),
            constraint(vec![1, -1], Relation::Less, 2),
        ])
        .unwrap();

        conjunction.eliminate_variable(0, None).unwrap();
        let eliminated = conjunction.clone();

        // the column is gone; a second attempt falls through to an empty
        // projection and must leave the conjunction unchanged
        conjunction.eliminate_variable(0, None).unwrap();
        assert_eq!(conjunction, eliminated);
    }

    #[test]
    fn elimination_by_single_column() {
        // x + y < 4, x - y > 0 projected on x leaves a constraint on y only
        let mut conjunction = ConstraintConjunction::new(vec![
            constraint(vec![1, 1], Relation::Less, 4),
            constraint(vec![1, -1], Relation::Greater, 0),
        ])
        .unwrap();

        conjunction.eliminate_variable(0, None).unwrap();

        let constraints = conjunction.constraints();
        assert_eq!(constraints.len(), 1);
        assert!(constraints[0].lhs[0].is_zero());
        assert_eq!(constraints[0].relation, Relation::Less);
        // (x + y) - (x - y) = 2y < 4
        assert_eq!(constraints[0].lhs[1], Rational::from(2));
        assert_eq!(constraints[0].rhs, Rational::from(4));
    }

    #[test]
    fn projection_respects_the_growth_limit() {
        let mut conjunction = ConstraintConjunction::new(vec![
            constraint(vec![1, 1], Relation::Less, 4),
            constraint(vec![1, 2], Relation::Less, 4),
            constraint(vec![1, -1], Relation::Greater, 0),
            constraint(vec![1, -2], Relation::Greater, 0),
        ])
        .unwrap();

        assert_eq!(
            conjunction.eliminate_variable(0, Some(3)),
            Err(ConstraintError::ResourceExhausted { limit: 3 })
        );
    }
}
