use {
    crate::{
        constraints::ConstraintError,
        normalizing::{comparisons::simplify_comparisons, dnf::dnf, nnf::nnf},
        syntax_tree::fol::{AtomicFormula, Formula, Quantifier},
        translating::constraints::{
            conjunctions_to_formula, formula_to_conjunctions, VariableMapping,
        },
    },
    log::debug,
};

/// The quantifier-elimination driver.
///
/// Quantifiers of a closed prenex formula are eliminated inside out; each
/// one triggers a normalisation of its body into disjunctive normal form
/// over `=`/`<`/`>` atoms, a projection of every disjunct on the bound
/// variable's column, and a translation back into a formula.
pub struct Eliminator {
    mapping: VariableMapping,
    limit: Option<usize>,
}

impl Eliminator {
    pub fn new(limit: Option<usize>) -> Eliminator {
        Eliminator {
            mapping: VariableMapping::new(),
            limit,
        }
    }

    /// Replace a closed prenex formula by an equivalent quantifier-free
    /// formula.
    pub fn eliminate(&mut self, formula: Formula) -> Result<Formula, ConstraintError> {
        match formula {
            Formula::QuantifiedFormula {
                quantifier,
                variable,
                formula,
            } => {
                self.mapping.add(&variable);
                let result = self.eliminate_bound(*formula, &variable, quantifier);
                self.mapping.remove(&variable);
                result
            }
            // by prenex form, everything below the quantifier prefix is
            // quantifier-free
            x => Ok(x),
        }
    }

    fn eliminate_bound(
        &mut self,
        formula: Formula,
        variable: &str,
        quantifier: Quantifier,
    ) -> Result<Formula, ConstraintError> {
        let formula = self.eliminate(formula)?;

        debug!(
            "eliminating {} bound variable \"{variable}\"",
            match quantifier {
                Quantifier::Forall => "universally",
                Quantifier::Exists => "existentially",
            }
        );

        // universal duality: !x.F is eliminated as ~?x.~F
        let base = match quantifier {
            Quantifier::Exists => formula,
            Quantifier::Forall => formula.negate(),
        };

        let base = dnf(simplify_comparisons(nnf(base)));
        debug!("base formula in disjunctive normal form: {base}");

        let base = match base {
            x @ Formula::AtomicFormula(AtomicFormula::Truth | AtomicFormula::Falsity) => x,
            base => {
                let column = self
                    .mapping
                    .index(variable)
                    .expect("the bound variable has a column");

                let mut conjunctions = formula_to_conjunctions(&base, &self.mapping);
                for conjunction in &mut conjunctions {
                    conjunction.eliminate_variable(column, self.limit)?;
                }

                conjunctions_to_formula(&conjunctions, &self.mapping)
            }
        };
        debug!("eliminated \"{variable}\": {base}");

        Ok(match quantifier {
            Quantifier::Exists => base,
            Quantifier::Forall => base.negate(),
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::Eliminator,
        crate::syntax_tree::fol::Formula,
    };

    fn eliminate(input: &str) -> Formula {
        Eliminator::new(None)
            .eliminate(input.parse().unwrap())
            .unwrap()
    }

    #[test]
    fn eliminate_existential() {
        assert_eq!(eliminate("?x.x > 0 & x < 1"), "0<1".parse().unwrap());
        assert_eq!(eliminate("?x.x > 0 & x < 0"), "0<0".parse().unwrap());
    }

    #[test]
    fn eliminate_unconstrained_variable() {
        // a variable bounded from below only is eliminated without residue
        assert_eq!(eliminate("?x.x > 0"), "T".parse().unwrap());
    }

    #[test]
    fn eliminate_universal() {
        // both disjuncts of ~(x < 0) project to the empty conjunction, and
        // the universal duality wraps the result in a negation
        assert_eq!(eliminate("!x.x < 0"), "~(T | T)".parse().unwrap());
    }

    #[test]
    fn eliminate_nested_quantifiers() {
        let result = eliminate("?x.?y.x < y");
        assert_eq!(result, "T".parse().unwrap());
    }

    #[test]
    fn quantifier_free_formulas_pass_through() {
        assert_eq!(eliminate("1 < 2"), "1<2".parse().unwrap());
    }
}
