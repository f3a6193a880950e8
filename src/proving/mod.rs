use {
    crate::{
        constraints::ConstraintError,
        eliminating::Eliminator,
        evaluating::evaluate,
        normalizing::{
            close::close,
            linearize::{linearize, LinearizeError},
            pnf::pnf,
        },
        parsing::fol::Rule,
        syntax_tree::fol::Formula,
    },
    std::fmt::{self, Display, Formatter},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum ProvingError {
    #[error("could not parse `{input}` as a formula")]
    InvalidFormula {
        input: String,
        #[source]
        source: Box<pest::error::Error<Rule>>,
    },
    #[error(transparent)]
    Linearize(#[from] LinearizeError),
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// The stages a formula passes on its way to a verdict.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proof {
    pub formula: Formula,
    pub closed_prenex: Formula,
    pub quantifier_free: Formula,
    pub is_theorem: bool,
}

impl Display for Proof {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== [PROOF START] ==========")?;
        writeln!(f, "[FORMULA] {}", self.formula)?;
        writeln!(f, "[CLOSED PRENEX] {}", self.closed_prenex)?;
        writeln!(f, "[QUANTIFIER FREE FORM] {}", self.quantifier_free)?;
        writeln!(
            f,
            "[RESULT] Formula is {}a theorem",
            if self.is_theorem { "" } else { "not " }
        )?;
        writeln!(f, "=========== [PROOF END] ===========")
    }
}

/// A decision procedure for closed formulas of linear arithmetic over the
/// rationals.
///
/// A formula with free variables is decided in its existential closure.
#[derive(Clone, Copy, Debug, Default)]
pub struct Prover {
    /// Upper bound on the number of constraints a single projection step may
    /// produce before the proof is abandoned.
    pub limit: Option<usize>,
}

impl Prover {
    pub fn new() -> Prover {
        Prover::default()
    }

    pub fn prove(&self, input: &str) -> Result<Proof, ProvingError> {
        let input = input.trim();
        let formula: Formula = input
            .parse()
            .map_err(|source| ProvingError::InvalidFormula {
                input: input.to_string(),
                source: Box::new(source),
            })?;
        let formula = linearize(formula)?;

        let closed_prenex = close(pnf(formula.clone()));

        let mut eliminator = Eliminator::new(self.limit);
        let quantifier_free = eliminator.eliminate(closed_prenex.clone())?;

        let is_theorem = evaluate(&quantifier_free);

        Ok(Proof {
            formula,
            closed_prenex,
            quantifier_free,
            is_theorem,
        })
    }

    pub fn is_theorem(&self, input: &str) -> Result<bool, ProvingError> {
        Ok(self.prove(input)?.is_theorem)
    }
}

#[cfg(test)]
mod tests {
    use super::{Prover, ProvingError};

    #[test]
    fn prove_simple_theorems() {
        let prover = Prover::new();
        for (input, target) in [
            ("1 < 2", true),
            ("?x.x > 0 & x < 1", true),
            ("?x.x > 0 & x < 0", false),
            ("!x.?y.x < y", true),
            ("?y.!x.x < y", false),
            ("!x.x < x + 1", true),
        ] {
            assert_eq!(
                prover.is_theorem(input).unwrap(),
                target,
                "proving `{input}`"
            );
        }
    }

    #[test]
    fn proofs_carry_their_stages() {
        let proof = Prover::new().prove("?x.x > 0 & x < 1").unwrap();
        assert_eq!(proof.formula, "?x.x > 0 & x < 1".parse().unwrap());
        assert_eq!(proof.closed_prenex, "?x.x > 0 & x < 1".parse().unwrap());
        assert_eq!(proof.quantifier_free, "0<1".parse().unwrap());
        assert!(proof.is_theorem);
    }

    #[test]
    fn parse_failures_are_surfaced() {
        assert!(matches!(
            Prover::new().is_theorem("x <"),
            Err(ProvingError::InvalidFormula { .. })
        ));
    }

    #[test]
    fn nonlinear_formulas_are_rejected() {
        assert!(matches!(
            Prover::new().is_theorem("?x.x*x > 0"),
            Err(ProvingError::Linearize(_))
        ));
    }
}
