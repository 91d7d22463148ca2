//! Plain in-memory linear program handed to a [`Solver`](crate::domain::solver::Solver).

use std::collections::BTreeMap;

/// Domain of a decision variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Free,
    NonNegative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub id: String,
    pub domain: Domain,
}

/// Sparse linear combination of variables, as `(column, coefficient)` pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    pub terms: Vec<(usize, f64)>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, column: usize, coefficient: f64) -> Self {
        self.terms.push((column, coefficient));
        self
    }

    pub fn add(mut self, other: LinearExpr) -> Self {
        self.terms.extend(other.terms);
        self
    }

    pub fn scale(mut self, factor: f64) -> Self {
        for (_, coefficient) in &mut self.terms {
            *coefficient *= factor;
        }
        self
    }

    /// Terms with repeated columns merged, ordered by column
    pub fn compact(&self) -> Vec<(usize, f64)> {
        let mut merged: BTreeMap<usize, f64> = BTreeMap::new();
        for &(col, coef) in &self.terms {
            *merged.entry(col).or_insert(0.0) += coef;
        }
        merged.into_iter().collect()
    }

    /// Evaluate against a full column vector
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms.iter().map(|&(col, coef)| coef * values[col]).sum()
    }
}

impl FromIterator<(usize, f64)> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        LinearExpr {
            terms: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Le,
    Ge,
    Eq,
}

/// `lhs (<=|>=|==) rhs`, tagged with the rule and index it was generated for,
/// e.g. `transition[AAPL,2]`
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub tag: String,
    pub lhs: LinearExpr,
    pub relation: Relation,
    pub rhs: f64,
}

impl Constraint {
    /// Whether `values` satisfies this constraint within `tolerance`
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.lhs.evaluate(values);
        match self.relation {
            Relation::Le => lhs <= self.rhs + tolerance,
            Relation::Ge => lhs >= self.rhs - tolerance,
            Relation::Eq => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub sense: Sense,
    pub expr: LinearExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    pub variables: Vec<Variable>,
    pub constraints: Vec<Constraint>,
    pub objective: Objective,
}

impl LinearProgram {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Dense objective coefficient per column; repeated terms are summed
    pub fn objective_coefficients(&self) -> Vec<f64> {
        let mut coefficients = vec![0.0; self.variables.len()];
        for &(col, coef) in &self.objective.expr.terms {
            coefficients[col] += coef;
        }
        coefficients
    }

    pub fn constraint(&self, tag: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.tag == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_expr_scale_and_evaluate() {
        let expr = LinearExpr::new().term(0, 1.0).term(2, -2.0).scale(-1.5);
        assert_eq!(expr.terms, vec![(0, -1.5), (2, 3.0)]);
        assert_eq!(expr.evaluate(&[2.0, 100.0, 1.0]), 0.0);
    }

    #[test]
    fn test_linear_expr_compact_merges_columns() {
        let expr = LinearExpr::new().term(3, 1.0).term(1, 2.0).term(3, -0.5);
        assert_eq!(expr.compact(), vec![(1, 2.0), (3, 0.5)]);
    }

    #[test]
    fn test_constraint_is_satisfied_respects_relation() {
        let lhs = LinearExpr::new().term(0, 1.0).term(1, 1.0);
        let le = Constraint {
            tag: "le".to_string(),
            lhs: lhs.clone(),
            relation: Relation::Le,
            rhs: 1.0,
        };
        let eq = Constraint {
            relation: Relation::Eq,
            ..le.clone()
        };

        assert!(le.is_satisfied(&[0.5, 0.5], 1e-9));
        assert!(!le.is_satisfied(&[0.6, 0.5], 1e-9));
        assert!(eq.is_satisfied(&[0.5, 0.5 + 1e-12], 1e-9));
        assert!(!eq.is_satisfied(&[0.5, 0.4], 1e-9));
    }

    #[test]
    fn test_objective_coefficients_sums_repeated_columns() {
        let lp = LinearProgram {
            variables: vec![
                Variable { id: "x".to_string(), domain: Domain::Free },
                Variable { id: "y".to_string(), domain: Domain::NonNegative },
            ],
            constraints: Vec::new(),
            objective: Objective {
                sense: Sense::Maximize,
                expr: LinearExpr::new().term(0, 1.0).term(1, 2.0).term(0, 0.5),
            },
        };
        assert_eq!(lp.objective_coefficients(), vec![1.5, 2.0]);
    }
}
