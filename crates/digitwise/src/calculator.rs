//! The Calculator: evaluates sum, difference and product of two operands.

use std::cmp::Ordering;
use std::fmt;

use digitwise_core::{BigUnsigned, Grouping, NumberInput};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::value::parse_operand;

/// Configuration for the Calculator.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Digit grouping used when rendering results.
    pub grouping: Grouping,
    /// Prefix the difference with `-` when the second operand is larger.
    /// When off, only the magnitude is shown.
    pub signed_difference: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            grouping: Grouping::default(),
            signed_difference: true,
        }
    }
}

/// The difference of two operands: the engine's unsigned magnitude tagged
/// with the direction of the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// How the first operand compares to the second.
    pub ordering: Ordering,
    /// `|a - b|`.
    pub magnitude: BigUnsigned,
}

impl Difference {
    /// Compute `a - b` as an ordering plus magnitude.
    pub fn between(a: &BigUnsigned, b: &BigUnsigned) -> Self {
        Self {
            ordering: BigUnsigned::compare_magnitude(a, b),
            magnitude: a.subtract(b),
        }
    }

    /// Whether `a - b` is below zero.
    pub fn is_negative(&self) -> bool {
        self.ordering == Ordering::Less
    }

    /// Render the difference, with a leading `-` if `signed` and negative.
    pub fn render(&self, grouping: &Grouping, signed: bool) -> String {
        let magnitude = self.magnitude.to_grouped_string(grouping);
        if signed && self.is_negative() {
            format!("-{magnitude}")
        } else {
            magnitude
        }
    }
}

/// Results of one evaluation.
#[derive(Debug, Clone)]
pub struct Report {
    pub a: BigUnsigned,
    pub b: BigUnsigned,
    pub sum: BigUnsigned,
    pub difference: Difference,
    pub product: BigUnsigned,
    grouping: Grouping,
    signed_difference: bool,
}

/// A report rendered to strings, as emitted in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    pub a: String,
    pub b: String,
    pub sum: String,
    pub difference: String,
    pub product: String,
}

impl Report {
    /// The rendered sum.
    pub fn sum_string(&self) -> String {
        self.sum.to_grouped_string(&self.grouping)
    }

    /// The rendered difference, signed per configuration.
    pub fn difference_string(&self) -> String {
        self.difference.render(&self.grouping, self.signed_difference)
    }

    /// The rendered product.
    pub fn product_string(&self) -> String {
        self.product.to_grouped_string(&self.grouping)
    }

    /// Render every field.
    pub fn rendered(&self) -> RenderedReport {
        RenderedReport {
            a: self.a.to_grouped_string(&self.grouping),
            b: self.b.to_grouped_string(&self.grouping),
            sum: self.sum_string(),
            difference: self.difference_string(),
            product: self.product_string(),
        }
    }

    /// Encode the rendered report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.rendered())?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Addition = {}", self.sum_string())?;
        writeln!(f, "Subtraction = {}", self.difference_string())?;
        write!(f, "Multiplication = {}", self.product_string())
    }
}

/// Evaluates the three arithmetic operations for pairs of operands.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Create a new calculator.
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Build an operand, logging rejected input.
    pub fn operand(&self, input: impl Into<NumberInput>) -> Result<BigUnsigned> {
        let input = input.into();
        BigUnsigned::new(input.clone()).map_err(|e| {
            warn!("Rejected operand {:?}: {}", input, e);
            e.into()
        })
    }

    /// Evaluate two numbers.
    pub fn evaluate(&self, a: &BigUnsigned, b: &BigUnsigned) -> Report {
        debug!(a_digits = a.len(), b_digits = b.len(), "evaluating");

        let sum = a.add(b);
        let difference = Difference::between(a, b);
        let product = a.multiply(b);

        debug!(
            sum_digits = sum.len(),
            difference_digits = difference.magnitude.len(),
            product_digits = product.len(),
            negative = difference.is_negative(),
            "evaluated"
        );

        Report {
            a: a.clone(),
            b: b.clone(),
            sum,
            difference,
            product,
            grouping: self.config.grouping,
            signed_difference: self.config.signed_difference,
        }
    }

    /// Build both operands and evaluate them.
    pub fn evaluate_inputs(
        &self,
        a: impl Into<NumberInput>,
        b: impl Into<NumberInput>,
    ) -> Result<Report> {
        let a = self.operand(a)?;
        let b = self.operand(b)?;
        Ok(self.evaluate(&a, &b))
    }

    /// Parse both operands from text and evaluate them.
    ///
    /// See [`parse_operand`] for the accepted forms.
    pub fn evaluate_text(&self, a: &str, b: &str) -> Result<Report> {
        let a = self.operand_text(a)?;
        let b = self.operand_text(b)?;
        Ok(self.evaluate(&a, &b))
    }

    fn operand_text(&self, text: &str) -> Result<BigUnsigned> {
        match parse_operand(text) {
            Ok(input) => self.operand(input),
            Err(e) => {
                warn!("Rejected operand {:?}: {}", text, e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use digitwise_core::ErrorKind;

    fn n(s: &str) -> BigUnsigned {
        s.parse().unwrap()
    }

    #[test]
    fn test_difference_sign() {
        let d = Difference::between(&n("3"), &n("1000"));
        assert!(d.is_negative());
        assert_eq!(d.magnitude, n("997"));
        assert_eq!(d.render(&Grouping::default(), true), "-997");
        assert_eq!(d.render(&Grouping::default(), false), "997");

        let d = Difference::between(&n("5"), &n("5"));
        assert_eq!(d.ordering, Ordering::Equal);
        assert_eq!(d.render(&Grouping::default(), true), "0");
    }

    #[test]
    fn test_report_lines() {
        let calc = Calculator::default();
        let report = calc.evaluate_text("1234919212", "999").unwrap();
        assert_eq!(
            report.to_string(),
            "Addition = 1,234,920,211\n\
             Subtraction = 1,234,918,213\n\
             Multiplication = 1,233,684,292,788"
        );
    }

    #[test]
    fn test_unsigned_configuration() {
        let calc = Calculator::new(CalculatorConfig {
            grouping: Grouping::new('_', 3),
            signed_difference: false,
        });
        let report = calc.evaluate_inputs(7i64, "1000").unwrap();
        assert_eq!(report.sum_string(), "1_007");
        assert_eq!(report.difference_string(), "993");
        assert_eq!(report.product_string(), "7_000");
    }

    #[test]
    fn test_json_report() {
        let calc = Calculator::default();
        let report = calc.evaluate_text("7", "1000").unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["sum"], "1,007");
        assert_eq!(value["difference"], "-993");
        assert_eq!(value["product"], "7,000");
    }

    #[test]
    fn test_rejected_operand() {
        let calc = Calculator::default();
        match calc.evaluate_text("12", "") {
            Err(CalcError::Operand(e)) => assert_eq!(e.kind(), ErrorKind::EmptyInput),
            other => panic!("expected operand error, got {:?}", other.map(|r| r.rendered())),
        }
    }
}
