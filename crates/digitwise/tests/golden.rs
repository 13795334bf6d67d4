//! Golden vectors and acceptance scenarios run through the Calculator.

use digitwise::{BigUnsigned, CalcError, Calculator, CalculatorConfig, ErrorKind, Grouping};
use digitwise_testkit::{all_vectors, OperandFixture};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn unsigned_calculator() -> Calculator {
    Calculator::new(CalculatorConfig {
        grouping: Grouping::default(),
        signed_difference: false,
    })
}

fn operand_error_kind(result: Result<digitwise::Report, CalcError>) -> ErrorKind {
    match result {
        Err(CalcError::Operand(e)) => e.kind(),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(report) => panic!("unexpected success:\n{report}"),
    }
}

#[test]
fn golden_vectors_through_calculator() {
    init_tracing();
    let calculator = unsigned_calculator();

    for vector in all_vectors() {
        let report = calculator.evaluate_text(vector.a, vector.b).unwrap();
        assert_eq!(report.sum_string(), vector.sum, "sum: {}", vector.name);
        assert_eq!(
            report.difference_string(),
            vector.difference,
            "difference: {}",
            vector.name
        );
        assert_eq!(report.product_string(), vector.product, "product: {}", vector.name);
    }
}

#[test]
fn scenario_integer_construction() {
    let a = BigUnsigned::new(1234919212i64).unwrap();
    assert_eq!(a.digits(), vec![1, 2, 3, 4, 9, 1, 9, 2, 1, 2]);
    assert_eq!(a.to_string(), "1,234,919,212");

    let copy = BigUnsigned::new(BigUnsigned::new(1234919212i64).unwrap()).unwrap();
    assert_eq!(copy, a);
}

#[test]
fn scenario_driver_output() {
    init_tracing();
    let report = unsigned_calculator().evaluate_text("999", "1").unwrap();
    assert_eq!(
        report.to_string(),
        "Addition = 1,000\nSubtraction = 998\nMultiplication = 999"
    );

    let report = unsigned_calculator().evaluate_text("500", "499").unwrap();
    assert_eq!(report.difference_string(), "1");

    let report = unsigned_calculator().evaluate_text("123", "456").unwrap();
    assert_eq!(report.product_string(), "56,088");
}

#[test]
fn scenario_signed_difference() {
    let report = Calculator::default().evaluate_text("499", "500").unwrap();
    assert!(report.difference.is_negative());
    assert_eq!(report.difference.magnitude.to_string(), "1");
    assert_eq!(report.difference_string(), "-1");
}

#[test]
fn scenario_rejected_operands() {
    init_tracing();
    let calculator = Calculator::default();

    assert_eq!(
        operand_error_kind(calculator.evaluate_text("", "1")),
        ErrorKind::EmptyInput
    );
    assert_eq!(
        operand_error_kind(calculator.evaluate_text("1", "12x")),
        ErrorKind::InvalidDigitString
    );
    assert_eq!(
        operand_error_kind(calculator.evaluate_text("-7", "1")),
        ErrorKind::Negative
    );
    assert_eq!(
        operand_error_kind(calculator.evaluate_text("0.5", "1")),
        ErrorKind::NotAnInteger
    );
    assert_eq!(
        operand_error_kind(calculator.evaluate_text("[1,10]", "1")),
        ErrorKind::DigitOutOfRange
    );
    assert_eq!(
        operand_error_kind(calculator.evaluate_text("{\"a\":1}", "1")),
        ErrorKind::UnsupportedInputType
    );
}

#[test]
fn scenario_leading_zero_sequence() {
    let report = unsigned_calculator().evaluate_text("[0,0,5]", "0").unwrap();
    assert_eq!(report.a.digits(), vec![5]);
    assert_eq!(report.a.to_string(), "5");
    assert_eq!(report.product_string(), "0");
}

#[test]
fn large_operands_are_consistent() {
    init_tracing();
    let calculator = Calculator::default();
    let mut fixture = OperandFixture::with_seed(99);

    for _ in 0..5 {
        let (a, b) = fixture.pair(120, 80);
        let report = calculator.evaluate(&a, &b);

        assert_eq!(report.sum.subtract(&b), a);
        assert!(!report.difference.is_negative());
        assert_eq!(report.difference.magnitude.add(&b), a);
        assert_eq!(report.product, b.multiply(&a));
    }
}

#[test]
fn shared_operands_across_threads() {
    let mut fixture = OperandFixture::with_seed(5);
    let (a, b) = fixture.pair(60, 60);
    let expected = a.multiply(&b);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| a.multiply(&b))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
