use lineq_ast::{Operation, Target};
use lineq_engine::{apply, is_balanced, simplify_side, EQUIVALENCE_EPSILON};
use proptest::prelude::*;

mod strategies;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn add_then_subtract_restores_values(eq in strategies::arb_equation(), v in -100i32..100) {
        let v = v as f64 / 4.0;
        let added = apply(&eq, &Operation::add(v, Target::Both)).unwrap();
        let back = apply(&added, &Operation::subtract(v, Target::Both)).unwrap();

        let (l0, r0) = eq.evaluate_at_solution();
        let left = simplify_side(&back.left).evaluate(eq.solution);
        let right = simplify_side(&back.right).evaluate(eq.solution);
        prop_assert!((left - l0).abs() < EQUIVALENCE_EPSILON);
        prop_assert!((right - r0).abs() < EQUIVALENCE_EPSILON);
    }

    #[test]
    fn both_sides_operations_keep_balance(
        eq in strategies::arb_balanced_equation(),
        v in prop_oneof![-12i32..-1, 1i32..12],
    ) {
        prop_assume!(is_balanced(&eq));
        let v = v as f64;
        for op in [
            Operation::add(v, Target::Both),
            Operation::subtract(v, Target::Both),
            Operation::multiply(v, Target::Both),
            Operation::divide(v, Target::Both),
            Operation::simplify(Target::Both),
        ] {
            let next = apply(&eq, &op).unwrap();
            prop_assert!(is_balanced(&next), "{} broke {}", op, eq);
            prop_assert_eq!(next.solution, eq.solution);
        }
    }

    #[test]
    fn simplify_is_idempotent(side in strategies::arb_side()) {
        let once = simplify_side(&side);
        prop_assert_eq!(simplify_side(&once), once);
    }

    #[test]
    fn simplify_preserves_value(side in strategies::arb_side(), x in -10i32..10) {
        let x = x as f64;
        let once = simplify_side(&side);
        prop_assert!((once.evaluate(x) - side.evaluate(x)).abs() < 1e-9);
        prop_assert!(once.len() <= 2);
    }
}
