// Property-based tests: strings built by the grammar must validate, and
// guard violations must never come back as mere verdicts.

use chem_parser::parser::{is_syntax_valid, InputError};
use proptest::prelude::*;
use tests::verdict;

/// A legal count suffix: 2-9, or anything from 10 up (no leading zero by
/// construction).
fn count_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (2u32..=9).prop_map(|n| n.to_string()),
        (10u64..=99_999).prop_map(|n| n.to_string()),
    ]
}

/// One uppercase letter plus up to two lowercase letters.
fn symbol_strategy() -> impl Strategy<Value = String> {
    ("[A-Z]", "[a-z]{0,2}").prop_map(|(upper, lower)| format!("{upper}{lower}"))
}

fn unit_strategy() -> impl Strategy<Value = String> {
    (symbol_strategy(), proptest::option::of(count_strategy())).prop_map(
        |(symbol, count)| match count {
            Some(count) => format!("{symbol}{count}"),
            None => symbol,
        },
    )
}

/// Whole formulas: unit sequences at the leaves, counted parenthesized
/// groups stacked up to a few levels deep.
fn formula_strategy() -> impl Strategy<Value = String> {
    let leaf = prop::collection::vec(unit_strategy(), 1..4).prop_map(|units| units.concat());
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(
            prop_oneof![
                unit_strategy(),
                (inner, count_strategy())
                    .prop_map(|(interior, count)| format!("({interior}){count}")),
            ],
            1..4,
        )
        .prop_map(|items| items.concat())
    })
}

proptest! {
    #[test]
    fn generated_formulas_validate(formula in formula_strategy()) {
        prop_assert!(verdict(&formula), "{formula} should be valid");
    }

    #[test]
    fn whitespace_anywhere_is_an_input_error(
        formula in formula_strategy(),
        pos in any::<prop::sample::Index>(),
        ws in prop_oneof![Just(' '), Just('\t'), Just('\n')],
    ) {
        // Generated formulas are pure ASCII, so any byte index is a char
        // boundary
        let mut broken = formula.clone();
        broken.insert(pos.index(formula.len() + 1), ws);
        prop_assert!(
            matches!(
                is_syntax_valid(Some(&broken)),
                Err(InputError::InvalidInput { .. })
            ),
            "{broken:?} should be an input error"
        );
    }

    #[test]
    fn pointless_counts_never_validate(symbol in symbol_strategy(), count in 0u32..=1) {
        prop_assert!(
            !verdict(&format!("{symbol}{count}")),
            "{symbol}{count} should not validate"
        );
    }

    #[test]
    fn leading_zero_counts_never_validate(
        symbol in symbol_strategy(),
        digits in "0[0-9]{1,4}",
    ) {
        prop_assert!(
            !verdict(&format!("{symbol}{digits}")),
            "{symbol}{digits} should not validate"
        );
    }

    #[test]
    fn groups_without_counts_never_validate(formula in formula_strategy()) {
        prop_assert!(
            !verdict(&format!("({formula})")),
            "({formula}) should not validate"
        );
    }
}
