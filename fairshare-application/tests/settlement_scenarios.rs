use fairshare_application::{
    PlanningError, RawParticipant, SplitError, SplitMode, SplitProcessor, SplitRequest,
    TransferPlanner, parse_participants, parse_total,
};
use fairshare_domain::{
    BalanceCalculator, Balances, InvalidInputError, Money, SettlementPlanner, Transfer,
};
use proptest::prelude::*;
use rstest::rstest;

struct GreedyPlanner;

impl TransferPlanner for GreedyPlanner {
    fn plan<'a>(&self, balances: &Balances<'a>) -> Result<Vec<Transfer<'a>>, PlanningError> {
        Ok(SettlementPlanner::default().plan(balances)?)
    }
}

fn request(total: &str, raw: &[(&str, &str)]) -> Result<SplitRequest, InvalidInputError> {
    let raw: Vec<RawParticipant> = raw
        .iter()
        .map(|&(name, paid)| RawParticipant { name, paid })
        .collect();
    Ok(SplitRequest {
        participants: parse_participants(&raw)?,
        mode: SplitMode::Equal {
            total: parse_total(total)?,
        },
    })
}

fn transfers(expected: &[(&'static str, &'static str, i64)]) -> Vec<Transfer<'static>> {
    expected
        .iter()
        .map(|&(from, to, amount)| Transfer {
            from,
            to,
            amount: Money::from_i64(amount),
        })
        .collect()
}

#[rstest]
#[case::one_debtor_one_creditor(
    "2000",
    &[("Alice", "800"), ("Bob", "500"), ("Charlie", "500"), ("David", "200")],
    transfers(&[("David", "Alice", 300)])
)]
#[case::everyone_paid_their_share(
    "300",
    &[("A", "100"), ("B", "100"), ("C", "100")],
    transfers(&[])
)]
#[case::single_large_creditor(
    "400",
    &[("Host", "400"), ("A", "0"), ("B", "0"), ("C", "0")],
    transfers(&[("A", "Host", 100), ("B", "Host", 100), ("C", "Host", 100)])
)]
fn settles_scenarios(
    #[case] total: &str,
    #[case] raw: &[(&str, &str)],
    #[case] expected: Vec<Transfer<'static>>,
) {
    let request = request(total, raw).expect("valid input");
    let processor = SplitProcessor::new(BalanceCalculator::default(), &GreedyPlanner);

    let report = processor.process(&request).expect("settlement succeeds");

    assert_eq!(report.transfers, expected);
    assert!(report.transfers.len() < request.participants.len());
}

#[rstest]
#[case::zero_total("0", &[("A", "0")], InvalidInputError::NonPositiveTotal(Money::ZERO))]
#[case::no_participants("100", &[], InvalidInputError::NoParticipants)]
#[case::sub_unit_paid(
    "0.005",
    &[("A", "0.005")],
    InvalidInputError::FractionalAmount { name: "A".into(), amount: Money::new(5, 3), scale: 2 }
)]
#[case::sub_unit_paid_among_others(
    "10.005",
    &[("A", "10.004"), ("B", "0.001"), ("C", "0")],
    InvalidInputError::FractionalAmount { name: "A".into(), amount: Money::new(10_004, 3), scale: 2 }
)]
#[case::amount_at_decimal_limit(
    "1",
    &[("A", "79228162514264337593543950335"), ("B", "79228162514264337593543950335")],
    InvalidInputError::AmountTooLarge {
        name: "A".into(),
        amount: Money::MAX,
        max: Money::from_i64(1_000_000_000_000_000),
    }
)]
fn rejects_invalid_runs(
    #[case] total: &str,
    #[case] raw: &[(&str, &str)],
    #[case] expected: InvalidInputError,
) {
    let request = request(total, raw).expect("raw input parses");
    let processor = SplitProcessor::new(BalanceCalculator::default(), &GreedyPlanner);

    assert_eq!(
        processor.process(&request),
        Err(SplitError::InvalidInput(expected))
    );
}

#[test]
fn rejects_non_numeric_amounts_before_calculation() {
    let err = request("100", &[("A", "100"), ("B", "ten")]).unwrap_err();

    assert_eq!(
        err,
        InvalidInputError::NonNumericAmount {
            name: "B".into(),
            raw: "ten".into(),
        }
    );
}

proptest! {
    #[test]
    fn reported_statuses_match_balances(
        paid_cents in prop::collection::vec(0i64..=100_000, 1..=6),
    ) {
        let names = ["A", "B", "C", "D", "E", "F"];
        let total_cents: i64 = paid_cents.iter().sum();
        prop_assume!(total_cents > 0);

        let request = SplitRequest {
            participants: paid_cents
                .iter()
                .zip(names)
                .map(|(&cents, name)| fairshare_domain::Participant::new(name, Money::new(cents, 2)))
                .collect(),
            mode: SplitMode::Equal { total: Money::new(total_cents, 2) },
        };
        let processor = SplitProcessor::new(BalanceCalculator::default(), &GreedyPlanner);

        let report = processor.process(&request).expect("settlement succeeds");

        for person in &report.people {
            prop_assert_eq!(person.status.amount(), person.balance.abs());
            prop_assert_eq!(person.balance, person.paid - person.owed);
        }
        prop_assert!(report.transfers.len() < request.participants.len());
    }
}
