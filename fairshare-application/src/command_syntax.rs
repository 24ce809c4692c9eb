use crate::{error::SyntaxError, input::RawParticipant};
use fairshare_domain::{Item, Money};

/// Splits `NAME=AMOUNT` at the last `=`.
pub fn parse_assignment(input: &str) -> Result<RawParticipant<'_>, SyntaxError> {
    let Some((name, paid)) = input.rsplit_once('=') else {
        return Err(SyntaxError::MissingAmount(input.to_owned()));
    };
    Ok(RawParticipant { name, paid })
}

/// Parses `ITEM=AMOUNT:NAME,NAME,...`.
pub fn parse_item(input: &str) -> Result<Item, SyntaxError> {
    let Some((name, rest)) = input.split_once('=') else {
        return Err(SyntaxError::MissingAmount(input.to_owned()));
    };
    let Some((amount, members)) = rest.split_once(':') else {
        return Err(SyntaxError::MissingItemParticipants(input.to_owned()));
    };

    let name = name.trim();
    let amount = amount
        .parse::<Money>()
        .map_err(|err| SyntaxError::InvalidItemAmount {
            item: name.to_owned(),
            raw: err.raw,
        })?;
    let participants = members
        .split(',')
        .map(str::trim)
        .filter(|member| !member.is_empty())
        .map(str::to_owned)
        .collect();

    Ok(Item {
        name: name.to_owned(),
        amount,
        participants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Alice=800", "Alice", "800")]
    #[case("Mary Ann=12.5", "Mary Ann", "12.5")]
    #[case("a=b=3", "a=b", "3")]
    #[case("Bob=", "Bob", "")]
    fn splits_assignments(#[case] input: &str, #[case] name: &str, #[case] paid: &str) {
        assert_eq!(parse_assignment(input), Ok(RawParticipant { name, paid }));
    }

    #[test]
    fn rejects_assignment_without_amount() {
        assert_eq!(
            parse_assignment("Alice"),
            Err(SyntaxError::MissingAmount("Alice".into()))
        );
    }

    #[test]
    fn parses_items() {
        let item = parse_item("Dinner=1200:Alice, Bob,,Charlie").expect("valid item");

        assert_eq!(
            item,
            Item {
                name: "Dinner".into(),
                amount: Money::from_i64(1200),
                participants: vec!["Alice".into(), "Bob".into(), "Charlie".into()],
            }
        );
    }

    #[rstest]
    #[case::no_amount("Dinner", SyntaxError::MissingAmount("Dinner".into()))]
    #[case::no_members("Dinner=1200", SyntaxError::MissingItemParticipants("Dinner=1200".into()))]
    #[case::bad_amount(
        "Dinner=lots:Alice",
        SyntaxError::InvalidItemAmount { item: "Dinner".into(), raw: "lots".into() }
    )]
    fn rejects_malformed_items(#[case] input: &str, #[case] expected: SyntaxError) {
        assert_eq!(parse_item(input), Err(expected));
    }
}
