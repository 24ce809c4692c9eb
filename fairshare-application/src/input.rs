use fairshare_domain::{InvalidInputError, Money, Participant};

/// Unvalidated name and amount text as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawParticipant<'a> {
    pub name: &'a str,
    pub paid: &'a str,
}

pub fn parse_participants(
    raw: &[RawParticipant<'_>],
) -> Result<Vec<Participant>, InvalidInputError> {
    raw.iter()
        .enumerate()
        .map(|(idx, entry)| {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(InvalidInputError::MissingName { position: idx + 1 });
            }
            let paid = entry
                .paid
                .parse::<Money>()
                .map_err(|err| InvalidInputError::NonNumericAmount {
                    name: name.to_owned(),
                    raw: err.raw,
                })?;
            Ok(Participant::new(name, paid))
        })
        .collect()
}

pub fn parse_total(raw: &str) -> Result<Money, InvalidInputError> {
    raw.parse::<Money>()
        .map_err(|err| InvalidInputError::NonNumericTotal { raw: err.raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn trims_names_and_parses_amounts() {
        let raw = [
            RawParticipant {
                name: " Alice ",
                paid: "800",
            },
            RawParticipant {
                name: "Bob",
                paid: "12.50",
            },
        ];

        let participants = parse_participants(&raw).expect("valid input");

        assert_eq!(
            participants,
            vec![
                Participant::new("Alice", Money::from_i64(800)),
                Participant::new("Bob", Money::new(1250, 2)),
            ]
        );
    }

    #[rstest]
    #[case::non_numeric(
        RawParticipant { name: "Alice", paid: "eight hundred" },
        InvalidInputError::NonNumericAmount { name: "Alice".into(), raw: "eight hundred".into() }
    )]
    #[case::blank_name(
        RawParticipant { name: "   ", paid: "10" },
        InvalidInputError::MissingName { position: 1 }
    )]
    fn rejects_malformed_entries(
        #[case] entry: RawParticipant<'static>,
        #[case] expected: InvalidInputError,
    ) {
        assert_eq!(parse_participants(&[entry]), Err(expected));
    }

    #[rstest]
    #[case::number("2000", Ok(Money::from_i64(2000)))]
    #[case::text("lots", Err(InvalidInputError::NonNumericTotal { raw: "lots".into() }))]
    fn parses_total(#[case] raw: &str, #[case] expected: Result<Money, InvalidInputError>) {
        assert_eq!(parse_total(raw), expected);
    }
}
