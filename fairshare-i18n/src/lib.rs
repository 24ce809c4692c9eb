#![warn(clippy::uninlined_format_args)]

#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const EQUAL_SHARE: &str = "1人あたりの負担額";
    pub const TOTAL_EXPENSE: &str = "合計金額";
    pub const SUMMARY: &str = "内訳";
    pub const SETTLEMENTS: &str = "精算";
    pub const ALL_SETTLED: &str = "精算済みです!";
    pub const RECEIVES: &str = "受取";
    pub const PAYS: &str = "支払";
    pub const IS_SETTLED: &str = "精算済み";
    pub const PAID: &str = "支払額";
    pub const OWED: &str = "負担額";
    pub const INVALID_INPUT: &str = "入力が不正です";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "精算の計算に失敗しました";
    pub const MISSING_PARTICIPANTS: &str =
        "参加者がいません。--paid NAME=AMOUNT か --input FILE を指定してください。";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const EQUAL_SHARE: &str = "Equal share per person";
    pub const TOTAL_EXPENSE: &str = "Total expense";
    pub const SUMMARY: &str = "Summary";
    pub const SETTLEMENTS: &str = "Settlements";
    pub const ALL_SETTLED: &str = "All settled!";
    pub const RECEIVES: &str = "receives";
    pub const PAYS: &str = "pays";
    pub const IS_SETTLED: &str = "is settled";
    pub const PAID: &str = "paid";
    pub const OWED: &str = "owed";
    pub const INVALID_INPUT: &str = "Invalid input";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
    pub const MISSING_PARTICIPANTS: &str =
        "No participants given; use --paid NAME=AMOUNT or --input FILE.";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const EQUAL_SHARE: &str = "Equal share per person";
    pub const TOTAL_EXPENSE: &str = "Total expense";
    pub const SUMMARY: &str = "Summary";
    pub const SETTLEMENTS: &str = "Settlements";
    pub const ALL_SETTLED: &str = "All settled!";
    pub const RECEIVES: &str = "receives";
    pub const PAYS: &str = "pays";
    pub const IS_SETTLED: &str = "is settled";
    pub const PAID: &str = "paid";
    pub const OWED: &str = "owed";
    pub const INVALID_INPUT: &str = "Invalid input";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
    pub const MISSING_PARTICIPANTS: &str =
        "No participants given; use --paid NAME=AMOUNT or --input FILE.";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn transfer_line(
    from: impl std::fmt::Display,
    amount: impl std::fmt::Display,
    to: impl std::fmt::Display,
) -> String {
    format!("{from} が {to} に {amount} を支払う")
}

#[cfg(not(feature = "ja"))]
pub fn transfer_line(
    from: impl std::fmt::Display,
    amount: impl std::fmt::Display,
    to: impl std::fmt::Display,
) -> String {
    format!("{from} {PAYS} {amount} to {to}")
}
