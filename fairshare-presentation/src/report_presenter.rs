use std::fmt::Write as _;

use fairshare_application::{PersonSummary, SettlementReport};
use fairshare_domain::{BalanceStatus, Money};
use fairshare_i18n as i18n;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Formats a settlement report for the terminal.
#[derive(Clone, Debug)]
pub struct ReportPresenter {
    symbol: String,
    scale: usize,
}

impl Default for ReportPresenter {
    fn default() -> Self {
        Self::new("₹", 2)
    }
}

impl ReportPresenter {
    pub fn new(symbol: impl Into<String>, scale: u32) -> Self {
        Self {
            symbol: symbol.into(),
            scale: scale as usize,
        }
    }

    pub fn render(
        &self,
        report: &SettlementReport<'_>,
        format: ReportFormat,
    ) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(self.render_text(report)),
            ReportFormat::Json => Self::render_json(report),
        }
    }

    pub fn render_text(&self, report: &SettlementReport<'_>) -> String {
        let mut reply = String::with_capacity(256);

        match report.equal_share {
            Some(share) => {
                let _ = writeln!(reply, "{}: {}", i18n::EQUAL_SHARE, self.money(share));
            }
            None => {
                let _ = writeln!(reply, "{}: {}", i18n::TOTAL_EXPENSE, self.money(report.total));
            }
        }

        let _ = writeln!(reply, "\n{}:", i18n::SUMMARY);
        for person in &report.people {
            let _ = writeln!(reply, "• {}", self.person_line(person, report.equal_share.is_none()));
        }

        let _ = writeln!(reply, "\n{}:", i18n::SETTLEMENTS);
        if report.is_settled() {
            let _ = writeln!(reply, "{}", i18n::ALL_SETTLED);
        }
        for transfer in &report.transfers {
            let _ = writeln!(
                reply,
                "→ {}",
                i18n::transfer_line(transfer.from, self.money(transfer.amount), transfer.to)
            );
        }

        reply
    }

    pub fn render_json(report: &SettlementReport<'_>) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    fn person_line(&self, person: &PersonSummary<'_>, show_owed: bool) -> String {
        let status = match person.status {
            BalanceStatus::Receives(_) => i18n::RECEIVES,
            BalanceStatus::Pays(_) => i18n::PAYS,
            BalanceStatus::Settled => i18n::IS_SETTLED,
        };
        let paid = self.money(person.paid);
        let amount = self.money(person.status.amount());
        if show_owed {
            format!(
                "{} {} {paid} | {} {} → {status} {amount}",
                person.name,
                i18n::PAID,
                i18n::OWED,
                self.money(person.owed)
            )
        } else {
            format!("{} {} {paid} → {status} {amount}", person.name, i18n::PAID)
        }
    }

    fn money(&self, amount: Money) -> String {
        format!("{}{amount:.prec$}", self.symbol, prec = self.scale)
    }
}
