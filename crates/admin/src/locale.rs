//! Display strings for the back-office locales.

use serde::{Deserialize, Serialize};

use magnet_kit_core::{OrderStatus, ReviewStatus};

const MONTHS_PT: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Language used for chart labels and status names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese.
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English.
    #[serde(rename = "en")]
    En,
}

impl Locale {
    const fn months(self) -> &'static [&'static str; 12] {
        match self {
            Self::PtBr => &MONTHS_PT,
            Self::En => &MONTHS_EN,
        }
    }

    /// Full month name for `month` in `1..=12`; empty for anything else.
    #[must_use]
    pub fn month_name(self, month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.months().get(i))
            .copied()
            .unwrap_or("")
    }

    /// Three-letter month abbreviation with the first letter capitalized.
    #[must_use]
    pub fn month_abbr(self, month: u32) -> &'static str {
        let name = self.month_name(month);
        name.char_indices()
            .nth(3)
            .and_then(|(end, _)| name.get(..end))
            .unwrap_or(name)
    }

    /// Choose between a Portuguese and an English string.
    #[must_use]
    pub const fn pick(self, pt: &'static str, en: &'static str) -> &'static str {
        match self {
            Self::PtBr => pt,
            Self::En => en,
        }
    }

    /// Word joining the two ends of a date span.
    #[must_use]
    pub const fn range_joiner(self) -> &'static str {
        match self {
            Self::PtBr => "a",
            Self::En => "to",
        }
    }

    /// Human-readable order status.
    #[must_use]
    pub const fn order_status(self, status: OrderStatus) -> &'static str {
        match (self, status) {
            (Self::PtBr, OrderStatus::Pending) => "Pendente",
            (Self::PtBr, OrderStatus::Production) => "Em produção",
            (Self::PtBr, OrderStatus::Shipped) => "Enviado",
            (Self::PtBr, OrderStatus::Delivered) => "Entregue",
            (Self::PtBr, OrderStatus::Cancelled) => "Cancelado",
            (Self::En, OrderStatus::Pending) => "Pending",
            (Self::En, OrderStatus::Production) => "In production",
            (Self::En, OrderStatus::Shipped) => "Shipped",
            (Self::En, OrderStatus::Delivered) => "Delivered",
            (Self::En, OrderStatus::Cancelled) => "Cancelled",
        }
    }

    /// Human-readable review status.
    #[must_use]
    pub const fn review_status(self, status: ReviewStatus) -> &'static str {
        match (self, status) {
            (Self::PtBr, ReviewStatus::Pending) => "Pendente",
            (Self::PtBr, ReviewStatus::Approved) => "Aprovada",
            (Self::PtBr, ReviewStatus::Rejected) => "Rejeitada",
            (Self::En, ReviewStatus::Pending) => "Pending",
            (Self::En, ReviewStatus::Approved) => "Approved",
            (Self::En, ReviewStatus::Rejected) => "Rejected",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            _ => Err(format!("unsupported locale: {s}")),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PtBr => write!(f, "pt-BR"),
            Self::En => write!(f, "en"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_abbr_handles_multibyte_names() {
        assert_eq!(Locale::PtBr.month_abbr(3), "Mar");
        assert_eq!(Locale::PtBr.month_abbr(2), "Fev");
        assert_eq!(Locale::En.month_abbr(12), "Dec");
    }

    #[test]
    fn test_month_name_out_of_range_is_empty() {
        assert_eq!(Locale::PtBr.month_name(0), "");
        assert_eq!(Locale::En.month_name(13), "");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("pt_BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }
}
