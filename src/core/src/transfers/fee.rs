use crate::error::{MapError, MapResult};
use serde::Serialize;

const LOAN_FEE: &str = "Leihe";
const LOAN_END_FEE: &str = "Leih-Ende";
const LOAN_FEE_MARKERS: [&str; 2] = ["Leihgebühr", "Leihgeb√ºhr"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeKind {
    LoanStart,
    LoanEnd,
    Other,
}

impl FeeKind {
    pub fn classify(fee: Option<&str>) -> MapResult<FeeKind> {
        let fee = fee.ok_or_else(|| {
            MapError::InvalidInput("transfer fee is missing".to_string())
        })?;

        if fee == LOAN_FEE || LOAN_FEE_MARKERS.iter().any(|marker| fee.contains(marker)) {
            return Ok(FeeKind::LoanStart);
        }

        if fee == LOAN_END_FEE {
            return Ok(FeeKind::LoanEnd);
        }

        Ok(FeeKind::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_start() {
        assert_eq!(FeeKind::classify(Some("Leihe")), Ok(FeeKind::LoanStart));
        assert_eq!(
            FeeKind::classify(Some("Leihgebühr:500 Tsd. €")),
            Ok(FeeKind::LoanStart)
        );
        assert_eq!(
            FeeKind::classify(Some("Leihgeb√ºhr:1,00 Mio. €")),
            Ok(FeeKind::LoanStart)
        );
    }

    #[test]
    fn test_loan_end() {
        assert_eq!(FeeKind::classify(Some("Leih-Ende")), Ok(FeeKind::LoanEnd));
    }

    #[test]
    fn test_other_fees() {
        assert_eq!(FeeKind::classify(Some("12,50 Mio. €")), Ok(FeeKind::Other));
        assert_eq!(FeeKind::classify(Some("ablösefrei")), Ok(FeeKind::Other));
        assert_eq!(FeeKind::classify(Some("")), Ok(FeeKind::Other));
        assert_eq!(FeeKind::classify(Some("leihe")), Ok(FeeKind::Other));
    }

    #[test]
    fn test_missing_fee_is_invalid() {
        assert!(matches!(
            FeeKind::classify(None),
            Err(MapError::InvalidInput(_))
        ));
    }
}
