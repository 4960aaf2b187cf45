//! Deposit request validation shared by the deposit handlers and the preview query.

use cosmwasm_std::{Binary, Uint128};
use gateway_common::DepositBatch;

use crate::error::ContractError;

/// A deposit request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDeposit {
    pub batch: DepositBatch,
    /// Minimum funding required to accept the deposit
    pub total: Uint128,
}

/// Validate a deposit request and compute its checked total.
///
/// Checks run in order: equal lengths, overflow-free total, 32-byte
/// recipients. Nothing here touches funds.
pub fn validate_deposit(
    recipients: &[Binary],
    amounts: &[Uint128],
    aux_data: &Binary,
) -> Result<ValidatedDeposit, ContractError> {
    if recipients.len() != amounts.len() {
        return Err(ContractError::LengthMismatch {
            recipients: recipients.len(),
            amounts: amounts.len(),
        });
    }

    let total = checked_total(amounts)?;

    let recipients = recipients
        .iter()
        .enumerate()
        .map(|(index, recipient)| {
            <[u8; 32]>::try_from(recipient.as_slice()).map_err(|_| {
                ContractError::InvalidRecipient {
                    index,
                    len: recipient.len(),
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedDeposit {
        batch: DepositBatch {
            recipients,
            amounts: amounts.to_vec(),
            aux_data: aux_data.to_vec(),
        },
        total,
    })
}

/// Sum amounts, failing on overflow instead of wrapping.
pub fn checked_total(amounts: &[Uint128]) -> Result<Uint128, ContractError> {
    amounts
        .iter()
        .try_fold(Uint128::zero(), |acc, amount| acc.checked_add(*amount))
        .map_err(|_| ContractError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient(byte: u8) -> Binary {
        Binary::from(vec![byte; 32])
    }

    #[test]
    fn test_valid_request() {
        let validated = validate_deposit(
            &[recipient(0xA1), recipient(0xB2)],
            &[Uint128::new(10), Uint128::new(20)],
            &Binary::from(b"memo".to_vec()),
        )
        .unwrap();

        assert_eq!(validated.total, Uint128::new(30));
        assert_eq!(validated.batch.recipients, vec![[0xA1; 32], [0xB2; 32]]);
        assert_eq!(validated.batch.aux_data, b"memo".to_vec());
    }

    #[test]
    fn test_empty_request_totals_zero() {
        let validated = validate_deposit(&[], &[], &Binary::default()).unwrap();
        assert_eq!(validated.total, Uint128::zero());
        assert!(validated.batch.recipients.is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let err = validate_deposit(
            &[recipient(1)],
            &[Uint128::new(1), Uint128::new(2)],
            &Binary::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ContractError::LengthMismatch {
                recipients: 1,
                amounts: 2
            }
        );
    }

    #[test]
    fn test_overflow_detected() {
        assert_eq!(
            checked_total(&[Uint128::MAX, Uint128::new(1)]).unwrap_err(),
            ContractError::ArithmeticOverflow
        );
        assert_eq!(
            checked_total(&[Uint128::MAX, Uint128::zero()]).unwrap(),
            Uint128::MAX
        );
    }

    /// Overflow wins over a malformed recipient: the total is checked first
    #[test]
    fn test_overflow_reported_before_recipient_width() {
        let err = validate_deposit(
            &[Binary::from(vec![1u8; 20]), recipient(2)],
            &[Uint128::MAX, Uint128::MAX],
            &Binary::default(),
        )
        .unwrap_err();

        assert_eq!(err, ContractError::ArithmeticOverflow);
    }

    #[test]
    fn test_recipient_width() {
        let err = validate_deposit(
            &[recipient(1), Binary::from(vec![2u8; 20])],
            &[Uint128::new(1), Uint128::new(2)],
            &Binary::default(),
        )
        .unwrap_err();

        assert_eq!(err, ContractError::InvalidRecipient { index: 1, len: 20 });
    }
}
