use cosmwasm_std::{
    ContractInfoResponse, Deps, MessageInfo, QueryRequest, StdError, Uint128, WasmQuery,
};
use cw_utils::{must_pay, PaymentError};
use sg_std::NATIVE_DENOM;

use crate::state::Config;
use crate::ContractError;

/// Checks to enforce only the contract owner can call
pub fn only_owner(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

/// Rejects senders that are contracts. A contract sender means the mint is
/// being batched by a wrapper or re-entered from another contract's callback.
pub fn only_origin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let req = QueryRequest::Wasm(WasmQuery::ContractInfo {
        contract_addr: info.sender.to_string(),
    });
    let res: Result<ContractInfoResponse, _> = deps.querier.query(&req);
    if res.is_ok() {
        return Err(ContractError::ContractCaller {});
    }
    Ok(())
}

pub fn mint_price(unit_price: Uint128, quantity: u32) -> Result<Uint128, ContractError> {
    Ok(unit_price
        .checked_mul(Uint128::from(quantity))
        .map_err(StdError::from)?)
}

/// Funds must be exactly `expected` of the native denom, nothing more or less.
/// No funds or only a foreign denom is underpayment; extra denoms on top of
/// the native one are a wrong amount.
pub fn exact_payment(info: &MessageInfo, expected: Uint128) -> Result<Uint128, ContractError> {
    let got = match must_pay(info, NATIVE_DENOM) {
        Ok(got) => got,
        Err(PaymentError::NoFunds {}) | Err(PaymentError::MissingDenom(_)) => Uint128::zero(),
        Err(PaymentError::MultipleDenoms {}) => {
            let got = info
                .funds
                .iter()
                .find(|coin| coin.denom == NATIVE_DENOM)
                .map(|coin| coin.amount)
                .unwrap_or_default();
            return Err(ContractError::IncorrectPayment { got, expected });
        }
        Err(err) => return Err(err.into()),
    };
    if got < expected {
        return Err(ContractError::InsufficientPayment { got, expected });
    }
    if got > expected {
        return Err(ContractError::IncorrectPayment { got, expected });
    }
    Ok(got)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_info};
    use cosmwasm_std::{coin, coins, to_binary, Addr, ContractResult, SystemResult};

    const PRICE: u128 = 70_000_000;

    fn config() -> Config {
        Config {
            owner: Addr::unchecked("owner"),
            unit_price: Uint128::new(PRICE),
            max_supply: 10,
            max_per_tx: 1,
        }
    }

    #[test]
    fn owner_guard() {
        assert!(only_owner(&config(), &mock_info("owner", &[])).is_ok());
        assert_eq!(
            only_owner(&config(), &mock_info("hacker", &[])).unwrap_err(),
            ContractError::Unauthorized {}
        );
    }

    #[test]
    fn origin_guard_allows_accounts() {
        let deps = mock_dependencies();
        assert!(only_origin(deps.as_ref(), &mock_info("user", &[])).is_ok());
    }

    #[test]
    fn origin_guard_rejects_contracts() {
        let mut deps = mock_dependencies();
        deps.querier.update_wasm(|query| match query {
            WasmQuery::ContractInfo { contract_addr } if contract_addr == "exploit" => {
                let res = ContractInfoResponse::new(7, "deployer");
                SystemResult::Ok(ContractResult::Ok(to_binary(&res).unwrap()))
            }
            _ => SystemResult::Err(cosmwasm_std::SystemError::NoSuchContract {
                addr: "unknown".to_string(),
            }),
        });

        assert_eq!(
            only_origin(deps.as_ref(), &mock_info("exploit", &[])).unwrap_err(),
            ContractError::ContractCaller {}
        );
        assert!(only_origin(deps.as_ref(), &mock_info("user", &[])).is_ok());
    }

    #[test]
    fn payment_must_be_exact() {
        let expected = mint_price(Uint128::new(PRICE), 2).unwrap();
        assert_eq!(expected, Uint128::new(2 * PRICE));

        let info = mock_info("user", &coins(2 * PRICE, NATIVE_DENOM));
        assert_eq!(exact_payment(&info, expected).unwrap(), expected);

        let info = mock_info("user", &coins(2 * PRICE - 1, NATIVE_DENOM));
        assert_eq!(
            exact_payment(&info, expected).unwrap_err(),
            ContractError::InsufficientPayment {
                got: Uint128::new(2 * PRICE - 1),
                expected
            }
        );

        let info = mock_info("user", &coins(2 * PRICE + 1, NATIVE_DENOM));
        assert_eq!(
            exact_payment(&info, expected).unwrap_err(),
            ContractError::IncorrectPayment {
                got: Uint128::new(2 * PRICE + 1),
                expected
            }
        );
    }

    #[test]
    fn missing_native_funds_is_underpayment() {
        let expected = Uint128::new(PRICE);
        let underpaid = ContractError::InsufficientPayment {
            got: Uint128::zero(),
            expected,
        };
        assert_eq!(
            exact_payment(&mock_info("user", &[]), expected).unwrap_err(),
            underpaid
        );
        let err = exact_payment(&mock_info("user", &coins(PRICE, "uatom")), expected).unwrap_err();
        assert_eq!(err, underpaid);
        assert_eq!(err.to_string(), "Insufficient Payment");

        let mixed = [coin(PRICE, NATIVE_DENOM), coin(1, "uatom")];
        assert_eq!(
            exact_payment(&mock_info("user", &mixed), expected).unwrap_err(),
            ContractError::IncorrectPayment {
                got: expected,
                expected
            }
        );
    }

    #[test]
    fn price_overflow() {
        assert!(matches!(
            mint_price(Uint128::MAX, 2).unwrap_err(),
            ContractError::Std(_)
        ));
    }
}
