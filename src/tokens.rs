use crate::error::{Error, Result};
use alloy::sol;
use alloy_primitives::{Address, address};

sol! {
    function transfer(address to, uint256 amount) external returns (bool);
    function balanceOf(address account) external view returns (uint256);
}

/// One entry of the token registry. Add new Base tokens here to make them
/// available to every executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub address: Address,
    pub decimals: u8,
}

pub const TOKENS: [TokenInfo; 3] = [
    TokenInfo {
        symbol: "USDC",
        address: address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
        decimals: 6,
    },
    TokenInfo {
        symbol: "USDT",
        address: address!("0xfde4C96c8593536E31F229EA8f37b2ADa2699bb2"),
        decimals: 6,
    },
    TokenInfo {
        symbol: "WETH",
        address: address!("0x4200000000000000000000000000000000000006"),
        decimals: 18,
    },
];

/// Case-insensitive registry lookup. The error carries the full list of
/// supported symbols so the CLI can show recoverable guidance.
pub fn lookup(symbol: &str) -> Result<&'static TokenInfo> {
    let wanted = symbol.to_uppercase();
    TOKENS
        .iter()
        .find(|t| t.symbol == wanted)
        .ok_or_else(|| Error::UnknownToken {
            symbol: symbol.to_string(),
            supported: supported_symbols(),
        })
}

pub fn supported_symbols() -> String {
    TOKENS
        .iter()
        .map(|t| t.symbol)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let lower = lookup("usdc").unwrap();
        let upper = lookup("USDC").unwrap();
        let mixed = lookup("UsDc").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower.decimals, 6);
    }

    #[test]
    fn unknown_token_lists_supported_symbols() {
        let err = lookup("doge").unwrap_err();
        match err {
            Error::UnknownToken { symbol, supported } => {
                assert_eq!(symbol, "doge");
                assert_eq!(supported, "USDC, USDT, WETH");
            }
            other => panic!("expected UnknownToken, got {other:?}"),
        }
    }

    #[test]
    fn registry_symbols_are_unique() {
        let mut symbols: Vec<&str> = TOKENS.iter().map(|t| t.symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), TOKENS.len());
    }
}
