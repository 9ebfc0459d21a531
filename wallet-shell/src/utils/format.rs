//! # Formatting Utilities
//!
//! Display helpers for the wallet control.

/// Characters kept at the start of a truncated address (`0x` + 4 hex digits).
const ADDRESS_HEAD: usize = 6;
/// Characters kept at the end of a truncated address.
const ADDRESS_TAIL: usize = 4;

/// Shorten an account address for display.
///
/// # Examples
///
/// ```rust
/// use wallet_shell::utils::format::truncate_address;
///
/// assert_eq!(
///     truncate_address("0x52908400098527886E0F7030069857D2E4169EE7"),
///     "0x5290...9EE7"
/// );
/// assert_eq!(truncate_address("0xabc"), "0xabc");
/// ```
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= ADDRESS_HEAD + ADDRESS_TAIL {
        return address.to_string();
    }

    let head: String = chars[..ADDRESS_HEAD].iter().collect();
    let tail: String = chars[chars.len() - ADDRESS_TAIL..].iter().collect();
    format!("{head}...{tail}")
}
