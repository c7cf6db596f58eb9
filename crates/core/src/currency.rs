//! IDR currency formatting.

/// Format an IDR amount the way the storefront renders prices: `Rp`
/// prefix, zero fractional digits, dot-grouped thousands.
///
/// `12000000` becomes `Rp12.000.000`. Amounts are non-negative by model
/// invariant (part prices never go below zero).
pub fn format_idr(amount: i64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(2 + digits.len() + digits.len() / 3);
    out.push_str("Rp");

    for (i, c) in digits.char_indices() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }

    out
}
