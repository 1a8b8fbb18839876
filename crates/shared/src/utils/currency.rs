use rust_decimal::Decimal;

/// Formats an amount as whole rupiah, e.g. `Rp 25000`.
pub fn format_rupiah(amount: Decimal) -> String {
    format!("Rp {}", amount.round_dp(0).normalize())
}
