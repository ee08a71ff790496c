//! Simulated payment helpers. Nothing here talks to a payment provider.

pub const AUTO_PAYMENT_PROOF: &str = "TEST-AUTO-PAYMENT";

const SIMULATION_PROOF_PREFIX: &str = "DANA-SIMULATION";

pub fn simulated_payment_proof(reference: u32) -> String {
    format!("{SIMULATION_PROOF_PREFIX}-{reference}")
}

/// Last `-` separated segment of the proof, `-` when there is no proof.
/// A proof ending in `-` yields an empty reference.
pub fn short_payment_reference(proof: Option<&str>) -> String {
    proof
        .filter(|p| !p.is_empty())
        .and_then(|p| p.rsplit('-').next())
        .unwrap_or("-")
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid payment link base: {0}")]
pub struct PaymentLinkError(pub String);

/// Deep link that opens the wallet's send-money screen prefilled with the
/// amount and the admin's number.
pub fn payment_link(base: &str, amount: i64, phone: &str) -> Result<String, PaymentLinkError> {
    let amount = amount.to_string();
    reqwest::Url::parse_with_params(base, &[("amount", amount.as_str()), ("phoneNumber", phone)])
        .map(String::from)
        .map_err(|e| PaymentLinkError(e.to_string()))
}
