/// Source of the random numbers used in pricing and simulated payments.
pub trait PaymentCodeGenerator: Send + Sync {
    /// Added to the base price so transfers can be told apart. `1..=9`.
    fn unique_code(&self) -> i64;

    /// Number embedded in a simulated payment proof. `0..100000`.
    fn simulation_reference(&self) -> u32;
}
