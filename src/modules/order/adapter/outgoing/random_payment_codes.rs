use rand::Rng;

use crate::modules::order::application::ports::outgoing::PaymentCodeGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPaymentCodes;

impl PaymentCodeGenerator for RandomPaymentCodes {
    fn unique_code(&self) -> i64 {
        rand::thread_rng().gen_range(1..=9)
    }

    fn simulation_reference(&self) -> u32 {
        rand::thread_rng().gen_range(0..100_000)
    }
}
