pub mod countdown;
pub mod escalation;
pub mod guess;
pub mod rng;
pub mod scheduler;
