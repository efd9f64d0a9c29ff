pub mod bot;
pub mod policy;

pub use bot::{BotPlayer, RoundView, avoid_forbidden_total};
pub use policy::{HeuristicPolicy, Policy, PolicyContext, RandomPolicy};
