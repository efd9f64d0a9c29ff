mod rotations;

use std::fmt::Write as _;

use ohhell_bot::{BotPlayer, HeuristicPolicy, RandomPolicy};
use ohhell_core::game::{EngineOptions, GameError, MatchOutcome, OhHell, Player};
use ohhell_core::model::seat::Seat;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{AgentConfig, AgentKind, BenchmarkConfig};

pub use rotations::SeatRotations;

const MAX_CAUTION: u64 = 3;

/// Primary entry point for orchestrating tournaments.
pub struct TournamentRunner {
    config: BenchmarkConfig,
    agents: Vec<AgentBlueprint>,
    rotations: SeatRotations,
}

/// Standings after a run, one entry per configured agent in config order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub matches_played: usize,
    pub agents: Vec<AgentSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentSummary {
    pub name: String,
    pub kind: AgentKind,
    pub matches: usize,
    pub wins: usize,
    pub joint_wins: usize,
    pub total_score: u64,
    pub average_score: f64,
    pub bids_matched: usize,
    pub rounds_played: usize,
}

impl AgentSummary {
    fn new(blueprint: &AgentBlueprint) -> Self {
        Self {
            name: blueprint.name.clone(),
            kind: blueprint.kind(),
            matches: 0,
            wins: 0,
            joint_wins: 0,
            total_score: 0,
            average_score: 0.0,
            bids_matched: 0,
            rounds_played: 0,
        }
    }
}

impl TournamentRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: BenchmarkConfig) -> Result<Self, RunnerError> {
        let agents = AgentBlueprint::from_configs(&config.agents)?;
        let rotations = SeatRotations::new(agents.len(), config.rotate_seats);
        Ok(Self {
            config,
            agents,
            rotations,
        })
    }

    /// Play every configured match and aggregate the results per agent.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or(0));
        let mut standings: Vec<AgentSummary> = self.agents.iter().map(AgentSummary::new).collect();

        for match_index in 0..self.config.matches {
            let match_seed = rng.next_u64();
            let seating = self.rotations.for_match(match_index);
            let outcome = self.play_match(match_index, match_seed, seating)?;
            record_match(&mut standings, seating, &outcome);

            if tracing::enabled!(Level::INFO) {
                let winners = outcome
                    .winners
                    .iter()
                    .map(|seat| self.agents[seating[seat.index()]].name.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                event!(
                    target: "ohhell_bench::match",
                    Level::INFO,
                    run_id = %self.config.run_id,
                    match_index = match_index as u32,
                    match_seed,
                    winners = %winners,
                    joint = outcome.joint,
                    scores = ?outcome.scores,
                );
            }
        }

        for agent in &mut standings {
            if agent.matches > 0 {
                agent.average_score = agent.total_score as f64 / agent.matches as f64;
            }
        }

        Ok(RunSummary {
            run_id: self.config.run_id.clone(),
            matches_played: self.config.matches,
            agents: standings,
        })
    }

    fn play_match(
        &self,
        match_index: usize,
        match_seed: u64,
        seating: &[usize],
    ) -> Result<MatchOutcome, RunnerError> {
        let seats = seating.len();
        let players: Vec<Box<dyn Player>> = seating
            .iter()
            .enumerate()
            .map(|(seat, agent)| {
                self.agents[*agent].spawn_player(Seat::new(seat), seats, match_seed)
            })
            .collect();

        let options = EngineOptions {
            shuffle: self.config.shuffle,
            seed: Some(match_seed),
            first_dealer: Seat::new(0),
        };
        let mut engine =
            OhHell::with_options(players, options).map_err(|source| RunnerError::Game {
                match_index,
                source,
            })?;
        engine.play_match().map_err(|source| RunnerError::Game {
            match_index,
            source,
        })
    }
}

fn record_match(standings: &mut [AgentSummary], seating: &[usize], outcome: &MatchOutcome) {
    for (seat, agent) in seating.iter().enumerate() {
        let entry = &mut standings[*agent];
        entry.matches += 1;
        entry.total_score += u64::from(outcome.scores[seat]);
        entry.rounds_played += outcome.rounds.len();
        if outcome.is_winner(Seat::new(seat)) {
            if outcome.joint {
                entry.joint_wins += 1;
            } else {
                entry.wins += 1;
            }
        }
    }
    for round in &outcome.rounds {
        for seat in round.matched_bids() {
            standings[seating[seat.index()]].bids_matched += 1;
        }
    }
}

impl RunSummary {
    /// Fixed-width standings table, best average first.
    pub fn render_table(&self) -> String {
        let mut rows: Vec<&AgentSummary> = self.agents.iter().collect();
        rows.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));

        let width = rows
            .iter()
            .map(|agent| agent.name.len())
            .max()
            .unwrap_or(0)
            .max("agent".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<width$}  {:>7}  {:>5}  {:>5}  {:>9}  {:>8}  {:>7}",
            "agent", "matches", "wins", "joint", "avg score", "matched", "match %"
        );
        for agent in rows {
            let matched_pct = if agent.rounds_played == 0 {
                0.0
            } else {
                agent.bids_matched as f64 * 100.0 / agent.rounds_played as f64
            };
            let _ = writeln!(
                out,
                "{:<width$}  {:>7}  {:>5}  {:>5}  {:>9.2}  {:>8}  {:>6.1}%",
                agent.name,
                agent.matches,
                agent.wins,
                agent.joint_wins,
                agent.average_score,
                agent.bids_matched,
                matched_pct
            );
        }
        out
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{0}")]
    Agent(#[from] AgentError),
    #[error("match {match_index} failed: {source}")]
    Game {
        match_index: usize,
        #[source]
        source: GameError,
    },
}

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid heuristic parameter for agent '{name}': {message}")]
    InvalidHeuristicParam { name: String, message: String },
    #[error("invalid random parameter for agent '{name}': {message}")]
    InvalidRandomParam { name: String, message: String },
}

struct AgentBlueprint {
    name: String,
    implementation: AgentImplementation,
}

enum AgentImplementation {
    Heuristic { caution: u8 },
    Random { salt: u64 },
}

impl AgentBlueprint {
    fn from_configs(configs: &[AgentConfig]) -> Result<Vec<Self>, AgentError> {
        configs.iter().map(Self::from_config).collect()
    }

    fn from_config(config: &AgentConfig) -> Result<Self, AgentError> {
        let implementation = match config.kind {
            AgentKind::Heuristic => {
                let caution = read_u64_param(&config.params, "caution")
                    .map_err(|message| AgentError::InvalidHeuristicParam {
                        name: config.name.clone(),
                        message,
                    })?
                    .unwrap_or(1);
                if caution > MAX_CAUTION {
                    return Err(AgentError::InvalidHeuristicParam {
                        name: config.name.clone(),
                        message: format!("caution must be at most {MAX_CAUTION}, got {caution}"),
                    });
                }
                AgentImplementation::Heuristic {
                    caution: caution as u8,
                }
            }
            AgentKind::Random => {
                let salt = read_u64_param(&config.params, "salt")
                    .map_err(|message| AgentError::InvalidRandomParam {
                        name: config.name.clone(),
                        message,
                    })?
                    .unwrap_or(0);
                AgentImplementation::Random { salt }
            }
        };

        Ok(Self {
            name: config.name.clone(),
            implementation,
        })
    }

    fn kind(&self) -> AgentKind {
        match self.implementation {
            AgentImplementation::Heuristic { .. } => AgentKind::Heuristic,
            AgentImplementation::Random { .. } => AgentKind::Random,
        }
    }

    fn spawn_player(&self, seat: Seat, seats: usize, match_seed: u64) -> Box<dyn Player> {
        match self.implementation {
            AgentImplementation::Heuristic { caution } => {
                Box::new(BotPlayer::new(seat, seats, HeuristicPolicy::new(caution)))
            }
            AgentImplementation::Random { salt } => {
                let seed = match_seed ^ salt.rotate_left(17) ^ seat.index() as u64;
                Box::new(BotPlayer::new(seat, seats, RandomPolicy::with_seed(seed)))
            }
        }
    }
}

fn read_u64_param(params: &serde_yaml::Value, key: &str) -> Result<Option<u64>, String> {
    if params.is_null() {
        return Ok(None);
    }
    let mapping = params
        .as_mapping()
        .ok_or_else(|| "expected mapping for agent params".to_string())?;
    let Some(value) = mapping
        .iter()
        .find_map(|(k, value)| (k.as_str() == Some(key)).then_some(value))
    else {
        return Ok(None);
    };
    value
        .as_u64()
        .map(Some)
        .ok_or_else(|| format!("{key} must be a non-negative integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;
    use ohhell_core::game::ShufflePolicy;

    fn agent(name: &str, kind: AgentKind, params: &str) -> AgentConfig {
        AgentConfig {
            name: name.to_string(),
            kind,
            params: serde_yaml::from_str(params).expect("params yaml"),
        }
    }

    fn config(agents: Vec<AgentConfig>, matches: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            run_id: "unit".to_string(),
            matches,
            seed: Some(3),
            shuffle: ShufflePolicy::EveryRound,
            rotate_seats: true,
            agents,
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn tallies_every_seat_of_every_match() {
        let cfg = config(
            vec![
                agent("a", AgentKind::Heuristic, "caution: 0"),
                agent("b", AgentKind::Random, "{}"),
                agent("c", AgentKind::Heuristic, "~"),
            ],
            6,
        );
        let summary = TournamentRunner::new(cfg).expect("runner").run().expect("run");

        assert_eq!(summary.matches_played, 6);
        for entry in &summary.agents {
            assert_eq!(entry.matches, 6);
            assert_eq!(entry.rounds_played, 6 * 10);
            assert!(entry.bids_matched <= entry.rounds_played);
            assert!((entry.average_score - entry.total_score as f64 / 6.0).abs() < 1e-9);
        }
        let outright: usize = summary.agents.iter().map(|a| a.wins).sum();
        assert!(outright <= 6);
    }

    #[test]
    fn rejects_out_of_range_caution() {
        let cfg = config(
            vec![
                agent("a", AgentKind::Heuristic, "caution: 9"),
                agent("b", AgentKind::Random, "{}"),
            ],
            1,
        );
        let err = TournamentRunner::new(cfg).err().expect("caution 9 rejected");
        assert!(matches!(
            err,
            RunnerError::Agent(AgentError::InvalidHeuristicParam { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_salt() {
        let cfg = config(
            vec![
                agent("a", AgentKind::Heuristic, "{}"),
                agent("b", AgentKind::Random, "salt: loud"),
            ],
            1,
        );
        assert!(TournamentRunner::new(cfg).is_err());
    }

    #[test]
    fn table_lists_best_average_first() {
        let summary = RunSummary {
            run_id: "t".to_string(),
            matches_played: 2,
            agents: vec![
                AgentSummary {
                    name: "low".to_string(),
                    kind: AgentKind::Random,
                    matches: 2,
                    wins: 0,
                    joint_wins: 0,
                    total_score: 20,
                    average_score: 10.0,
                    bids_matched: 1,
                    rounds_played: 4,
                },
                AgentSummary {
                    name: "high".to_string(),
                    kind: AgentKind::Heuristic,
                    matches: 2,
                    wins: 2,
                    joint_wins: 0,
                    total_score: 90,
                    average_score: 45.0,
                    bids_matched: 3,
                    rounds_played: 4,
                },
            ],
        };
        let table = summary.render_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("agent"));
        assert!(lines[1].starts_with("high"));
        assert!(lines[1].contains("45.00"));
        assert!(lines[1].contains("75.0%"));
        assert!(lines[2].starts_with("low "));
    }
}
