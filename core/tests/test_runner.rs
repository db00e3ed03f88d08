//! Integration tests for the simulation runner
//!
//! Cover population conservation, deterministic replay, progress cadence,
//! and a golden run whose tier, responses, and score were computed by hand
//! from the xorshift64* sequence for seed 42.

use assessment_simulator_core::{
    results_digest, ResponseGenerator, RngManager, ScoringWeights, SimulationConfig,
    SimulationRunner, Tier, TierTable,
};
use proptest::prelude::*;

fn config(population: usize, rng_seed: u64) -> SimulationConfig {
    SimulationConfig {
        population,
        rng_seed,
        tiers: TierTable::standard(),
        scoring: ScoringWeights::default(),
        progress_interval: 100_000,
    }
}

#[test]
fn test_population_conservation() {
    for population in [0, 1, 2, 10, 1000] {
        let mut runner = SimulationRunner::new(config(population, 42)).unwrap();
        let results = runner.run();

        assert_eq!(results.total_entries(), population);

        let per_tier: usize = Tier::ALL.iter().map(|&tier| results.count_for(tier)).sum();
        assert_eq!(per_tier, population);
    }
}

#[test]
fn test_deterministic_replay() {
    let mut runner1 = SimulationRunner::new(config(500, 42)).unwrap();
    let mut runner2 = SimulationRunner::new(config(500, 42)).unwrap();

    let results1 = runner1.run().clone();
    let results2 = runner2.run().clone();

    assert_eq!(results1, results2);
    assert_eq!(results_digest(&results1), results_digest(&results2));
}

#[test]
fn test_different_seeds_differ() {
    let mut runner1 = SimulationRunner::new(config(500, 42)).unwrap();
    let mut runner2 = SimulationRunner::new(config(500, 43)).unwrap();

    let digest1 = results_digest(runner1.run());
    let digest2 = results_digest(runner2.run());

    assert_ne!(digest1, digest2);
}

#[test]
fn test_golden_single_user_seed_42() {
    // Expected values derived from the xorshift64* sequence for seed 42:
    // the tier draw is 0.339… (primary/secondary), the 30 responses sum
    // to 87, and the combined score is round2(87 * 4.7 / 3) = 136.3.
    let expected_responses: Vec<i64> = vec![
        4, 2, 1, 4, 1, 3, 4, 2, 4, 3, 3, 1, 4, 4, 2, 1, 4, 3, 2, 3, 3, 2, 3, 2, 5, 3, 3, 4,
        2, 5,
    ];

    let generator = ResponseGenerator::new(TierTable::standard());
    let mut rng = RngManager::new(42);

    let tier = generator.select_tier(&mut rng);
    assert_eq!(tier, Tier::PrimarySecondary);

    let responses = generator.generate_responses(tier, &mut rng);
    assert_eq!(responses, expected_responses);
    assert_eq!(responses.iter().sum::<i64>(), 87);

    let score = ScoringWeights::default().combined(&responses);
    assert_eq!(score, 136.3);

    // The runner must reproduce the same user end to end.
    let mut runner = SimulationRunner::new(config(1, 42)).unwrap();
    let user = runner.step().unwrap();

    assert_eq!(user.index, 0);
    assert_eq!(user.tier, Tier::PrimarySecondary);
    assert_eq!(user.combined_score, 136.3);
    assert_eq!(runner.results().scores_for(Tier::PrimarySecondary), &[136.3]);
}

#[test]
fn test_golden_five_users_seed_7() {
    let mut runner = SimulationRunner::new(config(5, 7)).unwrap();

    let expected = [
        (Tier::Undergraduate, 235.0),
        (Tier::PrimarySecondary, 128.47),
        (Tier::PrimarySecondary, 134.73),
        (Tier::PrimarySecondary, 151.97),
        (Tier::Undergraduate, 272.6),
    ];

    for (index, &(tier, score)) in expected.iter().enumerate() {
        let user = runner.step().unwrap();
        assert_eq!(user.index, index);
        assert_eq!(user.tier, tier);
        assert_eq!(user.combined_score, score);
    }
    assert!(runner.step().is_none());

    assert_eq!(
        runner.results().scores_for(Tier::PrimarySecondary),
        &[128.47, 134.73, 151.97]
    );
    assert_eq!(
        runner.results().scores_for(Tier::Undergraduate),
        &[235.0, 272.6]
    );
    assert_eq!(runner.results().count_for(Tier::Graduate), 0);
}

#[test]
fn test_progress_cadence() {
    let mut simulation_config = config(10, 42);
    simulation_config.progress_interval = 3;

    let mut runner = SimulationRunner::new(simulation_config).unwrap();
    let mut updates = Vec::new();
    runner.run_with_progress(|progress| updates.push(progress.users_processed));

    assert_eq!(updates, vec![0, 3, 6, 9]);
}

#[test]
fn test_progress_ignored_does_not_change_results() {
    let mut with_progress = SimulationRunner::new(config(200, 11)).unwrap();
    let mut without_progress = SimulationRunner::new(config(200, 11)).unwrap();

    let mut fired = 0usize;
    let results1 = with_progress.run_with_progress(|_| fired += 1).clone();
    let results2 = without_progress.run().clone();

    assert!(fired > 0);
    assert_eq!(results1, results2);
}

proptest! {
    #[test]
    fn prop_total_entries_equals_population(population in 0usize..=64, seed in any::<u64>()) {
        let mut runner = SimulationRunner::new(config(population, seed)).unwrap();
        let results = runner.run();

        prop_assert_eq!(results.total_entries(), population);
    }

    #[test]
    fn prop_scores_are_finite_and_positive(population in 1usize..=32, seed in any::<u64>()) {
        let mut runner = SimulationRunner::new(config(population, seed)).unwrap();
        let results = runner.run();

        for (_, scores) in results.iter() {
            for &score in scores {
                prop_assert!(score.is_finite());
                prop_assert!(score > 0.0);
            }
        }
    }
}
