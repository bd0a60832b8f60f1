mod common;

use common::{assert_partition, roster16, seeds, ScriptedSource, FAVORITE, UPSET};
use tournament_sim::{
    default_roster, run_batch, two_match_final, BatchConfig, Competitor, Format, FormatKind, Resolver, SingleElim16,
    SingleElim8, WinModel,
};

#[test]
fn favorites_go_through_sixteen_bracket() {
    let model = WinModel::Favorite;
    let mut source = ScriptedSource::repeating(FAVORITE, 16);
    let mut resolver = Resolver::new(&model, &mut source);
    let roster = roster16();

    let run = SingleElim16::run(&roster, &mut resolver).unwrap();

    assert_eq!(run.champion, Competitor::new(1));
    assert_eq!(run.runner_up, Competitor::new(2));
    assert_eq!(run.semifinal_losers, seeds(&[4, 3]));
    assert_eq!(run.quarterfinal_losers, seeds(&[8, 5, 7, 6]));
    assert_eq!(run.first_round_losers, seeds(&[16, 9, 13, 12, 15, 10, 14, 11]));
    // 8 + 4 + 2 + two finals
    assert_eq!(resolver.matches_played(), 16);
    assert_partition(&run.buckets(), &roster);
    assert_eq!(run.buckets().champion(), Some(Competitor::new(1)));
}

#[test]
fn eight_bracket_quarterfinal_order() {
    let model = WinModel::Favorite;
    let mut source = ScriptedSource::repeating(FAVORITE, 8);
    let mut resolver = Resolver::new(&model, &mut source);
    let roster = default_roster(8);

    let run = SingleElim8::run(&roster, &mut resolver).unwrap();

    assert_eq!(run.quarterfinal_losers, seeds(&[8, 5, 7, 6]));
    assert_eq!(run.semifinal_losers, seeds(&[4, 3]));
    assert_eq!(run.champion, Competitor::new(1));
    assert_partition(&run.buckets(), &roster);
}

#[test]
fn split_final_keeps_first_match() {
    let model = WinModel::CoinFlip;
    let mut draws = vec![FAVORITE; 6];
    draws.extend([UPSET, FAVORITE]);
    let mut source = ScriptedSource::new(draws);
    let mut resolver = Resolver::new(&model, &mut source);

    let run = SingleElim8::run(&default_roster(8), &mut resolver).unwrap();

    assert_eq!(run.champion, Competitor::new(2));
    assert_eq!(run.runner_up, Competitor::new(1));
    // no decider on a split
    assert_eq!(resolver.matches_played(), 8);
}

#[test]
fn two_match_final_agreement_and_split() {
    let model = WinModel::CoinFlip;
    let (one, two) = (Competitor::new(1), Competitor::new(2));

    let mut source = ScriptedSource::new(vec![UPSET, UPSET]);
    let mut resolver = Resolver::new(&model, &mut source);
    assert_eq!(two_match_final(one, two, &mut resolver).winner, two);

    let mut source = ScriptedSource::new(vec![FAVORITE, UPSET]);
    let mut resolver = Resolver::new(&model, &mut source);
    assert_eq!(two_match_final(one, two, &mut resolver).winner, one);
    assert_eq!(resolver.matches_played(), 2);
}

#[test]
fn seeds_are_equally_likely_under_coin_flip() {
    let config = BatchConfig {
        runs: 100_000,
        workers: 4,
        seed: Some(7),
    };
    let tally = run_batch(FormatKind::SingleElim, &roster16(), &WinModel::CoinFlip, &config).unwrap();

    assert_eq!(tally.runs, 100_000);
    assert_eq!(tally.titles.values().sum::<u64>(), 100_000);
    for seed in 1..=16 {
        let rate = tally.title_rate(seed);
        assert!((rate - 6.25).abs() < 0.5, "seed {} won {:.2}%", seed, rate);
    }
}

#[test]
fn stronger_seeds_win_more_under_linear_model() {
    let config = BatchConfig {
        runs: 20_000,
        workers: 2,
        seed: Some(11),
    };
    let tally = run_batch(FormatKind::SingleElim, &roster16(), &WinModel::default(), &config).unwrap();

    assert!(tally.title_rate(1) > tally.title_rate(8));
    assert!(tally.title_rate(8) > tally.title_rate(16));
}
