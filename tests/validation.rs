//! Bad rosters are rejected before any match is played.

mod common;

use common::{roster16, seeds, ScriptedSource};
use tournament_sim::{
    run_batch, BatchConfig, DoubleElim16, Fall, FormatError, FormatKind, GroupStanding, Gsl, GslGroup, Resolver,
    RoundRobinGroups16, SingleElim16, SingleElim8, Swiss16, WinModel, Winter,
};

#[test]
fn wrong_roster_size() {
    let model = WinModel::Favorite;
    let mut source = ScriptedSource::new(vec![]);
    let mut resolver = Resolver::new(&model, &mut source);
    let fifteen = &roster16()[..15];

    assert_eq!(
        SingleElim16::run(fifteen, &mut resolver).unwrap_err(),
        FormatError::WrongRosterSize {
            format: "SingleElim 16 teams",
            expected: 16,
            actual: 15
        }
    );
    assert!(DoubleElim16::run(fifteen, &mut resolver).is_err());
    assert!(Swiss16::run(fifteen, &mut resolver).is_err());
    assert!(Gsl::run(fifteen, &mut resolver).is_err());
    assert!(RoundRobinGroups16::run(fifteen, &mut resolver).is_err());
    assert!(Fall::run(fifteen, &mut resolver).is_err());
    assert!(Winter::run(fifteen, &mut resolver).is_err());
    assert!(Winter::run_alt(fifteen, &mut resolver).is_err());
    assert!(SingleElim8::run(&roster16(), &mut resolver).is_err());

    assert_eq!(resolver.matches_played(), 0);
    assert_eq!(source.consumed(), 0);
}

#[test]
fn duplicate_seed() {
    let model = WinModel::Favorite;
    let mut source = ScriptedSource::new(vec![]);
    let mut resolver = Resolver::new(&model, &mut source);
    let roster = seeds(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 3]);

    assert_eq!(Gsl::run(&roster, &mut resolver).unwrap_err(), FormatError::DuplicateSeed(3));
    assert_eq!(Fall::run(&roster, &mut resolver).unwrap_err(), FormatError::DuplicateSeed(3));
    assert_eq!(resolver.matches_played(), 0);
}

#[test]
fn error_messages_name_the_problem() {
    let err = FormatError::WrongRosterSize {
        format: "GSL",
        expected: 16,
        actual: 12,
    };
    assert_eq!(err.to_string(), "GSL must have 16 teams (got 12)");
    assert!(FormatError::DuplicateSeed(4).to_string().contains("seed 4"));
}

#[test]
fn batch_rejects_roster_up_front() {
    let config = BatchConfig {
        runs: 10,
        workers: 2,
        seed: Some(1),
    };
    let err = run_batch(FormatKind::Swiss, &roster16()[..8], &WinModel::CoinFlip, &config).unwrap_err();
    assert!(matches!(err, FormatError::WrongRosterSize { actual: 8, .. }));
}

#[test]
fn group_primitives_reject_wrong_size() {
    let model = WinModel::Favorite;
    let mut source = ScriptedSource::new(vec![]);
    let mut resolver = Resolver::new(&model, &mut source);

    assert_eq!(
        GroupStanding::run(&seeds(&[1, 2, 3]), &mut resolver).unwrap_err(),
        FormatError::WrongRosterSize {
            format: "RoundRobin group",
            expected: 4,
            actual: 3
        }
    );
    assert_eq!(
        GslGroup::run(seeds(&[1, 2, 3]), &mut resolver).unwrap_err(),
        FormatError::WrongRosterSize {
            format: "GSL group",
            expected: 4,
            actual: 3
        }
    );
    assert!(GslGroup::run(seeds(&[1, 2, 3, 4, 5]), &mut resolver).is_err());
    assert_eq!(
        GroupStanding::run(&seeds(&[1, 2, 2, 4]), &mut resolver).unwrap_err(),
        FormatError::DuplicateSeed(2)
    );
    assert_eq!(resolver.matches_played(), 0);
}
