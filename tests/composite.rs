mod common;

use common::{assert_partition, roster16, seeds, ScriptedSource, FAVORITE};
use tournament_sim::{
    fall_playoff_seeding, winter_playoff_seeding, Competitor, Fall, Format, Placement, Resolver, WinModel, Winter,
};

#[test]
fn fall_seeds_playoffs_by_swiss_record() {
    let model = WinModel::Favorite;
    let mut source = ScriptedSource::repeating(FAVORITE, 41);
    let mut resolver = Resolver::new(&model, &mut source);
    let roster = roster16();

    let run = Fall::run(&roster, &mut resolver).unwrap();

    assert_eq!(fall_playoff_seeding(&run.swiss), seeds(&[1, 2, 4, 3, 7, 5, 6, 8]));
    assert_eq!(run.champion(), Competitor::new(1));
    assert_eq!(run.playoffs.runner_up, Competitor::new(2));
    assert_eq!(run.playoffs.semifinal_losers, seeds(&[3, 4]));
    assert_eq!(run.playoffs.quarterfinal_losers, seeds(&[8, 7, 6, 5]));
    // 33 swiss matches, 8 playoff matches
    assert_eq!(resolver.matches_played(), 41);

    let buckets = run.buckets();
    assert_partition(&buckets, &roster);
    assert_eq!(buckets.get(Placement::new(9, 11)), Some(seeds(&[9, 11, 12]).as_slice()));
    assert_eq!(buckets.get(Placement::new(12, 14)), Some(seeds(&[14, 13, 10]).as_slice()));
    assert_eq!(buckets.get(Placement::new(15, 16)), Some(seeds(&[16, 15]).as_slice()));
}

#[test]
fn winter_tiers_from_group_ranks() {
    let model = WinModel::Favorite;
    let mut source = ScriptedSource::repeating(FAVORITE, 38);
    let mut resolver = Resolver::new(&model, &mut source);
    let roster = roster16();

    let run = Winter::run(&roster, &mut resolver).unwrap();

    let seeding = winter_playoff_seeding(&run.groups);
    assert_eq!(seeding.top, seeds(&[1, 2, 3, 4]));
    assert_eq!(seeding.mid, seeds(&[8, 7, 6, 5]));
    assert_eq!(seeding.bottom, seeds(&[10, 9, 12, 11]));

    assert!(!run.is_alt());
    assert_eq!(run.name(), "Winter");
    assert_eq!(run.champion(), Competitor::new(1));
    assert_eq!(run.playoffs.ninth_twelfth, seeds(&[10, 11, 9, 12]));
    // 24 group matches, 14 playoff matches
    assert_eq!(resolver.matches_played(), 38);

    let buckets = run.buckets();
    assert_partition(&buckets, &roster);
    assert_eq!(buckets.get(Placement::new(13, 16)), Some(seeds(&[15, 16, 13, 14]).as_slice()));
}

#[test]
fn winter_alt_keeps_top_eight_upstairs() {
    let model = WinModel::Favorite;
    let mut source = ScriptedSource::repeating(FAVORITE, 43);
    let mut resolver = Resolver::new(&model, &mut source);
    let roster = roster16();

    let run = Winter::run_alt(&roster, &mut resolver).unwrap();

    assert!(run.is_alt());
    assert_eq!(run.name(), "Winter-alt");
    assert_eq!(run.champion(), Competitor::new(1));
    assert_eq!(run.playoffs.fifth_sixth, seeds(&[5, 6]));
    assert_eq!(run.playoffs.seventh_eighth, seeds(&[8, 7]));
    assert_eq!(run.playoffs.ninth_twelfth, seeds(&[10, 9, 12, 11]));
    assert_eq!(resolver.matches_played(), 43);
    assert_partition(&run.buckets(), &roster);
}
