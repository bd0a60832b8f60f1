mod common;

use common::{assert_partition, roster16, seeds, ScriptedSource, FAVORITE};
use tournament_sim::{Format, Placement, Resolver, Swiss16, WinModel};

#[test]
fn favorites_through_five_rounds() {
    let model = WinModel::Favorite;
    let mut source = ScriptedSource::repeating(FAVORITE, 33);
    let mut resolver = Resolver::new(&model, &mut source);
    let roster = roster16();

    let run = Swiss16::run(&roster, &mut resolver).unwrap();

    assert_eq!(run.three_zero, seeds(&[1, 2]));
    assert_eq!(run.three_one, seeds(&[4, 3, 7]));
    assert_eq!(run.three_two, seeds(&[5, 6, 8]));
    assert_eq!(run.two_three, seeds(&[9, 11, 12]));
    assert_eq!(run.one_three, seeds(&[14, 13, 10]));
    assert_eq!(run.zero_three, seeds(&[16, 15]));
    assert_eq!(resolver.matches_played(), 33);
}

#[test]
fn records_map_to_placements() {
    let model = WinModel::Favorite;
    let mut source = ScriptedSource::repeating(FAVORITE, 33);
    let mut resolver = Resolver::new(&model, &mut source);
    let roster = roster16();

    let buckets = Swiss16::run(&roster, &mut resolver).unwrap().buckets();

    assert_partition(&buckets, &roster);
    assert_eq!(buckets.get(Placement::new(1, 2)), Some(seeds(&[1, 2]).as_slice()));
    assert_eq!(buckets.get(Placement::new(15, 16)), Some(seeds(&[16, 15]).as_slice()));
    // no single champion
    assert_eq!(buckets.champion(), None);
    assert_eq!(Placement::new(3, 5).to_string(), "3rd-5th");
}
