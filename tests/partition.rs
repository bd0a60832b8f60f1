//! Every format partitions its roster, whatever the seeds and draws.

mod common;

use common::{assert_partition, random_roster};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament_sim::{
    BucketSet, Competitor, DoubleElim16, Fall, Format, Gsl, LowerStartBracket, LowerStartEntry, LowerStartSeeding,
    Placement, ProbabilityModel, Resolver, RngSource, RoundRobinGroups16, SingleElim16, SingleElim8, Swiss16,
    WinModel, Winter,
};

fn sixteen_entrant_runs(roster: &[Competitor], resolver: &mut Resolver<'_>) -> Vec<BucketSet> {
    vec![
        SingleElim16::run(roster, resolver).unwrap().buckets(),
        DoubleElim16::run(roster, resolver).unwrap().buckets(),
        Swiss16::run(roster, resolver).unwrap().buckets(),
        Gsl::run(roster, resolver).unwrap().buckets(),
        RoundRobinGroups16::run(roster, resolver).unwrap().buckets(),
        Fall::run(roster, resolver).unwrap().buckets(),
        Winter::run(roster, resolver).unwrap().buckets(),
        Winter::run_alt(roster, resolver).unwrap().buckets(),
    ]
}

fn check_random_rosters(model: &dyn ProbabilityModel, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut source = RngSource::seeded(seed);
    let mut resolver = Resolver::new(model, &mut source);

    for _ in 0..50 {
        let roster = random_roster(16, &mut rng);
        for buckets in sixteen_entrant_runs(&roster, &mut resolver) {
            assert_partition(&buckets, &roster);
        }

        let eight = random_roster(8, &mut rng);
        assert_partition(&SingleElim8::run(&eight, &mut resolver).unwrap().buckets(), &eight);

        let twelve = random_roster(12, &mut rng);
        let seeding = LowerStartSeeding {
            top: twelve[..4].to_vec(),
            mid: twelve[4..8].to_vec(),
            bottom: twelve[8..].to_vec(),
        };
        for entry in [LowerStartEntry::FourOfTwelve, LowerStartEntry::EightOfTwelve] {
            let run = LowerStartBracket::run(entry, &seeding, &mut resolver).unwrap();
            assert_partition(&run.buckets(), &twelve);
        }
    }
}

#[test]
fn partitions_under_linear_model() {
    check_random_rosters(&WinModel::default(), 1);
}

#[test]
fn partitions_under_coin_flip() {
    check_random_rosters(&WinModel::CoinFlip, 2);
}

#[test]
fn top_seed_finishes_first_when_favorites_always_win() {
    let model = WinModel::Favorite;
    let mut rng = StdRng::seed_from_u64(3);
    let mut source = RngSource::seeded(3);
    let mut resolver = Resolver::new(&model, &mut source);

    for _ in 0..20 {
        let roster = random_roster(16, &mut rng);
        let top = roster[0];
        for buckets in sixteen_entrant_runs(&roster, &mut resolver) {
            let placement = buckets.placement_of(top).unwrap();
            assert_eq!(placement.first, 1, "top seed placed {}", placement);
            if let Some(champion) = buckets.champion() {
                assert_eq!(champion, top);
            }
        }
    }
}

#[test]
fn placements_render_as_ordinals() {
    assert_eq!(Placement::exactly(1).to_string(), "1st");
    assert_eq!(Placement::exactly(2).to_string(), "2nd");
    assert_eq!(Placement::new(5, 8).to_string(), "5th-8th");
    assert_eq!(Placement::new(11, 13).to_string(), "11th-13th");
    assert_eq!(Placement::new(21, 22).to_string(), "21st-22nd");
}

#[test]
fn placement_widths() {
    assert_eq!(Placement::exactly(3).width(), 1);
    assert_eq!(Placement::new(9, 16).width(), 8);
    // inverted ranges are empty rather than wrapping
    let inverted = Placement { first: 5, last: 3 };
    assert_eq!(inverted.width(), 0);
}

#[test]
fn bucket_set_counts_competitors() {
    let empty = BucketSet::new();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.champion(), None);

    let roster = common::seeds(&[1, 2, 3, 4]);
    let buckets = BucketSet::new()
        .with(3, 4, common::seeds(&[3, 4]))
        .with(1, 1, common::seeds(&[1]))
        .with(2, 2, common::seeds(&[2]));
    assert!(!buckets.is_empty());
    assert_eq!(buckets.len(), 4);
    assert_eq!(buckets.champion(), Some(Competitor::new(1)));
    assert_eq!(buckets.placement_of(Competitor::new(4)), Some(Placement::new(3, 4)));
    assert_partition(&buckets, &roster);

    // a competitor listed twice is not a partition
    let doubled = buckets.with(5, 5, common::seeds(&[1]));
    assert!(!doubled.is_partition_of(&roster));
}
