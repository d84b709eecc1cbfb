use pcset::catalog;
use pcset::math;
use pcset::pcset;
use pcset::Algorithm;
use pcset::PcSet;
use pretty_assertions::assert_eq;

fn all_sets() -> impl Iterator<Item = PcSet> {
    (0..1 << 12).map(PcSet::from_bitmask)
}

#[test]
fn transposition_round_trip() {
    for set in all_sets() {
        for delta in [-25, -13, -1, 1, 5, 12, 17] {
            assert_eq!(set.transpose(delta).transpose(-delta), set);
        }
    }
}

#[test]
fn transpose_to_starts_on_target() {
    for set in all_sets().filter(|set| !set.is_empty()) {
        for target in [-14, -1, 0, 6, 11, 30] {
            assert_eq!(
                set.transpose_to(target).first(),
                Some(math::pitch_class(target))
            );
        }
    }
}

#[test]
fn inversion_round_trip() {
    for set in all_sets() {
        assert_eq!(set.invert().invert(), set);
    }
}

#[test]
fn prime_form_is_transposition_and_inversion_invariant() {
    for set in all_sets() {
        let prime = set.prime_form();
        for delta in 1..12 {
            assert_eq!(set.transpose(delta).prime_form(), prime);
        }
        assert_eq!(set.invert().prime_form(), prime);
        assert_eq!(set.invert_by_pair((2, 9)).prime_form(), prime);
    }
}

#[test]
fn prime_form_is_idempotent() {
    for set in all_sets() {
        for algorithm in [Algorithm::Forte, Algorithm::Rahn] {
            let prime = set.prime_form_with(algorithm);
            assert_eq!(prime.prime_form_with(algorithm), prime);
        }
    }
}

#[test]
fn prime_form_starts_on_zero() {
    for set in all_sets().filter(|set| !set.is_empty()) {
        let prime = set.prime_form();
        assert_eq!(prime.first(), Some(0));
        assert_eq!(prime.len(), set.len());
        assert!(prime.pcs().windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn normal_form_preserves_content() {
    for set in all_sets().filter(|set| !set.is_empty()) {
        for algorithm in [Algorithm::Forte, Algorithm::Rahn] {
            let normal = set.normal_form_with(algorithm);
            assert_eq!(normal.sorted(), set);
            assert_eq!(
                normal.transpose_to(0).prime_form_with(algorithm),
                set.prime_form_with(algorithm)
            );
        }
    }
}

#[test]
fn every_set_has_a_name() {
    for set in all_sets() {
        let set_class = catalog::name(&set).unwrap();
        assert_eq!(set_class.prime_form(), &set.prime_form());
        assert_eq!(set_class.cardinality(), set.len());
    }
}

#[test]
fn catalog_is_self_consistent() {
    for set_class in catalog::sets().iter() {
        assert_eq!(&set_class.prime_form().prime_form(), set_class.prime_form());
        assert_eq!(
            catalog::name(set_class.prime_form()),
            Some(set_class),
            "{set_class}"
        );
    }
}

#[test]
fn subsets_are_complete() {
    for set in all_sets() {
        let subsets = set.subsets();
        assert_eq!(subsets.len(), 1 << set.len());
        assert_eq!(subsets.first(), Some(&PcSet::empty()));
        assert_eq!(subsets.last(), Some(&set));
    }
}

#[test]
fn interval_class_vector_counts_all_pairs() {
    for set in all_sets() {
        let n = set.prime_form().len() as u32;
        assert_eq!(
            set.interval_class_vector().num_pairs(),
            n * n.saturating_sub(1) / 2
        );
    }
}

#[test]
fn concrete_cases() {
    assert_eq!(pcset![0, 1, 2].transpose(3), pcset![3, 4, 5]);
    assert_eq!(pcset![0, 1, 2].transpose(-5), pcset![7, 8, 9]);
    assert_eq!(
        pcset![1, 9, 5, 7, 6, 0, 3].invert(),
        pcset![11, 3, 7, 5, 6, 0, 9]
    );
    assert_eq!(pcset![4, 2, 0, 8].normal_form(), pcset![0, 2, 4, 8]);
    assert_eq!(pcset![0, 1, 3, 7, 8].prime_form(), pcset![0, 1, 3, 7, 8]);
    assert_eq!(pcset![0, 1, 5, 6, 8].prime_form(), pcset![0, 1, 3, 7, 8]);
    assert_eq!(
        pcset![0, 1, 3, 7, 8].prime_form_with(Algorithm::Rahn),
        pcset![0, 1, 5, 6, 8]
    );
    assert_eq!(
        pcset![0, 1, 3, 7, 8].interval_class_vector().counts(),
        [2, 1, 1, 2, 3, 1]
    );

    let set_class = catalog::name(&pcset![7, 8, 4, 5, 11]).unwrap();
    assert_eq!(
        (set_class.name(), set_class.prime_form()),
        ("5-16", &pcset![0, 1, 3, 4, 7])
    );
}
