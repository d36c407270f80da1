#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use optimalbins::PackError;
    use optimalbins::config::PackConfig;
    use optimalbins::engine::Packer;
    use optimalbins::entities::{Bin, Item, Position};
    use optimalbins::free_rects::FreeRectSet;
    use optimalbins::geometry::Rect;
    use optimalbins::util::assertions;

    const N_ITEMS: usize = 40;

    fn config(algorithm: &str, heuristic: Option<&str>, strict: bool) -> PackConfig {
        PackConfig {
            algorithm: algorithm.to_string(),
            heuristic: heuristic.map(str::to_string),
            strict,
            ..PackConfig::default()
        }
    }

    /// Items with sizes in half units, all fitting in an empty 10x10 bin.
    fn random_items(seed: u64) -> Vec<Item> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..N_ITEMS)
            .map(|i| {
                let w = rng.random_range(1..=12) as f32 * 0.5;
                let h = rng.random_range(1..=12) as f32 * 0.5;
                Item::new(format!("item_{i}"), w, h).unwrap()
            })
            .collect()
    }

    fn base_bins() -> Vec<Bin> {
        vec![Bin::new("bin_1", 10.0, 10.0).unwrap()]
    }

    #[test_case("first_fit", None, true; "first_fit_strict")]
    #[test_case("bottom_left", None, false; "bottom_left")]
    #[test_case("guillotine", Some("default"), false; "guillotine_default")]
    #[test_case("guillotine", Some("alternative"), false; "guillotine_alternative")]
    #[test_case("guillotine", Some("shorter_side"), false; "guillotine_shorter_side")]
    #[test_case("guillotine", Some("longer_side"), false; "guillotine_longer_side")]
    #[test_case("max_rects", Some("best_short_side_fit"), false; "max_rects_bssf")]
    #[test_case("max_rects", Some("best_long_side_fit"), false; "max_rects_blsf")]
    #[test_case("max_rects", Some("best_area_fit"), false; "max_rects_baf")]
    #[test_case("max_rects", Some("bottom_left"), false; "max_rects_bottom_left")]
    #[test_case("max_rects", Some("contact_point_rule"), false; "max_rects_contact_point")]
    fn random_instances_are_packed_feasibly(algorithm: &str, heuristic: Option<&str>, strict: bool) {
        let packer = Packer::from_config(config(algorithm, heuristic, strict)).unwrap();

        for seed in 0..5 {
            let items = random_items(seed);
            let result = packer.pack(&items, base_bins()).unwrap();

            // every item is placed exactly once
            let placed_ids = result
                .bins
                .iter()
                .flat_map(|b| b.placed_items.iter().map(|pi| pi.item_id()))
                .sorted()
                .collect_vec();
            let item_ids = items.iter().map(|i| i.id.as_str()).sorted().collect_vec();
            assert_eq!(placed_ids, item_ids);

            assert!(assertions::bins_feasible(&result.bins));
            for bin in &result.bins {
                assert!(assertions::free_space_covers_bin(bin));
                assert!(assertions::free_rects_pruned(bin.free_rects()));
                assert_eq!((bin.width, bin.height), (10.0, 10.0));
            }
            assert!(result.density() > 0.0 && result.density() <= 1.0);
        }
    }

    #[test_case("first_fit", None)]
    #[test_case("bottom_left", None)]
    #[test_case("guillotine", Some("shorter"))]
    #[test_case("max_rects", Some("best_area_fit"))]
    fn packing_is_deterministic(algorithm: &str, heuristic: Option<&str>) {
        let packer = Packer::from_config(config(algorithm, heuristic, false)).unwrap();
        let items = random_items(42);
        let first = packer.pack(&items, base_bins()).unwrap();
        let second = packer.pack(&items, base_bins()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn bottom_left_scenario() {
        let packer = Packer::from_config(config("bottom_left", None, false)).unwrap();
        let items = [("A", 2.0, 3.0), ("B", 3.0, 2.0), ("C", 1.0, 1.0)]
            .map(|(id, w, h)| Item::new(id, w, h).unwrap());
        let result = packer
            .pack(&items, vec![Bin::new("bin_1", 5.0, 5.0).unwrap()])
            .unwrap();

        assert_eq!(result.n_bins(), 1);
        let positions = result.bins[0]
            .placed_items
            .iter()
            .map(|pi| (pi.item_id(), pi.position))
            .collect_vec();
        assert_eq!(
            positions,
            [
                ("A", Position::new(0.0, 0.0)),
                ("B", Position::new(2.0, 0.0)),
                ("C", Position::new(2.0, 2.0)),
            ]
        );
        assert!(assertions::bins_feasible(&result.bins));
    }

    #[test]
    fn first_fit_overflow_places_oversized_item_unchecked() {
        let packer = Packer::from_config(config("first_fit", None, false)).unwrap();
        let items = [Item::new("wide", 6.0, 2.0).unwrap()];
        let result = packer
            .pack(&items, vec![Bin::new("bin_1", 5.0, 5.0).unwrap()])
            .unwrap();

        assert_eq!(result.n_bins(), 2);
        assert_eq!(result.bins[1].placed_items[0].position, Position::ORIGIN);
        assert!(!assertions::all_items_in_bounds(&result.bins[1]));
    }

    #[test]
    fn guillotine_scenario() {
        let packer = Packer::from_config(config("guillotine", Some("default"), false)).unwrap();
        let result = packer
            .pack(
                &[Item::new("a", 4.0, 4.0).unwrap()],
                vec![Bin::new("bin_1", 10.0, 10.0).unwrap()],
            )
            .unwrap();
        assert_eq!(
            result.bins[0].free_rects(),
            &[
                Rect::from_xywh(4.0, 0.0, 6.0, 4.0),
                Rect::from_xywh(0.0, 4.0, 10.0, 6.0)
            ]
        );
    }

    #[test]
    fn max_rects_scenario() {
        let packer = Packer::from_config(config("max_rects", Some("best_area_fit"), false)).unwrap();
        let items = [(3.0, 3.0), (4.0, 2.0), (2.0, 2.0), (5.0, 3.0), (3.0, 4.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (w, h))| Item::new(format!("{i}"), w, h).unwrap())
            .collect_vec();
        let result = packer
            .pack(&items, vec![Bin::new("bin_1", 10.0, 10.0).unwrap()])
            .unwrap();

        let bin = &result.bins[0];
        assert_eq!(result.n_bins(), 1);
        assert!(assertions::no_overlapping_items(bin));
        assert_eq!(
            Rect::union_area(bin.free_rects()) + bin.placed_item_area(),
            100.0
        );
    }

    #[test]
    fn pruning_is_idempotent() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..50 {
            let rects = (0..rng.random_range(1..20))
                .map(|_| {
                    let x = rng.random_range(0..8) as f32;
                    let y = rng.random_range(0..8) as f32;
                    let w = rng.random_range(1..=4) as f32;
                    let h = rng.random_range(1..=4) as f32;
                    Rect::from_xywh(x, y, w, h)
                })
                .collect_vec();
            let mut once = FreeRectSet::from_rects(rects);
            once.prune();
            let mut twice = once.clone();
            twice.prune();
            assert_eq!(once, twice);
            assert!(assertions::free_rects_pruned(once.rects()));
        }
    }

    #[test_case("skyline", None, "2D"; "unknown algorithm")]
    #[test_case("guillotine", Some("best_area_fit"), "2D"; "unknown guillotine split")]
    #[test_case("max_rects", Some("worst_fit"), "2D"; "unknown max rects rule")]
    #[test_case("bottom_left", None, "3D"; "three dimensions")]
    fn configuration_errors_precede_packing(algorithm: &str, heuristic: Option<&str>, dimension: &str) {
        let config = PackConfig {
            dimension: dimension.to_string(),
            ..config(algorithm, heuristic, false)
        };
        let err = Packer::from_config(config).unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn overflow_without_base_bin() {
        let packer = Packer::from_config(PackConfig::default()).unwrap();
        let items = [Item::new("a", 1.0, 1.0).unwrap()];
        assert_eq!(packer.pack(&items, vec![]).unwrap_err(), PackError::NoBaseBin);
    }

    #[test]
    fn batch_keeps_job_order() {
        let packer = Packer::from_config(config("max_rects", None, false)).unwrap();
        let jobs = (0..8)
            .map(|seed| (random_items(seed), base_bins()))
            .collect_vec();
        let sequential = jobs
            .iter()
            .map(|(items, bins)| packer.pack(items, bins.clone()).unwrap())
            .collect_vec();
        let parallel = packer
            .pack_batch(jobs)
            .into_iter()
            .map(Result::unwrap)
            .collect_vec();
        assert_eq!(sequential, parallel);
    }
}
