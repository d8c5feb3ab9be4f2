#[cfg(test)]
mod integration_test {
    use bwm_solver::{
        bwm,
        consts::{EPS, WEIGHT_MAX, WEIGHT_MIN},
        problem::ComparisonInput,
    };
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_pcg::Pcg64;

    const TOLERANCE: f64 = 1e-6;

    fn random_input(rng: &mut Pcg64) -> ComparisonInput {
        let n = rng.gen_range(2..=8);
        let best = rng.gen_range(0..n);
        let worst = (best + rng.gen_range(1..n)) % n;
        let mut a_b: Vec<f64> = (0..n).map(|_| rng.gen_range(1..=9) as f64).collect();
        let mut a_w: Vec<f64> = (0..n).map(|_| rng.gen_range(1..=9) as f64).collect();
        a_b[best] = 1.0;
        a_w[worst] = 1.0;
        ComparisonInput::try_new(a_b, a_w, best, worst).unwrap()
    }

    fn permuted(input: &ComparisonInput, order: &[usize]) -> ComparisonInput {
        let position = |old: usize| order.iter().position(|&o| o == old).unwrap();
        ComparisonInput::try_new(
            order.iter().map(|&o| input.best_to_others()[o]).collect(),
            order.iter().map(|&o| input.others_to_worst()[o]).collect(),
            position(input.best_index()),
            position(input.worst_index()),
        )
        .unwrap()
    }

    #[test]
    fn example_three_criteria() {
        let _ = env_logger::builder().is_test(true).try_init();

        let input =
            ComparisonInput::try_new(vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0], 0, 2).unwrap();
        let result = bwm::solve(&input).unwrap();

        assert!((result.weights.iter().sum::<f64>() - 1.0).abs() < TOLERANCE);
        assert!(result.weights[0] > result.weights[1] && result.weights[1] > result.weights[2]);
        assert!((result.weights[0] - 0.5417).abs() < 1e-3);
        assert!((result.weights[1] - 0.2917).abs() < 1e-3);
        assert!((result.weights[2] - 0.1667).abs() < 1e-3);
        assert!((result.consistency_ratio - 1.0 / 24.0).abs() < TOLERANCE);
    }

    #[test]
    fn equal_criteria_get_equal_weights() {
        let _ = env_logger::builder().is_test(true).try_init();

        for n in 2..=6 {
            let input = ComparisonInput::try_new(vec![1.0; n], vec![1.0; n], 0, n - 1).unwrap();
            let result = bwm::solve(&input).unwrap();
            for w in &result.weights {
                assert!((w - 1.0 / n as f64).abs() < TOLERANCE, "n = {}: {:?}", n, result.weights);
            }
            assert!(result.optimal_xi.abs() < TOLERANCE);
            assert_eq!(result.consistency_ratio, 0.0);
        }
    }

    #[test]
    fn consistent_judgments_recover_weights() {
        let _ = env_logger::builder().is_test(true).try_init();

        let truth = [0.4, 0.2, 0.1, 0.3];
        let input = ComparisonInput::try_new(
            truth.iter().map(|w| truth[0] / w).collect(),
            truth.iter().map(|w| w / truth[2]).collect(),
            0,
            2,
        )
        .unwrap();
        let result = bwm::solve(&input).unwrap();

        for (w, t) in result.weights.iter().zip(truth) {
            assert!((w - t).abs() < TOLERANCE, "{:?}", result.weights);
        }
        assert!(result.optimal_xi < TOLERANCE);
        assert!(result.consistency_ratio < TOLERANCE);
    }

    #[test]
    fn swapping_best_and_worst_inverts_consistent_weights() {
        let _ = env_logger::builder().is_test(true).try_init();

        let truth = [0.4, 0.2, 0.1, 0.3];
        let a_b: Vec<f64> = truth.iter().map(|w| truth[0] / w).collect();
        let a_w: Vec<f64> = truth.iter().map(|w| w / truth[2]).collect();
        let forward = bwm::solve(&ComparisonInput::try_new(a_b.clone(), a_w.clone(), 0, 2).unwrap())
            .unwrap();

        // The old worst is now preferred over every criterion by aW and
        // every criterion over the old best by aB.
        let reversed = bwm::solve(&ComparisonInput::try_new(a_w, a_b, 2, 0).unwrap()).unwrap();

        let inverse_sum: f64 = forward.weights.iter().map(|w| 1.0 / w).sum();
        for (v, w) in reversed.weights.iter().zip(&forward.weights) {
            assert!((v - (1.0 / w) / inverse_sum).abs() < TOLERANCE, "{:?}", reversed.weights);
        }
        assert!(reversed.optimal_xi < TOLERANCE);
        assert!((forward.consistency_ratio - reversed.consistency_ratio).abs() < TOLERANCE);
    }

    #[test]
    fn large_judgments_clamp_consistency_index() {
        let input =
            ComparisonInput::try_new(vec![1.0, 15.0, 4.0], vec![15.0, 1.0, 3.0], 0, 1).unwrap();
        let result = bwm::solve(&input).unwrap();
        assert!((result.consistency_ratio - result.optimal_xi / 5.23).abs() < 1e-12);
    }

    #[test]
    fn random_judgments_keep_invariants() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut rng = Pcg64::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let input = random_input(&mut rng);
            let result = bwm::solve(&input).unwrap();

            assert_eq!(result.weights.len(), input.len());
            assert!((result.weights.iter().sum::<f64>() - 1.0).abs() < TOLERANCE);
            for &w in &result.weights {
                assert!(w >= WEIGHT_MIN - EPS && w <= WEIGHT_MAX + EPS, "{:?}", result.weights);
            }
            assert!(result.optimal_xi >= 0.0);
            assert!(result.consistency_ratio >= 0.0);
        }
    }

    #[test]
    fn relabelling_criteria_permutes_the_result() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut rng = Pcg64::seed_from_u64(7);

        for _ in 0..50 {
            let input = random_input(&mut rng);
            let mut order: Vec<usize> = (0..input.len()).collect();
            order.shuffle(&mut rng);

            let original = bwm::solve(&input).unwrap();
            let relabelled = bwm::solve(&permuted(&input, &order)).unwrap();
            assert!((original.optimal_xi - relabelled.optimal_xi).abs() < TOLERANCE);
            assert!((original.consistency_ratio - relabelled.consistency_ratio).abs() < TOLERANCE);
        }

        // The example has a unique optimum, so the weights follow the labels.
        let input =
            ComparisonInput::try_new(vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0], 0, 2).unwrap();
        let order = [2, 0, 1];
        let original = bwm::solve(&input).unwrap();
        let relabelled = bwm::solve(&permuted(&input, &order)).unwrap();
        for (k, &o) in order.iter().enumerate() {
            assert!((relabelled.weights[k] - original.weights[o]).abs() < TOLERANCE);
        }
    }

    #[test]
    fn invalid_input_never_reaches_the_solver() {
        let err = ComparisonInput::try_new(vec![1.0, 2.0], vec![2.0, 1.0], 0, 0).unwrap_err();
        assert_eq!(bwm::BwmError::from(err).kind(), "invalid_input");

        let n = 101;
        let input = ComparisonInput::try_new(vec![1.0; n], vec![1.0; n], 0, 1).unwrap();
        assert_eq!(bwm::solve(&input).unwrap_err().kind(), "invalid_input");
    }
}
