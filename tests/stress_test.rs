#[cfg(test)]
mod stress_test {
    use std::time::Duration;

    use bwm_solver::{bwm, problem::ComparisonInput};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    procspawn::enable_test_support!();

    const TIMEOUT_SECS: u64 = 60;

    #[test]
    fn many_solves_finish_in_time() {
        let mut handle = procspawn::spawn(0xb3u64, |seed| {
            let _ = env_logger::builder().is_test(true).try_init();
            let mut rng = Pcg64::seed_from_u64(seed);

            let mut solved = 0usize;
            for _ in 0..2000 {
                let n = rng.gen_range(2..=20);
                let best = rng.gen_range(0..n);
                let worst = (best + rng.gen_range(1..n)) % n;
                let mut a_b: Vec<f64> = (0..n).map(|_| rng.gen_range(1.0..=9.0)).collect();
                let mut a_w: Vec<f64> = (0..n).map(|_| rng.gen_range(1.0..=9.0)).collect();
                a_b[best] = 1.0;
                a_w[worst] = 1.0;

                let input = ComparisonInput::try_new(a_b, a_w, best, worst).unwrap();
                let result = bwm::solve(&input).unwrap();
                assert!((result.weights.iter().sum::<f64>() - 1.0).abs() < 1e-6);
                solved += 1;
            }
            solved
        });

        match handle.join_timeout(Duration::from_secs(TIMEOUT_SECS)) {
            Ok(solved) => assert_eq!(solved, 2000),
            Err(e) => panic!("{}", e),
        }
    }
}
