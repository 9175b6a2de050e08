// src/suites/constant_time/tester.rs
use super::config::TestConfig;
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

/// Summary statistics of one timing sample
#[derive(Debug, Clone, Copy)]
pub struct SampleStats {
    pub n: f64,
    pub mean: f64,
    pub variance: f64,
}

impl SampleStats {
    /// Needs at least two observations for an unbiased variance
    pub fn from_times(times: &[u128]) -> Option<Self> {
        if times.len() < 2 {
            return None;
        }
        let n = times.len() as f64;
        let mean = times.iter().map(|&t| t as f64).sum::<f64>() / n;
        let variance = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / (n - 1.0);
        Some(Self { n, mean, variance })
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    pub fn rel_std_dev(&self) -> f64 {
        self.std_dev() / self.mean
    }

    fn standard_error_sq(&self) -> f64 {
        self.variance / self.n
    }
}

/// Result of comparing two timing samples
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
    pub cohens_d: f64,
    pub effect_size_interpretation: &'static str,
    pub confidence_interval: (f64, f64),
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Measure two operations with alternating batches
    ///
    /// Interleaving keeps slow drift (frequency scaling, other load) from
    /// showing up as a difference between the operations.
    pub fn measure_interleaved<A, B>(&self, mut a: A, mut b: B) -> (Vec<u128>, Vec<u128>)
    where
        A: FnMut(),
        B: FnMut(),
    {
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for i in 0..self.num_samples {
            if i % 2 == 0 {
                times_a.push(self.time_batch(&mut a));
                times_b.push(self.time_batch(&mut b));
            } else {
                times_b.push(self.time_batch(&mut b));
                times_a.push(self.time_batch(&mut a));
            }
        }
        (times_a, times_b)
    }

    /// Average nanoseconds per call over one batch
    fn time_batch<F: FnMut()>(&self, f: &mut F) -> u128 {
        let iterations = self.num_iterations.max(1);
        let start = Instant::now();
        for _ in 0..iterations {
            f();
        }
        start.elapsed().as_nanos() / iterations as u128
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        // Floor of 1% of Q1 so a tight cluster with Q1 == Q3 keeps its
        // near-median samples
        let fence = (1.5 * (q3 - q1)).max(0.01 * q1);
        let (lo, hi) = (q1 - fence, q3 + fence);

        times
            .iter()
            .copied()
            .filter(|&t| (lo..=hi).contains(&(t as f64)))
            .collect()
    }

    /// Welch's t-statistic and Welch-Satterthwaite degrees of freedom
    pub fn welch(a: &SampleStats, b: &SampleStats) -> (f64, f64) {
        let se_a = a.standard_error_sq();
        let se_b = b.standard_error_sq();
        let t = (a.mean - b.mean).abs() / (se_a + se_b).sqrt();
        let df = (se_a + se_b).powi(2)
            / (se_a.powi(2) / (a.n - 1.0) + se_b.powi(2) / (b.n - 1.0));
        (t, df)
    }

    /// Two-tailed p-value from Student's t distribution
    ///
    /// Degenerate inputs (zero variance on both sides) yield 1.0 for a zero
    /// statistic and 0.0 otherwise.
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if t_stat.is_nan() {
            return 1.0;
        }
        if !df.is_finite() || df <= 0.0 {
            return if t_stat == 0.0 { 1.0 } else { 0.0 };
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.0,
        }
    }

    pub fn cohens_d(a: &SampleStats, b: &SampleStats) -> f64 {
        let pooled =
            ((a.variance * (a.n - 1.0) + b.variance * (b.n - 1.0)) / (a.n + b.n - 2.0)).sqrt();
        if pooled == 0.0 {
            return 0.0;
        }
        (a.mean - b.mean).abs() / pooled
    }

    pub fn interpret_effect_size(d: f64) -> &'static str {
        match d {
            d if d < 0.2 => "Negligible effect",
            d if d < 0.5 => "Small effect",
            d if d < 0.8 => "Medium effect",
            d if d < 1.2 => "Large effect",
            _ => "Very large effect",
        }
    }

    fn t_critical(df: f64, confidence_level: f64) -> f64 {
        StudentsT::new(0.0, 1.0, df)
            .map(|dist| dist.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0))
            .unwrap_or(1.96)
    }

    /// Weighted score: 1.0 for identical timings, growing with the mean
    /// ratio, the t-statistic and the noisier side's relative deviation
    pub fn combined_score(mean_ratio: f64, t_stat: f64, max_rel_std_dev: f64) -> f64 {
        let t_component = if t_stat.is_finite() { t_stat } else { 0.0 };
        let score = 1.0 + 0.5 * (mean_ratio - 1.0) + 0.2 * (t_component / 10.0)
            + 0.3 * max_rel_std_dev;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    /// Compare two timing samples after outlier removal
    pub fn analyze_constant_time(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);

        let (a, b) = match (
            SampleStats::from_times(&clean_a),
            SampleStats::from_times(&clean_b),
        ) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err("After outlier removal, not enough data points remain".to_string()),
        };
        if a.mean == 0.0 || b.mean == 0.0 {
            return Err("Timer resolution too coarse: zero mean time".to_string());
        }

        let mean_ratio = f64::max(a.mean, b.mean) / f64::min(a.mean, b.mean);
        let (t_statistic, degrees_of_freedom) = Self::welch(&a, &b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);
        let max_rel_std_dev = f64::max(a.rel_std_dev(), b.rel_std_dev());
        let combined_score = Self::combined_score(mean_ratio, t_statistic, max_rel_std_dev);

        let cohens_d = Self::cohens_d(&a, &b);
        let margin = Self::t_critical(degrees_of_freedom, 0.95)
            * (a.standard_error_sq() + b.standard_error_sq()).sqrt();
        let mean_diff = (a.mean - b.mean).abs();

        Ok(TimingAnalysis {
            mean_a: a.mean,
            mean_b: b.mean,
            std_dev_a: a.std_dev(),
            std_dev_b: b.std_dev(),
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            combined_score,
            is_constant_time: combined_score <= config.combined_score_threshold
                && mean_ratio <= config.mean_ratio_max.max(1.0 / config.mean_ratio_min),
            cohens_d,
            effect_size_interpretation: Self::interpret_effect_size(cohens_d),
            confidence_interval: ((mean_diff - margin).max(0.0), mean_diff + margin),
        })
    }
}

/// Human readable summary of a timing comparison
pub fn generate_test_insights(
    analysis: &TimingAnalysis,
    config: &TestConfig,
    primitive_name: &str,
) -> String {
    if analysis.is_constant_time {
        return format!("PASS: {} timing is input independent.\n", primitive_name);
    }

    let diff_percent = (analysis.mean_a - analysis.mean_b).abs()
        / f64::min(analysis.mean_a, analysis.mean_b)
        * 100.0;
    let mut insights = format!(
        "FAIL: {} timing depends on its input.\n\
         \x20 Mean: {:.0} ns vs {:.0} ns (diff: {:.1}%)\n\
         \x20 Stats: t={:.1}, p={:.2e}, d={:.2} ({})\n\
         \x20 Score: {:.3} (threshold {:.3})\n",
        primitive_name,
        analysis.mean_a,
        analysis.mean_b,
        diff_percent,
        analysis.t_statistic,
        analysis.p_value,
        analysis.cohens_d,
        analysis.effect_size_interpretation,
        analysis.combined_score,
        config.combined_score_threshold,
    );

    if analysis.mean_ratio > 1.5 && analysis.p_value < 0.001 {
        insights.push_str("  Pattern: large consistent gap, likely a secret-dependent branch\n");
    } else if analysis.t_statistic > config.t_stat_threshold && analysis.cohens_d < 1.5 {
        insights.push_str("  Pattern: small but consistent gap, check table lookups\n");
    } else {
        insights.push_str("  Pattern: noisy measurement, rerun on an idle machine\n");
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stats() {
        let stats = SampleStats::from_times(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert!((stats.variance - 32.0 / 7.0).abs() < 1e-12);
        assert!(SampleStats::from_times(&[1]).is_none());
    }

    #[test]
    fn test_remove_outliers_drops_spike() {
        let mut times = vec![100u128; 20];
        times[3] = 101;
        times[7] = 99;
        times.push(10_000);
        let cleaned = TimingTester::remove_outliers(&times);
        assert_eq!(cleaned.len(), 20);
        assert!(!cleaned.contains(&10_000));
    }

    #[test]
    fn test_p_value_bounds() {
        assert!((TimingTester::p_value(0.0, 30.0) - 1.0).abs() < 1e-9);
        assert!(TimingTester::p_value(10.0, 30.0) < 1e-6);
        assert_eq!(TimingTester::p_value(f64::NAN, 30.0), 1.0);
    }

    #[test]
    fn test_identical_samples_pass() {
        let tester = TimingTester::new(0, 0);
        let a = [100, 101, 99, 100, 102, 98, 100, 101];
        let analysis = tester
            .analyze_constant_time(&a, &a, &TestConfig::for_ecdh())
            .unwrap();
        assert_eq!(analysis.mean_ratio, 1.0);
        assert_eq!(analysis.t_statistic, 0.0);
        assert!(analysis.is_constant_time);
    }

    #[test]
    fn test_doubled_timing_fails() {
        let tester = TimingTester::new(0, 0);
        let a = [100, 101, 99, 100, 102, 98, 100, 101];
        let b = [200, 202, 198, 200, 204, 196, 200, 202];
        let config = TestConfig::for_ecdh();
        let analysis = tester.analyze_constant_time(&a, &b, &config).unwrap();
        assert!(!analysis.is_constant_time);
        assert!(generate_test_insights(&analysis, &config, "toy").starts_with("FAIL"));
    }
}
