/// Flags days with an abnormal amount of failing builds.
///
/// Returns zero-based indices into the aligned per-day series whose
/// abnormality coefficient lies strictly above mean + one standard
/// deviation of the full coefficient series.
pub fn find_abnormal(passed: &[usize], failed: &[usize]) -> Vec<usize> {
    let coefficients = abnormality_coefficients(passed, failed);

    let mean = compute_mean(&coefficients);
    let deviation = population_std_dev(&coefficients, mean);
    let threshold = mean + deviation;

    coefficients
        .iter()
        .enumerate()
        .filter(|(_, &coefficient)| coefficient > threshold)
        .map(|(index, _)| index)
        .collect()
}

fn abnormality_coefficients(passed: &[usize], failed: &[usize]) -> Vec<f64> {
    passed
        .iter()
        .zip(failed)
        .map(|(&passed, &failed)| abnormality_coefficient(passed, failed))
        .collect()
}

/// With passing builds present the coefficient is the plain failure rate.
/// With zero passed builds the fallback dampens small failure counts
/// (0.2 per failure up to 5) and saturates at 1.0 beyond that, so a day
/// with no builds at all scores 0 and a day of mass failures scores 1.0.
#[allow(clippy::cast_precision_loss)]
fn abnormality_coefficient(passed: usize, failed: usize) -> f64 {
    if passed > 0 {
        failed as f64 / (passed + failed) as f64
    } else if failed <= 5 {
        0.2 * failed as f64
    } else {
        1.0
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

// Population deviation (divisor N): the series is every observed day,
// not a sample.
#[allow(clippy::cast_precision_loss)]
fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}
