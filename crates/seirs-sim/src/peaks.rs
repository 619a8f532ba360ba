//! Epidemic peak extraction and cross-replicate summary statistics.

use seirs_core::Day;

use crate::Census;

/// The first epidemic wave's maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Peak {
    pub day:        Day,
    pub infectious: usize,
}

/// First local maximum of the infectious curve: the first interior row `t`
/// with `I[t-1] < I[t] >= I[t+1]`.
///
/// Falls back to the global maximum (earliest on ties) when the curve has no
/// interior local maximum.  Returns `None` for an empty series.
pub fn first_local_peak(series: &[(Day, Census)]) -> Option<Peak> {
    if series.is_empty() {
        return None;
    }
    let at = |k: usize| series[k].1.infectious;

    let local = series.windows(3).position(|w| {
        let (prev, here, next) = (w[0].1.infectious, w[1].1.infectious, w[2].1.infectious);
        prev < here && here >= next
    });

    let k = match local {
        Some(k) => k + 1,
        // Earliest index holding the maximum.
        None => (1..series.len()).fold(0, |best, k| if at(k) > at(best) { k } else { best }),
    };

    Some(Peak { day: series[k].0, infectious: at(k) })
}

/// Mean and sample standard deviation (n − 1) of peak height and peak day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeakStats {
    pub count:       usize,
    pub mean_height: f64,
    pub std_height:  f64,
    pub mean_day:    f64,
    pub std_day:     f64,
}

impl PeakStats {
    /// `None` for an empty slice.  The deviation is 0 for a single peak.
    pub fn from_peaks(peaks: &[Peak]) -> Option<PeakStats> {
        if peaks.is_empty() {
            return None;
        }
        let heights: Vec<f64> = peaks.iter().map(|p| p.infectious as f64).collect();
        let days: Vec<f64> = peaks.iter().map(|p| f64::from(p.day.0)).collect();
        let (mean_height, std_height) = mean_std(&heights);
        let (mean_day, std_day) = mean_std(&days);
        Some(PeakStats {
            count: peaks.len(),
            mean_height,
            std_height,
            mean_day,
            std_day,
        })
    }
}

fn mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.0);
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}
