//! Holt-Winters exponential smoothing with additive trend and seasonality

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{Forecast, ForecastModel, TrainedForecastModel};
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Additive Holt-Winters exponential smoothing model.
///
/// Fits level, trend and seasonal components to the history, choosing
/// the smoothing parameters by minimising the in-sample sum of squared
/// one-step-ahead errors with a bounded Nelder-Mead search.
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Number of periods per seasonal cycle
    season_length: usize,
}

/// Trained additive Holt-Winters model
#[derive(Debug, Clone)]
pub struct TrainedExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Final level state
    level: f64,
    /// Final trend state
    trend: f64,
    /// Final seasonal states, indexed by period position
    seasonal: Vec<f64>,
    /// Number of training observations
    n_obs: usize,
    /// Date of the last historical observation
    last_timestamp: NaiveDate,
    /// Spacing of the historical index
    frequency: Duration,
}

/// Smoothing weights for level, trend and seasonal updates
#[derive(Debug, Clone, Copy)]
struct SmoothingParams {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

/// Component states after running the recursions over the history
struct FittedState {
    level: f64,
    trend: f64,
    seasonal: Vec<f64>,
    sse: f64,
}

impl ExponentialSmoothing {
    /// Create a new additive Holt-Winters model
    pub fn new(season_length: usize) -> Result<Self> {
        if season_length == 0 {
            return Err(ForecastError::InvalidParameter(
                "Season length must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Exponential Smoothing (season={})", season_length),
            season_length,
        })
    }
}

impl ForecastModel for ExponentialSmoothing {
    type Trained = TrainedExponentialSmoothing;

    fn train(&self, history: &TimeSeries) -> Result<Self::Trained> {
        let values = history.values();
        let m = self.season_length;

        if values.len() < 2 * m {
            return Err(ForecastError::InsufficientHistory(format!(
                "Holt-Winters needs at least 2 full seasonal cycles ({} observations), got {}",
                2 * m,
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::ModelFitFailure(
                "History contains non-finite values".to_string(),
            ));
        }

        let params = optimize_params(values, m);
        let state = run_recursions(values, m, params);

        if !state.sse.is_finite() {
            return Err(ForecastError::ModelFitFailure(
                "Smoothing recursions diverged on this history".to_string(),
            ));
        }

        debug!(
            season_length = m,
            history_len = values.len(),
            alpha = params.alpha,
            beta = params.beta,
            gamma = params.gamma,
            sse = state.sse,
            "Holt-Winters fit complete"
        );

        Ok(TrainedExponentialSmoothing {
            name: self.name.clone(),
            level: state.level,
            trend: state.trend,
            seasonal: state.seasonal,
            n_obs: values.len(),
            last_timestamp: history.last_timestamp(),
            frequency: history.frequency(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedExponentialSmoothing {
    fn forecast(&self, horizon: usize) -> Result<Forecast> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Horizon must be at least 1".to_string(),
            ));
        }

        let m = self.seasonal.len();
        let values: Vec<f64> = (1..=horizon)
            .map(|h| {
                let seasonal = self.seasonal[(self.n_obs + h - 1) % m];
                self.level + h as f64 * self.trend + seasonal
            })
            .collect();

        let timestamps: Vec<NaiveDate> = (1..=horizon)
            .map(|i| self.last_timestamp + self.frequency * i as i32)
            .collect();

        Forecast::new(values, timestamps)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Initial states from the first two seasonal cycles: level is the
/// first-cycle mean, trend the per-period change between cycle means,
/// seasonal indices the first-cycle deviations from the level.
fn initial_state(values: &[f64], m: usize) -> (f64, f64, Vec<f64>) {
    let mean1: f64 = values[..m].iter().sum::<f64>() / m as f64;
    let mean2: f64 = values[m..2 * m].iter().sum::<f64>() / m as f64;

    let level = mean1;
    let trend = (mean2 - mean1) / m as f64;
    let seasonal: Vec<f64> = values[..m].iter().map(|&v| v - level).collect();

    (level, trend, seasonal)
}

/// Run the additive update equations over the history, accumulating the
/// one-step-ahead squared error.
fn run_recursions(values: &[f64], m: usize, params: SmoothingParams) -> FittedState {
    let SmoothingParams { alpha, beta, gamma } = params;

    let (mut level, mut trend, mut seasonal) = initial_state(values, m);
    let mut sse = 0.0;

    for t in m..values.len() {
        let s_prev = seasonal[t % m];

        let one_step = level + trend + s_prev;
        let error = values[t] - one_step;
        sse += error * error;

        let prev_level = level;
        level = alpha * (values[t] - s_prev) + (1.0 - alpha) * (prev_level + trend);
        trend = beta * (level - prev_level) + (1.0 - beta) * trend;
        seasonal[t % m] = gamma * (values[t] - level) + (1.0 - gamma) * s_prev;
    }

    FittedState {
        level,
        trend,
        seasonal,
        sse,
    }
}

/// Pick smoothing parameters by SSE with a bounded Nelder-Mead search.
fn optimize_params(values: &[f64], m: usize) -> SmoothingParams {
    let objective = |point: &[f64]| {
        let params = SmoothingParams {
            alpha: point[0],
            beta: point[1],
            gamma: point[2],
        };
        let sse = run_recursions(values, m, params).sse;
        if sse.is_finite() {
            sse
        } else {
            f64::MAX
        }
    };

    let initial = [0.3, 0.05, 0.1];
    let lower = [0.001, 0.001, 0.001];
    let upper = [0.999, 0.5, 0.999];

    let best = nelder_mead(objective, &initial, &lower, &upper, 200, 1e-6);

    SmoothingParams {
        alpha: best[0],
        beta: best[1],
        gamma: best[2],
    }
}

fn clamp_point(point: &mut [f64], lower: &[f64], upper: &[f64]) {
    for (i, v) in point.iter_mut().enumerate() {
        *v = v.clamp(lower[i], upper[i]);
    }
}

/// Bounded Nelder-Mead simplex minimisation.
fn nelder_mead<F>(
    f: F,
    initial: &[f64],
    lower: &[f64],
    upper: &[f64],
    max_iter: usize,
    tol: f64,
) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let dim = initial.len();
    let n_vertices = dim + 1;

    let mut start = initial.to_vec();
    clamp_point(&mut start, lower, upper);

    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(n_vertices);
    simplex.push(start.clone());
    for i in 0..dim {
        let mut vertex = start.clone();
        let step = (upper[i] - lower[i]) * 0.1;
        vertex[i] = (vertex[i] + step).min(upper[i]);
        if (vertex[i] - start[i]).abs() < 1e-12 {
            vertex[i] = (vertex[i] - step).max(lower[i]);
        }
        simplex.push(vertex);
    }

    let mut scores: Vec<f64> = simplex.iter().map(|v| f(v)).collect();

    for _ in 0..max_iter {
        let mut order: Vec<usize> = (0..n_vertices).collect();
        order.sort_by(|&a, &b| {
            scores[a]
                .partial_cmp(&scores[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Convergence on simplex diameter
        let diameter: f64 = simplex[order[0]]
            .iter()
            .zip(simplex[order[n_vertices - 1]].iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max);
        if diameter < tol {
            return simplex[order[0]].clone();
        }

        let mut centroid = vec![0.0; dim];
        for &idx in &order[..n_vertices - 1] {
            for (j, c) in centroid.iter_mut().enumerate() {
                *c += simplex[idx][j];
            }
        }
        for c in centroid.iter_mut() {
            *c /= (n_vertices - 1) as f64;
        }

        let worst = order[n_vertices - 1];
        let second_worst = order[n_vertices - 2];

        let mut reflected: Vec<f64> = centroid
            .iter()
            .zip(simplex[worst].iter())
            .map(|(&c, &w)| 2.0 * c - w)
            .collect();
        clamp_point(&mut reflected, lower, upper);
        let f_reflected = f(&reflected);

        if f_reflected < scores[order[0]] {
            let mut expanded: Vec<f64> = centroid
                .iter()
                .zip(reflected.iter())
                .map(|(&c, &r)| 2.0 * r - c)
                .collect();
            clamp_point(&mut expanded, lower, upper);
            let f_expanded = f(&expanded);

            if f_expanded < f_reflected {
                simplex[worst] = expanded;
                scores[worst] = f_expanded;
            } else {
                simplex[worst] = reflected;
                scores[worst] = f_reflected;
            }
        } else if f_reflected < scores[second_worst] {
            simplex[worst] = reflected;
            scores[worst] = f_reflected;
        } else {
            let (contract_from, f_contract_from) = if f_reflected < scores[worst] {
                (reflected.clone(), f_reflected)
            } else {
                (simplex[worst].clone(), scores[worst])
            };

            let mut contracted: Vec<f64> = centroid
                .iter()
                .zip(contract_from.iter())
                .map(|(&c, &w)| 0.5 * (c + w))
                .collect();
            clamp_point(&mut contracted, lower, upper);
            let f_contracted = f(&contracted);

            if f_contracted < f_contract_from {
                simplex[worst] = contracted;
                scores[worst] = f_contracted;
            } else {
                // Shrink all vertices towards the best
                let best = simplex[order[0]].clone();
                for &idx in &order[1..] {
                    for j in 0..dim {
                        simplex[idx][j] = 0.5 * (simplex[idx][j] + best[j]);
                    }
                    clamp_point(&mut simplex[idx], lower, upper);
                    scores[idx] = f(&simplex[idx]);
                }
            }
        }
    }

    let best_idx = scores
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0);
    simplex[best_idx].clone()
}
