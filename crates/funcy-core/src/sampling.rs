//! Grid sampling for visualization.
//!
//! Rendering is an external concern. This module only produces the aligned
//! `(x, y)` grid and hands it to a [`Renderer`]; nothing is read back.

use crate::error::FunctionError;
use crate::function::Function;

/// Default cap on the number of grid points of [`Function::sample`].
pub const DEFAULT_MAX_POINTS: usize = 10_000_000;

/// Points of a function sampled on a regular grid.
///
/// `domain[i]` and `values[i]` always belong together; points where the
/// function is undefined are absent from both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledGrid {
    /// The x coordinates.
    pub domain: Vec<f64>,
    /// The function values at `domain`.
    pub values: Vec<f64>,
}

impl SampledGrid {
    /// Number of sampled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Returns true if no point was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Iterates over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.domain.iter().copied().zip(self.values.iter().copied())
    }
}

/// Something that can display a sampled grid.
pub trait Renderer {
    /// Renders the grid. The caller does not observe any result.
    fn render(&self, grid: &SampledGrid);
}

impl Function {
    /// Samples the function from `start` to `end` every `step`.
    ///
    /// The grid is `start, start + step, ...` while below `end`, followed by
    /// `end` itself. Points where the function is NaN are dropped. At most
    /// [`DEFAULT_MAX_POINTS`] points are generated.
    ///
    /// # Errors
    ///
    /// See [`Function::sample_with_limit`].
    pub fn sample(&self, start: f64, end: f64, step: f64) -> Result<SampledGrid, FunctionError> {
        self.sample_with_limit(start, end, step, DEFAULT_MAX_POINTS)
    }

    /// Samples like [`Function::sample`], with an explicit cap on the number
    /// of grid points.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::InvalidStep`] when `step` is not positive and
    /// finite, [`FunctionError::InvalidRange`] when a bound is not finite, and
    /// [`FunctionError::GridTooLarge`] when the grid would exceed `max_points`.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_with_limit(
        &self,
        start: f64,
        end: f64,
        step: f64,
        max_points: usize,
    ) -> Result<SampledGrid, FunctionError> {
        if !(step > 0.0 && step.is_finite()) {
            return Err(FunctionError::InvalidStep(step));
        }
        if !(start.is_finite() && end.is_finite()) {
            return Err(FunctionError::InvalidRange { start, end });
        }

        let points = ((end - start) / step).ceil().max(0.0) + 1.0;
        if points > max_points as f64 {
            return Err(FunctionError::GridTooLarge {
                points,
                limit: max_points,
            });
        }

        let mut grid = SampledGrid::default();
        let mut push = |x: f64| {
            let y = self.evaluate(x);
            if !y.is_nan() {
                grid.domain.push(x);
                grid.values.push(y);
            }
        };

        // Indexed rather than accumulated, so the grid does not drift
        let mut i = 0_u64;
        loop {
            let x = start + i as f64 * step;
            if x >= end {
                break;
            }
            push(x);
            i += 1;
        }
        push(end);

        Ok(grid)
    }

    /// Samples the function and passes the grid to `renderer`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Function::sample`].
    pub fn plot(
        &self,
        start: f64,
        end: f64,
        step: f64,
        renderer: &dyn Renderer,
    ) -> Result<(), FunctionError> {
        let grid = self.sample(start, end, step)?;
        log::debug!("plotting {} points on [{start}, {end}]", grid.len());
        renderer.render(&grid);
        Ok(())
    }
}
