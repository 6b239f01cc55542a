// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shrink-to-fit protocol shared by runs, slugs and lines.

use crate::Result;

/// Options for [`Fittable::fit_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOptions {
    /// Upper bound on shrink rounds, so fitting terminates even when each
    /// round only shaves off a vanishing amount.
    pub max_iterations: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl FitOptions {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// The result of a fit.
///
/// Fitting is best-effort: `fitted` is false when content could not shrink
/// far enough, which is not treated as an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOutcome {
    /// Width after the last shrink round.
    pub width: f64,
    /// Number of shrink rounds that changed something.
    pub iterations: usize,
    pub fitted: bool,
}

/// Content that can be measured and shrunk in place.
pub trait Fittable {
    /// The current rendered width.
    fn width(&self) -> Result<f64>;

    /// Performs one round of size reduction.
    ///
    /// Returns `false` when nothing could be reduced any further, in which
    /// case nothing was changed.
    fn shrink(&mut self) -> bool;

    /// Shrinks until the width is at most `target_width`, using default options.
    fn fit(&mut self, target_width: f64) -> Result<FitOutcome> {
        self.fit_with(target_width, &FitOptions::default())
    }

    /// Shrinks until the width is at most `target_width`, a shrink round
    /// reports no change, or the iteration budget runs out.
    fn fit_with(&mut self, target_width: f64, options: &FitOptions) -> Result<FitOutcome> {
        let mut width = self.width()?;
        let mut iterations = 0;
        while width > target_width && iterations < options.max_iterations {
            if !self.shrink() {
                break;
            }
            iterations += 1;
            let next = self.width()?;
            debug_assert!(next <= width, "shrink() grew the width: {width} -> {next}");
            log::trace!("fit round {iterations}: {width} -> {next} (target {target_width})");
            width = next;
        }
        let fitted = width <= target_width;
        if !fitted {
            log::debug!(
                "Shrink saturated after {iterations} rounds at width {width} (target {target_width})"
            );
        }
        Ok(FitOutcome {
            width,
            iterations,
            fitted,
        })
    }
}

/// How a run gives up space when asked to shrink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShrinkPolicy {
    /// Amount removed from tracking per round.
    pub tracking_step: f64,
    /// Tracking is never reduced below this.
    pub tracking_limit: f64,
    /// Factor applied to the scale per round once tracking is exhausted.
    pub scale_step: f64,
    /// The scale is never reduced below this.
    pub min_scale: f64,
}

impl Default for ShrinkPolicy {
    fn default() -> Self {
        Self {
            tracking_step: 0.25,
            tracking_limit: 0.0,
            scale_step: 0.98,
            min_scale: 0.05,
        }
    }
}

impl ShrinkPolicy {
    /// A policy under which nothing ever shrinks.
    pub fn fixed() -> Self {
        Self {
            tracking_step: 0.0,
            tracking_limit: f64::MAX,
            scale_step: 1.0,
            min_scale: f64::MAX,
        }
    }

    pub fn with_tracking(mut self, step: f64, limit: f64) -> Self {
        self.tracking_step = step;
        self.tracking_limit = limit;
        self
    }

    pub fn with_scale(mut self, step: f64, min_scale: f64) -> Self {
        self.scale_step = step;
        self.min_scale = min_scale;
        self
    }
}

/// The mutable size state owned by each run.
///
/// Tracking is reduced first; the scale only starts to drop once tracking
/// has reached its limit. Neither value ever increases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunScale {
    scale: f64,
    tracking: f64,
    policy: ShrinkPolicy,
}

impl RunScale {
    pub fn new(tracking: f64, policy: ShrinkPolicy) -> Self {
        Self {
            scale: 1.0,
            tracking,
            policy,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn tracking(&self) -> f64 {
        self.tracking
    }

    pub fn policy(&self) -> &ShrinkPolicy {
        &self.policy
    }

    pub fn shrink(&mut self) -> bool {
        let policy = &self.policy;
        if policy.tracking_step > 0.0 && self.tracking > policy.tracking_limit {
            self.tracking = (self.tracking - policy.tracking_step).max(policy.tracking_limit);
            return true;
        }
        if policy.scale_step < 1.0 && self.scale > policy.min_scale {
            let next = (self.scale * policy.scale_step).max(policy.min_scale);
            if next < self.scale {
                self.scale = next;
                return true;
            }
        }
        false
    }
}
