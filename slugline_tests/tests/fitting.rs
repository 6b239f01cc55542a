// Copyright 2024 the Slugline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shrinking content to a target width.

use anyhow::Result;
use slugline::{BlockStyle, FitOptions, Fittable, Line, ShrinkPolicy, Slug, StyledRun};
use slugline_tests::{frames, scripted_line, ScriptedRun, ScriptedStyle};

#[test]
fn line_shrink_reaches_saturated_slugs() -> Result<()> {
    let shrinking = ScriptedStyle::new(100.0, 50.0, 1);
    let saturated = ScriptedStyle::new(100.0, 50.0, 0);
    let mut line = Line::new(vec![
        Slug::<ScriptedRun>::new("a", shrinking.clone(), None)?,
        Slug::new("b", saturated.clone(), None)?,
    ]);
    assert!(line.shrink());
    assert_eq!(shrinking.calls(), 1);
    assert_eq!(saturated.calls(), 1);

    // Now both are saturated, and the saturated slug is still asked.
    assert!(!line.shrink());
    assert_eq!(shrinking.calls(), 2);
    assert_eq!(saturated.calls(), 2);
    Ok(())
}

#[test]
fn saturated_fit_is_not_an_error() -> Result<()> {
    let mut line = scripted_line("wide", ScriptedStyle::new(400.0, 50.0, 2))?;
    let outcome = line.fit(10.0)?;
    assert!(!outcome.fitted);
    assert_eq!(outcome.iterations, 2);
    assert_eq!(outcome.width, 100.0);
    assert_eq!(line.width()?, 100.0);
    Ok(())
}

#[test]
fn fit_stops_once_narrow_enough() -> Result<()> {
    let style = ScriptedStyle::new(400.0, 50.0, 10);
    let mut line = scripted_line("wide", style.clone())?;
    let outcome = line.fit(150.0)?;
    assert!(outcome.fitted);
    assert_eq!(outcome.width, 100.0);
    assert_eq!(style.calls(), 2);
    Ok(())
}

#[test]
fn fit_is_idempotent() -> Result<()> {
    let style = ScriptedStyle::new(400.0, 50.0, 10);
    let mut line = scripted_line("wide", style.clone())?;
    let first = line.fit(150.0)?;
    let calls = style.calls();
    let geometry = frames(&line.pens());
    let second = line.fit(150.0)?;
    assert_eq!(second.width, first.width);
    assert_eq!(second.iterations, 0);
    assert_eq!(style.calls(), calls);
    assert_eq!(frames(&line.pens()), geometry);
    Ok(())
}

#[test]
fn iteration_budget_bounds_fitting() -> Result<()> {
    let style = ScriptedStyle::new(400.0, 50.0, usize::MAX);
    let mut line = scripted_line("wide", style.clone())?;
    let outcome = line.fit_with(0.0, &FitOptions::default().with_max_iterations(5))?;
    assert!(!outcome.fitted);
    assert_eq!(outcome.iterations, 5);
    assert_eq!(style.calls(), 5);
    Ok(())
}

#[test]
fn shrink_never_widens() -> Result<()> {
    let style = BlockStyle::new(30.0, 60.0).with_tracking(2.0);
    let mut slug = Slug::<slugline::BlockRun>::new("shrinking text", style, None)?;
    let mut width = slug.width()?;
    while slug.shrink() {
        let next = slug.width()?;
        assert!(next <= width, "{next} > {width}");
        width = next;
    }
    let run = &slug.runs()[0];
    assert_eq!(run.tracking(), 0.0);
    assert!(run.scale() >= ShrinkPolicy::default().min_scale);
    Ok(())
}

#[test]
fn tracking_gives_way_before_scale() -> Result<()> {
    let style = BlockStyle::new(10.0, 20.0).with_tracking(0.5);
    let mut slug = Slug::<slugline::BlockRun>::new("abc", style, None)?;
    assert!(slug.shrink());
    assert_eq!(slug.runs()[0].tracking(), 0.25);
    assert_eq!(slug.runs()[0].scale(), 1.0);
    assert!(slug.shrink());
    assert!(slug.shrink());
    assert_eq!(slug.runs()[0].tracking(), 0.0);
    assert!(slug.runs()[0].scale() < 1.0);
    Ok(())
}

#[test]
fn fixed_policy_never_shrinks() -> Result<()> {
    let style = BlockStyle::new(10.0, 20.0).with_shrink(ShrinkPolicy::fixed());
    let mut slug = Slug::<slugline::BlockRun>::new("abc", style, None)?;
    let outcome = slug.fit(1.0)?;
    assert_eq!(outcome.iterations, 0);
    assert_eq!(outcome.width, 30.0);
    Ok(())
}
