//! Console tables, a terminal line chart, and an optional PNG chart.

use crate::aggregate::{DailyCount, ReleaseDayFrequency, StatusCount, WeekdaySummary};
use crate::date::{format_date, weekday_name};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

const BAR_WIDTH: u64 = 50;

/// One line per day: date, weekday, bar, count.
pub fn write_daily_chart<W: Write>(w: &mut W, title: &str, series: &[DailyCount]) -> Result<()> {
    writeln!(w, "{}", title)?;
    if series.is_empty() {
        writeln!(w, "  (no dated responses)")?;
        return Ok(());
    }
    let max = series.iter().map(|d| d.responses).max().unwrap_or(0);
    for d in series {
        let len = if max > BAR_WIDTH { d.responses * BAR_WIDTH / max } else { d.responses };
        writeln!(
            w,
            "{} {:<3} |{:<width$} {}",
            format_date(d.date),
            &weekday_name(d.weekday)[..3],
            "#".repeat(len as usize),
            d.responses,
            width = max.min(BAR_WIDTH) as usize
        )?;
    }
    Ok(())
}

pub fn write_weekday_table<W: Write>(w: &mut W, rows: &[WeekdaySummary]) -> Result<()> {
    writeln!(w, "Number of decisions received by day of week")?;
    writeln!(w, "{:>3}  {:<10} {:>9} {:>12}", "dow", "day", "responses", "pct_of_total")?;
    for r in rows {
        writeln!(
            w,
            "{:>3}  {:<10} {:>9} {:>12.2}",
            r.day_of_week_number,
            weekday_name(r.weekday),
            r.responses,
            r.pct_of_total
        )?;
    }
    Ok(())
}

pub fn write_release_day_table<W: Write>(w: &mut W, rows: &[ReleaseDayFrequency]) -> Result<()> {
    writeln!(w, "Frequency that decisions are sent out on a day of the week")?;
    writeln!(w, "{:<10} {:>18} {:>9} {:>14}", "day", "day_of_week_number", "frequency", "pct_occurrence")?;
    for r in rows {
        writeln!(
            w,
            "{:<10} {:>18} {:>9} {:>14.2}",
            weekday_name(r.weekday),
            r.day_of_week_number,
            r.frequency,
            r.pct_occurrence
        )?;
    }
    Ok(())
}

pub fn write_status_table<W: Write>(w: &mut W, rows: &[StatusCount]) -> Result<()> {
    writeln!(w, "Responses by status")?;
    let width = rows.iter().map(|r| r.status.chars().count()).max().unwrap_or(6).max(6);
    for r in rows {
        writeln!(w, "{:<width$} {:>6}", r.status, r.responses, width = width)?;
    }
    Ok(())
}

/// Render the daily series as a line chart to a PNG file.
pub fn save_chart_png(path: &Path, title: &str, series: &[DailyCount]) -> Result<()> {
    draw_chart_png(path, title, series).with_context(|| format!("writing chart to {}", path.display()))?;
    tracing::info!("Saved chart to {}", path.display());
    Ok(())
}

fn draw_chart_png(path: &Path, title: &str, series: &[DailyCount]) -> Result<()> {
    use plotters::prelude::*;

    let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = series.len().saturating_sub(1).max(1);
    let y_max = series.iter().map(|d| d.responses).max().unwrap_or(0) + 1;
    let label = |i: &usize| series.get(*i).map(|d| format_date(d.date)).unwrap_or_default();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..x_max, 0u64..y_max)?;
    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Number of Responses")
        .x_label_formatter(&label)
        .draw()?;
    chart.draw_series(LineSeries::new(
        series.iter().enumerate().map(|(i, d)| (i, d.responses)),
        &BLUE,
    ))?;
    root.present()?;
    Ok(())
}
