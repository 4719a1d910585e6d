use anyhow::{anyhow, Result};
use decision_days::{init_tracing_once, weekday_from_name, Credentials, DecisionAnalysis};
use std::io::{self, Write};

const SUBREDDIT: &str = "OMSCS";
const THREAD_ID: &str = "spbavt";

fn main() -> Result<()> {
    init_tracing_once();
    let creds = Credentials::from_env()?;

    let mut analysis = DecisionAnalysis::new()
        .subreddit(SUBREDDIT)
        .thread_id(THREAD_ID);

    // EXCLUDE_WEEKDAYS=tue,sat overrides the default; an empty value keeps every weekday.
    if let Ok(s) = std::env::var("EXCLUDE_WEEKDAYS") {
        let days = s
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(|d| weekday_from_name(d).ok_or_else(|| anyhow!("EXCLUDE_WEEKDAYS: unknown weekday {:?}", d)))
            .collect::<Result<Vec<_>>>()?;
        analysis = analysis.excluded_weekdays(days);
    }
    if let Ok(path) = std::env::var("CHART_PNG") {
        if !path.trim().is_empty() {
            analysis = analysis.save_chart_to(path.trim());
        }
    }

    let report = analysis.run(&creds)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.render(&mut out)?;
    out.flush()?;
    Ok(())
}
