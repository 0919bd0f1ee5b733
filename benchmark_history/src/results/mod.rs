//!
//! The benchmark comparison results of a metric.
//!

pub mod entry;

use std::cmp;

use colored::Colorize;

use self::entry::Entry;

///
/// The benchmark comparison results of a metric.
///
/// Every factor is direction-adjusted: above `1.0` the candidate is worse than the reference.
///
#[derive(Debug)]
pub struct Results<'a> {
    /// Number of compared measurements.
    pub count: usize,
    /// The best factor.
    pub best: f64,
    /// The worst factor.
    pub worst: f64,
    /// The factor of the candidate total against the reference total.
    pub total: f64,
    /// Regressed measurements.
    pub negatives: Vec<(f64, Entry<'a>)>,
    /// Improved measurements.
    pub positives: Vec<(f64, Entry<'a>)>,
    /// Measurements regressed beyond the alert threshold.
    pub alerts: Vec<(f64, Entry<'a>)>,
}

impl Default for Results<'_> {
    fn default() -> Self {
        Self {
            count: 0,
            best: 1.0,
            worst: 1.0,
            total: 1.0,
            negatives: vec![],
            positives: vec![],
            alerts: vec![],
        }
    }
}

impl<'a> Results<'a> {
    ///
    /// Accounts a single measurement factor.
    ///
    pub fn push(&mut self, factor: f64, entry: Entry<'a>, alert_threshold: f64) {
        if self.count == 0 || factor < self.best {
            self.best = factor;
        }
        if self.count == 0 || factor > self.worst {
            self.worst = factor;
        }
        self.count += 1;

        if factor > alert_threshold {
            self.alerts.push((factor, entry.clone()));
        }
        if factor > 1.0 {
            self.negatives.push((factor, entry));
        } else if factor < 1.0 {
            self.positives.push((factor, entry));
        }
    }

    ///
    /// Sorts regressions worst first and improvements best first.
    ///
    pub fn sort_worst(&mut self) {
        self.negatives
            .sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(cmp::Ordering::Equal));
        self.alerts
            .sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(cmp::Ordering::Equal));
        self.positives
            .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(cmp::Ordering::Equal));
    }

    ///
    /// Writes the top benchmark results to the terminal.
    ///
    pub fn print_top_results(&self, count: usize, group_name: &str) {
        println!(
            "Group '{group_name}' (-%) worst {} out of {}:",
            cmp::min(count, self.negatives.len()),
            self.negatives.len()
        );
        for (value, entry) in self.negatives.iter().take(count) {
            println!("{:010}: {}", Self::format_f64(*value), entry);
        }
        println!();
        println!(
            "Group '{group_name}' (-%) best {} out of {}:",
            cmp::min(count, self.positives.len()),
            self.positives.len()
        );
        for (value, entry) in self.positives.iter().take(count) {
            println!("{:010}: {}", Self::format_f64(*value), entry);
        }
        println!();
    }

    ///
    /// Prints the results summary.
    ///
    pub fn write_all<W>(&self, w: &mut W, group_name: &str) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(
            w,
            "╔═╡ {} ╞{}╡ {} ╞═╗",
            "Change (-%)".bright_white(),
            "═".repeat(32usize.saturating_sub(group_name.len())),
            group_name.bright_white()
        )?;
        writeln!(
            w,
            "║ {:43} {:07} ║",
            "Best".bright_white(),
            Self::format_f64(self.best)
        )?;
        writeln!(
            w,
            "║ {:43} {:07} ║",
            "Worst".bright_white(),
            Self::format_f64(self.worst)
        )?;
        writeln!(
            w,
            "║ {:43} {:07} ║",
            "Total".bright_white(),
            Self::format_f64(self.total)
        )?;

        if !self.alerts.is_empty() {
            writeln!(
                w,
                "╠═╡ {} ╞{}╡ {} ╞═╣",
                "Alerts".bright_red(),
                "═".repeat(37usize.saturating_sub(group_name.len())),
                group_name.bright_white()
            )?;
            for (factor, entry) in self.alerts.iter() {
                writeln!(
                    w,
                    "║ {:43} {} ║",
                    entry.candidate.operation().bright_red(),
                    format!("{factor:6.2}x").bright_red()
                )?;
            }
        }
        writeln!(w, "╚{}╝", "═".repeat(53))?;

        Ok(())
    }

    ///
    /// Formats and colorizes a factor as a reduction percentage.
    ///
    fn format_f64(value: f64) -> colored::ColoredString {
        if value > 1.0 {
            format!("{:7.3}", 100.0 - value * 100.0).bright_red()
        } else if value == 1.0 {
            format!("{:7.3}", 100.0 - value * 100.0).white()
        } else {
            format!("{:7.3}", 100.0 - value * 100.0).green()
        }
    }
}
