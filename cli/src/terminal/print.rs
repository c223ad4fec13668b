use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use sweepr_core::sweep::SweepReport;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{line}");
}

pub fn fat_separator() {
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}

pub fn centerln(msg: &str) {
    let width = console::measure_text_width(msg);
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2);
    println!("{space}{msg}");
}

/// Progress bar ticking over one sweep; per-host lines go through
/// [`ProgressBar::println`] so they land above the bar.
pub fn sweep_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let style = ProgressStyle::with_template("{spinner:.blue} probed {pos}/{len} {msg}")
        .expect("static template is well-formed");

    bar.set_style(style);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

pub fn up_line(bar: &ProgressBar, addr: &std::net::IpAddr, latency: Option<Duration>) {
    let latency = latency
        .map(|d| format!(" ({:.0?})", d))
        .unwrap_or_default();
    bar.println(format!(
        "{} {} is UP{}",
        "✓".green().bold(),
        addr.to_string().bright_green(),
        latency.dimmed()
    ));
}

pub fn summary(report: &SweepReport) {
    fat_separator();
    header("sweep results");

    for addr in &report.up {
        println!("  {}", addr.to_string().bright_green());
    }

    let up_count: ColoredString = format!("{} hosts up", report.up.len()).bold().green();
    let elapsed: ColoredString = format!("{:.2}s", report.elapsed.as_secs_f64())
        .bold()
        .yellow();
    let line = format!(
        "Sweep complete: {} of {} probed in {}",
        up_count, report.total, elapsed
    );

    centerln(&line);
    fat_separator();
}
