//! Display functions for command results

use super::formatters::{create_progress_bar, keyboard_lines, verdict_row, verdict_summary};
use crate::commands::{AuditReport, CheckResult};
use crate::core::MAX_GUESSES;
use crate::game::Stats;
use colored::Colorize;

/// Print the result of checking one guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}   {}   {}",
        verdict_row(&result.guess, &result.verdict),
        result.verdict.to_emoji(),
        result.verdict
    );
    println!("  {}", verdict_summary(&result.verdict).bright_black());

    println!();
    for line in keyboard_lines(&result.keys) {
        println!("  {line}");
    }
    println!();

    if result.verdict.is_solved() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print persisted statistics
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:    {}", stats.played());
    println!("   Wins:      {}", stats.wins.to_string().green());
    println!("   Losses:    {}", stats.losses.to_string().red());
    println!(
        "   Win rate:  {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate().take(MAX_GUESSES) {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 40);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
    println!();
}

/// Print the result of an audit run
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUDIT RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words:            {}", report.words);
    println!("   Pairs checked:    {}", report.pairs_checked);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if report.passed() {
        println!("\n{}", "✅ Every verdict satisfied the evaluation rules".green().bold());
        return;
    }

    println!(
        "\n{}",
        format!("❌ {} violations", report.violations.len()).red().bold()
    );
    for violation in report.violations.iter().take(20) {
        println!(
            "   {} / {} → {}  {}",
            violation.secret.to_uppercase(),
            violation.guess.to_uppercase(),
            violation.verdict,
            violation.rule.bright_black()
        );
    }
}
