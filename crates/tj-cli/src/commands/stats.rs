use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use tj_deck::Category;
use tj_draw::DrawMode;
use tj_stats::{Coverage, FortuneDistribution, ModeReport, UniformityRating};

use super::Globals;

#[derive(Serialize)]
struct StatsOutput {
    reports: Vec<ModeReport>,
    distribution: FortuneDistribution,
}

pub fn run(
    globals: &Globals,
    draws: usize,
    exhaustive: bool,
    profile: Option<&str>,
) -> Result<(), String> {
    if draws == 0 {
        return Err("--draws must be at least 1".into());
    }
    let mut session = super::open_session(globals)?;

    let mut reports = vec![
        session
            .mode_report(DrawMode::Single, None, draws)
            .map_err(|e| e.to_string())?,
        session
            .mode_report(DrawMode::Fortune, None, draws)
            .map_err(|e| e.to_string())?,
    ];
    if let Some(id) = profile {
        reports.push(
            session
                .mode_report(DrawMode::Situation, Some(id), draws)
                .map_err(|e| e.to_string())?,
        );
    }
    let distribution = session
        .fortune_distribution(exhaustive, draws)
        .map_err(|e| e.to_string())?;

    if globals.json {
        return super::print_json(&StatsOutput {
            reports,
            distribution,
        });
    }

    for report in &reports {
        print_mode_report(report);
    }
    print_distribution(&distribution);
    Ok(())
}

fn print_mode_report(report: &ModeReport) {
    let title = match &report.profile_id {
        Some(p) => format!("{} draws ({p})", report.mode),
        None => format!("{} draws", report.mode),
    };
    println!("  {}", title.bold().underline());
    println!(
        "  {} iterations, {} cards drawn, {} distinct ({:.1}%)",
        report.iterations,
        report.cards_drawn,
        report.unique_cards,
        report.unique_rate * 100.0
    );
    let uniformity = report.uniformity.to_string();
    let uniformity = match report.uniformity {
        UniformityRating::VeryUniform => uniformity.green(),
        UniformityRating::ReasonablyUniform => uniformity.yellow(),
        UniformityRating::NonUniform => uniformity.red(),
    };
    println!(
        "  Coefficient of variation {:.3}: {uniformity}",
        report.coefficient_of_variation
    );

    let balance = &report.balance;
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Cards", "Observed", "Expected"]);
    for &c in Category::all() {
        table.add_row(vec![
            c.to_string(),
            balance.counts[c].to_string(),
            format!("{:.1}%", balance.observed[c]),
            format!("{:.1}%", balance.expected[c]),
        ]);
    }
    println!("{table}");
    println!(
        "  Max deviation {:.1} points: {}",
        balance.max_deviation, balance.rating
    );

    let top: Vec<String> = report
        .top_cards
        .iter()
        .map(|c| format!("{} ({})", c.name, c.count))
        .collect();
    println!("  Top cards: {}", top.join(", "));
    println!();
}

fn print_distribution(dist: &FortuneDistribution) {
    let coverage = match dist.coverage {
        Coverage::Exhaustive => "every hand",
        Coverage::Sampled => "sampled hands",
    };
    println!(
        "  {} {}",
        "Fortune levels".bold().underline(),
        format!("({} {coverage})", dist.total).dimmed()
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Level", "Hands", "Share", "Score range"]);
    for level in &dist.levels {
        table.add_row(vec![
            super::level_label(level.level).to_string(),
            level.count.to_string(),
            format!("{:.2}%", level.percentage),
            match level.score_range {
                Some((lo, hi)) => format!("{lo:.1} .. {hi:.1}"),
                None => "--".to_string(),
            },
        ]);
    }
    println!("{table}");

    let s = &dist.scores;
    println!(
        "  Score min {:.1}  max {:.1}  mean {:.2}  median {:.1}  std dev {:.2}",
        s.min, s.max, s.mean, s.median, s.std_dev
    );
    let trends: Vec<String> = dist
        .trends
        .iter()
        .map(|(t, n)| format!("{t} {n}"))
        .collect();
    println!("  Trends: {}", trends.join(", "));
    let horizons: Vec<String> = dist
        .horizons
        .iter()
        .map(|(h, n)| format!("{h} {n}"))
        .collect();
    println!("  Horizons: {}", horizons.join(", "));
    println!(
        "  Deviation from an even split: average {:.1}, max {:.1} points",
        dist.average_deviation, dist.max_deviation
    );
}
