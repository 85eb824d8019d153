//! Text and JSON rendering of reports

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use typerank_chart::{CombinedRecord, CountRecord, ElementReport, Statistic};
use typerank_protocol::Listing;
use typerank_team::{ElementTally, Roster, TeamAnalysis, TeamTotals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn element_report(report: &ElementReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return json(report);
    }

    let mut out = String::new();
    for (statistic, ranking) in report.rankings() {
        out.push_str(&ranking_text(statistic, ranking));
        out.push('\n');
    }
    out.push_str(&combined_text(&report.combined));
    Ok(out)
}

pub fn ranking(
    statistic: Statistic,
    records: &[CountRecord],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => json(&records),
        OutputFormat::Text => Ok(ranking_text(statistic, records)),
    }
}

fn ranking_text(statistic: Statistic, records: &[CountRecord]) -> String {
    let mut out = format!("--- {} ---\n", statistic.title().to_uppercase());
    for record in records {
        let _ = writeln!(out, "{:<10} {:>3}", record.element, record.count);
    }
    out
}

fn combined_text(records: &[CombinedRecord]) -> String {
    let mut out = String::from("--- ELEMENTS COMBINED ATTACK DEFENSE STRENGTH WEAKNESS ---\n");
    let _ = writeln!(
        out,
        "{:<10} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
        "element", "score", "base", "atk+", "atk-", "def+", "def-", "sdef+", "satk-"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<10} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
            r.element,
            r.score,
            r.base_score,
            r.attack_strength,
            r.attack_weakness,
            r.defense_strength,
            r.defense_weakness,
            r.super_defense_strength,
            r.super_attack_weakness
        );
    }
    out
}

#[derive(Serialize)]
struct TeamReport<'a> {
    team: &'a Roster,
    #[serde(flatten)]
    analysis: &'a TeamAnalysis,
    totals: TeamTotals,
    balance: i64,
}

pub fn team(roster: &Roster, analysis: &TeamAnalysis, format: OutputFormat) -> Result<String> {
    let totals = analysis.totals();
    if format == OutputFormat::Json {
        return json(&TeamReport {
            team: roster,
            analysis,
            totals,
            balance: totals.balance(),
        });
    }

    let mut out = format!("team: {}\n", roster);
    let sections = [
        ("attack strong against", &analysis.attack_strong_against, totals.attack_strong),
        ("attack weak against", &analysis.attack_weak_against, totals.attack_weak),
        ("defense strong against", &analysis.defense_strong_against, totals.defense_strong),
        ("defense weak against", &analysis.defense_weak_against, totals.defense_weak),
    ];
    for (title, tally, sum) in sections {
        out.push_str(&tally_text(title, tally, sum));
    }
    let _ = writeln!(out, "balance: {}", totals.balance());
    Ok(out)
}

fn tally_text(title: &str, tally: &ElementTally, sum: u32) -> String {
    let mut out = format!("--- {} ---\n", title);
    for (element, count) in tally {
        let _ = writeln!(out, "{:<10} {:>3}", element, count);
    }
    let _ = writeln!(out, "sum: {}", sum);
    out
}

pub fn listings(listings: &[Listing], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return json(&listings);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>10} {:>12} {:>8} {:>14} {:>6} {:>5}",
        "id", "price", "power", "cost/power", "level", "star"
    );
    for l in listings {
        let _ = writeln!(
            out,
            "{:>10} {:>12.4} {:>8} {:>14.8} {:>6} {:>5}",
            l.id, l.price, l.power_rating, l.cost_per_power, l.attributes.level, l.attributes.star
        );
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typerank_chart::{ScoreWeights, TypeChart};
    use typerank_team::analyze_team;

    #[test]
    fn test_element_report_text_lists_all_sections() {
        let report =
            ElementReport::build(&TypeChart::standard(), &ScoreWeights::default()).unwrap();
        let text = element_report(&report, OutputFormat::Text).unwrap();

        assert!(text.contains("--- ELEMENTS WITH MOST ATTACK STRENGTH ---"));
        assert!(text.contains("--- ELEMENTS WITH LEAST SUPER ATTACK WEAKNESS ---"));
        assert!(text.contains("--- ELEMENTS COMBINED ATTACK DEFENSE STRENGTH WEAKNESS ---"));
        let steel_row = text
            .lines()
            .find(|line| line.starts_with("steel") && line.split_whitespace().count() == 9)
            .unwrap();
        assert_eq!(steel_row.split_whitespace().nth(1), Some("8"));
    }

    #[test]
    fn test_ranking_json() {
        let chart = TypeChart::standard();
        let records = chart.ranking(Statistic::MostDefenseStrength);
        let out = ranking(Statistic::MostDefenseStrength, &records, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["element"], "steel");
        assert_eq!(value[0]["count"], 9);
    }

    #[test]
    fn test_team_text_and_json() {
        let roster: Roster = "fire, fire".parse().unwrap();
        let analysis = analyze_team(&TypeChart::standard(), roster.members());

        let text = team(&roster, &analysis, OutputFormat::Text).unwrap();
        assert!(text.starts_with("team: fire, fire\n"));
        assert!(text.contains("--- attack strong against ---\ngrass        2\n"));
        assert!(text.contains("sum: 8"));

        let out = team(&roster, &analysis, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["team"], serde_json::json!(["fire", "fire"]));
        assert_eq!(value["attack_strong_against"]["steel"], 2);
        assert_eq!(value["totals"]["defense_strong"], 12);
        assert_eq!(value["balance"], 6);
    }
}
