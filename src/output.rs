//! Result formatting: a plain ranked table or JSON

use crate::index::stats::IndexStats;
use crate::index::types::RankedDoc;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Significant digits of a printed score
const SCORE_PRECISION: i32 = 2;

/// When to color table output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    fn choice(self) -> ColorChoice {
        match self {
            ColorWhen::Auto if io::stdout().is_terminal() => ColorChoice::Auto,
            ColorWhen::Auto | ColorWhen::Never => ColorChoice::Never,
            ColorWhen::Always => ColorChoice::Always,
        }
    }
}

/// Format a score with two significant digits, `%.2g` style.
pub fn format_score(score: f64) -> String {
    if score == 0.0 || !score.is_finite() {
        return format!("{}", score);
    }

    // Round first so the exponent reflects the printed mantissa
    let sci = format!("{:.*e}", (SCORE_PRECISION - 1) as usize, score);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= SCORE_PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (SCORE_PRECISION - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, score)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Write the ranking table: a `DocId Score` header, then one row per
/// document with its 1-based number.
pub fn write_ranking<W: WriteColor>(
    out: &mut W,
    ranked: &[RankedDoc],
    names: Option<&[String]>,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    if names.is_some() {
        writeln!(out, "DocId Score Name")?;
    } else {
        writeln!(out, "DocId Score")?;
    }
    out.reset()?;

    for entry in ranked {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", u64::from(entry.doc) + 1)?;
        out.reset()?;
        write!(out, " {}", format_score(entry.score))?;

        if let Some(name) = names.and_then(|n| n.get(entry.doc as usize)) {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
            write!(out, " {}", name)?;
            out.reset()?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Print the ranking table to stdout
pub fn print_ranking(ranked: &[RankedDoc], names: Option<&[String]>, color: ColorWhen) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color.choice());
    write_ranking(&mut stdout, ranked, names)
}

#[derive(Serialize)]
struct JsonRow<'a> {
    /// 1-based, as in the table
    doc: u64,
    score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// Statistics and results in one document
#[derive(Serialize)]
struct JsonReport<'a> {
    stats: &'a IndexStats,
    results: Vec<JsonRow<'a>>,
}

fn json_rows<'a>(ranked: &[RankedDoc], names: Option<&'a [String]>) -> Vec<JsonRow<'a>> {
    ranked
        .iter()
        .map(|entry| JsonRow {
            doc: u64::from(entry.doc) + 1,
            score: entry.score,
            name: names
                .and_then(|n| n.get(entry.doc as usize))
                .map(String::as_str),
        })
        .collect()
}

/// Write the ranking as a JSON array, or as `{"stats", "results"}` when
/// index statistics are included.
pub fn write_ranking_json<W: Write>(
    out: &mut W,
    ranked: &[RankedDoc],
    names: Option<&[String]>,
    stats: Option<&IndexStats>,
) -> io::Result<()> {
    let results = json_rows(ranked, names);
    match stats {
        Some(stats) => serde_json::to_writer_pretty(&mut *out, &JsonReport { stats, results })?,
        None => serde_json::to_writer_pretty(&mut *out, &results)?,
    }
    writeln!(out)
}

/// Print the ranking as JSON to stdout
pub fn print_ranking_json(
    ranked: &[RankedDoc],
    names: Option<&[String]>,
    stats: Option<&IndexStats>,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_ranking_json(&mut lock, ranked, names, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn ranked() -> Vec<RankedDoc> {
        vec![
            RankedDoc { doc: 1, score: 1.0 },
            RankedDoc { doc: 0, score: 1.0 / 3.0 },
        ]
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(1.0), "1");
        assert_eq!(format_score(2.0), "2");
        assert_eq!(format_score(0.25), "0.25");
        assert_eq!(format_score(1.0 / 3.0), "0.33");
        assert_eq!(format_score(2.0 / 3.0), "0.67");
        assert_eq!(format_score(10.0), "10");
        assert_eq!(format_score(0.2), "0.2");
        assert_eq!(format_score(0.0), "0");
    }

    #[test]
    fn test_format_score_exponent() {
        assert_eq!(format_score(123.0), "1.2e+02");
        assert_eq!(format_score(0.00001234), "1.2e-05");
        assert_eq!(format_score(0.0001), "0.0001");
        assert_eq!(format_score(100.0), "1e+02");
    }

    #[test]
    fn test_write_ranking_table() {
        let mut out = NoColor::new(Vec::new());
        write_ranking(&mut out, &ranked(), None).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "DocId Score\n2 1\n1 0.33\n");
    }

    #[test]
    fn test_write_ranking_with_names() {
        let names = vec!["a.txt".to_string(), "b.txt".to_string()];
        let mut out = NoColor::new(Vec::new());
        write_ranking(&mut out, &ranked(), Some(&names)).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "DocId Score Name\n2 1 b.txt\n1 0.33 a.txt\n");
    }

    #[test]
    fn test_empty_ranking_prints_header() {
        let mut out = NoColor::new(Vec::new());
        write_ranking(&mut out, &[], None).unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "DocId Score\n");
    }

    #[test]
    fn test_write_ranking_json() {
        let names = vec!["a.txt".to_string(), "b.txt".to_string()];
        let mut out = Vec::new();
        write_ranking_json(&mut out, &ranked(), Some(&names), None).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["doc"], 2);
        assert_eq!(value[0]["score"], 1.0);
        assert_eq!(value[0]["name"], "b.txt");
        assert_eq!(value[1]["doc"], 1);
    }

    #[test]
    fn test_json_omits_missing_names() {
        let mut out = Vec::new();
        write_ranking_json(&mut out, &ranked(), None, None).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value[0].get("name").is_none());
    }

    #[test]
    fn test_json_with_stats_is_one_document() {
        let index = crate::index::build_index(&["the cat", "cat"], 3).unwrap();
        let stats = IndexStats::collect(&index);
        let mut out = Vec::new();
        write_ranking_json(&mut out, &ranked(), None, Some(&stats)).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["stats"]["documents"], 2);
        assert_eq!(value["results"].as_array().unwrap().len(), 2);
        assert_eq!(value["results"][0]["doc"], 2);
    }
}
