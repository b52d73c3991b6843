//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use corpintel_domain::Intent;
use corpintel_extractor::{Analysis, CompetitorRecord, Finding, Lookup, SubsidiaryRecord};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format extracted company names.
    pub fn format_companies(&self, companies: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(companies)?),
            OutputFormat::Table => {
                if companies.is_empty() {
                    return Ok(self.colorize("No companies found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Company"]);
                for company in companies {
                    builder.push_record([company.as_str()]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(companies.join("\n")),
        }
    }

    /// Format a ranked competitor list.
    pub fn format_competitors(&self, competitors: &[CompetitorRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(competitors)?),
            OutputFormat::Table => {
                if competitors.is_empty() {
                    return Ok(self.colorize("No competitors found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Rank", "Company", "Ticker", "Reason"]);
                for c in competitors {
                    builder.push_record([
                        c.rank.to_string(),
                        c.company_name.clone(),
                        c.ticker.clone(),
                        c.reason.clone(),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(competitors
                .iter()
                .map(|c| c.company_name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a subsidiary list.
    pub fn format_subsidiaries(&self, subsidiaries: &[SubsidiaryRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(subsidiaries)?),
            OutputFormat::Table => {
                if subsidiaries.is_empty() {
                    return Ok(self.colorize("No subsidiaries found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Company", "Ticker", "Details"]);
                for s in subsidiaries {
                    builder.push_record([
                        s.company_name.as_str(),
                        s.ticker.as_str(),
                        s.details.as_str(),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(subsidiaries
                .iter()
                .map(|s| s.company_name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a full prompt analysis.
    pub fn format_analysis(&self, analysis: &Analysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "companies": analysis.companies,
                    "intent": analysis.intent.as_str(),
                    "findings": analysis.findings,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut sections = vec![
                    self.info(&format!("Intent: {}", analysis.intent)),
                    self.format_companies(&analysis.companies)?,
                ];
                for finding in &analysis.findings {
                    sections.push(self.format_finding(finding)?);
                }
                Ok(sections.join("\n\n"))
            }
            OutputFormat::Quiet => {
                let mut lines = Vec::new();
                for finding in &analysis.findings {
                    let names = match &finding.lookup {
                        Lookup::Competitors(records) => {
                            records.iter().map(|r| r.company_name.as_str()).collect::<Vec<_>>()
                        }
                        Lookup::Subsidiaries(records) => {
                            records.iter().map(|r| r.company_name.as_str()).collect()
                        }
                    };
                    for name in names {
                        lines.push(format!("{}\t{}", finding.company, name));
                    }
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format the intent a prompt routes to.
    pub fn format_intent(&self, intent: Intent) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "intent": intent.as_str() }),
            )?),
            OutputFormat::Table => Ok(self.info(&format!("Intent: {}", intent))),
            OutputFormat::Quiet => Ok(intent.as_str().to_string()),
        }
    }

    fn format_finding(&self, finding: &Finding) -> Result<String> {
        let (heading, body) = match &finding.lookup {
            Lookup::Competitors(records) => (
                format!("Competitors of {}", finding.company),
                self.format_competitors(records)?,
            ),
            Lookup::Subsidiaries(records) => (
                format!("Subsidiaries of {}", finding.company),
                self.format_subsidiaries(records)?,
            ),
        };
        Ok(format!("{}\n{}", self.colorize(&heading, "cyan"), body))
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
