//! Single element healing

use crate::client::HealwatchClient;
use crate::error::CliResult;
use crate::output::{print_error, print_single, print_success, OutputFormat};
use clap::Args;
use colored::*;
use healwatch_types::{ElementData, HealingResponse};

/// Arguments of `healwatch heal`
#[derive(Debug, Args)]
pub struct HealArgs {
    /// Selector the test was written against
    #[arg(short, long)]
    pub selector: String,

    /// Element attribute as key=value (repeatable)
    #[arg(short, long = "attr", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,

    /// Element HTML, used as context for failure reports
    #[arg(long)]
    pub html: Option<String>,

    /// Element is present but not visible
    #[arg(long)]
    pub hidden: bool,

    /// Element is absent from the DOM
    #[arg(long)]
    pub missing: bool,
}

impl HealArgs {
    pub fn element(&self) -> ElementData {
        let mut data = ElementData::new(&self.selector);
        for (key, value) in &self.attrs {
            data = data.attr(key, value);
        }
        if let Some(html) = &self.html {
            data = data.html(html);
        }
        if self.hidden {
            data = data.hidden();
        }
        if self.missing {
            data = data.missing();
        }
        data
    }
}

fn parse_attr(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

/// Execute the heal command
pub async fn execute(args: HealArgs, client: &HealwatchClient, format: OutputFormat) -> CliResult<()> {
    let data = args.element();
    let response = client.heal_element(&data).await?;

    match format {
        OutputFormat::Table => print_response(&data, &response),
        OutputFormat::Json | OutputFormat::Yaml => print_single(&response, format)?,
    }
    Ok(())
}

fn print_response(data: &ElementData, response: &HealingResponse) {
    if response.success {
        print_success(&format!("{} {}", response.status, data.original_selector));
    } else {
        print_error(&format!("{} {}", response.status, data.original_selector));
    }

    if let Some(selector) = &response.healed_selector {
        println!("  Healed selector: {}", selector.bold());
    }
    if let Some(explanation) = &response.explanation {
        println!("  Explanation:     {}", explanation);
    }
    if let Some(error) = &response.error {
        println!("  Error:           {}", error.red());
    }
    if let Some(url) = &response.jira_url {
        println!("  JIRA:            {}", url);
    }
}
