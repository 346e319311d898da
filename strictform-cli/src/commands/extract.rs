//! `strictform extract`: write a submission into a record.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use strictform_json::JsonForm;

use super::{load_catalog, load_form, read_json};

/// Arguments for `strictform extract`.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Form definition file, or the name of a form under ~/.strictform/forms.
    #[arg(long)]
    pub form: String,

    /// JSON record to write into.
    #[arg(long)]
    pub record: PathBuf,

    /// JSON object of submitted values keyed by field name.
    #[arg(long)]
    pub submitted: PathBuf,

    /// YAML message catalog used to render field errors.
    #[arg(long)]
    pub messages: Option<PathBuf>,

    /// Write the updated record here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl ExtractArgs {
    pub fn run(self) -> Result<()> {
        let definition = load_form(&self.form)?;
        let catalog = load_catalog(self.messages.as_deref())?;
        let mut record = read_json(&self.record)?;
        let submitted = read_json(&self.submitted)?;

        let mut form = JsonForm::new(definition, catalog);
        form.submit(&submitted)
            .with_context(|| format!("rejected submission {}", self.submitted.display()))?;
        let summary = form.extract(Some(&mut record));

        let rendered = serde_json::to_string_pretty(&record)?;
        match &self.output {
            Some(path) => std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => println!("{rendered}"),
        }

        for field in &summary.suppressed {
            eprintln!(
                "{} {}: record rejected the write; left unchanged",
                "!".yellow(),
                field.0.bold()
            );
        }
        for (field, error) in form.errors() {
            eprintln!("{} {}: {}", "✗".red(), field.0.bold(), error.message);
        }
        if summary.has_errors() {
            bail!("{} field error(s) attached", summary.field_errors);
        }
        Ok(())
    }
}
