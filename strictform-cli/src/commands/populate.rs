//! `strictform populate`: read field values out of a record.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use strictform_json::{Catalog, JsonForm};

use super::{load_form, read_json};

/// Arguments for `strictform populate`.
#[derive(Args, Debug)]
pub struct PopulateArgs {
    /// Form definition file, or the name of a form under ~/.strictform/forms.
    #[arg(long)]
    pub form: String,

    /// JSON record to read from.
    #[arg(long)]
    pub record: PathBuf,
}

impl PopulateArgs {
    pub fn run(self) -> Result<()> {
        let definition = load_form(&self.form)?;
        let record = read_json(&self.record)?;

        let mut form = JsonForm::new(definition, Catalog::new());
        let summary = form.populate(&record);
        tracing::info!(
            form = %form.definition().name,
            handled = summary.handled.len(),
            deferred = summary.deferred.len(),
            "populated"
        );

        println!("{}", serde_json::to_string_pretty(&form.values())?);
        Ok(())
    }
}
