//! `strictform plan`: dry-run view of collection add/remove calls.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use strictform_core::{error::AccessorFailure, types::FieldName, Collection};
use strictform_json::{Catalog, JsonForm};
use strictform_mapper::CollectionPlan;

use super::{load_form, read_json};

/// Arguments for `strictform plan`.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Form definition file, or the name of a form under ~/.strictform/forms.
    #[arg(long)]
    pub form: String,

    /// JSON record the submission would be written into.
    #[arg(long)]
    pub record: PathBuf,

    /// JSON object of submitted values keyed by field name.
    #[arg(long)]
    pub submitted: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    pub fn run(self) -> Result<()> {
        let definition = load_form(&self.form)?;
        let record = read_json(&self.record)?;
        let submitted = read_json(&self.submitted)?;

        let mut form = JsonForm::new(definition, Catalog::new());
        form.submit(&submitted)
            .with_context(|| format!("rejected submission {}", self.submitted.display()))?;
        let plans = form.plan(&record);

        if self.json {
            let report: Vec<FieldPlanJson> = plans.into_iter().map(FieldPlanJson::from).collect();
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        if plans.is_empty() {
            println!(
                "No collection fields in form '{}'.",
                form.definition().name
            );
            return Ok(());
        }
        for (field, plan) in &plans {
            print_plan(field, plan);
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct FieldPlanJson {
    field: String,
    add: Vec<EntryJson>,
    remove: Vec<EntryJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct EntryJson {
    key: String,
    value: Value,
}

fn entries(collection: Collection) -> Vec<EntryJson> {
    collection
        .into_iter()
        .map(|(key, value)| EntryJson {
            key: key.to_string(),
            value,
        })
        .collect()
}

impl From<(FieldName, Result<CollectionPlan, AccessorFailure>)> for FieldPlanJson {
    fn from((field, plan): (FieldName, Result<CollectionPlan, AccessorFailure>)) -> Self {
        match plan {
            Ok(plan) => Self {
                field: field.0,
                add: entries(plan.to_add),
                remove: entries(plan.to_remove),
                error: None,
            },
            Err(failure) => Self {
                field: field.0,
                add: Vec::new(),
                remove: Vec::new(),
                error: Some(failure.to_string()),
            },
        }
    }
}

fn print_plan(field: &FieldName, plan: &Result<CollectionPlan, AccessorFailure>) {
    println!("{}", field.0.bold());
    let plan = match plan {
        Ok(plan) => plan,
        Err(failure) => {
            println!("  {} {}", "✗".red(), failure);
            return;
        }
    };
    if plan.is_empty() {
        println!("  {}", "· unchanged".dimmed());
        return;
    }
    for (key, value) in &plan.to_add {
        println!("  {} [{key}] {value}", "+".green());
    }
    for (key, value) in &plan.to_remove {
        println!("  {} [{key}] {value}", "-".red());
    }
}
