//! Interactive terminal form for collecting one submission at a time

use crate::app::{AppContext, Outcome};
use crate::models::inference::Regressor;
use crate::types::feature::{Feature, Month, Season};
use crate::types::inputs::FormInputs;
use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::debug;

pub const TITLE: &str = "Bike Sharing Demand Prediction";
pub const DESCRIPTION: &str =
    "This app predicts the demand for bike sharing based on various features.";

/// Prompt shown for a continuous feature, e.g. `Enter Hour (0 to 23)`
pub fn numeric_prompt(feature: Feature) -> String {
    let spec = feature.spec();
    format!("Enter {} ({} to {})", spec.name, spec.min, spec.max)
}

/// Labels offered for a categorical feature
pub fn select_items(feature: Feature) -> Result<&'static [&'static str]> {
    feature
        .spec()
        .labels()
        .with_context(|| format!("{} is not a categorical feature", feature))
}

/// Text for the output region
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Predicted(prediction) => prediction.to_string(),
        Outcome::Rejected(err) => err.to_string(),
    }
}

/// Terminal form wizard
pub struct DemandForm {
    theme: ColorfulTheme,
}

impl DemandForm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Run submissions until the user stops
    pub fn run<M: Regressor>(&self, ctx: &mut AppContext<M>) -> Result<()> {
        println!("{}", style(TITLE).bold().cyan());
        println!("{}\n", DESCRIPTION);

        loop {
            let inputs = self.collect()?;

            let submit = Confirm::with_theme(&self.theme)
                .with_prompt("Predict Demand")
                .default(true)
                .interact()
                .context("Failed to read submit action")?;

            if submit {
                let outcome = ctx.submit(&inputs)?;
                self.show(&outcome);
            }

            let again = Confirm::with_theme(&self.theme)
                .with_prompt("Make another prediction?")
                .default(true)
                .interact()
                .context("Failed to read confirmation")?;

            if !again {
                break;
            }
            println!();
        }

        Ok(())
    }

    /// Collect one submission
    pub fn collect(&self) -> Result<FormInputs> {
        let mut inputs = FormInputs::default();

        let season = self.select(Feature::Seasons)?;
        inputs.seasons = Season::from_label(season)
            .with_context(|| format!("Unknown season label {}", season))?;

        let month = self.select(Feature::Month)?;
        inputs.month =
            Month::from_label(month).with_context(|| format!("Unknown month label {}", month))?;

        for feature in Feature::continuous() {
            let value: f64 = Input::with_theme(&self.theme)
                .with_prompt(numeric_prompt(feature))
                .default(feature.spec().min)
                .interact_text()
                .with_context(|| format!("Failed to read {}", feature))?;
            inputs.set_continuous(feature, value);
        }

        debug!(inputs = ?inputs, "Form collected");
        Ok(inputs)
    }

    /// Selection list over a categorical feature's labels
    fn select(&self, feature: Feature) -> Result<&'static str> {
        let labels = select_items(feature)?;
        let index = Select::with_theme(&self.theme)
            .with_prompt(format!("Select {}", feature))
            .items(labels)
            .default(0)
            .interact()
            .with_context(|| format!("Failed to read {}", feature))?;
        Ok(labels[index])
    }

    fn show(&self, outcome: &Outcome) {
        let text = render(outcome);
        match outcome {
            Outcome::Predicted(_) => println!("\n{}\n", style(text).bold().green()),
            Outcome::Rejected(_) => println!("\n{}\n", style(text).bold().red()),
        }
    }
}

impl Default for DemandForm {
    fn default() -> Self {
        Self::new()
    }
}
