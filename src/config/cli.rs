use crate::domain::model::{ContentLevel, DesignLevel, Feature, MaintenancePlan, Selection, SiteType};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "offer-estimator")]
#[command(about = "Estimate website project prices and save them as offers")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, default_value = "offer-estimator.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every price in the rate table
    Catalog,
    /// Print the cost breakdown for a selection
    Estimate(SelectionArgs),
    /// Derive the total and save the offer
    Save {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Free-text notes stored with the offer
        #[arg(long, default_value = "")]
        notes: String,

        /// Save to an in-memory store instead of the configured one
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct SelectionArgs {
    #[arg(long, default_value = "business")]
    pub site_type: SiteType,

    /// Number of pages; clamped to 1..=99
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub pages: i64,

    #[arg(long, default_value = "custom")]
    pub design: DesignLevel,

    /// Feature ids, repeatable or comma separated (e.g. contactForm,analytics)
    #[arg(long = "feature", value_delimiter = ',')]
    pub features: Vec<String>,

    #[arg(long, default_value = "assist")]
    pub content: ContentLevel,

    #[arg(long, default_value = "basic")]
    pub maintenance: MaintenancePlan,
}

impl SelectionArgs {
    pub fn to_selection(&self) -> Selection {
        let mut selection = Selection {
            site_type: self.site_type,
            design_level: self.design,
            content_level: self.content,
            maintenance_plan: self.maintenance,
            ..Selection::default()
        };
        selection.set_page_count(self.pages);

        for id in &self.features {
            let id = id.trim();
            if Feature::from_id(id).is_none() {
                tracing::warn!("Unknown feature '{}' will not be priced", id);
            }
            selection.selected_features.insert(id.to_string());
        }

        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_estimate_args() {
        let args = CliArgs::parse_from([
            "offer-estimator",
            "estimate",
            "--site-type",
            "landing",
            "--pages",
            "-4",
            "--feature",
            "contactForm,analytics",
            "--feature",
            "analytics",
        ]);

        let Command::Estimate(selection_args) = args.command else {
            panic!("expected estimate command");
        };
        let selection = selection_args.to_selection();

        assert_eq!(selection.site_type, SiteType::Landing);
        assert_eq!(selection.page_count.get(), 1);
        assert_eq!(selection.selected_features.len(), 2);
        assert_eq!(selection.design_level, DesignLevel::Custom);
    }

    #[test]
    fn test_parse_save_args() {
        let args = CliArgs::parse_from([
            "offer-estimator",
            "--verbose",
            "save",
            "--maintenance",
            "pro",
            "--notes",
            "Kunde vil ha nettbutikk",
            "--dry-run",
        ]);

        assert!(args.verbose);
        match args.command {
            Command::Save {
                selection,
                notes,
                dry_run,
            } => {
                assert_eq!(selection.maintenance, MaintenancePlan::Pro);
                assert_eq!(notes, "Kunde vil ha nettbutikk");
                assert!(dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_site_type_is_rejected() {
        let result = CliArgs::try_parse_from(["offer-estimator", "estimate", "--site-type", "portal"]);
        assert!(result.is_err());
    }
}
