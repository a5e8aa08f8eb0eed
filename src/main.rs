use clap::Parser;
use offer_estimator::config::{CliArgs, Command, StoreConfig};
use offer_estimator::core::format::{format_nok, render_summary, summary_lines};
use offer_estimator::utils::error::{ErrorSeverity, OfferError};
use offer_estimator::utils::{logger, validation::Validate};
use offer_estimator::{
    derive_quote, AfterSave, ContentLevel, DesignLevel, Feature, MaintenancePlan, MemoryStore,
    OfferStore, QuoteSession, RestOfferStore, Selection, SiteType,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let saving = matches!(args.command, Command::Save { .. });

    let outcome = match &args.command {
        Command::Catalog => {
            print_catalog();
            Ok(())
        }
        Command::Estimate(selection) => {
            print_estimate(&selection.to_selection());
            Ok(())
        }
        Command::Save {
            selection,
            notes,
            dry_run,
        } => {
            let mut selection = selection.to_selection();
            selection.notes = notes.clone();
            save_offer(&args.config, selection, *dry_run).await
        }
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let code = exit_code(e.severity(), saving);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}

/// 根據錯誤嚴重程度決定退出碼; a save that did not happen never exits 0.
fn exit_code(severity: ErrorSeverity, saving: bool) -> i32 {
    match severity {
        ErrorSeverity::Low if saving => 2,
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn print_catalog() {
    println!("Type nettside");
    for site_type in SiteType::ALL {
        println!(
            "  {:<10} {:<32} fra {}",
            site_type.id(),
            site_type.label(),
            format_nok(site_type.base_price())
        );
    }

    println!("Designnivå");
    for level in DesignLevel::ALL {
        println!("  {:<10} {:<32} + {}", level.id(), level.label(), format_nok(level.surcharge()));
    }

    println!("Funksjonalitet");
    for feature in Feature::CATALOG {
        println!("  {:<12} {:<30} + {}", feature.id(), feature.label(), format_nok(feature.price()));
    }

    println!("Innhold");
    for level in ContentLevel::ALL {
        println!("  {:<10} {:<32} + {}", level.id(), level.label(), format_nok(level.surcharge()));
    }

    println!("Vedlikeholdsavtale");
    for plan in MaintenancePlan::ALL {
        println!(
            "  {:<10} {:<32} {}/mnd",
            plan.id(),
            plan.label(),
            format_nok(plan.monthly_rate())
        );
    }

    println!(
        "De 3 første sidene er inkludert. Deretter {} per ekstra side.",
        format_nok(offer_estimator::PageCount::EXTRA_PAGE_RATE)
    );
}

fn print_estimate(selection: &Selection) {
    let quote = derive_quote(selection);
    println!("{}", render_summary(&summary_lines(selection, &quote)));
}

async fn save_offer(config_path: &str, selection: Selection, dry_run: bool) -> Result<(), OfferError> {
    let (store, after_save): (Arc<dyn OfferStore>, AfterSave) = if dry_run {
        tracing::info!("🔍 DRY RUN MODE - offer is kept in memory only");
        (Arc::new(MemoryStore::new()), AfterSave::Keep)
    } else {
        let config = StoreConfig::load(config_path)?;

        // 驗證配置
        config.validate()?;
        tracing::info!("✅ Configuration loaded and validated successfully");

        let store = RestOfferStore::new(&config);
        tracing::debug!("Offers endpoint: {}", store.endpoint());
        (Arc::new(store), config.after_save())
    };

    let mut session = QuoteSession::with_selection(store, after_save, selection);
    print_estimate(session.selection());

    let record = session.save().await?;

    println!("✅ Tilbud lagret (id {})", record.id);
    if let Some(created_at) = record.created_at {
        println!("🕒 {}", created_at.to_rfc3339());
    }
    Ok(())
}
