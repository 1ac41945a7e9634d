use clap::Parser;
use waterchem::core::form::{format_dose, format_error};
use waterchem::core::ConfigProvider;
use waterchem::domain::ports::CatalogSource;
use waterchem::utils::logger::{self, LogFormat};
use waterchem::utils::validation::{validate_range, Validate};
use waterchem::{
    AppConfig, CatalogLoader, CliConfig, Command, DoseForm, LocalStorage, WaterChemError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        config.log_format()
    };
    logger::init_cli_logger(cli.verbose, config.logging.level.as_deref(), log_format);

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    match cli.command.clone() {
        None => {
            tracing::info!("WaterChem CLI starting");
            for line in cli.startup_lines() {
                println!("{}", line);
            }
        }
        Some(Command::Dose {
            volume,
            target,
            stock,
            decimals,
        }) => {
            let decimal_places = decimals.unwrap_or_else(|| config.decimal_places());
            if let Err(e) = validate_range(
                "--decimals",
                decimal_places,
                0,
                waterchem::config::toml_config::MAX_DECIMAL_PLACES,
            ) {
                fail(&e);
            }

            let form = DoseForm::new(volume, target, stock);
            match form.evaluate() {
                Ok(ml) => println!("{}", format_dose(ml, decimal_places)),
                Err(e) => {
                    println!("{}", format_error(&e));
                    fail(&e);
                }
            }
        }
        Some(Command::Catalog {
            equipment,
            reagents,
            plants,
        }) => {
            let equipment = equipment.as_deref().or(config.equipment_path());
            let reagents = reagents.as_deref().or(config.reagents_path());
            let plants = plants.as_deref().or(config.plants_path());

            if equipment.is_none() && reagents.is_none() && plants.is_none() {
                fail(&WaterChemError::MissingConfigError {
                    field: "catalog.equipment_path, catalog.reagents_path or catalog.plants_path"
                        .to_string(),
                });
            }

            let loader = CatalogLoader::new(
                LocalStorage::new(config.base_dir()),
                config.type_registry(),
            );
            tracing::debug!(
                "Known equipment types: {}",
                loader.registry().equipment_types().collect::<Vec<_>>().join(", ")
            );
            tracing::debug!(
                "Known measurements: {}",
                loader.registry().measurements().collect::<Vec<_>>().join(", ")
            );

            if let Some(path) = equipment {
                match loader.load_equipment(path).await {
                    Ok(set) => println!("✅ {}: {} equipment entries", path, set.equipment.len()),
                    Err(e) => fail(&e),
                }
            }
            if let Some(path) = reagents {
                match loader.load_reagents(path).await {
                    Ok(set) => println!("✅ {}: {} reagents", path, set.reagents.len()),
                    Err(e) => fail(&e),
                }
            }
            if let Some(path) = plants {
                match loader.load_plants(path).await {
                    Ok(catalog) => println!(
                        "✅ {}: {} species, {} plant instances",
                        path,
                        catalog.species.len(),
                        catalog.instance_count()
                    ),
                    Err(e) => fail(&e),
                }
            }
        }
    }

    Ok(())
}

fn fail(e: &WaterChemError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
