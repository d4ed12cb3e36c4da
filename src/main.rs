use clap::{Arg, ArgAction, ArgMatches, Command};
use hortina_l10n::{
    Config, CropRepository, HortinaApi, Localizer, MachineTranslator, MockMode, MockTranslator,
    PlantRepository, TaskRepository, TranslationCache,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("hortina-l10n")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate Hortina backend records into the UI language")
        .subcommand_required(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .short('l')
                .global(true)
                .help("Target UI language (default: HORTINA_LANG or ES)"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .global(true)
                .help("Use mock translator instead of DeepL")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log cache hits and fallback decisions")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate a single text")
                .arg(Arg::new("text").required(true).index(1))
                .arg(
                    Arg::new("source")
                        .long("source")
                        .short('s')
                        .help("Source language; omit to auto-detect with short-word fallback"),
                ),
        )
        .subcommand(Command::new("crops").about("List crops"))
        .subcommand(
            Command::new("crop")
                .about("Show one crop with its tasks and plant care sheet")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(i32)),
                ),
        )
        .subcommand(
            Command::new("tasks").about("List tasks").arg(
                Arg::new("crop")
                    .long("crop")
                    .short('c')
                    .help("Only tasks of this crop")
                    .value_parser(clap::value_parser!(i32)),
            ),
        )
        .subcommand(
            Command::new("plants")
                .about("Search the plant catalogue")
                .arg(Arg::new("query").required(true).index(1)),
        )
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "hortina_l10n=debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_localizer(config: &Config, use_mock: bool) -> Result<Localizer, Box<dyn std::error::Error>> {
    let translator: Arc<dyn MachineTranslator> = if use_mock {
        Arc::new(MockTranslator::new(MockMode::Suffix))
    } else {
        Arc::new(config.deepl_provider()?)
    };
    Ok(Localizer::new(translator, Arc::new(TranslationCache::new())))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::from_env()?;
    if let Some(lang) = matches.get_one::<String>("lang") {
        config = config.with_ui_lang(lang)?;
    }

    let localizer = build_localizer(&config, matches.get_flag("mock"))?;
    info!(
        provider = localizer.provider_name(),
        lang = %config.ui_lang,
        "localizer ready"
    );

    let lang = config.ui_lang.as_str();
    match matches.subcommand() {
        Some(("translate", sub)) => {
            let text = sub
                .get_one::<String>("text")
                .ok_or("missing text argument")?;
            let translated = match sub.get_one::<String>("source") {
                Some(source) => localizer.translate(text, source, lang).await,
                None => localizer.translate_auto(text, lang).await,
            };
            println!("{}", translated);
        }
        Some(("crops", _)) => {
            let api: Arc<dyn HortinaApi> = Arc::new(config.backend()?);
            let crops = CropRepository::new(api, localizer).crops(lang).await?;
            print_json(&crops)?;
        }
        Some(("crop", sub)) => {
            let id = *sub.get_one::<i32>("id").ok_or("missing crop id")?;
            let api: Arc<dyn HortinaApi> = Arc::new(config.backend()?);
            let detail = CropRepository::new(api, localizer)
                .crop_detail(id, lang)
                .await?;
            print_json(&detail)?;
        }
        Some(("tasks", sub)) => {
            let api: Arc<dyn HortinaApi> = Arc::new(config.backend()?);
            let repository = TaskRepository::new(api, localizer);
            let tasks = match sub.get_one::<i32>("crop") {
                Some(crop_id) => repository.tasks_for_crop(*crop_id, lang).await?,
                None => repository.tasks(lang).await?,
            };
            print_json(&tasks)?;
        }
        Some(("plants", sub)) => {
            let query = sub
                .get_one::<String>("query")
                .ok_or("missing query argument")?;
            let api: Arc<dyn HortinaApi> = Arc::new(config.backend()?);
            let plants = PlantRepository::new(api, localizer)
                .search_plants(query, lang)
                .await?;
            print_json(&plants)?;
        }
        _ => return Err("unknown command".into()),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    if let Err(e) = run(&matches).await {
        eprintln!("❌ {}", e);
        return Err(e);
    }
    Ok(())
}
