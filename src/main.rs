use chrono::Local;
use clap::Parser;
use holter::application::{export_diary, init::init, ConfigService, EntryStore};
use holter::cli::{format_diary, format_entry, format_options, Cli, Commands};
use holter::domain::{EntryField, FieldUpdate, Symptom, EXPORT_FILENAME};
use holter::error::{HolterError, Result};
use holter::infrastructure::{EditorSession, FileDownload, FileSystemStore, StdoutDownload, Workspace};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; verbosity comes from HOLTER_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("HOLTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn open_diary() -> Result<(Workspace, EntryStore<FileSystemStore>)> {
    let workspace = Workspace::discover()?;
    let store = EntryStore::load(workspace.store());
    Ok((workspace, store))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized holter diary at {}", path.display());
            Ok(())
        }
        Commands::Add {
            date,
            time,
            activity,
            symptoms,
            notes,
        } => {
            // Validate everything first so a bad value leaves no blank entry behind
            let now = Local::now().naive_local();
            let mut updates: Vec<FieldUpdate> = Vec::new();
            for (field, raw) in [
                (EntryField::Date, date),
                (EntryField::Time, time),
                (EntryField::Activity, activity),
                (EntryField::Notes, notes),
            ] {
                if let Some(raw) = raw {
                    updates.push(field.parse_value(&raw, now)?);
                }
            }
            let symptoms = symptoms
                .iter()
                .map(|s| Symptom::from_str(s))
                .collect::<Result<Vec<_>>>()?;

            let (_, mut store) = open_diary()?;
            let index = store.add_entry()?;
            for update in updates {
                store.update_field(index, update)?;
            }
            for symptom in symptoms {
                if !store.snapshot().get(index)?.symptoms.contains(symptom) {
                    store.toggle_symptom(index, symptom)?;
                }
            }

            println!("Added entry #{}", index + 1);
            Ok(())
        }
        Commands::Set {
            number,
            field,
            value,
            edit,
        } => {
            let field = EntryField::from_str(&field)?;
            let index = Commands::entry_index(number);
            let (workspace, mut store) = open_diary()?;

            let update = if edit {
                if field != EntryField::Notes {
                    return Err(HolterError::Config(format!(
                        "--edit only applies to notes, not {}",
                        field
                    )));
                }
                let current = store.snapshot().get(index)?.notes.clone();
                let editor = EditorSession::new(workspace.load_config()?.get_editor());
                FieldUpdate::Notes(editor.edit_text(&current, &workspace.holter_dir())?)
            } else {
                let raw = value.unwrap_or_default();
                field.parse_value(&raw, Local::now().naive_local())?
            };

            store.update_field(index, update)?;
            println!("Updated {} of entry #{}", field, number);
            Ok(())
        }
        Commands::Toggle { number, symptom } => {
            let symptom = Symptom::from_str(&symptom)?;
            let (_, mut store) = open_diary()?;

            let checked = store.toggle_symptom(Commands::entry_index(number), symptom)?;
            let mark = if checked { "[x]" } else { "[ ]" };
            println!("Entry #{}: {} {}", number, mark, symptom);
            Ok(())
        }
        Commands::List => {
            let (_, store) = open_diary()?;
            print!("{}", format_diary(store.snapshot()));
            if store.snapshot().is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Show { number } => {
            let (_, store) = open_diary()?;
            let entry = store.snapshot().get(Commands::entry_index(number))?;
            print!("{}", format_entry(number.get(), entry));
            Ok(())
        }
        Commands::Export { output, stdout } => {
            let (workspace, store) = open_diary()?;

            if stdout {
                export_diary(store.snapshot(), &StdoutDownload)?;
                return Ok(());
            }

            let dir = match output {
                Some(dir) => dir,
                None => workspace
                    .load_config()?
                    .resolve_export_dir(workspace.root()),
            };
            let sink = FileDownload::new(dir);
            let count = export_diary(store.snapshot(), &sink)?;
            println!(
                "Exported {} entries to {}",
                count,
                sink.target(EXPORT_FILENAME).display()
            );
            Ok(())
        }
        Commands::Options => {
            print!("{}", format_options());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("export_dir = {}", config.export_dir.display());
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: holter config [--list | <key> [<value>]]");
                println!("Valid keys: export_dir, editor, created");
            }
            Ok(())
        }
    }
}
