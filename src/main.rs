//! Print the rendered descriptions of the game's Excel tables.

mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use d2txt_data::{Dataset, StringTables};
use d2txt_describe::{Context, Localizer};

use settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "d2txt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Excel table directory
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// String table directory
    #[arg(short, long)]
    strings: Option<PathBuf>,

    /// String table language column, e.g. enUS or deDE
    #[arg(short, long)]
    language: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Unique items
    Uniques,
    /// Set items with their worn-count bonuses
    SetItems,
    /// Set partial and full bonuses
    Sets,
    /// Runewords
    Runewords,
    /// Magic prefixes and suffixes
    Affixes,
    /// Gem and rune socket bonuses
    Gems,
    /// Enabled cube recipes
    Cube,
}

const INDENT: &str = "    ";

fn print_lines<S: AsRef<str>>(lines: &[S], depth: usize) {
    let pad = INDENT.repeat(depth);
    for line in lines {
        println!("{pad}{}", line.as_ref());
    }
}

fn print_counted(label: &str, groups: &[(usize, Vec<String>)]) {
    for (count, lines) in groups {
        println!("{INDENT}{label} ({count} items):");
        print_lines(lines, 2);
    }
}

fn run(command: Command, ctx: &Context<'_>) {
    let data = ctx.data;
    match command {
        Command::Uniques => {
            for unique in data.uniques.iter().filter(|u| u.is_enabled()) {
                println!(
                    "{} [level {}, required level {}]",
                    ctx.strings.get(&unique.index),
                    unique.level,
                    unique.level_req
                );
                print_lines(&ctx.describe_unique(unique), 1);
            }
        }
        Command::SetItems => {
            for item in &data.set_items {
                let desc = ctx.describe_set_item(item);
                let base = ctx.item_name(&item.item).unwrap_or_else(|| item.item.clone());
                println!(
                    "{} [{}, {base}, required level {}]",
                    ctx.strings.get(&item.index),
                    ctx.strings.get(&item.set),
                    item.level_req
                );
                print_lines(&desc.properties, 1);
                print_counted("Set bonus", &desc.bonuses);
            }
        }
        Command::Sets => {
            for set in &data.sets {
                let desc = ctx.describe_set(set);
                println!("{}", ctx.strings.get(&set.name));
                print_counted("Partial", &desc.partial);
                if !desc.full.is_empty() {
                    println!("{INDENT}Full set:");
                    print_lines(&desc.full, 2);
                }
            }
        }
        Command::Runewords => {
            for runeword in data.runewords.iter().filter(|rw| rw.is_complete()) {
                let desc = ctx.describe_runeword(runeword);
                println!("{} ({})", desc.name, desc.runes.join(" + "));
                print_lines(&desc.properties, 1);
            }
        }
        Command::Affixes => {
            for (kind, table) in [("prefix", &data.prefixes), ("suffix", &data.suffixes)] {
                for affix in table {
                    println!("{} [{kind}, level {}]", ctx.strings.get(&affix.name), affix.level);
                    print_lines(&ctx.describe_affix(affix), 1);
                }
            }
        }
        Command::Gems => {
            for gem in &data.gems {
                let desc = ctx.describe_gem(gem);
                println!("{} ({})", gem.name, gem.code);
                for (slot, lines) in [
                    ("Weapon", &desc.weapon),
                    ("Helm", &desc.helm),
                    ("Shield", &desc.shield),
                ] {
                    println!("{INDENT}{slot}:");
                    print_lines(lines, 2);
                }
            }
        }
        Command::Cube => {
            for recipe in data.enabled_recipes() {
                let summary = ctx.evaluate_recipe(recipe);
                println!("{}", summary.description);
                println!("{INDENT}In:");
                print_lines(&summary.inputs, 2);
                for (slot, lines) in &summary.outputs {
                    println!("{INDENT}Out ({slot}):");
                    print_lines(lines, 2);
                }
            }
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(dir) = args.data {
        settings.data_dir = dir;
    }
    if let Some(dir) = args.strings {
        settings.strings_dir = dir;
    }
    if let Some(language) = args.language {
        settings.language = language;
    }
    log::debug!("{settings:?}");

    let data = Dataset::load_dir(&settings.data_dir)
        .wrap_err_with(|| format!("loading tables from {}", settings.data_dir.display()))?;
    let tables = StringTables::load_dir(&settings.strings_dir)
        .wrap_err_with(|| format!("loading strings from {}", settings.strings_dir.display()))?;
    let strings = Localizer::with_language(tables, settings.language.clone());

    let ctx = Context::new(&data, &strings, &settings.render);
    run(args.command, &ctx);
    log::debug!("{} strings cached", strings.cached());
    Ok(())
}
