use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use link_codec::{LinkCodec, uri};
use mech_data::{Database, DefinitionData};
use mech_loadout::{Loadout, Side};

mod logging;
mod recipe;

use recipe::BuildRecipe;

#[derive(Debug, Parser)]
struct Cli {
    /// Path to the reference database JSON.
    #[arg(short, long, default_value = "data/definitions.json")]
    data: PathBuf,

    /// Print debug output.
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Encodes a build recipe JSON into a shareable link.
    Encode {
        /// Path to the recipe file.
        recipe: PathBuf,
        /// Emit the plain-HTTP trampoline link instead of `gearlink://`.
        #[arg(long)]
        trampoline: bool,
    },
    /// Decodes a link and prints the loadout.
    Decode {
        /// The link, or its bare Base64 payload.
        link: String,
    },
    /// Dumps the raw wire fields of a link.
    Inspect {
        /// The link, or its bare Base64 payload.
        link: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let db = load_database(&cli.data)?;
    let codec = LinkCodec::new()?;

    match cli.command {
        Command::Encode { recipe, trampoline } => {
            let recipe = load_recipe(&recipe)?;
            let loadout = recipe.build(&db)?;
            log::info!(
                "encoding {} at {:.1} tons",
                loadout.chassis().name,
                loadout.total_tonnage()
            );

            let payload = codec.encode(&loadout)?;
            let link = if trampoline {
                uri::to_trampoline_uri(&payload)
            } else {
                uri::to_scheme_uri(&payload)
            };
            println!("{link}");
        },
        Command::Decode { link } => {
            let loadout = codec.decode_uri(&db, &link)?;
            print_loadout(&loadout);
        },
        Command::Inspect { link } => {
            let payload = uri::payload_from_uri(&link)?;
            print_raw(&payload)?;
        },
    }

    Ok(())
}

fn load_database(path: &Path) -> anyhow::Result<Database> {
    let file = fs::File::open(path)
        .with_context(|| format!("failed to open database file `{}`", path.display()))?;
    let data: DefinitionData =
        serde_json::from_reader(BufReader::new(file)).context("failed to parse database file")?;
    let db = Database::from_definition(data)?;
    log::debug!("loaded {} chassis", db.all_chassis().len());
    Ok(db)
}

fn load_recipe(path: &Path) -> anyhow::Result<BuildRecipe> {
    let file = fs::File::open(path)
        .with_context(|| format!("failed to open recipe file `{}`", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).context("failed to parse recipe file")
}

fn print_loadout(loadout: &Loadout<'_>) {
    let chassis = loadout.chassis();
    println!("{} ({:.1} / {:.1} tons)", chassis.name, loadout.total_tonnage(), chassis.max_tonnage);
    println!("  upgrades: {:?}", loadout.upgrades());
    println!("  efficiencies: {:?}", loadout.efficiencies());
    if !loadout.actuators().is_empty() {
        println!("  actuators: {:?}", loadout.actuators());
    }

    for slot in loadout.locations() {
        let kind = slot.kind();
        let armor = if kind.two_sided() {
            format!("{}/{}", slot.armor(Side::Front), slot.armor(Side::Back))
        } else {
            slot.armor(Side::Front).to_string()
        };

        print!("  {:2} [{armor:>5}]", kind.code());
        if let Some(pod) = slot.pod() {
            print!(" <{}>", pod.name);
        }
        for item in slot.items() {
            print!(" {}", item.name);
        }
        println!();
    }

    for module in loadout.modules() {
        println!("  module: {}", module.name);
    }
}

fn print_raw(payload: &[u8]) -> anyhow::Result<()> {
    let Some((&[magic, flags, hi, lo], rest)) = payload.split_first_chunk::<4>() else {
        anyhow::bail!("payload is shorter than a link header");
    };

    println!("magic:      {magic:#04x}");
    println!("flags:      {flags:#010b}");
    println!("chassis id: {}", u16::from_be_bytes([hi, lo]));
    println!("payload:    {} bytes total, {} past the header", payload.len(), rest.len());
    Ok(())
}
