// SPDX-License-Identifier: MPL-2.0
use f2p_showcase::carousel::Message;
use f2p_showcase::catalog::Catalog;
use f2p_showcase::config::{self, Config};
use f2p_showcase::error::Result;
use f2p_showcase::showcase::Showcase;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
f2p_showcase - browse the free-to-play showcase from the terminal

USAGE:
  f2p_showcase [OPTIONS]

OPTIONS:
  --config PATH    Settings file (defaults to the user config directory)
  --catalog PATH   Catalog file, overrides the configured one
  --steps N        Featured lane steps to walk (defaults to one full cycle)
  -h, --help       Print this help
";

struct Flags {
    config_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    steps: Option<usize>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match run(&flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "showcase failed");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> std::result::Result<Flags, pico_args::Error> {
    let flags = Flags {
        config_path: args.opt_value_from_str("--config")?,
        catalog_path: args.opt_value_from_str("--catalog")?,
        steps: args.opt_value_from_str("--steps")?,
    };
    let remaining = args.finish();
    if !remaining.is_empty() {
        let unused = remaining
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        return Err(pico_args::Error::UnusedArgsLeft(unused));
    }
    Ok(flags)
}

fn run(flags: &Flags) -> Result<()> {
    let config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let catalog = load_catalog(flags, &config)?;
    let mut showcase = Showcase::new(catalog, config.lanes());

    print_genres(&showcase);
    if config.show_featured_lane() {
        walk_featured_lane(&mut showcase, flags.steps)?;
    }
    print_lanes(&showcase);
    Ok(())
}

fn load_catalog(flags: &Flags, config: &Config) -> Result<Catalog> {
    match flags.catalog_path.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => Catalog::load_from_path(path),
        None => Catalog::bundled(),
    }
}

fn print_genres(showcase: &Showcase) {
    println!("Game Genres");
    let names: Vec<&str> = showcase.genres().iter().map(|genre| genre.name).collect();
    println!("  {}", names.join(" | "));
    println!();
    println!("Free-to-Play Showcase");
    println!("Browse rotating lanes of free-to-play titles by platform.");
    println!();
}

fn walk_featured_lane(showcase: &mut Showcase, steps: Option<usize>) -> Result<()> {
    println!("Featured Images");
    let featured = showcase.featured_mut();
    if !featured.is_visible() {
        println!("  (no images)");
        println!();
        return Ok(());
    }

    let steps = steps.unwrap_or_else(|| featured.carousel().len());
    for step in 0..=steps {
        if step > 0 {
            featured.handle(Message::Next)?;
        }
        if let (Some(image), Some(counter)) =
            (featured.current(), featured.carousel().counter_label())
        {
            println!("  [{counter}] {} ({})", image.alt_text(), image.url);
        }
    }
    println!();
    Ok(())
}

fn print_lanes(showcase: &Showcase) {
    for lane in showcase.lanes() {
        println!(
            "{} ({} lane, bounce every {}s)",
            lane.spec.label(),
            lane.spec.speed.as_str(),
            lane.spec.speed.animation_secs()
        );
        for card in &lane.cards {
            let game = card.game();
            println!(
                "  #{} {} [{}] {}",
                game.id,
                game.name,
                card.badge(),
                card.display_image()
            );
            if let (Some(image), Some(counter)) =
                (card.current_image(), card.carousel().counter_label())
            {
                println!("      {counter}: {image}");
            }
        }
        println!();
    }
    println!("Placeholder images via placehold.co");
}
