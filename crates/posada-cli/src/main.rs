// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod render;

use anyhow::{Context, Result, bail};
use config::Config;
use posada_report::{
    Granularity, ReportRequest, RoomTypeFilter, find_roster, generate_report, parse_report_date,
    summarize,
};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_tracing();

    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    if options.rooms {
        print!("{}", render::render_room_types());
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `posada --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    if options.check_only {
        // Config is already validated; vet the flags too when a range was given.
        if options.from.is_some() || options.to.is_some() {
            build_request(&options, &config)?;
        }
        return Ok(());
    }

    let request = build_request(&options, &config)?;
    let periods = generate_report(&request);
    let summary = summarize(&periods);

    if let Some(label) = &options.roster {
        let roster = find_roster(&periods, label);
        let guest_count = periods
            .iter()
            .find(|metrics| metrics.period.label == *label)
            .map(|metrics| metrics.guest_count)
            .unwrap_or(0);
        if options.json {
            println!("{}", render::roster_json(label, roster, guest_count)?);
        } else {
            print!("{}", render::render_roster(label, roster, guest_count));
        }
        return Ok(());
    }

    if options.json {
        println!("{}", render::report_json(&periods, &summary)?);
    } else {
        print!("{}", render::render_report(&periods, &summary, request.granularity));
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    from: Option<String>,
    to: Option<String>,
    granularity: Option<String>,
    room_type: Option<String>,
    include_closed_rooms: bool,
    revenue_includes_tax: bool,
    roster: Option<String>,
    json: bool,
    rooms: bool,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        from: None,
        to: None,
        granularity: None,
        room_type: None,
        include_closed_rooms: false,
        revenue_includes_tax: false,
        roster: None,
        json: false,
        rooms: false,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--from" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--from requires a \"DD Mon YYYY\" date"))?;
                options.from = Some(value.as_ref().to_owned());
            }
            "--to" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--to requires a \"DD Mon YYYY\" date"))?;
                options.to = Some(value.as_ref().to_owned());
            }
            "--granularity" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow::anyhow!("--granularity requires daily, weekly, or monthly")
                })?;
                options.granularity = Some(value.as_ref().to_owned());
            }
            "--room-type" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--room-type requires all or a room type name"))?;
                options.room_type = Some(value.as_ref().to_owned());
            }
            "--roster" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--roster requires a period label"))?;
                options.roster = Some(value.as_ref().to_owned());
            }
            "--include-closed-rooms" => {
                options.include_closed_rooms = true;
            }
            "--revenue-includes-tax" => {
                options.revenue_includes_tax = true;
            }
            "--json" => {
                options.json = true;
            }
            "--rooms" => {
                options.rooms = true;
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

/// Folds CLI flags over the config defaults into the engine request.
/// The date range is required here, at the caller level; the engine itself
/// treats an absent range as an empty report, not an error.
fn build_request(options: &CliOptions, config: &Config) -> Result<ReportRequest> {
    let (Some(from), Some(to)) = (&options.from, &options.to) else {
        bail!("both --from and --to are required to run a report");
    };

    let from = parse_report_date(from).context("--from")?;
    let to = parse_report_date(to).context("--to")?;

    let granularity = match &options.granularity {
        Some(raw) => Granularity::parse(raw).ok_or_else(|| {
            anyhow::anyhow!("unsupported granularity {raw:?}; use daily, weekly, or monthly")
        })?,
        None => config.granularity()?,
    };
    let room_type = match &options.room_type {
        Some(raw) => RoomTypeFilter::parse(raw).ok_or_else(|| {
            anyhow::anyhow!("unknown room type {raw:?}; use all or one of the room type names")
        })?,
        None => config.room_type()?,
    };

    Ok(ReportRequest {
        from: Some(from),
        to: Some(to),
        granularity,
        room_type,
        include_closed_rooms: options.include_closed_rooms,
        revenue_includes_tax: options.revenue_includes_tax,
        closed_rooms: config.closed_rooms()?,
    })
}

fn print_help() {
    println!("posada occupancy reports");
    println!("  --from \"DD Mon YYYY\"     Report range start (required)");
    println!("  --to \"DD Mon YYYY\"       Report range end (required)");
    println!("  --granularity <g>        daily, weekly, or monthly");
    println!("  --room-type <t>          all, standard, deluxe, suite, executive, family");
    println!("  --include-closed-rooms   Subtract configured closures from availability");
    println!("  --revenue-includes-tax   Report revenue with tax included");
    println!("  --roster <label>         Print the guest list for one period");
    println!("  --json                   Emit JSON instead of a table");
    println!("  --rooms                  Print the room type inventory");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config and flags without reporting");
    println!("  --help                   Show this help");
}
