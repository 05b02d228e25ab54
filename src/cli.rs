// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Calendar month; defaults to the current one")
}

pub fn build_cli() -> Command {
    Command::new("gofinances")
        .version(clap::crate_version!())
        .about("Track income and expenses and see where the money went each month")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(std::path::PathBuf))
                .help("SQLite file to use instead of the platform data dir"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output on stderr (repeatable)"),
        )
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("auth")
                .about("Sign in and out")
                .subcommand(
                    Command::new("sign-in")
                        .about("Sign in with a social account")
                        .arg(
                            Arg::new("provider")
                                .long("provider")
                                .required(true)
                                .value_parser(["google", "apple"]),
                        )
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("email").long("email"))
                        .arg(Arg::new("photo").long("photo").value_name("URL")),
                )
                .subcommand(Command::new("sign-out").about("Forget the signed-in user"))
                .subcommand(json_flags(
                    Command::new("whoami").about("Show the signed-in user"),
                )),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Register a new transaction dated now")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("amount").long("amount").allow_hyphen_values(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .help("positive (income) or negative (outcome)"),
                        )
                        .arg(Arg::new("category").long("category").help("Category key")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(month_arg())
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(json_flags(
            Command::new("dashboard").about("Entries, expenses and net total with the full listing"),
        ))
        .subcommand(json_flags(
            Command::new("resume")
                .about("Spend by category for one month")
                .arg(month_arg())
                .arg(
                    Arg::new("prev")
                        .long("prev")
                        .value_parser(value_parser!(u32))
                        .conflicts_with("next")
                        .help("Step back N months from the selected one"),
                )
                .arg(
                    Arg::new("next")
                        .long("next")
                        .value_parser(value_parser!(u32))
                        .help("Step forward N months from the selected one"),
                ),
        ))
        .subcommand(
            Command::new("category")
                .about("Category reference data")
                .subcommand(json_flags(Command::new("list"))),
        )
        .subcommand(
            Command::new("config")
                .about("Display settings")
                .subcommand(Command::new("get"))
                .subcommand(
                    Command::new("set-locale")
                        .arg(Arg::new("locale").required(true).value_name("pt-BR|en-US")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the signed-in user's transactions to a file")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
