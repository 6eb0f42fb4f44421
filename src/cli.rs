// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn tx_field_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("date").long("date").required(true).help("ISO date YYYY-MM-DD"))
        .arg(
            Arg::new("kind")
                .long("kind")
                .required(true)
                .help("income or expense"),
        )
        .arg(
            Arg::new("label")
                .long("label")
                .required(true)
                .help("Category label, e.g. Expense.Food"),
        )
        .arg(
            Arg::new("amount")
                .long("amount")
                .required(true)
                .help("Non-negative decimal amount"),
        )
        .arg(Arg::new("remark").long("remark").help("Free-text note"))
}

pub fn build_cli() -> Command {
    Command::new("ledgerbook")
        .version(crate_version!())
        .about("Personal household income/expense ledger")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("tx")
                .about("Manage ledger entries")
                .subcommand(
                    tx_field_args(Command::new("add").about("Record a transaction")).arg(
                        Arg::new("force")
                            .long("force")
                            .action(ArgAction::SetTrue)
                            .help("Insert even if it looks like a duplicate"),
                    ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, most recent first")
                        .arg(Arg::new("month").long("month").help("Restrict to YYYY-MM")),
                ))
                .subcommand(
                    tx_field_args(Command::new("edit").about("Replace every field of an entry"))
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                )
                .subcommand(
                    Command::new("rm").about("Delete an entry").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly and category summaries")
                .subcommand(
                    Command::new("monthly")
                        .about("Income/expense totals for one month")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM")),
                )
                .subcommand(Command::new("months").about("List every month with entries"))
                .subcommand(
                    Command::new("categories")
                        .about("Expense totals per category label")
                        .arg(Arg::new("month").long("month").help("Restrict to YYYY-MM")),
                ),
        )
        .subcommand(json_flags(
            Command::new("search")
                .about("Filter transactions by compound criteria (AND)")
                .arg(Arg::new("from").long("from").help("Inclusive start date YYYY-MM-DD"))
                .arg(Arg::new("to").long("to").help("Inclusive end date YYYY-MM-DD"))
                .arg(
                    Arg::new("income-only")
                        .long("income-only")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("expense-only"),
                )
                .arg(
                    Arg::new("expense-only")
                        .long("expense-only")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("min").long("min").help("Inclusive minimum amount"))
                .arg(Arg::new("max").long("max").help("Inclusive maximum amount"))
                .arg(
                    Arg::new("keyword")
                        .long("keyword")
                        .help("Case-sensitive substring matched against remarks"),
                ),
        ))
        .subcommand(
            Command::new("import").about("Bulk import").subcommand(
                Command::new("transactions")
                    .about("Import six-field CSV rows, skipping invalid ones")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export").about("Bulk export").subcommand(
                Command::new("transactions")
                    .about("Export every transaction in the six-field row shape")
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
