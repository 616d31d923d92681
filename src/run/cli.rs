use std::io::Write;

use anyhow::Result;

use crate::config;
use crate::ledger::Ledger;
use crate::models::{Kind, Month};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], start: Month) -> Result<()> {
    let ledger = Ledger::seeded();
    let mut out = std::io::stdout().lock();
    run(args, start, &ledger, &mut out)
}

pub(crate) fn run(
    args: &[String],
    start: Month,
    ledger: &Ledger,
    out: &mut impl Write,
) -> Result<()> {
    let Some(command) = args.first() else {
        print_usage(out)?;
        return Ok(());
    };
    match command.as_str() {
        "summary" | "s" => {
            let month = match args.get(1) {
                Some(value) => config::parse_month(value)?,
                None => start,
            };
            let only = match args.get(2) {
                Some(value) => Some(Kind::parse(value).ok_or_else(|| {
                    anyhow::anyhow!("Unknown kind: {value} (use receitas or despesas)")
                })?),
                None => None,
            };
            cli_summary(ledger, month, only, out)
        }
        "months" => cli_months(ledger, out),
        "--help" | "-h" | "help" => print_usage(out),
        "--version" | "-V" | "version" => {
            writeln!(out, "despesas {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Despesas - monthly income and expense tracker")?;
    writeln!(out)?;
    writeln!(out, "Usage: despesas [--month N] [command]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                        Launch interactive TUI")?;
    writeln!(out, "    --month <1-12>              Month selected at start (default: 1)")?;
    writeln!(out, "  summary [1-12] [kind]         Print totals and entries for a month")?;
    writeln!(out, "                                kind: receitas or despesas (default: both)")?;
    writeln!(out, "  months                        List months with their entry counts")?;
    writeln!(out, "  --help, -h                    Show this help")?;
    writeln!(out, "  --version, -V                 Show version")?;
    writeln!(out)?;
    writeln!(out, "Set {}=debug to write a log file.", config::LOG_ENV)?;
    Ok(())
}

fn cli_summary(
    ledger: &Ledger,
    month: Month,
    only: Option<Kind>,
    out: &mut impl Write,
) -> Result<()> {
    let totals = ledger.totals_for(month);

    writeln!(out, "Despesas — {}", month.name())?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Receitas:  {}", format_amount(totals.income))?;
    writeln!(out, "  Despesas:  {}", format_amount(totals.expense))?;
    writeln!(out, "  Saldo:     {}", format_amount(totals.balance))?;

    for kind in Kind::all().iter().filter(|k| only.map_or(true, |o| o == **k)) {
        let entries = ledger.list_for(month, *kind);
        if entries.is_empty() {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "{}:", kind.plural())?;
        for txn in entries {
            writeln!(
                out,
                "  {} {:<24} {:>14}",
                txn.color,
                txn.category,
                format_amount(txn.amount)
            )?;
        }
    }
    Ok(())
}

fn cli_months(ledger: &Ledger, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<4} {:<12} {:>8} {:>14}", "#", "Mês", "Entradas", "Saldo")?;
    writeln!(out, "{}", "─".repeat(41))?;
    for month in Month::all() {
        writeln!(
            out,
            "{:<4} {:<12} {:>8} {:>14}",
            month.number(),
            month.name(),
            ledger.len(month),
            format_amount(ledger.totals_for(month).balance),
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
