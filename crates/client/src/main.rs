//! walletwise CLI entry point.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use walletwise_client::cli::bills::BillsAction;
use walletwise_client::cli::recurrence::RecurrenceAction;
use walletwise_client::cli::recurring::RecurringAction;
use walletwise_client::cli::transactions::TransactionsAction;
use walletwise_client::cli::wallets::WalletsAction;
use walletwise_client::cli::{Cli, Commands, OutputFormat};
use walletwise_client::logging::init_cli_logger;
use walletwise_client::output::{format_output, json, pretty};
use walletwise_client::{TransactionListView, WalletwiseClient};
use walletwise_core::finance::{
    overdue_bills, upcoming_bills, CreateRecurringRequest, CreateTransactionRequest,
    CreateWalletRequest, UpdateTransactionRequest,
};
use walletwise_core::recurrence::{monthly_options, to_display_date, week_of_month_label};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let config = cli.config();
    let client = WalletwiseClient::from_config(&config)?;
    let today = to_display_date(Utc::now(), config.display_offset());
    tracing::debug!(base_url = %config.base_url, %today, "starting walletwise");

    let format = cli.format;

    match cli.command {
        Commands::Transactions(cmd) => match cmd.action {
            TransactionsAction::List { page, pages } => {
                let mut view = TransactionListView::new(client);
                let last = page.saturating_add(pages.max(1));
                let mut loaded = Vec::new();
                for key in page..last {
                    let entry = view.load_page(key).await?;
                    if let OutputFormat::Pretty = format {
                        println!("{}", pretty::format_transactions_page(key, entry));
                    }
                    let has_next = entry.has_next(key);
                    loaded.push(entry.clone());
                    if !has_next {
                        break;
                    }
                }
                if let OutputFormat::Json = format {
                    println!("{}", json::format_json(&loaded));
                }
            }
            TransactionsAction::Get { id } => {
                let tx = client.get_transaction(id).await?;
                println!("{}", format_output(&tx, format, pretty::format_transaction));
            }
            TransactionsAction::Create {
                wallet_id,
                amount,
                kind,
                date,
                category_id,
                note,
            } => {
                let date = date.unwrap_or(today);
                let mut req = CreateTransactionRequest::new(wallet_id, amount, kind.into(), date);
                req.category_id = category_id;
                req.note = note;
                let tx = client.create_transaction(&req).await?;
                println!(
                    "{}",
                    format_output(&tx, format, |tx| format!(
                        "Created:\n{}",
                        pretty::format_transaction(tx)
                    ))
                );
            }
            TransactionsAction::Update {
                id,
                wallet_id,
                amount,
                kind,
                date,
                category_id,
                note,
            } => {
                let req = UpdateTransactionRequest {
                    wallet_id,
                    amount,
                    kind: kind.map(Into::into),
                    date,
                    category_id,
                    note,
                };
                let tx = client.update_transaction(id, &req).await?;
                println!(
                    "{}",
                    format_output(&tx, format, |tx| format!(
                        "Updated:\n{}",
                        pretty::format_transaction(tx)
                    ))
                );
            }
            TransactionsAction::Delete { id } => {
                client.delete_transaction(id).await?;
                if !cli.quiet {
                    println!("Deleted transaction {}", id);
                }
            }
        },
        Commands::Wallets(cmd) => match cmd.action {
            WalletsAction::List => {
                let wallets = client.list_wallets().await?;
                println!("{}", format_output(&wallets, format, |w| pretty::format_wallets(w)));
            }
            WalletsAction::Create {
                name,
                currency,
                balance,
            } => {
                let req = CreateWalletRequest::new(name, currency).with_balance(balance);
                let wallet = client.create_wallet(&req).await?;
                println!(
                    "{}",
                    format_output(&wallet, format, |w| format!(
                        "Created:\n{}",
                        pretty::format_wallet(w)
                    ))
                );
            }
        },
        Commands::Categories => {
            let categories = client.list_categories().await?;
            println!(
                "{}",
                format_output(&categories, format, |c| pretty::format_categories(c))
            );
        }
        Commands::Bills(cmd) => match cmd.action {
            BillsAction::List => {
                let bills = client.list_bills().await?;
                println!(
                    "{}",
                    format_output(&bills, format, |bills| {
                        let refs: Vec<_> = bills.iter().collect();
                        pretty::format_bills(&refs, today)
                    })
                );
            }
            BillsAction::Upcoming { days } => {
                let bills = client.list_bills().await?;
                let overdue = overdue_bills(&bills, today);
                let upcoming = upcoming_bills(&bills, today, days);
                let body = serde_json::json!({
                    "overdue": overdue,
                    "upcoming": upcoming,
                });
                println!(
                    "{}",
                    format_output(&body, format, |_| {
                        let mut out = String::new();
                        if !overdue.is_empty() {
                            out.push_str(&format!(
                                "OVERDUE\n{}\n\n",
                                pretty::format_bills(&overdue, today)
                            ));
                        }
                        out.push_str(&pretty::format_bills(&upcoming, today));
                        out
                    })
                );
            }
            BillsAction::Pay { id } => {
                let bill = client.pay_bill(id).await?;
                println!(
                    "{}",
                    format_output(&bill, format, |b| format!(
                        "Paid:\n{}",
                        pretty::format_bill(b, today)
                    ))
                );
            }
        },
        Commands::Budgets => {
            let budgets = client.list_budgets().await?;
            println!("{}", format_output(&budgets, format, |b| pretty::format_budgets(b)));
        }
        Commands::Debts => {
            let debts = client.list_debts().await?;
            println!("{}", format_output(&debts, format, |d| pretty::format_debts(d)));
        }
        Commands::Goals => {
            let goals = client.list_saving_goals().await?;
            println!("{}", format_output(&goals, format, |g| pretty::format_goals(g)));
        }
        Commands::Recurring(cmd) => match cmd.action {
            RecurringAction::List => {
                let recurring = client.list_recurring().await?;
                println!(
                    "{}",
                    format_output(&recurring, format, |r| pretty::format_recurring(r))
                );
            }
            RecurringAction::Create {
                wallet_id,
                amount,
                kind,
                category_id,
                note,
                rule,
            } => {
                let rule = rule.to_rule(today)?;
                let mut req = CreateRecurringRequest::new(wallet_id, amount, kind.into(), rule);
                req.category_id = category_id;
                req.note = note;
                let recurring = client.create_recurring(&req).await?;
                println!(
                    "{}",
                    format_output(&recurring, format, |r| format!(
                        "Created:\n{}",
                        pretty::format_recurring_transaction(r)
                    ))
                );
            }
        },
        Commands::Recurrence(cmd) => match cmd.action {
            RecurrenceAction::Label { date } => {
                let date = date.unwrap_or(today);
                let label = week_of_month_label(date);
                println!(
                    "{}",
                    format_output(&label, format, |l| pretty::format_label(date, l))
                );
            }
            RecurrenceAction::Options { date } => {
                let date = date.unwrap_or(today);
                let options = monthly_options(date);
                println!(
                    "{}",
                    format_output(&options, format, |o| pretty::format_monthly_options(date, o))
                );
            }
            RecurrenceAction::Describe(args) => {
                let rule = args.to_rule(today)?;
                let body = serde_json::json!({
                    "rule": rule,
                    "description": rule.describe(),
                });
                println!("{}", format_output(&body, format, |_| rule.describe()));
            }
        },
    }

    Ok(())
}
