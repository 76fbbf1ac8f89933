//! Pretty output formatting.

use chrono::NaiveDate;
use walletwise_core::finance::{
    grouped_newest_first, net_total, Bill, Budget, Category, Debt, RecurringTransaction,
    SavingGoal, Transaction, Wallet,
};
use walletwise_core::pagination::{PageEntry, PageKey};
use walletwise_core::recurrence::{MonthlyOption, WeekOfMonthLabel};

const BAR_WIDTH: usize = 20;

/// Renders a percentage as a fixed-width bar, e.g. `[#####...............]  25%`.
pub fn progress_bar(percent: f64) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        percent
    )
}

fn header(title: &str, count: usize) -> String {
    let mut output = format!("{} ({})\n", title, count);
    output.push_str(&"-".repeat(40));
    output
}

/// Format a transaction for display.
pub fn format_transaction(tx: &Transaction) -> String {
    let mut output = format!(
        "#{} {:+.2} [{}]\n  Wallet: {}\n  Date: {}",
        tx.id,
        tx.signed_amount(),
        tx.kind.as_str(),
        tx.wallet_id,
        tx.date
    );
    if let Some(category_id) = tx.category_id {
        output.push_str(&format!("\n  Category: {}", category_id));
    }
    if let Some(note) = &tx.note {
        output.push_str(&format!("\n  Note: {}", note));
    }
    output
}

/// Format one page of transactions, grouped by day with the newest first.
pub fn format_transactions_page(key: PageKey, page: &PageEntry<Transaction>) -> String {
    let footer = format!(
        "Page {} of {}",
        key.saturating_add(1),
        page.total_pages.max(1)
    );
    if page.is_empty() {
        return format!("No transactions found.\n{}", footer);
    }

    let mut output = header("TRANSACTIONS", page.items.len());
    for (date, transactions) in grouped_newest_first(&page.items) {
        output.push_str(&format!("\n{}", date.format("%A, %B %-d %Y")));
        for tx in transactions {
            let note = tx.note.as_deref().unwrap_or("");
            output.push_str(&format!(
                "\n  #{:<6} {:>12.2}  {}",
                tx.id,
                tx.signed_amount(),
                note
            ));
        }
        output.push('\n');
    }
    output.push_str(&format!(
        "\nNet: {:+.2}\n{}",
        net_total(&page.items),
        footer
    ));
    output
}

/// Format a wallet for display.
pub fn format_wallet(wallet: &Wallet) -> String {
    format!(
        "{} ({})\n  ID: {}\n  Balance: {:.2}",
        wallet.name, wallet.currency, wallet.id, wallet.balance
    )
}

/// Format wallets for display.
pub fn format_wallets(wallets: &[Wallet]) -> String {
    if wallets.is_empty() {
        return "No wallets found.".to_string();
    }
    let mut output = header("WALLETS", wallets.len());
    for wallet in wallets {
        output.push_str(&format!("\n{}", format_wallet(wallet)));
        output.push('\n');
    }
    output
}

/// Format categories for display.
pub fn format_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }
    let mut output = header("CATEGORIES", categories.len());
    for category in categories {
        let icon = category.icon.as_deref().unwrap_or(" ");
        output.push_str(&format!(
            "\n{} {} [{}] (ID: {})",
            icon,
            category.name,
            category.kind.as_str(),
            category.id
        ));
    }
    output
}

/// Format a bill for display.
pub fn format_bill(bill: &Bill, today: NaiveDate) -> String {
    let status = if bill.paid {
        "paid".to_string()
    } else if bill.is_overdue(today) {
        format!("OVERDUE by {} days", -bill.days_until_due(today))
    } else {
        format!("due in {} days", bill.days_until_due(today))
    };
    format!(
        "{} {:.2}\n  ID: {}\n  Due: {} ({})",
        bill.name, bill.amount, bill.id, bill.due_date, status
    )
}

/// Format bills for display.
pub fn format_bills(bills: &[&Bill], today: NaiveDate) -> String {
    if bills.is_empty() {
        return "No bills found.".to_string();
    }
    let mut output = header("BILLS", bills.len());
    for bill in bills {
        output.push_str(&format!("\n{}", format_bill(bill, today)));
        output.push('\n');
    }
    output
}

/// Format budgets with their spending progress.
pub fn format_budgets(budgets: &[Budget]) -> String {
    if budgets.is_empty() {
        return "No budgets found.".to_string();
    }
    let mut output = header("BUDGETS", budgets.len());
    for budget in budgets {
        output.push_str(&format!(
            "\nCategory {} ({} to {})\n  {:.2} of {:.2}  {}",
            budget.category_id,
            budget.start_date,
            budget.end_date,
            budget.spent,
            budget.limit,
            progress_bar(budget.progress())
        ));
        if budget.is_over_budget() {
            output.push_str(&format!("\n  Over budget by {:.2}", -budget.remaining()));
        }
        output.push('\n');
    }
    output
}

/// Format debts with their repayment progress.
pub fn format_debts(debts: &[Debt]) -> String {
    if debts.is_empty() {
        return "No debts found.".to_string();
    }
    let mut output = header("DEBTS", debts.len());
    for debt in debts {
        output.push_str(&format!(
            "\n{}\n  Remaining: {:.2} of {:.2}  {}",
            debt.name,
            debt.remaining(),
            debt.principal,
            progress_bar(debt.progress())
        ));
        if let Some(due) = debt.due_date {
            output.push_str(&format!("\n  Due: {}", due));
        }
        output.push('\n');
    }
    output
}

/// Format saving goals with their progress.
pub fn format_goals(goals: &[SavingGoal]) -> String {
    if goals.is_empty() {
        return "No saving goals found.".to_string();
    }
    let mut output = header("SAVING GOALS", goals.len());
    for goal in goals {
        output.push_str(&format!(
            "\n{}\n  {:.2} of {:.2}  {}",
            goal.name,
            goal.current_amount,
            goal.target_amount,
            progress_bar(goal.progress())
        ));
        if let Some(deadline) = goal.deadline {
            output.push_str(&format!("\n  Deadline: {}", deadline));
        }
        output.push('\n');
    }
    output
}

/// Format a recurring transaction with its schedule.
pub fn format_recurring_transaction(recurring: &RecurringTransaction) -> String {
    let mut output = format!(
        "#{} {:+.2} [{}]\n  Wallet: {}\n  Schedule: {}",
        recurring.id,
        recurring.amount * recurring.kind.sign(),
        recurring.kind.as_str(),
        recurring.wallet_id,
        recurring.schedule()
    );
    if let Some(note) = &recurring.note {
        output.push_str(&format!("\n  Note: {}", note));
    }
    output
}

/// Format recurring transactions for display.
pub fn format_recurring(recurring: &[RecurringTransaction]) -> String {
    if recurring.is_empty() {
        return "No recurring transactions found.".to_string();
    }
    let mut output = header("RECURRING", recurring.len());
    for item in recurring {
        output.push_str(&format!("\n{}", format_recurring_transaction(item)));
        output.push('\n');
    }
    output
}

/// Format a week-of-month label.
pub fn format_label(date: NaiveDate, label: &WeekOfMonthLabel) -> String {
    format!("{}: {} of the month", date, label.label())
}

/// Format the monthly choices for a start date.
pub fn format_monthly_options(date: NaiveDate, options: &[MonthlyOption]) -> String {
    let mut output = format!("Monthly options for {}", date);
    for (index, option) in options.iter().enumerate() {
        output.push_str(&format!("\n  {}. {}", index + 1, option.label));
    }
    output
}
