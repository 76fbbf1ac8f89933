mod operations;
mod requests;
mod types;

pub use operations::{
    group_by_date, grouped_newest_first, net_total, overdue_bills, progress_percent,
    total_amount, upcoming_bills,
};
pub use requests::{
    CreateRecurringRequest, CreateTransactionRequest, CreateWalletRequest,
    UpdateTransactionRequest,
};
pub use types::{
    Bill, Budget, Category, Debt, RecurringTransaction, SavingGoal, Transaction, TransactionKind,
    Wallet,
};
