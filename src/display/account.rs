//! User and account display formatting

use crate::models::{Account, User};

use super::{render_table, DisplayOptions};

/// Format a list of users as a table
pub fn format_user_list(users: &[User], options: &DisplayOptions) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let rows = users
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.name.clone(),
                u.email.clone(),
                options.date(u.created_at.date_naive()),
            ]
        })
        .collect();

    render_table(&["ID", "Name", "Email", "Created"], rows, &[])
}

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[Account], options: &DisplayOptions) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let rows = accounts
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.user_id.to_string(),
                a.name.clone(),
                a.account_type.to_string(),
                options.money(a.balance),
                a.currency.clone(),
            ]
        })
        .collect();

    render_table(
        &["ID", "Owner", "Name", "Type", "Balance", "Currency"],
        rows,
        &[4],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, AccountType, Money, UserId};

    #[test]
    fn test_empty_lists() {
        let options = DisplayOptions::default();
        assert_eq!(format_user_list(&[], &options), "No users found.");
        assert_eq!(format_account_list(&[], &options), "No accounts found.");
    }

    #[test]
    fn test_account_row() {
        let account = Account::with_balance(
            UserId::new(1),
            "Visa",
            AccountType::CreditCard,
            Money::from_cents(-42000),
        )
        .with_id(AccountId::new(3));

        let output = format_account_list(&[account], &DisplayOptions::default());
        assert!(output.contains("acc-3"));
        assert!(output.contains("Credit Card"));
        assert!(output.contains("-$420.00"));
    }
}
