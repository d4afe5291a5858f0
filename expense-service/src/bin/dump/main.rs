//! Prints every user and expense in the configured database.
//!
//! Reads the same configuration as the server (`config/*.toml` plus
//! `DATABASE__URL` style overrides) and never writes. Executed SQL is
//! logged to stderr through the `sqlx::query` target.

use std::collections::HashMap;

use comfy_table::presets::ASCII_FULL;
use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::Table;
use expense_service::config::Config;
use expense_service::domain::expense::models::Expense;
use expense_service::domain::expense::ports::ExpenseRepository;
use expense_service::domain::user::models::User;
use expense_service::domain::user::models::UserId;
use expense_service::domain::user::ports::UserRepository;
use expense_service::outbound::repositories::PostgresExpenseRepository;
use expense_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const RULE_WIDTH: usize = 100;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expense_service=info,sqlx::query=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;
    tracing::debug!(database = "postgresql", "Connected");

    let users = PostgresUserRepository::new(pg_pool.clone()).list_all().await?;
    let expenses = PostgresExpenseRepository::new(pg_pool).list_all().await?;

    print!("{}", render(&users, &expenses));

    Ok(())
}

fn render(users: &[User], expenses: &[Expense]) -> String {
    let mut out = String::new();
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let light_rule = "-".repeat(RULE_WIDTH);

    out.push_str(&format!("\n{heavy_rule}\nEXPENSE DATABASE CONTENTS\n{heavy_rule}\n"));

    if users.is_empty() {
        out.push_str("\n[No users found in database]\n");
    } else {
        let usernames: HashMap<UserId, &str> = users
            .iter()
            .map(|u| (u.id, u.username.as_str()))
            .collect();

        out.push_str(&format!("\n\nUSERS TABLE\n{light_rule}\n"));
        out.push_str(&grid(
            &["User ID", "Username", "Admin"],
            users
                .iter()
                .map(|u| {
                    vec![
                        u.id.to_string(),
                        u.username.to_string(),
                        if u.is_admin { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect(),
        ));

        out.push_str(&format!("\n\nEXPENSES TABLE\n{light_rule}\n"));
        if expenses.is_empty() {
            out.push_str("[No expenses found in database]\n");
        } else {
            out.push_str(&grid(
                &["Expense ID", "Username", "Title", "Amount", "Category", "Date"],
                expenses
                    .iter()
                    .map(|e| {
                        let owner = usernames.get(&e.owner).copied().unwrap_or("Unknown");
                        let mut row = expense_row(e);
                        row.insert(1, owner.to_string());
                        row
                    })
                    .collect(),
            ));
        }

        out.push_str(&format!("\n\nEXPENSES BY USER\n{light_rule}\n"));
        for user in users {
            out.push_str(&format!("\n{} (User ID: {})\n", user.username, user.id));
            let owned: Vec<Vec<String>> = expenses
                .iter()
                .filter(|e| e.owner == user.id)
                .map(expense_row)
                .collect();
            if owned.is_empty() {
                out.push_str("  [No expenses]\n");
            } else {
                out.push_str(&listing(&["ID", "Title", "Amount", "Category", "Date"], owned));
            }
        }
    }

    let stats = Statistics::compute(users, expenses);
    out.push_str(&format!("\n\nSUMMARY STATISTICS\n{light_rule}\n"));
    out.push_str(&grid(
        &["Metric", "Value"],
        vec![
            vec!["Total Users".to_string(), stats.user_count.to_string()],
            vec!["Total Expenses".to_string(), stats.expense_count.to_string()],
            vec!["Total Amount Spent".to_string(), money(stats.total_amount)],
            vec!["Average Expense".to_string(), money(stats.average_expense)],
        ],
    ));
    out.push_str(&format!("{heavy_rule}\n"));

    out
}

fn expense_row(expense: &Expense) -> Vec<String> {
    vec![
        expense.id.to_string(),
        expense.details.title().to_string(),
        money(expense.details.amount()),
        expense.details.category().to_string(),
        expense.details.date().to_string(),
    ]
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[derive(Debug, PartialEq)]
struct Statistics {
    user_count: usize,
    expense_count: usize,
    total_amount: f64,
    average_expense: f64,
}

impl Statistics {
    fn compute(users: &[User], expenses: &[Expense]) -> Self {
        let total_amount: f64 = expenses.iter().map(|e| e.details.amount()).sum();
        let average_expense = if expenses.is_empty() {
            0.0
        } else {
            total_amount / expenses.len() as f64
        };

        Self {
            user_count: users.len(),
            expense_count: expenses.len(),
            total_amount,
            average_expense,
        }
    }
}

/// Bordered table with a rule between every row.
fn grid(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    table(ASCII_FULL, headers, rows)
}

/// Bordered table without rules between rows.
fn listing(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    table(ASCII_FULL_CONDENSED, headers, rows)
}

fn table(preset: &str, headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new();
    table.load_preset(preset).set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    format!("{table}\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use chrono::Utc;
    use expense_service::domain::expense::models::ExpenseDetails;
    use expense_service::domain::expense::models::ExpenseId;
    use expense_service::domain::user::models::Username;

    use super::*;

    fn user(name: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new(name).unwrap(),
            password_hash: String::new(),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    fn expense(owner: &User, title: &str, amount: f64) -> Expense {
        Expense {
            id: ExpenseId::new(),
            owner: owner.id,
            details: ExpenseDetails::new(
                title,
                amount,
                "Food",
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            )
            .unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_statistics() {
        let alice = user("alice");
        let expenses = vec![expense(&alice, "Lunch", 10.0), expense(&alice, "Dinner", 30.0)];

        let stats = Statistics::compute(&[alice], &expenses);
        assert_eq!(stats.user_count, 1);
        assert_eq!(stats.expense_count, 2);
        assert_eq!(stats.total_amount, 40.0);
        assert_eq!(stats.average_expense, 20.0);
    }

    #[test]
    fn test_statistics_empty() {
        assert_eq!(Statistics::compute(&[], &[]).average_expense, 0.0);
    }

    #[test]
    fn test_grid_pads_to_widest_cell() {
        let rendered = grid(&["A", "Bee"], vec![vec!["long".to_string(), "x".to_string()]]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "+------+-----+");
        assert!(rendered.contains("| A    | Bee |"));
        assert!(rendered.contains("| long | x   |"));
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
    }

    #[test]
    fn test_render_lists_expenses_under_owner() {
        let alice = user("alice");
        let bob = user("bob");
        let expenses = vec![expense(&alice, "Lunch", 12.5)];

        let rendered = render(&[alice, bob], &expenses);
        assert!(rendered.contains("alice (User ID:"));
        assert!(rendered.contains("$12.50"));
        assert!(rendered.contains("  [No expenses]"));
    }

    #[test]
    fn test_render_empty_database() {
        let rendered = render(&[], &[]);
        assert!(rendered.contains("[No users found in database]"));
        assert!(rendered.contains("$0.00"));
    }
}
