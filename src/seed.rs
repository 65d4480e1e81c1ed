//! First-run data seeding.
//!
//! Two collaborators run at startup, after migrations:
//!
//! 1. [`seed_banks`] loads the static bank catalog. Idempotent: it only
//!    inserts when the catalog is empty, so restarting the server never
//!    duplicates rows.
//! 2. [`seed_demo_data`] generates sample users, accounts, transactions,
//!    saving goals and loans, but only when no users exist yet.
//!
//! The demo generator takes an explicitly seeded RNG from the caller.
//! Fixture values are produced by pure functions over `&mut impl Rng`
//! and a fixed reference time, so a given seed always yields the same
//! data set and the generators are testable without a database.
//!
//! None of this is part of the steady-state runtime contract; it exists
//! so a fresh install has something to show.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::user::CreateUserRequest,
    services::user_service,
};

/// The static bank catalog: (name, icon) pairs. The icon is a symbolic
/// name the client maps to an asset.
pub const BANK_FIXTURES: [(&str, &str); 10] = [
    ("Chase", "Landmark"),
    ("Bank of America", "Building2"),
    ("Citi", "Globe"),
    ("Wells Fargo", "Briefcase"),
    ("Goldman Sachs", "TrendingUp"),
    ("HSBC", "Landmark"),
    ("Barclays", "Building"),
    ("Santander", "CreditCard"),
    ("US Bank", "Wallet"),
    ("PNC", "DollarSign"),
];

/// Demo users created on first run: (full name, mobile, email).
/// They all share the password "password123" so the demo client can log in.
pub const DEMO_USERS: [(&str, &str, &str); 20] = [
    ("veerendra vishwakarma", "9876543210", "veerendra@example.com"),
    ("kajal manjhi", "9876543211", "kajal@example.com"),
    ("archana kushwaha", "9876543212", "archana@example.com"),
    ("palak sahu", "9876543213", "palak@example.com"),
    ("rinki baghel", "9876543214", "rinki@example.com"),
    ("vishal vishwakarma", "9876543215", "vishal@example.com"),
    ("nikhil manjhi", "9876543216", "nikhil@example.com"),
    ("amit sharma", "9876543217", "amit@example.com"),
    ("priya patel", "9876543218", "priya@example.com"),
    ("rahul singh", "9876543219", "rahul@example.com"),
    ("sneha gupta", "9876543220", "sneha@example.com"),
    ("rohit mehra", "9876543221", "rohit@example.com"),
    ("anita desai", "9876543222", "anita@example.com"),
    ("sumit kumar", "9876543223", "sumit@example.com"),
    ("poonam verma", "9876543224", "poonam@example.com"),
    ("akash jain", "9876543225", "akash@example.com"),
    ("divya rao", "9876543226", "divya@example.com"),
    ("vikas malhotra", "9876543227", "vikas@example.com"),
    ("nidhi sharma", "9876543228", "nidhi@example.com"),
    ("arjun patel", "9876543229", "arjun@example.com"),
];

const DEMO_PASSWORD: &str = "password123";

const ACCOUNT_TYPES: [&str; 3] = ["savings", "checking", "current"];

const CATEGORIES: [&str; 7] = [
    "Food",
    "Shopping",
    "Travel",
    "Bills",
    "Transfer",
    "Entertainment",
    "Others",
];

const DESCRIPTIONS: [&str; 15] = [
    "Grocery shopping",
    "Restaurant bill",
    "Online purchase",
    "Gas station",
    "Salary deposit",
    "Rent payment",
    "Utility bill",
    "Entertainment",
    "Medical expense",
    "Investment",
    "Insurance premium",
    "Internet bill",
    "Phone bill",
    "Travel expense",
    "Education fee",
];

const LOAN_TYPES: [&str; 5] = [
    "Home Loan",
    "Car Loan",
    "Personal Loan",
    "Education Loan",
    "Business Loan",
];

/// Generated account values, before insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountFixture {
    pub bank_id: Uuid,
    pub account_number: String,
    pub account_type: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Generated transaction values, before insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFixture {
    pub transaction_type: String,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

/// Generated saving goal values, before insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingGoalFixture {
    pub target_amount: Decimal,
    pub current_amount: Decimal,
}

/// Generated loan values, before insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanFixture {
    pub loan_type: String,
    pub total_amount: Decimal,
    pub emi_amount: Decimal,
    pub remaining_amount: Decimal,
}

/// A random amount with two decimal places, drawn from an inclusive
/// cent range.
fn random_amount(rng: &mut impl Rng, min_cents: i64, max_cents: i64) -> Decimal {
    Decimal::new(rng.random_range(min_cents..=max_cents), 2)
}

/// Generate one account for a demo user.
///
/// `bank_ids` must be non-empty (the bank catalog is seeded first).
/// The account number encodes the user's position in the demo list and
/// the account's ordinal, e.g. "ACC00000301" for user 3, account 1.
/// Balance lands between $1,000 and $50,000; the creation date falls
/// within the last year.
pub fn random_account(
    rng: &mut impl Rng,
    bank_ids: &[Uuid],
    user_index: usize,
    account_num: usize,
    now: DateTime<Utc>,
) -> AccountFixture {
    AccountFixture {
        bank_id: bank_ids[rng.random_range(0..bank_ids.len())],
        account_number: format!("ACC{:06}{:02}", user_index + 1, account_num),
        account_type: ACCOUNT_TYPES[rng.random_range(0..ACCOUNT_TYPES.len())].to_string(),
        balance: random_amount(rng, 100_000, 5_000_000),
        created_at: now - Duration::days(rng.random_range(0..365)),
    }
}

/// Generate one transaction.
///
/// Credits run $100-$5,000, debits $5-$2,000. The event date falls
/// within the last 30 days.
pub fn random_transaction(rng: &mut impl Rng, now: DateTime<Utc>) -> TransactionFixture {
    let transaction_type = if rng.random_range(0..2) == 0 {
        "credit"
    } else {
        "debit"
    };
    let amount = match transaction_type {
        "credit" => random_amount(rng, 10_000, 500_000),
        _ => random_amount(rng, 500, 200_000),
    };

    TransactionFixture {
        transaction_type: transaction_type.to_string(),
        amount,
        category: CATEGORIES[rng.random_range(0..CATEGORIES.len())].to_string(),
        description: DESCRIPTIONS[rng.random_range(0..DESCRIPTIONS.len())].to_string(),
        date: now - Duration::days(rng.random_range(0..30)),
    }
}

/// Generate one saving goal: target $1,000-$100,000, progress 0-80% of
/// the target.
pub fn random_saving_goal(rng: &mut impl Rng) -> SavingGoalFixture {
    let target_amount = random_amount(rng, 100_000, 10_000_000);
    let percent = Decimal::from(rng.random_range(0i64..=80));
    let current_amount = (target_amount * percent / Decimal::from(100)).round_dp(2);

    SavingGoalFixture {
        target_amount,
        current_amount,
    }
}

/// Generate one loan: total $5,000-$500,000, a monthly installment of
/// 1-3% of the total per year, and 20-100% of the total outstanding.
pub fn random_loan(rng: &mut impl Rng) -> LoanFixture {
    let total_amount = random_amount(rng, 500_000, 50_000_000);

    // 100-300 basis points annually, spread over 12 installments
    let rate = Decimal::from(rng.random_range(100i64..=300));
    let emi_amount = (total_amount * rate / Decimal::from(10_000) / Decimal::from(12)).round_dp(2);

    let remaining_percent = Decimal::from(rng.random_range(20i64..=100));
    let remaining_amount = (total_amount * remaining_percent / Decimal::from(100)).round_dp(2);

    LoanFixture {
        loan_type: LOAN_TYPES[rng.random_range(0..LOAN_TYPES.len())].to_string(),
        total_amount,
        emi_amount,
        remaining_amount,
    }
}

/// Load the static bank catalog if it is empty.
///
/// Calling this twice never duplicates rows; the count check makes the
/// operation idempotent, which is part of the catalog's public contract.
pub async fn seed_banks(pool: &DbPool) -> Result<(), AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM banks")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    for (name, icon) in BANK_FIXTURES {
        sqlx::query("INSERT INTO banks (name, icon) VALUES ($1, $2)")
            .bind(name)
            .bind(icon)
            .execute(pool)
            .await?;
    }

    tracing::info!(banks = BANK_FIXTURES.len(), "Bank catalog seeded");
    Ok(())
}

/// Generate the demo data set.
///
/// For each demo user: 1-3 accounts at random banks, 5-15 transactions
/// per account, 0-2 saving goals and 0-2 loans. The caller decides
/// whether this is a first run (no users yet) and supplies the seeded
/// RNG.
pub async fn seed_demo_data(pool: &DbPool, rng: &mut impl Rng) -> Result<(), AppError> {
    let bank_ids: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM banks")
        .fetch_all(pool)
        .await?;
    let now = Utc::now();

    for (user_index, (full_name, mobile, email)) in DEMO_USERS.iter().enumerate() {
        let user = user_service::create_user(
            pool,
            CreateUserRequest {
                username: None,
                password: DEMO_PASSWORD.to_string(),
                full_name: Some((*full_name).to_string()),
                email: Some((*email).to_string()),
                mobile: (*mobile).to_string(),
                city: None,
                country: None,
                monthly_budget: None,
                currency: None,
                app_pin: None,
                fingerprint_enabled: None,
            },
        )
        .await?;

        let num_accounts = rng.random_range(1..=3);
        for account_num in 1..=num_accounts {
            let account = random_account(rng, &bank_ids, user_index, account_num, now);
            let account_id: Uuid = sqlx::query_scalar(
                r#"
                INSERT INTO accounts (user_id, bank_id, account_number, type, balance, is_linked, created_at)
                VALUES ($1, $2, $3, $4, $5, true, $6)
                RETURNING id
                "#,
            )
            .bind(user.id)
            .bind(account.bank_id)
            .bind(&account.account_number)
            .bind(&account.account_type)
            .bind(account.balance)
            .bind(account.created_at)
            .fetch_one(pool)
            .await?;

            let num_transactions = rng.random_range(5..=15);
            for _ in 0..num_transactions {
                let transaction = random_transaction(rng, now);
                sqlx::query(
                    r#"
                    INSERT INTO transactions (account_id, type, amount, category, description, date)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    "#,
                )
                .bind(account_id)
                .bind(&transaction.transaction_type)
                .bind(transaction.amount)
                .bind(&transaction.category)
                .bind(&transaction.description)
                .bind(transaction.date)
                .execute(pool)
                .await?;
            }
        }

        let num_goals = rng.random_range(0..=2);
        for _ in 0..num_goals {
            let goal = random_saving_goal(rng);
            sqlx::query(
                r#"
                INSERT INTO saving_goals (user_id, target_amount, current_amount, editable)
                VALUES ($1, $2, $3, true)
                "#,
            )
            .bind(user.id)
            .bind(goal.target_amount)
            .bind(goal.current_amount)
            .execute(pool)
            .await?;
        }

        let num_loans = rng.random_range(0..=2);
        for _ in 0..num_loans {
            let loan = random_loan(rng);
            sqlx::query(
                r#"
                INSERT INTO loans (user_id, loan_type, total_amount, emi_amount, remaining_amount)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(user.id)
            .bind(&loan.loan_type)
            .bind(loan.total_amount)
            .bind(loan.emi_amount)
            .bind(loan.remaining_amount)
            .execute(pool)
            .await?;
        }
    }

    tracing::info!(users = DEMO_USERS.len(), "Demo data generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal_macros::dec;

    #[test]
    fn fixture_lists_match_catalog_sizes() {
        assert_eq!(BANK_FIXTURES.len(), 10);
        assert_eq!(DEMO_USERS.len(), 20);
    }

    #[test]
    fn demo_mobiles_are_unique() {
        let mut mobiles: Vec<&str> = DEMO_USERS.iter().map(|(_, mobile, _)| *mobile).collect();
        mobiles.sort_unstable();
        mobiles.dedup();
        assert_eq!(mobiles.len(), DEMO_USERS.len());
    }

    #[test]
    fn generators_are_deterministic_for_a_seed() {
        let banks = vec![Uuid::nil(), Uuid::from_u128(1), Uuid::from_u128(2)];
        let now = Utc::now();

        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        assert_eq!(
            random_account(&mut a, &banks, 0, 1, now),
            random_account(&mut b, &banks, 0, 1, now)
        );
        assert_eq!(random_transaction(&mut a, now), random_transaction(&mut b, now));
        assert_eq!(random_saving_goal(&mut a), random_saving_goal(&mut b));
        assert_eq!(random_loan(&mut a), random_loan(&mut b));
    }

    #[test]
    fn account_fixture_respects_ranges() {
        let banks = vec![Uuid::from_u128(9)];
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(1);

        for account_num in 1..=50 {
            let account = random_account(&mut rng, &banks, 2, account_num, now);
            assert!(account.balance >= dec!(1000) && account.balance <= dec!(50000));
            assert!(ACCOUNT_TYPES.contains(&account.account_type.as_str()));
            assert!(account.created_at <= now);
            assert!(account.created_at > now - Duration::days(366));
        }
    }

    #[test]
    fn account_number_encodes_user_and_ordinal() {
        let banks = vec![Uuid::nil()];
        let mut rng = StdRng::seed_from_u64(1);
        let account = random_account(&mut rng, &banks, 2, 1, Utc::now());
        assert_eq!(account.account_number, "ACC00000301");
    }

    #[test]
    fn transaction_amounts_depend_on_type() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let transaction = random_transaction(&mut rng, now);
            match transaction.transaction_type.as_str() {
                "credit" => {
                    assert!(transaction.amount >= dec!(100) && transaction.amount <= dec!(5000));
                }
                "debit" => {
                    assert!(transaction.amount >= dec!(5) && transaction.amount <= dec!(2000));
                }
                other => panic!("unexpected transaction type {other}"),
            }
            assert!(CATEGORIES.contains(&transaction.category.as_str()));
            assert!(DESCRIPTIONS.contains(&transaction.description.as_str()));
        }
    }

    #[test]
    fn saving_goal_progress_stays_under_target() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let goal = random_saving_goal(&mut rng);
            assert!(goal.current_amount <= goal.target_amount);
            assert!(goal.target_amount >= dec!(1000) && goal.target_amount <= dec!(100000));
        }
    }

    #[test]
    fn loan_remaining_stays_under_total() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let loan = random_loan(&mut rng);
            assert!(loan.remaining_amount <= loan.total_amount);
            assert!(loan.emi_amount > Decimal::ZERO);
            assert!(LOAN_TYPES.contains(&loan.loan_type.as_str()));
        }
    }
}
