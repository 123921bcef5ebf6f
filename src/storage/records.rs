//! On-disk row formats
//!
//! Domain enums are closed Rust enums everywhere except here: rows persist
//! them as small integer codes, and decoding an unknown code is a storage
//! error.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Account, AccountId, AccountType, Budget, BudgetId, BudgetPeriod, Category, CategoryId,
    CategoryType, Money, RecordId, Transaction, TransactionId, User, UserId,
};

/// A model that can be kept in a [`Repository`](super::Repository)
pub trait StoredRecord: Clone + Send + Sync {
    /// Surrogate key type
    type Id: RecordId + Send + Sync;

    /// Serialized row shape
    type Row: Serialize + DeserializeOwned;

    /// Entity name used in errors and logs
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;

    fn assign_id(&mut self, id: Self::Id);

    fn to_row(&self) -> Self::Row;

    fn from_row(row: Self::Row) -> LedgerResult<Self>;
}

fn unknown_code(entity: &str, field: &str, code: i16) -> LedgerError {
    LedgerError::Storage(format!("Unknown {} {} code: {}", entity, field, code))
}

impl StoredRecord for User {
    type Id = UserId;
    type Row = User;
    const ENTITY: &'static str = "User";

    fn id(&self) -> UserId {
        self.id
    }

    fn assign_id(&mut self, id: UserId) {
        self.id = id;
    }

    fn to_row(&self) -> User {
        self.clone()
    }

    fn from_row(row: User) -> LedgerResult<Self> {
        Ok(row)
    }
}

/// Account as persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRow {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub account_type: i16,
    pub balance: Money,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl StoredRecord for Account {
    type Id = AccountId;
    type Row = AccountRow;
    const ENTITY: &'static str = "Account";

    fn id(&self) -> AccountId {
        self.id
    }

    fn assign_id(&mut self, id: AccountId) {
        self.id = id;
    }

    fn to_row(&self) -> AccountRow {
        AccountRow {
            id: self.id.get(),
            user_id: self.user_id.get(),
            name: self.name.clone(),
            account_type: self.account_type.code(),
            balance: self.balance,
            currency: self.currency.clone(),
            created_at: self.created_at,
        }
    }

    fn from_row(row: AccountRow) -> LedgerResult<Self> {
        let account_type = AccountType::from_code(row.account_type)
            .ok_or_else(|| unknown_code("account", "type", row.account_type))?;

        Ok(Self {
            id: AccountId::new(row.id),
            user_id: UserId::new(row.user_id),
            name: row.name,
            account_type,
            balance: row.balance,
            currency: row.currency,
            created_at: row.created_at,
        })
    }
}

/// Category as persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub category_type: i16,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl StoredRecord for Category {
    type Id = CategoryId;
    type Row = CategoryRow;
    const ENTITY: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn assign_id(&mut self, id: CategoryId) {
        self.id = id;
    }

    fn to_row(&self) -> CategoryRow {
        CategoryRow {
            id: self.id.get(),
            name: self.name.clone(),
            category_type: self.category_type.code(),
            icon: self.icon.clone(),
            color: self.color.clone(),
        }
    }

    fn from_row(row: CategoryRow) -> LedgerResult<Self> {
        let category_type = CategoryType::from_code(row.category_type)
            .ok_or_else(|| unknown_code("category", "type", row.category_type))?;

        Ok(Self {
            id: CategoryId::new(row.id),
            name: row.name,
            category_type,
            icon: row.icon,
            color: row.color,
        })
    }
}

impl StoredRecord for Transaction {
    type Id = TransactionId;
    type Row = Transaction;
    const ENTITY: &'static str = "Transaction";

    fn id(&self) -> TransactionId {
        self.id
    }

    fn assign_id(&mut self, id: TransactionId) {
        self.id = id;
    }

    fn to_row(&self) -> Transaction {
        self.clone()
    }

    fn from_row(row: Transaction) -> LedgerResult<Self> {
        Ok(row)
    }
}

/// Budget as persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRow {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub amount: Money,
    pub period: i16,
    pub start_date: NaiveDate,
}

impl StoredRecord for Budget {
    type Id = BudgetId;
    type Row = BudgetRow;
    const ENTITY: &'static str = "Budget";

    fn id(&self) -> BudgetId {
        self.id
    }

    fn assign_id(&mut self, id: BudgetId) {
        self.id = id;
    }

    fn to_row(&self) -> BudgetRow {
        BudgetRow {
            id: self.id.get(),
            user_id: self.user_id.get(),
            category_id: self.category_id.get(),
            amount: self.amount,
            period: self.period.code(),
            start_date: self.start_date,
        }
    }

    fn from_row(row: BudgetRow) -> LedgerResult<Self> {
        let period = BudgetPeriod::from_code(row.period)
            .ok_or_else(|| unknown_code("budget", "period", row.period))?;

        Ok(Self {
            id: BudgetId::new(row.id),
            user_id: UserId::new(row.user_id),
            category_id: CategoryId::new(row.category_id),
            amount: row.amount,
            period,
            start_date: row.start_date,
        })
    }
}
