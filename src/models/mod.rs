//! Core data models for Outlay
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expenses, income sources, categories, and money.

pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;

pub use category::{Category, Trip};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{ExpenseId, IncomeId};
pub use income::{Frequency, IncomeKind, IncomeSource, IncomeValidationError, WEEKS_PER_MONTH};
pub use money::Money;
