use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::api::{of_user, wrap, Api};
use crate::error::Result;
use crate::types::{Expense, ExpenseCategory};

/// `/expense_categories`
pub struct ExpenseCategories {
    api: Arc<Api>,
}

impl ExpenseCategories {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self) -> Result<Vec<ExpenseCategory>> {
        self.api.list("/expense_categories", &[])
    }

    pub fn find(&self, id: u64) -> Result<ExpenseCategory> {
        self.api.find(&format!("/expense_categories/{id}"), &[])
    }

    pub fn create(&self, category: &ExpenseCategory) -> Result<ExpenseCategory> {
        let id = self.api.create("/expense_categories", &[], &wrap(category)?)?;
        self.find(id)
    }

    pub fn update(&self, id: u64, category: &ExpenseCategory) -> Result<ExpenseCategory> {
        self.api.put(&format!("/expense_categories/{id}"), &[], &wrap(category)?)?;
        self.find(id)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.api.delete(&format!("/expense_categories/{id}"), &[])
    }

    pub fn activate(&self, id: u64) -> Result<ExpenseCategory> {
        self.api.post(&format!("/expense_categories/{id}/activate"), &[], None)?;
        self.find(id)
    }

    pub fn deactivate(&self, id: u64) -> Result<ExpenseCategory> {
        self.api.post(&format!("/expense_categories/{id}/deactivate"), &[], None)?;
        self.find(id)
    }
}

/// `/expenses`. Every call can act on behalf of another user (`of_user`),
/// which requires admin rights.
pub struct Expenses {
    api: Arc<Api>,
}

impl Expenses {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    /// Expenses recorded on `date`.
    pub fn all(&self, date: NaiveDate, user_id: Option<u64>) -> Result<Vec<Expense>> {
        let path = format!("/expenses/{}/{}", date.ordinal(), date.year());
        self.api.list(&path, &of_user(user_id))
    }

    pub fn find(&self, id: u64, user_id: Option<u64>) -> Result<Expense> {
        self.api.find(&format!("/expenses/{id}"), &of_user(user_id))
    }

    pub fn create(&self, expense: &Expense, user_id: Option<u64>) -> Result<Expense> {
        let id = self.api.create("/expenses", &of_user(user_id), &wrap(expense)?)?;
        self.find(id, user_id)
    }

    pub fn update(&self, id: u64, expense: &Expense, user_id: Option<u64>) -> Result<Expense> {
        self.api.put(&format!("/expenses/{id}"), &of_user(user_id), &wrap(expense)?)?;
        self.find(id, user_id)
    }

    pub fn delete(&self, id: u64, user_id: Option<u64>) -> Result<()> {
        self.api.delete(&format!("/expenses/{id}"), &of_user(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{api, created, ok, RecordingTransport, BASE};

    #[test]
    fn all_uses_day_of_year() {
        let transport = RecordingTransport::new();
        transport.push(ok(
            r#"[{"expense":{"id":1,"project_id":2,"expense_category_id":3,"spent_at":"2024-02-01","total_cost":12.5}}]"#,
        ));
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let expenses = Expenses::new(api(transport.clone())).all(date, Some(8)).unwrap();
        assert_eq!(expenses[0].total_cost, Some(12.5));
        assert_eq!(transport.last().url, format!("{BASE}/expenses/32/2024?of_user=8"));
    }

    #[test]
    fn create_carries_of_user_to_both_calls() {
        let transport = RecordingTransport::new();
        transport.push(created("/expenses/77"));
        transport.push(ok(
            r#"{"expense":{"id":77,"project_id":2,"expense_category_id":3,"spent_at":"2024-02-01","units":10.0}}"#,
        ));
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut input = Expense::new(2, 3, date);
        input.units = Some(10.0);

        let expense = Expenses::new(api(transport.clone())).create(&input, Some(8)).unwrap();
        assert_eq!(expense.id, Some(77));
        let requests = transport.requests();
        assert_eq!(requests[0].url, format!("{BASE}/expenses?of_user=8"));
        assert_eq!(requests[1].url, format!("{BASE}/expenses/77?of_user=8"));
        let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["expense"]["spent_at"], "2024-02-01");
    }

    #[test]
    fn category_deactivate_posts() {
        let transport = RecordingTransport::new();
        transport.push(ok(""));
        transport.push(ok(r#"{"expense_category":{"id":4,"name":"Mileage","deactivated":true}}"#));

        let category = ExpenseCategories::new(api(transport.clone())).deactivate(4).unwrap();
        assert_eq!(category.deactivated, Some(true));
        let req = &transport.requests()[0];
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, format!("{BASE}/expense_categories/4/deactivate"));
    }
}
